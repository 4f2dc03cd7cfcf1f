use crate::lookup::Directory;
use crate::model::{Order, OrderStatus, PaymentMethod, StudentId};
use crate::reports::Tally;
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike};
use serde::Serialize;
use std::collections::BTreeMap;

/// Whose orders a dashboard covers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum DashboardScope {
    #[default]
    All,
    Student(StudentId),
}

impl DashboardScope {
    pub fn includes(&self, order: &Order) -> bool {
        match self {
            DashboardScope::All => true,
            DashboardScope::Student(id) => &order.student_id == id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranked {
    pub label: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopStudent {
    pub student_id: StudentId,
    pub name: String,
    pub orders: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPoint {
    /// `"Jan 2024"`
    pub label: String,
    pub year: i32,
    pub month: u32,
    pub revenue: f64,
    pub orders: u64,
}

/// Statistics over delivered orders.
///
/// Hour, day and month buckets use the time zone of the `now` passed to
/// [`Dashboard::build`]. Rankings break ties in favour of the first key met while
/// scanning the orders in the order given.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub scope: DashboardScope,
    pub delivered_orders: usize,
    pub total_revenue: f64,
    /// 0 when nothing has been delivered.
    pub average_order_value: f64,
    pub distinct_students: usize,
    pub top_student: Option<TopStudent>,
    pub top_payment_method: Option<PaymentMethod>,
    /// By cumulative quantity across all lines.
    pub popular_dish: Option<Ranked>,
    pub dish_quantities: Vec<Ranked>,
    /// Hour of day, 0-23.
    pub peak_hour: Option<u32>,
    pub orders_today: usize,
    pub orders_this_month: usize,
    pub most_common_class: Option<Ranked>,
    pub class_distribution: Vec<Ranked>,
    /// Chronological.
    pub monthly: Vec<MonthlyPoint>,
}

impl Dashboard {
    pub fn build<Tz: TimeZone>(
        orders: &[Order],
        directory: &Directory,
        scope: &DashboardScope,
        now: &DateTime<Tz>,
    ) -> Self {
        let tz = now.timezone();
        let today = now.date_naive();
        let delivered: Vec<&Order> = orders
            .iter()
            .filter(|o| o.status == OrderStatus::Delivered && scope.includes(o))
            .collect();

        let mut students = Tally::new();
        let mut payments = Tally::new();
        let mut dishes = Tally::new();
        let mut hours = Tally::new();
        let mut classes = Tally::new();
        let mut months: BTreeMap<(i32, u32), (f64, u64)> = BTreeMap::new();
        let mut orders_today = 0;
        let mut orders_this_month = 0;

        for order in &delivered {
            let local = order.created_at.with_timezone(&tz);

            students.increment(order.student_id.clone());
            payments.increment(order.payment_method);
            for line in &order.items {
                dishes.add(line.name.clone(), u64::from(line.quantity));
            }
            hours.increment(local.hour());
            if !order.class_name.is_empty() {
                classes.increment(order.class_name.clone());
            }

            let slot = months.entry((local.year(), local.month())).or_default();
            slot.0 += order.total_price;
            slot.1 += 1;

            if local.date_naive() == today {
                orders_today += 1;
            }
            if local.year() == now.year() && local.month() == now.month() {
                orders_this_month += 1;
            }
        }

        let total_revenue: f64 = delivered.iter().map(|o| o.total_price).sum();
        let average_order_value = if delivered.is_empty() {
            0.0
        } else {
            total_revenue / delivered.len() as f64
        };

        Self {
            scope: scope.clone(),
            delivered_orders: delivered.len(),
            total_revenue,
            average_order_value,
            distinct_students: students.len(),
            top_student: students.top().map(|(id, orders)| TopStudent {
                student_id: id.clone(),
                name: directory.student_name(id).to_string(),
                orders,
            }),
            top_payment_method: payments.top().map(|(method, _)| *method),
            popular_dish: dishes.top().map(ranked),
            dish_quantities: dishes.iter().map(ranked).collect(),
            peak_hour: hours.top().map(|(hour, _)| *hour),
            orders_today,
            orders_this_month,
            most_common_class: classes.top().map(ranked),
            class_distribution: classes.iter().map(ranked).collect(),
            monthly: months
                .into_iter()
                .map(|((year, month), (revenue, orders))| MonthlyPoint {
                    label: month_label(year, month),
                    year,
                    month,
                    revenue,
                    orders,
                })
                .collect(),
        }
    }
}

fn ranked((label, count): (&String, u64)) -> Ranked {
    Ranked {
        label: label.clone(),
        count,
    }
}

fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LineItem, MenuItemId, OrderId, Student, StudentDocId};
    use chrono::{FixedOffset, Utc};

    struct Fixture {
        orders: Vec<Order>,
    }

    impl Fixture {
        fn new() -> Self {
            Self { orders: Vec::new() }
        }

        fn order(
            mut self,
            student: &str,
            class_name: &str,
            lines: &[(&str, f64, u32)],
            status: OrderStatus,
            at: DateTime<Utc>,
        ) -> Self {
            let items: Vec<LineItem> = lines
                .iter()
                .enumerate()
                .map(|(i, (name, price, quantity))| LineItem {
                    menu_item_id: MenuItemId(i as u32 + 1),
                    name: name.to_string(),
                    price: *price,
                    quantity: *quantity,
                })
                .collect();
            self.orders.push(Order {
                id: OrderId(self.orders.len() as u32 + 1),
                student_id: StudentId::new(student),
                class_name: class_name.to_string(),
                room: None,
                total_price: Order::items_total(&items),
                items,
                payment_method: PaymentMethod::Cash,
                status,
                created_at: at,
            });
            self
        }
    }

    fn at(month: u32, day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, month, day, hour, 0, 0).unwrap()
    }

    fn directory() -> Directory {
        Directory::new(
            vec![Student {
                id: StudentDocId(1),
                student_id: StudentId::new("S001"),
                full_name: "Noa Cohen".to_string(),
            }],
            vec![],
        )
    }

    #[test]
    fn test_no_delivered_orders_means_zero_average() {
        let orders = Fixture::new()
            .order("S001", "Math", &[("Pizza", 10.0, 1)], OrderStatus::Preparing, at(1, 1, 9))
            .orders;
        let dash = Dashboard::build(&orders, &directory(), &DashboardScope::All, &at(1, 1, 12));

        assert_eq!(dash.delivered_orders, 0);
        assert_eq!(dash.total_revenue, 0.0);
        assert_eq!(dash.average_order_value, 0.0);
        assert!(dash.top_student.is_none());
        assert!(dash.popular_dish.is_none());
        assert!(dash.monthly.is_empty());
    }

    #[test]
    fn test_revenue_and_average_over_delivered_only() {
        let orders = Fixture::new()
            .order("S001", "Math", &[("Pizza", 25.0, 2)], OrderStatus::Delivered, at(1, 1, 9))
            .order("S002", "Art", &[("Salad", 30.0, 1)], OrderStatus::Delivered, at(1, 2, 9))
            .order("S002", "Art", &[("Salad", 99.0, 1)], OrderStatus::OnTheWay, at(1, 2, 9))
            .orders;
        let dash = Dashboard::build(&orders, &directory(), &DashboardScope::All, &at(1, 2, 12));

        assert_eq!(dash.delivered_orders, 2);
        assert_eq!(dash.total_revenue, 80.0);
        assert_eq!(dash.average_order_value, 40.0);
        assert_eq!(dash.distinct_students, 2);
    }

    #[test]
    fn test_popular_dish_tie_goes_to_first_seen() {
        let orders = Fixture::new()
            .order("S001", "Math", &[("Pizza", 10.0, 2)], OrderStatus::Delivered, at(1, 1, 9))
            .order("S001", "Math", &[("Pasta", 10.0, 1)], OrderStatus::Delivered, at(1, 1, 9))
            .order("S001", "Math", &[("Pasta", 10.0, 1)], OrderStatus::Delivered, at(1, 1, 9))
            .orders;
        let dash = Dashboard::build(&orders, &directory(), &DashboardScope::All, &at(1, 1, 12));

        assert_eq!(
            dash.popular_dish,
            Some(Ranked {
                label: "Pizza".to_string(),
                count: 2
            })
        );
        assert_eq!(dash.dish_quantities.len(), 2);
    }

    #[test]
    fn test_top_student_resolves_name() {
        let orders = Fixture::new()
            .order("S009", "Math", &[("Pizza", 10.0, 1)], OrderStatus::Delivered, at(1, 1, 9))
            .order("S001", "Math", &[("Pizza", 10.0, 1)], OrderStatus::Delivered, at(1, 1, 9))
            .order("S001", "Math", &[("Pizza", 10.0, 1)], OrderStatus::Delivered, at(1, 1, 9))
            .orders;
        let dash = Dashboard::build(&orders, &directory(), &DashboardScope::All, &at(1, 1, 12));

        let top = dash.top_student.unwrap();
        assert_eq!(top.student_id, StudentId::new("S001"));
        assert_eq!(top.name, "Noa Cohen");
        assert_eq!(top.orders, 2);
    }

    #[test]
    fn test_student_scope_filters_orders() {
        let orders = Fixture::new()
            .order("S001", "Math", &[("Pizza", 10.0, 1)], OrderStatus::Delivered, at(1, 1, 9))
            .order("S002", "Art", &[("Salad", 20.0, 1)], OrderStatus::Delivered, at(1, 1, 9))
            .order("S001", "Art", &[("Soup", 5.0, 1)], OrderStatus::Delivered, at(1, 1, 9))
            .order("S001", "Math", &[("Soup", 5.0, 1)], OrderStatus::Delivered, at(1, 1, 9))
            .orders;
        let scope = DashboardScope::Student(StudentId::new("S001"));
        let dash = Dashboard::build(&orders, &directory(), &scope, &at(1, 1, 12));

        assert_eq!(dash.delivered_orders, 3);
        assert_eq!(dash.total_revenue, 20.0);
        assert_eq!(dash.most_common_class.unwrap().label, "Math");
        assert_eq!(
            dash.class_distribution,
            vec![
                Ranked {
                    label: "Math".to_string(),
                    count: 2
                },
                Ranked {
                    label: "Art".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_monthly_series_is_chronological() {
        let orders = Fixture::new()
            .order("S001", "Math", &[("Pizza", 10.0, 1)], OrderStatus::Delivered, at(3, 1, 9))
            .order("S001", "Math", &[("Pizza", 15.0, 1)], OrderStatus::Delivered, at(1, 5, 9))
            .order("S001", "Math", &[("Pizza", 20.0, 1)], OrderStatus::Delivered, at(3, 9, 9))
            .orders;
        let dash = Dashboard::build(&orders, &directory(), &DashboardScope::All, &at(3, 9, 12));

        let labels: Vec<&str> = dash.monthly.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["Jan 2024", "Mar 2024"]);
        assert_eq!(dash.monthly[1].revenue, 30.0);
        assert_eq!(dash.monthly[1].orders, 2);
        assert_eq!(dash.orders_this_month, 2);
        assert_eq!(dash.orders_today, 1);
    }

    #[test]
    fn test_peak_hour_uses_callers_time_zone() {
        let orders = Fixture::new()
            .order("S001", "Math", &[("Pizza", 10.0, 1)], OrderStatus::Delivered, at(1, 1, 9))
            .order("S001", "Math", &[("Pizza", 10.0, 1)], OrderStatus::Delivered, at(1, 1, 10))
            .order("S001", "Math", &[("Pizza", 10.0, 1)], OrderStatus::Delivered, at(1, 1, 10))
            .orders;

        let utc = Dashboard::build(&orders, &directory(), &DashboardScope::All, &at(1, 1, 12));
        assert_eq!(utc.peak_hour, Some(10));

        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let local_now = at(1, 1, 12).with_timezone(&plus_two);
        let local = Dashboard::build(&orders, &directory(), &DashboardScope::All, &local_now);
        assert_eq!(local.peak_hour, Some(12));
    }
}
