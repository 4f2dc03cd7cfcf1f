//! # Cross-collection lookups
//!
//! Orders point at students by student id and at menu items by item id. Either may
//! have been deleted since the order was placed, so resolution returns an explicit
//! [`Lookup::NotFound`] instead of failing, and the display helpers render it as
//! "Unknown Student" / "Unknown Item".

use crate::model::{MenuItem, MenuItemId, Order, Student, StudentId};
use std::collections::HashMap;

pub const UNKNOWN_STUDENT: &str = "Unknown Student";
pub const UNKNOWN_ITEM: &str = "Unknown Item";

#[derive(Debug, PartialEq)]
pub enum Lookup<'a, T> {
    Found(&'a T),
    NotFound,
}

impl<'a, T> Lookup<'a, T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}

impl<'a, T> From<Option<&'a T>> for Lookup<'a, T> {
    fn from(value: Option<&'a T>) -> Self {
        value.map_or(Lookup::NotFound, Lookup::Found)
    }
}

/// Snapshot of students and menu items used to resolve order references.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    students: HashMap<StudentId, Student>,
    menu: HashMap<MenuItemId, MenuItem>,
}

impl Directory {
    pub fn new(students: Vec<Student>, menu: Vec<MenuItem>) -> Self {
        Self {
            students: students
                .into_iter()
                .map(|s| (s.student_id.clone(), s))
                .collect(),
            menu: menu.into_iter().map(|m| (m.id, m)).collect(),
        }
    }

    pub fn student(&self, id: &StudentId) -> Lookup<'_, Student> {
        self.students.get(id).into()
    }

    pub fn menu_item(&self, id: MenuItemId) -> Lookup<'_, MenuItem> {
        self.menu.get(&id).into()
    }

    pub fn student_name(&self, id: &StudentId) -> &str {
        match self.student(id) {
            Lookup::Found(student) => &student.full_name,
            Lookup::NotFound => UNKNOWN_STUDENT,
        }
    }

    pub fn item_name(&self, id: MenuItemId) -> &str {
        match self.menu_item(id) {
            Lookup::Found(item) => &item.name,
            Lookup::NotFound => UNKNOWN_ITEM,
        }
    }

    /// `"Pizza (x2), Salad (x1)"`; lines whose item is gone read `"Unknown Item"`.
    pub fn item_summary(&self, order: &Order) -> String {
        order
            .items
            .iter()
            .map(|line| match self.menu_item(line.menu_item_id) {
                Lookup::Found(item) => format!("{} (x{})", item.name, line.quantity),
                Lookup::NotFound => UNKNOWN_ITEM.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Preparation estimate using the current menu. Lines whose item is gone count as 0.
    pub fn prep_minutes(&self, order: &Order) -> u32 {
        order
            .items
            .iter()
            .map(|line| match self.menu_item(line.menu_item_id) {
                Lookup::Found(item) => item.prep_time.saturating_mul(line.quantity),
                Lookup::NotFound => 0,
            })
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LineItem, OrderId, OrderStatus, PaymentMethod, StudentDocId};
    use chrono::Utc;

    fn directory() -> Directory {
        Directory::new(
            vec![Student {
                id: StudentDocId(1),
                student_id: StudentId::new("S001"),
                full_name: "Noa Cohen".to_string(),
            }],
            vec![MenuItem {
                id: MenuItemId(1),
                name: "Pizza".to_string(),
                price: 12.0,
                description: String::new(),
                allergens: vec![],
                prep_time: 20,
                image: None,
            }],
        )
    }

    fn order(items: Vec<(u32, u32)>) -> Order {
        Order {
            id: OrderId(1),
            student_id: StudentId::new("S404"),
            class_name: "Math".to_string(),
            room: None,
            items: items
                .into_iter()
                .map(|(id, quantity)| LineItem {
                    menu_item_id: MenuItemId(id),
                    name: "snapshot".to_string(),
                    price: 1.0,
                    quantity,
                })
                .collect(),
            total_price: 0.0,
            payment_method: PaymentMethod::Cash,
            status: OrderStatus::Preparing,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_missing_references_render_placeholders() {
        let dir = directory();
        assert_eq!(dir.student_name(&StudentId::new("S001")), "Noa Cohen");
        assert_eq!(dir.student_name(&StudentId::new("S404")), UNKNOWN_STUDENT);
        assert!(!dir.menu_item(MenuItemId(9)).is_found());
        assert_eq!(dir.item_name(MenuItemId(9)), UNKNOWN_ITEM);
    }

    #[test]
    fn test_item_summary_and_prep_time() {
        let dir = directory();
        let order = order(vec![(1, 2), (9, 5)]);
        assert_eq!(dir.item_summary(&order), "Pizza (x2), Unknown Item");
        assert_eq!(dir.prep_minutes(&order), 40);
    }
}
