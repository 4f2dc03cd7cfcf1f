//! Demo data: four dishes, four classes, four students and seven orders in a mix of
//! statuses. Everything goes through the public clients, so the seed obeys the same
//! validation as staff input.

use crate::cart::Cart;
use crate::clients::OrderRequest;
use crate::lifecycle::{CafeteriaSystem, SystemError};
use crate::model::{ClassForm, MenuItemForm, OrderStatus, PaymentMethod, Session, StudentForm};
use docstore::CollectionHandle;
use serde::Serialize;
use tracing::{info, warn};

const MENU: [(&str, &str, &str, &str, &str); 4] = [
    ("Pizza", "50", "Classic Margherita Pizza", "gluten, dairy", "20"),
    ("Hamburger", "45", "Beef burger with fries", "gluten, eggs, sesame", "15"),
    ("Salad", "25", "Fresh garden salad", "", "10"),
    ("Pasta", "35", "Pasta with tomato sauce", "gluten", "18"),
];

const CLASSES: [(&str, &str, &str, &str); 4] = [
    ("Class A", "A", "1", "101"),
    ("Class B", "A", "1", "102"),
    ("Class C", "B", "1", "103"),
    ("Class D", "B", "1", "104"),
];

const STUDENTS: [(&str, &str); 4] = [
    ("S001", "Alice Smith"),
    ("S002", "Bob Johnson"),
    ("S003", "Charlie Lee"),
    ("S004", "Dana Kim"),
];

const ORDER_STATUSES: [OrderStatus; 7] = [
    OrderStatus::Preparing,
    OrderStatus::OnTheWay,
    OrderStatus::Delivered,
    OrderStatus::Delivered,
    OrderStatus::Preparing,
    OrderStatus::OnTheWay,
    OrderStatus::Delivered,
];

const PAYMENTS: [PaymentMethod; 3] = [PaymentMethod::Cash, PaymentMethod::Credit, PaymentMethod::Bit];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeedSummary {
    pub menu_items: usize,
    pub classes: usize,
    pub students: usize,
    pub orders: usize,
}

/// Load the demo data into `system`.
pub async fn seed(system: &CafeteriaSystem) -> Result<SeedSummary, SystemError> {
    let staff = Session::staff();
    let mut summary = SeedSummary::default();

    for (name, price, description, allergens, prep_time) in MENU {
        let form = MenuItemForm {
            name: name.to_string(),
            price: price.to_string(),
            description: description.to_string(),
            allergens: allergens.to_string(),
            prep_time: prep_time.to_string(),
            image: None,
        };
        system.menu_client.add_item(&staff, &form).await?;
        summary.menu_items += 1;
    }

    for (name, building, floor, room_number) in CLASSES {
        let form = ClassForm {
            name: name.to_string(),
            building: building.to_string(),
            floor: floor.to_string(),
            room_number: room_number.to_string(),
        };
        system.class_client.add_class(&staff, &form).await?;
        summary.classes += 1;
    }

    for (student_id, full_name) in STUDENTS {
        let form = StudentForm {
            student_id: student_id.to_string(),
            full_name: full_name.to_string(),
        };
        system.student_client.add_student(&staff, &form).await?;
        summary.students += 1;
    }

    let menu = system.menu_client.list().await?;
    let classes = system.class_client.list().await?;
    let students = system.student_client.list().await?;
    if menu.is_empty() || classes.is_empty() || students.is_empty() {
        warn!("Seeded collections are empty, skipping orders");
        return Ok(summary);
    }

    for (i, status) in ORDER_STATUSES.into_iter().enumerate() {
        let mut cart = Cart::new();
        cart.add_item(&menu[i % menu.len()]);
        if i % 2 == 0 {
            cart.add_item(&menu[(i + 1) % menu.len()]);
        }
        let request = OrderRequest {
            class_name: Some(classes[(i + 1) % classes.len()].name.clone()),
            payment_method: Some(PAYMENTS[i % PAYMENTS.len()]),
            student: Some(students[i % students.len()].student_id.clone()),
        };
        let id = system
            .order_client
            .place_order(&staff, &request, &mut cart)
            .await?;
        if status != OrderStatus::Preparing {
            system.order_client.set_status(&staff, id, status).await?;
        }
        summary.orders += 1;
    }

    info!(?summary, "Demo data loaded");
    Ok(summary)
}
