//! Submitted cafeteria orders.
//!
//! # Document Store
//! [`Order`] implements the [`Document`](docstore::Document) trait and is kept in the
//! `orders` collection by a [`CollectionActor`](docstore::CollectionActor).
//!
//! Payloads:
//! - Creation parameters ([`OrderCreate`])
//! - Status updates ([`OrderUpdate`])
//! - Queries ([`OrderFilter`])
use crate::model::{MenuItemId, RoomCode, StudentId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Where an order is in the kitchen-to-classroom flow.
///
/// Staff may set any value; [`OrderStatus::next`] gives the usual forward step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "preparing")]
    Preparing,
    /// Older records stored this state as `"active"`.
    #[serde(rename = "on the way", alias = "active")]
    OnTheWay,
    #[serde(rename = "delivered")]
    Delivered,
}

impl OrderStatus {
    /// Orders still owed to a classroom: preparing or on the way.
    pub fn is_active(self) -> bool {
        !matches!(self, OrderStatus::Delivered)
    }

    /// The following state, or `None` once delivered.
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Preparing => Some(OrderStatus::OnTheWay),
            OrderStatus::OnTheWay => Some(OrderStatus::Delivered),
            OrderStatus::Delivered => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Preparing => "preparing",
            OrderStatus::OnTheWay => "on the way",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Credit,
    Bit,
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Cash => f.write_str("cash"),
            PaymentMethod::Credit => f.write_str("credit"),
            PaymentMethod::Bit => f.write_str("bit"),
        }
    }
}

/// One line of an order. Name and price are copied from the menu at submission
/// and do not follow later menu edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub menu_item_id: MenuItemId,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl LineItem {
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub student_id: StudentId,
    pub class_name: String,
    /// Resolved from the class collection at submission; `None` if the class was missing.
    pub room: Option<RoomCode>,
    pub items: Vec<LineItem>,
    pub total_price: f64,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Sum of line subtotals.
    pub fn items_total(items: &[LineItem]) -> f64 {
        items.iter().map(LineItem::subtotal).sum()
    }
}

/// Payload for submitting a new order.
///
/// The total price is derived from `items`; the status always starts at
/// [`OrderStatus::Preparing`].
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub student_id: StudentId,
    pub class_name: String,
    pub items: Vec<LineItem>,
    pub payment_method: PaymentMethod,
    pub created_at: DateTime<Utc>,
}

/// Partial record for orders. Only the status ever changes after submission.
#[derive(Debug, Clone)]
pub struct OrderUpdate {
    pub status: OrderStatus,
}

/// Field queries against the `orders` collection.
#[derive(Debug, Clone)]
pub enum OrderFilter {
    Status(OrderStatus),
    /// Preparing or on the way.
    Active,
    Student(StudentId),
}

impl OrderFilter {
    pub fn matches(&self, order: &Order) -> bool {
        match self {
            OrderFilter::Status(status) => order.status == *status,
            OrderFilter::Active => order.status.is_active(),
            OrderFilter::Student(student_id) => &order.student_id == student_id,
        }
    }
}
