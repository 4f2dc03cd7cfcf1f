//! # Order views
//!
//! Snapshots of the `orders` collection as the kitchen and history screens see them.
//! A view only changes when it is reloaded or after the store has confirmed a status
//! change; a failed update leaves it exactly as it was.

use crate::clients::OrderClient;
use crate::lookup::Directory;
use crate::model::{Order, OrderId, OrderStatus, PaymentMethod, RoomCode, Session};
use crate::order_actor::OrderError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

/// One order resolved for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRow {
    pub id: OrderId,
    pub student_name: String,
    pub class_name: String,
    pub room: Option<RoomCode>,
    pub items: String,
    pub total_price: f64,
    pub prep_minutes: u32,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl OrderRow {
    pub fn new(order: &Order, directory: &Directory) -> Self {
        Self {
            id: order.id,
            student_name: directory.student_name(&order.student_id).to_string(),
            class_name: order.class_name.clone(),
            room: order.room.clone(),
            items: directory.item_summary(order),
            total_price: order.total_price,
            prep_minutes: directory.prep_minutes(order),
            payment_method: order.payment_method,
            status: order.status,
            created_at: order.created_at,
        }
    }
}

/// Orders that are preparing or on the way.
#[derive(Debug, Clone, Default)]
pub struct ActiveOrdersView {
    orders: Vec<Order>,
}

impl ActiveOrdersView {
    pub async fn load(client: &OrderClient) -> Result<Self, OrderError> {
        let orders = client.active_orders().await?;
        debug!(count = orders.len(), "Active orders loaded");
        Ok(Self { orders })
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn rows(&self, directory: &Directory) -> Vec<OrderRow> {
        self.orders
            .iter()
            .map(|order| OrderRow::new(order, directory))
            .collect()
    }

    /// Set a status through the store, then mirror the confirmed result. An order
    /// that is no longer active drops out of the view.
    pub async fn set_status(
        &mut self,
        client: &OrderClient,
        session: &Session,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<(), OrderError> {
        let updated = client.set_status(session, id, status).await?;
        self.apply(updated);
        Ok(())
    }

    /// Advance an order one step through the store, then mirror it.
    pub async fn advance(
        &mut self,
        client: &OrderClient,
        session: &Session,
        id: OrderId,
    ) -> Result<OrderStatus, OrderError> {
        let status = client.advance(session, id).await?;
        if let Some(order) = self.orders.iter_mut().find(|o| o.id == id) {
            order.status = status;
        }
        self.orders.retain(|o| o.status.is_active());
        Ok(status)
    }

    fn apply(&mut self, updated: Order) {
        if !updated.status.is_active() {
            self.orders.retain(|o| o.id != updated.id);
        } else if let Some(order) = self.orders.iter_mut().find(|o| o.id == updated.id) {
            *order = updated;
        }
    }
}

/// Delivered orders, searchable.
#[derive(Debug, Clone, Default)]
pub struct OrderHistoryView {
    orders: Vec<Order>,
}

impl OrderHistoryView {
    pub async fn load(client: &OrderClient) -> Result<Self, OrderError> {
        let orders = client.history().await?;
        debug!(count = orders.len(), "Order history loaded");
        Ok(Self { orders })
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Orders whose student name, item summary, id or class name contain `term`,
    /// ignoring case. An empty term matches everything.
    pub fn search(&self, directory: &Directory, term: &str) -> Vec<&Order> {
        let needle = term.trim().to_lowercase();
        self.orders
            .iter()
            .filter(|order| needle.is_empty() || matches_search(order, directory, &needle))
            .collect()
    }
}

fn matches_search(order: &Order, directory: &Directory, needle: &str) -> bool {
    [
        directory.student_name(&order.student_id).to_lowercase(),
        directory.item_summary(order).to_lowercase(),
        order.id.to_string(),
        order.class_name.to_lowercase(),
    ]
    .iter()
    .any(|field| field.contains(needle))
}
