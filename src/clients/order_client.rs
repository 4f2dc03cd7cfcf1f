//! # Order Client
//!
//! Provides a high-level API for the `orders` collection: submitting a cart, moving
//! orders through their statuses and the active/history queries.
//! It wraps a `CollectionClient<Order>`; room resolution happens in the order actor's
//! `on_create` hook.
use crate::cart::Cart;
use crate::model::{
    Order, OrderCreate, OrderFilter, OrderId, OrderStatus, OrderUpdate, PaymentMethod, Role,
    Session, StudentId,
};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use crate::validation::ValidationError;
use async_trait::async_trait;
use chrono::Utc;
use docstore::{CollectionClient, CollectionHandle, StoreError};
use tracing::{debug, info, instrument};

/// The selections made alongside the cart when submitting an order.
///
/// `student` is only read for staff sessions; a student session always orders for
/// itself.
#[derive(Debug, Clone, Default)]
pub struct OrderRequest {
    pub class_name: Option<String>,
    pub payment_method: Option<PaymentMethod>,
    pub student: Option<StudentId>,
}

/// Client for interacting with the order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: CollectionClient<Order>,
}

impl OrderClient {
    pub fn new(inner: CollectionClient<Order>) -> Self {
        Self { inner }
    }

    /// Submit the cart as a new order and clear it.
    ///
    /// Checks, in order: class selected, payment method selected, cart not empty,
    /// student selected (staff sessions only). The student id is not looked up; an
    /// unregistered id shows as "Unknown Student" in listings. Any failure is returned
    /// before the store is contacted and the cart is left as it was. The cart is also
    /// kept if the store rejects the order.
    #[instrument(skip(self, cart), fields(lines = cart.len()))]
    pub async fn place_order(
        &self,
        session: &Session,
        request: &OrderRequest,
        cart: &mut Cart,
    ) -> Result<OrderId, OrderError> {
        let class_name = request
            .class_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(ValidationError::ClassNotSelected)?;
        let payment_method = request
            .payment_method
            .ok_or(ValidationError::PaymentNotSelected)?;
        if cart.is_empty() {
            return Err(ValidationError::EmptyCart.into());
        }
        let student_id = match &session.role {
            Role::Student(id) => id.clone(),
            Role::Staff => request
                .student
                .clone()
                .ok_or(ValidationError::StudentNotSelected)?,
        };

        let params = OrderCreate {
            student_id,
            class_name: class_name.to_string(),
            items: cart.line_items(),
            payment_method,
            created_at: Utc::now(),
        };
        debug!(total = cart.total_price(), "Sending request");
        let id = self.inner.add(params).await?;

        cart.clear();
        info!(%id, "Order placed");
        Ok(id)
    }

    /// Set an order's status to any value. Staff only.
    #[instrument(skip(self))]
    pub async fn set_status(
        &self,
        session: &Session,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, OrderError> {
        session.require_staff()?;
        debug!("Sending request");
        let order = self.inner.update(id, OrderUpdate { status }).await?;
        info!(%id, %status, "Status updated");
        Ok(order)
    }

    /// Move an order one step forward. Staff only; fails on a delivered order.
    #[instrument(skip(self))]
    pub async fn advance(&self, session: &Session, id: OrderId) -> Result<OrderStatus, OrderError> {
        session.require_staff()?;
        debug!("Sending request");
        match self.inner.perform_action(id, OrderAction::Advance).await? {
            OrderActionResult::Advance(status) => {
                info!(%id, %status, "Order advanced");
                Ok(status)
            }
        }
    }

    /// Remove an order outright. Not part of the normal flow; used when resetting the
    /// system. Staff only.
    #[instrument(skip(self))]
    pub async fn delete_order(&self, session: &Session, id: OrderId) -> Result<(), OrderError> {
        session.require_staff()?;
        debug!("Sending request");
        Ok(self.inner.delete(id).await?)
    }

    /// Orders still preparing or on the way.
    #[instrument(skip(self))]
    pub async fn active_orders(&self) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        Ok(self.inner.find(OrderFilter::Active).await?)
    }

    /// Delivered orders.
    #[instrument(skip(self))]
    pub async fn history(&self) -> Result<Vec<Order>, OrderError> {
        self.by_status(OrderStatus::Delivered).await
    }

    #[instrument(skip(self))]
    pub async fn by_status(&self, status: OrderStatus) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        Ok(self.inner.find(OrderFilter::Status(status)).await?)
    }

    /// Every order placed for one student, whatever its status.
    #[instrument(skip(self))]
    pub async fn orders_for(&self, student_id: &StudentId) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        Ok(self
            .inner
            .find(OrderFilter::Student(student_id.clone()))
            .await?)
    }
}

#[async_trait]
impl CollectionHandle<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &CollectionClient<Order> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        OrderError::from(e)
    }
}
