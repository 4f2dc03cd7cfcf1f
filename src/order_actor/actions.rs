//! Custom actions for the order collection.
//!
//! Handled by [`Document::handle_action`](docstore::Document::handle_action) on
//! [`Order`](crate::model::Order).

use crate::model::OrderStatus;

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Move the order one step along `preparing -> on the way -> delivered`.
    ///
    /// # Errors
    /// Fails with [`OrderError::AlreadyDelivered`](super::OrderError::AlreadyDelivered)
    /// on a delivered order.
    Advance,
}

/// Results from [`OrderAction`]s; variants match 1:1.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    /// The status the order moved to.
    Advance(OrderStatus),
}
