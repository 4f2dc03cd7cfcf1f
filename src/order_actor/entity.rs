//! Document trait implementation for [`Order`].
//!
//! The order collection depends on the class collection: `on_create` copies the room
//! code of the named class onto the new order.

use super::actions::{OrderAction, OrderActionResult};
use crate::clients::ClassClient;
use crate::model::{Order, OrderCreate, OrderFilter, OrderId, OrderStatus, OrderUpdate};
use crate::order_actor::OrderError;
use crate::validation::ValidationError;
use async_trait::async_trait;
use docstore::Document;
use tracing::{debug, warn};

#[async_trait]
impl Document for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Filter = OrderFilter;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = ClassClient;
    type Error = OrderError;

    const COLLECTION: &'static str = "orders";

    /// Creates a new order in the `preparing` state. The total is the sum of the
    /// line subtotals.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        if params.class_name.is_empty() {
            return Err(ValidationError::ClassNotSelected.into());
        }
        if params.items.is_empty() {
            return Err(ValidationError::EmptyCart.into());
        }
        Ok(Self {
            id,
            student_id: params.student_id,
            class_name: params.class_name,
            room: None,
            total_price: Order::items_total(&params.items),
            items: params.items,
            payment_method: params.payment_method,
            status: OrderStatus::Preparing,
            created_at: params.created_at,
        })
    }

    fn matches(&self, filter: &OrderFilter) -> bool {
        filter.matches(self)
    }

    /// Resolves the room from the class collection.
    ///
    /// A class that cannot be found leaves `room` empty; the order is still accepted.
    async fn on_create(&mut self, classes: &ClassClient) -> Result<(), OrderError> {
        match classes.find_by_name(&self.class_name).await? {
            Some(class) => {
                debug!(class = %class.name, room = %class.room, "Room resolved");
                self.room = Some(class.room);
            }
            None => warn!(class = %self.class_name, "Class not found, room left empty"),
        }
        Ok(())
    }

    /// Sets the status. Any value is accepted; staff may also move an order backwards.
    async fn on_update(&mut self, update: OrderUpdate, _ctx: &ClassClient) -> Result<(), OrderError> {
        self.status = update.status;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &ClassClient,
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::Advance => match self.status.next() {
                Some(next) => {
                    self.status = next;
                    Ok(OrderActionResult::Advance(next))
                }
                None => Err(OrderError::AlreadyDelivered(self.id.to_string())),
            },
        }
    }
}
