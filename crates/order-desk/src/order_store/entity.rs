//! [`ActorEntity`] implementation for [`Order`].
//!
//! The store keeps whole orders. It refuses orders whose amounts do not add up, status updates
//! that move an order backwards, and completions without payment.

use super::error::StoreError;
use crate::model::{Order, OrderAction, OrderId, StatusUpdate};
use async_trait::async_trait;
use record_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = Order;
    type Update = StatusUpdate;
    type Action = OrderAction;
    type ActionResult = String;
    type Context = ();
    type Error = StoreError;

    /// The saved record is the submitted order with its new id.
    fn from_create_params(id: OrderId, mut order: Order) -> Result<Self, StoreError> {
        order.record_id = Some(id);
        Ok(order)
    }

    async fn on_create(&mut self, _ctx: &()) -> Result<(), StoreError> {
        self.validate()
            .map_err(|defect| StoreError::Rejected(defect.to_string()))?;
        if self.status.is_terminal() && !self.paid {
            return Err(StoreError::Rejected(format!(
                "order {} is {} but unpaid",
                self.code, self.status
            )));
        }
        Ok(())
    }

    async fn on_update(&mut self, update: StatusUpdate, _ctx: &()) -> Result<(), StoreError> {
        if !self.status.can_become(update.status) {
            return Err(StoreError::Rejected(format!(
                "order {} cannot move from {} back to {}",
                self.code, self.status, update.status
            )));
        }
        if self.paid && !update.paid {
            return Err(StoreError::Rejected(format!(
                "order {} is already paid",
                self.code
            )));
        }
        if update.status.is_terminal() && !update.paid {
            return Err(StoreError::Rejected(format!(
                "order {} cannot be {} while unpaid",
                self.code, update.status
            )));
        }
        self.status = update.status;
        self.paid = update.paid;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &(),
    ) -> Result<String, StoreError> {
        match action {
            OrderAction::Describe => Ok(self.summary()),
        }
    }
}
