//! Errors returned by the order desk.

use crate::model::{CartError, OrderDefect, OrderStatus};
use crate::order_store::StoreError;
use crate::queue::QueueError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DeskError {
    /// Try again after serving an order.
    #[error("active queue is full ({capacity} orders)")]
    QueueFull { capacity: usize },

    #[error("no orders waiting")]
    QueueEmpty,

    #[error("order {code} cannot move from {from} to {to}")]
    IllegalTransition {
        code: String,
        from: OrderStatus,
        to: OrderStatus,
    },

    #[error("invalid order: {0}")]
    InvalidOrder(#[from] OrderDefect),

    #[error("cannot check out: {0}")]
    Cart(#[from] CartError),

    /// The store failed and nothing was changed locally.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<QueueError> for DeskError {
    fn from(e: QueueError) -> Self {
        match e {
            QueueError::Full { capacity } => DeskError::QueueFull { capacity },
            QueueError::Empty => DeskError::QueueEmpty,
        }
    }
}
