//! The order status machine.
//!
//! ```text
//! PENDING ──serve──▶ IN_PROGRESS ──settle──▶ COMPLETED
//!    └───────────────settle──────────────────────▲
//! ```
//!
//! `PENDING` orders wait in the active queue. Serving dequeues the order and moves it to
//! `IN_PROGRESS`. Settling (payment) moves any non-terminal order to `COMPLETED` and sets the
//! paid flag, so an order is always paid once it is completed.
//!
//! The labels `SERVED` and `PAID` used by older terminals parse as `IN_PROGRESS` and
//! `COMPLETED`.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    #[serde(alias = "SERVED")]
    InProgress,
    #[serde(alias = "PAID")]
    Completed,
}

/// A move the status machine does not allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cannot move order from {from} to {to}")]
pub struct TransitionError {
    pub from: OrderStatus,
    pub to: OrderStatus,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
        }
    }

    fn rank(self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::InProgress => 1,
            Self::Completed => 2,
        }
    }

    /// Orders with this status belong in the active queue.
    pub fn is_queued(self) -> bool {
        self == Self::Pending
    }

    /// No further transition is expected.
    pub fn is_terminal(self) -> bool {
        self == Self::Completed
    }

    /// Status moves only forward; staying put is allowed.
    pub fn can_become(self, next: OrderStatus) -> bool {
        next.rank() >= self.rank()
    }

    /// `PENDING → IN_PROGRESS`. Serving anything else is illegal.
    pub fn serve(self) -> Result<Self, TransitionError> {
        match self {
            Self::Pending => Ok(Self::InProgress),
            from => Err(TransitionError {
                from,
                to: Self::InProgress,
            }),
        }
    }

    /// Any status settles to `COMPLETED`. Settling a completed order is a no-op.
    pub fn settle(self) -> Self {
        Self::Completed
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace(['-', ' '], "_").as_str() {
            "PENDING" => Ok(Self::Pending),
            "IN_PROGRESS" | "SERVED" => Ok(Self::InProgress),
            "COMPLETED" | "PAID" => Ok(Self::Completed),
            other => Err(format!("unknown order status: {other}")),
        }
    }
}
