//! Error types for the menu store.

use record_actor::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    #[error("Menu item not found: {0}")]
    NotFound(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    #[error("Menu item {0} is required")]
    MissingField(&'static str),

    /// The menu store refused the request; carries the store's message.
    #[error("Menu store rejected the request: {0}")]
    Rejected(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for MenuError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => MenuError::NotFound(id),
            FrameworkError::EntityError(inner) => MenuError::Rejected(inner.to_string()),
            other => MenuError::ActorCommunicationError(other.to_string()),
        }
    }
}
