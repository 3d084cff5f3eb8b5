//! Error types for the order store.

use record_actor::FrameworkError;
use thiserror::Error;

/// Failures reported by the order store.
///
/// `Unavailable` is the "connectivity lost" case: the store task could not be reached at all.
/// The other variants mean the store answered and said no.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("order store unavailable: {0}")]
    Unavailable(String),

    #[error("order record not found: {0}")]
    NotFound(String),

    #[error("order store rejected the request: {0}")]
    Rejected(String),
}

impl StoreError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

impl From<FrameworkError> for StoreError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::ActorClosed | FrameworkError::ActorDropped => {
                StoreError::Unavailable(e.to_string())
            }
            FrameworkError::NotFound(id) => StoreError::NotFound(id),
            FrameworkError::EntityError(inner) => StoreError::Rejected(inner.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_errors_map_by_kind() {
        assert!(StoreError::from(FrameworkError::ActorClosed).is_unavailable());
        assert!(StoreError::from(FrameworkError::ActorDropped).is_unavailable());
        assert_eq!(
            StoreError::from(FrameworkError::NotFound("order_7".to_string())),
            StoreError::NotFound("order_7".to_string())
        );

        let rejected = StoreError::from(FrameworkError::EntityError(Box::new(
            std::io::Error::other("bad totals"),
        )));
        assert_eq!(rejected, StoreError::Rejected("bad totals".to_string()));
    }
}
