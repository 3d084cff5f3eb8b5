//! # Framework Errors
//!
//! Errors raised by the record actor plumbing itself. Record-specific failures travel inside
//! [`FrameworkError::EntityError`].

/// Errors that can occur between a client and its record actor.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    /// The actor's request channel is closed (the actor task has stopped).
    #[error("Actor closed")]
    ActorClosed,
    /// The actor dropped the response channel before answering.
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// True when the actor could not be reached at all, as opposed to the actor answering with
    /// a rejection.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::ActorClosed | Self::ActorDropped)
    }
}
