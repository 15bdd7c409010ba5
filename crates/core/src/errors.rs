use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Slot no longer available: {0}")]
    Conflict(String),

    #[error("Stale selection: {0}")]
    StaleSelection(String),

    #[error("Retrieval error: {0}")]
    Retrieval(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl SlotError {
    /// The client should re-resolve slots and pick another one.
    pub fn is_conflict(&self) -> bool {
        matches!(self, SlotError::Conflict(_) | SlotError::StaleSelection(_))
    }

    /// The same request may be submitted again unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SlotError::Retrieval(_))
    }
}

pub type SlotResult<T> = Result<T, SlotError>;
