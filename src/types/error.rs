//! Error types for the swing-topology library.

use thiserror::Error;

/// All errors that can occur in the swing-topology library.
#[derive(Error, Debug)]
pub enum TopoError {
    /// Dequeue on a queue with no items.
    #[error("Cannot dequeue from an empty queue")]
    EmptyQueue,

    /// A generator or helper received an argument outside its domain.
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// The swing step is too large for exact 64-bit arithmetic.
    #[error("Step {step} out of range (maximum is {max})")]
    StepOutOfRange { step: u32, max: u32 },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TopoError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Convenience result type for swing-topology operations.
pub type TopoResult<T> = Result<T, TopoError>;
