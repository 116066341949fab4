//! Error taxonomy shared by every todo gateway.
//!
//! # Design
//! Three kinds only. `Validation` and `NotFound` carry what the caller needs
//! to see; `Infrastructure` wraps whatever the storage backend raised and is
//! never shown to HTTP clients verbatim.

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by todo gateway operations.
#[derive(Debug, Error)]
pub enum TodoError {
    /// Caller input violates a precondition (empty or oversized text).
    #[error("{0}")]
    Validation(String),

    /// No todo exists with the given id.
    #[error("todo {id} not found")]
    NotFound { id: i32 },

    /// The storage backend was unreachable or a statement failed.
    #[error("storage failure: {0}")]
    Infrastructure(#[source] BoxError),
}

impl TodoError {
    pub fn validation(message: impl Into<String>) -> Self {
        TodoError::Validation(message.into())
    }

    pub fn infrastructure<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        TodoError::Infrastructure(err.into())
    }
}
