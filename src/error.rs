//! Error taxonomy for the pagination widget

use thiserror::Error;

/// Errors surfaced while building or wiring a pagination control.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// The options could not produce a usable controller (missing or
    /// unresolvable container, wrongly typed field, zero row size or step).
    #[error("invalid pagination configuration: {0}")]
    InvalidConfiguration(String),
    /// A selection listener was registered with something that cannot be called.
    #[error("pagination callback is not a function")]
    InvalidCallback,
}

impl PaginationError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }
}

impl From<serde_json::Error> for PaginationError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfiguration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PaginationError>;
