//! Error types for availability-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid interval [{start}, {end}): start must be before end")]
    InvalidInterval { start: u32, end: u32 },

    #[error("Inclusive end {end} cannot be converted to a half-open bound")]
    BoundaryOverflow { end: u32 },

    #[error("Invalid day length: {minutes} minutes")]
    InvalidDay { minutes: u32 },

    #[error("Invalid query document: {0}")]
    Document(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
