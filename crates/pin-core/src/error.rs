//! Error types for pin-core

use thiserror::Error;

use crate::api::ApiError;

/// Result type alias using pin-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pin-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// libSQL error
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Remote API error
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The screen is loading and the requested interaction is disabled
    #[error("Settings are still loading")]
    Busy,

    /// Action has no backend support
    #[error("{0} is not supported yet")]
    Unsupported(&'static str),
}
