use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] pin_core::Error),
    #[error(transparent)]
    Api(#[from] pin_core::api::ApiError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Could not load settings: {0}")]
    Refresh(&'static str),
    #[error(
        "Companion API is not configured. Run `pin config init --api-url <URL>` or set PIN_API_BASE_URL."
    )]
    ApiNotConfigured,
}
