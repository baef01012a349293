//! Remote companion API.
//!
//! The settings controller only depends on the [`CompanionApi`] trait so it can
//! be driven by the HTTP client in production and by fakes in tests.

mod http;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{DeviceInfo, FeatureFlag, Subscription};

pub use http::HttpCompanionApi;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Companion API is not configured. Set an API base URL first.")]
    NotConfigured,
    #[error("Invalid API configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to parse JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("API returned HTTP {status}: {message}")]
    Status { status: u16, message: String },
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Account and device endpoints consumed by the settings screen
#[async_trait]
pub trait CompanionApi: Send + Sync {
    /// Fetch a named feature flag for the signed-in account
    async fn feature_flag(&self, name: &str) -> ApiResult<FeatureFlag>;

    /// Fetch the cellular subscription attached to the account
    async fn subscription(&self) -> ApiResult<Subscription>;

    /// Fetch extended metadata for the paired device
    async fn retrieve_detailed_device_info(&self) -> ApiResult<DeviceInfo>;
}

#[async_trait]
impl<T: CompanionApi + ?Sized> CompanionApi for Arc<T> {
    async fn feature_flag(&self, name: &str) -> ApiResult<FeatureFlag> {
        (**self).feature_flag(name).await
    }

    async fn subscription(&self) -> ApiResult<Subscription> {
        (**self).subscription().await
    }

    async fn retrieve_detailed_device_info(&self) -> ApiResult<DeviceInfo> {
        (**self).retrieve_detailed_device_info().await
    }
}
