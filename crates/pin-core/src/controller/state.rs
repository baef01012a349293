use serde::Serialize;

use crate::models::{DeviceInfo, Subscription};

/// Everything the settings screen renders from remote data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub subscription: Option<Subscription>,
    pub extended_device_info: Option<DeviceInfo>,
    /// True only while a refresh cycle is in flight
    pub is_loading: bool,
    pub is_feature_beta_enabled: bool,
}

impl ViewState {
    /// Progress indicator covers the screen only until the first subscription arrives
    pub const fn shows_progress_overlay(&self) -> bool {
        self.subscription.is_none() && self.is_loading
    }
}
