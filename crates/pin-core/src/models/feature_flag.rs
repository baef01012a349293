//! Remote feature flag model

use serde::{Deserialize, Serialize};

/// Flag gating the vision beta toggle
pub const VISION_ACCESS_FLAG: &str = "visionAccess";

/// A named boolean toggle fetched from the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlag {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "bool")]
    pub enabled: bool,
}

impl FeatureFlag {
    pub fn new(name: impl Into<String>, enabled: bool) -> Self {
        Self {
            name: name.into(),
            enabled,
        }
    }
}
