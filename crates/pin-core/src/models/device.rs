//! Extended device metadata

use serde::{Deserialize, Serialize};

/// Detailed information about the paired wearable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    pub id: String,
    pub serial_number: String,
    /// eSIM identifier
    pub iccid: String,
    pub color: String,
}
