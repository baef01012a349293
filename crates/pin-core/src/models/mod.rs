//! Data models for the settings screen

mod appearance;
mod device;
mod feature_flag;
mod subscription;

pub use appearance::{AccentColor, AppIcon, IconDescription, DEFAULT_APP_ICON_NAME};
pub use device::DeviceInfo;
pub use feature_flag::{FeatureFlag, VISION_ACCESS_FLAG};
pub use subscription::Subscription;
