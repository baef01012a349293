//! pin-core - Core library for the Pin companion settings screen
//!
//! This crate contains the shared models, remote API client, preference
//! storage, and the view-state controller that drives the settings screen.
//! Rendering is left to the shell (CLI or a platform UI).

pub mod api;
pub mod config;
pub mod controller;
pub mod db;
pub mod error;
pub mod models;
pub mod preferences;
pub mod screen;
pub mod util;
pub mod wifi;

pub use controller::{RefreshOutcome, SettingsController, ViewState};
pub use error::{Error, Result};
pub use models::{AccentColor, AppIcon, DeviceInfo, FeatureFlag, Subscription};
