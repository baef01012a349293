pub mod beta;
pub mod common;
pub mod completions;
pub mod config;
pub mod icon;
pub mod show;
pub mod theme;
pub mod wifi;
