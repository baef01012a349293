//! Persistent preference storage

mod connection;
mod migrations;
mod preference_store;

pub use connection::Database;
pub use preference_store::{LibSqlPreferenceStore, MemoryPreferenceStore, PreferenceStore};
