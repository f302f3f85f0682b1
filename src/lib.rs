// Entry Ledger - Core Library
// Exposes all modules for use in the API server binary and tests

pub mod api;
pub mod config;
pub mod db;
pub mod entry;
pub mod error;

// Re-export commonly used types
pub use api::{router, AppState};
pub use config::Config;
pub use db::{
    delete_entry, get_entry, insert_entry, list_entries, setup_database, update_entry,
};
pub use entry::{Entry, EntryPayload, EntryType, NewEntry};
pub use error::ApiError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
