//! Lucid DB - Persistence for the dream list model
//!
//! Provides:
//! - The `KeyValueStore` capability (get/set/remove by string key)
//! - `MemoryStore`, a process-local backend
//! - `Store`, a durable backend using native_db
//! - `DataManager`, which saves and loads the list model under `"Model"`
//! - `StoreConfig`, RON configuration for opening a `Store`

mod config;
mod error;
mod kv;
mod manager;
mod models;
mod store;

pub use config::StoreConfig;
pub use error::{Error, Result};
pub use kv::{KeyValueStore, MemoryStore};
pub use manager::{DataManager, MODEL_KEY};
pub use models::StoredEntry;
pub use store::Store;
