//! Database models for persistent storage.

mod entry;

pub use entry::*;
