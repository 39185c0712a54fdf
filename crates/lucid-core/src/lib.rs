//! Lucid Core - Dream records and the dream list model
//!
//! This crate provides the value types of the dream journal and their
//! storage codec:
//! - Dynamic value types (`Value`, `ValueMap`) in the shape a key-value
//!   store holds them
//! - `Dream`, `Creature` and `Effect`, with a fixed integer code table for
//!   creatures and effects
//! - `DreamListModel`, the ordered dreams of the list screen, and the
//!   default seed dreams for a fresh list
//!
//! Every record encodes to a `ValueMap` and decodes back with
//! `decode`, failing with `DecodeError` rather than substituting defaults
//! for malformed data.

mod dream;
mod error;
mod fields;
mod list_model;
mod value;

pub use dream::{Creature, Dream, Effect, UnicornColor};
pub use error::{DecodeError, Result};
pub use list_model::{default_seed_dreams, DreamChange, DreamListModel, ModelDiff};
pub use value::{Value, ValueMap};
