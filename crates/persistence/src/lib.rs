//! Durable key/value storage boundary for the letterhead configuration.
//!
//! This crate defines an infrastructure-facing abstraction for loading and
//! saving the single persisted header record without making any storage
//! assumptions. The record is the only durable state in the system; receipts
//! themselves are ephemeral.

pub mod in_memory;
pub mod json_file;
pub mod store;

pub use in_memory::InMemoryHeaderStore;
pub use json_file::JsonFileHeaderStore;
pub use store::{HeaderRecord, HeaderStore, HeaderStoreError};
