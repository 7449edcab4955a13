//! Letterhead domain module.
//!
//! This crate contains the committed letterhead configuration and the
//! draft/commit/cancel edit-state machine, implemented as deterministic
//! domain logic over an injected storage boundary (no IO of its own beyond
//! the `HeaderStore` calls it delegates).

pub mod config;
pub mod session;

pub use config::{HeaderConfig, HeaderDraft, HeaderField};
pub use session::{EditState, HeaderEditSession};
