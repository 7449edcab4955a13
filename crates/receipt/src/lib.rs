//! Receipt domain module.
//!
//! This crate contains the line-item collection with derived totals and the
//! receipt composition root that aggregates it with the letterhead edit
//! session and the per-document fields (customer, date). Rendering is an
//! external collaborator: it reads snapshots, forwards mutation commands and
//! owns the actual print/export mechanism behind an opaque trigger.

pub mod line_item;
pub mod model;
pub mod totals;

pub use line_item::{LineField, LineItem, LineItemStore};
pub use model::{LineView, ReceiptModel, ReceiptSnapshot};
pub use totals::{grand_total, line_total};
