//! Domain error model.

use thiserror::Error;

/// Domain-level error.
///
/// The editor is a best-effort tool: almost every failure path degrades to
/// "retain last-known-good in-memory state" instead of surfacing an error.
/// The only failure a caller can still be handed is an identifier that does
/// not parse.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
