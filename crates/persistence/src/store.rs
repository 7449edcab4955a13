use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// The persisted header record (one key, JSON-shaped object).
///
/// Two write shapes exist on the wire: a narrow three-field shape
/// (`tituloPrincipal`, `subtitulo`, `telefone`) and a full five-field shape
/// that adds the two address lines. Every field is optional so one record
/// type covers both; readers apply only the fields present and keep
/// compiled-in defaults for the rest. Absent fields are skipped on
/// serialization so a narrow save does not clobber the wire shape with
/// explicit nulls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderRecord {
    #[serde(rename = "tituloPrincipal", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "subtitulo", skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(rename = "telefone", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "enderecoLinha1", skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(rename = "enderecoLinha2", skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
}

impl HeaderRecord {
    /// True when the record carries the address lines (full shape).
    pub fn is_full(&self) -> bool {
        self.address_line1.is_some() && self.address_line2.is_some()
    }
}

/// Header store operation error.
///
/// Callers treat every variant as non-fatal: a failed `load` downgrades to
/// compiled-in defaults, a failed `save` is logged and the in-memory state
/// stays authoritative.
#[derive(Debug, Error)]
pub enum HeaderStoreError {
    /// The backing storage could not be reached or written.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The stored record exists but could not be parsed.
    #[error("malformed record: {0}")]
    Malformed(String),
}

/// Durable storage for the single header record.
///
/// `load()` is called once at session start; `save()` on each persistence
/// trigger (narrow subset write, full commit write). Writes are last-wins:
/// there is exactly one key, and the single logical thread of control never
/// interleaves them.
pub trait HeaderStore: Send + Sync {
    /// Load the persisted record, `None` when nothing was ever saved.
    fn load(&self) -> Result<Option<HeaderRecord>, HeaderStoreError>;

    /// Replace the persisted record.
    fn save(&self, record: &HeaderRecord) -> Result<(), HeaderStoreError>;
}

impl<S> HeaderStore for Arc<S>
where
    S: HeaderStore + ?Sized,
{
    fn load(&self) -> Result<Option<HeaderRecord>, HeaderStoreError> {
        (**self).load()
    }

    fn save(&self, record: &HeaderRecord) -> Result<(), HeaderStoreError> {
        (**self).save(record)
    }
}
