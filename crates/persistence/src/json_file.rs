use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::Context;

use super::store::{HeaderRecord, HeaderStore, HeaderStoreError};

/// JSON-file-backed header store.
///
/// The whole record lives under a single path; each save rewrites the file.
#[derive(Debug, Clone)]
pub struct JsonFileHeaderStore {
    path: PathBuf,
}

impl JsonFileHeaderStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn write_record(&self, record: &HeaderRecord) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create header store directory {parent:?}"))?;
        }
        let json = serde_json::to_string_pretty(record).context("failed to serialize header record")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("failed to write header record to {:?}", self.path))?;
        Ok(())
    }
}

impl HeaderStore for JsonFileHeaderStore {
    fn load(&self) -> Result<Option<HeaderRecord>, HeaderStoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = ?self.path, "no persisted header record, caller falls back to defaults");
                return Ok(None);
            }
            Err(e) => {
                return Err(HeaderStoreError::Unavailable(format!(
                    "read {:?}: {e}",
                    self.path
                )));
            }
        };

        let record = serde_json::from_str(&raw)
            .map_err(|e| HeaderStoreError::Malformed(format!("{:?}: {e}", self.path)))?;
        Ok(Some(record))
    }

    fn save(&self, record: &HeaderRecord) -> Result<(), HeaderStoreError> {
        if let Err(e) = self.write_record(record) {
            tracing::debug!(path = ?self.path, "header record write failed: {e:#}");
            return Err(HeaderStoreError::Unavailable(format!("{e:#}")));
        }
        Ok(())
    }
}
