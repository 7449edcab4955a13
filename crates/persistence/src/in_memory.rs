use std::sync::RwLock;

use super::store::{HeaderRecord, HeaderStore, HeaderStoreError};

/// In-memory header store.
///
/// Intended for tests/dev. Keeps the full write history so tests can assert
/// on write ordering (narrow subset write vs. full commit write).
#[derive(Debug, Default)]
pub struct InMemoryHeaderStore {
    writes: RwLock<Vec<HeaderRecord>>,
}

impl InMemoryHeaderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an already-persisted record.
    pub fn with_record(record: HeaderRecord) -> Self {
        Self {
            writes: RwLock::new(vec![record]),
        }
    }

    /// Every record ever saved, oldest first. The last entry is what
    /// `load()` returns.
    pub fn writes(&self) -> Vec<HeaderRecord> {
        self.writes
            .read()
            .map(|w| w.clone())
            .unwrap_or_default()
    }
}

impl HeaderStore for InMemoryHeaderStore {
    fn load(&self) -> Result<Option<HeaderRecord>, HeaderStoreError> {
        let writes = self
            .writes
            .read()
            .map_err(|_| HeaderStoreError::Unavailable("lock poisoned".to_string()))?;
        Ok(writes.last().cloned())
    }

    fn save(&self, record: &HeaderRecord) -> Result<(), HeaderStoreError> {
        let mut writes = self
            .writes
            .write()
            .map_err(|_| HeaderStoreError::Unavailable("lock poisoned".to_string()))?;
        writes.push(record.clone());
        Ok(())
    }
}
