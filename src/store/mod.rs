pub mod json_store;

pub use json_store::JsonStore;

use std::collections::BTreeSet;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::{ArticleId, ArticleUrl, StoredRecord};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read store at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("store at {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write store at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Persistence boundary for the record collection.
///
/// `save` overwrites the full persisted state; it is not append-only.
/// Implementations must publish via replace-not-mutate so a failed save
/// never corrupts the previous state.
pub trait RecordStore {
    /// Read the persisted collection. Absent state is an empty
    /// collection, not an error; unparseable state is fatal.
    fn load(&self) -> Result<Vec<StoredRecord>, StoreError>;

    /// Atomically replace the persisted state with `records`.
    fn save(&self, records: &[StoredRecord]) -> Result<(), StoreError>;
}

/// Dedup membership set over a loaded snapshot.
pub fn existing_urls(records: &[StoredRecord]) -> BTreeSet<ArticleUrl> {
    records.iter().map(|r| r.url.clone()).collect()
}

/// One past the maximum assigned id, or [`ArticleId::FIRST`] for an
/// empty snapshot. Ids are never reused, even across runs.
pub fn next_id(records: &[StoredRecord]) -> ArticleId {
    records
        .iter()
        .map(|r| r.id)
        .max()
        .map(ArticleId::succ)
        .unwrap_or(ArticleId::FIRST)
}
