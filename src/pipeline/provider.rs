use thiserror::Error;

use crate::types::RawRecord;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to retrieve raw records: {0}")]
    Retrieval(String),
}

/// Source of raw records. The actual transport (network fetch, fixture
/// list) lives behind this seam so the pipeline never touches it.
pub trait RecordProvider {
    fn fetch(&self) -> Result<Vec<RawRecord>, ProviderError>;
}

/// In-memory provider over a fixed batch. Never fails.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    records: Vec<RawRecord>,
}

impl StaticProvider {
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }
}

impl RecordProvider for StaticProvider {
    fn fetch(&self) -> Result<Vec<RawRecord>, ProviderError> {
        Ok(self.records.clone())
    }
}
