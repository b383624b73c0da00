pub mod provider;

pub use provider::{ProviderError, RecordProvider, StaticProvider};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classify::{Classifier, KeywordClassifier};
use crate::store::{self, RecordStore, StoreError};
use crate::summarize::{LeadSummarizer, Summarizer};
use crate::types::{RawRecord, StoredRecord};

#[derive(Debug, Error)]
pub enum IngestError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Counts for one ingestion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestReport {
    /// Raw records received from the provider.
    pub considered: usize,
    /// Records that passed dedup and were persisted.
    pub added: usize,
    /// Records skipped because their url was already stored.
    pub skipped: usize,
}

/// The result of one ingestion run: the newly added records (not the
/// full merged collection) plus the run counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestOutcome {
    pub added: Vec<StoredRecord>,
    pub report: IngestReport,
}

/// Orchestrates classifier, summarizer, and store.
///
/// Single-threaded and synchronous: one `load`, a sequential transform
/// over the input batch in supplied order, exactly one `save`.
pub struct IngestPipeline<C, S> {
    classifier: C,
    summarizer: S,
}

impl Default for IngestPipeline<KeywordClassifier, LeadSummarizer> {
    fn default() -> Self {
        Self {
            classifier: KeywordClassifier::default(),
            summarizer: LeadSummarizer::default(),
        }
    }
}

impl<C, S> IngestPipeline<C, S>
where
    C: Classifier,
    S: Summarizer,
{
    pub fn new(classifier: C, summarizer: S) -> Self {
        Self {
            classifier,
            summarizer,
        }
    }

    /// Fetch from the provider, then [`ingest`](Self::ingest). Errors
    /// propagate; retry is the caller's concern.
    pub fn run(
        &self,
        provider: &dyn RecordProvider,
        store: &dyn RecordStore,
    ) -> Result<IngestOutcome, IngestError> {
        let raw = provider.fetch()?;
        self.ingest(raw, store)
    }

    /// Transform a raw batch into stored records and persist the merged,
    /// date-sorted collection.
    ///
    /// Raw records whose url is already stored are skipped and never
    /// consume an id. New records get strictly increasing ids in input
    /// order, all past the prior maximum. The merged collection is
    /// stable-sorted by date descending before the single `save`, so
    /// same-date records keep their relative order.
    pub fn ingest(
        &self,
        raw: Vec<RawRecord>,
        store: &dyn RecordStore,
    ) -> Result<IngestOutcome, IngestError> {
        let existing = store.load()?;
        let mut seen = store::existing_urls(&existing);
        let mut next = store::next_id(&existing);

        let considered = raw.len();
        let mut added = Vec::new();

        for record in raw {
            if seen.contains(&record.url) {
                continue;
            }

            let category = self.classifier.classify(&record.title, &record.content);
            let summary = self.summarizer.summarize(&record.content);
            seen.insert(record.url.clone());

            added.push(StoredRecord {
                id: next,
                title: record.title,
                date: record.date,
                summary,
                content: record.content.trim().to_string(),
                category,
                url: record.url,
            });
            next = next.succ();
        }

        let mut merged = existing;
        merged.extend(added.iter().cloned());
        merged.sort_by(|a, b| b.date.cmp(&a.date));

        store.save(&merged)?;

        let report = IngestReport {
            considered,
            added: added.len(),
            skipped: considered - added.len(),
        };
        Ok(IngestOutcome { added, report })
    }
}
