//! Deterministic news ingestion and classification pipeline.
//!
//! `newswire-core` takes short news-style records from an injected
//! provider, deduplicates them against a persisted store, assigns each a
//! topical category by keyword scoring, derives a bounded lead summary,
//! and writes the merged, date-sorted collection back atomically. All
//! operations are deterministic — identical inputs always produce
//! identical outputs.
//!
//! Network retrieval and markup cleanup of source documents are external
//! collaborators; this crate starts at the raw-record boundary.

pub mod classify;
pub mod pipeline;
pub mod store;
pub mod summarize;
pub mod types;
