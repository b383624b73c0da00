use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::identifiers::{ArticleId, ArticleUrl};

/// Topical label assigned by keyword scoring.
///
/// Declaration order is the fixed priority order used to break scoring
/// ties: the first variant with the maximum keyword count wins. The
/// serialized strings match the persisted data format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Non Communicable Diseases")]
    NonCommunicableDiseases,
    #[serde(rename = "Digital Health")]
    DigitalHealth,
    #[serde(rename = "Pharmaceuticals")]
    Pharmaceuticals,
    #[serde(rename = "Medical Technologies")]
    MedicalTechnologies,
    #[serde(rename = "Others")]
    Others,
}

impl Category {
    /// All categories, in priority order, fallback last.
    pub const ALL: [Category; 5] = [
        Category::NonCommunicableDiseases,
        Category::DigitalHealth,
        Category::Pharmaceuticals,
        Category::MedicalTechnologies,
        Category::Others,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::NonCommunicableDiseases => "Non Communicable Diseases",
            Category::DigitalHealth => "Digital Health",
            Category::Pharmaceuticals => "Pharmaceuticals",
            Category::MedicalTechnologies => "Medical Technologies",
            Category::Others => "Others",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unprocessed input item, produced by an external provider.
/// Immutable once handed to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub title: String,
    pub date: NaiveDate,
    pub url: ArticleUrl,
    pub content: String,
}

/// A finalized, persisted record.
///
/// Constructed only by the pipeline from a [`RawRecord`] that passed the
/// dedup check; never mutated after creation. Field order is the
/// persisted-format field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub id: ArticleId,
    pub title: String,
    pub date: NaiveDate,
    pub summary: String,
    pub content: String,
    pub category: Category,
    pub url: ArticleUrl,
}

/// Records carrying the given category, in stored order.
pub fn filter_by_category(records: &[StoredRecord], category: Category) -> Vec<&StoredRecord> {
    records.iter().filter(|r| r.category == category).collect()
}
