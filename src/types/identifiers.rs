use serde::{Deserialize, Serialize};

/// Positive, monotonically assigned record identifier.
///
/// Ids are never reused, even across runs: the next id is always one past
/// the maximum id found in the persisted store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(u64);

impl ArticleId {
    /// The id assigned to the first record of an empty store.
    pub const FIRST: ArticleId = ArticleId(1);

    pub const fn new(value: u64) -> Self {
        ArticleId(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    /// The id following this one in assignment order.
    pub const fn succ(self) -> Self {
        ArticleId(self.0 + 1)
    }
}

/// Source URL of a record, used as the dedup key.
///
/// Uniqueness across the persisted collection is enforced by the
/// pipeline's skip-if-seen check, not by this type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleUrl(String);

impl ArticleUrl {
    pub fn new(url: impl Into<String>) -> Self {
        ArticleUrl(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ArticleUrl {
    fn from(s: &str) -> Self {
        ArticleUrl(s.to_string())
    }
}
