pub mod identifiers;
pub mod records;

pub use identifiers::{ArticleId, ArticleUrl};
pub use records::{filter_by_category, Category, RawRecord, StoredRecord};
