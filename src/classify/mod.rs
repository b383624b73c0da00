pub mod keywords;

pub use keywords::{KeywordRule, KeywordTable};

use crate::types::Category;

pub trait Classifier {
    /// Assign a category to a record from its title and content.
    ///
    /// Total over arbitrary text: always returns a valid category, never
    /// fails, no side effects.
    fn classify(&self, title: &str, content: &str) -> Category;
}

/// Keyword-count classifier over an ordered [`KeywordTable`].
///
/// Title and content are concatenated and lowercased; each rule scores
/// the number of its keywords occurring as substrings (a repeated keyword
/// still counts once). The first rule in table order with the maximum
/// score wins. A winning score of `min_score` or less falls back to
/// [`Category::Others`].
pub struct KeywordClassifier {
    table: KeywordTable,
    min_score: usize,
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self {
            table: KeywordTable::default_rules(),
            min_score: 1,
        }
    }
}

impl KeywordClassifier {
    pub fn new(table: KeywordTable, min_score: usize) -> Self {
        Self { table, min_score }
    }
}

impl Classifier for KeywordClassifier {
    fn classify(&self, title: &str, content: &str) -> Category {
        let text = format!("{title} {content}").to_lowercase();

        let mut best: Option<(Category, usize)> = None;
        for rule in self.table.rules() {
            let score = rule
                .keywords
                .iter()
                .filter(|keyword| text.contains(keyword.as_str()))
                .count();

            // Strictly-greater keeps the earlier rule on ties.
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((rule.category, score)),
            }
        }

        match best {
            Some((category, score)) if score > self.min_score => category,
            _ => Category::Others,
        }
    }
}
