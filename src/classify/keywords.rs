use serde::{Deserialize, Serialize};

use crate::types::Category;

/// One category and the keywords that vote for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub category: Category,
    pub keywords: Vec<String>,
}

impl KeywordRule {
    pub fn new(category: Category, keywords: &[&str]) -> Self {
        Self {
            category,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Ordered classification table: rule order is tie-break priority order.
///
/// Kept as data rather than hardcoded in the classifier so keyword
/// membership and priority stay independently testable and extensible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordTable {
    rules: Vec<KeywordRule>,
}

impl KeywordTable {
    pub fn new(rules: Vec<KeywordRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// The stock health-news table. Keywords are stored lowercase; the
    /// classifier lowercases its input, never the table.
    pub fn default_rules() -> Self {
        Self::new(vec![
            KeywordRule::new(
                Category::NonCommunicableDiseases,
                &[
                    "cancer",
                    "diabetes",
                    "cardiovascular",
                    "heart disease",
                    "stroke",
                    "chronic",
                    "non-communicable",
                    "obesity",
                    "hypertension",
                    "mental health",
                    "depression",
                    "anxiety",
                    "lifestyle disease",
                ],
            ),
            KeywordRule::new(
                Category::DigitalHealth,
                &[
                    "digital",
                    "telemedicine",
                    "telehealth",
                    "e-health",
                    "mhealth",
                    "electronic health record",
                    "ehr",
                    "health it",
                    "ai",
                    "artificial intelligence",
                    "machine learning",
                    "app",
                    "online platform",
                    "digital health",
                    "monitoring system",
                ],
            ),
            KeywordRule::new(
                Category::Pharmaceuticals,
                &[
                    "pharmaceutical",
                    "medicine",
                    "drug",
                    "vaccine",
                    "pharmacy",
                    "generic",
                    "patent",
                    "clinical trial",
                    "fda",
                    "dcgi",
                    "regulatory",
                    "pharma",
                ],
            ),
            KeywordRule::new(
                Category::MedicalTechnologies,
                &[
                    "medical device",
                    "equipment",
                    "diagnostic",
                    "imaging",
                    "ventilator",
                    "implant",
                    "prosthetic",
                    "medical technology",
                    "biomedical",
                    "medtech",
                    "medical equipment",
                ],
            ),
        ])
    }
}
