// Similarity scoring between two documents' term counts.

pub mod jaccard;

use serde::{Deserialize, Serialize};

use crate::corpus::counts::TokenCount;

/// How term counts are weighted when comparing two documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightingMode {
    /// Vocabulary presence only: |A ∩ B| / |A ∪ B|.
    Binary,
    /// Counts matter: sum of per-term minimums over sum of maximums.
    #[default]
    Weighted,
}

/// Score two documents in [0.0, 1.0]. Symmetric in its arguments.
pub fn score(a: &TokenCount, b: &TokenCount, mode: WeightingMode) -> f64 {
    match mode {
        WeightingMode::Binary => jaccard::binary_jaccard(a, b),
        WeightingMode::Weighted => jaccard::weighted_jaccard(a, b),
    }
}
