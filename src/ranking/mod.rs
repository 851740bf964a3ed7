// Pairwise ranking — scores every unordered pair of documents and sorts them.
//
// Pairs are enumerated (i, j) with i < j in input order. The sort is stable,
// so pairs with equal scores keep that enumeration order and repeated runs on
// the same input produce identical output.

use serde::Serialize;
use tracing::info;

use crate::corpus::loader::Document;
use crate::similarity::{self, WeightingMode};

/// The similarity of one unordered document pair. `first` is the document
/// that came earlier in the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairScore {
    pub first: String,
    pub second: String,
    pub score: f64,
}

impl PairScore {
    /// Human-readable label, e.g. `a.txt <> b.txt`.
    pub fn label(&self) -> String {
        format!("{} <> {}", self.first, self.second)
    }
}

/// Score all C(n, 2) pairs, best first. Keeps only the first `top_k` pairs
/// when `top_k` is positive; zero or negative keeps everything.
pub fn rank(documents: &[Document], mode: WeightingMode, top_k: i64) -> Vec<PairScore> {
    let n = documents.len();
    let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);

    for (i, a) in documents.iter().enumerate() {
        for b in &documents[i + 1..] {
            pairs.push(PairScore {
                first: a.id.clone(),
                second: b.id.clone(),
                score: similarity::score(&a.counts, &b.counts, mode),
            });
        }
    }

    let total = pairs.len();
    // Stable: equal scores stay in (i, j) enumeration order.
    pairs.sort_by(|a, b| b.score.total_cmp(&a.score));

    if top_k > 0 {
        pairs.truncate(usize::try_from(top_k).unwrap_or(usize::MAX));
    }

    info!(
        documents = n,
        pairs = total,
        reported = pairs.len(),
        mode = ?mode,
        "Ranked document pairs"
    );

    pairs
}
