// TokenCount — the per-document term frequency map.
//
// Built once from a stream of terms and never mutated afterwards. Only terms
// that occurred are stored, so every stored count is at least 1.

use std::collections::HashMap;

use serde::Serialize;

/// Term frequencies for a single document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenCount {
    counts: HashMap<String, u32>,
}

impl TokenCount {
    /// Occurrences of `term`, or 0 if the document never used it.
    pub fn get(&self, term: &str) -> u32 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.counts.contains_key(term)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of counted tokens.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(t, &c)| (t.as_str(), c))
    }

    /// The `n` most frequent terms, highest count first, ties broken
    /// alphabetically.
    pub fn top_terms(&self, n: usize) -> Vec<(&str, u32)> {
        let mut entries: Vec<(&str, u32)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(n);
        entries
    }

    /// Count more terms into a map still under construction. The loader
    /// feeds one line at a time through here.
    pub(crate) fn add_terms<S: Into<String>>(&mut self, terms: impl IntoIterator<Item = S>) {
        for term in terms {
            *self.counts.entry(term.into()).or_insert(0) += 1;
        }
    }
}

impl<S: Into<String>> FromIterator<S> for TokenCount {
    fn from_iter<I: IntoIterator<Item = S>>(terms: I) -> Self {
        let mut counts = Self::default();
        counts.add_terms(terms);
        counts
    }
}
