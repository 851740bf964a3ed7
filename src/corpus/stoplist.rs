// Stoplist — terms excluded from counting.
//
// Entries are matched exactly against lower-cased terms, so an upper-case
// line in a stoplist file never matches anything.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use stop_words::{get, LANGUAGE};
use tracing::debug;

use crate::error::{OverlapError, Result};

/// A read-only set of terms to skip while counting.
#[derive(Debug, Clone, Default)]
pub struct Stoplist {
    terms: HashSet<String>,
}

impl Stoplist {
    /// A stoplist that excludes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a stoplist from an in-memory list of terms.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    /// Read a stoplist file: one term per line, surrounding whitespace
    /// trimmed, blank lines ignored.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text =
            fs::read_to_string(path).map_err(|e| OverlapError::input_unavailable(path, e))?;
        let stoplist = Self::from_terms(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        );
        debug!(path = %path.display(), terms = stoplist.len(), "Loaded stoplist");
        Ok(stoplist)
    }

    /// The English list shipped with the `stop-words` crate.
    pub fn english() -> Self {
        let words: Vec<String> = get(LANGUAGE::English);
        Self::from_terms(words)
    }

    /// Add every term of `other` to this stoplist.
    pub fn merge(mut self, other: Stoplist) -> Self {
        self.terms.extend(other.terms);
        self
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
