// Stemmer trait — the swap-ready seam for term normalization.
//
// The loader only needs "term in, canonical form out". `EnglishStemmer`
// wraps the Snowball English (Porter2) algorithm from `rust-stemmers`;
// tests plug in their own implementations to check that failures propagate.

use rust_stemmers::{Algorithm, Stemmer as SnowballStemmer};

use crate::error::Result;

/// Reduce a term to a canonical root form.
pub trait Stemmer {
    /// Stem a single lower-case term. Must be deterministic.
    fn stem(&self, term: &str) -> Result<String>;
}

/// The stemmer used by `--stem`: Snowball English.
pub struct EnglishStemmer {
    inner: SnowballStemmer,
}

impl EnglishStemmer {
    pub fn new() -> Self {
        Self {
            inner: SnowballStemmer::create(Algorithm::English),
        }
    }
}

impl Default for EnglishStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for EnglishStemmer {
    fn stem(&self, term: &str) -> Result<String> {
        Ok(self.inner.stem(term).into_owned())
    }
}

/// Stemmer that returns every term unchanged.
pub struct IdentityStemmer;

impl Stemmer for IdentityStemmer {
    fn stem(&self, term: &str) -> Result<String> {
        Ok(term.to_string())
    }
}
