// Library error type.
//
// The binary wraps these in anyhow with extra context; library callers can
// match on the variant.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OverlapError>;

#[derive(Error, Debug)]
pub enum OverlapError {
    /// A document or stoplist could not be opened or read.
    #[error("cannot read {}: {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stemmer rejected a term. Passed through the loader unchanged.
    #[error("stemming failed for '{term}': {reason}")]
    StemmingFailure { term: String, reason: String },
}

impl OverlapError {
    pub fn input_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OverlapError::InputUnavailable {
            path: path.into(),
            source,
        }
    }
}
