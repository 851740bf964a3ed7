use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::corpus::stoplist::Stoplist;
use crate::similarity::WeightingMode;

/// Pairs reported when neither the flag nor the env var says otherwise.
pub const DEFAULT_TOP_N: i64 = 20;

/// Defaults loaded from environment variables.
///
/// A .env file is loaded at startup via dotenvy, so these can live there.
/// Command-line flags take precedence over anything set here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// How many pairs to report (WORDOVERLAP_TOP_N). 0 or negative means all.
    pub top_n: i64,
    /// Stoplist file used when `--stoplist` is not given (WORDOVERLAP_STOPLIST).
    pub stoplist_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. `load` passes the process
    /// environment; tests pass a map.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let top_n = match lookup("WORDOVERLAP_TOP_N") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .with_context(|| format!("WORDOVERLAP_TOP_N must be an integer, got '{raw}'"))?,
            None => DEFAULT_TOP_N,
        };

        let stoplist_path = lookup("WORDOVERLAP_STOPLIST")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            top_n,
            stoplist_path,
        })
    }
}

/// Everything the loader and ranker need for one comparison run, passed
/// explicitly rather than read from global state.
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    pub stoplist: Stoplist,
    pub use_stemming: bool,
    pub mode: WeightingMode,
    /// Number of pairs to keep; 0 or negative keeps all.
    pub top_k: i64,
}
