// The compare pipeline: load every document, then rank all pairs.
//
// Nothing is ranked until every document has loaded, so a missing file
// aborts the run before any report exists.

use std::path::PathBuf;

use crate::config::CompareOptions;
use crate::corpus::loader::{self, Document};
use crate::error::Result;
use crate::ranking::{self, PairScore};

/// Load `paths` and return their ranked pair scores.
pub fn compare(paths: &[PathBuf], options: &CompareOptions) -> Result<Vec<PairScore>> {
    let documents = load_documents(paths, options)?;
    Ok(ranking::rank(&documents, options.mode, options.top_k))
}

/// Load `paths` with the options' stoplist and stemming settings.
pub fn load_documents(paths: &[PathBuf], options: &CompareOptions) -> Result<Vec<Document>> {
    loader::load_corpus(paths, &options.stoplist, options.use_stemming)
}
