// Corpus loader — reads documents into term counts.
//
// Each document is read line by line, lower-cased, split into alphabetic
// terms, filtered through the stoplist, optionally stemmed, and counted.
// Documents are loaded independently; nothing is shared between them.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use super::counts::TokenCount;
use super::stemmer::{EnglishStemmer, Stemmer};
use super::stoplist::Stoplist;
use super::tokenizer;
use crate::error::{OverlapError, Result};

/// Corpora at least this large get a progress bar while loading.
const PROGRESS_THRESHOLD: usize = 50;

/// A loaded document: its display id (the path as given) and its counts.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub counts: TokenCount,
}

/// Load one document, stemming with the English stemmer when `use_stemming`
/// is set.
pub fn load(path: &Path, stoplist: &Stoplist, use_stemming: bool) -> Result<TokenCount> {
    let stemmer = EnglishStemmer::new();
    load_with(path, stoplist, use_stemming.then_some(&stemmer as &dyn Stemmer))
}

/// Load one document with an arbitrary stemmer (or none).
pub fn load_with(
    path: &Path,
    stoplist: &Stoplist,
    stemmer: Option<&dyn Stemmer>,
) -> Result<TokenCount> {
    let file = File::open(path).map_err(|e| OverlapError::input_unavailable(path, e))?;
    let counts = count_reader(BufReader::new(file), path, stoplist, stemmer)?;
    debug!(
        path = %path.display(),
        distinct_terms = counts.len(),
        tokens = counts.total(),
        "Loaded document"
    );
    Ok(counts)
}

/// Count the terms of an in-memory text.
pub fn count_text(
    text: &str,
    stoplist: &Stoplist,
    stemmer: Option<&dyn Stemmer>,
) -> Result<TokenCount> {
    let terms = normalize(tokenizer::terms(text), stoplist, stemmer)?;
    Ok(terms.into_iter().collect())
}

/// Load every path in order. Fails on the first unreadable document.
pub fn load_corpus(
    paths: &[PathBuf],
    stoplist: &Stoplist,
    use_stemming: bool,
) -> Result<Vec<Document>> {
    let pb = if paths.len() >= PROGRESS_THRESHOLD {
        let pb = ProgressBar::new(paths.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  Loading [{bar:30}] {pos}/{len} ({eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let stemmer = EnglishStemmer::new();
    let stemmer = use_stemming.then_some(&stemmer as &dyn Stemmer);

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let counts = load_with(path, stoplist, stemmer)?;
        documents.push(Document {
            id: path.display().to_string(),
            counts,
        });
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!(
        documents = documents.len(),
        stemming = use_stemming,
        stoplist_terms = stoplist.len(),
        "Loaded corpus"
    );
    Ok(documents)
}

fn count_reader<R: BufRead>(
    reader: R,
    path: &Path,
    stoplist: &Stoplist,
    stemmer: Option<&dyn Stemmer>,
) -> Result<TokenCount> {
    let mut counts = TokenCount::default();
    for line in reader.lines() {
        let line = line.map_err(|e| OverlapError::input_unavailable(path, e))?;
        counts.add_terms(normalize(tokenizer::terms(&line), stoplist, stemmer)?);
    }
    Ok(counts)
}

/// Drop stoplisted terms, then stem what is left. The stoplist is checked
/// against the unstemmed form.
fn normalize(
    terms: Vec<String>,
    stoplist: &Stoplist,
    stemmer: Option<&dyn Stemmer>,
) -> Result<Vec<String>> {
    terms
        .into_iter()
        .filter(|term| !stoplist.contains(term))
        .map(|term| match stemmer {
            Some(s) => s.stem(&term),
            None => Ok(term),
        })
        .collect()
}
