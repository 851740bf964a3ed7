// Term extraction.
//
// A term is a maximal run of ASCII letters in the lower-cased text. Digits,
// punctuation, whitespace and non-ASCII characters all end a run and never
// appear inside a term.

use std::sync::LazyLock;

use regex_lite::Regex;

static TERM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[a-z]+").expect("term pattern is a valid regex"));

/// Lower-case `text` and return every candidate term in order of appearance.
pub fn terms(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TERM_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}
