// Composition tests — loader -> similarity -> ranker -> report.
//
// Writes small corpora to a temp directory and runs the full compare
// pipeline, checking ranking order, tie handling, truncation and the
// formatted report lines.

use std::fs;
use std::path::PathBuf;

use wordoverlap::config::CompareOptions;
use wordoverlap::corpus::stoplist::Stoplist;
use wordoverlap::output::format_ranking_line;
use wordoverlap::output::json::ranking_to_json;
use wordoverlap::pipeline::{compare, load_documents};
use wordoverlap::ranking::rank;
use wordoverlap::similarity::WeightingMode;

fn corpus(dir: &tempfile::TempDir, docs: &[(&str, &str)]) -> Vec<PathBuf> {
    docs.iter()
        .map(|(name, text)| {
            let path = dir.path().join(name);
            fs::write(&path, text).unwrap();
            path
        })
        .collect()
}

fn options(mode: WeightingMode, top_k: i64) -> CompareOptions {
    CompareOptions {
        stoplist: Stoplist::empty(),
        use_stemming: false,
        mode,
        top_k,
    }
}

fn four_docs(dir: &tempfile::TempDir) -> Vec<PathBuf> {
    corpus(
        dir,
        &[
            ("d1.txt", "the cat sat on the mat"),
            ("d2.txt", "the cat sat on the hat"),
            ("d3.txt", "a dog ran in the park"),
            ("d4.txt", "stock prices fell sharply today"),
        ],
    )
}

// ============================================================
// Ranking
// ============================================================

#[test]
fn two_documents_report_one_pair() {
    let dir = tempfile::tempdir().unwrap();
    let paths = corpus(&dir, &[("d1.txt", "the cat sat"), ("d2.txt", "the dog sat")]);

    let pairs = compare(&paths, &options(WeightingMode::Binary, 0)).unwrap();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].score, 0.5);
    assert_eq!(pairs[0].first, paths[0].display().to_string());
    assert_eq!(pairs[0].second, paths[1].display().to_string());
}

#[test]
fn top_k_zero_or_negative_returns_all_pairs() {
    let dir = tempfile::tempdir().unwrap();
    let paths = four_docs(&dir);
    for top_k in [0, -1, -20] {
        let pairs = compare(&paths, &options(WeightingMode::Weighted, top_k)).unwrap();
        assert_eq!(pairs.len(), 6, "top_k = {top_k}");
    }
}

#[test]
fn top_k_returns_best_pairs_descending() {
    let dir = tempfile::tempdir().unwrap();
    let paths = four_docs(&dir);

    let all = compare(&paths, &options(WeightingMode::Weighted, 0)).unwrap();
    let top = compare(&paths, &options(WeightingMode::Weighted, 3)).unwrap();

    assert_eq!(top.len(), 3);
    assert_eq!(top[..], all[..3]);
    assert!(top.windows(2).all(|w| w[0].score >= w[1].score));
    assert!(top[0].first.ends_with("d1.txt"));
    assert!(top[0].second.ends_with("d2.txt"));
}

#[test]
fn ties_keep_enumeration_order() {
    let dir = tempfile::tempdir().unwrap();
    // Every pair is disjoint, so every score ties at 0.0
    let paths = corpus(
        &dir,
        &[("a.txt", "alpha"), ("b.txt", "beta"), ("c.txt", "gamma"), ("d.txt", "delta")],
    );
    let pairs = compare(&paths, &options(WeightingMode::Binary, 0)).unwrap();
    let order: Vec<(String, String)> = pairs
        .iter()
        .map(|p| (short(&p.first), short(&p.second)))
        .collect();
    let expected = [
        ("a", "b"),
        ("a", "c"),
        ("a", "d"),
        ("b", "c"),
        ("b", "d"),
        ("c", "d"),
    ];
    assert_eq!(order.len(), expected.len());
    for (got, want) in order.iter().zip(expected) {
        assert_eq!((got.0.as_str(), got.1.as_str()), want);
    }
}

#[test]
fn nonzero_ties_keep_enumeration_order() {
    let dir = tempfile::tempdir().unwrap();
    // a-c and b-c both share one of two distinct terms and tie at 0.5
    let paths = corpus(
        &dir,
        &[("a.txt", "cat"), ("b.txt", "cat"), ("c.txt", "cat dog")],
    );
    let pairs = compare(&paths, &options(WeightingMode::Binary, 0)).unwrap();
    let got: Vec<(String, String, f64)> = pairs
        .iter()
        .map(|p| (short(&p.first), short(&p.second), p.score))
        .collect();
    assert_eq!(
        got,
        vec![
            ("a".to_string(), "b".to_string(), 1.0),
            ("a".to_string(), "c".to_string(), 0.5),
            ("b".to_string(), "c".to_string(), 0.5),
        ]
    );
}

#[test]
fn ranking_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let paths = four_docs(&dir);
    let opts = options(WeightingMode::Weighted, 0);

    let docs = load_documents(&paths, &opts).unwrap();
    let first = rank(&docs, opts.mode, opts.top_k);
    let second = rank(&docs, opts.mode, opts.top_k);
    assert_eq!(first, second);
    assert_eq!(ranking_to_json(&first).unwrap(), ranking_to_json(&second).unwrap());
}

#[test]
fn stemming_raises_overlap() {
    let dir = tempfile::tempdir().unwrap();
    let paths = corpus(&dir, &[("a.txt", "cats running"), ("b.txt", "cat runs")]);

    let mut opts = options(WeightingMode::Binary, 0);
    let plain = compare(&paths, &opts).unwrap();
    opts.use_stemming = true;
    let stemmed = compare(&paths, &opts).unwrap();

    assert_eq!(plain[0].score, 0.0);
    assert_eq!(stemmed[0].score, 1.0);
}

#[test]
fn stemming_matches_irregular_plural() {
    let dir = tempfile::tempdir().unwrap();
    let paths = corpus(&dir, &[("a.txt", "the skies"), ("b.txt", "the sky")]);

    let mut opts = options(WeightingMode::Binary, 0);
    opts.use_stemming = true;
    let pairs = compare(&paths, &opts).unwrap();
    assert_eq!(pairs[0].score, 1.0);
}

#[test]
fn missing_document_produces_no_report() {
    let dir = tempfile::tempdir().unwrap();
    let mut paths = four_docs(&dir);
    paths.push(dir.path().join("missing.txt"));
    assert!(compare(&paths, &options(WeightingMode::Weighted, 0)).is_err());
}

// ============================================================
// Report formatting
// ============================================================

#[test]
fn report_line_format() {
    let dir = tempfile::tempdir().unwrap();
    let paths = corpus(&dir, &[("d1.txt", "the cat sat"), ("d2.txt", "the dog sat")]);
    let mut opts = options(WeightingMode::Binary, 0);
    opts.stoplist = Stoplist::from_terms(["the"]);

    let pairs = compare(&paths, &opts).unwrap();
    let line = format_ranking_line(1, &pairs[0]);
    assert_eq!(
        line,
        format!("[1] {} <> {} = 0.333", paths[0].display(), paths[1].display())
    );
}

fn short(id: &str) -> String {
    PathBuf::from(id)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
