// Colored terminal output for ranked pairs and per-document term counts.

use colored::Colorize;

use crate::corpus::loader::Document;
use crate::ranking::PairScore;

/// Print the ranked pair list, one `[rank] a <> b = score` line per pair.
pub fn display_ranking(pairs: &[PairScore]) {
    if pairs.is_empty() {
        println!("No document pairs to compare. Pass at least two files.");
        return;
    }

    for (i, pair) in pairs.iter().enumerate() {
        let line = super::format_ranking_line(i + 1, pair);
        println!("{}", colorize_by_score(&line, pair.score));
    }
}

/// Print each document's most frequent terms.
pub fn display_counts(documents: &[Document], top_n: usize) {
    for doc in documents {
        println!(
            "\n{}",
            format!(
                "=== {} ({} terms, {} tokens) ===",
                doc.id,
                doc.counts.len(),
                doc.counts.total()
            )
            .bold()
        );

        if doc.counts.is_empty() {
            println!("  {}", "(no terms)".dimmed());
            continue;
        }

        for (term, count) in doc.counts.top_terms(top_n) {
            println!("  {:<24} {:>6}", term, count);
        }
    }
    println!();
}

/// Color a report line by how strong the pair's overlap is.
fn colorize_by_score(text: &str, score: f64) -> colored::ColoredString {
    if score >= 0.5 {
        text.bright_green()
    } else if score >= 0.2 {
        text.bright_yellow()
    } else {
        text.normal()
    }
}
