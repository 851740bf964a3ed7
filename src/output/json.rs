// JSON rendering of reports, for piping into other tools.

use serde::Serialize;
use serde_json::{json, Value};

use crate::corpus::loader::Document;
use crate::ranking::PairScore;

#[derive(Serialize)]
struct RankedEntry<'a> {
    rank: usize,
    label: String,
    #[serde(flatten)]
    pair: &'a PairScore,
}

/// The ranked pairs as a JSON array of `{rank, label, first, second, score}`.
pub fn ranking_to_json(pairs: &[PairScore]) -> serde_json::Result<String> {
    let entries: Vec<RankedEntry> = pairs
        .iter()
        .enumerate()
        .map(|(i, pair)| RankedEntry {
            rank: i + 1,
            label: pair.label(),
            pair,
        })
        .collect();
    serde_json::to_string_pretty(&entries)
}

/// Each document's top terms as `[{id, terms, tokens, top: [[term, count]]}]`.
pub fn counts_to_json(documents: &[Document], top_n: usize) -> serde_json::Result<String> {
    let docs: Vec<Value> = documents
        .iter()
        .map(|doc| {
            json!({
                "id": doc.id,
                "terms": doc.counts.len(),
                "tokens": doc.counts.total(),
                "top": doc.counts.top_terms(top_n),
            })
        })
        .collect();
    serde_json::to_string_pretty(&docs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_json_shape() {
        let pairs = vec![PairScore {
            first: "a.txt".to_string(),
            second: "b.txt".to_string(),
            score: 0.5,
        }];
        let value: Value = serde_json::from_str(&ranking_to_json(&pairs).unwrap()).unwrap();
        assert_eq!(value[0]["rank"], 1);
        assert_eq!(value[0]["label"], "a.txt <> b.txt");
        assert_eq!(value[0]["first"], "a.txt");
        assert_eq!(value[0]["score"], 0.5);
    }

    #[test]
    fn test_counts_json_shape() {
        let docs = vec![Document {
            id: "a.txt".to_string(),
            counts: ["cat", "cat", "dog"].into_iter().collect(),
        }];
        let value: Value = serde_json::from_str(&counts_to_json(&docs, 1).unwrap()).unwrap();
        assert_eq!(value[0]["tokens"], 3);
        assert_eq!(value[0]["top"][0][0], "cat");
        assert_eq!(value[0]["top"][0][1], 2);
        assert_eq!(value[0]["top"].as_array().unwrap().len(), 1);
    }
}
