// Output formatting — terminal report and JSON rendering.

pub mod json;
pub mod terminal;

use crate::ranking::PairScore;

/// One line of the ranked report: `[rank] first <> second = score`.
///
/// `rank` starts at 1 and the score is printed to three decimal places.
pub fn format_ranking_line(rank: usize, pair: &PairScore) -> String {
    format!("[{}] {} = {:.3}", rank, pair.label(), pair.score)
}
