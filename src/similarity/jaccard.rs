// Jaccard coefficients over two documents' term counts.
//
// `binary_jaccard` ignores counts and compares vocabularies: shared terms over
// distinct terms. `weighted_jaccard` lets repetition count. A term used three
// times in one document and once in the other contributes 1 to the numerator
// and 3 to the denominator. Terms missing from one side count as 0 there.
//
// Numerator and denominator are integer sums and the division happens once
// at the end, which keeps score(a, b) bit-identical to score(b, a).

use std::collections::HashSet;

use crate::corpus::counts::TokenCount;

/// |A ∩ B| / |A ∪ B| over the two vocabularies.
pub fn binary_jaccard(a: &TokenCount, b: &TokenCount) -> f64 {
    let shared = a.terms().filter(|term| b.contains(term)).count();
    let union = a.len() + b.len() - shared;
    ratio(shared as u64, union as u64)
}

/// Count-weighted Jaccard: sum of per-term minimums over sum of maximums.
pub fn weighted_jaccard(a: &TokenCount, b: &TokenCount) -> f64 {
    let all_terms: HashSet<&str> = a.terms().chain(b.terms()).collect();

    let mut overlap: u64 = 0;
    let mut underlap: u64 = 0;
    for term in all_terms {
        let ca = a.get(term);
        let cb = b.get(term);
        overlap += u64::from(ca.min(cb));
        underlap += u64::from(ca.max(cb));
    }

    ratio(overlap, underlap)
}

fn ratio(over: u64, under: u64) -> f64 {
    if under == 0 {
        0.0
    } else {
        over as f64 / under as f64
    }
}
