//! Subsequence fuzzy matching and candidate ordering for the quick-open
//! picker.

use crate::domain::candidate::Candidate;

/// Returns true when every character of `query` appears in `candidate` in
/// order, case-insensitively.
///
/// Candidate characters may be skipped between matches, so `"idx"` accepts
/// `"index.js"`. An empty query accepts every candidate; a non-empty query
/// never accepts an empty candidate. This is a pure accept/reject decision —
/// there is no score and no fuzziness threshold.
pub fn is_match(query: &str, candidate: &str) -> bool {
    let mut candidate_chars = candidate.chars().flat_map(char::to_lowercase);

    query
        .chars()
        .flat_map(char::to_lowercase)
        .all(|query_char| candidate_chars.any(|candidate_char| candidate_char == query_char))
}

/// Filters `candidates` to those whose name matches `query`, preserving the
/// input order.
///
/// An empty query keeps everything. Match results are recomputed on every
/// call; nothing is cached between keystrokes.
pub fn filter_candidates<'a>(candidates: &'a [Candidate], query: &str) -> Vec<&'a Candidate> {
    candidates
        .iter()
        .filter(|candidate| is_match(query, &candidate.name))
        .collect()
}

/// Sorts candidates with directories first, then names ascending by code
/// point.
///
/// `sort_by` is stable, so entries comparing equal keep their relative order.
pub fn sort_candidates(candidates: &mut [Candidate]) {
    candidates.sort_by(|first, second| {
        second
            .is_dir
            .cmp(&first.is_dir)
            .then_with(|| first.name.cmp(&second.name))
    });
}
