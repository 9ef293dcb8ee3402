//! Pick the reported offset from the ordered pair list
use crate::error::SolveError;
use crate::models::{CandidateSet, MatchPair};

/// Horizontal distance from the left image edge to the gap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GapOffset {
    /// Column of the anchor edge of the selected pair
    pub left_offset: usize,
}

/// First pair in enumeration order.
///
/// An empty list is an error: `NoCandidatesFound` when no column qualified,
/// `NoQualifyingPair` when candidates exist but none were a piece width apart.
pub fn select_pair<'p>(
    pairs: &'p [MatchPair],
    candidates: &CandidateSet,
) -> Result<&'p MatchPair, SolveError> {
    match pairs.first() {
        Some(pair) => Ok(pair),
        None if candidates.is_empty() => Err(SolveError::NoCandidatesFound),
        None => Err(SolveError::NoQualifyingPair {
            full_lines: candidates.full.len(),
            notch_lines: candidates.notch.len(),
        }),
    }
}

/// Offset of the first pair's anchor column.
///
/// This is the column of `pair.first`, which is not necessarily the smaller
/// of the two; use [`MatchPair::left_column`] for the geometric left edge.
pub fn select_offset(
    pairs: &[MatchPair],
    candidates: &CandidateSet,
) -> Result<GapOffset, SolveError> {
    let pair = select_pair(pairs, candidates)?;
    log::debug!(
        "selected pair {:?} at columns {} and {}",
        pair.group,
        pair.first.column,
        pair.second.column
    );
    Ok(GapOffset {
        left_offset: pair.first.column,
    })
}
