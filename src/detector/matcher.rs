//! Edge-line matching over the vertical run index
//!
//! A piece outline leaves two vertical edges in the binarized image. An
//! intact edge is one run of `full_line_length` rows; an edge crossed by the
//! notch is two runs of the notch segment lengths. Columns showing either
//! signature are paired when their distance fits the piece width.
use crate::models::{
    Candidate, CandidateKind, CandidateSet, Coordinate, GeometryTrait, MatchPair, PairGroup, Run,
    RunIndex,
};

use super::runs::index_vertical_runs;

/// Full-line candidate for a column, if any run has the full edge height
fn full_line(column: usize, runs: &[Run], geometry: &GeometryTrait) -> Option<Candidate> {
    let run = runs.iter().find(|r| r.length == geometry.full_line_length)?;
    Some(Candidate {
        column,
        kind: CandidateKind::FullLine,
        runs: vec![*run],
    })
}

/// Notch-line candidate for a column, if runs of both segment lengths exist
fn notch_line(column: usize, runs: &[Run], geometry: &GeometryTrait) -> Option<Candidate> {
    let notch = geometry.notch_line_length;
    let b = runs.iter().position(|r| r.length == notch.b)?;
    // With equal segment lengths the two segments must still be distinct runs
    let a = runs
        .iter()
        .enumerate()
        .position(|(i, r)| i != b && r.length == notch.a)?;

    let (upper, lower) = if a < b { (a, b) } else { (b, a) };
    Some(Candidate {
        column,
        kind: CandidateKind::NotchLine,
        runs: vec![runs[upper], runs[lower]],
    })
}

/// Classify every indexed column. Each column yields at most one candidate
/// of each kind; lists come out in ascending column order.
pub fn classify_columns(index: &RunIndex, geometry: &GeometryTrait) -> CandidateSet {
    let mut set = CandidateSet::default();
    for (column, runs) in index.iter() {
        if let Some(candidate) = full_line(column, runs, geometry) {
            set.full.push(candidate);
        }
        if let Some(candidate) = notch_line(column, runs, geometry) {
            set.notch.push(candidate);
        }
    }

    log::debug!(
        "classified {} columns: {} full lines, {} notch lines",
        index.len(),
        set.full.len(),
        set.notch.len()
    );
    set
}

fn push_if_fits(
    pairs: &mut Vec<MatchPair>,
    first: &Candidate,
    second: &Candidate,
    group: PairGroup,
    geometry: &GeometryTrait,
) {
    if geometry.block_width.admits(first.distance(second)) {
        pairs.push(MatchPair {
            first: first.clone(),
            second: second.clone(),
            group,
        });
    }
}

/// Every pair of candidates whose distance lies strictly inside the width
/// bounds, in enumeration order: full×notch, then full×full, then notch×notch.
pub fn match_pairs(candidates: &CandidateSet, geometry: &GeometryTrait) -> Vec<MatchPair> {
    let mut pairs = Vec::new();
    let full = &candidates.full;
    let notch = &candidates.notch;

    for f in full {
        for n in notch {
            push_if_fits(&mut pairs, f, n, PairGroup::FullNotch, geometry);
        }
    }

    for i in 0..full.len() {
        for j in (i + 1)..full.len() {
            push_if_fits(&mut pairs, &full[i], &full[j], PairGroup::FullFull, geometry);
        }
    }

    for i in 0..notch.len() {
        for j in (i + 1)..notch.len() {
            push_if_fits(&mut pairs, &notch[i], &notch[j], PairGroup::NotchNotch, geometry);
        }
    }

    log::debug!(
        "{} qualifying pairs from {} candidates",
        pairs.len(),
        candidates.len()
    );
    pairs
}

/// Index black pixels, classify columns and return all qualifying pairs
pub fn find_gap_candidates<I>(black: I, geometry: &GeometryTrait) -> Vec<MatchPair>
where
    I: IntoIterator<Item = Coordinate>,
{
    let index = index_vertical_runs(black);
    let candidates = classify_columns(&index, geometry);
    match_pairs(&candidates, geometry)
}
