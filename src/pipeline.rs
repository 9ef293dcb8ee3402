use crate::config::SolverConfig;
use crate::detector::matcher::{classify_columns, match_pairs};
use crate::detector::runs::index_vertical_runs;
use crate::detector::selector::{GapOffset, select_offset};
use crate::error::SolveError;
use crate::models::{CandidateSet, MatchPair, PixelBuffer};
use crate::utils::binarization::{binarize_collect, binarize_parallel};

/// Stage-level counters collected during one solve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveTelemetry {
    /// Black pixels after binarization
    pub black_pixels: usize,
    /// Columns with at least one black pixel
    pub columns: usize,
    /// Vertical runs across all columns
    pub runs: usize,
    /// Full-line candidates
    pub full_lines: usize,
    /// Notch-line candidates
    pub notch_lines: usize,
    /// Pairs inside the width bounds
    pub pairs: usize,
}

/// Everything one solve produced, for callers that want their own tie-break
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    /// Offset of the first qualifying pair
    pub offset: GapOffset,
    /// Candidate columns by kind
    pub candidates: CandidateSet,
    /// All qualifying pairs in enumeration order
    pub pairs: Vec<MatchPair>,
    /// Stage counters
    pub telemetry: SolveTelemetry,
}

/// Candidates and pairs before selection; available even when solving fails
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inspection {
    /// Candidate columns by kind
    pub candidates: CandidateSet,
    /// All qualifying pairs in enumeration order
    pub pairs: Vec<MatchPair>,
    /// Stage counters
    pub telemetry: SolveTelemetry,
}

/// Binarize, index and match. The buffer is left binarized.
pub(crate) fn match_buffer(
    buffer: &mut PixelBuffer,
    config: &SolverConfig,
    parallel: bool,
) -> Inspection {
    let mut tel = SolveTelemetry::default();

    let black = if parallel {
        binarize_parallel(buffer, config.threshold)
    } else {
        binarize_collect(buffer, config.threshold)
    };
    tel.black_pixels = black.len();

    let index = index_vertical_runs(black);
    tel.columns = index.len();
    tel.runs = index.run_count();

    let candidates = classify_columns(&index, &config.geometry);
    tel.full_lines = candidates.full.len();
    tel.notch_lines = candidates.notch.len();

    let pairs = match_pairs(&candidates, &config.geometry);
    tel.pairs = pairs.len();

    log::debug!(
        "{}x{} buffer at threshold {}: {:?}",
        buffer.width(),
        buffer.height(),
        config.threshold,
        tel
    );

    Inspection {
        candidates,
        pairs,
        telemetry: tel,
    }
}

/// Full pipeline returning the report
pub(crate) fn solve_report(
    buffer: &mut PixelBuffer,
    config: &SolverConfig,
    parallel: bool,
) -> Result<SolveReport, SolveError> {
    let Inspection {
        candidates,
        pairs,
        telemetry,
    } = match_buffer(buffer, config, parallel);
    let offset = select_offset(&pairs, &candidates)?;
    Ok(SolveReport {
        offset,
        candidates,
        pairs,
        telemetry,
    })
}
