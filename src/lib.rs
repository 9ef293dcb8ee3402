//! slide_gap - locate the puzzle-piece gap in slider challenge images
//!
//! The image is binarized against a luminance threshold, black pixels are
//! grouped into vertical runs per column, and columns whose runs look like
//! a piece edge are paired by the expected piece width. The anchor column of
//! the first qualifying pair is the gap offset.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Solver configuration (threshold, geometry, file and env loading)
pub mod config;
/// Gap detection stages (run indexing, edge matching, selection)
pub mod detector;
/// Error types
pub mod error;
/// Core data structures (PixelBuffer, Run, Candidate, MatchPair, etc.)
pub mod models;
/// Debug overlay rendering
pub mod overlay;
/// Stage wiring and telemetry
pub mod pipeline;
/// Image I/O and inspection helpers
pub mod tools;
/// Pixel-level helpers (binarization)
pub mod utils;

pub use config::{DEFAULT_THRESHOLD, SolverConfig};
pub use detector::matcher::find_gap_candidates;
pub use detector::runs::index_vertical_runs;
pub use detector::selector::GapOffset;
pub use error::{ConfigError, RenderError, SolveError};
pub use models::{
    Candidate, CandidateKind, CandidateSet, Coordinate, GeometryTrait, MatchPair, PairGroup,
    PixelBuffer, Run, RunIndex,
};
pub use pipeline::{Inspection, SolveReport, SolveTelemetry};
pub use utils::binarization::{binarize, binarize_collect};

use rayon::prelude::*;

/// Find the gap offset in `buffer` using the default threshold.
///
/// The buffer is binarized in place.
///
/// # Example
/// ```
/// use slide_gap::{GeometryTrait, PixelBuffer, SolveError, solve};
///
/// let mut buffer = PixelBuffer::filled(200, 100, [255, 255, 255, 255]);
/// let result = solve(&mut buffer, &GeometryTrait::default());
/// assert_eq!(result, Err(SolveError::NoCandidatesFound));
/// ```
pub fn solve(
    buffer: &mut PixelBuffer,
    geometry: &GeometryTrait,
) -> Result<GapOffset, SolveError> {
    solve_with_config(buffer, &SolverConfig::with_geometry(*geometry))
}

/// Find the gap offset with an explicit threshold and geometry
pub fn solve_with_config(
    buffer: &mut PixelBuffer,
    config: &SolverConfig,
) -> Result<GapOffset, SolveError> {
    pipeline::solve_report(buffer, config, false).map(|report| report.offset)
}

/// Solve and keep every intermediate product (candidates, all pairs, counters)
pub fn solve_with_report(
    buffer: &mut PixelBuffer,
    config: &SolverConfig,
) -> Result<SolveReport, SolveError> {
    pipeline::solve_report(buffer, config, false)
}

/// Run every stage except selection. Never fails; useful when solving did.
pub fn inspect(buffer: &mut PixelBuffer, config: &SolverConfig) -> Inspection {
    pipeline::match_buffer(buffer, config, false)
}

/// Solve from raw RGBA bytes (4 bytes per pixel, row-major).
///
/// The bytes are copied; a length other than `width * height * 4` fails with
/// [`SolveError::InvalidBufferFormat`].
pub fn solve_rgba(
    rgba: &[u8],
    width: usize,
    height: usize,
    config: &SolverConfig,
) -> Result<GapOffset, SolveError> {
    let mut buffer = PixelBuffer::new(width, height, rgba.to_vec())?;
    solve_with_config(&mut buffer, config)
}

/// Solve independent buffers in parallel. Results keep the input order.
pub fn solve_batch(
    buffers: &mut [PixelBuffer],
    config: &SolverConfig,
) -> Vec<Result<GapOffset, SolveError>> {
    buffers
        .par_iter_mut()
        .map(|buffer| solve_with_config(buffer, config))
        .collect()
}

/// Reusable solver holding its configuration
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
    /// Classify rows on the rayon pool during binarization
    parallel: bool,
}

impl Solver {
    /// Create a solver with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver with a specific configuration
    pub fn with_config(config: SolverConfig) -> Self {
        Self {
            config,
            parallel: false,
        }
    }

    /// Binarize rows in parallel (same result, faster on large images)
    pub fn with_parallel_binarization(mut self) -> Self {
        self.parallel = true;
        self
    }

    /// Current configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find the gap offset in `buffer` (binarized in place)
    pub fn solve(&self, buffer: &mut PixelBuffer) -> Result<GapOffset, SolveError> {
        self.solve_report(buffer).map(|report| report.offset)
    }

    /// Solve and return the full report
    pub fn solve_report(&self, buffer: &mut PixelBuffer) -> Result<SolveReport, SolveError> {
        pipeline::solve_report(buffer, &self.config, self.parallel)
    }

    /// The first qualifying pair itself, for callers that need both edges
    pub fn solve_single_pair(&self, buffer: &mut PixelBuffer) -> Result<MatchPair, SolveError> {
        let mut report = self.solve_report(buffer)?;
        // A successful report always carries at least one pair
        Ok(report.pairs.swap_remove(0))
    }
}
