use thiserror::Error;

/// Failures of the gap-solving pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// Pixel data does not hold exactly four channels per pixel.
    #[error("invalid buffer format: expected {expected} bytes, got {actual}")]
    InvalidBufferFormat {
        /// Byte count implied by width * height * 4
        expected: usize,
        /// Byte count actually supplied
        actual: usize,
    },

    /// No column produced a full-line or notch-line signature.
    #[error("no full-line or notch-line columns found")]
    NoCandidatesFound,

    /// Candidate columns exist, but no two of them are a piece width apart.
    #[error("no candidate pair within width bounds ({full_lines} full lines, {notch_lines} notch lines)")]
    NoQualifyingPair {
        /// Number of full-line candidates seen
        full_lines: usize,
        /// Number of notch-line candidates seen
        notch_lines: usize,
    },
}

/// Failures while drawing or saving a debug overlay.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The report carries no pair to draw.
    #[error("nothing to draw: report has no matched pair")]
    NothingToDraw,

    /// A run does not fit inside the target buffer.
    #[error("run at column {column} rows {start}..={end} lies outside a {width}x{height} buffer")]
    RunOutOfBounds {
        /// Column of the offending run
        column: usize,
        /// First row of the run
        start: usize,
        /// Last row of the run
        end: usize,
        /// Buffer width
        width: usize,
        /// Buffer height
        height: usize,
    },

    /// Encoding the overlay image failed.
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

/// Failures while loading or validating a solver configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config '{path}': {source}")]
    Io {
        /// Path that was read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for [`crate::SolverConfig`].
    #[error("failed to parse config '{path}': {source}")]
    Parse {
        /// Path that was parsed
        path: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The geometry values cannot describe a piece.
    #[error("invalid geometry: {0}")]
    Invalid(String),
}
