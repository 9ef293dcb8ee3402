//! Gap detection stages
//!
//! This module turns black pixels into a gap offset:
//! - Vertical run indexing (per-column runs of consecutive black rows)
//! - Edge matching (full-line and notch-line columns, paired by width)
//! - Result selection (first qualifying pair becomes the offset)

/// Edge-line classification and pairing
pub mod matcher;
/// Per-column vertical run indexing
pub mod runs;
/// Offset selection from the ordered pair list
pub mod selector;
