//! Debug overlay: paint matched edge runs onto a copy of a buffer
//!
//! Drawing never feeds back into solving; a failed overlay leaves the
//! reported offset untouched.

use crate::error::RenderError;
use crate::models::{MatchPair, PixelBuffer, Run};

/// Default marker colour (opaque red)
pub const DEFAULT_MARKER: [u8; 4] = [255, 0, 0, 255];

fn paint_run(
    canvas: &mut PixelBuffer,
    column: usize,
    run: &Run,
    marker: [u8; 4],
) -> Result<(), RenderError> {
    if column >= canvas.width() || run.current_row >= canvas.height() {
        return Err(RenderError::RunOutOfBounds {
            column,
            start: run.start_row,
            end: run.current_row,
            width: canvas.width(),
            height: canvas.height(),
        });
    }
    for y in run.start_row..=run.current_row {
        canvas.set_pixel(column, y, marker);
    }
    Ok(())
}

/// Copy `buffer` and paint the runs of both edges of `pair` in `marker`
pub fn render_pair(
    buffer: &PixelBuffer,
    pair: &MatchPair,
    marker: [u8; 4],
) -> Result<PixelBuffer, RenderError> {
    let mut canvas = buffer.clone();
    for candidate in [&pair.first, &pair.second] {
        for run in &candidate.runs {
            paint_run(&mut canvas, candidate.column, run, marker)?;
        }
    }
    Ok(canvas)
}

/// Overlay for the selected (first) pair of an ordered pair list
pub fn render_overlay(
    buffer: &PixelBuffer,
    pairs: &[MatchPair],
    marker: [u8; 4],
) -> Result<PixelBuffer, RenderError> {
    let pair = pairs.first().ok_or(RenderError::NothingToDraw)?;
    render_pair(buffer, pair, marker)
}
