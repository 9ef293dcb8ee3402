//! Vertical run-length indexing of black pixels
//! Groups raster-ordered black pixels into per-column runs of consecutive rows
use crate::models::{Coordinate, RunIndex};

/// Build the per-column run index from black pixels in raster order.
///
/// Within a column, rows must arrive strictly increasing (true for any
/// row-major scan). Other orders yield arbitrary run boundaries.
pub fn index_vertical_runs<I>(coordinates: I) -> RunIndex
where
    I: IntoIterator<Item = Coordinate>,
{
    let index: RunIndex = coordinates.into_iter().collect();
    log::trace!(
        "indexed {} runs over {} columns",
        index.run_count(),
        index.len()
    );
    index
}
