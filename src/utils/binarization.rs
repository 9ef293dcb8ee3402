//! Global-threshold binarization of RGBA buffers
//!
//! Pixels are rewritten in place to pure black or pure white. Alpha is never
//! touched. Black pixels can be observed through a callback or collected as
//! a raster-ordered coordinate list.

use rayon::prelude::*;

use crate::models::buffer::CHANNELS;
use crate::models::{Coordinate, PixelBuffer};

const WHITE: [u8; 3] = [255, 255, 255];
const BLACK: [u8; 3] = [0, 0, 0];

/// Callback receiving the byte offset of a classified pixel
pub type PixelCallback<'a> = &'a mut dyn FnMut(usize);

/// Mean of the three colour channels
pub fn luminance(r: u8, g: u8, b: u8) -> f32 {
    (r as u32 + g as u32 + b as u32) as f32 / 3.0
}

/// Rewrite one RGBA pixel, returning true when it became white.
///
/// `(R+G+B)/3 > t` is evaluated as `R+G+B > 3t` so no fraction is lost.
#[inline]
fn classify_pixel(px: &mut [u8], threshold: u8) -> bool {
    let sum = px[0] as u32 + px[1] as u32 + px[2] as u32;
    let white = sum > 3 * threshold as u32;
    px[..3].copy_from_slice(if white { &WHITE } else { &BLACK });
    white
}

/// Binarize `buffer` in place against `threshold`.
///
/// Luminance equal to the threshold counts as black. Callbacks fire in raster
/// order with the byte offset of each pixel.
pub fn binarize<'b>(
    buffer: &'b mut PixelBuffer,
    threshold: u8,
    mut on_white: Option<PixelCallback<'_>>,
    mut on_black: Option<PixelCallback<'_>>,
) -> &'b mut PixelBuffer {
    for (i, px) in buffer.as_bytes_mut().chunks_exact_mut(CHANNELS).enumerate() {
        let offset = i * CHANNELS;
        if classify_pixel(px, threshold) {
            if let Some(cb) = on_white.as_deref_mut() {
                cb(offset);
            }
        } else if let Some(cb) = on_black.as_deref_mut() {
            cb(offset);
        }
    }
    buffer
}

/// Binarize in place and return the black pixels in raster order
pub fn binarize_collect(buffer: &mut PixelBuffer, threshold: u8) -> Vec<Coordinate> {
    let width = buffer.width();
    let mut black = Vec::new();
    let mut on_black = |offset: usize| black.push(Coordinate::from_offset(offset, width));
    binarize(buffer, threshold, None, Some(&mut on_black));
    black
}

/// Same result as [`binarize_collect`], with rows classified in parallel
pub fn binarize_parallel(buffer: &mut PixelBuffer, threshold: u8) -> Vec<Coordinate> {
    let width = buffer.width();
    if width == 0 {
        return Vec::new();
    }

    // Process rows in parallel; collect keeps row order
    let rows: Vec<Vec<Coordinate>> = buffer
        .as_bytes_mut()
        .par_chunks_mut(width * CHANNELS)
        .enumerate()
        .map(|(y, row)| {
            let mut black = Vec::new();
            for (x, px) in row.chunks_exact_mut(CHANNELS).enumerate() {
                if !classify_pixel(px, threshold) {
                    black.push(Coordinate::new(x, y));
                }
            }
            black
        })
        .collect();

    rows.into_iter().flatten().collect()
}
