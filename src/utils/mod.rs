//! Pixel-level helpers
//!
//! - Binarization (global luminance threshold, sequential and row-parallel)

pub mod binarization;
