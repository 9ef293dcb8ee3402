//! Image I/O and inspection helpers for the CLI and tests

use crate::error::{RenderError, SolveError};
use crate::models::PixelBuffer;
use crate::models::buffer::CHANNELS;
use crate::utils::binarization::luminance;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures while turning an image file into a pixel buffer.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Decoding failed
    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),
    /// Decoded bytes did not form an RGBA buffer
    #[error(transparent)]
    Buffer(#[from] SolveError),
}

/// Decode an image file into an RGBA pixel buffer.
pub fn load_rgba<P: AsRef<Path>>(path: P) -> Result<PixelBuffer, LoadError> {
    let rgba = image::open(path)?.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(PixelBuffer::new(
        width as usize,
        height as usize,
        rgba.into_raw(),
    )?)
}

/// Encode a buffer as an image; the format follows the file extension.
pub fn save_overlay<P: AsRef<Path>>(buffer: &PixelBuffer, path: P) -> Result<(), RenderError> {
    image::save_buffer(
        path,
        buffer.as_bytes(),
        buffer.width() as u32,
        buffer.height() as u32,
        image::ColorType::Rgba8,
    )?;
    Ok(())
}

/// Summary statistics for a binarized buffer.
#[derive(Debug, Clone, Copy)]
pub struct BinaryStats {
    /// Count of black pixels.
    pub black_pixels: usize,
    /// Total pixels in the buffer.
    pub total_pixels: usize,
    /// Ratio of black pixels to total pixels.
    pub black_ratio: f64,
}

/// Count black pixels (RGB all zero) in a buffer.
pub fn binary_stats(buffer: &PixelBuffer) -> BinaryStats {
    let black = buffer
        .as_bytes()
        .chunks_exact(CHANNELS)
        .filter(|px| px[..3] == [0u8, 0, 0])
        .count();
    let total = buffer.len();
    let ratio = if total == 0 {
        0.0
    } else {
        black as f64 / total as f64
    };
    BinaryStats {
        black_pixels: black,
        total_pixels: total,
        black_ratio: ratio,
    }
}

/// Mean luminance over all pixels, 0.0 for an empty buffer.
///
/// Run on the original image to see where the threshold sits.
pub fn mean_luminance(buffer: &PixelBuffer) -> f64 {
    if buffer.is_empty() {
        return 0.0;
    }
    let sum: f64 = buffer
        .as_bytes()
        .chunks_exact(CHANNELS)
        .map(|px| luminance(px[0], px[1], px[2]) as f64)
        .sum();
    sum / buffer.len() as f64
}

/// Image paths under `root`, sorted, optionally truncated to `limit`.
pub fn dataset_iter<P: AsRef<Path>>(
    root: P,
    limit: Option<usize>,
) -> impl Iterator<Item = PathBuf> {
    let mut images = collect_images(root.as_ref());
    images.sort();
    if let Some(limit) = limit {
        images.truncate(limit);
    }
    images.into_iter()
}

fn collect_images(root: &Path) -> Vec<PathBuf> {
    let mut stack = vec![root.to_path_buf()];
    let mut images = Vec::new();

    while let Some(dir) = stack.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(_) => continue,
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
                continue;
            }
            if let Some(ext) = path.extension() {
                let ext = ext.to_string_lossy().to_lowercase();
                if matches!(ext.as_str(), "png" | "jpg" | "jpeg" | "gif" | "bmp" | "webp") {
                    images.push(path);
                }
            }
        }
    }

    images
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEMP_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn temp_dir() -> PathBuf {
        let sequence = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let dir = std::env::temp_dir().join(format!(
            "slide_gap_tools_{}_{sequence}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("failed to create temp dir");
        dir
    }

    #[test]
    fn test_binary_stats() {
        let mut buffer = PixelBuffer::filled(4, 2, [255, 255, 255, 255]);
        buffer.set_pixel(0, 0, [0, 0, 0, 255]);
        buffer.set_pixel(3, 1, [0, 0, 0, 0]);
        let stats = binary_stats(&buffer);
        assert_eq!(stats.black_pixels, 2);
        assert_eq!(stats.total_pixels, 8);
        assert!((stats.black_ratio - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_mean_luminance() {
        let mut buffer = PixelBuffer::filled(2, 1, [30, 60, 90, 255]);
        buffer.set_pixel(1, 0, [255, 255, 255, 0]);
        assert!((mean_luminance(&buffer) - 157.5).abs() < 1e-4);
        assert_eq!(mean_luminance(&PixelBuffer::filled(0, 3, [9; 4])), 0.0);
    }

    #[test]
    fn test_save_then_load_png() {
        let dir = temp_dir();
        let path = dir.join("overlay.png");
        let mut buffer = PixelBuffer::filled(5, 3, [255, 255, 255, 255]);
        buffer.set_pixel(2, 1, [255, 0, 0, 255]);

        save_overlay(&buffer, &path).unwrap();
        let loaded = load_rgba(&path).unwrap();
        assert_eq!(loaded, buffer);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn test_dataset_iter_filters_and_limits() {
        let dir = temp_dir();
        fs::create_dir_all(dir.join("nested")).unwrap();
        for name in ["b.png", "a.JPG", "notes.txt", "nested/c.bmp"] {
            fs::write(dir.join(name), b"").unwrap();
        }

        let all: Vec<PathBuf> = dataset_iter(&dir, None).collect();
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|w| w[0] <= w[1]));

        let limited: Vec<PathBuf> = dataset_iter(&dir, Some(2)).collect();
        assert_eq!(limited.len(), 2);
        let _ = fs::remove_dir_all(dir);
    }
}
