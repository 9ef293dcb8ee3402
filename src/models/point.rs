use super::buffer::CHANNELS;

/// Integer pixel coordinate of a black pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    /// Column
    pub x: usize,
    /// Row
    pub y: usize,
}

impl Coordinate {
    /// Create a new coordinate
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Recover the coordinate of the pixel starting at byte `offset` in an
    /// RGBA buffer of the given width.
    pub fn from_offset(offset: usize, width: usize) -> Self {
        let pixel = offset / CHANNELS;
        Self {
            x: pixel % width,
            y: pixel / width,
        }
    }

    /// Byte offset of this pixel's first channel in an RGBA buffer
    pub fn to_offset(&self, width: usize) -> usize {
        (self.y * width + self.x) * CHANNELS
    }
}
