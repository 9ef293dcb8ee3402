use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Lengths of the two edge segments left when a notch interrupts a piece edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotchLengths {
    /// Length of the first segment
    pub a: usize,
    /// Length of the second segment
    pub b: usize,
}

/// Exclusive bounds on the distance between the two edges of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidthBounds {
    /// Lower bound (exclusive)
    pub min: usize,
    /// Upper bound (exclusive)
    pub max: usize,
}

impl WidthBounds {
    /// True when `distance` lies strictly between `min` and `max`
    pub fn admits(&self, distance: usize) -> bool {
        self.min < distance && distance < self.max
    }
}

/// Pixel geometry of the puzzle piece outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryTrait {
    /// Height of an uninterrupted piece edge
    pub full_line_length: usize,
    /// Segment lengths of an edge broken by a notch
    pub notch_line_length: NotchLengths,
    /// Allowed distance between left and right edges
    pub block_width: WidthBounds,
}

impl Default for GeometryTrait {
    fn default() -> Self {
        Self {
            full_line_length: 87,
            notch_line_length: NotchLengths { a: 25, b: 37 },
            block_width: WidthBounds { min: 83, max: 87 },
        }
    }
}

impl GeometryTrait {
    /// Reject geometries that can never match anything
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.full_line_length == 0 {
            return Err(ConfigError::Invalid("full_line_length must be positive".into()));
        }
        if self.notch_line_length.a == 0 || self.notch_line_length.b == 0 {
            return Err(ConfigError::Invalid("notch segment lengths must be positive".into()));
        }
        if self.block_width.min >= self.block_width.max {
            return Err(ConfigError::Invalid(format!(
                "block_width.min ({}) must be below block_width.max ({})",
                self.block_width.min, self.block_width.max
            )));
        }
        Ok(())
    }
}
