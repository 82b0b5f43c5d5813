use serde::{Deserialize, Serialize};

use crate::geometry::primitives::Rect;
use crate::{NestingError, Result};

/// Dimensions of a stock sheet. `width` runs along the x-axis, `length` along the y-axis.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SheetSize {
    pub width: f32,
    pub length: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f32>,
}

impl SheetSize {
    pub const fn new(width: f32, length: f32) -> Self {
        Self {
            width,
            length,
            thickness: None,
        }
    }

    pub fn with_thickness(mut self, thickness: f32) -> Self {
        self.thickness = Some(thickness);
        self
    }

    pub fn area(&self) -> f32 {
        self.width * self.length
    }

    /// The sheet as a rectangle anchored at the origin
    pub fn bbox(&self) -> Rect {
        Rect {
            x_min: 0.0,
            y_min: 0.0,
            x_max: self.width,
            y_max: self.length,
        }
    }

    /// Whether a `width` x `height` rectangle fits on an empty sheet, optionally turned by 90 degrees.
    pub fn can_contain(&self, width: f32, height: f32, allow_rotation: bool) -> bool {
        let upright = width <= self.width && height <= self.length;
        let turned = allow_rotation && height <= self.width && width <= self.length;
        upright || turned
    }

    pub fn validate(&self) -> Result<()> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        match valid(self.width) && valid(self.length) {
            true => Ok(()),
            false => Err(NestingError::InvalidSheet {
                width: self.width,
                length: self.length,
            }),
        }
    }
}
