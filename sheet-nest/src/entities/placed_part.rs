use serde::{Deserialize, Serialize};

use crate::geometry::primitives::{Point, Rect};

/// Orientation of a placed part relative to its definition.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(into = "u16", try_from = "u16")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
}

impl Rotation {
    pub fn degrees(&self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
        }
    }

    /// Dimensions of a `width` x `height` part after applying this rotation
    pub fn apply(&self, width: f32, height: f32) -> (f32, f32) {
        match self {
            Rotation::Deg0 => (width, height),
            Rotation::Deg90 => (height, width),
        }
    }
}

impl From<Rotation> for u16 {
    fn from(r: Rotation) -> Self {
        r.degrees()
    }
}

impl TryFrom<u16> for Rotation {
    type Error = String;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            _ => Err(format!("unsupported rotation: {degrees} degrees")),
        }
    }
}

/// A single unit of a [`Part`](crate::entities::Part) placed on a sheet.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlacedPart {
    /// Identifier of the part this unit belongs to
    pub part_id: String,
    /// Index of the part in the input list
    pub part_index: usize,
    /// Index of the sheet, in the order the sheets were opened
    pub sheet_index: usize,
    /// Lower-left corner
    pub x: f32,
    pub y: f32,
    pub rotation: Rotation,
    /// Dimensions after rotation
    pub width: f32,
    pub height: f32,
}

impl PlacedPart {
    /// Footprint of the placed part on its sheet
    pub fn rect(&self) -> Rect {
        Rect {
            x_min: self.x,
            y_min: self.y,
            x_max: self.x + self.width,
            y_max: self.y + self.height,
        }
    }

    pub fn position(&self) -> Point {
        Point(self.x, self.y)
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}
