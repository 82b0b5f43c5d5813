use serde::{Deserialize, Serialize};

/// Geometric primitive representing a point
#[derive(Debug, Clone, PartialEq, Copy, Default, Serialize, Deserialize)]
pub struct Point(pub f32, pub f32);

impl Point {
    pub const ORIGIN: Point = Point(0.0, 0.0);

    pub fn x(&self) -> f32 {
        self.0
    }

    pub fn y(&self) -> f32 {
        self.1
    }
}
