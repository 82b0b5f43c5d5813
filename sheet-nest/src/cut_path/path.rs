use serde::{Deserialize, Serialize};

use crate::geometry::primitives::Point;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SegmentKind {
    /// Rapid traverse with the beam off
    Move,
    /// Feed move through material
    Cut,
}

/// A straight tool movement on a single sheet
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CutSegment {
    pub kind: SegmentKind,
    pub sheet_index: usize,
    pub from: Point,
    pub to: Point,
    pub length: f32,
}

/// Ordered tool-path over all sheets of a layout, with its totals.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CutPath {
    /// Segments of all sheets, in sheet order
    pub segments: Vec<CutSegment>,
    pub total_cut_length: f32,
    pub total_move_length: f32,
    pub estimated_time_seconds: f32,
    /// One pierce per cut part
    pub pierce_count: usize,
}

impl CutPath {
    /// Segments belonging to a single sheet
    pub fn sheet_segments(&self, sheet_index: usize) -> impl Iterator<Item = &CutSegment> {
        self.segments
            .iter()
            .filter(move |s| s.sheet_index == sheet_index)
    }
}
