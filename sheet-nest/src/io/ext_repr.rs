use serde::{Deserialize, Serialize};

use crate::entities::{Rotation, SheetSize};

/// External representation of a complete layout, grouped per sheet.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtNestingLayout {
    /// Number of consumed sheets
    pub total_sheets: usize,
    /// One entry per consumed sheet, in sheet order
    pub sheets: Vec<ExtSheetLayout>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtSheetLayout {
    pub sheet_index: usize,
    pub sheet_size: SheetSize,
    pub part_count: usize,
    /// Placed area over sheet area, in percent
    pub utilization: f32,
    pub parts: Vec<ExtPlacedPart>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtPlacedPart {
    pub part_id: String,
    /// Lower-left corner on the sheet
    pub position: ExtPosition,
    /// Dimensions after rotation
    pub size: ExtSize,
    pub rotation: Rotation,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtSize {
    pub width: f32,
    pub height: f32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtPosition {
    pub x: f32,
    pub y: f32,
}
