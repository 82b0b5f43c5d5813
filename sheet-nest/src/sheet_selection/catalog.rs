use serde::{Deserialize, Serialize};

use crate::entities::SheetSize;

/// Standard stock sheets (mm), in order of preference on ties.
pub const STANDARD_SHEETS: [SheetSize; 3] = [
    SheetSize::new(1000.0, 2000.0),
    SheetSize::new(1220.0, 2440.0),
    SheetSize::new(1250.0, 2500.0),
];

/// The stock sheets a job can be cut from.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SheetCatalog {
    pub sheets: Vec<SheetSize>,
}

impl SheetCatalog {
    pub fn new(sheets: Vec<SheetSize>) -> Self {
        Self { sheets }
    }

    /// Sheets that can hold a `width` x `height` part in at least one orientation.
    pub fn candidates(&self, width: f32, height: f32) -> impl Iterator<Item = &SheetSize> {
        self.sheets
            .iter()
            .filter(move |s| s.can_contain(width, height, true))
    }

    pub fn largest(&self) -> Option<&SheetSize> {
        largest(self.sheets.iter())
    }
}

impl Default for SheetCatalog {
    fn default() -> Self {
        SheetCatalog::new(STANDARD_SHEETS.to_vec())
    }
}

/// Largest sheet by area, first one wins on ties
pub(super) fn largest<'a>(sheets: impl Iterator<Item = &'a SheetSize>) -> Option<&'a SheetSize> {
    sheets.fold(None, |best: Option<&SheetSize>, s| match best {
        Some(b) if b.area() >= s.area() => Some(b),
        _ => Some(s),
    })
}
