use serde::Serialize;

use crate::entities::{PlacedPart, SheetSize};
use crate::io::export::export_layout;
use crate::io::ext_repr::ExtNestingLayout;
use crate::io::svg::{SvgDrawOptions, layout_to_svg};

/// Outcome of a single nesting run. Derived from the layout, never modified afterwards.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NestingResult {
    /// The sheet every layout entry refers to
    pub sheet: SheetSize,
    /// Largest number of units on a single sheet
    pub parts_per_sheet: usize,
    pub sheets_required: usize,
    /// Placed area over consumed sheet area, in percent
    pub utilization: f32,
    /// Consumed sheet area not covered by parts
    pub waste_area: f32,
    /// Every placed unit, in placement order
    pub layout: Vec<PlacedPart>,
    pub layout_svg: String,
    pub layout_json: ExtNestingLayout,
}

/// Per-sheet summary of a layout
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct SheetStats {
    pub sheet_index: usize,
    pub part_count: usize,
    pub placed_area: f32,
    /// In percent of the sheet area
    pub utilization: f32,
}

impl NestingResult {
    pub fn new(sheet: SheetSize, layout: Vec<PlacedPart>, svg_options: &SvgDrawOptions) -> Self {
        let sheets_required = sheets_required(&layout);
        let placed_area = layout.iter().map(|pp| pp.area()).sum::<f32>();
        let consumed_area = sheets_required as f32 * sheet.area();
        let parts_per_sheet = sheet_stats(&layout, &sheet)
            .iter()
            .map(|s| s.part_count)
            .max()
            .unwrap_or(0);

        let layout_svg = layout_to_svg(&layout, &sheet, sheets_required, svg_options).to_string();
        let layout_json = export_layout(&layout, &sheet, sheets_required);

        Self {
            sheet,
            parts_per_sheet,
            sheets_required,
            utilization: utilization_pct(placed_area, consumed_area),
            waste_area: f32::max(consumed_area - placed_area, 0.0),
            layout,
            layout_svg,
            layout_json,
        }
    }

    pub fn placed_area(&self) -> f32 {
        self.layout.iter().map(|pp| pp.area()).sum()
    }

    pub fn sheet_stats(&self) -> Vec<SheetStats> {
        sheet_stats(&self.layout, &self.sheet)
    }

    pub fn total_units(&self) -> usize {
        self.layout.len()
    }
}

/// Number of sheets consumed by a layout (highest sheet index + 1)
pub fn sheets_required(layout: &[PlacedPart]) -> usize {
    layout
        .iter()
        .map(|pp| pp.sheet_index + 1)
        .max()
        .unwrap_or(0)
}

/// `placed / consumed` in percent, clamped to `[0, 100]`.
/// An empty layout or a zero consumed area yields 0 instead of NaN or infinity.
pub fn utilization_pct(placed_area: f32, consumed_area: f32) -> f32 {
    if placed_area <= 0.0 || consumed_area <= 0.0 || !consumed_area.is_finite() {
        return 0.0;
    }
    (placed_area / consumed_area * 100.0).clamp(0.0, 100.0)
}

/// One entry per consumed sheet, including sheets which ended up empty.
pub fn sheet_stats(layout: &[PlacedPart], sheet: &SheetSize) -> Vec<SheetStats> {
    let mut stats = (0..sheets_required(layout))
        .map(|sheet_index| SheetStats {
            sheet_index,
            part_count: 0,
            placed_area: 0.0,
            utilization: 0.0,
        })
        .collect::<Vec<_>>();

    for pp in layout {
        let s = &mut stats[pp.sheet_index];
        s.part_count += 1;
        s.placed_area += pp.area();
    }
    for s in stats.iter_mut() {
        s.utilization = utilization_pct(s.placed_area, sheet.area());
    }
    stats
}
