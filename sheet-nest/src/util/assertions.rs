use itertools::Itertools;
use log::error;

use crate::entities::{Part, PlacedPart, Rotation, SheetSize};
use crate::geometry::primitives::Rect;
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

/// Every placement has a positive area, lies within the sheet (exactly, `x + width <= sheet.width`) and
/// does not overlap any other placement on the same sheet.
pub fn layout_is_valid(layout: &[PlacedPart], sheet: &SheetSize) -> bool {
    let sheet_bbox = sheet.bbox();
    for pp in layout {
        if !sheet_bbox.contains(&pp.rect()) {
            error!("[ASSERT] {} on sheet {} exceeds the sheet: {:?}", pp.part_id, pp.sheet_index, pp.rect());
            return false;
        }
        if !(pp.width > 0.0 && pp.height > 0.0) {
            error!("[ASSERT] {} has degenerate dimensions {}x{}", pp.part_id, pp.width, pp.height);
            return false;
        }
    }
    for (a, b) in layout
        .iter()
        .tuple_combinations()
        .filter(|(a, b): &(&PlacedPart, &PlacedPart)| a.sheet_index == b.sheet_index)
    {
        if a.rect().almost_overlaps(&b.rect()) {
            error!(
                "[ASSERT] {} and {} overlap on sheet {}: {:?} vs {:?}",
                a.part_id,
                b.part_id,
                a.sheet_index,
                a.rect(),
                b.rect()
            );
            return false;
        }
    }
    true
}

/// No free rectangle overlaps a placed part
pub fn free_rects_disjoint_from<'a>(
    free_rects: &[Rect],
    placed: impl Iterator<Item = &'a PlacedPart>,
) -> bool {
    placed
        .map(|pp| pp.rect())
        .all(|r| free_rects.iter().all(|fr| !fr.almost_overlaps(&r)))
}

/// Each part has exactly `quantity` units in the layout
pub fn all_units_placed(layout: &[PlacedPart], parts: &[Part]) -> bool {
    let counts = layout.iter().counts_by(|pp| pp.part_index);
    parts
        .iter()
        .enumerate()
        .all(|(i, p)| counts.get(&i).copied().unwrap_or(0) == p.quantity)
        && counts.keys().all(|&i| i < parts.len())
}

pub fn no_rotations(layout: &[PlacedPart]) -> bool {
    layout.iter().all(|pp| pp.rotation == Rotation::Deg0)
}
