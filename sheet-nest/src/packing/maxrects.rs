use log::debug;
use rand::Rng;

use crate::Result;
use crate::entities::{PlacedPart, Rotation, SheetSize};
use crate::geometry::primitives::Rect;
use crate::packing::{Packer, PartUnit};
use crate::util::{FreeRectPolicy, assertions};

/// MaxRects packer using Best-Short-Side-Fit scoring.
pub struct MaxRectsPacker {
    pub policy: FreeRectPolicy,
}

impl MaxRectsPacker {
    pub fn new(policy: FreeRectPolicy) -> Self {
        Self { policy }
    }
}

impl Packer for MaxRectsPacker {
    fn pack(
        &self,
        units: &[PartUnit],
        sheet: &SheetSize,
        _rng: &mut impl Rng,
    ) -> Result<Vec<PlacedPart>> {
        let mut bins: Vec<FreeSpace> = vec![];
        let mut layout = Vec::with_capacity(units.len());

        for unit in units {
            //search the open sheets in order, the first one admitting the unit is used
            let found = bins
                .iter()
                .enumerate()
                .find_map(|(idx, fs)| fs.best_fit(unit).map(|fit| (idx, fit)));

            let (sheet_index, fit) = match found {
                Some(found) => found,
                None => {
                    //open a new sheet and retry once
                    bins.push(FreeSpace::new(sheet));
                    let sheet_index = bins.len() - 1;
                    debug!("[MR] opened sheet {sheet_index}");
                    match bins[sheet_index].best_fit(unit) {
                        Some(fit) => (sheet_index, fit),
                        None => return Err(unit.does_not_fit(sheet.width, sheet.length)),
                    }
                }
            };

            let placed = unit.place(sheet_index, fit.x, fit.y, fit.rotation);
            debug!(
                "[MR] placing {} on sheet {} at ({}, {}), rotation {}, score {}",
                placed.part_id,
                sheet_index,
                placed.x,
                placed.y,
                placed.rotation.degrees(),
                fit.score
            );
            bins[sheet_index].occupy(placed.rect(), self.policy);
            debug_assert!(assertions::free_rects_disjoint_from(
                &bins[sheet_index].free_rects,
                layout
                    .iter()
                    .chain(std::iter::once(&placed))
                    .filter(|pp: &&PlacedPart| pp.sheet_index == sheet_index)
            ));
            layout.push(placed);
        }

        Ok(layout)
    }
}

/// Candidate position for a unit within a [`FreeSpace`]
#[derive(Clone, Copy, Debug)]
struct Fit {
    x: f32,
    y: f32,
    rotation: Rotation,
    score: f32,
}

/// The maximal empty rectangles of a single sheet.
#[derive(Clone, Debug)]
pub(crate) struct FreeSpace {
    pub free_rects: Vec<Rect>,
}

impl FreeSpace {
    pub fn new(sheet: &SheetSize) -> Self {
        Self {
            free_rects: vec![sheet.bbox()],
        }
    }

    /// Lowest short-side leftover over all free rectangles and orientations.
    /// The footprint is checked as it will be placed (`x_min + w <= x_max`), so it never leaves its free rectangle.
    /// On ties the first rectangle wins, and the unrotated orientation before the rotated one.
    fn best_fit(&self, unit: &PartUnit) -> Option<Fit> {
        let mut best: Option<Fit> = None;
        for fr in &self.free_rects {
            for rotation in unit.orientations() {
                let (w, h) = unit.dims(rotation);
                if fr.x_min + w > fr.x_max || fr.y_min + h > fr.y_max {
                    continue;
                }
                let score = f32::max(f32::min(fr.width() - w, fr.height() - h), 0.0);
                if best.is_none_or(|b| score < b.score) {
                    best = Some(Fit {
                        x: fr.x_min,
                        y: fr.y_min,
                        rotation,
                        score,
                    });
                }
            }
        }
        best
    }

    /// Removes the area of `used` from the free space.
    fn occupy(&mut self, used: Rect, policy: FreeRectPolicy) {
        match policy {
            FreeRectPolicy::DropOverlapping => {
                self.free_rects.retain(|fr| !fr.overlaps(&used));
            }
            FreeRectPolicy::Split => {
                let mut residuals = vec![];
                self.free_rects.retain(|fr| match fr.overlaps(&used) {
                    true => {
                        residuals.extend(split(fr, &used));
                        false
                    }
                    false => true,
                });
                self.free_rects.extend(residuals);
                prune_contained(&mut self.free_rects);
            }
        }
    }
}

/// The (up to four) maximal parts of `free` not covered by `used`.
fn split(free: &Rect, used: &Rect) -> impl Iterator<Item = Rect> {
    let left = match used.x_min > free.x_min {
        true => Rect::try_new(free.x_min, free.y_min, used.x_min, free.y_max),
        false => None,
    };
    let right = match used.x_max < free.x_max {
        true => Rect::try_new(used.x_max, free.y_min, free.x_max, free.y_max),
        false => None,
    };
    let bottom = match used.y_min > free.y_min {
        true => Rect::try_new(free.x_min, free.y_min, free.x_max, used.y_min),
        false => None,
    };
    let top = match used.y_max < free.y_max {
        true => Rect::try_new(free.x_min, used.y_max, free.x_max, free.y_max),
        false => None,
    };
    [left, right, bottom, top].into_iter().flatten()
}

/// Removes every rectangle contained in another one (of duplicates, the later one survives).
fn prune_contained(rects: &mut Vec<Rect>) {
    let mut i = 0;
    while i < rects.len() {
        let mut i_removed = false;
        let mut j = i + 1;
        while j < rects.len() {
            if rects[j].contains(&rects[i]) {
                rects.remove(i);
                i_removed = true;
                break;
            }
            if rects[i].contains(&rects[j]) {
                rects.remove(j);
            } else {
                j += 1;
            }
        }
        if !i_removed {
            i += 1;
        }
    }
}
