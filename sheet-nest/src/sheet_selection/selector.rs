use itertools::Itertools;
use log::{debug, warn};
use ordered_float::OrderedFloat;

use crate::entities::{Part, SheetSize};
use crate::sheet_selection::SheetCatalog;
use crate::sheet_selection::catalog::largest;
use crate::{NestingError, Result};

/// Picks a stock sheet for a job when the caller does not pin one.
pub struct SheetSelector<'a> {
    catalog: &'a SheetCatalog,
}

impl<'a> SheetSelector<'a> {
    /// Above this quantity sheet changeovers dominate, so the largest sheet is preferred
    pub const LARGE_QUANTITY: usize = 50;
    /// Custom sheets are this many part-sides wide
    pub const CUSTOM_GROWTH_FACTOR: f32 = 2.0;

    pub fn new(catalog: &'a SheetCatalog) -> Self {
        Self { catalog }
    }

    /// Selects a sheet for `quantity` units of a `part_width` x `part_height` part.
    ///
    /// Falls back to a synthesized custom sheet when no catalog sheet can hold the part.
    pub fn select_sheet(&self, part_width: f32, part_height: f32, quantity: usize) -> Result<SheetSize> {
        if !valid_dims(part_width, part_height) {
            return Err(NestingError::NoFeasibleSheet {
                width: part_width,
                height: part_height,
            });
        }
        let candidates = self
            .catalog
            .candidates(part_width, part_height)
            .collect_vec();
        let side = f32::max(part_width, part_height);
        self.select_among(candidates, (part_width, part_height), side, quantity)
    }

    /// Selects a sheet for a job of several parts.
    ///
    /// Only catalog sheets holding every part in one of its allowed orientations are candidates.
    /// Among those, the part with the largest footprint (the first one on ties) stands in for the job,
    /// with the total quantity of all parts. Without candidates, the custom sheet is sized to the
    /// largest dimension of any part. A job without parts gets the largest catalog sheet.
    pub fn select_sheet_for_parts(&self, parts: &[Part], allow_rotation: bool) -> Result<SheetSize> {
        let Some(representative) = parts.iter().rev().max_by_key(|p| OrderedFloat(p.area())) else {
            return self
                .catalog
                .largest()
                .copied()
                .ok_or(NestingError::NoFeasibleSheet {
                    width: 0.0,
                    height: 0.0,
                });
        };
        if let Some(p) = parts.iter().find(|p| !valid_dims(p.width, p.height)) {
            return Err(NestingError::NoFeasibleSheet {
                width: p.width,
                height: p.height,
            });
        }

        let candidates = self
            .catalog
            .sheets
            .iter()
            .filter(|s| {
                parts
                    .iter()
                    .all(|p| s.can_contain(p.width, p.height, allow_rotation && p.rotatable))
            })
            .collect_vec();
        let side = parts
            .iter()
            .map(|p| f32::max(p.width, p.height))
            .fold(0.0, f32::max);
        let total_quantity = parts.iter().map(|p| p.quantity).sum();

        self.select_among(
            candidates,
            (representative.width, representative.height),
            side,
            total_quantity,
        )
    }

    /// Picks among `candidates` for `quantity` units of a `part` sized part.
    /// Without candidates a custom sheet of `side`-wide cells is synthesized.
    fn select_among(
        &self,
        candidates: Vec<&SheetSize>,
        part: (f32, f32),
        side: f32,
        quantity: usize,
    ) -> Result<SheetSize> {
        let (part_width, part_height) = part;
        let infeasible = || NestingError::NoFeasibleSheet {
            width: part_width,
            height: part_height,
        };
        let quantity = quantity.max(1);

        if candidates.is_empty() {
            let sheet = custom_sheet(side, quantity);
            warn!(
                "[SEL] no catalog sheet holds a {part_width}x{part_height} part, synthesized a {}x{} sheet",
                sheet.width, sheet.length
            );
            return match sheet.can_contain(side, side, false) && sheet.area().is_finite() {
                true => Ok(sheet),
                false => Err(infeasible()),
            };
        }

        if quantity > Self::LARGE_QUANTITY {
            let sheet = *largest(candidates.into_iter()).ok_or_else(infeasible)?;
            debug!(
                "[SEL] quantity {quantity} > {}, selecting largest sheet {}x{}",
                Self::LARGE_QUANTITY,
                sheet.width,
                sheet.length
            );
            return Ok(sheet);
        }

        let mut best: Option<(SheetSize, f32)> = None;
        for sheet in candidates {
            let efficiency = grid_fit_efficiency(sheet, part_width, part_height, quantity);
            debug!(
                "[SEL] sheet {}x{} has an estimated efficiency of {:.3}",
                sheet.width, sheet.length, efficiency
            );
            match best {
                Some((_, best_eff)) if best_eff >= efficiency => {}
                _ => best = Some((*sheet, efficiency)),
            }
        }
        best.map(|(sheet, _)| sheet).ok_or_else(infeasible)
    }
}

fn valid_dims(width: f32, height: f32) -> bool {
    width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
}

/// Sheet two `side`s wide, long enough for two `side` x `side` cells per row for the whole quantity.
fn custom_sheet(side: f32, quantity: usize) -> SheetSize {
    //rows are stacked by addition, the same way the packers advance
    let length = (0..quantity.div_ceil(2)).fold(0.0, |length, _| length + side);
    SheetSize::new(side * SheetSelector::CUSTOM_GROWTH_FACTOR, length)
}

/// Fraction of the consumed sheet area covered when parts are laid out in a simple grid.
/// Sheets that only hold the part turned are estimated with the turned dimensions.
fn grid_fit_efficiency(sheet: &SheetSize, part_width: f32, part_height: f32, quantity: usize) -> f32 {
    let (pw, ph) = match sheet.can_contain(part_width, part_height, false) {
        true => (part_width, part_height),
        false => (part_height, part_width),
    };
    let per_sheet = (sheet.width / pw).floor() as usize * (sheet.length / ph).floor() as usize;
    if per_sheet == 0 {
        return 0.0;
    }
    let sheets_needed = quantity.div_ceil(per_sheet);
    (quantity as f32 * pw * ph) / (sheets_needed as f32 * sheet.area())
}
