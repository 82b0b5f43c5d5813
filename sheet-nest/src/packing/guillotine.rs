use std::cmp::Reverse;

use itertools::Itertools;
use log::debug;
use ordered_float::OrderedFloat;
use rand::Rng;

use crate::Result;
use crate::entities::{PlacedPart, Rotation, SheetSize};
use crate::packing::{Packer, PartUnit};

/// Shelf packer producing layouts that can be separated with straight end-to-end cuts.
///
/// Units are placed left to right in rows ("shelves"); a row is as high as its highest unit.
pub struct GuillotinePacker;

impl GuillotinePacker {
    /// Unit indices sorted by their largest dimension, descending. Stable for equal dimensions.
    pub fn largest_first(units: &[PartUnit]) -> Vec<usize> {
        (0..units.len())
            .sorted_by_key(|&i| Reverse(OrderedFloat(f32::max(units[i].width, units[i].height))))
            .collect()
    }

    /// Places the units in exactly the given `order`, opening sheets as needed.
    pub fn place_sequence(
        units: &[PartUnit],
        order: &[usize],
        sheet: &SheetSize,
    ) -> Result<Vec<PlacedPart>> {
        let mut layout = Vec::with_capacity(order.len());
        let mut shelf = Shelf::default();

        for &i in order {
            let unit = &units[i];
            let rotation = orientation(unit, sheet)
                .ok_or_else(|| unit.does_not_fit(sheet.width, sheet.length))?;
            let (w, h) = unit.dims(rotation);

            if shelf.x + w > sheet.width {
                //wrap to a new row
                shelf.y += shelf.height;
                shelf.x = 0.0;
                shelf.height = 0.0;
            }
            if shelf.y + h > sheet.length {
                //sheet is full
                shelf = Shelf {
                    sheet_index: shelf.sheet_index + 1,
                    ..Shelf::default()
                };
            }

            layout.push(unit.place(shelf.sheet_index, shelf.x, shelf.y, rotation));
            shelf.x += w;
            shelf.height = f32::max(shelf.height, h);
        }

        Ok(layout)
    }
}

impl Packer for GuillotinePacker {
    fn pack(
        &self,
        units: &[PartUnit],
        sheet: &SheetSize,
        _rng: &mut impl Rng,
    ) -> Result<Vec<PlacedPart>> {
        let order = GuillotinePacker::largest_first(units);
        let layout = GuillotinePacker::place_sequence(units, &order, sheet)?;
        debug!(
            "[GT] shelf packed {} units on {} sheet(s)",
            layout.len(),
            layout.last().map_or(0, |pp| pp.sheet_index + 1)
        );
        Ok(layout)
    }
}

/// Cursor of the shelf packer
#[derive(Default)]
struct Shelf {
    sheet_index: usize,
    x: f32,
    y: f32,
    height: f32,
}

/// Portrait units are turned landscape when allowed and the landscape orientation fits the sheet width.
/// Otherwise the unit stays upright, unless only the turned orientation fits.
fn orientation(unit: &PartUnit, sheet: &SheetSize) -> Option<Rotation> {
    let fits = |r: Rotation| {
        let (w, h) = unit.dims(r);
        w <= sheet.width && h <= sheet.length
    };
    if unit.rotatable && unit.height > unit.width && fits(Rotation::Deg90) {
        return Some(Rotation::Deg90);
    }
    unit.orientations().find(|&r| fits(r))
}
