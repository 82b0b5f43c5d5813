use crate::entities::{Part, PlacedPart, Rotation};
use crate::{NestingError, Result};

/// A single copy of a [`Part`] waiting to be placed.
#[derive(Clone, Debug, PartialEq)]
pub struct PartUnit {
    pub part_index: usize,
    pub part_id: String,
    pub width: f32,
    pub height: f32,
    /// Whether this unit may be turned, combining the part's own flag and the job options
    pub rotatable: bool,
}

impl PartUnit {
    /// Flattens `parts` into one unit per requested copy, keeping the input order.
    pub fn expand(parts: &[Part], allow_rotation: bool) -> Vec<PartUnit> {
        parts
            .iter()
            .enumerate()
            .flat_map(|(part_index, part)| {
                let unit = PartUnit {
                    part_index,
                    part_id: part.id.clone(),
                    width: part.width,
                    height: part.height,
                    rotatable: allow_rotation && part.rotatable,
                };
                std::iter::repeat_n(unit, part.quantity)
            })
            .collect()
    }

    /// Allowed orientations, unrotated first
    pub fn orientations(&self) -> impl Iterator<Item = Rotation> + use<> {
        let turned = match self.rotatable {
            true => Some(Rotation::Deg90),
            false => None,
        };
        std::iter::once(Rotation::Deg0).chain(turned)
    }

    pub fn dims(&self, rotation: Rotation) -> (f32, f32) {
        rotation.apply(self.width, self.height)
    }

    pub fn place(&self, sheet_index: usize, x: f32, y: f32, rotation: Rotation) -> PlacedPart {
        let (width, height) = self.dims(rotation);
        PlacedPart {
            part_id: self.part_id.clone(),
            part_index: self.part_index,
            sheet_index,
            x,
            y,
            rotation,
            width,
            height,
        }
    }

    pub(crate) fn does_not_fit(&self, sheet_width: f32, sheet_length: f32) -> NestingError {
        NestingError::PartDoesNotFit {
            part_id: self.part_id.clone(),
            width: self.width,
            height: self.height,
            sheet_width,
            sheet_length,
        }
    }

    /// Fails if no allowed orientation fits on an empty sheet
    pub(crate) fn check_fits(&self, sheet_width: f32, sheet_length: f32) -> Result<()> {
        let fits = self.orientations().any(|r| {
            let (w, h) = self.dims(r);
            w <= sheet_width && h <= sheet_length
        });
        match fits {
            true => Ok(()),
            false => Err(self.does_not_fit(sheet_width, sheet_length)),
        }
    }
}
