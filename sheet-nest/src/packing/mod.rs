mod engine;
mod genetic;
mod guillotine;
mod maxrects;
mod unit;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::entities::{PlacedPart, SheetSize};
use rand::Rng;

#[doc(inline)]
pub use engine::PackingEngine;
#[doc(inline)]
pub use genetic::GeneticPacker;
#[doc(inline)]
pub use guillotine::GuillotinePacker;
#[doc(inline)]
pub use maxrects::MaxRectsPacker;
#[doc(inline)]
pub use unit::PartUnit;

/// The interchangeable placement strategies.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PackingAlgorithm {
    /// Free-rectangle tracking with best-short-side-fit scoring
    #[default]
    #[serde(rename = "MAXRECT")]
    MaxRects,
    /// Largest-first shelf packing
    #[serde(rename = "GUILLOTINE")]
    Guillotine,
    /// Permutation search over the unit order, evaluated with the shelf packer
    #[serde(rename = "GENETIC")]
    Genetic,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PackingOptions {
    /// Allows units of rotatable parts to be turned by 90 degrees
    pub allow_rotation: bool,
    pub algorithm: PackingAlgorithm,
}

impl Default for PackingOptions {
    fn default() -> Self {
        Self {
            allow_rotation: true,
            algorithm: PackingAlgorithm::default(),
        }
    }
}

/// A strategy placing every unit on as many copies of `sheet` as it needs.
///
/// Implementations may assume every unit fits on an empty sheet in at least one of its allowed orientations.
pub trait Packer {
    fn pack(
        &self,
        units: &[PartUnit],
        sheet: &SheetSize,
        rng: &mut impl Rng,
    ) -> Result<Vec<PlacedPart>>;
}
