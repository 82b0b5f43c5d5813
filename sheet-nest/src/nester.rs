use log::info;
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::cut_path::{CutPath, CutPathOptimizer};
use crate::entities::{NestingResult, Part, SheetSize};
use crate::io::svg::SvgDrawOptions;
use crate::packing::{PackingAlgorithm, PackingEngine, PackingOptions};
use crate::sheet_selection::{SheetCatalog, SheetSelector};
use crate::util::{GeneticConfig, MachineConfig};
use crate::Result;

/// Options of a single nesting request
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct NestOptions {
    /// Sheet to nest on. Selected from the catalog when not set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_size: Option<SheetSize>,
    pub allow_rotation: bool,
    pub algorithm: PackingAlgorithm,
    /// Seed for the random number generator, drawn from the OS when not set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for NestOptions {
    fn default() -> Self {
        Self {
            sheet_size: None,
            allow_rotation: true,
            algorithm: PackingAlgorithm::default(),
            seed: None,
        }
    }
}

impl NestOptions {
    pub fn packing_options(&self) -> PackingOptions {
        PackingOptions {
            allow_rotation: self.allow_rotation,
            algorithm: self.algorithm,
        }
    }
}

/// Entry point bundling sheet selection, packing and tool-path planning.
#[derive(Debug, Clone, Default)]
pub struct Nester {
    pub catalog: SheetCatalog,
    pub engine: PackingEngine,
}

impl Nester {
    pub fn new(machine_config: MachineConfig, genetic_config: GeneticConfig) -> Self {
        Self {
            catalog: SheetCatalog::default(),
            engine: PackingEngine::new(machine_config, genetic_config),
        }
    }

    pub fn with_catalog(mut self, catalog: SheetCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_svg_options(mut self, svg_options: SvgDrawOptions) -> Self {
        self.engine = self.engine.with_svg_options(svg_options);
        self
    }

    /// Nests all `parts`, seeding the generator from [`NestOptions::seed`].
    pub fn nest(&self, parts: &[Part], options: &NestOptions) -> Result<NestingResult> {
        let mut rng = match options.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        self.nest_with_rng(parts, options, &mut rng)
    }

    pub fn nest_with_rng(
        &self,
        parts: &[Part],
        options: &NestOptions,
        rng: &mut impl Rng,
    ) -> Result<NestingResult> {
        for part in parts {
            part.validate()?;
        }
        let sheet = match options.sheet_size {
            Some(sheet) => sheet,
            None => self.select_sheet(parts, options.allow_rotation)?,
        };
        info!(
            "[NEST] nesting {} part types on {}x{} sheets ({})",
            parts.len(),
            sheet.width,
            sheet.length,
            match options.sheet_size {
                Some(_) => "pinned",
                None => "selected",
            }
        );
        self.engine
            .optimize(parts, &sheet, &options.packing_options(), rng)
    }

    /// Selects a sheet holding every part of the job from the catalog, see [`SheetSelector::select_sheet_for_parts`].
    pub fn select_sheet(&self, parts: &[Part], allow_rotation: bool) -> Result<SheetSize> {
        SheetSelector::new(&self.catalog).select_sheet_for_parts(parts, allow_rotation)
    }

    /// Tool-path over the layout of a finished run
    pub fn cut_path(&self, result: &NestingResult) -> CutPath {
        CutPathOptimizer::new(&self.engine.machine_config).optimize_path(&result.layout, &result.sheet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NestingError;
    use crate::sheet_selection::STANDARD_SHEETS;
    use crate::util::assertions;

    #[test]
    fn representative_part_is_the_largest() {
        let nester = Nester::default();
        let parts = vec![
            Part::new("small", 100.0, 100.0, 60),
            Part::new("large", 1300.0, 1300.0, 1),
        ];
        // the large part fits no catalog sheet, total quantity 61
        let sheet = nester.select_sheet(&parts, true).unwrap();
        assert_eq!(sheet.width, 2600.0);
        assert_eq!(sheet.length, 1300.0 * 31.0);
    }

    #[test]
    fn total_quantity_drives_selection() {
        let nester = Nester::default();
        let parts = vec![
            Part::new("a", 100.0, 100.0, 30),
            Part::new("b", 80.0, 80.0, 30),
        ];
        assert_eq!(nester.select_sheet(&parts, true).unwrap(), STANDARD_SHEETS[2]);
    }

    #[test]
    fn selected_sheet_holds_every_part() {
        let nester = Nester::default();
        // the rail is too long for the two smaller catalog sheets
        let parts = vec![
            Part::new("plate", 1000.0, 1000.0, 1),
            Part::new("rail", 60.0, 2450.0, 1),
        ];
        assert_eq!(nester.select_sheet(&parts, true).unwrap(), STANDARD_SHEETS[2]);

        let result = nester.nest(&parts, &NestOptions::default()).unwrap();
        assert_eq!(result.sheet, STANDARD_SHEETS[2]);
        assert!(assertions::all_units_placed(&result.layout, &parts));
        assert!(assertions::layout_is_valid(&result.layout, &result.sheet));
    }

    #[test]
    fn custom_sheet_covers_the_largest_dimension_of_any_part() {
        let nester = Nester::default();
        // largest footprint is the plate, the longest side belongs to the rail
        let parts = vec![
            Part::new("plate", 1200.0, 1200.0, 1),
            Part::new("rail", 40.0, 2600.0, 2),
        ];
        let sheet = nester.select_sheet(&parts, true).unwrap();
        assert_eq!(sheet.width, 5200.0);
        assert_eq!(sheet.length, 2600.0 * 2.0);

        let result = nester.nest(&parts, &NestOptions::default()).unwrap();
        assert!(assertions::all_units_placed(&result.layout, &parts));
    }

    #[test]
    fn orientation_limits_of_every_part_are_respected() {
        let nester = Nester::default();
        // the panel only fits the two larger catalog sheets, and only when turned
        let parts = vec![
            Part::new("tab", 50.0, 50.0, 4),
            Part::new("panel", 2200.0, 900.0, 1),
        ];
        assert_eq!(nester.select_sheet(&parts, true).unwrap(), STANDARD_SHEETS[1]);

        let pinned = vec![parts[0].clone(), parts[1].clone().with_rotatable(false)];
        let sheet = nester.select_sheet(&pinned, true).unwrap();
        assert!(!STANDARD_SHEETS.contains(&sheet));
        assert!(sheet.can_contain(2200.0, 900.0, false));
        assert_eq!(nester.select_sheet(&parts, false).unwrap(), sheet);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: NestOptions = serde_json::from_str(r#"{"algorithm":"GENETIC"}"#).unwrap();
        assert_eq!(options.algorithm, PackingAlgorithm::Genetic);
        assert!(options.allow_rotation);
        assert!(options.sheet_size.is_none());
        assert!(options.seed.is_none());
    }

    #[test]
    fn invalid_part_rejected_before_selection() {
        let nester = Nester::default();
        let parts = vec![Part::new("broken", -5.0, 10.0, 1)];
        assert!(matches!(
            nester.nest(&parts, &NestOptions::default()),
            Err(NestingError::InvalidGeometry { .. })
        ));
    }
}
