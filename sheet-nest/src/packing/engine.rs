use std::time::Instant;

use log::{debug, info};
use rand::Rng;
use thousands::Separable;

use crate::Result;
use crate::entities::{NestingResult, Part, SheetSize};
use crate::io::svg::SvgDrawOptions;
use crate::packing::{
    GeneticPacker, GuillotinePacker, MaxRectsPacker, Packer, PackingAlgorithm, PackingOptions,
    PartUnit,
};
use crate::util::{GeneticConfig, MachineConfig, assertions};

/// Places every unit of every part on copies of a single sheet size, using the strategy selected
/// in the [`PackingOptions`].
#[derive(Debug, Clone, Default)]
pub struct PackingEngine {
    pub machine_config: MachineConfig,
    pub genetic_config: GeneticConfig,
    pub svg_options: SvgDrawOptions,
}

impl PackingEngine {
    pub fn new(machine_config: MachineConfig, genetic_config: GeneticConfig) -> Self {
        Self {
            machine_config,
            genetic_config,
            svg_options: SvgDrawOptions::default(),
        }
    }

    pub fn with_svg_options(mut self, svg_options: SvgDrawOptions) -> Self {
        self.svg_options = svg_options;
        self
    }

    /// Validates the input, packs all units and summarizes the layout.
    ///
    /// `rng` is only consumed by [`PackingAlgorithm::Genetic`].
    pub fn optimize(
        &self,
        parts: &[Part],
        sheet: &SheetSize,
        options: &PackingOptions,
        rng: &mut impl Rng,
    ) -> Result<NestingResult> {
        let start = Instant::now();

        sheet.validate()?;
        for part in parts {
            part.validate()?;
        }
        let units = PartUnit::expand(parts, options.allow_rotation);
        for unit in &units {
            unit.check_fits(sheet.width, sheet.length)?;
        }
        debug!(
            "[ENG] packing {} units of {} parts on {}x{} sheets with {:?}",
            units.len(),
            parts.len(),
            sheet.width,
            sheet.length,
            options.algorithm
        );

        let layout = match options.algorithm {
            PackingAlgorithm::MaxRects => {
                MaxRectsPacker::new(self.machine_config.free_rect_policy).pack(&units, sheet, rng)?
            }
            PackingAlgorithm::Guillotine => GuillotinePacker.pack(&units, sheet, rng)?,
            PackingAlgorithm::Genetic => {
                GeneticPacker::new(self.genetic_config).pack(&units, sheet, rng)?
            }
        };

        debug_assert!(assertions::layout_is_valid(&layout, sheet));
        debug_assert!(assertions::all_units_placed(&layout, parts));
        debug_assert!(
            options.allow_rotation || assertions::no_rotations(&layout),
            "rotation disabled, yet a unit was rotated"
        );

        let result = NestingResult::new(*sheet, layout, &self.svg_options);

        info!(
            "[ENG] {:?} placed {} units on {} sheet(s) in {:.3}ms, utilization {:.3}%, waste {} mm2",
            options.algorithm,
            result.total_units().separate_with_commas(),
            result.sheets_required,
            start.elapsed().as_secs_f64() * 1000.0,
            result.utilization,
            (result.waste_area.round() as u64).separate_with_commas()
        );

        Ok(result)
    }
}
