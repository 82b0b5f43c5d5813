use serde::{Deserialize, Serialize};

use sheet_nest::io::svg::SvgDrawOptions;
use sheet_nest::util::{GeneticConfig, MachineConfig};

/// Configuration of the snest runner
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SnestConfig {
    /// Kerf, spacing and feed rates of the cutting machine
    #[serde(default)]
    pub machine: MachineConfig,
    /// Parameters of the genetic strategy, ignored by the other strategies
    #[serde(default)]
    pub genetic: GeneticConfig,
    /// Seed for the PRNG, used when the job does not carry its own. If undefined as well, the runner uses entropy
    pub prng_seed: Option<u64>,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for SnestConfig {
    fn default() -> Self {
        Self {
            machine: MachineConfig::default(),
            genetic: GeneticConfig::default(),
            prng_seed: Some(0),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
