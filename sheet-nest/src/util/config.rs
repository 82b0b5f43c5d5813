use serde::{Deserialize, Serialize};

/// Machine and material dependent constants of a cutting job.
/// All lengths are in millimetres, all rates in millimetres per minute.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct MachineConfig {
    /// Width of the material removed by the beam, added to every part dimension
    pub kerf_width: f32,
    /// Minimum distance between neighbouring parts, added to every part dimension
    pub part_spacing: f32,
    /// Feed rate while cutting through material
    pub cut_rate_mm_min: f32,
    /// Feed rate of rapid (non-cutting) moves
    pub rapid_rate_mm_min: f32,
    /// How the MaxRects packer updates its free rectangles after a placement
    pub free_rect_policy: FreeRectPolicy,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            kerf_width: 0.2,
            part_spacing: 5.0,
            cut_rate_mm_min: 3000.0,
            rapid_rate_mm_min: 15000.0,
            free_rect_policy: FreeRectPolicy::default(),
        }
    }
}

impl MachineConfig {
    /// Total allowance added to each nominal part dimension.
    pub fn allowance(&self) -> f32 {
        self.kerf_width + self.part_spacing
    }
}

/// Free-space bookkeeping of the MaxRects packer.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FreeRectPolicy {
    /// Every free rectangle overlapped by a placement is split into its (up to four) maximal residual
    /// rectangles, after which rectangles contained in another are pruned.
    #[default]
    Split,
    /// Every free rectangle overlapped by a placement is discarded entirely.
    /// Partially covered free space is lost, which typically leaves a single part per sheet.
    DropOverlapping,
}

/// Parameters of the genetic packing strategy
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct GeneticConfig {
    /// Number of individuals in every generation
    pub population_size: usize,
    /// Number of generations to evolve
    pub generations: usize,
    /// Probability of a swap mutation per offspring
    pub mutation_rate: f64,
    /// Number of best individuals copied unchanged into the next generation
    pub elite_count: usize,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            mutation_rate: 0.1,
            elite_count: 1,
        }
    }
}
