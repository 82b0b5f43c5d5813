use serde::{Deserialize, Serialize};

use sheet_nest::NestOptions;
use sheet_nest::entities::Part;
use sheet_nest::geometry::primitives::Point;
use sheet_nest::util::MachineConfig;

/// A nesting job as submitted to the runner
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtJob {
    /// The name of the job
    pub name: String,
    /// Parts to be cut, with their nominal dimensions
    pub parts: Vec<ExtPart>,
    #[serde(default)]
    pub options: NestOptions,
}

/// A part with its nominal (drawing) dimensions
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPart {
    pub id: String,
    pub width: f32,
    pub height: f32,
    pub quantity: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotatable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<Vec<Point>>,
}

impl ExtJob {
    /// Converts the nominal parts into effective ones, inflated by the machine's kerf and spacing allowance
    pub fn parts(&self, machine: &MachineConfig) -> Vec<Part> {
        self.parts
            .iter()
            .map(|ep| {
                let part = Part::from_nominal(ep.id.clone(), ep.width, ep.height, ep.quantity, machine)
                    .with_rotatable(ep.rotatable.unwrap_or(true));
                match &ep.outline {
                    Some(outline) => part.with_outline(outline.clone()),
                    None => part,
                }
            })
            .collect()
    }
}
