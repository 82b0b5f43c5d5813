use serde::{Deserialize, Serialize};

use crate::geometry::primitives::Point;
use crate::util::MachineConfig;
use crate::{NestingError, Result};

/// A part type to be cut, `quantity` times.
/// Dimensions are *effective*: kerf and spacing allowances are already included.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Part {
    pub id: String,
    pub width: f32,
    pub height: f32,
    pub quantity: usize,
    /// Whether the part may be turned by 90 degrees (grain direction, markings, ...)
    #[serde(default = "default_rotatable")]
    pub rotatable: bool,
    /// Outline of a non-rectangular part. Packing only ever uses the bounding box.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<Vec<Point>>,
}

fn default_rotatable() -> bool {
    true
}

impl Part {
    pub fn new(id: impl Into<String>, width: f32, height: f32, quantity: usize) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            quantity,
            rotatable: true,
            outline: None,
        }
    }

    /// Creates a part from its nominal (drawing) dimensions, inflating both by the kerf and spacing allowance.
    pub fn from_nominal(
        id: impl Into<String>,
        width: f32,
        height: f32,
        quantity: usize,
        config: &MachineConfig,
    ) -> Self {
        let allowance = config.allowance();
        Part::new(id, width + allowance, height + allowance, quantity)
    }

    pub fn with_rotatable(mut self, rotatable: bool) -> Self {
        self.rotatable = rotatable;
        self
    }

    pub fn with_outline(mut self, outline: Vec<Point>) -> Self {
        self.outline = Some(outline);
        self
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Rejects zero, negative or non-finite dimensions and zero quantities.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| NestingError::InvalidGeometry {
            part_id: self.id.clone(),
            reason,
        };
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(invalid(format!("width must be positive, got {}", self.width)));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(invalid(format!("height must be positive, got {}", self.height)));
        }
        if self.quantity == 0 {
            return Err(invalid("quantity must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nominal_dimensions_are_inflated() {
        let config = MachineConfig {
            kerf_width: 0.5,
            part_spacing: 2.0,
            ..MachineConfig::default()
        };
        let part = Part::from_nominal("bracket", 100.0, 50.0, 3, &config);
        assert_eq!(part.width, 102.5);
        assert_eq!(part.height, 52.5);
        assert_eq!(part.quantity, 3);
        assert!(part.rotatable);
    }

    #[test]
    fn invalid_geometry_is_rejected() {
        assert!(Part::new("a", 0.0, 10.0, 1).validate().is_err());
        assert!(Part::new("b", 10.0, -1.0, 1).validate().is_err());
        assert!(Part::new("c", f32::NAN, 10.0, 1).validate().is_err());
        assert!(Part::new("d", 10.0, 10.0, 0).validate().is_err());
        assert!(Part::new("e", 10.0, 10.0, 1).validate().is_ok());
    }

    #[test]
    fn rotatable_defaults_to_true_when_deserializing() {
        let part: Part =
            serde_json::from_str(r#"{"id":"p","width":10,"height":20,"quantity":2}"#).unwrap();
        assert!(part.rotatable);
        assert!(part.outline.is_none());
    }
}
