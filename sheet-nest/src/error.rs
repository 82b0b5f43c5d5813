use thiserror::Error;

pub type Result<T> = std::result::Result<T, NestingError>;

/// Validation failures reported synchronously by the engine.
/// All of them are deterministic: repeating the call with the same input yields the same error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NestingError {
    /// A part with a non-positive or non-finite dimension, or a zero quantity
    #[error("invalid geometry for part {part_id}: {reason}")]
    InvalidGeometry { part_id: String, reason: String },

    /// A pinned sheet with a non-positive or non-finite dimension
    #[error("invalid sheet {width}x{length}")]
    InvalidSheet { width: f32, length: f32 },

    /// Even a synthesized custom sheet cannot contain the part
    #[error("no feasible sheet for a {width}x{height} part")]
    NoFeasibleSheet { width: f32, height: f32 },

    /// A unit does not fit on an empty sheet in any of its allowed orientations
    #[error("part {part_id} ({width}x{height}) does not fit on a {sheet_width}x{sheet_length} sheet")]
    PartDoesNotFit {
        part_id: String,
        width: f32,
        height: f32,
        sheet_width: f32,
        sheet_length: f32,
    },
}
