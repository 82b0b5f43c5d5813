//! Rectangular nesting of sheet-metal parts onto stock sheets.
//!
//! Parts are packed as axis-aligned rectangles by one of three interchangeable strategies
//! (see [`packing::PackingAlgorithm`]), after which a cutting tool-path can be derived from
//! the resulting layout with [`cut_path::CutPathOptimizer`].

/// Entities to model parts, sheets and their placements
pub mod entities;

/// Geometric primitives used by the packers and the cut path planner
pub mod geometry;

/// Standard stock sheets and the heuristic selecting one for a job
pub mod sheet_selection;

/// The packing strategies and the engine dispatching between them
pub mod packing;

/// Tool-path planning over a finished layout
pub mod cut_path;

/// Exporting layouts into SVG and serializable representations
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

mod error;
mod nester;

#[doc(inline)]
pub use error::NestingError;
#[doc(inline)]
pub use error::Result;
#[doc(inline)]
pub use nester::NestOptions;
#[doc(inline)]
pub use nester::Nester;
