mod optimizer;
mod path;

#[doc(inline)]
pub use optimizer::CutPathOptimizer;
#[doc(inline)]
pub use path::CutPath;
#[doc(inline)]
pub use path::CutSegment;
#[doc(inline)]
pub use path::SegmentKind;
