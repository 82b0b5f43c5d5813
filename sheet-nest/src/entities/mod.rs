mod nesting_result;
mod part;
mod placed_part;
mod sheet;

#[doc(inline)]
pub use nesting_result::NestingResult;
#[doc(inline)]
pub use nesting_result::SheetStats;
#[doc(inline)]
pub use nesting_result::sheet_stats;
#[doc(inline)]
pub use nesting_result::sheets_required;
#[doc(inline)]
pub use nesting_result::utilization_pct;
#[doc(inline)]
pub use part::Part;
#[doc(inline)]
pub use placed_part::PlacedPart;
#[doc(inline)]
pub use placed_part::Rotation;
#[doc(inline)]
pub use sheet::SheetSize;
