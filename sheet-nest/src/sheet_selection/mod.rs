mod catalog;
mod selector;

#[doc(inline)]
pub use catalog::STANDARD_SHEETS;
#[doc(inline)]
pub use catalog::SheetCatalog;
#[doc(inline)]
pub use selector::SheetSelector;
