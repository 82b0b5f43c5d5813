/// External (serializable) representations of layouts
pub mod ext_repr;

/// All logic for exporting internal representations into external ones
pub mod export;

/// Rendering layouts as SVG documents
pub mod svg;
