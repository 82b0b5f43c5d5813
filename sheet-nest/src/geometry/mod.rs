/// Traits for geometric queries between primitives
pub mod geo_traits;

/// Geometric primitives
pub mod primitives;
