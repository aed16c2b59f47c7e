/// Interpolation curve and its immutable snapshot.
pub mod curve;
/// Validated gradient configuration.
pub mod spec;
