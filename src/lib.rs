//! smoothgrad renders two-color axial gradients with a tunable, non-linear blend curve.
//!
//! The blend weight at normalized position `t` is `t^k / (t^k + (1 - t)^k)`, where `k` is the
//! slope factor. `k = 1` is a plain linear blend. Larger values push the transition toward a
//! hard edge at the midpoint, and values below 1 give a softer middle with faster edges.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: build a [`GradientSpec`] (directly or from a JSON [`GradientConfig`]).
//!    Every mutation validates its input and re-derives the [`CurveParams`] snapshot.
//! 2. **Project**: [`AxialShading`] scales the normalized endpoints to the target surface and
//!    maps each sample position to `t` on the axis.
//! 3. **Paint**: [`AxialRenderer`] walks every sample of a [`Surface`] and writes the clamped
//!    color, leaving points outside the axis untouched unless extension is enabled.
//!
//! Rendering is synchronous and holds no state between calls.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Curve evaluation and gradient configuration.
pub mod gradient;
/// Surfaces and the axial renderer.
pub mod render;

pub use crate::foundation::core::{Canvas, Color, Point, Rgba8, Vec2};
pub use crate::foundation::error::{GradientError, GradientResult};

pub use crate::gradient::curve::{CurveParams, SlopeFactor, blend, blend_weight};
pub use crate::gradient::spec::{GradientConfig, GradientSpec};
pub use crate::render::axial::{
    AxialGeometry, AxialRenderer, AxialShading, Projection, RenderSettings, RenderStats,
    render_axial,
};
pub use crate::render::surface::{PixelBuffer, Surface};
