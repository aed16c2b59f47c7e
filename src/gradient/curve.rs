//! The interpolation curve that shapes a two-color blend.
//!
//! For position `t` in `[0, 1]` and slope factor `k > 0` the blend weight is
//!
//! ```text
//! w(t, k) = t^k / (t^k + (1 - t)^k)
//! ```
//!
//! The curve always passes through `(0, 0)`, `(0.5, 0.5)` and `(1, 1)`. `k = 1` is a linear blend,
//! larger values sharpen the transition around the midpoint and values in `(0, 1)` flatten it.

use crate::foundation::core::Color;
use crate::foundation::error::{GradientError, GradientResult};
use serde::{Deserialize, Serialize};

/// Validated curve shape parameter. Always finite and strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct SlopeFactor(f64);

impl SlopeFactor {
    /// Slope factor used by a freshly constructed gradient.
    pub const DEFAULT: Self = Self(2.0);
    /// Slope factor that reduces the curve to a linear blend.
    pub const LINEAR: Self = Self(1.0);

    /// Validate `k`, rejecting zero, negative, and non-finite values.
    pub fn new(k: f64) -> GradientResult<Self> {
        if k.is_finite() && k > 0.0 {
            Ok(Self(k))
        } else {
            Err(GradientError::InvalidShapeParameter(k))
        }
    }

    /// Map a logarithmic slider position to a slope factor (`k = ln(v)`).
    ///
    /// A slider resting at `e^2` yields the default of 2.0. Positions `<= 1` map to `k <= 0`
    /// and are rejected.
    pub fn from_log_scale(v: f64) -> GradientResult<Self> {
        Self::new(v.ln())
    }

    /// Inverse of [`SlopeFactor::from_log_scale`].
    pub fn to_log_scale(self) -> f64 {
        self.0.exp()
    }

    /// Raw value.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for SlopeFactor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for SlopeFactor {
    type Error = GradientError;

    fn try_from(k: f64) -> GradientResult<Self> {
        Self::new(k)
    }
}

impl<'de> Deserialize<'de> for SlopeFactor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let k = f64::deserialize(deserializer)?;
        Self::new(k).map_err(serde::de::Error::custom)
    }
}

/// Blend weight `w(t, k)` in `[0, 1]`.
///
/// `t` is clamped into `[0, 1]`. The endpoints are answered exactly without touching `powf`,
/// so `w(0, k) == 0.0` and `w(1, k) == 1.0` for every `k`. The result is non-decreasing in `t`.
pub fn blend_weight(t: f64, k: SlopeFactor) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    // Same value as t^k / (t^k + (1-t)^k), built only from steps that are monotonic in t.
    // For huge k the ratio power overflows to inf (w = 0) or underflows to 0 (w = 1).
    let r = (1.0 - t) / t;
    1.0 / (1.0 + r.powf(k.0))
}

/// Blend every channel of `start` toward `end` by weight `w`.
///
/// `w == 1` returns `end` exactly; `a + (b - a)` can miss `b` by an ulp.
pub fn blend(start: Color, end: Color, w: f64) -> Color {
    if w == 1.0 {
        return end;
    }
    let lerp = |a: f64, b: f64| a + (b - a) * w;
    Color::rgba(
        lerp(start.r, end.r),
        lerp(start.g, end.g),
        lerp(start.b, end.b),
        lerp(start.a, end.a),
    )
}

/// Immutable snapshot of everything needed to turn a position into a color.
///
/// Colors are stored in the order they are blended; a mirrored gradient builds its snapshot with
/// the two colors already swapped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveParams {
    /// Color at `t = 0`.
    pub from: Color,
    /// Color at `t = 1`.
    pub to: Color,
    /// Curve shape.
    pub slope: SlopeFactor,
}

impl CurveParams {
    /// Build a snapshot, swapping the colors when `mirror` is set.
    pub fn new(start: Color, end: Color, slope: SlopeFactor, mirror: bool) -> Self {
        let (from, to) = if mirror { (end, start) } else { (start, end) };
        Self { from, to, slope }
    }

    /// Unclamped color at position `t`.
    pub fn evaluate(&self, t: f64) -> Color {
        blend(self.from, self.to, blend_weight(t, self.slope))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/curve.rs"]
mod tests;
