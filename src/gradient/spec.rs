use crate::foundation::core::{Color, Point};
use crate::foundation::error::{GradientError, GradientResult};
use crate::gradient::curve::{CurveParams, SlopeFactor};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Serializable gradient configuration.
///
/// Every field is optional in JSON and falls back to the [`GradientSpec`] defaults. Endpoints are
/// fractions of the target surface size; values outside `[0, 1]` place the axis endpoints
/// outside the surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GradientConfig {
    /// Color at the start of the axis.
    pub start_color: Color,
    /// Color at the end of the axis.
    pub end_color: Color,
    /// Curve shape parameter (`> 0`).
    pub slope_factor: f64,
    /// Swap the roles of start and end colors.
    #[serde(alias = "reverse")]
    pub mirror: bool,
    /// Axis start as a fraction of the surface size.
    pub start_point: Point,
    /// Axis end as a fraction of the surface size.
    pub end_point: Point,
    /// Paint points projecting before the start with the start color.
    pub draws_before_start: bool,
    /// Paint points projecting past the end with the end color.
    pub draws_after_end: bool,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            start_color: Color::WHITE,
            end_color: Color::DARK_GRAY,
            slope_factor: SlopeFactor::DEFAULT.get(),
            mirror: false,
            start_point: Point::new(0.5, 0.0),
            end_point: Point::new(0.5, 1.0),
            draws_before_start: false,
            draws_after_end: false,
        }
    }
}

impl GradientConfig {
    /// Parse a configuration document from a JSON string.
    pub fn from_json_str(s: &str) -> GradientResult<Self> {
        serde_json::from_str(s).map_err(|e| GradientError::serde(e.to_string()))
    }

    /// Parse a configuration document from a JSON reader.
    pub fn from_json_reader(r: impl Read) -> GradientResult<Self> {
        serde_json::from_reader(r).map_err(|e| GradientError::serde(e.to_string()))
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> GradientResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| GradientError::serde(e.to_string()))
    }
}

/// Live gradient configuration with its derived curve snapshot.
///
/// Every mutation validates first and re-derives the [`CurveParams`] before returning, so the
/// snapshot handed to a renderer always matches the fields. A rejected mutation leaves the spec
/// unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientSpec {
    start_color: Color,
    end_color: Color,
    slope: SlopeFactor,
    mirror: bool,
    start_point: Point,
    end_point: Point,
    draws_before_start: bool,
    draws_after_end: bool,
    curve: CurveParams,
}

impl Default for GradientSpec {
    fn default() -> Self {
        let start_color = Color::WHITE;
        let end_color = Color::DARK_GRAY;
        let slope = SlopeFactor::DEFAULT;
        Self {
            start_color,
            end_color,
            slope,
            mirror: false,
            start_point: Point::new(0.5, 0.0),
            end_point: Point::new(0.5, 1.0),
            draws_before_start: false,
            draws_after_end: false,
            curve: CurveParams::new(start_color, end_color, slope, false),
        }
    }
}

impl GradientSpec {
    /// Spec with default settings: white to dark gray, top to bottom, slope factor 2.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a spec from a configuration document.
    pub fn from_config(cfg: &GradientConfig) -> GradientResult<Self> {
        let mut spec = Self::default();
        spec.configure(cfg)?;
        Ok(spec)
    }

    /// Apply every field of `cfg` at once.
    ///
    /// The whole document is validated before anything is written.
    pub fn configure(&mut self, cfg: &GradientConfig) -> GradientResult<()> {
        let slope = SlopeFactor::new(cfg.slope_factor)?;
        cfg.start_color.validate()?;
        cfg.end_color.validate()?;
        validate_point("start_point", cfg.start_point)?;
        validate_point("end_point", cfg.end_point)?;

        self.start_color = cfg.start_color;
        self.end_color = cfg.end_color;
        self.slope = slope;
        self.mirror = cfg.mirror;
        self.start_point = cfg.start_point;
        self.end_point = cfg.end_point;
        self.draws_before_start = cfg.draws_before_start;
        self.draws_after_end = cfg.draws_after_end;
        self.recompute();
        tracing::debug!(slope = slope.get(), mirror = cfg.mirror, "gradient configured");
        Ok(())
    }

    /// Current fields as a configuration document.
    pub fn to_config(&self) -> GradientConfig {
        GradientConfig {
            start_color: self.start_color,
            end_color: self.end_color,
            slope_factor: self.slope.get(),
            mirror: self.mirror,
            start_point: self.start_point,
            end_point: self.end_point,
            draws_before_start: self.draws_before_start,
            draws_after_end: self.draws_after_end,
        }
    }

    /// Restore every field to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn recompute(&mut self) {
        self.curve = CurveParams::new(self.start_color, self.end_color, self.slope, self.mirror);
    }

    /// Set the start color.
    pub fn set_start_color(&mut self, c: Color) -> GradientResult<()> {
        c.validate()?;
        self.start_color = c;
        self.recompute();
        Ok(())
    }

    /// Set the end color.
    pub fn set_end_color(&mut self, c: Color) -> GradientResult<()> {
        c.validate()?;
        self.end_color = c;
        self.recompute();
        Ok(())
    }

    /// Set the curve shape parameter. Rejects `k <= 0` and non-finite values.
    pub fn set_slope_factor(&mut self, k: f64) -> GradientResult<()> {
        let slope = SlopeFactor::new(k)?;
        self.slope = slope;
        self.recompute();
        Ok(())
    }

    /// Set the color-swap flag.
    pub fn set_mirror(&mut self, mirror: bool) {
        self.mirror = mirror;
        self.recompute();
    }

    /// Flip the color-swap flag.
    pub fn toggle_mirror(&mut self) {
        self.set_mirror(!self.mirror);
    }

    /// Set the axis start as a fraction of the surface size.
    pub fn set_start_point(&mut self, p: Point) -> GradientResult<()> {
        validate_point("start_point", p)?;
        self.start_point = p;
        Ok(())
    }

    /// Set the axis end as a fraction of the surface size.
    pub fn set_end_point(&mut self, p: Point) -> GradientResult<()> {
        validate_point("end_point", p)?;
        self.end_point = p;
        Ok(())
    }

    /// Exchange the axis endpoints, reversing the direction of the gradient on screen.
    pub fn swap_endpoints(&mut self) {
        std::mem::swap(&mut self.start_point, &mut self.end_point);
    }

    /// Set whether points before the axis start are painted.
    pub fn set_draws_before_start(&mut self, v: bool) {
        self.draws_before_start = v;
    }

    /// Set whether points past the axis end are painted.
    pub fn set_draws_after_end(&mut self, v: bool) {
        self.draws_after_end = v;
    }

    /// Start color.
    pub fn start_color(&self) -> Color {
        self.start_color
    }

    /// End color.
    pub fn end_color(&self) -> Color {
        self.end_color
    }

    /// Curve shape parameter.
    pub fn slope_factor(&self) -> SlopeFactor {
        self.slope
    }

    /// Whether start and end colors are swapped.
    pub fn mirror(&self) -> bool {
        self.mirror
    }

    /// Axis start as a fraction of the surface size.
    pub fn start_point(&self) -> Point {
        self.start_point
    }

    /// Axis end as a fraction of the surface size.
    pub fn end_point(&self) -> Point {
        self.end_point
    }

    /// Whether points before the axis start are painted.
    pub fn draws_before_start(&self) -> bool {
        self.draws_before_start
    }

    /// Whether points past the axis end are painted.
    pub fn draws_after_end(&self) -> bool {
        self.draws_after_end
    }

    /// Derived curve snapshot, always in sync with the fields above.
    pub fn curve(&self) -> CurveParams {
        self.curve
    }
}

fn validate_point(name: &str, p: Point) -> GradientResult<()> {
    if p.x.is_finite() && p.y.is_finite() {
        Ok(())
    } else {
        Err(GradientError::validation(format!(
            "{name} must be finite, got ({}, {})",
            p.x, p.y
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/spec.rs"]
mod tests;
