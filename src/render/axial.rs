//! Axial gradient rasterization.
//!
//! A surface is projected onto the line through the scaled start and end points. Each sample
//! position `P` gets `t = dot(P - start, end - start) / |end - start|^2`, which is then turned
//! into a color by the gradient's curve. Samples are taken at integer pixel coordinates, so with
//! a top-to-bottom axis row `r` of an `H`-pixel surface sees `t = r / H`.

use crate::foundation::core::{Canvas, Color, Point, Vec2};
use crate::foundation::error::GradientResult;
use crate::gradient::curve::CurveParams;
use crate::gradient::spec::GradientSpec;
use crate::render::surface::{PixelBuffer, Surface};

/// Gradient axis in absolute surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxialGeometry {
    /// Scaled start point.
    pub start: Point,
    /// Scaled end point.
    pub end: Point,
    axis: Vec2,
    len_sq: f64,
}

impl AxialGeometry {
    /// Build from absolute coordinates.
    pub fn new(start: Point, end: Point) -> Self {
        let axis = end - start;
        Self {
            start,
            end,
            axis,
            len_sq: axis.hypot2(),
        }
    }

    /// Scale normalized endpoints to `canvas` and build the axis.
    pub fn from_fractions(start: Point, end: Point, canvas: Canvas) -> Self {
        Self::new(canvas.scale_fraction(start), canvas.scale_fraction(end))
    }

    /// True when the axis has no usable length (coincident or non-finite endpoints).
    pub fn is_degenerate(&self) -> bool {
        !(self.len_sq.is_finite() && self.len_sq > 0.0)
    }

    /// Scalar projection of `p` onto the axis. Meaningless on a degenerate axis.
    pub fn project(&self, p: Point) -> f64 {
        (p - self.start).dot(self.axis) / self.len_sq
    }
}

/// Where a projected position falls relative to the axis segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    /// `t < 0`.
    BeforeStart,
    /// `0 <= t <= 1`.
    Within(f64),
    /// `t > 1`.
    AfterEnd,
}

impl Projection {
    /// Classify `t`. NaN classifies as [`Projection::BeforeStart`].
    pub fn classify(t: f64) -> Self {
        if t > 1.0 {
            Self::AfterEnd
        } else if t >= 0.0 {
            Self::Within(t)
        } else {
            Self::BeforeStart
        }
    }
}

/// Per-sample shading function: a snapshot of the curve, the axis, and the extension flags.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxialShading {
    /// Axis in surface coordinates.
    pub geometry: AxialGeometry,
    /// Curve snapshot (colors already swapped for mirrored gradients).
    pub curve: CurveParams,
    /// Paint samples projecting before the start.
    pub extend_start: bool,
    /// Paint samples projecting past the end.
    pub extend_end: bool,
}

impl AxialShading {
    /// Snapshot `spec` for a surface of size `canvas`.
    pub fn new(spec: &GradientSpec, canvas: Canvas) -> Self {
        Self {
            geometry: AxialGeometry::from_fractions(spec.start_point(), spec.end_point(), canvas),
            curve: spec.curve(),
            extend_start: spec.draws_before_start(),
            extend_end: spec.draws_after_end(),
        }
    }

    /// Clamped color at normalized position `t` on the axis.
    pub fn color_at(&self, t: f64) -> Color {
        self.curve.evaluate(t).clamped()
    }

    /// Color for the sample at `p`, or `None` when `p` stays unpainted.
    ///
    /// A degenerate axis shades every sample with the end color.
    pub fn shade(&self, p: Point) -> Option<Color> {
        if self.geometry.is_degenerate() {
            return Some(self.color_at(1.0));
        }
        match Projection::classify(self.geometry.project(p)) {
            Projection::Within(t) => Some(self.color_at(t)),
            Projection::BeforeStart if self.extend_start => Some(self.color_at(0.0)),
            Projection::AfterEnd if self.extend_end => Some(self.color_at(1.0)),
            Projection::BeforeStart | Projection::AfterEnd => None,
        }
    }
}

/// Renderer settings.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderSettings {
    /// If set, the surface is cleared to this color before the gradient is drawn.
    pub clear: Option<Color>,
}

/// Counters from one render call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Samples written.
    pub painted: u64,
    /// Samples left untouched because they fall outside the axis and extension is off.
    pub skipped: u64,
    /// Whether the degenerate-axis fallback was used.
    pub degenerate: bool,
}

/// Fills surfaces with an axial gradient.
///
/// Holds no state between calls besides its settings; every render is a full evaluation of
/// the current [`GradientSpec`].
#[derive(Clone, Debug, Default)]
pub struct AxialRenderer {
    settings: RenderSettings,
}

impl AxialRenderer {
    /// Create a renderer with `settings`.
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    /// Current settings.
    pub fn settings(&self) -> RenderSettings {
        self.settings
    }

    /// Paint `spec` into `surface`.
    #[tracing::instrument(
        skip(self, spec, surface),
        fields(width = surface.width(), height = surface.height())
    )]
    pub fn render(
        &self,
        spec: &GradientSpec,
        surface: &mut dyn Surface,
    ) -> GradientResult<RenderStats> {
        if let Some(clear) = self.settings.clear {
            clear.validate()?;
            surface.fill(clear.clamped());
        }

        let canvas = surface.canvas();
        let shading = AxialShading::new(spec, canvas);
        let mut stats = RenderStats {
            degenerate: shading.geometry.is_degenerate(),
            ..RenderStats::default()
        };

        if stats.degenerate {
            tracing::debug!(
                start = ?shading.geometry.start,
                end = ?shading.geometry.end,
                "degenerate gradient axis, filling with end color"
            );
            surface.fill(shading.color_at(1.0));
            stats.painted = canvas.area();
            return Ok(stats);
        }

        for y in 0..canvas.height {
            for x in 0..canvas.width {
                let p = Point::new(f64::from(x), f64::from(y));
                match shading.shade(p) {
                    Some(c) => {
                        surface.put_color(x, y, c);
                        stats.painted += 1;
                    }
                    None => stats.skipped += 1,
                }
            }
        }

        tracing::debug!(painted = stats.painted, skipped = stats.skipped, "axial render done");
        Ok(stats)
    }

    /// Render into a freshly allocated [`PixelBuffer`].
    pub fn render_pixels(
        &self,
        spec: &GradientSpec,
        canvas: Canvas,
    ) -> GradientResult<(PixelBuffer, RenderStats)> {
        let mut buf = PixelBuffer::new(canvas.width, canvas.height);
        let stats = self.render(spec, &mut buf)?;
        Ok((buf, stats))
    }
}

/// Paint `spec` into `surface` with default settings.
pub fn render_axial(spec: &GradientSpec, surface: &mut dyn Surface) -> GradientResult<RenderStats> {
    AxialRenderer::default().render(spec, surface)
}

#[cfg(test)]
#[path = "../../tests/unit/render/axial.rs"]
mod tests;
