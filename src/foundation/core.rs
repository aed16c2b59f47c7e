use crate::foundation::error::{GradientError, GradientResult};
use serde::{Deserialize, Serialize};

pub use kurbo::{Point, Vec2};

/// Target surface dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Number of addressable pixels.
    pub fn area(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Scale a point given as a fraction of the canvas size into absolute coordinates.
    pub fn scale_fraction(self, frac: Point) -> Point {
        Point::new(frac.x * f64::from(self.width), frac.y * f64::from(self.height))
    }
}

/// Straight-alpha RGBA color with `f64` components.
///
/// Components are conceptually in `[0, 1]`. They are not clamped on construction; clamping
/// happens when a color is written to a surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Color {
    /// Red component.
    pub r: f64,
    /// Green component.
    pub g: f64,
    /// Blue component.
    pub b: f64,
    /// Alpha component.
    pub a: f64,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Opaque dark gray (white level 1/3).
    pub const DARK_GRAY: Self = Self::rgba(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0, 1.0);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    /// Build a color from its four components.
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Build a color from 8-bit straight-alpha channels.
    pub fn from_rgba8(c: Rgba8) -> Self {
        Self::rgba(
            f64::from(c.r) / 255.0,
            f64::from(c.g) / 255.0,
            f64::from(c.b) / 255.0,
            f64::from(c.a) / 255.0,
        )
    }

    /// Components as an array in `r, g, b, a` order.
    pub fn to_array(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Build a color from an array in `r, g, b, a` order.
    pub fn from_array(c: [f64; 4]) -> Self {
        Self::rgba(c[0], c[1], c[2], c[3])
    }

    /// Reject NaN or infinite components.
    pub fn validate(self) -> GradientResult<()> {
        if self.to_array().iter().all(|c| c.is_finite()) {
            Ok(())
        } else {
            Err(GradientError::validation(format!(
                "color components must be finite, got {self:?}"
            )))
        }
    }

    /// Clamp every component into `[0, 1]`.
    pub fn clamped(self) -> Self {
        Self::from_array(self.to_array().map(|c| c.clamp(0.0, 1.0)))
    }

    /// Quantize to 8-bit channels (clamp, scale by 255, round half up).
    pub fn to_rgba8(self) -> Rgba8 {
        let [r, g, b, a] = self.to_array().map(unit_to_u8);
        Rgba8 { r, g, b, a }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> GradientResult<Self> {
        parse_hex(s).map_err(GradientError::validation)
    }
}

/// Map a unit-range channel to `0..=255` with round-half-up.
///
/// NaN maps to 0.
pub(crate) fn unit_to_u8(x: f64) -> u8 {
    if x.is_nan() {
        return 0;
    }
    (x.clamp(0.0, 1.0) * 255.0 + 0.5).floor() as u8
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            RgbaObj {
                r: f64,
                g: f64,
                b: f64,
                #[serde(default = "one")]
                a: f64,
            },
            Arr(Vec<f64>),
        }

        fn one() -> f64 {
            1.0
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(Self::rgba(r, g, b, a)),
            Repr::Arr(v) => match v.as_slice() {
                &[r, g, b] => Ok(Self::rgb(r, g, b)),
                &[r, g, b, a] => Ok(Self::rgba(r, g, b, a)),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

fn parse_hex(s: &str) -> Result<Color, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() || !(s.len() == 6 || s.len() == 8) {
        return Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned());
    }

    let r = hex_byte(&s[0..2])?;
    let g = hex_byte(&s[2..4])?;
    let b = hex_byte(&s[4..6])?;
    let a = if s.len() == 8 { hex_byte(&s[6..8])? } else { 255 };

    Ok(Color::from_rgba8(Rgba8 { r, g, b, a }))
}

/// Straight-alpha RGBA8 pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Channels as a byte array.
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Build a pixel from a byte array in `r, g, b, a` order.
    pub fn from_bytes(b: [u8; 4]) -> Self {
        Self {
            r: b[0],
            g: b[1],
            b: b[2],
            a: b[3],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
