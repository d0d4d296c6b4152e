//! Foundational color types used throughout customcolour.
//!
//! Color and ColorStop are the building blocks for every gradient: a
//! gradient's lookup table is a `Vec<Color>`, and explicit gradients are
//! described by stops.

use serde::{Deserialize, Serialize};

/// RGBA color with alpha channel, each channel in 0.0..=1.0
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "default_alpha")]
    pub a: f64,
}

fn default_alpha() -> f64 {
    1.0
}

impl Color {
    /// Opaque white
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque black
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Fully transparent black, used for positions that cannot be evaluated
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    /// Channels clamped to 0..=1 and rounded to bytes
    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        (
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.a.clamp(0.0, 1.0) * 255.0).round() as u8,
        )
    }

    /// Channels as an `[r, g, b, a]` array
    pub fn to_array(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_array(c: [f64; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    /// Per-channel linear interpolation towards `other`.
    ///
    /// Written as `self * (1 - t) + other * t` so that `t == 0.0` returns
    /// `self` and `t == 1.0` returns `other` bit for bit.
    pub fn lerp(self, other: Color, t: f64) -> Color {
        let s = 1.0 - t;
        Color {
            r: self.r * s + other.r * t,
            g: self.g * s + other.g * t,
            b: self.b * s + other.b * t,
            a: self.a * s + other.a * t,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[f64; 4]> for Color {
    fn from(c: [f64; 4]) -> Self {
        Self::from_array(c)
    }
}

/// Color stop for explicit gradients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColorStop {
    pub position: f64, // 0.0 to 1.0
    pub color: Color,
}

impl ColorStop {
    pub fn new(position: f64, color: Color) -> Self {
        Self { position, color }
    }
}
