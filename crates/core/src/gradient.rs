//! The gradient value type

use customcolour_types::{Color, ColorStop, SegmentData};
use serde::Serialize;

use crate::error::{CmapError, Result};
use crate::lut::{linspace, segments_lut, stops_to_segments};

/// A named gradient stored as a lookup table of N samples.
///
/// The continuous mapping from 0..=1 to RGBA is the table itself: position
/// `t` falls into bin `floor(t * N)`. Gradients are never mutated; every
/// transform builds a new one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gradient {
    name: String,
    samples: Vec<Color>,
}

impl Gradient {
    /// Wraps an existing sample table. The table must not be empty.
    pub fn from_samples(name: impl Into<String>, samples: Vec<Color>) -> Result<Self> {
        let name = name.into();
        if samples.is_empty() {
            return Err(CmapError::EmptyGradient { name });
        }
        Ok(Self { name, samples })
    }

    /// Builds an `n`-sample gradient passing through `colors` at evenly
    /// spaced positions.
    pub fn from_colors(name: impl Into<String>, colors: &[Color], n: usize) -> Result<Self> {
        let name = name.into();
        if n == 0 {
            return Err(CmapError::InvalidSampleCount);
        }
        match colors {
            [] => Err(CmapError::EmptyGradient { name }),
            [only] => Self::from_samples(name, vec![*only; n]),
            _ => {
                let stops: Vec<(f64, Color)> = linspace(colors.len())
                    .into_iter()
                    .zip(colors.iter().copied())
                    .collect();
                Self::from_samples(name, segments_lut(&stops_to_segments(&stops), n)?)
            }
        }
    }

    /// Builds an `n`-sample gradient from explicitly positioned stops.
    ///
    /// Stops must start at position 0, end at position 1 and be sorted.
    pub fn from_stops(name: impl Into<String>, stops: &[ColorStop], n: usize) -> Result<Self> {
        if n == 0 {
            return Err(CmapError::InvalidSampleCount);
        }
        let stops: Vec<(f64, Color)> = stops.iter().map(|s| (s.position, s.color)).collect();
        Self::from_samples(name, segments_lut(&stops_to_segments(&stops), n)?)
    }

    /// Builds an `n`-sample gradient from per-channel segment data
    pub fn from_segments(name: impl Into<String>, data: &SegmentData, n: usize) -> Result<Self> {
        if n == 0 {
            return Err(CmapError::InvalidSampleCount);
        }
        Self::from_samples(name, segments_lut(data, n)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Natural sample count N
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Color] {
        &self.samples
    }

    /// Sample by table index
    pub fn get(&self, index: usize) -> Option<Color> {
        self.samples.get(index).copied()
    }

    pub fn first(&self) -> Color {
        self.samples[0]
    }

    pub fn last(&self) -> Color {
        self.samples[self.samples.len() - 1]
    }

    /// Evaluates the gradient at position `t`.
    ///
    /// Positions below 0 clamp to the first sample, above 1 to the last.
    /// NaN has no position and evaluates to transparent.
    pub fn at(&self, t: f64) -> Color {
        if t.is_nan() {
            return Color::TRANSPARENT;
        }
        let n = self.samples.len();
        let index = (t * n as f64).floor();
        let index = if index < 0.0 {
            0
        } else {
            (index as usize).min(n - 1)
        };
        self.samples[index]
    }

    /// Evaluates the gradient at `n` evenly spaced positions over 0..=1.
    ///
    /// `sample(self.len())` returns the stored table unchanged.
    pub fn sample(&self, n: usize) -> Vec<Color> {
        linspace(n).into_iter().map(|t| self.at(t)).collect()
    }

    /// Same table in reverse order, named `<name>_r`
    pub fn reversed(&self) -> Gradient {
        let mut samples = self.samples.clone();
        samples.reverse();
        Gradient {
            name: format!("{}_r", self.name),
            samples,
        }
    }

    /// Same table under a different name
    pub fn renamed(self, name: impl Into<String>) -> Gradient {
        Gradient {
            name: name.into(),
            samples: self.samples,
        }
    }
}
