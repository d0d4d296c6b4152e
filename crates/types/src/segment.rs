//! Per-channel segment data for piecewise-linear gradients.
//!
//! Each channel is a list of anchors `(x, below, above)`: `x` is a position
//! in 0..=1, `below` is the value reached when approaching `x` from the left
//! and `above` the value leaving it to the right. Equal `below`/`above`
//! gives a continuous channel; different values give a hard step.

use serde::{Deserialize, Serialize};

/// One anchor of a channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentAnchor {
    pub x: f64,
    pub below: f64,
    pub above: f64,
}

impl SegmentAnchor {
    pub const fn new(x: f64, below: f64, above: f64) -> Self {
        Self { x, below, above }
    }

    /// Anchor with no discontinuity
    pub const fn smooth(x: f64, value: f64) -> Self {
        Self::new(x, value, value)
    }
}

impl From<(f64, f64, f64)> for SegmentAnchor {
    fn from((x, below, above): (f64, f64, f64)) -> Self {
        Self::new(x, below, above)
    }
}

/// Anchor lists for the four channels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentData {
    pub red: Vec<SegmentAnchor>,
    pub green: Vec<SegmentAnchor>,
    pub blue: Vec<SegmentAnchor>,
    /// Missing alpha means fully opaque
    #[serde(default)]
    pub alpha: Option<Vec<SegmentAnchor>>,
}

impl SegmentData {
    /// Builds opaque segment data from `(x, below, above)` tuples
    pub fn from_tuples(
        red: &[(f64, f64, f64)],
        green: &[(f64, f64, f64)],
        blue: &[(f64, f64, f64)],
    ) -> Self {
        Self {
            red: red.iter().copied().map(SegmentAnchor::from).collect(),
            green: green.iter().copied().map(SegmentAnchor::from).collect(),
            blue: blue.iter().copied().map(SegmentAnchor::from).collect(),
            alpha: None,
        }
    }

    /// Alpha anchors, defaulting to a constant 1.0
    pub fn alpha_or_opaque(&self) -> Vec<SegmentAnchor> {
        match &self.alpha {
            Some(alpha) => alpha.clone(),
            None => vec![SegmentAnchor::smooth(0.0, 1.0), SegmentAnchor::smooth(1.0, 1.0)],
        }
    }
}
