//! Blend settings for inserting a solid color into a gradient.

use serde::{Deserialize, Serialize};

use crate::location::BlendLocation;

/// Default number of transition samples.
///
/// 28 steps keeps the rate of change close to that of the perceptually
/// uniform gradients (viridis and friends) at 256 samples.
pub const DEFAULT_NBLEND: usize = 28;

/// Parameters of a blend operation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlendSpec {
    /// Number of samples in the transition between color and gradient
    #[serde(default = "default_nblend")]
    pub nblend: usize,
    /// Where the color is inserted
    #[serde(default)]
    pub loc: BlendLocation,
    /// Total sample count of the result (None = the gradient's own count)
    #[serde(default)]
    pub ncolor: Option<usize>,
}

fn default_nblend() -> usize {
    DEFAULT_NBLEND
}

impl BlendSpec {
    pub fn new(nblend: usize, loc: BlendLocation, ncolor: Option<usize>) -> Self {
        Self { nblend, loc, ncolor }
    }

    pub fn with_nblend(mut self, nblend: usize) -> Self {
        self.nblend = nblend;
        self
    }

    pub fn with_loc(mut self, loc: BlendLocation) -> Self {
        self.loc = loc;
        self
    }

    pub fn with_ncolor(mut self, ncolor: usize) -> Self {
        self.ncolor = Some(ncolor);
        self
    }
}

impl Default for BlendSpec {
    fn default() -> Self {
        Self {
            nblend: DEFAULT_NBLEND,
            loc: BlendLocation::Start,
            ncolor: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_spec_default() {
        let spec = BlendSpec::default();
        assert_eq!(spec.nblend, 28);
        assert_eq!(spec.loc, BlendLocation::Start);
        assert!(spec.ncolor.is_none());
    }

    #[test]
    fn test_blend_spec_partial_deserialization() {
        let spec: BlendSpec = serde_json::from_str(r#"{"loc":"mid"}"#).unwrap();
        assert_eq!(spec.nblend, DEFAULT_NBLEND);
        assert_eq!(spec.loc, BlendLocation::Mid);
        assert!(spec.ncolor.is_none());

        let spec: BlendSpec = serde_json::from_str(r#"{"nblend":32,"ncolor":64,"loc":0.2}"#).unwrap();
        assert_eq!(spec, BlendSpec::new(32, BlendLocation::Fraction(0.2), Some(64)));
    }
}
