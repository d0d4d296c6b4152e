//! Where a solid color is blended into a gradient.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Position of a blended color along the gradient axis.
///
/// Serialized as `"start"`, `"end"`, `"mid"` or a bare number. The numbers
/// `0` and `1` are read as `Start` and `End`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "LocationRepr", into = "LocationRepr")]
pub enum BlendLocation {
    /// Blend in before the first sample
    #[default]
    Start,
    /// Blend in after the last sample
    End,
    /// Blend in at the middle sample
    Mid,
    /// Blend in at a fraction of the gradient, strictly between 0 and 1
    Fraction(f64),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LocationError {
    #[error("unrecognized value for 'loc': {0}")]
    Unrecognized(String),
    #[error("location {0} is outside 0..=1")]
    OutOfRange(f64),
}

impl BlendLocation {
    /// Builds a location from a numeric position.
    ///
    /// `0` maps to `Start`, `1` maps to `End`, anything strictly inside
    /// the unit interval is a `Fraction`.
    pub fn from_fraction(value: f64) -> Result<Self, LocationError> {
        if value == 0.0 {
            Ok(Self::Start)
        } else if value == 1.0 {
            Ok(Self::End)
        } else if value > 0.0 && value < 1.0 {
            Ok(Self::Fraction(value))
        } else {
            Err(LocationError::OutOfRange(value))
        }
    }

    /// Folds numeric endpoints into `Start`/`End`.
    ///
    /// A `Fraction` outside the open unit interval is left untouched; the
    /// blend step rejects it.
    pub fn normalized(self) -> Self {
        match self {
            Self::Fraction(f) if f == 0.0 => Self::Start,
            Self::Fraction(f) if f == 1.0 => Self::End,
            other => other,
        }
    }
}

impl FromStr for BlendLocation {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(Self::Start),
            "end" => Ok(Self::End),
            "mid" => Ok(Self::Mid),
            other => {
                let value: f64 = other
                    .parse()
                    .map_err(|_| LocationError::Unrecognized(s.to_string()))?;
                Self::from_fraction(value)
            }
        }
    }
}

impl fmt::Display for BlendLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::End => write!(f, "end"),
            Self::Mid => write!(f, "mid"),
            Self::Fraction(v) => write!(f, "{}", v),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum LocationRepr {
    Name(String),
    Number(f64),
}

impl TryFrom<LocationRepr> for BlendLocation {
    type Error = LocationError;

    fn try_from(repr: LocationRepr) -> Result<Self, Self::Error> {
        match repr {
            LocationRepr::Name(name) => name.parse(),
            LocationRepr::Number(value) => Self::from_fraction(value),
        }
    }
}

impl From<BlendLocation> for LocationRepr {
    fn from(loc: BlendLocation) -> Self {
        match loc {
            BlendLocation::Fraction(v) => LocationRepr::Number(v),
            other => LocationRepr::Name(other.to_string()),
        }
    }
}
