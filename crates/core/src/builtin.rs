//! Built-in named gradients.
//!
//! The classic segment gradients carry their usual anchor data. `viridis`
//! is interpolated from eleven anchor colors sampled from the reference
//! table; its endpoints are exact.

use customcolour_types::{Color, SegmentData};

use crate::error::Result;
use crate::gradient::Gradient;

/// Sample count of every built-in gradient
pub const DEFAULT_N: usize = 256;

type Anchors = &'static [(f64, f64, f64)];
type SegmentTable = (&'static str, Anchors, Anchors, Anchors);

/// `(name, red, green, blue)` anchor tables
const SEGMENT_GRADIENTS: &[SegmentTable] = &[
    (
        "jet",
        &[(0.0, 0.0, 0.0), (0.35, 0.0, 0.0), (0.66, 1.0, 1.0), (0.89, 1.0, 1.0), (1.0, 0.5, 0.5)],
        &[
            (0.0, 0.0, 0.0),
            (0.125, 0.0, 0.0),
            (0.375, 1.0, 1.0),
            (0.64, 1.0, 1.0),
            (0.91, 0.0, 0.0),
            (1.0, 0.0, 0.0),
        ],
        &[(0.0, 0.5, 0.5), (0.11, 1.0, 1.0), (0.34, 1.0, 1.0), (0.65, 0.0, 0.0), (1.0, 0.0, 0.0)],
    ),
    (
        "gray",
        &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
        &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
        &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
    ),
    (
        "hot",
        &[(0.0, 0.0416, 0.0416), (0.365079, 1.0, 1.0), (1.0, 1.0, 1.0)],
        &[(0.0, 0.0, 0.0), (0.365079, 0.0, 0.0), (0.746032, 1.0, 1.0), (1.0, 1.0, 1.0)],
        &[(0.0, 0.0, 0.0), (0.746032, 0.0, 0.0), (1.0, 1.0, 1.0)],
    ),
    (
        "cool",
        &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
        &[(0.0, 1.0, 1.0), (1.0, 0.0, 0.0)],
        &[(0.0, 1.0, 1.0), (1.0, 1.0, 1.0)],
    ),
    (
        "spring",
        &[(0.0, 1.0, 1.0), (1.0, 1.0, 1.0)],
        &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
        &[(0.0, 1.0, 1.0), (1.0, 0.0, 0.0)],
    ),
    (
        "summer",
        &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
        &[(0.0, 0.5, 0.5), (1.0, 1.0, 1.0)],
        &[(0.0, 0.4, 0.4), (1.0, 0.4, 0.4)],
    ),
    (
        "autumn",
        &[(0.0, 1.0, 1.0), (1.0, 1.0, 1.0)],
        &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
        &[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)],
    ),
    (
        "winter",
        &[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)],
        &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
        &[(0.0, 1.0, 1.0), (1.0, 0.5, 0.5)],
    ),
    (
        "copper",
        &[(0.0, 0.0, 0.0), (0.809524, 1.0, 1.0), (1.0, 1.0, 1.0)],
        &[(0.0, 0.0, 0.0), (1.0, 0.7812, 0.7812)],
        &[(0.0, 0.0, 0.0), (1.0, 0.4975, 0.4975)],
    ),
];

/// Viridis at positions 0.0, 0.1, ..., 1.0
const VIRIDIS_ANCHORS: [[f64; 3]; 11] = [
    [0.267004, 0.004874, 0.329415],
    [0.282623, 0.140926, 0.457517],
    [0.253935, 0.265254, 0.529983],
    [0.206756, 0.371758, 0.553117],
    [0.163625, 0.471133, 0.558148],
    [0.127568, 0.566949, 0.550556],
    [0.134692, 0.658636, 0.517649],
    [0.266941, 0.748751, 0.440573],
    [0.477504, 0.821444, 0.318195],
    [0.741388, 0.873449, 0.149561],
    [0.993248, 0.906157, 0.143936],
];

fn viridis() -> Result<Gradient> {
    let colors: Vec<Color> = VIRIDIS_ANCHORS
        .iter()
        .map(|[r, g, b]| Color::rgb(*r, *g, *b))
        .collect();
    Gradient::from_colors("viridis", &colors, DEFAULT_N)
}

fn segment_gradients(table: &[SegmentTable]) -> Result<Vec<Gradient>> {
    table
        .iter()
        .map(|(name, red, green, blue)| {
            Gradient::from_segments(*name, &SegmentData::from_tuples(red, green, blue), DEFAULT_N)
        })
        .collect()
}

/// Every built-in gradient at `DEFAULT_N` samples, without reversed variants
pub fn builtin_gradients() -> Result<Vec<Gradient>> {
    let mut gradients = segment_gradients(SEGMENT_GRADIENTS)?;
    gradients.push(viridis()?);
    Ok(gradients)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CmapError;

    fn get(name: &str) -> Gradient {
        builtin_gradients()
            .unwrap()
            .into_iter()
            .find(|g| g.name() == name)
            .unwrap()
    }

    #[test]
    fn test_all_builtins_build() {
        let gradients = builtin_gradients().unwrap();
        assert_eq!(gradients.len(), SEGMENT_GRADIENTS.len() + 1);
        for g in &gradients {
            assert_eq!(g.len(), DEFAULT_N, "{}", g.name());
            assert!(g.samples().iter().all(|c| c.a == 1.0));
            assert!(g
                .samples()
                .iter()
                .all(|c| (0.0..=1.0).contains(&c.r) && (0.0..=1.0).contains(&c.g) && (0.0..=1.0).contains(&c.b)));
        }
    }

    #[test]
    fn test_jet_endpoints() {
        let jet = get("jet");
        assert_eq!(jet.first(), Color::new(0.0, 0.0, 0.5, 1.0));
        assert_eq!(jet.last(), Color::new(0.5, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_viridis_endpoints() {
        let viridis = get("viridis");
        assert_eq!(viridis.first(), Color::new(0.267004, 0.004874, 0.329415, 1.0));
        assert_eq!(viridis.last(), Color::new(0.993248, 0.906157, 0.143936, 1.0));
    }

    #[test]
    fn test_gray_is_linear() {
        let gray = get("gray");
        for (i, c) in gray.samples().iter().enumerate() {
            let expected = i as f64 / 255.0;
            assert!((c.r - expected).abs() < 1e-12);
            assert_eq!(c.r, c.g);
            assert_eq!(c.g, c.b);
        }
    }

    #[test]
    fn test_invalid_table_is_an_error() {
        const BROKEN: &[SegmentTable] = &[
            (
                "ok",
                &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
                &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
                &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
            ),
            (
                "broken",
                &[(0.0, 0.0, 0.0), (0.9, 1.0, 1.0)],
                &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
                &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
            ),
        ];
        assert!(matches!(
            segment_gradients(BROKEN),
            Err(CmapError::InvalidSegments(_))
        ));
    }
}
