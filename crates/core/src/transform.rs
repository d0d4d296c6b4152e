//! Whole-gradient channel transforms: grayscale and inversion.
//!
//! Both sample the source at `ncolor` evenly spaced positions (defaulting to
//! the source's own sample count), rewrite the RGB channels of every row and
//! leave alpha untouched.

use customcolour_types::Color;
use log::debug;

use crate::error::{CmapError, Result};
use crate::gradient::Gradient;
use crate::lightness::lightness;

fn resolve_count(gradient: &Gradient, ncolor: Option<usize>) -> Result<usize> {
    match ncolor {
        Some(0) => Err(CmapError::InvalidSampleCount),
        Some(n) => Ok(n),
        None => Ok(gradient.len()),
    }
}

fn map_rgb(
    gradient: &Gradient,
    ncolor: Option<usize>,
    marker: char,
    f: impl Fn(&Color) -> Color,
) -> Result<Gradient> {
    let n = resolve_count(gradient, ncolor)?;
    let samples: Vec<Color> = gradient.sample(n).iter().map(f).collect();
    let name = format!("{}{}", marker, gradient.name());
    debug!("built '{}' from '{}' with {} samples", name, gradient.name(), n);
    Gradient::from_samples(name, samples)
}

/// Grayscale copy of `gradient`, named `g<name>`.
///
/// Every row's R, G and B are replaced with the row's lightness.
pub fn grayscale(gradient: &Gradient, ncolor: Option<usize>) -> Result<Gradient> {
    map_rgb(gradient, ncolor, 'g', |c| {
        let l = lightness(c);
        Color::new(l, l, l, c.a)
    })
}

/// Inverted copy of `gradient`, named `i<name>`: `rgb -> 1 - rgb`
pub fn invert(gradient: &Gradient, ncolor: Option<usize>) -> Result<Gradient> {
    map_rgb(gradient, ncolor, 'i', |c| {
        Color::new(1.0 - c.r, 1.0 - c.g, 1.0 - c.b, c.a)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::builtin_gradients;
    use crate::lightness::lightness_all;
    use rand::Rng;

    fn jet() -> Gradient {
        builtin_gradients()
            .unwrap()
            .into_iter()
            .find(|g| g.name() == "jet")
            .unwrap()
    }

    fn random_gradient(n: usize) -> Gradient {
        let mut rng = rand::thread_rng();
        let samples = (0..n)
            .map(|_| Color::new(rng.gen(), rng.gen(), rng.gen(), rng.gen()))
            .collect();
        Gradient::from_samples("random", samples).unwrap()
    }

    #[test]
    fn test_grayscale_name() {
        assert_eq!(grayscale(&jet(), None).unwrap().name(), "gjet");
    }

    #[test]
    fn test_grayscale_color() {
        let cmap = jet();
        let gray = grayscale(&cmap, None).unwrap();
        assert_eq!(gray.len(), cmap.len());

        let expected = lightness_all(cmap.samples());
        for (row, l) in gray.samples().iter().zip(expected) {
            assert!((row.r - l).abs() < 1e-10);
            assert_eq!(row.r, row.g);
            assert_eq!(row.g, row.b);
        }
        let mid = cmap.len() / 2 - 1;
        assert!((lightness(&cmap.samples()[mid]) - gray.samples()[mid].r).abs() < 1e-10);
    }

    #[test]
    fn test_grayscale_keeps_alpha() {
        let g = random_gradient(64);
        let gray = grayscale(&g, None).unwrap();
        for (a, b) in g.samples().iter().zip(gray.samples()) {
            assert_eq!(a.a, b.a);
        }
    }

    #[test]
    fn test_grayscale_sample_count() {
        let gray = grayscale(&jet(), Some(17)).unwrap();
        assert_eq!(gray.len(), 17);
        assert_eq!(grayscale(&jet(), Some(0)), Err(CmapError::InvalidSampleCount));
    }

    #[test]
    fn test_invert_name() {
        assert_eq!(invert(&jet(), None).unwrap().name(), "ijet");
    }

    #[test]
    fn test_invert_color() {
        let cmap = jet();
        let inv = invert(&cmap, None).unwrap();
        let c1 = cmap.at(0.0);
        let c2 = inv.at(0.0);
        assert_eq!(c2, Color::new(1.0 - c1.r, 1.0 - c1.g, 1.0 - c1.b, c1.a));
    }

    #[test]
    fn test_invert_twice_round_trips() {
        let g = random_gradient(100);
        let back = invert(&invert(&g, None).unwrap(), None).unwrap();
        assert_eq!(back.name(), "iirandom");
        for (a, b) in g.samples().iter().zip(back.samples()) {
            assert!((a.r - b.r).abs() < 1e-12);
            assert!((a.g - b.g).abs() < 1e-12);
            assert!((a.b - b.b).abs() < 1e-12);
            assert_eq!(a.a, b.a);
        }
    }

    #[test]
    fn test_invert_resampled() {
        let inv = invert(&jet(), Some(5)).unwrap();
        assert_eq!(inv.len(), 5);
    }
}
