//! Perceptual lightness of RGBA samples.
//!
//! `l = sqrt(0.299 R^2 + 0.587 G^2 + 0.114 B^2)`, alpha ignored. White has
//! lightness 1, black 0.

use customcolour_types::Color;

/// Weights of the red, green and blue channels
pub const RGB_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

pub fn lightness(color: &Color) -> f64 {
    let [wr, wg, wb] = RGB_WEIGHTS;
    (wr * color.r * color.r + wg * color.g * color.g + wb * color.b * color.b).sqrt()
}

/// Lightness of every sample, in order
pub fn lightness_all(colors: &[Color]) -> Vec<f64> {
    colors.iter().map(lightness).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_lightness() {
        assert!(lightness(&Color::WHITE) > 1.0 - 1e-10);
    }

    #[test]
    fn test_black_lightness() {
        assert!(lightness(&Color::BLACK) < 1e-10);
    }

    #[test]
    fn test_red_lightness() {
        let red = Color::new(1.0, 0.0, 0.0, 1.0);
        assert!((lightness(&red) - 0.299_f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_alpha_is_ignored() {
        let opaque = Color::new(0.2, 0.4, 0.6, 1.0);
        let clear = Color::new(0.2, 0.4, 0.6, 0.0);
        assert_eq!(lightness(&opaque), lightness(&clear));
    }

    #[test]
    fn test_lightness_all() {
        let values = lightness_all(&[Color::BLACK, Color::WHITE, Color::rgb(0.0, 1.0, 0.0)]);
        assert_eq!(values.len(), 3);
        assert!(values[0] < 1e-10);
        assert!((values[1] - 1.0).abs() < 1e-10);
        assert!((values[2] - 0.587_f64.sqrt()).abs() < 1e-10);
    }
}
