//! Lookup-table construction from segment data

use customcolour_types::{Color, SegmentAnchor, SegmentData};

use crate::error::{CmapError, Result};

/// `n` evenly spaced positions over 0..=1, both ends included.
///
/// A single position is 0.0; zero positions is an empty vec.
pub fn linspace(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let last = (n - 1) as f64;
            (0..n).map(|i| i as f64 / last).collect()
        }
    }
}

fn validate(channel: &str, anchors: &[SegmentAnchor]) -> Result<()> {
    let (first, last) = match (anchors.first(), anchors.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            return Err(CmapError::InvalidSegments(format!(
                "{} channel has no anchors",
                channel
            )))
        }
    };
    if first.x != 0.0 || last.x != 1.0 {
        return Err(CmapError::InvalidSegments(format!(
            "{} channel must start at x=0 and end at x=1",
            channel
        )));
    }
    if anchors.windows(2).any(|w| !(w[0].x <= w[1].x)) {
        return Err(CmapError::InvalidSegments(format!(
            "{} channel anchors are not in increasing order",
            channel
        )));
    }
    Ok(())
}

/// Evaluates one channel at `n` evenly spaced positions.
///
/// A position equal to an anchor's `x` takes the anchor's `above` value,
/// except the final position which takes the last anchor's `below`.
fn channel_lut(anchors: &[SegmentAnchor], n: usize) -> Vec<f64> {
    linspace(n)
        .into_iter()
        .map(|x| {
            let k = anchors.partition_point(|a| a.x <= x);
            if k == 0 {
                return anchors[0].above;
            }
            if k == anchors.len() {
                return anchors[k - 1].below;
            }
            let left = &anchors[k - 1];
            let right = &anchors[k];
            let t = (x - left.x) / (right.x - left.x);
            left.above * (1.0 - t) + right.below * t
        })
        .collect()
}

/// Builds an `n`-entry color table from segment data
pub(crate) fn segments_lut(data: &SegmentData, n: usize) -> Result<Vec<Color>> {
    let alpha = data.alpha_or_opaque();
    validate("red", &data.red)?;
    validate("green", &data.green)?;
    validate("blue", &data.blue)?;
    validate("alpha", &alpha)?;

    let r = channel_lut(&data.red, n);
    let g = channel_lut(&data.green, n);
    let b = channel_lut(&data.blue, n);
    let a = channel_lut(&alpha, n);

    Ok((0..n).map(|i| Color::new(r[i], g[i], b[i], a[i])).collect())
}

/// Segment data that passes linearly through each stop's color
pub(crate) fn stops_to_segments(stops: &[(f64, Color)]) -> SegmentData {
    let channel = |pick: fn(&Color) -> f64| -> Vec<SegmentAnchor> {
        stops
            .iter()
            .map(|(x, c)| SegmentAnchor::smooth(*x, pick(c)))
            .collect()
    };
    SegmentData {
        red: channel(|c| c.r),
        green: channel(|c| c.g),
        blue: channel(|c| c.b),
        alpha: Some(channel(|c| c.a)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace() {
        assert!(linspace(0).is_empty());
        assert_eq!(linspace(1), vec![0.0]);
        assert_eq!(linspace(5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        let xs = linspace(256);
        assert_eq!(xs.len(), 256);
        assert_eq!(xs[255], 1.0);
    }

    #[test]
    fn test_channel_lut_linear() {
        let anchors = [SegmentAnchor::smooth(0.0, 0.0), SegmentAnchor::smooth(1.0, 1.0)];
        let values = channel_lut(&anchors, 5);
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_channel_lut_discontinuity() {
        // Step from 0 to 1 at x = 0.5
        let anchors = [
            SegmentAnchor::smooth(0.0, 0.0),
            SegmentAnchor::new(0.5, 0.0, 1.0),
            SegmentAnchor::smooth(1.0, 1.0),
        ];
        let values = channel_lut(&anchors, 5);
        assert_eq!(values, vec![0.0, 0.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_segments_validation() {
        let data = SegmentData::from_tuples(
            &[(0.0, 0.0, 0.0), (0.9, 1.0, 1.0)],
            &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
            &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
        );
        assert!(matches!(
            segments_lut(&data, 8),
            Err(CmapError::InvalidSegments(_))
        ));

        let data = SegmentData::from_tuples(
            &[(0.0, 0.0, 0.0), (0.7, 1.0, 1.0), (0.3, 1.0, 1.0), (1.0, 1.0, 1.0)],
            &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
            &[],
        );
        assert!(segments_lut(&data, 8).is_err());
    }
}
