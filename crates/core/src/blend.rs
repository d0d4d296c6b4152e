//! Inserting a solid color into a gradient.
//!
//! `add_rgba` resamples the source gradient to `ncolor - nblend` rows and
//! splices in `nblend` transition rows that pass through the target color
//! at the requested location. The result always has exactly `ncolor` rows.

use customcolour_types::{BlendLocation, BlendSpec, Color};
use log::debug;

use crate::error::{CmapError, Result};
use crate::gradient::Gradient;
use crate::lut::linspace;

/// Linear transition from `from` to `to` over `npts` rows.
///
/// The first row is exactly `from` and the last exactly `to`. One row
/// yields `[from]`; zero rows yield an empty vec.
pub fn blend_rgba(from: Color, to: Color, npts: usize) -> Vec<Color> {
    linspace(npts).into_iter().map(|t| from.lerp(to, t)).collect()
}

/// Transition of `npts` rows that ends exactly on `target`
fn blend_into(from: Color, target: Color, npts: usize) -> Vec<Color> {
    let mut rows = blend_rgba(target, from, npts);
    rows.reverse();
    rows
}

/// Index that splits `norig` samples for a mid or fractional location
fn split_index(loc: BlendLocation, norig: usize) -> Result<usize> {
    let nmid = match loc {
        BlendLocation::Mid => norig / 2,
        BlendLocation::Fraction(f) if f > 0.0 && f < 1.0 => {
            (norig as f64 * f).round_ties_even() as usize
        }
        BlendLocation::Fraction(f) => return Err(CmapError::InvalidLocation(f)),
        BlendLocation::Start => 0,
        BlendLocation::End => norig,
    };
    if nmid == 0 || nmid >= norig {
        return Err(CmapError::EmptySplit { nmid, norig });
    }
    Ok(nmid)
}

/// Blends `rgba` into `gradient` at `spec.loc`, named `a<name>`
pub fn add_rgba(gradient: &Gradient, rgba: Color, spec: &BlendSpec) -> Result<Gradient> {
    let ncolor = spec.ncolor.unwrap_or(gradient.len());
    let nblend = spec.nblend;
    if nblend >= ncolor {
        return Err(CmapError::BlendTooWide { nblend, ncolor });
    }
    let norig = ncolor - nblend;
    let orig = gradient.sample(norig);

    let mut rows = Vec::with_capacity(ncolor);
    match spec.loc.normalized() {
        BlendLocation::Start => {
            rows.extend(blend_rgba(rgba, orig[0], nblend));
            rows.extend_from_slice(&orig);
        }
        BlendLocation::End => {
            rows.extend_from_slice(&orig);
            rows.extend(blend_into(orig[norig - 1], rgba, nblend));
        }
        loc => {
            let nmid = split_index(loc, norig)?;
            let (first, second) = orig.split_at(nmid);

            // Back half takes the extra row: nblend / 2 + 1 rows ending on
            // the target, the forward half drops its leading target row.
            let nbak = if nblend == 0 { 0 } else { nblend / 2 + 1 };
            let nfwd = nblend - nbak;

            rows.extend_from_slice(first);
            rows.extend(blend_into(first[nmid - 1], rgba, nbak));
            rows.extend(blend_rgba(rgba, second[0], nfwd + 1).into_iter().skip(1));
            rows.extend_from_slice(second);
        }
    }
    debug_assert_eq!(rows.len(), ncolor);

    let name = format!("a{}", gradient.name());
    debug!(
        "blended into '{}' at {} (nblend={}, ncolor={})",
        name, spec.loc, nblend, ncolor
    );
    Gradient::from_samples(name, rows)
}

/// Replaces the leading `a` marker of a blended gradient
fn remark(gradient: Gradient, marker: char) -> Gradient {
    let base = gradient
        .name()
        .strip_prefix('a')
        .unwrap_or(gradient.name())
        .to_string();
    gradient.renamed(format!("{}{}", marker, base))
}

/// Blends opaque white into `gradient`, named `w<name>`
pub fn add_white(gradient: &Gradient, spec: &BlendSpec) -> Result<Gradient> {
    Ok(remark(add_rgba(gradient, Color::WHITE, spec)?, 'w'))
}

/// Blends opaque black into `gradient`, named `b<name>`
pub fn add_black(gradient: &Gradient, spec: &BlendSpec) -> Result<Gradient> {
    Ok(remark(add_rgba(gradient, Color::BLACK, spec)?, 'b'))
}
