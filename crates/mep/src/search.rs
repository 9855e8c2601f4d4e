//! Exhaustive pairwise search for the minimum-area enclosing parallelogram.
//!
//! Enumerates all index pairs over the antipodal pairs, builds a candidate
//! per pair, and keeps the minimum-area drawable one. O(m²) candidate
//! constructions, each a constant number of 2×2 solves; inputs are small
//! convex polygons so no sub-quadratic variant is attempted.

use nalgebra::Vector2;
use thiserror::Error;

use crate::antipodal::{antipodal_pairs, EdgeVertexPair};
use crate::parallelogram::Parallelogram;

/// Per-polygon failure modes. All geometric degeneracies below this level
/// are absorbed as "no pair" / "not drawable" and filtered out of the
/// search; only these terminal outcomes surface.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum MepError {
    /// Fewer than three vertices cannot bound a convex region.
    #[error("polygon has {0} vertices, need at least 3")]
    TooFewVertices(usize),
    /// Every candidate across the full search was non-drawable.
    #[error("no drawable parallelogram candidate")]
    NoDrawableCandidate,
}

/// Minimum-area candidate plus the two antipodal pairs that produced it
/// (kept for diagnostics).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mep {
    pub parallelogram: Parallelogram,
    pub pair1: EdgeVertexPair,
    pub pair2: EdgeVertexPair,
}

/// Minimum-area drawable candidate over all index pairs `(i, j)` with
/// `0 ≤ i ≤ m−2` and `i ≤ j ≤ m−1`.
///
/// The inclusive lower bound `j = i` pairs each entry with itself; a
/// self-pair has identical edge lines and is never drawable, so it can
/// never become the minimum. Ties on area keep the first-found candidate
/// (strict `<`, deterministic in traversal order).
pub fn minimum_parallelogram(pairs: &[EdgeVertexPair]) -> Option<Mep> {
    let mut best: Option<(f64, Mep)> = None;
    let m = pairs.len();
    for i in 0..m.saturating_sub(1) {
        for j in i..m {
            let Some(pargram) = Parallelogram::from_pairs(&pairs[i], &pairs[j]) else {
                continue;
            };
            let area = pargram.area();
            if best.as_ref().is_none_or(|(min_area, _)| area < *min_area) {
                best = Some((
                    area,
                    Mep {
                        parallelogram: pargram,
                        pair1: pairs[i],
                        pair2: pairs[j],
                    },
                ));
            }
        }
    }
    best.map(|(_, mep)| mep)
}

/// Minimum enclosing parallelogram of one convex polygon.
///
/// The polygon is an ordered vertex cycle with consistent winding;
/// convexity is assumed, not verified. A pure function: no state persists
/// across calls, and concurrent invocations on independent polygons need
/// no synchronization.
pub fn enclose(polygon: &[Vector2<f64>]) -> Result<Mep, MepError> {
    if polygon.len() < 3 {
        return Err(MepError::TooFewVertices(polygon.len()));
    }
    let pairs = antipodal_pairs(polygon);
    minimum_parallelogram(&pairs).ok_or(MepError::NoDrawableCandidate)
}

/// Batch surface for upstream collaborators: one result per polygon, in
/// input order. The caller decides whether to discard failed slots.
pub fn enclose_all<'a, I>(polygons: I) -> Vec<Result<Mep, MepError>>
where
    I: IntoIterator<Item = &'a [Vector2<f64>]>,
{
    polygons.into_iter().map(enclose).collect()
}
