//! Antipodal edge–vertex pairs of a convex polygon.
//!
//! For each polygon edge, pair it with the vertex farthest from the edge's
//! supporting line (the support width in that direction). One pair per
//! edge; edges without an eligible vertex are dropped, not crashed on.
//!
//! This single-farthest-vertex rule is a simplification of the exact
//! rotating-calipers antipodal relation: when several vertices tie at
//! maximum width only the first in traversal order is kept. Sufficient for
//! bounding width per edge direction, which is all the candidate search
//! needs.

use nalgebra::Vector2;

use crate::geom::Segment;

/// A polygon edge coupled with a candidate antipodal vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeVertexPair {
    pub vertex: Vector2<f64>,
    pub edge: Segment,
}

impl EdgeVertexPair {
    #[inline]
    pub fn new(vertex: Vector2<f64>, edge: Segment) -> Self {
        Self { vertex, edge }
    }

    /// Perpendicular distance from the vertex to the edge's infinite
    /// supporting line. `None` only for a degenerate edge.
    #[inline]
    pub fn width(&self) -> Option<f64> {
        Some(self.edge.perpendicular(self.vertex)?.length())
    }

    /// Signed angle between the two pairs' edges.
    #[inline]
    pub fn angle_to(&self, other: &EdgeVertexPair) -> f64 {
        self.edge.angle_to(&other.edge)
    }
}

/// One antipodal pair per polygon edge `v_i → v_{(i+1) mod n}`.
///
/// Scans every vertex not coordinate-equal to either edge endpoint and
/// keeps the strictly maximal width; the first maximal vertex in traversal
/// order wins ties (deterministic tie-break). Edges with coincident
/// endpoints, no eligible vertex, or zero maximal width (all eligible
/// vertices on the supporting line) contribute no pair and are excluded
/// from the output.
///
/// O(n²): n edges × n vertex scan.
pub fn antipodal_pairs(vertices: &[Vector2<f64>]) -> Vec<EdgeVertexPair> {
    let n = vertices.len();
    let mut pairs = Vec::with_capacity(n);
    for i in 0..n {
        let v1 = vertices[i];
        let v2 = vertices[(i + 1) % n];
        if v1 == v2 {
            continue;
        }
        let edge = Segment::new(v1, v2);
        let mut max_width = 0.0;
        let mut best: Option<EdgeVertexPair> = None;
        for &v in vertices {
            if v == v1 || v == v2 {
                continue;
            }
            let pair = EdgeVertexPair::new(v, edge);
            let Some(width) = pair.width() else {
                continue;
            };
            if width > max_width {
                max_width = width;
                best = Some(pair);
            }
        }
        if let Some(pair) = best {
            pairs.push(pair);
        }
    }
    pairs
}
