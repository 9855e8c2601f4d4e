//! Circumscribing parallelogram candidates.
//!
//! From two antipodal pairs `z1 = (v1, e1)` and `z2 = (v2, e2)` build the
//! unique parallelogram whose side directions are those of `e1` and `e2`:
//! two sides lie on the edges' supporting lines, the other two pass
//! through the antipodal vertices `v1` and `v2`. Construction fails (the
//! candidate is not drawable) when any of the three required line
//! intersections degenerates into parallel lines.

use nalgebra::Vector2;

use crate::antipodal::EdgeVertexPair;
use crate::geom::Segment;

/// Drawable parallelogram candidate.
///
/// Holds the three independently solved vertices; the fourth is closure
/// (`d = a − b + c`), never solved on its own, so `a, b, c, d` form a
/// parallelogram by construction. Clockwise order: `a, b, c, d`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallelogram {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
    pub c: Vector2<f64>,
}

impl Parallelogram {
    /// Build the candidate for two antipodal pairs.
    ///
    /// - `a = line(e1) ∩ line(e2)`
    /// - `b = line(e1) ∩ (line through v2 parallel to e2)`
    /// - `c = (line through v2 ∥ e2) ∩ (line through v1 ∥ e1)`
    ///
    /// `None` when any pair of lines is parallel within tolerance; in
    /// particular a pair combined with itself is never drawable.
    pub fn from_pairs(z1: &EdgeVertexPair, z2: &EdgeVertexPair) -> Option<Self> {
        let through_v1 = Segment::from_direction(z1.vertex, z1.edge.direction());
        let through_v2 = Segment::from_direction(z2.vertex, z2.edge.direction());
        let a = z1.edge.intersection(&z2.edge)?;
        let b = z1.edge.intersection(&through_v2)?;
        let c = through_v2.intersection(&through_v1)?;
        Some(Self { a, b, c })
    }

    /// Fourth vertex by parallelogram closure.
    #[inline]
    pub fn d(&self) -> Vector2<f64> {
        self.a - self.b + self.c
    }

    /// All four vertices in clockwise order `a, b, c, d`.
    #[inline]
    pub fn vertices(&self) -> [Vector2<f64>; 4] {
        [self.a, self.b, self.c, self.d()]
    }

    /// Signed angle between sides `a→b` and `b→c`.
    #[inline]
    pub fn angle(&self) -> f64 {
        Segment::new(self.a, self.b).angle_to(&Segment::new(self.b, self.c))
    }

    /// `|ab| · |bc| · sin(θ)` with `θ = |angle()| mod π`.
    ///
    /// Zero when the two side directions coincide numerically: such flat
    /// candidates stay scoreable without any solve failure.
    pub fn area(&self) -> f64 {
        let theta = self.angle().abs() % std::f64::consts::PI;
        Segment::new(self.a, self.b).length() * Segment::new(self.b, self.c).length() * theta.sin()
    }
}
