//! Directed segments and their supporting lines.
//!
//! - `Line`: coefficients `(m, n, p)` with `m·x + n·y + p = 0`.
//! - `Segment`: directed pair of points; derives its supporting line on
//!   construction and exposes direction, length, perpendicular foot, and
//!   infinite-line intersection.

use nalgebra::{matrix, Vector2};

/// Absolute angular tolerance (radians) for the parallel test in
/// [`Segment::intersection`].
pub const EPS_PARALLEL: f64 = 1e-7;

/// Supporting line `m·x + n·y + p = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub m: f64,
    pub n: f64,
    pub p: f64,
}

impl Line {
    /// Line through `a` and `b`: `m = a.y − b.y`, `n = b.x − a.x`,
    /// `p = a.x·b.y − a.y·b.x`.
    #[inline]
    pub fn through(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self {
            m: a.y - b.y,
            n: b.x - a.x,
            p: a.x * b.y - a.y * b.x,
        }
    }

    /// Evaluate the left-hand side at `q`; zero iff `q` lies on the line.
    #[inline]
    pub fn eval(&self, q: Vector2<f64>) -> f64 {
        self.m * q.x + self.n * q.y + self.p
    }
}

/// Directed segment from `start` to `end`.
///
/// Invariants (by caller contract, not enforced):
/// - Polygon edges have `start != end`; a zero-length segment has no
///   meaningful direction or line. The only zero-length segments produced
///   internally are perpendicular feet of points already on a line, which
///   are consumed for their length only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Vector2<f64>,
    pub end: Vector2<f64>,
    pub line: Line,
}

impl Segment {
    #[inline]
    pub fn new(start: Vector2<f64>, end: Vector2<f64>) -> Self {
        Self {
            start,
            end,
            line: Line::through(start, end),
        }
    }

    /// Unit-length segment from `start` at angle `direction` (radians,
    /// `[0, 2π)`). Used to carry a supporting line through a point in a
    /// prescribed direction.
    #[inline]
    pub fn from_direction(start: Vector2<f64>, direction: f64) -> Self {
        let end = start + Vector2::new(direction.cos(), direction.sin());
        Self::new(start, end)
    }

    /// Angle of `end − start` against the positive x-axis, in `[0, 2π)`.
    ///
    /// `atan2` yields `(−π, π]`; the `rem_euclid` remap folds that onto the
    /// full circle without collapsing opposite directions.
    #[inline]
    pub fn direction(&self) -> f64 {
        let d = self.end - self.start;
        let theta = d.y.atan2(d.x);
        (theta / std::f64::consts::PI).rem_euclid(2.0) * std::f64::consts::PI
    }

    /// Signed angle from `self` to `other`: difference of directions, not
    /// normalized further.
    #[inline]
    pub fn angle_to(&self, other: &Segment) -> f64 {
        other.direction() - self.direction()
    }

    /// Euclidean length.
    #[inline]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Segment from `p` to its perpendicular foot on the supporting line.
    ///
    /// Solves the 2×2 system: foot on the line, `p − foot` orthogonal to
    /// the segment direction. `None` only when the coefficient matrix is
    /// singular, which requires a degenerate segment (the determinant is
    /// `−‖end − start‖²`).
    pub fn perpendicular(&self, p: Vector2<f64>) -> Option<Segment> {
        let d = self.end - self.start;
        let a = matrix![self.line.m, self.line.n; d.x, d.y];
        let rhs = Vector2::new(-self.line.p, d.dot(&p));
        let foot = a.try_inverse()? * rhs;
        Some(Segment::new(p, foot))
    }

    /// Intersection of the two supporting lines (not the finite extents).
    ///
    /// Returns `None` when the directions are parallel or anti-parallel
    /// within [`EPS_PARALLEL`]. The direction difference is reduced mod π,
    /// which also catches the 0-vs-2π wrap that a plain two-branch
    /// `|Δ| < ε || ||Δ|−π| < ε` test misses.
    pub fn intersection(&self, other: &Segment) -> Option<Vector2<f64>> {
        let delta = (self.direction() - other.direction()).rem_euclid(std::f64::consts::PI);
        if delta < EPS_PARALLEL || std::f64::consts::PI - delta < EPS_PARALLEL {
            return None;
        }
        let a = matrix![self.line.m, self.line.n; other.line.m, other.line.n];
        let rhs = Vector2::new(-self.line.p, -other.line.p);
        Some(a.try_inverse()? * rhs)
    }
}
