//! Planar geometry for the MEP pipeline.
//!
//! Purpose
//! - Provide the directed-segment primitive with its supporting line,
//!   direction angle, perpendicular projection, and two-line intersection.
//! - Keep the API minimal and numerically explicit: every fallible
//!   operation returns `Option`, never a sentinel coordinate.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>`; equality is exact component
//!   equality unless a tolerance is stated.
//! - Segment directions live in `[0, 2π)`; the parallel test in
//!   `Segment::intersection` uses an absolute angular tolerance of `1e-7`.

pub mod rand;
mod types;
mod util;

pub use types::{Line, Segment, EPS_PARALLEL};
pub use util::{convex_hull, polygon_area};

#[cfg(test)]
mod tests;
