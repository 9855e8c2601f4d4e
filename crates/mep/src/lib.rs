//! Minimum-area enclosing parallelogram (MEP) of convex polygons.
//!
//! Purpose
//! - Given a convex polygon (ordered vertex cycle, consistent winding),
//!   compute the smallest-area parallelogram whose boundary contains it.
//! - Consumed by shape-approximation pipelines that reduce detected
//!   outlines to convex hulls and want a tight four-sided bound.
//!
//! Pipeline (strictly upward data flow)
//! - `geom`: planar primitives (directed segments, supporting lines,
//!   perpendicular feet, two-line intersection).
//! - `antipodal`: per edge, the vertex farthest from its supporting line.
//! - `parallelogram`: circumscribing candidate from two antipodal pairs.
//! - `search`: exhaustive pairwise minimum over all candidates.
//!
//! The search is O(n²) by design. A rotating-calipers O(n) variant exists
//! but inputs here are small convex polygons, so the exhaustive scan stays.
//!
//! All geometric fallibility is `Option`-based; only the per-polygon entry
//! points surface a structured `MepError`.

pub mod antipodal;
pub mod geom;
pub mod parallelogram;
pub mod search;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use antipodal::{antipodal_pairs, EdgeVertexPair};
pub use geom::{polygon_area, Line, Segment};
pub use parallelogram::Parallelogram;
pub use search::{enclose, enclose_all, minimum_parallelogram, Mep, MepError};

// Convenience re-export so callers share the crate's point/vector type.
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::antipodal::{antipodal_pairs, EdgeVertexPair};
    pub use crate::geom::rand::{draw_convex_polygon, RadialCfg, ReplayToken, VertexCount};
    pub use crate::geom::{polygon_area, Line, Segment};
    pub use crate::parallelogram::Parallelogram;
    pub use crate::search::{enclose, enclose_all, minimum_parallelogram, Mep, MepError};
    pub use nalgebra::Vector2 as Vec2;
}
