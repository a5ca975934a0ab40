//! This module has the open polyline and closed polygon types together with
//! the tolerance-aware algorithms that operate on them (perpendicular offset,
//! collinear-vertex simplification, self-intersection removal, containment).
pub mod internal;
mod pline;
mod polygon;

pub use pline::*;
pub use polygon::*;
