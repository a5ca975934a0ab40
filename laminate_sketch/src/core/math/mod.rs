//! Core/common math functions for working with 2D points, segments, and
//! intersections.
mod base_math;
mod line_line_intersect;
mod seg_seg_intersect;
mod vector2;

pub use base_math::*;
pub use line_line_intersect::line_line_intr;
pub use seg_seg_intersect::{seg_seg_intr, seg_seg_intr_tol};
pub use vector2::{vec2, Vector2};
