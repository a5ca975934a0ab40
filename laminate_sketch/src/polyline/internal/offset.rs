use crate::core::{
    math::{line_line_intr, midpoint, perpendicular_point},
    traits::Real,
};
use crate::polyline::Polyline;

/// Offset `polyline` perpendicular to its direction of travel by the signed
/// `offset` distance (positive is to the left of the traversal direction).
///
/// The first and last vertexes are shifted along the normal of their only
/// adjacent segment. Each interior vertex becomes the intersection of its two
/// adjacent segments translated along their left normals; when those are
/// parallel the midpoint of the two nearest shifted endpoints is used, so the
/// result always has the same vertex count as the input.
///
/// Returns an empty polyline for degenerate input: fewer than two vertexes,
/// or coincident adjacent vertexes.
pub fn perpendicular_offset<T>(polyline: &Polyline<T>, offset: T) -> Polyline<T>
where
    T: Real,
{
    let vertex_count = polyline.len();
    if vertex_count < 2 {
        return Polyline::new();
    }

    let mut result = Polyline::with_capacity(vertex_count);

    for i in 0..vertex_count {
        if i == 0 || i == vertex_count - 1 {
            let current = polyline[i];
            let neighbor = if i == 0 {
                polyline[i + 1]
            } else {
                polyline[i - 1]
            };

            if current.fuzzy_eq(neighbor) {
                return Polyline::new();
            }

            let d = if i == 0 { offset } else { -offset };
            result.add_vertex(perpendicular_point(current, neighbor, d));
        } else {
            let prev = polyline[i - 1];
            let curr = polyline[i];
            let next = polyline[i + 1];

            if curr.fuzzy_eq(next) {
                return Polyline::new();
            }

            // shifted previous segment (prev -> curr), reusing the vertex
            // already emitted for prev
            let p_prev1 = result[i - 1];
            let p_prev2 = perpendicular_point(curr, prev, -offset);

            // shifted next segment (curr -> next)
            let p_next1 = perpendicular_point(curr, next, offset);
            let p_next2 = perpendicular_point(next, curr, -offset);

            match line_line_intr(p_prev1, p_prev2, p_next1, p_next2) {
                Some(intersect) => result.add_vertex(intersect),
                // segments are parallel, fall back to the midpoint of the
                // shifted endpoints at the joint
                None => result.add_vertex(midpoint(p_prev1, p_next1)),
            }
        }
    }

    result
}
