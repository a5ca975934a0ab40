use super::Vector2;
use crate::core::traits::Real;

/// Finds the intersect between two infinite lines.
///
/// Lines are defined by the point pairs `p1 -> p2` and `q1 -> q2`. Returns
/// `None` when the lines are parallel (fuzzy zero determinant), including the
/// collinear case.
pub fn line_line_intr<T>(
    p1: Vector2<T>,
    p2: Vector2<T>,
    q1: Vector2<T>,
    q2: Vector2<T>,
) -> Option<Vector2<T>>
where
    T: Real,
{
    // Lines in parametric form, solved with perpendicular products
    // http://geomalgorithms.com/a05-_intersect-1.html
    let v = p2 - p1;
    let u = q2 - q1;

    let det = v.perp_dot(u);
    if det.fuzzy_eq_zero() {
        return None;
    }

    let w = q1 - p1;
    let t = w.perp_dot(u) / det;

    Some(p1 + v.scale(t))
}
