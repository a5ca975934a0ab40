use super::Vector2;
use crate::core::traits::{Real, Tolerance};

/// Finds the intersect between two line segments.
///
/// Segments are defined by `p1 -> p2` and `p3 -> p4`. The parametric values
/// of the intersect must both lie in `[0, 1]` under the tolerance given
/// (bounds are sticky toward inclusion so endpoint touches count). Returns
/// `None` on a fuzzy zero determinant, so parallel segments never intersect,
/// even when collinear and overlapping.
pub fn seg_seg_intr_tol<T>(
    p1: Vector2<T>,
    p2: Vector2<T>,
    p3: Vector2<T>,
    p4: Vector2<T>,
    tol: Tolerance<T>,
) -> Option<Vector2<T>>
where
    T: Real,
{
    let v = p2 - p1;
    let u = p4 - p3;

    let det = u.perp_dot(v);
    if det.fuzzy_eq_zero() {
        return None;
    }

    let w = p3 - p1;
    let t = u.perp_dot(w) / det;
    let s = v.perp_dot(w) / det;

    if t.fuzzy_in_range_tol(T::zero(), T::one(), tol)
        && s.fuzzy_in_range_tol(T::zero(), T::one(), tol)
    {
        return Some(p1 + v.scale(t));
    }

    None
}

/// Same as [seg_seg_intr_tol] using the default tolerance.
#[inline]
pub fn seg_seg_intr<T>(
    p1: Vector2<T>,
    p2: Vector2<T>,
    p3: Vector2<T>,
    p4: Vector2<T>,
) -> Option<Vector2<T>>
where
    T: Real,
{
    seg_seg_intr_tol(p1, p2, p3, p4, Tolerance::default())
}
