use crate::core::{
    math::is_collinear_tol,
    traits::{Real, Tolerance},
};
use crate::polyline::Polyline;

/// Remove every interior vertex whose removal does not change the polyline
/// shape under the tolerance given (the signed triangle area with its kept
/// neighbors is fuzzy zero).
///
/// The first and last vertexes are kept unconditionally. Coincident
/// consecutive vertexes form zero-area triangles, so duplicates collapse as a
/// side effect. The operation is idempotent.
pub fn remove_collinear<T>(polyline: &Polyline<T>, tol: Tolerance<T>) -> Polyline<T>
where
    T: Real,
{
    if polyline.is_empty() {
        return Polyline::new();
    }

    let mut result = Polyline::with_capacity(polyline.len());
    result.add_vertex(polyline[0]);

    for i in 1..polyline.len() {
        let curr = polyline[i];
        if result.len() >= 2 {
            let kept_prev = result[result.len() - 1];
            let kept_prev_prev = result[result.len() - 2];
            if is_collinear_tol(kept_prev_prev, kept_prev, curr, tol) {
                result.remove_last();
            }
        }
        result.add_vertex(curr);
    }

    result
}
