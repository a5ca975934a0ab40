use crate::core::{math::seg_seg_intr, traits::Real};
use crate::polyline::Polyline;

/// Remove all self intersections from `polyline`.
///
/// Repeatedly finds the lexicographically first pair of intersecting
/// non-adjacent segments `(i, j)` and splices the polyline as
/// `P[0..=i] ++ intersection ++ P[j+1..]`, discarding the loop between them.
/// Stops when no intersecting pair remains or fewer than four vertexes are
/// left. The fixed search order makes the result deterministic.
pub fn remove_self_intersections<T>(polyline: &Polyline<T>) -> Polyline<T>
where
    T: Real,
{
    let mut current = polyline.clone();

    while current.len() > 3 {
        match remove_one_intersection(&current) {
            Some(spliced) => current = spliced,
            None => break,
        }
    }

    current
}

/// Find the first intersecting pair of non-adjacent segments and return the
/// spliced polyline, or `None` if the polyline has no self intersection.
fn remove_one_intersection<T>(polyline: &Polyline<T>) -> Option<Polyline<T>>
where
    T: Real,
{
    let n = polyline.len();
    if n < 4 {
        return None;
    }

    for i in 0..n - 1 {
        for j in i + 2..n - 1 {
            let intersect = seg_seg_intr(polyline[i], polyline[i + 1], polyline[j], polyline[j + 1]);
            let Some(intersect) = intersect else {
                continue;
            };

            let mut result = Polyline::with_capacity(i + 2 + (n - j - 1));
            for k in 0..=i {
                result.add_vertex(polyline[k]);
            }
            result.add_vertex(intersect);
            for k in j + 1..n {
                result.add_vertex(polyline[k]);
            }

            return Some(result);
        }
    }

    None
}
