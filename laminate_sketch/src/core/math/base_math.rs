use super::Vector2;
use crate::core::traits::{Real, Tolerance};

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use laminate_sketch::core::math::*;
/// let (min_val, max_val) = min_max(8, 4);
/// assert_eq!(min_val, 4);
/// assert_eq!(max_val, 8);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

/// Distance squared between the points `p0` and `p1`.
#[inline]
pub fn dist_squared<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    let d = p0 - p1;
    d.dot(d)
}

/// Distance between the points `p0` and `p1`.
#[inline]
pub fn dist<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    dist_squared(p0, p1).sqrt()
}

/// Midpoint of a line segment defined by `p0` to `p1`.
#[inline]
pub fn midpoint<T>(p0: Vector2<T>, p1: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    Vector2::new((p0.x + p1.x) / T::two(), (p0.y + p1.y) / T::two())
}

/// Returns `start` shifted perpendicular to the direction `start -> end` by
/// the signed distance `offset` (positive is to the left of the direction).
///
/// Returns `start` unchanged when the direction is degenerate (zero length).
#[inline]
pub fn perpendicular_point<T>(start: Vector2<T>, end: Vector2<T>, offset: T) -> Vector2<T>
where
    T: Real,
{
    let dir = end - start;
    let len = dir.length();
    if len.fuzzy_eq_zero() {
        return start;
    }

    start + dir.perp().scale(offset / len)
}

/// Returns the endpoint of the angle bisector at `b` for the corner
/// `(a, b, c)`, extended to `length` from `b`.
///
/// A negative `length` extends in the opposite direction. Returns `b`
/// unchanged when either arm or the bisector direction is degenerate (arms
/// opposite and equal).
pub fn bisector_point<T>(a: Vector2<T>, b: Vector2<T>, c: Vector2<T>, length: T) -> Vector2<T>
where
    T: Real,
{
    let ba = a - b;
    let bc = c - b;

    let len_ba = ba.length();
    let len_bc = bc.length();
    if len_ba.fuzzy_eq_zero() || len_bc.fuzzy_eq_zero() {
        return b;
    }

    let dir = ba.scale(T::one() / len_ba) + bc.scale(T::one() / len_bc);
    let dir_len = dir.length();
    if dir_len == T::zero() {
        return b;
    }

    b + dir.scale(length / dir_len)
}

/// Returns the point `distance` beyond `end` along the ray `start -> end`.
///
/// Returns `end` unchanged when the points coincide exactly.
#[inline]
pub fn extend_point<T>(start: Vector2<T>, end: Vector2<T>, distance: T) -> Vector2<T>
where
    T: Real,
{
    let dir = end - start;
    let len = dir.length();
    if len == T::zero() {
        return end;
    }

    end + dir.scale(distance / len)
}

/// Returns the point at `distance` from `start` along the ray toward
/// `direction`.
///
/// Returns `start` unchanged when the points coincide exactly.
#[inline]
pub fn point_on_ray<T>(start: Vector2<T>, direction: Vector2<T>, distance: T) -> Vector2<T>
where
    T: Real,
{
    let dir = direction - start;
    let len = dir.length();
    if len == T::zero() {
        return start;
    }

    start + dir.scale(distance / len)
}

/// Returns true if the points `a`, `b`, and `c` are collinear under the
/// tolerance given (twice the signed triangle area is fuzzy zero).
#[inline]
pub fn is_collinear_tol<T>(a: Vector2<T>, b: Vector2<T>, c: Vector2<T>, tol: Tolerance<T>) -> bool
where
    T: Real,
{
    (b - a).perp_dot(c - a).fuzzy_eq_zero_tol(tol)
}

/// Same as [is_collinear_tol] using [Tolerance::point].
#[inline]
pub fn is_collinear<T>(a: Vector2<T>, b: Vector2<T>, c: Vector2<T>) -> bool
where
    T: Real,
{
    is_collinear_tol(a, b, c, Tolerance::point())
}

/// Returns true if the segment directions `p1 -> p2` and `q1 -> q2` are
/// parallel under the tolerance given.
#[inline]
pub fn is_parallel_tol<T>(
    p1: Vector2<T>,
    p2: Vector2<T>,
    q1: Vector2<T>,
    q2: Vector2<T>,
    tol: Tolerance<T>,
) -> bool
where
    T: Real,
{
    (p2 - p1).perp_dot(q2 - q1).fuzzy_eq_zero_tol(tol)
}

/// Same as [is_parallel_tol] using [Tolerance::point].
#[inline]
pub fn is_parallel<T>(p1: Vector2<T>, p2: Vector2<T>, q1: Vector2<T>, q2: Vector2<T>) -> bool
where
    T: Real,
{
    is_parallel_tol(p1, p2, q1, q2, Tolerance::point())
}
