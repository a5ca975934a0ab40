use super::internal::{offset, self_intersect, simplify};
use crate::core::{
    math::{seg_seg_intr, Vector2},
    traits::{Real, Tolerance},
};
use std::ops::{Index, IndexMut};

/// Open polyline represented by an ordered sequence of 2D points connected by
/// straight segments. There is no implicit closing segment; see
/// [Polygon](crate::polyline::Polygon) for closed chains.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polyline<T = f64> {
    vertex_data: Vec<Vector2<T>>,
}

impl<T> Default for Polyline<T>
where
    T: Real,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Polyline<T>
where
    T: Real,
{
    /// Create a new empty [Polyline].
    pub fn new() -> Self {
        Polyline {
            vertex_data: Vec::new(),
        }
    }

    /// Construct a new empty [Polyline] with some reserved capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Polyline {
            vertex_data: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of vertexes currently in the polyline.
    pub fn len(&self) -> usize {
        self.vertex_data.len()
    }

    /// Returns true if `self.len() == 0`.
    pub fn is_empty(&self) -> bool {
        self.vertex_data.is_empty()
    }

    /// Add a vertex to the polyline by giving its `x` and `y` values.
    pub fn add(&mut self, x: T, y: T) {
        self.vertex_data.push(Vector2::new(x, y));
    }

    /// Add a vertex to the polyline.
    pub fn add_vertex(&mut self, vertex: Vector2<T>) {
        self.vertex_data.push(vertex);
    }

    /// Remove vertex at index.
    pub fn remove(&mut self, index: usize) -> Vector2<T> {
        self.vertex_data.remove(index)
    }

    /// Remove last vertex.
    pub fn remove_last(&mut self) -> Vector2<T> {
        self.remove(self.len() - 1)
    }

    /// Clear all vertexes.
    pub fn clear(&mut self) {
        self.vertex_data.clear();
    }

    /// First vertex, if any.
    pub fn first(&self) -> Option<Vector2<T>> {
        self.vertex_data.first().copied()
    }

    /// Last vertex, if any.
    pub fn last(&self) -> Option<Vector2<T>> {
        self.vertex_data.last().copied()
    }

    /// All vertexes as a slice.
    pub fn vertexes(&self) -> &[Vector2<T>] {
        &self.vertex_data
    }

    /// Iterate over the vertexes.
    pub fn iter(&self) -> impl Iterator<Item = &Vector2<T>> {
        self.vertex_data.iter()
    }

    /// Mutably iterate over the vertexes.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Vector2<T>> {
        self.vertex_data.iter_mut()
    }

    /// Iterate over the segments (consecutive vertex pairs).
    pub fn iter_segments(&self) -> impl Iterator<Item = (Vector2<T>, Vector2<T>)> + '_ {
        self.vertex_data.windows(2).map(|w| (w[0], w[1]))
    }

    /// Reverse the vertex order in place.
    pub fn reverse(&mut self) {
        self.vertex_data.reverse();
    }

    /// Translate every vertex by `offset` in place.
    pub fn translate(&mut self, offset: Vector2<T>) {
        for v in self.vertex_data.iter_mut() {
            *v = *v + offset;
        }
    }

    /// Axis aligned bounding extents `(min, max)` of the vertexes, `None` if
    /// the polyline is empty.
    pub fn bounds(&self) -> Option<(Vector2<T>, Vector2<T>)> {
        let first = self.first()?;
        let mut min = first;
        let mut max = first;
        for v in self.iter() {
            if v.x < min.x {
                min.x = v.x;
            } else if v.x > max.x {
                max.x = v.x;
            }

            if v.y < min.y {
                min.y = v.y;
            } else if v.y > max.y {
                max.y = v.y;
            }
        }

        Some((min, max))
    }

    /// Pointwise fuzzy equality with another polyline using the tolerance
    /// given (false when lengths differ).
    pub fn fuzzy_eq_tol(&self, other: &Self, tol: Tolerance<T>) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.fuzzy_eq_tol(*b, tol))
    }

    /// Same as [Polyline::fuzzy_eq_tol] using [Tolerance::point].
    pub fn fuzzy_eq(&self, other: &Self) -> bool {
        self.fuzzy_eq_tol(other, Tolerance::point())
    }

    /// Offset the polyline perpendicular to its direction of travel by the
    /// signed distance given (positive is to the left).
    ///
    /// Returns an empty polyline when the input has fewer than two vertexes
    /// or contains coincident adjacent vertexes (degenerate geometry); the
    /// result otherwise has the same vertex count as the input.
    pub fn offset(&self, distance: T) -> Polyline<T> {
        offset::perpendicular_offset(self, distance)
    }

    /// Remove collinear interior vertexes under the tolerance given, keeping
    /// the first and last vertex unconditionally.
    pub fn simplify(&self, tol: Tolerance<T>) -> Polyline<T> {
        simplify::remove_collinear(self, tol)
    }

    /// Repeatedly splice out the region between the first intersecting pair
    /// of non-adjacent segments until none remain.
    pub fn remove_self_intersections(&self) -> Polyline<T> {
        self_intersect::remove_self_intersections(self)
    }

    /// Returns true if the segment `begin -> end` intersects any segment of
    /// this polyline.
    pub fn intersects_segment(&self, begin: Vector2<T>, end: Vector2<T>) -> bool {
        self.iter_segments()
            .any(|(a, b)| seg_seg_intr(begin, end, a, b).is_some())
    }
}

impl<T> Index<usize> for Polyline<T> {
    type Output = Vector2<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.vertex_data[index]
    }
}

impl<T> IndexMut<usize> for Polyline<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.vertex_data[index]
    }
}

impl<T> From<Vec<Vector2<T>>> for Polyline<T> {
    fn from(vertex_data: Vec<Vector2<T>>) -> Self {
        Polyline { vertex_data }
    }
}

impl<T> FromIterator<Vector2<T>> for Polyline<T> {
    fn from_iter<I: IntoIterator<Item = Vector2<T>>>(iter: I) -> Self {
        Polyline {
            vertex_data: iter.into_iter().collect(),
        }
    }
}
