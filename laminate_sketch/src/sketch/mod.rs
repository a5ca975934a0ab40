//! Raw (pre-assembly) sketch types: decoded polylines tagged with a fiber
//! orientation class, plus the normalization passes applied before the
//! laminate is assembled.
use crate::core::{
    math::Vector2,
    traits::{Real, Tolerance},
};
use crate::polyline::Polyline;

/// Fiber orientation class of a ply, carried through from the source color
/// encoding of the drawing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// 0 degrees.
    #[default]
    Zero,
    /// 90 degrees.
    Perpendicular,
    /// Any other angle (+-45 and the rest).
    Other,
}

impl Orientation {
    /// Decode from a source drawing color value.
    ///
    /// Contract with the external drawing codec; the constants must be
    /// preserved bit-exactly.
    pub fn from_color(color: u32) -> Self {
        match color {
            5 => Orientation::Zero,
            2 => Orientation::Perpendicular,
            _ => Orientation::Other,
        }
    }

    /// Encode to the drawing color value used on export.
    ///
    /// Contract with the external drawing codec; the constants must be
    /// preserved bit-exactly. Note the export palette differs from the
    /// ingest palette for [Orientation::Zero].
    pub fn to_color(self) -> u32 {
        match self {
            Orientation::Zero => 4,
            Orientation::Perpendicular => 2,
            Orientation::Other => 1,
        }
    }
}

/// A decoded input polyline tagged with its orientation class.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawPolyline<T = f64> {
    pub polyline: Polyline<T>,
    pub orientation: Orientation,
}

impl<T> RawPolyline<T>
where
    T: Real,
{
    pub fn new(polyline: Polyline<T>, orientation: Orientation) -> Self {
        RawPolyline {
            polyline,
            orientation,
        }
    }
}

/// Tolerance applied when simplifying freshly decoded polylines: drawing
/// exports carry densely sampled near-collinear runs, so the ingest pass is
/// far coarser than the geometric defaults.
pub fn ingest_tolerance<T>() -> Tolerance<T>
where
    T: Real,
{
    Tolerance::new(T::from_f64(1e-3), T::fuzzy_rel_epsilon())
}

/// Unordered collection of [RawPolyline] as decoded from a drawing, before
/// laminate assembly.
///
/// Elements can be removed by index with the remaining order preserved,
/// which the assembler relies on when peeling topmost plies.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawSketch<T = f64> {
    entries: Vec<RawPolyline<T>>,
}

impl<T> RawSketch<T>
where
    T: Real,
{
    /// Create a new empty [RawSketch].
    pub fn new() -> Self {
        RawSketch {
            entries: Vec::new(),
        }
    }

    /// Construct a new empty [RawSketch] with some reserved capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        RawSketch {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Number of polylines in the sketch.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the sketch has no polylines.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a polyline.
    pub fn push(&mut self, raw: RawPolyline<T>) {
        self.entries.push(raw);
    }

    /// Remove and return the polyline at `index`, preserving the order of
    /// the remaining elements.
    pub fn remove(&mut self, index: usize) -> RawPolyline<T> {
        self.entries.remove(index)
    }

    /// All entries as a slice.
    pub fn entries(&self) -> &[RawPolyline<T>] {
        &self.entries
    }

    /// Iterate over the entries.
    pub fn iter(&self) -> impl Iterator<Item = &RawPolyline<T>> {
        self.entries.iter()
    }

    /// Axis aligned bounding extents `(min, max)` across every polyline,
    /// `None` if the sketch has no points.
    pub fn bounds(&self) -> Option<(Vector2<T>, Vector2<T>)> {
        let mut result: Option<(Vector2<T>, Vector2<T>)> = None;
        for entry in self.iter() {
            let Some((lo, hi)) = entry.polyline.bounds() else {
                continue;
            };
            result = Some(match result {
                None => (lo, hi),
                Some((min, max)) => (
                    Vector2::new(
                        num_traits::real::Real::min(min.x, lo.x),
                        num_traits::real::Real::min(min.y, lo.y),
                    ),
                    Vector2::new(
                        num_traits::real::Real::max(max.x, hi.x),
                        num_traits::real::Real::max(max.y, hi.y),
                    ),
                ),
            });
        }

        result
    }

    /// Apply collinear-vertex simplification to every polyline using the
    /// tolerance given.
    pub fn simplify(&mut self, tol: Tolerance<T>) {
        for entry in self.entries.iter_mut() {
            entry.polyline = entry.polyline.simplify(tol);
        }
    }

    /// Translate the whole sketch so its minimum x and y become zero.
    pub fn translate_to_origin(&mut self) {
        let Some((min, _)) = self.bounds() else {
            return;
        };
        for entry in self.entries.iter_mut() {
            entry.polyline.translate(-min);
        }
    }

    /// Reverse every polyline whose first vertex lies right of its last, so
    /// all plies traverse left to right.
    pub fn orient_left_to_right(&mut self) {
        for entry in self.entries.iter_mut() {
            let (Some(first), Some(last)) = (entry.polyline.first(), entry.polyline.last()) else {
                continue;
            };
            if first.x > last.x {
                entry.polyline.reverse();
            }
        }
    }

    /// Full normalization applied before assembly: ingest simplification,
    /// translation to the origin, and left-to-right orientation.
    pub fn normalize(&mut self) {
        self.simplify(ingest_tolerance());
        self.translate_to_origin();
        self.orient_left_to_right();
    }
}

impl<T> FromIterator<RawPolyline<T>> for RawSketch<T> {
    fn from_iter<I: IntoIterator<Item = RawPolyline<T>>>(iter: I) -> Self {
        RawSketch {
            entries: iter.into_iter().collect(),
        }
    }
}
