//! The laminate data model (layers of plies of cross-linked nodes) and the
//! [LaminateSketch] session type that owns assembly and optimization.
use crate::core::traits::Real;
use crate::polyline::Polyline;
use crate::sketch::{RawPolyline, RawSketch};

mod data;
pub mod internal;

pub use data::{Layer, LaminateData, Node, NodePos, Ply};

/// Why a raw sketch could not be assembled into a laminate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// The raw sketch contained no polylines.
    #[error("raw sketch contains no polylines")]
    EmptySketch,
    /// No polyline of the remaining sketch classified as topmost: the input
    /// stacking is cyclic, overlapping, or otherwise unsatisfiable.
    #[error("no topmost ply found with {remaining} polylines remaining")]
    NoTopmostPly { remaining: usize },
}

/// A session owning one assembled laminate and its optimized snapshot.
///
/// [load](LaminateSketch::load) normalizes and assembles a raw sketch,
/// preserves the assembled original, and computes an optimized snapshot.
/// Re-optimization always starts over from the preserved original, so every
/// [optimize](LaminateSketch::optimize) call yields a fresh independent
/// result; [scale](LaminateSketch::scale) only touches the snapshot.
#[derive(Debug, Clone, Default)]
pub struct LaminateSketch<T = f64> {
    original: LaminateData<T>,
    optimized: LaminateData<T>,
    width: T,
    height: T,
    min_ply_distance: T,
}

impl<T> LaminateSketch<T>
where
    T: Real,
{
    /// Default vertical ply spacing goal passed to the optimizer on load.
    pub const DEFAULT_OFFSET: f64 = 1.0;
    /// Default maximum horizontal column gap passed to the optimizer on
    /// load, in domain units.
    pub const DEFAULT_SEG_MAX: f64 = 20.0;

    pub fn new() -> Self {
        LaminateSketch {
            original: LaminateData::new(),
            optimized: LaminateData::new(),
            width: T::zero(),
            height: T::zero(),
            min_ply_distance: T::zero(),
        }
    }

    /// Consume `raw`, normalize it (ingest simplification, translation to
    /// the origin, left-to-right orientation), assemble the laminate, record
    /// the baseline minimum column distance, and compute the default
    /// optimized snapshot.
    ///
    /// # Errors
    ///
    /// Returns [LoadError::EmptySketch] for an empty input and
    /// [LoadError::NoTopmostPly] when the assembler cannot classify a
    /// topmost ply while polylines remain. The session is cleared on error.
    pub fn load(&mut self, mut raw: RawSketch<T>) -> Result<(), LoadError> {
        raw.normalize();

        match internal::assemble::assemble(raw) {
            Ok(data) => {
                self.original = data;
                self.min_ply_distance = internal::optimize::min_column_distance(&self.original);
                self.optimize(
                    T::from_f64(Self::DEFAULT_OFFSET),
                    T::from_f64(Self::DEFAULT_SEG_MAX),
                );
                Ok(())
            }
            Err(e) => {
                *self = Self::new();
                Err(e)
            }
        }
    }

    /// Recompute the optimized snapshot from the preserved original:
    /// compress horizontal column gaps above `seg_max`, then rescale so the
    /// minimum vertical ply spacing becomes `offset_goal`. Updates the
    /// width/height reported by the session.
    ///
    /// No-op before a successful [load](LaminateSketch::load).
    pub fn optimize(&mut self, offset_goal: T, seg_max: T) {
        if self.original.is_empty() {
            return;
        }

        let mut snapshot = self.original.clone();

        // a laminate without any vertical link has no spacing to normalize
        let factor = if self.min_ply_distance > T::zero()
            && self.min_ply_distance < <T as Real>::max_value()
        {
            offset_goal / self.min_ply_distance
        } else {
            T::one()
        };

        internal::optimize::compress(&mut snapshot, seg_max / factor);
        internal::optimize::scale(&mut snapshot, factor);

        let (width, height) = match internal::optimize::bounding_box(&snapshot) {
            Some((min, max)) => (max.x - min.x, max.y - min.y),
            None => (T::zero(), T::zero()),
        };
        self.width = width;
        self.height = height;
        self.optimized = snapshot;
    }

    /// Multiply every coordinate of the optimized snapshot by `factor`. The
    /// preserved original and the reported width/height are untouched.
    pub fn scale(&mut self, factor: T) {
        internal::optimize::scale(&mut self.optimized, factor);
    }

    /// Serialize the optimized snapshot back to a raw sketch: one polyline
    /// per ply in stored node order, bottom layer first, orientation tags
    /// carried through.
    pub fn raw_sketch(&self) -> RawSketch<T> {
        let mut result = RawSketch::new();
        for layer in self.optimized.layers() {
            for ply in layer.iter() {
                let polyline: Polyline<T> = ply.iter().map(|node| node.point).collect();
                result.push(RawPolyline::new(polyline, ply.orientation));
            }
        }

        result
    }

    /// Width of the optimized snapshot's bounding box.
    pub fn width(&self) -> T {
        self.width
    }

    /// Height of the optimized snapshot's bounding box.
    pub fn height(&self) -> T {
        self.height
    }

    /// Returns true if no laminate is loaded.
    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// Layers of the optimized snapshot, bottom to top.
    pub fn layers(&self) -> &[Layer<T>] {
        self.optimized.layers()
    }

    /// Layers of the preserved pre-optimization original, bottom to top.
    pub fn original_layers(&self) -> &[Layer<T>] {
        self.original.layers()
    }
}
