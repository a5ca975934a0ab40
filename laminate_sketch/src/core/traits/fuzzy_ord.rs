use super::{FuzzyEq, Tolerance};

/// Trait for fuzzy ordering comparisons with floating point numbers.
///
/// Extends [FuzzyEq] with inclusive ordering: `fuzzy_lt` reads as "less than
/// or within tolerance of", so both bounds of a parametric range check are
/// sticky toward inclusion.
///
/// # Examples
///
/// ```
/// # use laminate_sketch::core::traits::*;
/// let a = 0.1 + 0.2;
/// let b = 0.3;
///
/// // Due to floating point rounding, a is actually slightly greater than b
/// assert!(!(a <= b));
///
/// // But the fuzzy comparison considers them equal
/// assert!(a.fuzzy_lt(b));
/// ```
pub trait FuzzyOrd: FuzzyEq {
    /// Returns `true` if this value is greater than or approximately equal to
    /// the other, using the tolerance given.
    fn fuzzy_gt_tol(&self, other: Self, tol: Tolerance<Self>) -> bool;

    /// Same as [FuzzyOrd::fuzzy_gt_tol] using the default tolerance.
    #[inline]
    fn fuzzy_gt(&self, other: Self) -> bool {
        self.fuzzy_gt_tol(other, Tolerance::default())
    }

    /// Returns `true` if this value is less than or approximately equal to
    /// the other, using the tolerance given.
    fn fuzzy_lt_tol(&self, other: Self, tol: Tolerance<Self>) -> bool;

    /// Same as [FuzzyOrd::fuzzy_lt_tol] using the default tolerance.
    #[inline]
    fn fuzzy_lt(&self, other: Self) -> bool {
        self.fuzzy_lt_tol(other, Tolerance::default())
    }

    /// Test if `self` is between `min` and `max` inclusive under the
    /// tolerance given.
    ///
    /// # Examples
    ///
    /// ```
    /// # use laminate_sketch::core::traits::*;
    /// let tol = Tolerance::new(0.05, 0.0);
    /// assert!(0.99f64.fuzzy_in_range_tol(1.0, 2.0, tol));
    /// assert!(1.5f64.fuzzy_in_range(1.0, 2.0));
    /// assert!(2.0f64.fuzzy_in_range(1.0, 2.0));
    /// ```
    #[inline]
    fn fuzzy_in_range_tol(&self, min: Self, max: Self, tol: Tolerance<Self>) -> bool {
        self.fuzzy_gt_tol(min, tol) && self.fuzzy_lt_tol(max, tol)
    }

    /// Same as [FuzzyOrd::fuzzy_in_range_tol] using the default tolerance.
    #[inline]
    fn fuzzy_in_range(&self, min: Self, max: Self) -> bool {
        self.fuzzy_in_range_tol(min, max, Tolerance::default())
    }
}

macro_rules! impl_fuzzy_ord {
    ($ty:ty) => {
        impl FuzzyOrd for $ty {
            #[inline]
            fn fuzzy_gt_tol(&self, other: $ty, tol: Tolerance<$ty>) -> bool {
                *self > other || self.fuzzy_eq_tol(other, tol)
            }
            #[inline]
            fn fuzzy_lt_tol(&self, other: $ty, tol: Tolerance<$ty>) -> bool {
                *self < other || self.fuzzy_eq_tol(other, tol)
            }
        }
    };
}

impl_fuzzy_ord!(f32);
impl_fuzzy_ord!(f64);
