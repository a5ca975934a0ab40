/// Combined absolute/relative tolerance used by every floating point
/// comparison in the library.
///
/// Two values compare equal when `|a - b| <= max(abs, rel * max(|a|, |b|))`.
/// The absolute part dominates near zero, the relative part for large
/// magnitudes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerance<T = f64> {
    pub abs: T,
    pub rel: T,
}

impl<T> Tolerance<T> {
    #[inline]
    pub fn new(abs: T, rel: T) -> Self {
        Tolerance { abs, rel }
    }
}

impl<T> Tolerance<T>
where
    T: FuzzyEq,
{
    /// Coarser tolerance used for point coincidence and collinearity tests,
    /// where accumulated construction error exceeds the scalar defaults.
    #[inline]
    pub fn point() -> Self {
        Tolerance::new(T::coincident_abs_epsilon(), T::coincident_rel_epsilon())
    }
}

impl<T> Default for Tolerance<T>
where
    T: FuzzyEq,
{
    #[inline]
    fn default() -> Self {
        Tolerance::new(T::fuzzy_abs_epsilon(), T::fuzzy_rel_epsilon())
    }
}

/// Trait for fuzzy equality comparisons with floating point numbers.
///
/// Exact equality is rarely achievable after geometric constructions, so all
/// scalar comparisons go through a [Tolerance]. The `_tol` methods take an
/// explicit tolerance; the plain methods use [Tolerance::default].
///
/// # Examples
///
/// ```
/// # use laminate_sketch::core::traits::*;
/// let a = 0.1 + 0.2;
/// let b = 0.3;
///
/// // Direct comparison fails due to floating point rounding
/// assert_ne!(a, b);
///
/// // Fuzzy comparison succeeds
/// assert!(a.fuzzy_eq(b));
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Default absolute epsilon for scalar comparisons.
    fn fuzzy_abs_epsilon() -> Self;

    /// Default relative epsilon for scalar comparisons.
    fn fuzzy_rel_epsilon() -> Self;

    /// Absolute epsilon for point coincidence and collinearity tests.
    fn coincident_abs_epsilon() -> Self;

    /// Relative epsilon for point coincidence and collinearity tests.
    fn coincident_rel_epsilon() -> Self;

    /// Returns `true` if this value is approximately equal to the other one,
    /// using the tolerance given.
    fn fuzzy_eq_tol(&self, other: Self, tol: Tolerance<Self>) -> bool;

    /// Returns `true` if this value is approximately equal to the other one,
    /// using the default tolerance.
    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_tol(other, Tolerance::default())
    }

    /// Returns `true` if this value is approximately equal to zero, using the
    /// tolerance given.
    fn fuzzy_eq_zero_tol(&self, tol: Tolerance<Self>) -> bool;

    /// Returns `true` if this value is approximately equal to zero, using the
    /// default tolerance.
    #[inline]
    fn fuzzy_eq_zero(&self) -> bool {
        self.fuzzy_eq_zero_tol(Tolerance::default())
    }
}

macro_rules! impl_fuzzy_eq {
    ($ty:ty, $abs:expr, $rel:expr, $pt_abs:expr, $pt_rel:expr) => {
        impl FuzzyEq for $ty {
            #[inline]
            fn fuzzy_abs_epsilon() -> Self {
                $abs
            }
            #[inline]
            fn fuzzy_rel_epsilon() -> Self {
                $rel
            }
            #[inline]
            fn coincident_abs_epsilon() -> Self {
                $pt_abs
            }
            #[inline]
            fn coincident_rel_epsilon() -> Self {
                $pt_rel
            }
            #[inline]
            fn fuzzy_eq_tol(&self, other: Self, tol: Tolerance<Self>) -> bool {
                (*self - other).abs() <= tol.abs.max(tol.rel * self.abs().max(other.abs()))
            }
            #[inline]
            fn fuzzy_eq_zero_tol(&self, tol: Tolerance<Self>) -> bool {
                self.abs() <= tol.abs.max(tol.rel * self.abs())
            }
        }
    };
}

impl_fuzzy_eq!(f32, 1.0e-12, 1.0e-9, 1.0e-7, 1.0e-8);
impl_fuzzy_eq!(f64, 1.0e-12, 1.0e-9, 1.0e-7, 1.0e-8);
