use super::Real;

/// Trait for fuzzy equality comparisons.
///
/// Floating point results are rarely bit-for-bit equal to the value they approximate, so
/// comparisons are done against an epsilon (defaulting to [Real::fuzzy_epsilon]).
pub trait FuzzyEq<T: Real>: Sized {
    /// Returns true if `self` and `other` differ by less than `fuzzy_epsilon`.
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool;

    /// Same as [FuzzyEq::fuzzy_eq_eps] using [Real::fuzzy_epsilon].
    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }

    /// Returns true if `self` is within `fuzzy_epsilon` of zero.
    fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: T) -> bool;

    /// Same as [FuzzyEq::fuzzy_eq_zero_eps] using [Real::fuzzy_epsilon].
    #[inline]
    fn fuzzy_eq_zero(&self) -> bool {
        self.fuzzy_eq_zero_eps(T::fuzzy_epsilon())
    }
}

impl<T> FuzzyEq<T> for T
where
    T: Real,
{
    #[inline]
    fn fuzzy_eq_eps(&self, other: T, fuzzy_epsilon: T) -> bool {
        (*self - other).abs() < fuzzy_epsilon
    }

    #[inline]
    fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: T) -> bool {
        self.abs() < fuzzy_epsilon
    }
}
