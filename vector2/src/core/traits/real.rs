use num_traits::Float;
use std::fmt::{Debug, Display};

/// Floating point type usable as a vector component.
///
/// Intermediate results (such as the sum of squares under a square root) are computed in `f64`
/// and narrowed back with [Real::narrow], so `f32` components get the precision of a double
/// for the computation while still storing single precision values.
pub trait Real: Float + Default + Debug + Display {
    /// Default epsilon used for fuzzy comparisons.
    fn fuzzy_epsilon() -> Self;

    /// Promote to `f64` for intermediate computation.
    fn widen(self) -> f64;

    /// Narrow an `f64` intermediate result back to `Self`.
    ///
    /// Values outside the range of `Self` saturate to infinity.
    fn narrow(value: f64) -> Self;
}

impl Real for f32 {
    #[inline]
    fn fuzzy_epsilon() -> Self {
        1e-5
    }

    #[inline]
    fn widen(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn narrow(value: f64) -> Self {
        value as f32
    }
}

impl Real for f64 {
    #[inline]
    fn fuzzy_epsilon() -> Self {
        1e-8
    }

    #[inline]
    fn widen(self) -> f64 {
        self
    }

    #[inline]
    fn narrow(value: f64) -> Self {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widen_is_exact() {
        let x = 0.1f32;
        assert_eq!(x.widen() as f32, x);
        assert_eq!(0.1f64.widen(), 0.1f64);
    }

    #[test]
    fn narrow_rounds_to_nearest() {
        assert_eq!(f32::narrow(0.1f64), 0.1f32);
        assert_eq!(f64::narrow(0.1f64), 0.1f64);
    }

    #[test]
    fn narrow_out_of_range_saturates() {
        assert_eq!(f32::narrow(1e39), f32::INFINITY);
        assert_eq!(f32::narrow(-1e39), f32::NEG_INFINITY);
    }
}
