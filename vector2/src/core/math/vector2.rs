use crate::core::traits::{FuzzyEq, Real};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Generic 2D vector type.
///
/// Plain value type: copying yields an independent vector and the only mutating operation is
/// [Vector2::normalize]. Components default to `f32`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vector2<T = f32> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2<T> {
    /// Create a new vector with `x` and `y` components.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Vector2 { x, y }
    }
}

impl<T> Vector2<T>
where
    T: Real,
{
    /// Create a zero vector (x = 0, y = 0).
    #[inline]
    pub fn zero() -> Self {
        Vector2::new(T::zero(), T::zero())
    }

    /// Euclidean length of the vector, `sqrt(x * x + y * y)`.
    ///
    /// The sum of squares and square root are computed in `f64` then narrowed back to `T`. The
    /// zero vector returns exactly zero without taking a square root.
    ///
    /// # Examples
    /// ```
    /// # use vector2::core::math::*;
    /// let v: Vector2 = Vector2::new(-3.0, 4.0);
    /// assert_eq!(v.magnitude(), 5.0);
    /// assert_eq!(Vector2::<f32>::zero().magnitude(), 0.0);
    /// ```
    pub fn magnitude(&self) -> T {
        if self.x == T::zero() && self.y == T::zero() {
            return T::zero();
        }

        let x = self.x.widen();
        let y = self.y.widen();
        T::narrow((x * x + y * y).sqrt())
    }

    /// Scale the vector in place to unit length, keeping its direction.
    ///
    /// Returns `self` so calls can be chained. The zero vector has no direction and is left
    /// unchanged.
    ///
    /// # Notes
    /// Finite components whose magnitude overflows `T` divide by infinity and collapse to the
    /// zero vector. Components near the subnormal floor lose precision in the magnitude, so the
    /// result may not be unit length.
    ///
    /// # Examples
    /// ```
    /// # use vector2::core::math::*;
    /// let mut v: Vector2 = Vector2::new(-3.0, 0.0);
    /// assert_eq!(*v.normalize(), Vector2::new(-1.0, 0.0));
    ///
    /// let mut zero: Vector2 = Vector2::zero();
    /// assert_eq!(zero.normalize().magnitude(), 0.0);
    /// ```
    pub fn normalize(&mut self) -> &mut Self {
        let magnitude = self.magnitude();
        if magnitude == T::zero() {
            return self;
        }

        self.x = self.x / magnitude;
        self.y = self.y / magnitude;
        self
    }
}

impl<T> FuzzyEq<T> for Vector2<T>
where
    T: Real,
{
    /// Component-wise fuzzy equality.
    #[inline]
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }

    #[inline]
    fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_zero_eps(fuzzy_epsilon) && self.y.fuzzy_eq_zero_eps(fuzzy_epsilon)
    }
}

impl<T> fmt::Display for Vector2<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T> From<(T, T)> for Vector2<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Vector2::new(x, y)
    }
}

impl<T> From<[T; 2]> for Vector2<T>
where
    T: Copy,
{
    #[inline]
    fn from(v: [T; 2]) -> Self {
        Vector2::new(v[0], v[1])
    }
}

impl<T> From<Vector2<T>> for (T, T) {
    #[inline]
    fn from(v: Vector2<T>) -> Self {
        (v.x, v.y)
    }
}
