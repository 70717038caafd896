//! A minimal 2D vector value type.
//!
//! [Vector2](crate::core::math::Vector2) holds an `x` and `y` component (`f32` unless another
//! [Real](crate::core::traits::Real) type is given) and supports computing its magnitude and
//! normalizing it in place.
//!
//! # Examples
//! ```
//! # use vector2::core::math::*;
//! # use vector2::core::traits::*;
//! let mut v: Vector2 = Vector2::new(3.0, 4.0);
//! assert_eq!(v.magnitude(), 5.0);
//! // normalize mutates in place and returns the vector for chaining
//! assert!(v.normalize().magnitude().fuzzy_eq(1.0));
//! assert!(v.fuzzy_eq(Vector2::new(0.6, 0.8)));
//! ```
#![forbid(unsafe_code)]

pub mod core;

pub use crate::core::math::Vector2;
