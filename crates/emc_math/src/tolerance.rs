//! Tolerance-based float comparison
//!
//! Vectors and matrices compare equal when every component pair differs by
//! strictly less than an absolute epsilon. The default epsilon is `5e-6`;
//! callers who need a different threshold go through [`ApproxEq`] directly.

use serde::{Deserialize, Serialize};

/// Default absolute epsilon used by `==` on vectors and matrices
pub const DEFAULT_EPSILON: f32 = 5e-6;

/// Absolute-difference comparison policy
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    epsilon: f32,
}

impl Tolerance {
    /// The policy `PartialEq` uses
    pub const DEFAULT: Self = Self { epsilon: DEFAULT_EPSILON };

    /// Create a policy with the given absolute epsilon
    #[inline]
    pub const fn new(epsilon: f32) -> Self {
        Self { epsilon }
    }

    #[inline]
    pub const fn epsilon(self) -> f32 {
        self.epsilon
    }

    /// `|a - b| < epsilon`
    ///
    /// Comparison is strict: a difference of exactly `epsilon` is not equal.
    /// NaN never compares equal to anything.
    #[inline]
    pub fn within(self, a: f32, b: f32) -> bool {
        (a - b).abs() < self.epsilon
    }

    /// Component-wise [`Tolerance::within`] over two equal-length slices
    pub fn within_slices(self, a: &[f32], b: &[f32]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| self.within(x, y))
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Equality under an explicit [`Tolerance`]
pub trait ApproxEq {
    fn approx_eq(&self, other: &Self, tolerance: Tolerance) -> bool;
}

/// Implements `ApproxEq` and a tolerance-based `PartialEq` for a type that
/// exposes its components through `as_slice()`.
macro_rules! impl_tolerance_eq {
    ($t:ty) => {
        impl $crate::tolerance::ApproxEq for $t {
            #[inline]
            fn approx_eq(&self, other: &Self, tolerance: $crate::tolerance::Tolerance) -> bool {
                tolerance.within_slices(self.as_slice(), other.as_slice())
            }
        }

        impl PartialEq for $t {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                $crate::tolerance::ApproxEq::approx_eq(
                    self,
                    other,
                    $crate::tolerance::Tolerance::DEFAULT,
                )
            }
        }
    };
}

pub(crate) use impl_tolerance_eq;
