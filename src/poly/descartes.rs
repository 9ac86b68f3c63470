//! Descartes' rule of signs.

use itertools::Itertools;
use num::{Signed, Zero};

use crate::{Poly, Scalar};

impl<T: Scalar + Signed> Poly<T> {
    /// Number of sign changes in the coefficient sequence, zeros skipped.
    ///
    /// This is an upper bound on the number of positive real roots, and has
    /// the same parity.
    #[must_use]
    pub fn sign_variations(&self) -> usize {
        self.0
            .iter()
            .filter(|c| !c.is_zero())
            .map(Signed::is_positive)
            .tuple_windows()
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Sign variations of the transform mapping the open interval `(a, b)`
    /// onto the positive reals, `(1 + x)^n * p((a + b x) / (1 + x))`.
    ///
    /// `0` means there is no root in `(a, b)`, `1` means there is exactly
    /// one. Anything else is inconclusive.
    #[must_use]
    pub fn variations_in(&self, a: &T, b: &T) -> usize {
        debug_assert!(self.is_normalized());
        // (a, b) -> (0, b - a) -> (0, 1) -> (1, inf) -> (0, inf)
        self.shift(a)
            .scale_x(&(b.clone() - a.clone()))
            .reciprocal()
            .shift(&T::one())
            .sign_variations()
    }
}
