use std::fmt::Display;

use itertools::Itertools;
use num::{BigInt, BigRational, One, Zero};

use crate::Scalar;

mod conversions;
mod descartes;
mod indexing;
mod transform;

/// Univariate polynomial, coefficients stored from the least significant.
///
/// Polynomials are kept normalized: there are no trailing zero coefficients,
/// and the zero polynomial is the single coefficient `[0]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Poly<T: Scalar>(pub(crate) Vec<T>);

/// Integer polynomial, the input type of the refinement engine
pub type IntPoly = Poly<BigInt>;

/// Rational polynomial, used for exact evaluation
pub type RatPoly = Poly<BigRational>;

impl<T: Scalar> Poly<T> {
    #[must_use]
    pub fn new(coeffs: &[T]) -> Self {
        Self(coeffs.to_owned()).normalize()
    }

    #[must_use]
    pub fn zero() -> Self {
        Self(vec![T::zero()])
    }

    #[must_use]
    pub fn one() -> Self {
        Self(vec![T::one()])
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        debug_assert!(self.is_normalized());
        self.len_raw() == 1 && self.0[0].is_zero()
    }

    /// The degree of a polynomial (the maximum exponent)
    ///
    /// Note that this will return `-1` for zero polynomials.
    #[must_use]
    pub fn degree(&self) -> i64 {
        if self.is_zero() {
            return -1;
        }
        self.degree_raw() as i64
    }

    /// Evaluate the polynomial at a single value of `x`.
    ///
    /// ```
    /// use qir_roots::poly;
    /// use qir_roots::num::BigInt;
    ///
    /// let p = poly![-2, 0, 1];
    /// assert_eq!(p.eval(&BigInt::from(3)), BigInt::from(7));
    /// ```
    #[must_use]
    pub fn eval(&self, x: &T) -> T {
        // Horner's method
        debug_assert!(self.is_normalized());
        self.0
            .iter()
            .rev()
            .fold(T::zero(), |acc, c| acc * x.clone() + c.clone())
    }

    /// Apply `f` to every coefficient, e.g. to lift integers to rationals.
    #[must_use]
    pub fn map_coeffs<U: Scalar>(&self, f: impl FnMut(&T) -> U) -> Poly<U> {
        Poly(self.0.iter().map(f).collect_vec()).normalize()
    }

    /// The leading coefficient
    #[must_use]
    pub fn leading(&self) -> &T {
        &self.0[self.len_raw() - 1]
    }

    /// The length of the polynomial without checking pre-conditions
    pub(crate) fn len_raw(&self) -> usize {
        self.0.len()
    }

    /// The degree of the polynomial without checking pre-conditions
    pub(crate) fn degree_raw(&self) -> usize {
        self.len_raw().saturating_sub(1)
    }

    pub(crate) fn is_normalized(&self) -> bool {
        let n = self.len_raw();
        if n == 0 {
            return false;
        }
        // a constant is always normalized, as it may be just a constant zero
        n == 1 || !self.0[n - 1].is_zero()
    }

    pub(crate) fn normalize(mut self) -> Self {
        while self.0.len() > 1 && self.0.last().is_some_and(Zero::is_zero) {
            self.0.pop();
        }
        if self.0.is_empty() {
            return Self::zero();
        }

        // post-condition: polynomial is now normalized
        debug_assert!(self.is_normalized());
        self
    }
}

impl Poly<BigInt> {
    /// The same polynomial with rational coefficients
    #[must_use]
    pub fn to_rational(&self) -> Poly<BigRational> {
        self.map_coeffs(|c| BigRational::from_integer(c.clone()))
    }
}

impl<T: Scalar + Display> Display for Poly<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut iter = self.0.iter().enumerate();
        if let Some((_, c)) = iter.next() {
            write!(f, "{c}")?;
        }
        for (i, c) in iter {
            write!(f, " + {c}*x^{i}")?;
        }
        Ok(())
    }
}

impl<T: Scalar> Default for Poly<T> {
    fn default() -> Self {
        Self::zero()
    }
}
