//! Substitutions that move roots around while keeping coefficients exact.

use num::Zero;

use crate::{Poly, Scalar};

impl<T: Scalar> Poly<T> {
    /// Taylor shift, the polynomial `p(x + c)`.
    ///
    /// Roots move from `r` to `r - c`.
    ///
    /// # Examples
    /// ```
    /// use qir_roots::Poly;
    ///
    /// // x^2 shifted by 1 is x^2 + 2x + 1
    /// assert_eq!(Poly::new(&[0, 0, 1]).shift(&1), Poly::new(&[1, 2, 1]));
    /// ```
    #[must_use]
    pub fn shift(&self, c: &T) -> Self {
        debug_assert!(self.is_normalized());
        if c.is_zero() {
            return self.clone();
        }

        // repeated synthetic division by (x - c), O(n^2) but exact
        let mut coeffs = self.0.clone();
        let n = self.degree_raw();
        for i in 0..n {
            for j in (i..n).rev() {
                let carry = c.clone() * coeffs[j + 1].clone();
                coeffs[j] = coeffs[j].clone() + carry;
            }
        }
        Self(coeffs).normalize()
    }

    /// The polynomial `p(c * x)`.
    ///
    /// Roots move from `r` to `r / c`.
    #[must_use]
    pub fn scale_x(&self, c: &T) -> Self {
        debug_assert!(self.is_normalized());
        let mut power = T::one();
        let mut coeffs = Vec::with_capacity(self.len_raw());
        for a in &self.0 {
            coeffs.push(a.clone() * power.clone());
            power = power * c.clone();
        }
        Self(coeffs).normalize()
    }

    /// Reciprocal polynomial `x^n * p(1/x)`, where `n` is the degree.
    ///
    /// Nonzero roots move from `r` to `1 / r`. A root at zero lowers the
    /// degree of the result instead.
    #[must_use]
    pub fn reciprocal(&self) -> Self {
        debug_assert!(self.is_normalized());
        Self(self.0.iter().rev().cloned().collect()).normalize()
    }
}
