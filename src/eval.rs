//! Exact evaluation of integer polynomials at decimal and rational points.

use num::{bigint::Sign, BigInt, BigRational, Signed, Zero};

use crate::{poly::RatPoly, Decimal, Poly, RoundingMode};

/// Extra significant digits kept beyond those of the evaluation point
const EVAL_GUARD_DIGITS: u64 = 4;

/// Which of the two discarded slivers of an exact bracket holds the root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Between the exact lower bound and the rounded lower endpoint
    Left,
    /// Between the rounded upper endpoint and the exact upper bound
    Right,
}

/// Evaluates an integer polynomial at decimal points.
///
/// Every evaluation is exact over the rationals and only then rounded away
/// from zero, so the sign of the result is always the true sign.
#[derive(Clone, Debug)]
pub struct DecimalEvaluator {
    exact: RatPoly,
}

impl DecimalEvaluator {
    #[must_use]
    pub fn new(poly: &Poly<BigInt>) -> Self {
        Self {
            exact: poly.to_rational(),
        }
    }

    /// `p(x)`, rounded to a few more significant digits than `x` carries.
    #[must_use]
    pub fn eval(&self, x: &Decimal) -> Decimal {
        let y = self.eval_rational(&x.to_rational());
        Decimal::from_rational_digits(&y, x.precision() + EVAL_GUARD_DIGITS, RoundingMode::Up)
    }

    /// `p(x)` without any rounding
    #[must_use]
    pub fn eval_rational(&self, x: &BigRational) -> BigRational {
        self.exact.eval(x)
    }

    #[must_use]
    pub fn sign_at(&self, x: &BigRational) -> Sign {
        let y = self.eval_rational(x);
        if y.is_zero() {
            Sign::NoSign
        } else if y.is_positive() {
            Sign::Plus
        } else {
            Sign::Minus
        }
    }

    /// After the rounded endpoints `lx <= rx` turned out to have the same
    /// sign `ly`, decide whether the single root of `(lower, upper)` lies in
    /// `(lower, lx)` or in `(rx, upper)`.
    ///
    /// Descartes' rule is tried on both slivers first. When both counts are
    /// inconclusive the exact sign at `lower` decides.
    #[must_use]
    pub fn side_of_root(
        &self,
        lower: &BigRational,
        lx: &Decimal,
        ly: &Decimal,
        rx: &Decimal,
        upper: &BigRational,
    ) -> Side {
        let left = self.exact.variations_in(lower, &lx.to_rational());
        let right = self.exact.variations_in(&rx.to_rational(), upper);
        log::trace!("overshoot variations {{left: {left}, right: {right}}}");

        match (left, right) {
            (1, _) | (_, 0) => Side::Left,
            (0, _) | (_, 1) => Side::Right,
            _ => {
                let at_lower = self.sign_at(lower);
                if at_lower != Sign::NoSign && at_lower != ly.signum() {
                    Side::Left
                } else {
                    Side::Right
                }
            }
        }
    }
}
