//! Arbitrary precision decimal numbers with an explicit scale.
//!
//! A [`Decimal`] is an unscaled [`BigInt`] together with a power-of-ten
//! scale, so that its value is `unscaled * 10^(-scale)`. Addition,
//! subtraction and multiplication are exact, division always takes an
//! explicit target scale and [`RoundingMode`].

use num::{bigint::Sign, BigInt, One, Signed, Zero};

use crate::util::doc_macros::panic_absurd_size;

mod conv;
mod ops;
mod rounding;

pub use conv::ParseDecimalError;
pub use rounding::RoundingMode;
pub(crate) use rounding::round_div;

#[derive(Clone, Debug)]
pub struct Decimal {
    unscaled: BigInt,
    scale: i64,
}

/// `10^exp` as a big integer
///
/// # Panics
#[doc = panic_absurd_size!()]
pub(crate) fn pow10(exp: u64) -> BigInt {
    num::pow(
        BigInt::from(10u8),
        usize::try_from(exp).expect("exponent did not fit into usize"),
    )
}

impl Decimal {
    #[must_use]
    pub fn new(unscaled: impl Into<BigInt>, scale: i64) -> Self {
        Self {
            unscaled: unscaled.into(),
            scale,
        }
    }

    #[must_use]
    pub const fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    #[must_use]
    pub const fn scale(&self) -> i64 {
        self.scale
    }

    #[must_use]
    pub fn signum(&self) -> Sign {
        self.unscaled.sign()
    }

    #[must_use]
    pub fn abs(&self) -> Self {
        Self::new(self.unscaled.abs(), self.scale)
    }

    /// Unit in the last place, i.e. `10^(-scale)`
    #[must_use]
    pub fn ulp(&self) -> Self {
        Self::new(BigInt::one(), self.scale)
    }

    /// Number of decimal digits in the unscaled value (1 for zero)
    #[must_use]
    pub fn precision(&self) -> u64 {
        if self.unscaled.is_zero() {
            return 1;
        }
        self.unscaled.magnitude().to_str_radix(10).len() as u64
    }

    /// Rescale to `scale`, rounding with `mode` if digits are dropped.
    ///
    /// # Panics
    #[doc = panic_absurd_size!()]
    #[must_use]
    pub fn with_scale(&self, scale: i64, mode: RoundingMode) -> Self {
        let diff = scale.abs_diff(self.scale);
        if scale >= self.scale {
            Self::new(&self.unscaled * pow10(diff), scale)
        } else {
            Self::new(round_div(&self.unscaled, &pow10(diff), mode), scale)
        }
    }

    /// Round to at most `digits` significant digits.
    ///
    /// Values that already fit are returned unchanged, including their scale.
    #[must_use]
    pub fn round_digits(&self, digits: u64, mode: RoundingMode) -> Self {
        debug_assert!(digits > 0);
        let precision = self.precision();
        if precision <= digits {
            return self.clone();
        }
        let drop = i64::try_from(precision - digits).unwrap_or(i64::MAX);
        let rounded = self.with_scale(self.scale - drop, mode);

        // rounding up may carry into a new leading digit, e.g. 999 -> 1000,
        // the last digit is then a zero and can be dropped exactly
        if rounded.precision() > digits {
            return rounded.with_scale(rounded.scale - 1, mode);
        }
        rounded
    }

    /// Divide by `rhs`, producing a quotient with exactly `scale` decimal
    /// places, rounded with `mode`.
    ///
    /// # Panics
    /// Panics if `rhs` is zero.
    #[must_use]
    pub fn div_round(&self, rhs: &Self, scale: i64, mode: RoundingMode) -> Self {
        assert!(!rhs.is_zero(), "attempted to divide a decimal by zero");

        // self / rhs = (a * 10^-sa) / (b * 10^-sb), and we want q * 10^-scale,
        // so q = a * 10^(scale - sa + sb) / b
        let exp = scale - self.scale + rhs.scale;
        let (num, den) = if exp >= 0 {
            (&self.unscaled * pow10(exp.unsigned_abs()), rhs.unscaled.clone())
        } else {
            (self.unscaled.clone(), &rhs.unscaled * pow10(exp.unsigned_abs()))
        };
        Self::new(round_div(&num, &den, mode), scale)
    }

    /// Bring both operands to the larger of the two scales
    fn aligned(&self, rhs: &Self) -> (BigInt, BigInt, i64) {
        match self.scale.cmp(&rhs.scale) {
            std::cmp::Ordering::Equal => (self.unscaled.clone(), rhs.unscaled.clone(), self.scale),
            std::cmp::Ordering::Less => (
                &self.unscaled * pow10(rhs.scale.abs_diff(self.scale)),
                rhs.unscaled.clone(),
                rhs.scale,
            ),
            std::cmp::Ordering::Greater => (
                self.unscaled.clone(),
                &rhs.unscaled * pow10(self.scale.abs_diff(rhs.scale)),
                self.scale,
            ),
        }
    }
}

impl Zero for Decimal {
    fn zero() -> Self {
        Self::new(BigInt::zero(), 0)
    }

    fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }
}

impl One for Decimal {
    fn one() -> Self {
        Self::new(BigInt::one(), 0)
    }
}
