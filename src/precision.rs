use num::{BigRational, Zero};

use crate::{Decimal, RoundingMode};

/// Largest significant digit count that keeps scale arithmetic in range
const MAX_DIGITS: u64 = i64::MAX.unsigned_abs() / 4;

/// How precise a refined root should be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Precision {
    /// A fixed number of decimal places
    Scale(i64),
    /// A number of significant digits, the number of decimal places grows
    /// as the magnitude of the root shrinks
    Digits(u64),
}

impl Precision {
    /// The scale at which `x` is considered precise enough.
    ///
    /// For [`Precision::Digits`] this follows the decimal magnitude of `x`,
    /// so that `x` on this grid has `digits + 1` significant digits however
    /// it is represented.
    #[must_use]
    pub fn eps(&self, x: &Decimal) -> i64 {
        match *self {
            Self::Scale(scale) => scale,
            Self::Digits(digits) => {
                // zero has no significant digits
                let magnitude = if x.is_zero() {
                    0
                } else {
                    i64::try_from(x.precision()).unwrap_or(i64::MAX / 4)
                };
                x.scale() - magnitude + i64::try_from(digits).unwrap_or(i64::MAX / 4) + 1
            }
        }
    }

    /// Round `value` to a decimal on the grid of [`Precision::eps`] with
    /// `mode`.
    #[must_use]
    pub fn to_decimal(&self, value: &BigRational, mode: RoundingMode) -> Decimal {
        match *self {
            Self::Scale(scale) => Decimal::from_rational(value, scale, mode),
            Self::Digits(digits) => {
                Decimal::from_rational_digits(value, digits.saturating_add(1), mode)
            }
        }
    }

    /// Smallest decimal not below `lower`, so the bracket never widens
    #[must_use]
    pub fn lower_decimal(&self, lower: &BigRational) -> Decimal {
        self.to_decimal(lower, RoundingMode::Ceiling)
    }

    /// Largest decimal not above `upper`, so the bracket never widens
    #[must_use]
    pub fn upper_decimal(&self, upper: &BigRational) -> Decimal {
        self.to_decimal(upper, RoundingMode::Floor)
    }

    /// The midpoint of an exact bracket, rounded to nearest
    #[must_use]
    pub fn midpoint(&self, lower: &BigRational, upper: &BigRational) -> Decimal {
        let two = BigRational::from_integer(2.into());
        self.to_decimal(&((lower + upper) / two), RoundingMode::HalfEven)
    }

    pub(crate) const fn is_valid(&self) -> bool {
        match *self {
            Self::Scale(_) => true,
            Self::Digits(digits) => digits > 0 && digits <= MAX_DIGITS,
        }
    }
}
