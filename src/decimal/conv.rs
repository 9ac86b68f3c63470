use std::{fmt, str::FromStr};

use num::{BigInt, BigRational, Signed, Zero};
use thiserror::Error;

use super::{pow10, round_div, Decimal, RoundingMode};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseDecimalError {
    #[error("cannot parse decimal from empty string")]
    Empty,

    #[error("invalid digit found in decimal literal")]
    InvalidDigit,

    #[error("invalid exponent in decimal literal")]
    InvalidExponent,
}

impl Decimal {
    /// The exact value as a rational number
    #[must_use]
    pub fn to_rational(&self) -> BigRational {
        let magnitude = pow10(self.scale.unsigned_abs());
        if self.scale >= 0 {
            BigRational::new(self.unscaled.clone(), magnitude)
        } else {
            BigRational::from_integer(&self.unscaled * magnitude)
        }
    }

    /// Round a rational number to a decimal with exactly `scale` places.
    #[must_use]
    pub fn from_rational(value: &BigRational, scale: i64, mode: RoundingMode) -> Self {
        let magnitude = pow10(scale.unsigned_abs());
        let unscaled = if scale >= 0 {
            round_div(&(value.numer() * magnitude), value.denom(), mode)
        } else {
            round_div(value.numer(), &(value.denom() * magnitude), mode)
        };
        Self::new(unscaled, scale)
    }

    /// Round a rational number to a decimal with `digits` significant digits.
    ///
    /// Zero is returned with scale 0.
    #[must_use]
    pub fn from_rational_digits(value: &BigRational, digits: u64, mode: RoundingMode) -> Self {
        debug_assert!(digits > 0);
        if value.is_zero() {
            return Self::zero();
        }
        let digits_i = i64::try_from(digits).unwrap_or(i64::MAX / 4);
        let scale = digits_i - 1 - floor_log10(value);
        Self::from_rational(value, scale, mode).round_digits(digits, mode)
    }
}

/// `floor(log10(|value|))` for a nonzero rational
fn floor_log10(value: &BigRational) -> i64 {
    let numer = value.numer().abs();
    let denom = value.denom().abs();
    let count = |x: &BigInt| x.magnitude().to_str_radix(10).len() as i64;

    // 10^(n-1) <= numer < 10^n and 10^(d-1) <= denom < 10^d, so the answer
    // is either n - d or n - d - 1
    let guess = count(&numer) - count(&denom);
    let magnitude = pow10(guess.unsigned_abs());
    let at_least_guess = if guess >= 0 {
        numer >= denom * magnitude
    } else {
        numer * magnitude >= denom
    };
    if at_least_guess {
        guess
    } else {
        guess - 1
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    /// Parses plain (`-12.345`) and exponent (`1.5e-3`) notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseDecimalError::Empty);
        }

        let (mantissa, exponent) = match s.find(['e', 'E']) {
            Some(i) => (
                &s[..i],
                s[i + 1..]
                    .parse::<i64>()
                    .map_err(|_| ParseDecimalError::InvalidExponent)?,
            ),
            None => (s, 0),
        };

        let (negative, mantissa) = match mantissa.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, mantissa.strip_prefix('+').unwrap_or(mantissa)),
        };

        let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(ParseDecimalError::Empty);
        }
        let digits = format!("{int_part}{frac_part}");
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseDecimalError::InvalidDigit);
        }

        let unscaled =
            BigInt::parse_bytes(digits.as_bytes(), 10).ok_or(ParseDecimalError::InvalidDigit)?;
        let unscaled = if negative { -unscaled } else { unscaled };
        let scale = i64::try_from(frac_part.len())
            .ok()
            .and_then(|n| n.checked_sub(exponent))
            .ok_or(ParseDecimalError::InvalidExponent)?;
        Ok(Self::new(unscaled, scale))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scale <= 0 {
            return write!(f, "{}", &self.unscaled * pow10(self.scale.unsigned_abs()));
        }

        let scale = usize::try_from(self.scale).map_err(|_| fmt::Error)?;
        let digits = self.unscaled.magnitude().to_str_radix(10);
        let digits = format!("{digits:0>width$}", width = scale + 1);
        let (int_part, frac_part) = digits.split_at(digits.len() - scale);
        let sign = if self.unscaled.is_negative() { "-" } else { "" };
        write!(f, "{sign}{int_part}.{frac_part}")
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Decimal {
                fn from(value: $t) -> Self {
                    Self::new(BigInt::from(value), 0)
                }
            }
        )*
    };
}
impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for Decimal {
    fn from(value: BigInt) -> Self {
        Self::new(value, 0)
    }
}
