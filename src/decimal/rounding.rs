use num::{BigInt, Integer, Signed, Zero};

/// How to discard digits when a result does not fit the requested scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Away from zero
    Up,
    /// Towards zero
    Down,
    /// Towards positive infinity
    Ceiling,
    /// Towards negative infinity
    Floor,
    /// To nearest, ties away from zero
    HalfUp,
    /// To nearest, ties to the even neighbour
    HalfEven,
}

/// Integer quotient `num / den` rounded with `mode`.
///
/// `Up` never turns a nonzero quotient into zero, and never changes its sign.
pub(crate) fn round_div(num: &BigInt, den: &BigInt, mode: RoundingMode) -> BigInt {
    debug_assert!(!den.is_zero());

    let (num, den) = if den.is_negative() {
        (-num, -den)
    } else {
        (num.clone(), den.clone())
    };

    // floor division, 0 <= rem < den
    let (quot, rem) = num.div_mod_floor(&den);
    if rem.is_zero() {
        return quot;
    }

    // the exact quotient lies strictly between quot and quot + 1
    let negative = num.is_negative();
    let away_from_zero = |q: BigInt| if negative { q } else { q + 1 };
    let towards_zero = |q: BigInt| if negative { q + 1 } else { q };
    match mode {
        RoundingMode::Floor => quot,
        RoundingMode::Ceiling => quot + 1,
        RoundingMode::Up => away_from_zero(quot),
        RoundingMode::Down => towards_zero(quot),
        RoundingMode::HalfUp | RoundingMode::HalfEven => match (rem * 2u8).cmp(&den) {
            std::cmp::Ordering::Less => quot,
            std::cmp::Ordering::Greater => quot + 1,
            std::cmp::Ordering::Equal if mode == RoundingMode::HalfUp => away_from_zero(quot),
            std::cmp::Ordering::Equal => {
                if quot.is_even() {
                    quot
                } else {
                    quot + 1
                }
            }
        },
    }
}

#[cfg(test)]
mod test {
    use super::{round_div, RoundingMode};
    use num::BigInt;

    fn check(num: i64, den: i64, mode: RoundingMode) -> i64 {
        let q = round_div(&BigInt::from(num), &BigInt::from(den), mode);
        i64::try_from(q).unwrap()
    }

    #[test]
    fn directed() {
        assert_eq!(check(7, 2, RoundingMode::Floor), 3);
        assert_eq!(check(-7, 2, RoundingMode::Floor), -4);
        assert_eq!(check(7, 2, RoundingMode::Ceiling), 4);
        assert_eq!(check(-7, 2, RoundingMode::Ceiling), -3);
        assert_eq!(check(7, 3, RoundingMode::Up), 3);
        assert_eq!(check(-7, 3, RoundingMode::Up), -3);
        assert_eq!(check(7, 3, RoundingMode::Down), 2);
        assert_eq!(check(-7, 3, RoundingMode::Down), -2);
    }

    #[test]
    fn nearest() {
        assert_eq!(check(5, 2, RoundingMode::HalfUp), 3);
        assert_eq!(check(-5, 2, RoundingMode::HalfUp), -3);
        assert_eq!(check(5, 2, RoundingMode::HalfEven), 2);
        assert_eq!(check(7, 2, RoundingMode::HalfEven), 4);
        assert_eq!(check(-5, 2, RoundingMode::HalfEven), -2);
        assert_eq!(check(8, 3, RoundingMode::HalfEven), 3);
    }

    #[test]
    fn negative_denominator() {
        assert_eq!(check(7, -2, RoundingMode::Floor), -4);
        assert_eq!(check(-7, -2, RoundingMode::Floor), 3);
    }

    #[test]
    fn up_keeps_sign() {
        assert_eq!(check(1, 1000, RoundingMode::Up), 1);
        assert_eq!(check(-1, 1000, RoundingMode::Up), -1);
        assert_eq!(check(0, 1000, RoundingMode::Up), 0);
    }
}
