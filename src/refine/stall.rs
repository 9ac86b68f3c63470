use anyhow::anyhow;
use itertools::Itertools;
use num::{ToPrimitive, Zero};

use super::{Bracket, Engine, Refinement, State};
use crate::{decimal::RoundingMode, error::Result, Decimal};

/// Cells the stall recovery splits a bracket into. A fifth of a decimal is
/// still an exact decimal.
const STALL_CELLS: i64 = 5;

impl Engine<'_> {
    /// Sample three consecutive points of a five cell grid around the secant
    /// estimate, reusing the endpoint values where the samples reach them.
    pub(super) fn stalled(&self, bracket: Bracket, n: u32) -> State {
        let Bracket { lx, ly, rx, ry } = bracket;
        let width = &rx - &lx;
        // width / 5 == width * 2 / 10
        let h = Decimal::new(width.unscaled() * 2u8, width.scale() + 1);
        let k = (&ly * &Decimal::from(STALL_CELLS))
            .div_round(&(&ly - &ry), 0, RoundingMode::HalfEven)
            .unscaled()
            .to_i64()
            .unwrap_or(1)
            .clamp(1, STALL_CELLS - 1);
        log::debug!("stall recovery on [{lx}, {rx}] {{k: {k}}}");

        let mut samples = Vec::with_capacity(5);
        if k > 1 {
            samples.push((lx.clone(), ly.clone()));
        }
        for j in (k - 1)..=(k + 1) {
            let sample = match j {
                0 => (lx.clone(), ly.clone()),
                STALL_CELLS => (rx.clone(), ry.clone()),
                _ => {
                    let x = &lx + &(&h * &Decimal::from(j));
                    let y = self.eval.eval(&x);
                    if y.is_zero() {
                        return State::Done(Refinement::ExactRoot(x));
                    }
                    (x, y)
                }
            };
            samples.push(sample);
        }
        if k + 1 < STALL_CELLS {
            samples.push((rx, ry));
        }
        State::Bisecting { samples, n }
    }
}

/// Go back to the main loop on the first pair of neighbouring samples whose
/// signs differ, at half the working precision.
///
/// The outermost samples are the old endpoints, so such a pair always exists.
pub(super) fn bisect(samples: Vec<(Decimal, Decimal)>, n: u32) -> Result<State> {
    let ((lx, ly), (rx, ry)) = samples
        .into_iter()
        .tuple_windows()
        .find(|((_, ya), (_, yb))| ya.signum() != yb.signum())
        .ok_or_else(|| anyhow!("stall samples do not bracket a sign change"))?;
    log::trace!("bisected to [{lx}, {rx}]");
    Ok(State::MainLoop {
        bracket: Bracket { lx, ly, rx, ry },
        n: (n / 2).max(1),
    })
}

#[cfg(test)]
mod test {
    use num::bigint::Sign;

    use super::{bisect, State};
    use crate::Decimal;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn bisect_first_sign_change() {
        let samples = vec![
            (d("1.4"), d("-0.04")),
            (d("1.52"), d("0.3104")),
            (d("1.64"), d("0.6896")),
            (d("2"), d("2")),
        ];
        let Ok(State::MainLoop { bracket, n }) = bisect(samples, 8) else {
            panic!("expected to go back to the main loop");
        };
        assert_eq!(bracket.lx, d("1.4"));
        assert_eq!(bracket.rx, d("1.52"));
        assert_eq!(bracket.ry.signum(), Sign::Plus);
        assert_eq!(n, 4);
    }

    #[test]
    fn bisect_without_sign_change() {
        let samples = vec![(d("1"), d("-1")), (d("2"), d("-2"))];
        assert!(bisect(samples, 1).is_err());
    }
}
