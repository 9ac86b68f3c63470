use num::{BigInt, One, Zero};

use super::{Bracket, Engine, Refinement, State};
use crate::{
    decimal::{pow10, RoundingMode},
    Decimal,
};

impl Engine<'_> {
    /// One secant step on a grid of `10^n` cells.
    pub(super) fn main_loop(&self, bracket: Bracket, n: u32) -> State {
        let Bracket { lx, ly, rx, ry } = bracket;
        let target = self.precision.eps(&lx).max(self.precision.eps(&rx));
        let width = &rx - &lx;
        if width <= Decimal::new(1, target) {
            return State::Done(self.finish(&lx, &ly, &rx, target));
        }

        let cells = pow10(u64::from(n));
        // width / 10^n, exact
        let h = Decimal::new(width.unscaled().clone(), width.scale() + i64::from(n));
        let grown = grow(n, h.scale(), target);

        // ly and ry have opposite signs, so the secant crosses zero at a
        // fraction of the bracket in (0, 1)
        let s = ly.div_round(&(&ly - &ry), i64::from(n), RoundingMode::HalfEven);
        let k = s.unscaled().clone().clamp(BigInt::one(), &cells - 1u8);
        let x1 = &lx + &(&h * &Decimal::from(k.clone()));
        let y1 = self.eval.eval(&x1);
        log::trace!("secant step {{n: {n}, k: {k}, x1: {x1}, y1: {y1}}}");
        if y1.is_zero() {
            return State::Done(Refinement::ExactRoot(x1));
        }

        if y1.signum() == ly.signum() {
            // the root is right of x1
            if &k + 1u8 == cells {
                return State::MainLoop {
                    bracket: Bracket { lx: x1, ly: y1, rx, ry },
                    n: grown,
                };
            }
            let x2 = &x1 + &h;
            let y2 = self.eval.eval(&x2);
            if y2.is_zero() {
                return State::Done(Refinement::ExactRoot(x2));
            }
            if y2.signum() == ly.signum() {
                log::debug!("secant step stalled {{n: {n}, x2: {x2}}}");
                return State::Stalled {
                    bracket: Bracket { lx: x2, ly: y2, rx, ry },
                    n,
                };
            }
            State::MainLoop {
                bracket: Bracket {
                    lx: x1,
                    ly: y1,
                    rx: x2,
                    ry: y2,
                },
                n: grown,
            }
        } else {
            // the root is left of x1
            if k.is_one() {
                return State::MainLoop {
                    bracket: Bracket { lx, ly, rx: x1, ry: y1 },
                    n: grown,
                };
            }
            let x0 = &x1 - &h;
            let y0 = self.eval.eval(&x0);
            if y0.is_zero() {
                return State::Done(Refinement::ExactRoot(x0));
            }
            if y0.signum() == ry.signum() {
                log::debug!("secant step stalled {{n: {n}, x0: {x0}}}");
                return State::Stalled {
                    bracket: Bracket { lx, ly, rx: x0, ry: y0 },
                    n,
                };
            }
            State::MainLoop {
                bracket: Bracket {
                    lx: x0,
                    ly: y0,
                    rx: x1,
                    ry: y1,
                },
                n: grown,
            }
        }
    }

    /// Snap a bracket at most one unit wide onto the grid of `target`.
    ///
    /// Rounding outwards can make it two units wide, in which case the grid
    /// point in between decides which half to keep.
    fn finish(&self, lx: &Decimal, ly: &Decimal, rx: &Decimal, target: i64) -> Refinement {
        let lower = lx.with_scale(target, RoundingMode::Floor);
        let upper = rx.with_scale(target, RoundingMode::Ceiling);
        if &upper - &lower <= Decimal::new(1, target) {
            return Refinement::Bounded { lower, upper };
        }

        // lx is off the grid here, so this is strictly inside (lx, rx)
        let mid = lx.with_scale(target, RoundingMode::Ceiling);
        let ym = self.eval.eval(&mid);
        log::trace!("finishing on grid point {{mid: {mid}, ym: {ym}}}");
        if ym.is_zero() {
            Refinement::ExactRoot(mid)
        } else if ym.signum() == ly.signum() {
            Refinement::Bounded { lower: mid, upper }
        } else {
            Refinement::Bounded { lower, upper: mid }
        }
    }
}

/// Double the working precision `n`, but never make the grid more than one
/// digit finer than `target` for endpoints at `scale`.
fn grow(n: u32, scale: i64, target: i64) -> u32 {
    let room = u32::try_from((target + 1 - scale).max(1)).unwrap_or(u32::MAX);
    n.saturating_mul(2).min(room)
}
