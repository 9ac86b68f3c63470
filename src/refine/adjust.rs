use std::cmp::Ordering;

use num::{bigint::Sign, Zero};

use super::{Bracket, Engine, Refinement, State};
use crate::{eval::Side, Decimal, RoundingMode};

impl Engine<'_> {
    /// Round the exact bracket inwards to decimals.
    ///
    /// A root at zero is taken directly: significant-digit precision keeps
    /// asking for more decimal places as the endpoints approach it.
    pub(super) fn bootstrap(&self) -> State {
        let zero = Decimal::zero();
        if self.is_interior(&zero) && self.eval.sign_at(&zero.to_rational()) == Sign::NoSign {
            log::trace!("zero is a root inside the bracket");
            return State::Done(Refinement::ExactRoot(zero));
        }
        let lx = self.precision.lower_decimal(self.lower);
        let rx = self.precision.upper_decimal(self.upper);
        log::trace!("bootstrap {{lx: {lx}, rx: {rx}}}");
        State::Adjusting { lx, rx, nudges: 0 }
    }

    /// Check the rounded endpoints before the main loop takes over.
    pub(super) fn adjust(&self, lx: Decimal, rx: Decimal, nudges: usize) -> State {
        if nudges > self.max_nudges {
            log::debug!("giving up after {nudges} nudges");
            return State::Done(self.out_of_bounds());
        }

        match lx.cmp(&rx) {
            Ordering::Less => {}
            Ordering::Equal if self.is_interior(&lx) && self.eval.eval(&lx).is_zero() => {
                return State::Done(Refinement::ExactRoot(lx));
            }
            _ => {
                log::debug!("precision too coarse to separate {{lx: {lx}, rx: {rx}}}");
                return State::Done(self.out_of_bounds());
            }
        }

        let ly = self.eval.eval(&lx);
        if ly.is_zero() {
            if !self.is_interior(&lx) {
                // a root on the exact bound, not the one inside the bracket
                let next = &lx + &self.nudge_unit(&lx);
                log::debug!("lower endpoint {lx} is a root on the bound, moving to {next}");
                return State::Adjusting {
                    lx: next,
                    rx,
                    nudges: nudges + 1,
                };
            }
            return State::Done(Refinement::ExactRoot(lx));
        }

        let ry = self.eval.eval(&rx);
        if ry.is_zero() {
            if !self.is_interior(&rx) {
                let next = &rx - &self.nudge_unit(&rx);
                log::debug!("upper endpoint {rx} is a root on the bound, moving to {next}");
                return State::Adjusting {
                    lx,
                    rx: next,
                    nudges: nudges + 1,
                };
            }
            return State::Done(Refinement::ExactRoot(rx));
        }

        if ly.signum() != ry.signum() {
            return State::MainLoop {
                bracket: Bracket { lx, ly, rx, ry },
                n: 1,
            };
        }

        // both endpoints on the same side: rounding skipped over the root
        let side = self.eval.side_of_root(self.lower, &lx, &ly, &rx, self.upper);
        log::debug!("rounded bracket [{lx}, {rx}] overshot the root {{side: {side:?}}}");
        State::Done(match side {
            Side::Left => Refinement::BoundedLeft {
                lower: self.lower.clone(),
                upper: lx,
            },
            Side::Right => Refinement::BoundedRight {
                lower: rx,
                upper: self.upper.clone(),
            },
        })
    }

    /// Whether `x` lies strictly inside the exact bracket
    fn is_interior(&self, x: &Decimal) -> bool {
        let x = x.to_rational();
        *self.lower < x && x < *self.upper
    }

    /// One unit at the finer of `x`'s own scale and the precision target.
    ///
    /// Zero has no meaningful scale of its own, so significant-digit
    /// precision falls back to the target there.
    fn nudge_unit(&self, x: &Decimal) -> Decimal {
        x.with_scale(x.scale().max(self.precision.eps(x)), RoundingMode::Floor)
            .ulp()
    }
}
