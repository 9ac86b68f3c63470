//! Quadratic interval refinement of an isolated real root.
//!
//! This follows "Quadratic Interval Refinement for Real Roots" by John Abbott,
//! specialised to decimal endpoints: exact rational arithmetic keeps the
//! bracket honest, decimals of growing scale keep it cheap.
//!
//! The refinement runs as a small state machine:
//!
//! - `Adjusting`: round the exact bracket to decimals and deal with zero
//!   evaluations and overshoot at the rounded endpoints.
//! - `MainLoop`: secant step on a grid of `10^n` cells, `n` doubles on every
//!   successful step.
//! - `Stalled`: the secant step failed, evaluate a five cell grid instead.
//! - `Bisecting`: pick the sub-bracket the samples found a sign change in.
//! - `Done`: a [`Refinement`] is ready.

use num::{BigInt, BigRational};

use crate::{
    error::{Error, Result},
    eval::DecimalEvaluator,
    util::{self, doc_macros::errors_no_converge},
    Decimal, Poly, Precision,
};

mod adjust;
mod outcome;
mod qir;
mod root;
mod stall;

pub use outcome::Refinement;
pub use root::RootRefinement;

/// How many times an endpoint that lands exactly on a root at the exact
/// bound may be moved inwards before giving up
pub const DEFAULT_MAX_NUDGES: usize = 16;

/// Configurable root refinement.
///
/// ```
/// use qir_roots::{poly, Precision, Refinement, Refiner};
/// use qir_roots::num::BigRational;
///
/// let p = poly![-2, 0, 1];
/// let lower = BigRational::from_integer(1.into());
/// let upper = BigRational::from_integer(2.into());
/// let root = Refiner::new()
///     .with_max_iter(Some(100))
///     .refine(&p, &lower, &upper, Precision::Scale(5))
///     .unwrap();
/// assert_eq!(root.to_string(), "[1.41421, 1.41422]");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Refiner {
    max_iter: Option<usize>,
    max_nudges: usize,
}

impl Default for Refiner {
    fn default() -> Self {
        Self::new()
    }
}

impl Refiner {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_iter: None,
            max_nudges: DEFAULT_MAX_NUDGES,
        }
    }

    /// Limit the number of state transitions. `None` means no limit, the
    /// refinement always terminates on its own.
    #[must_use]
    pub const fn with_max_iter(mut self, max_iter: Option<usize>) -> Self {
        self.max_iter = max_iter;
        self
    }

    #[must_use]
    pub const fn with_max_nudges(mut self, max_nudges: usize) -> Self {
        self.max_nudges = max_nudges;
        self
    }

    /// Refine the single root of `poly` in the open interval `(lower, upper)`.
    ///
    /// That there is exactly one root in the interval is not checked, it is
    /// as expensive as the refinement itself. Breaking that promise gives
    /// meaningless results, not an error.
    ///
    /// # Errors
    /// - `InvalidBracket`: `lower` is not below `upper`
    /// - `Degenerate`: `poly` is constant
    /// - `InvalidPrecision`: zero or more than `i64::MAX / 4` significant
    ///   digits were asked for
    #[doc = errors_no_converge!()]
    pub fn refine(
        &self,
        poly: &Poly<BigInt>,
        lower: &BigRational,
        upper: &BigRational,
        precision: Precision,
    ) -> Result<Refinement> {
        log::trace!("starting with arguments: {{poly: \"{poly}\", lower: {lower}, upper: {upper}, precision: {precision:?}}}");

        if lower >= upper {
            return Err(Error::InvalidBracket {
                lower: lower.clone(),
                upper: upper.clone(),
            });
        }
        if poly.degree() < 1 {
            return Err(Error::Degenerate(poly.degree()));
        }
        if !precision.is_valid() {
            return Err(Error::InvalidPrecision);
        }

        let engine = Engine {
            eval: DecimalEvaluator::new(poly),
            lower,
            upper,
            precision,
            max_nudges: self.max_nudges,
        };

        let mut state = engine.bootstrap();
        for i in util::iterator::saturating_counter() {
            state = match state {
                State::Done(refinement) => {
                    log::trace!("done after {i} steps: {refinement}");
                    return Ok(refinement);
                }
                state if self.max_iter.is_some_and(|max| i >= max) => {
                    let best = engine.best_effort(&state);
                    log::trace!("did not converge {{best: {best}, poly: {poly}}}");
                    return Err(Error::NoConverge(best));
                }
                State::Adjusting { lx, rx, nudges } => engine.adjust(lx, rx, nudges),
                State::MainLoop { bracket, n } => engine.main_loop(bracket, n),
                State::Stalled { bracket, n } => engine.stalled(bracket, n),
                State::Bisecting { samples, n } => stall::bisect(samples, n)?,
            };
        }
        unreachable!()
    }
}

/// Refine to a fixed number of decimal places.
///
/// # Errors
/// See [`Refiner::refine`].
pub fn refine_scale(
    poly: &Poly<BigInt>,
    lower: &BigRational,
    upper: &BigRational,
    scale: i64,
) -> Result<Refinement> {
    Refiner::new().refine(poly, lower, upper, Precision::Scale(scale))
}

/// Refine to a number of significant digits.
///
/// # Errors
/// See [`Refiner::refine`].
pub fn refine_digits(
    poly: &Poly<BigInt>,
    lower: &BigRational,
    upper: &BigRational,
    digits: u64,
) -> Result<Refinement> {
    Refiner::new().refine(poly, lower, upper, Precision::Digits(digits))
}

/// Decimal endpoints whose evaluations have strictly opposite signs
#[derive(Clone, Debug)]
struct Bracket {
    lx: Decimal,
    ly: Decimal,
    rx: Decimal,
    ry: Decimal,
}

#[derive(Debug)]
enum State {
    Adjusting {
        lx: Decimal,
        rx: Decimal,
        nudges: usize,
    },
    MainLoop {
        bracket: Bracket,
        n: u32,
    },
    Stalled {
        bracket: Bracket,
        n: u32,
    },
    Bisecting {
        samples: Vec<(Decimal, Decimal)>,
        n: u32,
    },
    Done(Refinement),
}

/// Everything that stays fixed during one refinement
struct Engine<'a> {
    eval: DecimalEvaluator,
    lower: &'a BigRational,
    upper: &'a BigRational,
    precision: Precision,
    max_nudges: usize,
}

impl Engine<'_> {
    fn out_of_bounds(&self) -> Refinement {
        Refinement::OutOfBounds {
            lower: self.lower.clone(),
            upper: self.upper.clone(),
            approximation: self.precision.midpoint(self.lower, self.upper),
        }
    }

    /// The tightest bracket known in `state`
    fn best_effort(&self, state: &State) -> Refinement {
        match state {
            State::MainLoop { bracket, .. } | State::Stalled { bracket, .. } => Refinement::Bounded {
                lower: bracket.lx.clone(),
                upper: bracket.rx.clone(),
            },
            State::Bisecting { samples, .. } => match (samples.first(), samples.last()) {
                (Some((lower, _)), Some((upper, _))) => Refinement::Bounded {
                    lower: lower.clone(),
                    upper: upper.clone(),
                },
                _ => self.out_of_bounds(),
            },
            State::Adjusting { .. } => self.out_of_bounds(),
            State::Done(refinement) => refinement.clone(),
        }
    }
}
