use num::BigRational;
use thiserror::Error;

use crate::Refinement;

/// The top-level error type for this crate.
///
/// Numeric degeneracies met while refining (zero evaluations, overshoot,
/// exhausted precision) are never errors, they are variants of
/// [`Refinement`]. Errors are reserved for inputs that can be rejected for
/// free and for iteration limits set by the caller.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("lower bound {lower} is not below upper bound {upper}")]
    InvalidBracket {
        lower: BigRational,
        upper: BigRational,
    },

    #[error("polynomial of degree {0} has no root to refine")]
    Degenerate(i64),

    #[error("significant digits must be between 1 and i64::MAX / 4")]
    InvalidPrecision,

    /// Use this for when the user-provided `max_iter` is reached. The best
    /// bracket found so far is returned with the error.
    #[error("did not converge within the given number of iterations")]
    NoConverge(Refinement),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
