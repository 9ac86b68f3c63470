#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
//! Refinement of isolated real roots of integer polynomials.
//!
//! Given a polynomial with integer coefficients and an open interval with
//! rational endpoints that contains exactly one of its roots, this crate
//! narrows the interval down to decimal endpoints at a requested precision,
//! using quadratic interval refinement (QIR).
//!
//! ```
//! use qir_roots::{poly, refine_scale, Refinement};
//! use qir_roots::num::BigRational;
//!
//! let lower = BigRational::from_integer(1.into());
//! let upper = BigRational::from_integer(2.into());
//! let root = refine_scale(&poly![-2, 0, 1], &lower, &upper, 10).unwrap();
//! assert_eq!(root.to_string(), "[1.4142135623, 1.4142135624]");
//! assert!(!root.is_exact());
//! ```

/// Build an integer polynomial from its coefficients, lowest degree first.
///
/// ```
/// use qir_roots::poly;
///
/// let p = poly![-2, 0, 1];
/// assert_eq!(p.degree(), 2);
/// ```
#[macro_export]
macro_rules! poly {
    ($($x:expr),* $(,)?) => {
        $crate::Poly::new(&[$($crate::num::BigInt::from($x)),*])
    };
}

pub use num;

mod decimal;
pub use decimal::{Decimal, ParseDecimalError, RoundingMode};

mod error;
pub use error::{Error, Result};

mod eval;
pub use eval::{DecimalEvaluator, Side};

mod poly;
pub use poly::{IntPoly, Poly, RatPoly};

mod precision;
pub use precision::Precision;

pub mod refine;
pub use refine::{
    refine_digits, refine_scale, Refinement, Refiner, RootRefinement, DEFAULT_MAX_NUDGES,
};

mod scalar;
pub use scalar::Scalar;

mod util;

#[doc(hidden)]
pub use util::__testing;
