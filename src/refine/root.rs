use num::{BigInt, BigRational};

use super::{Refinement, Refiner};
use crate::{error::Result, Poly, Precision};

/// A real root of an integer polynomial that can be refined repeatedly.
///
/// Every call to [`RootRefinement::refine`] starts from the tightest bracket
/// the previous result proved, so asking for more digits only pays for the
/// new ones.
///
/// ```
/// use qir_roots::{poly, Precision, RootRefinement};
/// use qir_roots::num::BigRational;
///
/// let root = RootRefinement::new(
///     poly![-2, 0, 1],
///     BigRational::from_integer(1.into()),
///     BigRational::from_integer(2.into()),
///     Precision::Scale(3),
/// )
/// .unwrap();
/// assert_eq!(root.approximation().to_string(), "[1.414, 1.415]");
///
/// let root = root.refine(Precision::Scale(8)).unwrap();
/// assert_eq!(root.approximation().to_string(), "[1.41421356, 1.41421357]");
/// ```
#[derive(Clone, Debug)]
pub struct RootRefinement {
    poly: Poly<BigInt>,
    refiner: Refiner,
    approximation: Refinement,
}

impl RootRefinement {
    /// # Errors
    /// See [`Refiner::refine`].
    pub fn new(
        poly: Poly<BigInt>,
        lower: BigRational,
        upper: BigRational,
        precision: Precision,
    ) -> Result<Self> {
        Self::with_refiner(Refiner::new(), poly, lower, upper, precision)
    }

    /// # Errors
    /// See [`Refiner::refine`].
    pub fn with_refiner(
        refiner: Refiner,
        poly: Poly<BigInt>,
        lower: BigRational,
        upper: BigRational,
        precision: Precision,
    ) -> Result<Self> {
        let approximation = refiner.refine(&poly, &lower, &upper, precision)?;
        Ok(Self {
            poly,
            refiner,
            approximation,
        })
    }

    /// Refine again to `precision`, starting from the current result.
    ///
    /// An exact root stays exact. A result that ran out of bounds carries the
    /// bracket it was given, so it is retried from there.
    ///
    /// # Errors
    /// See [`Refiner::refine`].
    pub fn refine(&self, precision: Precision) -> Result<Self> {
        let approximation = match &self.approximation {
            Refinement::ExactRoot(_) => self.approximation.clone(),
            current => self.refiner.refine(
                &self.poly,
                &current.lower(),
                &current.upper(),
                precision,
            )?,
        };
        Ok(Self {
            poly: self.poly.clone(),
            refiner: self.refiner,
            approximation,
        })
    }

    /// # Errors
    /// See [`Refiner::refine`].
    pub fn refine_scale(&self, scale: i64) -> Result<Self> {
        self.refine(Precision::Scale(scale))
    }

    /// # Errors
    /// See [`Refiner::refine`].
    pub fn refine_digits(&self, digits: u64) -> Result<Self> {
        self.refine(Precision::Digits(digits))
    }

    #[must_use]
    pub const fn approximation(&self) -> &Refinement {
        &self.approximation
    }

    #[must_use]
    pub const fn poly(&self) -> &Poly<BigInt> {
        &self.poly
    }

    /// Tightest known lower bound on the root
    #[must_use]
    pub fn lower_bound(&self) -> BigRational {
        self.approximation.lower()
    }

    /// Tightest known upper bound on the root
    #[must_use]
    pub fn upper_bound(&self) -> BigRational {
        self.approximation.upper()
    }
}
