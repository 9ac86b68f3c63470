//! Testing utilities

use fastrand::Rng;
use itertools::Itertools;
use num::{BigInt, BigRational, One, Signed, Zero};

use crate::{Poly, Refinement};

/// Endless stream of rationals `p/q` in `[min, max]` with `1 <= q <= max_den`
pub struct RandStreamRational {
    state: Rng,
    min: i64,
    max: i64,
    max_den: i64,
}

impl RandStreamRational {
    #[must_use]
    pub fn new(seed: u64, min: i64, max: i64, max_den: i64) -> Self {
        assert!(min <= max, "minimum should be smaller or equal to maximum");
        assert!(max_den >= 1, "denominators start at 1");
        Self {
            state: Rng::with_seed(seed),
            min,
            max,
            max_den,
        }
    }
}

impl Iterator for RandStreamRational {
    type Item = BigRational;

    fn next(&mut self) -> Option<Self::Item> {
        let den = self.state.i64(1..=self.max_den);
        let num = self.state.i64(self.min * den..=self.max * den);
        Some(BigRational::new(num.into(), den.into()))
    }
}

/// Endless stream of decimals with at most `max_scale` fractional digits in
/// `[min, max]`, as rationals
pub struct RandStreamDecimal {
    state: Rng,
    min: i64,
    max: i64,
    max_scale: u32,
}

impl RandStreamDecimal {
    #[must_use]
    pub fn new(seed: u64, min: i64, max: i64, max_scale: u32) -> Self {
        assert!(min <= max, "minimum should be smaller or equal to maximum");
        Self {
            state: Rng::with_seed(seed),
            min,
            max,
            max_scale,
        }
    }
}

impl Iterator for RandStreamDecimal {
    type Item = BigRational;

    fn next(&mut self) -> Option<Self::Item> {
        let scale = self.state.u32(0..=self.max_scale);
        let den = 10i64.pow(scale);
        let num = self.state.i64(self.min * den..=self.max * den);
        Some(BigRational::new(num.into(), den.into()))
    }
}

/// The primitive integer polynomial with exactly the given rational roots
#[must_use]
pub fn poly_from_roots(roots: &[BigRational]) -> Poly<BigInt> {
    roots.iter().fold(Poly::one(), |acc, r| {
        // (den * x - num)
        let factor = [-r.numer().clone(), r.denom().clone()];
        let mut out = vec![BigInt::zero(); acc.len_raw() + 1];
        for (i, a) in acc.iter().enumerate() {
            for (j, b) in factor.iter().enumerate() {
                out[i + j] += a * b;
            }
        }
        Poly::from(out)
    })
}

/// Generate one test case with `degree` distinct, known rational roots.
///
/// Returns the polynomial and its roots sorted ascending.
pub fn test_case_roots(
    roots_stream: impl Iterator<Item = BigRational>,
    degree: usize,
) -> (Poly<BigInt>, Vec<BigRational>) {
    let roots = roots_stream
        .unique()
        .take(degree)
        .sorted()
        .collect_vec();
    (poly_from_roots(&roots), roots)
}

/// Open brackets that each isolate one of the sorted, distinct `roots`.
///
/// Neighbouring brackets meet half way between neighbouring roots.
#[must_use]
pub fn isolating_brackets(roots: &[BigRational]) -> Vec<(BigRational, BigRational)> {
    let two = BigRational::from_integer(2.into());
    let mids = roots
        .iter()
        .tuple_windows()
        .map(|(a, b)| (a + b) / &two)
        .collect_vec();
    roots
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let lower = if i == 0 {
                r - BigRational::one()
            } else {
                mids[i - 1].clone()
            };
            let upper = mids.get(i).cloned().unwrap_or_else(|| r + BigRational::one());
            (lower, upper)
        })
        .collect()
}

/// Check that a refinement is consistent with `poly` having a root at `root`
#[must_use]
pub fn check_refinement(poly: &Poly<BigInt>, result: &Refinement, root: &BigRational) -> bool {
    match result {
        Refinement::ExactRoot(x) => x.to_rational() == *root,
        Refinement::OutOfBounds { lower, upper, .. } => lower < root && root < upper,
        _ => {
            let p = poly.to_rational();
            let (ly, ry) = (p.eval(&result.lower()), p.eval(&result.upper()));
            let same_sign =
                (ly.is_positive() && ry.is_positive()) || (ly.is_negative() && ry.is_negative());
            result.contains(root) && !same_sign
        }
    }
}

/// Check that `result` brackets `sqrt(m)`, without computing the square root
#[must_use]
pub fn check_sqrt(result: &Refinement, m: &BigRational) -> bool {
    if result.is_exact() {
        let x = result.lower();
        return &x * &x == *m;
    }
    let (lower, upper) = (result.lower(), result.upper());
    &lower * &lower <= *m && *m <= &upper * &upper
}
