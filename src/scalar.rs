use num::Num;

/// Coefficient types a [`crate::Poly`] can be built over.
///
/// Polynomials handed to the refinement engine use [`num::BigInt`], the exact
/// oracle works over [`num::BigRational`], and primitive integers are
/// convenient in tests.
pub trait Scalar: Num + Clone + core::fmt::Debug {}

impl<T: Num + Clone + core::fmt::Debug> Scalar for T {}
