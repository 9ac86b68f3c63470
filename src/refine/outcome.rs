use std::fmt;

use num::BigRational;

use crate::Decimal;

/// Where a refined root lies, relative to the decimal grid of the requested
/// precision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Refinement {
    /// The polynomial vanishes exactly at this decimal
    ExactRoot(Decimal),

    /// The root lies in `[lower, upper]`, one unit in the last requested
    /// place apart
    Bounded { lower: Decimal, upper: Decimal },

    /// Rounding the exact lower bound up overshot the root, which lies
    /// between the exact `lower` and the decimal `upper`
    BoundedLeft { lower: BigRational, upper: Decimal },

    /// Rounding the exact upper bound down overshot the root, which lies
    /// between the decimal `lower` and the exact `upper`
    BoundedRight { lower: Decimal, upper: BigRational },

    /// No decimal at the requested precision could be confirmed to lie in
    /// the exact bracket. `approximation` is a best effort only, the caller
    /// should ask for more precision or isolate a tighter bracket.
    OutOfBounds {
        lower: BigRational,
        upper: BigRational,
        approximation: Decimal,
    },
}

impl Refinement {
    /// A single best-guess decimal for callers that only need a point
    /// estimate.
    #[must_use]
    pub const fn approximation(&self) -> &Decimal {
        match self {
            Self::ExactRoot(root) => root,
            Self::Bounded { lower, .. } | Self::BoundedRight { lower, .. } => lower,
            Self::BoundedLeft { upper, .. } => upper,
            Self::OutOfBounds { approximation, .. } => approximation,
        }
    }

    #[must_use]
    pub const fn is_exact(&self) -> bool {
        matches!(self, Self::ExactRoot(_))
    }

    #[must_use]
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }

    /// The lower end of the bracket as an exact rational
    #[must_use]
    pub fn lower(&self) -> BigRational {
        match self {
            Self::ExactRoot(x) | Self::Bounded { lower: x, .. } | Self::BoundedRight { lower: x, .. } => {
                x.to_rational()
            }
            Self::BoundedLeft { lower, .. } | Self::OutOfBounds { lower, .. } => lower.clone(),
        }
    }

    /// The upper end of the bracket as an exact rational
    #[must_use]
    pub fn upper(&self) -> BigRational {
        match self {
            Self::ExactRoot(x) | Self::Bounded { upper: x, .. } | Self::BoundedLeft { upper: x, .. } => {
                x.to_rational()
            }
            Self::BoundedRight { upper, .. } | Self::OutOfBounds { upper, .. } => upper.clone(),
        }
    }

    /// Whether `x` lies in the closed bracket described by this result
    #[must_use]
    pub fn contains(&self, x: &BigRational) -> bool {
        self.lower() <= *x && *x <= self.upper()
    }
}

impl fmt::Display for Refinement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactRoot(root) => write!(f, "{root}"),
            Self::Bounded { lower, upper } => write!(f, "[{lower}, {upper}]"),
            Self::BoundedLeft { lower, upper } => write!(f, "({lower}, {upper}]"),
            Self::BoundedRight { lower, upper } => write!(f, "[{lower}, {upper})"),
            Self::OutOfBounds {
                lower,
                upper,
                approximation,
            } => write!(f, "~{approximation} (out of bounds ({lower}, {upper}))"),
        }
    }
}
