//! The `Correlation` result type.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Numeric stand-in for an undefined correlation.
///
/// Lower than any valid correlation, which lies in [-1, 1].
pub const SENTINEL_SCORE: f64 = -2.0;

/// Why two profiles could not be correlated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Incomparable {
    /// The two users rated no item in common
    NoSharedItems,
    /// At least one user gave every shared item the same rating
    ZeroVariance,
}

/// Result of comparing two rating profiles.
///
/// Ordering: every `Undefined` sorts below every `Defined`, and two
/// `Undefined` values compare equal regardless of their reason. Equality
/// follows the same rule; use `reason()` to tell undefined results apart.
#[derive(Debug, Clone, Copy, Serialize)]
pub enum Correlation {
    /// A correlation in [-1, 1], rounded to two decimals
    Defined(f64),
    Undefined(Incomparable),
}

impl Correlation {
    /// Numeric view of the correlation: the value itself, or `-2.0` when undefined
    pub fn score(&self) -> f64 {
        match self {
            Correlation::Defined(value) => *value,
            Correlation::Undefined(_) => SENTINEL_SCORE,
        }
    }

    /// Map the score into a neighbor weight: `(score + 1) / 2`.
    ///
    /// Defined correlations land in [0, 1]; an undefined one maps to `-0.5`.
    pub fn weight(&self) -> f64 {
        (self.score() + 1.0) / 2.0
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Correlation::Defined(_))
    }

    /// The correlation value, if defined
    pub fn value(&self) -> Option<f64> {
        match self {
            Correlation::Defined(value) => Some(*value),
            Correlation::Undefined(_) => None,
        }
    }

    /// Why the correlation is undefined, if it is
    pub fn reason(&self) -> Option<Incomparable> {
        match self {
            Correlation::Defined(_) => None,
            Correlation::Undefined(reason) => Some(*reason),
        }
    }
}

impl PartialEq for Correlation {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Correlation::Defined(a), Correlation::Defined(b)) => a == b,
            (Correlation::Undefined(_), Correlation::Undefined(_)) => true,
            _ => false,
        }
    }
}

impl PartialOrd for Correlation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Correlation::Defined(a), Correlation::Defined(b)) => a.partial_cmp(b),
            (Correlation::Defined(_), Correlation::Undefined(_)) => Some(Ordering::Greater),
            (Correlation::Undefined(_), Correlation::Defined(_)) => Some(Ordering::Less),
            (Correlation::Undefined(_), Correlation::Undefined(_)) => Some(Ordering::Equal),
        }
    }
}

impl fmt::Display for Correlation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Correlation::Defined(value) => write!(f, "{:.2}", value),
            Correlation::Undefined(Incomparable::NoSharedItems) => {
                write!(f, "undefined (no shared items)")
            }
            Correlation::Undefined(Incomparable::ZeroVariance) => {
                write!(f, "undefined (zero variance)")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined_sorts_below_defined() {
        let undefined = Correlation::Undefined(Incomparable::ZeroVariance);

        assert!(undefined < Correlation::Defined(-1.0));
        assert!(undefined < Correlation::Defined(f64::MIN));
        assert!(Correlation::Defined(-1.0) < Correlation::Defined(0.5));
        assert_eq!(
            undefined.partial_cmp(&Correlation::Undefined(Incomparable::NoSharedItems)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn test_score_and_weight() {
        assert_eq!(Correlation::Defined(1.0).weight(), 1.0);
        assert_eq!(Correlation::Defined(-1.0).weight(), 0.0);
        assert_eq!(Correlation::Defined(0.5).score(), 0.5);

        let undefined = Correlation::Undefined(Incomparable::NoSharedItems);
        assert_eq!(undefined.score(), SENTINEL_SCORE);
        assert_eq!(undefined.weight(), -0.5);
        assert_eq!(undefined.value(), None);
        assert_eq!(undefined.reason(), Some(Incomparable::NoSharedItems));
        assert_eq!(Correlation::Defined(0.2).reason(), None);
    }

    #[test]
    fn test_equality_agrees_with_ordering() {
        let no_shared = Correlation::Undefined(Incomparable::NoSharedItems);
        let zero_variance = Correlation::Undefined(Incomparable::ZeroVariance);

        assert_eq!(no_shared, zero_variance);
        assert_eq!(no_shared.partial_cmp(&zero_variance), Some(Ordering::Equal));
        assert_ne!(no_shared, Correlation::Defined(-2.0));
        assert_ne!(Correlation::Defined(0.5), Correlation::Defined(0.51));
    }
}
