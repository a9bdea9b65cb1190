use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::RangeError;

/// A value on the extended line: a finite scalar or one of the two infinities.
///
/// The variant order makes the derived [`Ord`] the expected total order:
/// `-inf < Finite(x) < inf` for every `x`, and each infinity only equals itself.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Point<K> {
    NegInf,
    Finite(K),
    Inf,
}

impl<K> Point<K> {
    pub const NEG_INF: Self = Point::NegInf;
    pub const INF: Self = Point::Inf;

    pub fn is_finite(&self) -> bool {
        matches!(self, Point::Finite(_))
    }

    /// Returns the scalar, or `None` for an infinity.
    pub fn as_finite(&self) -> Option<&K> {
        match self {
            Point::Finite(x) => Some(x),
            _ => None,
        }
    }
}

impl<K> From<K> for Point<K> {
    fn from(value: K) -> Self {
        Point::Finite(value)
    }
}

impl<K> fmt::Display for Point<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Point::NegInf => write!(f, "-inf"),
            Point::Finite(x) => write!(f, "{}", x),
            Point::Inf => write!(f, "inf"),
        }
    }
}

/// Parses `-inf`, `inf` (or `+inf`), or anything `K` itself parses.
impl<K> FromStr for Point<K>
where
    K: FromStr,
{
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "-inf" => Ok(Point::NegInf),
            "inf" | "+inf" => Ok(Point::Inf),
            other => other
                .parse()
                .map(Point::Finite)
                .map_err(|_| RangeError::ParsePoint),
        }
    }
}
