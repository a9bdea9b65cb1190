use std::fmt;

/// Precondition violations reported by [`crate::RangeItem`] construction,
/// [`crate::RangeList::insert`] and [`crate::Point`] parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeError {
    /// The bounds don't describe a non-empty range: `left > right`, `left` is `inf`,
    /// `right` is `-inf`, or a zero-width range excludes one of its sides.
    InvalidBounds,
    /// An infinite point was inserted on its own. Infinities can only bound a range.
    InfinitePoint,
    /// The text is neither `-inf`, `inf`, nor a valid scalar.
    ParsePoint,
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::InvalidBounds => "invalid range bounds".fmt(f),
            RangeError::InfinitePoint => "an infinite point cannot be inserted on its own".fmt(f),
            RangeError::ParsePoint => "invalid point literal".fmt(f),
        }
    }
}

impl std::error::Error for RangeError {}
