use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::RangeError;
use crate::point::Point;

/// A contiguous span between two [`Point`]s, each side independently
/// inclusive or exclusive.
///
/// A side bounded by an infinity is always stored as inclusive, so
/// `(-inf, 5]` and `[-inf, 5]` are the same range. A range is never empty:
/// a zero-width range must include its single point.
///
/// Ranges that share no point are ordered with `<` and `>`; ranges that
/// overlap are incomparable unless they are equal.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawRangeItem<K>",
        bound(deserialize = "K: Ord + Deserialize<'de>")
    )
)]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RangeItem<K> {
    left: Point<K>,
    right: Point<K>,
    left_excluded: bool,
    right_excluded: bool,
}

impl<K> RangeItem<K> {
    /// Builds a range, normalizing the exclusion flag of any infinite side.
    ///
    /// Fails with [`RangeError::InvalidBounds`] if `left > right`, if `left` is `inf`,
    /// if `right` is `-inf`, or if a zero-width range excludes one of its sides.
    ///
    /// ```
    /// use range_list::{Point, RangeItem};
    ///
    /// let r = RangeItem::<i32>::new(Point::NEG_INF, 5, true, true).unwrap();
    /// assert!(!r.left_excluded());
    /// assert_eq!(r.to_string(), "[-inf, 5)");
    /// assert!(RangeItem::<i32>::new(3, 1, false, false).is_err());
    /// ```
    pub fn new(
        left: impl Into<Point<K>>,
        right: impl Into<Point<K>>,
        left_excluded: bool,
        right_excluded: bool,
    ) -> Result<Self, RangeError>
    where
        K: Ord,
    {
        let left = left.into();
        let right = right.into();
        if left == Point::Inf || right == Point::NegInf || left > right {
            return Err(RangeError::InvalidBounds);
        }

        let range = Self::from_parts(left, right, left_excluded, right_excluded);
        if range.left == range.right && (range.left_excluded || range.right_excluded) {
            return Err(RangeError::InvalidBounds);
        }
        Ok(range)
    }

    /// `[left, right]`
    pub fn closed(
        left: impl Into<Point<K>>,
        right: impl Into<Point<K>>,
    ) -> Result<Self, RangeError>
    where
        K: Ord,
    {
        Self::new(left, right, false, false)
    }

    /// `(left, right)`
    pub fn open(
        left: impl Into<Point<K>>,
        right: impl Into<Point<K>>,
    ) -> Result<Self, RangeError>
    where
        K: Ord,
    {
        Self::new(left, right, true, true)
    }

    /// The zero-width range `[value, value]`.
    pub fn point(value: K) -> Self
    where
        K: Clone,
    {
        Self::from_parts(
            Point::Finite(value.clone()),
            Point::Finite(value),
            false,
            false,
        )
    }

    /// The whole line, `[-inf, inf]`.
    pub fn unbounded() -> Self {
        Self::from_parts(Point::NegInf, Point::Inf, false, false)
    }

    /// Assembles a range whose bounds are already known to be ordered and non-empty.
    pub(crate) fn from_parts(
        left: Point<K>,
        right: Point<K>,
        left_excluded: bool,
        right_excluded: bool,
    ) -> Self {
        let left_excluded = left_excluded && !matches!(left, Point::NegInf);
        let right_excluded = right_excluded && !matches!(right, Point::Inf);
        RangeItem {
            left,
            right,
            left_excluded,
            right_excluded,
        }
    }

    pub fn left(&self) -> &Point<K> {
        &self.left
    }

    pub fn right(&self) -> &Point<K> {
        &self.right
    }

    pub fn left_excluded(&self) -> bool {
        self.left_excluded
    }

    pub fn right_excluded(&self) -> bool {
        self.right_excluded
    }
}

impl<K> RangeItem<K>
where
    K: Ord,
{
    /// Returns true if the range covers a single point.
    pub fn is_point(&self) -> bool {
        self.left == self.right
    }

    /// Returns true if `point` lies within the range, honoring excluded sides.
    ///
    /// An infinity is only contained by a range unbounded on that side.
    pub fn contains_point(&self, point: &Point<K>) -> bool {
        let after_left = match self.left.cmp(point) {
            Ordering::Less => true,
            Ordering::Equal => !self.left_excluded,
            Ordering::Greater => false,
        };
        let before_right = match self.right.cmp(point) {
            Ordering::Greater => true,
            Ordering::Equal => !self.right_excluded,
            Ordering::Less => false,
        };

        after_left && before_right
    }

    /// Returns true if every point of `other` is also a point of `self`.
    pub fn contains_range(&self, other: &RangeItem<K>) -> bool {
        let left_ok = match self.left.cmp(&other.left) {
            Ordering::Less => true,
            Ordering::Equal => !self.left_excluded || other.left_excluded,
            Ordering::Greater => false,
        };
        let right_ok = match self.right.cmp(&other.right) {
            Ordering::Greater => true,
            Ordering::Equal => !self.right_excluded || other.right_excluded,
            Ordering::Less => false,
        };

        left_ok && right_ok
    }

    /// Returns true if the two ranges share at least one point.
    ///
    /// Ranges touching at a bound only intersect when both include it.
    pub fn intersects_with(&self, other: &RangeItem<K>) -> bool {
        !self.precedes(other) && !other.precedes(self)
    }

    /// Returns true if every point of `self` is less than every point of `other`.
    pub fn precedes(&self, other: &RangeItem<K>) -> bool {
        match self.right.cmp(&other.left) {
            Ordering::Less => true,
            Ordering::Equal => self.right_excluded || other.left_excluded,
            Ordering::Greater => false,
        }
    }

    /// Returns true if every point of `self` is greater than every point of `other`.
    pub fn follows(&self, other: &RangeItem<K>) -> bool {
        other.precedes(self)
    }

    /// Returns true if the ranges meet at a bound that exactly one of them includes,
    /// as `[0, 1)` and `[1, 2]` do. Such ranges share no point yet leave no gap.
    pub fn adjoins(&self, other: &RangeItem<K>) -> bool {
        let meets =
            |a: &Self, b: &Self| a.right == b.left && a.right_excluded != b.left_excluded;
        meets(self, other) || meets(other, self)
    }

    /// Returns true if the union of the two ranges is contiguous.
    pub fn merges_with(&self, other: &RangeItem<K>) -> bool {
        !self.gap_before(other) && !other.gap_before(self)
    }

    /// Returns true if `self` lies before `other` with at least one point
    /// between them that neither covers.
    pub(crate) fn gap_before(&self, other: &RangeItem<K>) -> bool {
        match self.right.cmp(&other.left) {
            Ordering::Less => true,
            Ordering::Equal => self.right_excluded && other.left_excluded,
            Ordering::Greater => false,
        }
    }

    /// Returns the smallest range covering both, or `None` if a gap separates them.
    ///
    /// When both ranges end on the same value with different exclusion flags,
    /// the inclusive side wins.
    ///
    /// ```
    /// use range_list::RangeItem;
    ///
    /// let a = RangeItem::<i32>::new(0, 2, false, true).unwrap();
    /// let b = RangeItem::<i32>::closed(2, 3).unwrap();
    /// assert_eq!(a.union(&b), Some(RangeItem::closed(0, 3).unwrap()));
    /// ```
    pub fn union(&self, other: &RangeItem<K>) -> Option<RangeItem<K>>
    where
        K: Clone,
    {
        if !self.merges_with(other) {
            return None;
        }

        let (left, left_excluded) = match self.left.cmp(&other.left) {
            Ordering::Less => (&self.left, self.left_excluded),
            Ordering::Greater => (&other.left, other.left_excluded),
            Ordering::Equal => (&self.left, self.left_excluded && other.left_excluded),
        };
        let (right, right_excluded) = match self.right.cmp(&other.right) {
            Ordering::Greater => (&self.right, self.right_excluded),
            Ordering::Less => (&other.right, other.right_excluded),
            Ordering::Equal => (&self.right, self.right_excluded && other.right_excluded),
        };

        Some(Self::from_parts(
            left.clone(),
            right.clone(),
            left_excluded,
            right_excluded,
        ))
    }
}

impl<K> PartialOrd for RangeItem<K>
where
    K: Ord,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.precedes(other) {
            Some(Ordering::Less)
        } else if other.precedes(self) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl<K> PartialEq<Point<K>> for RangeItem<K>
where
    K: Ord,
{
    fn eq(&self, other: &Point<K>) -> bool {
        self.is_point() && self.left == *other
    }
}

impl<K> PartialOrd<Point<K>> for RangeItem<K>
where
    K: Ord,
{
    fn partial_cmp(&self, other: &Point<K>) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.contains_point(other) {
            None
        } else if *other < self.left || (*other == self.left && self.left_excluded) {
            Some(Ordering::Greater)
        } else {
            Some(Ordering::Less)
        }
    }
}

impl<K> PartialEq<RangeItem<K>> for Point<K>
where
    K: Ord,
{
    fn eq(&self, other: &RangeItem<K>) -> bool {
        other == self
    }
}

impl<K> PartialOrd<RangeItem<K>> for Point<K>
where
    K: Ord,
{
    fn partial_cmp(&self, other: &RangeItem<K>) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
    }
}

impl<K> fmt::Display for RangeItem<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let open = if self.left_excluded { '(' } else { '[' };
        let close = if self.right_excluded { ')' } else { ']' };
        write!(f, "{}{}, {}{}", open, self.left, self.right, close)
    }
}

/// Wire shape of a [`RangeItem`], validated on the way in.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawRangeItem<K> {
    left: Point<K>,
    right: Point<K>,
    left_excluded: bool,
    right_excluded: bool,
}

#[cfg(feature = "serde")]
impl<K> TryFrom<RawRangeItem<K>> for RangeItem<K>
where
    K: Ord,
{
    type Error = RangeError;

    fn try_from(raw: RawRangeItem<K>) -> Result<Self, Self::Error> {
        RangeItem::new(raw.left, raw.right, raw.left_excluded, raw.right_excluded)
    }
}
