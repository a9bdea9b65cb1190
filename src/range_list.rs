use std::fmt;
use std::slice;

use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::RangeError;
use crate::point::Point;
use crate::range_item::RangeItem;

/// Something that can be inserted into, or looked up in, a [`RangeList`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Item<K> {
    Point(Point<K>),
    Range(RangeItem<K>),
}

impl<K> From<Point<K>> for Item<K> {
    fn from(point: Point<K>) -> Self {
        Item::Point(point)
    }
}

impl<K> From<RangeItem<K>> for Item<K> {
    fn from(range: RangeItem<K>) -> Self {
        Item::Range(range)
    }
}

/// A sorted list of disjoint ranges.
///
/// The list always holds the fewest ranges describing its points: ranges are
/// sorted by their left bound, never overlap, and two neighbours are always
/// separated by at least one point that neither covers.
///
/// Inserting a range merges it with every stored range it overlaps or adjoins.
/// Where any of the merged ranges excludes one of its bounds, that exact point
/// is excluded from the result, even if another range covered it before. The
/// one exception is the range being inserted: when it is a single point, that
/// point is always included.
///
/// ```
/// use range_list::{Point, RangeItem, RangeList};
///
/// let mut list = RangeList::new();
/// list.insert(RangeItem::<i32>::new(1, 4, false, true).unwrap()).unwrap();
/// list.insert(RangeItem::<i32>::new(4, 5, true, false).unwrap()).unwrap();
/// assert_eq!(list.to_string(), "[1, 4), (4, 5]");
///
/// list.insert(Point::from(4)).unwrap();
/// assert_eq!(list.items(), [RangeItem::<i32>::closed(1, 5).unwrap()]);
/// assert!(list.contains_point(&Point::from(4)));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        from = "Vec<RangeItem<K>>",
        into = "Vec<RangeItem<K>>",
        bound(
            serialize = "K: Clone + Serialize",
            deserialize = "K: Ord + Clone + Deserialize<'de>"
        )
    )
)]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RangeList<K> {
    items: Vec<RangeItem<K>>,
}

impl<K> Default for RangeList<K> {
    fn default() -> Self {
        RangeList { items: Vec::new() }
    }
}

impl<K> RangeList<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored ranges, in ascending order.
    pub fn items(&self) -> &[RangeItem<K>] {
        &self.items
    }

    pub fn iter(&self) -> slice::Iter<'_, RangeItem<K>> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<K> RangeList<K>
where
    K: Ord + Clone,
{
    /// Inserts a range or a finite point, merging it with the ranges it touches.
    ///
    /// Fails with [`RangeError::InfinitePoint`] when given `-inf` or `inf` on its own;
    /// the list is left untouched in that case.
    pub fn insert(&mut self, item: impl Into<Item<K>>) -> Result<(), RangeError> {
        let range = match item.into() {
            Item::Range(range) => range,
            Item::Point(Point::Finite(value)) => RangeItem::point(value),
            Item::Point(_) => {
                debug!("rejected insertion of an infinite point");
                return Err(RangeError::InfinitePoint);
            }
        };
        self.insert_range(range);
        Ok(())
    }

    fn insert_range(&mut self, range: RangeItem<K>) {
        // Stored ranges touching `range` form one contiguous window.
        let start = self.items.partition_point(|item| item.gap_before(&range));
        let end = start
            + self.items[start..].partition_point(|item| !range.gap_before(item));

        if start == end {
            trace!("inserting disjoint range at index {}", start);
            self.items.insert(start, range);
            return;
        }

        let mut contributors: Vec<RangeItem<K>> = self.items.drain(start..end).collect();
        contributors.push(range);
        let merged = merge(&contributors);
        trace!(
            "merged {} contributor(s) at index {} into {} range(s)",
            contributors.len(),
            start,
            merged.len()
        );
        self.items.splice(start..start, merged);
    }

    /// Returns true if `point` is covered by one of the stored ranges.
    ///
    /// Runs in `O(log n)`.
    pub fn contains_point(&self, point: &Point<K>) -> bool {
        let idx = self.items.partition_point(|item| item.left() <= point);
        idx > 0 && self.items[idx - 1].contains_point(point)
    }

    /// Returns true if a single stored range covers all of `range`.
    ///
    /// A range spread over several stored ranges is not contained, since
    /// neighbours are always separated by an uncovered point.
    pub fn contains_range(&self, range: &RangeItem<K>) -> bool {
        let idx = self
            .items
            .partition_point(|item| item.left() <= range.left());
        idx > 0 && self.items[idx - 1].contains_range(range)
    }

    /// Dispatches to [`RangeList::contains_point`] or [`RangeList::contains_range`].
    pub fn contains(&self, item: impl Into<Item<K>>) -> bool {
        match item.into() {
            Item::Point(point) => self.contains_point(&point),
            Item::Range(range) => self.contains_range(&range),
        }
    }
}

/// Resolves a group of touching ranges, the last of which is the one being
/// inserted, into the fewest disjoint ranges.
///
/// Every distinct bound is a breakpoint. A breakpoint is kept if the inserted
/// range is that single point, or if no contributor excludes it. The open span
/// between two neighbouring breakpoints is kept if a contributor spans it.
fn merge<K>(contributors: &[RangeItem<K>]) -> Vec<RangeItem<K>>
where
    K: Ord + Clone,
{
    let inserted = match contributors.last() {
        Some(inserted) => inserted,
        None => return Vec::new(),
    };

    let mut breakpoints: Vec<&Point<K>> = contributors
        .iter()
        .flat_map(|range| [range.left(), range.right()])
        .collect();
    breakpoints.sort();
    breakpoints.dedup();

    let keeps_point = |point: &Point<K>| {
        if inserted.is_point() && inserted.left() == point {
            return true;
        }
        let excluded = contributors.iter().any(|range| {
            (range.left() == point && range.left_excluded())
                || (range.right() == point && range.right_excluded())
        });
        !excluded && contributors.iter().any(|range| range.contains_point(point))
    };
    let keeps_span = |from: &Point<K>, to: &Point<K>| {
        contributors
            .iter()
            .any(|range| range.left() <= from && range.right() >= to)
    };

    let mut merged = Vec::new();
    // Left bound and exclusion of the range being assembled.
    let mut open: Option<(&Point<K>, bool)> = None;
    for (i, &point) in breakpoints.iter().enumerate() {
        if keeps_point(point) {
            if open.is_none() {
                open = Some((point, false));
            }
        } else if let Some((left, left_excluded)) = open.take() {
            merged.push(RangeItem::from_parts(
                left.clone(),
                point.clone(),
                left_excluded,
                true,
            ));
        }

        match breakpoints.get(i + 1) {
            Some(&next) if keeps_span(point, next) => {
                if open.is_none() {
                    open = Some((point, true));
                }
            }
            _ => {
                if let Some((left, left_excluded)) = open.take() {
                    merged.push(RangeItem::from_parts(
                        left.clone(),
                        point.clone(),
                        left_excluded,
                        false,
                    ));
                }
            }
        }
    }

    merged
}

impl<K> FromIterator<RangeItem<K>> for RangeList<K>
where
    K: Ord + Clone,
{
    /// Inserts every range in turn, so any input order yields a valid list.
    fn from_iter<I: IntoIterator<Item = RangeItem<K>>>(iter: I) -> Self {
        let mut list = RangeList::new();
        for range in iter {
            list.insert_range(range);
        }
        list
    }
}

impl<K> From<Vec<RangeItem<K>>> for RangeList<K>
where
    K: Ord + Clone,
{
    fn from(ranges: Vec<RangeItem<K>>) -> Self {
        ranges.into_iter().collect()
    }
}

impl<K> From<RangeList<K>> for Vec<RangeItem<K>> {
    fn from(list: RangeList<K>) -> Self {
        list.items
    }
}

impl<K> IntoIterator for RangeList<K> {
    type Item = RangeItem<K>;
    type IntoIter = std::vec::IntoIter<RangeItem<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, K> IntoIterator for &'a RangeList<K> {
    type Item = &'a RangeItem<K>;
    type IntoIter = slice::Iter<'a, RangeItem<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<K> fmt::Display for RangeList<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, range) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", range)?;
        }
        Ok(())
    }
}
