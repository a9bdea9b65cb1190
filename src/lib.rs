//! A sorted list of disjoint ranges ([`RangeList`]) over the extended line,
//! where each range ([`RangeItem`]) has inclusive or exclusive bounds and may be
//! unbounded on either side through the [`Point::NEG_INF`] and [`Point::INF`]
//! sentinels.
//!
//! Inserting a range or a single point merges it with every stored range it
//! overlaps or adjoins, keeping the list in its minimal form. The list answers
//! "is this point covered?" in `O(log n)`, and "is this range covered by a
//! single stored range?" just as fast.
//!
//! Bounds explicitly excluded by any merged range stay excluded, so inserting
//! `(2, 5)` over `[0, 10]` leaves `[0, 2), (2, 5), (5, 10]`. A single point
//! inserted into such a hole fills it again.
//!
//! Any type satisfying the [`Ord`] trait can be used as the scalar.
//!
//! ```
//! use range_list::{Point, RangeItem, RangeList};
//!
//! let mut list = RangeList::new();
//! list.insert(RangeItem::<i32>::closed(0, 10).unwrap()).unwrap();
//! list.insert(RangeItem::<i32>::open(2, 5).unwrap()).unwrap();
//! assert_eq!(list.to_string(), "[0, 2), (2, 5), (5, 10]");
//!
//! assert!(!list.contains_point(&Point::from(2)));
//! list.insert(Point::from(2)).unwrap();
//! assert!(list.contains_point(&Point::from(2)));
//! ```

mod error;
/// Points of the extended line.
pub mod point;
/// Single ranges and the boundary algebra between them.
pub mod range_item;
/// The merging list of disjoint ranges.
pub mod range_list;

pub use error::RangeError;
pub use point::Point;
pub use range_item::RangeItem;
pub use range_list::{Item, RangeList};
