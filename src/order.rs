//! Point orderings used by the hull algorithms.
//!
//! Every ordering is a plain value holding whatever context it needs (a
//! pivot, a line) next to a comparison function. Pass them to the sorting and
//! selection routines through a closure:
//!
//! ```rust
//! # use planar_hull::algorithms::heap_sort::heap_sort_by;
//! # use planar_hull::data::Point;
//! # use planar_hull::order::XOrder;
//! let mut pts = vec![Point::new([2, 0]), Point::new([1, 5]), Point::new([1, 2])];
//! heap_sort_by(&mut pts, |a, b| XOrder.compare(a, b));
//! assert_eq!(pts, vec![Point::new([1, 2]), Point::new([1, 5]), Point::new([2, 0])]);
//! ```
use std::cmp::Ordering;

use crate::data::{Line, Point, Side};

/// By y-coordinate, then x-coordinate. Same as `Point`'s `Ord`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalOrder;

impl NaturalOrder {
  pub fn compare(&self, a: &Point, b: &Point) -> Ordering {
    a.cmp(b)
  }
}

/// By x-coordinate, then y-coordinate.
#[derive(Debug, Clone, Copy, Default)]
pub struct XOrder;

impl XOrder {
  pub fn compare(&self, a: &Point, b: &Point) -> Ordering {
    a.x_coord()
      .cmp(&b.x_coord())
      .then_with(|| a.y_coord().cmp(&b.y_coord()))
  }
}

/// Counterclockwise angle around a pivot, starting from the direction just
/// right of the pivot. The pivot itself sorts first. Points at the same angle
/// are ordered nearest first.
#[derive(Debug, Clone, Copy)]
pub struct PolarOrder {
  pivot: Point,
}

impl PolarOrder {
  pub fn new(pivot: Point) -> PolarOrder {
    PolarOrder { pivot }
  }

  pub fn pivot(&self) -> &Point {
    &self.pivot
  }

  pub fn compare(&self, a: &Point, b: &Point) -> Ordering {
    let pivot = &self.pivot;
    match (a == pivot, b == pivot) {
      (true, true) => Ordering::Equal,
      (true, false) => Ordering::Less,
      (false, true) => Ordering::Greater,
      (false, false) => pivot
        .ccw_cmp_around(a, b)
        .then_with(|| pivot.cmp_distance_to(a, b)),
    }
  }
}

/// Groups points by their position relative to a line.
///
/// From least to greatest: points on the line that are not endpoints, points
/// left of the line, the first endpoint, the second endpoint, points right of
/// the line. Points within a group compare as equal.
#[derive(Debug, Clone, Copy)]
pub struct SideOrder {
  line: Line,
}

impl SideOrder {
  pub fn new(line: Line) -> SideOrder {
    SideOrder { line }
  }

  pub fn line(&self) -> &Line {
    &self.line
  }

  pub fn compare(&self, a: &Point, b: &Point) -> Ordering {
    self.rank(a).cmp(&self.rank(b))
  }

  // 0: on the line, 1: left, 2: first endpoint, 3: second endpoint, 4: right.
  pub(crate) fn rank(&self, pt: &Point) -> u8 {
    match self.line.find_side(pt) {
      Side::Left => 1,
      Side::Right => 4,
      Side::On if *pt == *self.line.first() => 2,
      Side::On if *pt == *self.line.second() => 3,
      Side::On => 0,
    }
  }
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use crate::testing::*;

  use proptest::prelude::*;
  use test_strategy::proptest;

  fn pt(x: i32, y: i32) -> Point {
    Point::new([x, y])
  }

  #[test]
  fn x_order() {
    assert_eq!(XOrder.compare(&pt(0, 9), &pt(1, 0)), Ordering::Less);
    assert_eq!(XOrder.compare(&pt(1, 9), &pt(1, 0)), Ordering::Greater);
    assert_eq!(NaturalOrder.compare(&pt(0, 9), &pt(1, 0)), Ordering::Greater);
  }

  #[test]
  fn polar_order_sweeps_ccw() {
    let order = PolarOrder::new(pt(0, 0));
    let mut pts = vec![
      pt(-1, 0),
      pt(0, 0),
      pt(2, 2),
      pt(1, 0),
      pt(1, 1),
      pt(0, 1),
      pt(3, 0),
    ];
    pts.sort_by(|a, b| order.compare(a, b));
    assert_eq!(
      pts,
      vec![
        pt(0, 0),
        pt(1, 0),
        pt(3, 0),
        pt(1, 1),
        pt(2, 2),
        pt(0, 1),
        pt(-1, 0)
      ]
    );
  }

  #[test]
  fn side_order_ranks() {
    let line = Line::new(pt(0, 0), pt(10, 0));
    let order = SideOrder::new(line);
    let mut pts = vec![
      pt(3, -1),
      pt(10, 0),
      pt(2, 5),
      pt(0, 0),
      pt(5, 0),
      pt(7, -2),
      pt(1, 1),
    ];
    pts.sort_by(|a, b| order.compare(a, b));
    assert_eq!(pts[0], pt(5, 0));
    assert!(pts[1..3].contains(&pt(2, 5)) && pts[1..3].contains(&pt(1, 1)));
    assert_eq!(pts[3], pt(0, 0));
    assert_eq!(pts[4], pt(10, 0));
    assert!(pts[5..].contains(&pt(3, -1)) && pts[5..].contains(&pt(7, -2)));
    assert_eq!(order.compare(&pt(2, 5), &pt(1, 1)), Ordering::Equal);
  }

  // The pivot is the lowest point, so every other point lies in the upper
  // half-plane and polar order must agree with the orientation predicate.
  #[proptest]
  fn polar_order_consistent_with_orientation(#[strategy(point_set(0..20, 3..30))] pts: Vec<Point>) {
    let pivot = *pts.iter().min().unwrap();
    let order = PolarOrder::new(pivot);
    let mut sorted = pts.clone();
    sorted.sort_by(|a, b| order.compare(a, b));
    prop_assert_eq!(sorted[0], pivot);
    for w in sorted[1..].windows(2) {
      prop_assert!(!Point::orient(&pivot, &w[0], &w[1]).is_cw());
    }
  }
}
