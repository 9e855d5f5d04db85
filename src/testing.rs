// Strategies for generating point sets.
//
// Hull algorithms require distinct points, so every strategy here produces
// sets without duplicates. Input order is shuffled because several algorithms
// depend on it (Jarvis's first candidate, Chan's grouping).
use core::ops::Range;

use proptest::collection::{btree_set, SizeRange};
use proptest::prelude::*;

use crate::data::{ConvexHull, Point, PointLocation};

/// Distinct points with both coordinates drawn from `coords`.
pub fn point_set(
  coords: Range<i32>,
  size: impl Into<SizeRange>,
) -> impl Strategy<Value = Vec<Point>> {
  btree_set((coords.clone(), coords), size)
    .prop_map(|set| set.into_iter().map(Point::from).collect::<Vec<_>>())
    .prop_shuffle()
}

/// Distinct points on a small grid. Lots of collinear triples and vertical
/// runs.
pub fn grid_set(size: impl Into<SizeRange>) -> impl Strategy<Value = Vec<Point>> {
  point_set(0..6, size)
}

/// Distinct points on one line through the origin.
pub fn line_set(size: impl Into<SizeRange>) -> impl Strategy<Value = Vec<Point>> {
  (
    (-3..=3_i32, -3..=3_i32).prop_filter("direction must be non-zero", |d| *d != (0, 0)),
    btree_set(-50..50_i32, size),
  )
    .prop_map(|((dx, dy), ts)| {
      ts.into_iter()
        .map(|t| Point::new([t * dx, t * dy]))
        .collect::<Vec<_>>()
    })
    .prop_shuffle()
}

/// The three properties that pin a convex hull down uniquely:
/// 1. the hull is strictly convex and counterclockwise,
/// 2. no input point lies outside it,
/// 3. every vertex comes from the input.
pub fn assert_hull(pts: &[Point], hull: &ConvexHull) {
  claims::assert_ok!(hull.validate());
  for pt in pts {
    assert_ne!(hull.locate(pt), PointLocation::Outside, "{} is outside", pt);
  }
  for pt in hull {
    assert!(pts.contains(pt), "{} is not an input point", pt);
  }
}

#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use std::collections::BTreeSet;
  use test_strategy::proptest;

  #[proptest]
  fn point_set_is_distinct(#[strategy(point_set(-5..5, 0..50))] pts: Vec<Point>) {
    let set: BTreeSet<_> = pts.iter().collect();
    prop_assert_eq!(set.len(), pts.len());
  }

  #[proptest]
  fn line_set_is_colinear(#[strategy(line_set(3..20))] pts: Vec<Point>) {
    for w in pts.windows(3) {
      prop_assert!(Point::orient(&w[0], &w[1], &w[2]).is_colinear());
    }
  }
}
