use super::degenerate_hull;
use crate::algorithms::heap_sort::heap_sort_by;
use crate::data::{ConvexHull, Point, VertexStack};
use crate::order::XOrder;
use crate::utils::vertical_runs;
use crate::Error;

// https://en.wikibooks.org/wiki/Algorithm_Implementation/Geometry/Convex_hull/Monotone_chain

/// $O(n \log n)$ Convex hull of a set of points.
///
/// Andrew's monotone chain: sort by x, then build the lower and the upper
/// chain with one stack sweep each.
///
/// Points strictly inside a vertical run (same x, neither lowest nor highest)
/// are skipped before sweeping.
///
/// # Errors
/// Will return an error iff the input set contains less than three points.
///
/// # Properties
/// * No points from the input set will be outside the returned convex hull.
/// * All vertices in the convex hull are from the input set.
/// * The first vertex is the leftmost point (lowest among ties).
pub fn convex_hull(mut pts: Vec<Point>) -> Result<ConvexHull, Error> {
  if let Some(hull) = degenerate_hull(&pts)? {
    return Ok(hull);
  }
  heap_sort_by(&mut pts, |a, b| XOrder.compare(a, b));
  let sorted = drop_vertical_interiors(&pts);

  let mut lower = VertexStack::new();
  for pt in &sorted {
    grow(&mut lower, pt);
  }
  let mut upper = VertexStack::new();
  for pt in sorted.iter().rev() {
    grow(&mut upper, pt);
  }

  // Each chain ends where the other one starts.
  let mut hull = lower.into_vec();
  hull.pop();
  let mut upper = upper.into_vec();
  upper.pop();
  hull.append(&mut upper);
  Ok(ConvexHull::new_unchecked(hull))
}

// Pop every vertex the new point makes irrelevant.
fn grow(chain: &mut VertexStack, next: &Point) {
  while let Some((top, below)) = chain.last_two() {
    if Point::orient(below, top, next).is_ccw() {
      break;
    }
    chain.pop();
  }
  chain.push(*next);
}

fn drop_vertical_interiors(sorted: &[Point]) -> Vec<Point> {
  let mut kept = Vec::with_capacity(sorted.len());
  for run in vertical_runs(sorted) {
    kept.push(sorted[run.start]);
    if run.len() > 1 {
      kept.push(sorted[run.end - 1]);
    }
  }
  kept
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use crate::testing::*;

  use claims::assert_ok;
  use proptest::prelude::*;
  use test_strategy::proptest;

  fn pts(raw: &[[i32; 2]]) -> Vec<Point> {
    raw.iter().copied().map(Point::new).collect()
  }

  #[test]
  fn square_with_interior_point() {
    let points = pts(&[[0, 0], [10, 0], [10, 10], [0, 10], [5, 5]]);
    let hull = assert_ok!(convex_hull(points));
    assert_eq!(hull.vertices(), pts(&[[0, 0], [10, 0], [10, 10], [0, 10]]));
  }

  #[test]
  fn vertical_runs_on_both_sides() {
    let points = pts(&[
      [0, 0],
      [0, 1],
      [0, 2],
      [0, 3],
      [3, 1],
      [6, 0],
      [6, 2],
      [6, 4],
    ]);
    let hull = assert_ok!(convex_hull(points));
    assert_eq!(hull.vertices(), pts(&[[0, 0], [6, 0], [6, 4], [0, 3]]));
  }

  #[test]
  fn interiors_are_dropped() {
    let sorted = pts(&[[0, 0], [0, 1], [0, 2], [1, 5], [2, 0], [2, 7]]);
    assert_eq!(
      drop_vertical_interiors(&sorted),
      pts(&[[0, 0], [0, 2], [1, 5], [2, 0], [2, 7]])
    );
  }

  #[proptest]
  fn convex_hull_prop(#[strategy(point_set(-100..100, 3..100))] pts: Vec<Point>) {
    let hull = convex_hull(pts.clone()).unwrap();
    assert_hull(&pts, &hull);
  }

  #[proptest]
  fn convex_hull_grid(#[strategy(grid_set(3..36))] pts: Vec<Point>) {
    let hull = convex_hull(pts.clone()).unwrap();
    assert_hull(&pts, &hull);
  }

  #[proptest]
  fn convex_hull_line(#[strategy(line_set(3..20))] pts: Vec<Point>) {
    let hull = convex_hull(pts.clone()).unwrap();
    prop_assert!(hull.is_degenerate());
  }
}
