use super::degenerate_hull;
use crate::algorithms::heap_sort::heap_sort_by;
use crate::data::{ConvexHull, Line, Point, VertexStack};
use crate::order::{SideOrder, XOrder};
use crate::Error;

// https://en.wikipedia.org/wiki/Quickhull

/// $O(n^2)$ worst case, $O(n \log n)$ expected. Convex hull of a set of points.
///
/// The leftmost and rightmost points split the input in two. On each side the
/// point furthest from the dividing edge is a hull vertex; it replaces the
/// edge by two new ones and the process repeats on the points still outside.
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
  let (min, max) = match (
    pts.iter().copied().min_by(|a, b| XOrder.compare(a, b)),
    pts.iter().copied().max_by(|a, b| XOrder.compare(a, b)),
  ) {
    (Some(min), Some(max)) => (min, max),
    _ => return Err(Error::InsufficientVertices),
  };

  // Sorted by side, the input reads: points on the baseline, points above
  // it, `min`, `max`, points below it.
  let order = SideOrder::new(Line::new(min, max));
  heap_sort_by(&mut pts, |a, b| order.compare(a, b));
  let upper_start = pts.partition_point(|pt| order.rank(pt) < 1);
  let upper_end = pts.partition_point(|pt| order.rank(pt) < 2);
  let lower_start = pts.partition_point(|pt| order.rank(pt) < 4);
  let (head, lower) = pts.split_at_mut(lower_start);
  let upper = &mut head[upper_start..upper_end];

  let mut hull = VertexStack::new();
  hull.push(min);
  hull_set(&min, &max, lower, &mut hull);
  hull.push(max);
  hull_set(&max, &min, upper, &mut hull);
  Ok(ConvexHull::new_unchecked(hull.into_vec()))
}

// Push the hull vertices strictly between `a` and `b`, in order. Every point
// in `pts` lies to the right of the directed edge a -> b.
fn hull_set(a: &Point, b: &Point, pts: &mut [Point], hull: &mut VertexStack) {
  let line = Line::new(*a, *b);
  // Points tied for the largest distance lie on a line parallel to a -> b.
  // Only the ends of that run are hull vertices, and the one furthest from `a`
  // is always an end.
  let furthest = pts.iter().copied().max_by(|p, q| {
    line
      .unnormalized_distance(p)
      .cmp(&line.unnormalized_distance(q))
      .then_with(|| a.cmp_distance_to(p, q))
  });
  let furthest = match furthest {
    Some(pt) if line.unnormalized_distance(&pt) > 0 => pt,
    _ => return,
  };

  let (outside_a, rest) = partition(pts, |pt| Point::orient(a, &furthest, pt).is_cw());
  hull_set(a, &furthest, outside_a, hull);
  hull.push(furthest);
  let (outside_b, _) = partition(rest, |pt| Point::orient(&furthest, b, pt).is_cw());
  hull_set(&furthest, b, outside_b, hull);
}

// Move the points satisfying `pred` to the front and split there.
fn partition<F>(pts: &mut [Point], pred: F) -> (&mut [Point], &mut [Point])
where
  F: Fn(&Point) -> bool,
{
  let mut split = 0;
  for i in 0..pts.len() {
    if pred(&pts[i]) {
      pts.swap(split, i);
      split += 1;
    }
  }
  pts.split_at_mut(split)
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
  fn triangle_with_edge_point() {
    let points = pts(&[[0, 0], [4, 0], [2, 0], [2, 3]]);
    let hull = assert_ok!(convex_hull(points));
    assert_eq!(hull.vertices(), pts(&[[0, 0], [4, 0], [2, 3]]));
  }

  #[test]
  fn baseline_points_are_ignored() {
    // (3,3) sits on the baseline from (0,0) to (6,6).
    let points = pts(&[[0, 0], [6, 6], [3, 3], [5, 1], [1, 5]]);
    let hull = assert_ok!(convex_hull(points));
    assert_eq!(hull.vertices(), pts(&[[0, 0], [5, 1], [6, 6], [1, 5]]));
  }

  #[test]
  fn parallel_runs_pick_their_ends() {
    // Three points tie for the largest distance on each side of the baseline.
    let points = pts(&[
      [5, 1],
      [3, 4],
      [2, 3],
      [5, 3],
      [0, 3],
      [0, 5],
      [2, 1],
      [4, 5],
      [1, 0],
      [3, 0],
      [4, 2],
      [4, 3],
      [3, 3],
      [2, 0],
      [5, 2],
      [3, 2],
      [4, 1],
      [3, 5],
    ]);
    let hull = assert_ok!(convex_hull(points.clone()));
    assert_eq!(
      hull.vertices(),
      pts(&[[0, 3], [1, 0], [3, 0], [5, 1], [5, 3], [4, 5], [0, 5]])
    );
    assert_hull(&points, &hull);
  }

  #[test]
  fn parallel_run_at_extreme_coordinates() {
    let (lo, hi) = (i32::MIN, i32::MAX);
    let points = pts(&[
      [0, lo],
      [lo, 0],
      [hi, 0],
      [-317_234_280, lo],
      [lo / 2, lo],
      [0, hi],
    ]);
    let hull = assert_ok!(convex_hull(points.clone()));
    assert_eq!(
      hull.vertices(),
      pts(&[[lo, 0], [lo / 2, lo], [0, lo], [hi, 0], [0, hi]])
    );
    assert_hull(&points, &hull);
  }

  #[test]
  fn partition_moves_matches_first() {
    let mut v = pts(&[[1, 0], [2, 0], [3, 0], [4, 0]]);
    let (even, odd) = partition(&mut v, |pt| pt.x_coord() % 2 == 0);
    assert_eq!(even.len(), 2);
    assert!(even.iter().all(|pt| pt.x_coord() % 2 == 0));
    assert!(odd.iter().all(|pt| pt.x_coord() % 2 == 1));
  }

  #[proptest]
  fn convex_hull_prop(#[strategy(point_set(-100..100, 3..100))] pts: Vec<Point>) {
    let hull = convex_hull(pts.clone()).unwrap();
    assert_hull(&pts, &hull);
  }

  #[proptest(ProptestConfig::with_cases(1024))]
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
