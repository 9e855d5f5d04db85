use super::degenerate_hull;
use crate::algorithms::heap_sort::heap_sort_range_by;
use crate::data::{ConvexHull, Point, VertexStack};
use crate::order::PolarOrder;
use crate::Error;

// https://en.wikipedia.org/wiki/Graham_scan

// Properties:
//    No panics.
//    All Ok results are valid convex hulls.
//    No points are outside the resulting convex hull.
/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Graham scan][wiki] algorithm for finding the smallest convex polygon which
/// contains all the given points. Points are sorted by angle around the lowest
/// point and swept once with a stack.
///
/// # Errors
/// Will return an error iff the input set contains less than three points.
///
/// # Properties
/// * No points from the input set will be outside the returned convex hull.
/// * All vertices in the convex hull are from the input set.
/// * The first vertex is the lowest point (leftmost among ties).
///
/// # Examples
///
/// ```rust
/// # pub fn main() {
/// # use planar_hull::algorithms::convex_hull::graham_scan::convex_hull;
/// # use planar_hull::data::Point;
/// # use planar_hull::Error;
/// let empty_set: Vec<Point> = vec![];
/// assert_eq!(
///   convex_hull(empty_set).err(),
///   Some(Error::InsufficientVertices))
/// # }
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn convex_hull(mut pts: Vec<Point>) -> Result<ConvexHull, Error> {
  if let Some(hull) = degenerate_hull(&pts)? {
    return Ok(hull);
  }
  Ok(ConvexHull::new_unchecked(hull_of(&mut pts)))
}

/// Hull of any non-empty slice, reordering it in the process. Collinear
/// input yields its two extreme points.
pub(crate) fn hull_of(pts: &mut [Point]) -> Vec<Point> {
  if let Some(lowest) = lowest_point_index(pts) {
    pts.swap(0, lowest);
    let order = PolarOrder::new(pts[0]);
    let len = pts.len();
    heap_sort_range_by(pts, 1..len, |a, b| order.compare(a, b));
  }
  scan(pts).into_vec()
}

/// The stack sweep. `sorted` must start with its lowest point, followed by
/// the remaining points in polar order around it.
pub(crate) fn scan(sorted: &[Point]) -> VertexStack {
  let mut stack = VertexStack::new();
  for pt in sorted {
    while let Some((top, below)) = stack.last_two() {
      if Point::orient(below, top, pt).is_ccw() {
        break;
      }
      stack.pop();
    }
    stack.push(*pt);
  }
  stack
}

// O(n)
fn lowest_point_index(pts: &[Point]) -> Option<usize> {
  pts
    .iter()
    .enumerate()
    .min_by_key(|(_, pt)| **pt)
    .map(|(index, _)| index)
}
