use std::cmp::Ordering;

use super::degenerate_hull;
use crate::data::{ConvexHull, Point, VertexStack};
use crate::{Error, Orientation};

// https://en.wikipedia.org/wiki/Gift_wrapping_algorithm

// Properties:
//    No panics.
//    All Ok results are valid convex hulls.
//    No points are outside the resulting convex hull.
/// Convex hull of a set of points.
///
/// [Gift Wrapping][wiki] (Jarvis march) algorithm for finding the smallest
/// convex polygon which contains all the given points. Starting from the
/// leftmost point, it repeatedly picks the point with no other point to its
/// right until it gets back to where it started.
///
/// # Errors
/// Will return an error iff the input set contains less than three points.
///
/// # Properties
/// * No points from the input set will be outside the returned convex hull.
/// * All vertices in the convex hull are from the input set.
/// * The first vertex is the leftmost point (topmost among ties).
///
/// # Time complexity
/// $O(nh)$ as h is the size of the points on convex hull
///
/// # Examples
///
/// ```rust
/// # pub fn main() {
/// # use planar_hull::algorithms::convex_hull::gift_wrapping::convex_hull;
/// # use planar_hull::data::Point;
/// # use planar_hull::Error;
/// let empty_set: Vec<Point> = vec![];
/// assert_eq!(
///   convex_hull(empty_set).err(),
///   Some(Error::InsufficientVertices))
/// # }
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Gift_wrapping_algorithm
pub fn convex_hull(pts: Vec<Point>) -> Result<ConvexHull, Error> {
  if let Some(hull) = degenerate_hull(&pts)? {
    return Ok(hull);
  }
  let n = pts.len();
  let leftmost = leftmost_point_index(&pts)?;

  let mut hull = VertexStack::new();
  let mut p = leftmost;

  loop {
    hull.push(pts[p]);
    let mut q = (p + 1) % n;

    for i in 0..n {
      let orientation = Point::orient(&pts[p], &pts[q], &pts[i]);
      // Of several collinear candidates keep the farthest so edges never
      // contain extra vertices.
      if orientation == Orientation::ClockWise
        || (orientation == Orientation::CoLinear
          && pts[p].cmp_distance_to(&pts[i], &pts[q]) == Ordering::Greater)
      {
        q = i;
      }
    }

    p = q;
    if p == leftmost || hull.len() == n {
      break;
    }
  }

  Ok(ConvexHull::new_unchecked(hull.into_vec()))
}

// Smallest x, largest y among ties.
// O(n)
fn leftmost_point_index(pts: &[Point]) -> Result<usize, Error> {
  pts
    .iter()
    .enumerate()
    .min_by(|(_, a), (_, b)| {
      a.x_coord()
        .cmp(&b.x_coord())
        .then_with(|| b.y_coord().cmp(&a.y_coord()))
    })
    .map(|(index, _)| index)
    .ok_or(Error::InsufficientVertices)
}
