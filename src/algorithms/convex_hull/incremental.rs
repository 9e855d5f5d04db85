use super::degenerate_hull;
use super::tangent::{merge, SubHull};
use crate::algorithms::heap_sort::heap_sort_by;
use crate::data::{ConvexHull, HullRing, Point};
use crate::order::XOrder;
use crate::utils::vertical_interiors;
use crate::Error;

/// $O(n \log n)$ Convex hull of a set of points.
///
/// Points are added one at a time from left to right. Each new point lies
/// outside the current hull, so adding it only means finding the two tangents
/// from the point to the hull. The search starts at the rightmost hull vertex,
/// which is always the previously added point.
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
  let disabled = vertical_interiors(&pts);
  let mut enabled = pts
    .iter()
    .zip(disabled)
    .filter(|(_, disabled)| !disabled)
    .map(|(pt, _)| *pt);

  let mut ring = HullRing::with_capacity(pts.len());
  let mut hull = match (enabled.next(), enabled.next()) {
    (Some(first), Some(second)) => {
      let first = ring.insert(first, false);
      let second = ring.insert(second, false);
      SubHull::pair(&mut ring, first, second)
    }
    _ => return Err(Error::InsufficientVertices),
  };
  for pt in enabled {
    let node = ring.insert(pt, false);
    hull = merge(&mut ring, hull, SubHull::single(node));
  }
  Ok(ConvexHull::new_unchecked(ring.collect_ccw(hull.leftmost)))
}
