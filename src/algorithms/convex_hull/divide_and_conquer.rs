use super::degenerate_hull;
use super::tangent::{merge, SubHull};
use crate::algorithms::heap_sort::heap_sort_by;
use crate::data::{ConvexHull, HullRing, NodeId, Point};
use crate::order::XOrder;
use crate::utils::vertical_interiors;
use crate::Error;

/// $O(n \log n)$ Convex hull of a set of points.
///
/// Sorts by x, splits the sorted points in halves down to rings of one or two
/// vertices, then stitches neighbouring rings back together along their upper
/// and lower tangents.
///
/// Points strictly inside a vertical run are flagged before any ring is built
/// and never become ring vertices.
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

  let mut ring = HullRing::with_capacity(pts.len());
  let nodes: Vec<NodeId> = pts
    .iter()
    .zip(disabled)
    .map(|(pt, disabled)| ring.insert(*pt, disabled))
    .collect();
  let hull = build(&mut ring, &nodes).ok_or(Error::InsufficientVertices)?;
  Ok(ConvexHull::new_unchecked(ring.collect_ccw(hull.leftmost)))
}

// None when every node in the range is disabled.
fn build(ring: &mut HullRing, nodes: &[NodeId]) -> Option<SubHull> {
  if nodes.len() <= 2 {
    let enabled: Vec<NodeId> = nodes
      .iter()
      .copied()
      .filter(|&node| !ring.is_disabled(node))
      .collect();
    return match enabled.as_slice() {
      [left, right] => Some(SubHull::pair(ring, *left, *right)),
      [single] => Some(SubHull::single(*single)),
      _ => None,
    };
  }
  let (left, right) = nodes.split_at(nodes.len() / 2);
  match (build(ring, left), build(ring, right)) {
    (Some(left), Some(right)) => Some(merge(ring, left, right)),
    (left, right) => left.or(right),
  }
}
