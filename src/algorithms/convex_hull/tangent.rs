// Merging two x-separated hulls stored in a `HullRing`, shared by the
// divide-and-conquer and the incremental algorithm.
use crate::data::{HullRing, NodeId, Point};
use crate::Orientation;

/// A hull living in a ring, addressed through its extreme vertices in
/// x-then-y order. Both extremes are always hull vertices.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SubHull {
  pub leftmost: NodeId,
  pub rightmost: NodeId,
}

impl SubHull {
  pub fn single(node: NodeId) -> SubHull {
    SubHull {
      leftmost: node,
      rightmost: node,
    }
  }

  /// Two-vertex hull. `left` must precede `right` in x-then-y order.
  pub fn pair(ring: &mut HullRing, left: NodeId, right: NodeId) -> SubHull {
    ring.set_ccw(left, right);
    ring.set_ccw(right, left);
    SubHull {
      leftmost: left,
      rightmost: right,
    }
  }
}

/// Join `left` and `right` along their lower and upper tangents. Every point
/// of `left` must precede every point of `right` in x-then-y order.
pub(crate) fn merge(ring: &mut HullRing, left: SubHull, right: SubHull) -> SubHull {
  let (lower_left, lower_right) = lower_tangent(ring, left.rightmost, right.leftmost);
  let (upper_left, upper_right) = upper_tangent(ring, left.rightmost, right.leftmost);
  // Walking counterclockwise, the lower tangent runs left to right and the
  // upper tangent right to left. Vertices between the tangents drop out.
  ring.set_ccw(lower_left, lower_right);
  ring.set_ccw(upper_right, upper_left);
  SubHull {
    leftmost: left.leftmost,
    rightmost: right.rightmost,
  }
}

fn lower_tangent(ring: &HullRing, mut a: NodeId, mut b: NodeId) -> (NodeId, NodeId) {
  loop {
    let mut moved = false;
    // `a` walks clockwise along the left hull, downwards on its right side.
    loop {
      let next = ring.cw(a);
      if !improves(ring, b, a, next, Orientation::CounterClockWise) {
        break;
      }
      a = next;
      moved = true;
    }
    // `b` walks counterclockwise along the right hull.
    loop {
      let next = ring.ccw(b);
      if !improves(ring, a, b, next, Orientation::ClockWise) {
        break;
      }
      b = next;
      moved = true;
    }
    if !moved {
      return (a, b);
    }
  }
}

fn upper_tangent(ring: &HullRing, mut a: NodeId, mut b: NodeId) -> (NodeId, NodeId) {
  loop {
    let mut moved = false;
    loop {
      let next = ring.ccw(a);
      if !improves(ring, b, a, next, Orientation::ClockWise) {
        break;
      }
      a = next;
      moved = true;
    }
    loop {
      let next = ring.cw(b);
      if !improves(ring, a, b, next, Orientation::CounterClockWise) {
        break;
      }
      b = next;
      moved = true;
    }
    if !moved {
      return (a, b);
    }
  }
}

// Does the tangent through `anchor` get better by moving from `current` to
// `next`? It does when `next` lies on the `outward` side of anchor -> current.
// On a collinear tie the farther point wins, except on a vertical tangent
// where the nearer one does.
fn improves(
  ring: &HullRing,
  anchor: NodeId,
  current: NodeId,
  next: NodeId,
  outward: Orientation,
) -> bool {
  let (anchor, current, next) = (ring.point(anchor), ring.point(current), ring.point(next));
  let orientation = Point::orient(anchor, current, next);
  if orientation == outward {
    return true;
  }
  if !orientation.is_colinear() || next == current {
    return false;
  }
  let farther = anchor.cmp_distance_to(next, current).is_gt();
  if anchor.x_coord() == current.x_coord() {
    !farther
  } else {
    farther
  }
}
