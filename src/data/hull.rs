use claims::debug_assert_ok;
use std::ops::Index;

use super::{Point, PointLocation};
use crate::{Error, Orientation};

/// Convex hull of a point set: its extreme points in counterclockwise order.
///
/// A hull of fully collinear input is degenerate and holds just the two
/// extreme points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvexHull {
  vertices: Vec<Point>,
}

impl ConvexHull {
  /// $O(1)$ Assume that the vertices form a strictly convex, counterclockwise
  /// polygon (or a segment of two distinct points).
  ///
  /// Validity is only checked in debug builds.
  pub fn new_unchecked(vertices: Vec<Point>) -> ConvexHull {
    let hull = ConvexHull { vertices };
    debug_assert_ok!(hull.validate());
    hull
  }

  /// $O(n \log n)$ Check that the vertices are distinct and that every turn
  /// is strictly counterclockwise.
  ///
  /// # Errors
  /// * [`Error::InsufficientVertices`] for fewer than two vertices.
  /// * [`Error::DuplicatePoints`] if a vertex appears twice.
  /// * [`Error::ConvexViolation`] for collinear or clockwise turns, or a
  ///   boundary that winds around more than once.
  pub fn validate(&self) -> Result<(), Error> {
    let vs = &self.vertices;
    if vs.len() < 2 {
      return Err(Error::InsufficientVertices);
    }
    let mut sorted = vs.clone();
    sorted.sort_unstable();
    if sorted.windows(2).any(|w| w[0] == w[1]) {
      return Err(Error::DuplicatePoints);
    }
    let n = vs.len();
    if n == 2 {
      return Ok(());
    }
    for i in 0..n {
      if !Point::orient(&vs[i], &vs[(i + 1) % n], &vs[(i + 2) % n]).is_ccw() {
        return Err(Error::ConvexViolation);
      }
    }
    // Left turns alone allow star shapes. Every fan triangle from the first
    // vertex must also turn left.
    for i in 1..n - 1 {
      if !Point::orient(&vs[0], &vs[i], &vs[i + 1]).is_ccw() {
        return Err(Error::ConvexViolation);
      }
    }
    Ok(())
  }

  /// $O(\log n)$ Locate a point relative to the hull.
  pub fn locate(&self, pt: &Point) -> PointLocation {
    let vs = &self.vertices;
    let n = vs.len();
    let p0 = &vs[0];
    if n == 2 {
      return if Point::orient(p0, &vs[1], pt).is_colinear() && in_box(p0, &vs[1], pt) {
        PointLocation::OnBoundary
      } else {
        PointLocation::Outside
      };
    }
    let first = Point::orient(p0, &vs[1], pt);
    let last = Point::orient(p0, &vs[n - 1], pt);
    if first.is_cw() || last.is_ccw() {
      return PointLocation::Outside;
    }
    for (edge_end, o) in [(&vs[1], first), (&vs[n - 1], last)] {
      if o.is_colinear() {
        return if in_box(p0, edge_end, pt) {
          PointLocation::OnBoundary
        } else {
          PointLocation::Outside
        };
      }
    }
    let mut lower = 1;
    let mut upper = n - 1;
    while lower + 1 < upper {
      let middle = (lower + upper) / 2;
      if Point::orient(p0, &vs[middle], pt) == Orientation::CounterClockWise {
        lower = middle;
      } else {
        upper = middle;
      }
    }
    match Point::orient(&vs[lower], &vs[upper], pt) {
      Orientation::CounterClockWise => PointLocation::Inside,
      Orientation::CoLinear => PointLocation::OnBoundary,
      Orientation::ClockWise => PointLocation::Outside,
    }
  }

  pub fn vertices(&self) -> &[Point] {
    &self.vertices
  }

  pub fn len(&self) -> usize {
    self.vertices.len()
  }

  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  /// True for the two-vertex hull of collinear input.
  pub fn is_degenerate(&self) -> bool {
    self.vertices.len() == 2
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point> {
    self.vertices.iter()
  }

  /// Vertices in natural order. Handy for comparing hulls that start at
  /// different vertices.
  pub fn sorted(&self) -> Vec<Point> {
    let mut vs = self.vertices.clone();
    vs.sort_unstable();
    vs
  }

  pub fn into_vec(self) -> Vec<Point> {
    self.vertices
  }
}

// Assumes `pt` is collinear with `a` and `b`.
fn in_box(a: &Point, b: &Point, pt: &Point) -> bool {
  let within = |i: usize| a[i].min(b[i]) <= pt[i] && pt[i] <= a[i].max(b[i]);
  within(0) && within(1)
}

impl Index<usize> for ConvexHull {
  type Output = Point;
  fn index(&self, idx: usize) -> &Point {
    &self.vertices[idx]
  }
}

impl<'a> IntoIterator for &'a ConvexHull {
  type Item = &'a Point;
  type IntoIter = std::slice::Iter<'a, Point>;
  fn into_iter(self) -> Self::IntoIter {
    self.vertices.iter()
  }
}

impl From<ConvexHull> for Vec<Point> {
  fn from(hull: ConvexHull) -> Vec<Point> {
    hull.vertices
  }
}
