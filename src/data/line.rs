use num_rational::Ratio;

use super::Point;
use crate::Orientation;

///////////////////////////////////////////////////////////////////////////////
// Line

/// Infinite line through two points.
///
/// The endpoints are stored so that `first` never lies to the right of
/// `second`. When both share an x-coordinate the argument order is swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
  first: Point,
  second: Point,
}

/// Location of a point relative to a [`Line`], seen from its first endpoint
/// looking towards the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
  Left,
  On,
  Right,
}

impl Side {
  /// `-1` for left, `0` for on the line, `1` for right.
  pub fn signum(self) -> i32 {
    match self {
      Side::Left => -1,
      Side::On => 0,
      Side::Right => 1,
    }
  }
}

impl Line {
  pub fn new(a: Point, b: Point) -> Line {
    if a.x_coord() < b.x_coord() {
      Line {
        first: a,
        second: b,
      }
    } else {
      Line {
        first: b,
        second: a,
      }
    }
  }

  /// Endpoint with the smaller x-coordinate.
  pub fn first(&self) -> &Point {
    &self.first
  }

  /// Endpoint with the larger x-coordinate.
  pub fn second(&self) -> &Point {
    &self.second
  }

  /// Floating point slope. Vertical lines report positive infinity.
  pub fn slope(&self) -> f64 {
    self.first.slope_to(&self.second)
  }

  /// Exact slope, or `None` for vertical lines.
  pub fn exact_slope(&self) -> Option<Ratio<i64>> {
    let (dx, dy) = self.delta();
    if dx == 0 {
      None
    } else {
      Some(Ratio::new(dy, dx))
    }
  }

  pub fn find_side(&self, pt: &Point) -> Side {
    match Point::orient(&self.first, &self.second, pt) {
      Orientation::CounterClockWise => Side::Left,
      Orientation::CoLinear => Side::On,
      Orientation::ClockWise => Side::Right,
    }
  }

  /// Distance from `pt` to the line, scaled by the length of the line.
  ///
  /// Only useful for comparing distances to the same line.
  pub fn unnormalized_distance(&self, pt: &Point) -> u128 {
    crate::orientation::cross(&self.first, &self.second, pt).unsigned_abs()
  }

  /// True when `pt` is one of the two points the line was built from.
  /// Other points on the line do not count.
  pub fn is_endpoint(&self, pt: &Point) -> bool {
    *pt == self.first || *pt == self.second
  }

  fn delta(&self) -> (i64, i64) {
    (
      i64::from(self.second.x_coord()) - i64::from(self.first.x_coord()),
      i64::from(self.second.y_coord()) - i64::from(self.first.y_coord()),
    )
  }
}
