use std::cmp::Ordering;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// Coordinates are widened to `i128` before multiplying, so this function
  /// never overflows for any `i32` input.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use planar_hull::data::Point;
  /// # use planar_hull::Orientation;
  /// let p1 = Point::new([ 0, 0 ]);
  /// let p2 = Point::new([ 0, 1 ]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 0, 2 ])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ -1, 2 ])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 1, 2 ])).is_cw());
  /// ```
  pub fn new(p1: &[i32; 2], p2: &[i32; 2], p3: &[i32; 2]) -> Orientation {
    match cross(p1, p2, p3).cmp(&0) {
      Ordering::Less => Orientation::ClockWise,
      Ordering::Equal => Orientation::CoLinear,
      Ordering::Greater => Orientation::CounterClockWise,
    }
  }

  /// Signed turn direction as `1` (counterclockwise), `-1` (clockwise) or `0`.
  pub fn signum(self) -> i32 {
    match self {
      Orientation::CounterClockWise => 1,
      Orientation::ClockWise => -1,
      Orientation::CoLinear => 0,
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn then(self, other: Orientation) -> Orientation {
    match self {
      Orientation::CoLinear => other,
      _ => self,
    }
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}

// (p2 - p1) x (p3 - p1). Twice the signed area of the triangle p1, p2, p3.
pub(crate) fn cross(p1: &[i32; 2], p2: &[i32; 2], p3: &[i32; 2]) -> i128 {
  let ax = i128::from(p2[0]) - i128::from(p1[0]);
  let ay = i128::from(p2[1]) - i128::from(p1[1]);
  let bx = i128::from(p3[0]) - i128::from(p1[0]);
  let by = i128::from(p3[1]) - i128::from(p1[1]);
  ax * by - bx * ay
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use Orientation::*;

  use proptest::prelude::*;

  proptest! {
    #[test]
    fn orientation_reverse(p1 in any::<[i32; 2]>(), p2 in any::<[i32; 2]>(), p3 in any::<[i32; 2]>()) {
      let abc = Orientation::new(&p1, &p2, &p3);
      let cba = Orientation::new(&p3, &p2, &p1);
      prop_assert_eq!(abc, cba.reverse())
    }

    #[test]
    fn orientation_rotate(p1 in any::<[i32; 2]>(), p2 in any::<[i32; 2]>(), p3 in any::<[i32; 2]>()) {
      prop_assert_eq!(Orientation::new(&p1, &p2, &p3), Orientation::new(&p2, &p3, &p1))
    }
  }

  #[test]
  fn turns() {
    assert_eq!(Orientation::new(&[0, 0], &[1, 1], &[2, 2]), CoLinear);
    assert_eq!(Orientation::new(&[0, 0], &[0, 1], &[2, 2]), ClockWise);
    assert_eq!(Orientation::new(&[0, 0], &[0, 1], &[-2, 2]), CounterClockWise);
    assert_eq!(Orientation::new(&[0, 0], &[0, 0], &[0, 0]), CoLinear);
  }

  #[test]
  fn extreme_coordinates() {
    let lo = i32::MIN;
    let hi = i32::MAX;
    assert_eq!(Orientation::new(&[lo, lo], &[hi, lo], &[hi, hi]), CounterClockWise);
    assert_eq!(Orientation::new(&[lo, lo], &[hi, hi], &[hi, lo]), ClockWise);
    assert_eq!(Orientation::new(&[lo, lo], &[0, 0], &[hi, hi - 1]), ClockWise);
    assert_eq!(Orientation::new(&[lo, lo], &[-1, -1], &[hi - 1, hi - 1]), CoLinear);
  }

  #[test]
  fn signum_and_then() {
    assert_eq!(CounterClockWise.signum(), 1);
    assert_eq!(ClockWise.signum(), -1);
    assert_eq!(CoLinear.signum(), 0);
    assert_eq!(CoLinear.then(ClockWise), ClockWise);
    assert_eq!(CounterClockWise.then(ClockWise), CounterClockWise);
  }
}
