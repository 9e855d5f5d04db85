use array_init::array_init;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::ops::Deref;
use std::ops::Index;

use crate::Orientation;

/// A point with exact integer coordinates.
///
/// Points are ordered by their y-coordinate first and x-coordinate second
/// (the natural order). Use [`XOrder`](crate::order::XOrder) for the
/// left-to-right order most sweeps want.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Point {
  pub array: [i32; 2],
}

// Random sampling.
impl Distribution<Point> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

impl Point {
  pub const fn new(array: [i32; 2]) -> Point {
    Point { array }
  }

  pub fn x_coord(&self) -> i32 {
    self.array[0]
  }

  pub fn y_coord(&self) -> i32 {
    self.array[1]
  }

  /// Turn direction of the walk `p -> q -> r`.
  ///
  /// Shorthand for [`Orientation::new`].
  pub fn orient(p: &Point, q: &Point, r: &Point) -> Orientation {
    Orientation::new(&p.array, &q.array, &r.array)
  }

  pub fn orientation(&self, q: &Point, r: &Point) -> Orientation {
    Orientation::new(&self.array, &q.array, &r.array)
  }

  /// Squared Euclidean distance. Never overflows.
  pub fn squared_euclidean_distance(&self, rhs: &Point) -> i128 {
    let dx = i128::from(self.array[0]) - i128::from(rhs.array[0]);
    let dy = i128::from(self.array[1]) - i128::from(rhs.array[1]);
    dx * dx + dy * dy
  }

  /// Compare the distances from `self` to `p` and from `self` to `q`.
  pub fn cmp_distance_to(&self, p: &Point, q: &Point) -> Ordering {
    self
      .squared_euclidean_distance(p)
      .cmp(&self.squared_euclidean_distance(q))
  }

  /// Slope of the line from `self` to `other`.
  ///
  /// Vertical lines have a slope of positive infinity, whichever way they point.
  pub fn slope_to(&self, other: &Point) -> f64 {
    let dx = i64::from(other.array[0]) - i64::from(self.array[0]);
    let dy = i64::from(other.array[1]) - i64::from(self.array[1]);
    if dx == 0 {
      return f64::INFINITY;
    }
    dy as f64 / dx as f64
  }

  /// Compare `p` and `q` by their counterclockwise angle around `self`,
  /// measured from the positive x-axis. Points in the same direction compare
  /// as equal.
  ///
  /// Both `p` and `q` must differ from `self`.
  pub fn ccw_cmp_around(&self, p: &Point, q: &Point) -> Ordering {
    self
      .half_plane(p)
      .cmp(&self.half_plane(q))
      .then_with(|| match self.orientation(p, q) {
        Orientation::CounterClockWise => Ordering::Less,
        Orientation::ClockWise => Ordering::Greater,
        Orientation::CoLinear => Ordering::Equal,
      })
  }

  // 0 for angles in [0, pi), 1 for angles in [pi, 2pi).
  fn half_plane(&self, p: &Point) -> u8 {
    let dx = p.array[0].cmp(&self.array[0]);
    let dy = p.array[1].cmp(&self.array[1]);
    match (dy, dx) {
      (Ordering::Greater, _) | (Ordering::Equal, Ordering::Greater) => 0,
      _ => 1,
    }
  }
}

/// `n` distinct points with coordinates in `[0, max]`.
///
/// # Panics
///
/// Panics if the box cannot hold `n` distinct points.
pub fn random_points<R>(n: usize, max: i32, rng: &mut R) -> Vec<Point>
where
  R: Rng + ?Sized,
{
  let side = u128::try_from(max).map_or(0, |m| m + 1);
  assert!(side * side >= n as u128, "cannot fit {n} distinct points");
  let mut seen = BTreeSet::new();
  let mut points = Vec::with_capacity(n);
  while points.len() < n {
    let pt = Point::new(array_init(|_| rng.gen_range(0..=max)));
    if seen.insert(pt) {
      points.push(pt);
    }
  }
  points
}

impl PartialOrd for Point {
  fn partial_cmp(&self, other: &Point) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

// Natural order: y first, then x.
impl Ord for Point {
  fn cmp(&self, other: &Point) -> Ordering {
    self
      .array[1]
      .cmp(&other.array[1])
      .then_with(|| self.array[0].cmp(&other.array[0]))
  }
}

impl Index<usize> for Point {
  type Output = i32;
  fn index(&self, key: usize) -> &i32 {
    self.array.index(key)
  }
}

impl Deref for Point {
  type Target = [i32; 2];
  fn deref(&self) -> &[i32; 2] {
    &self.array
  }
}

impl From<(i32, i32)> for Point {
  fn from(point: (i32, i32)) -> Point {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl From<[i32; 2]> for Point {
  fn from(array: [i32; 2]) -> Point {
    Point { array }
  }
}

impl fmt::Display for Point {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.array[0], self.array[1])
  }
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
pub mod tests {
  use super::*;
  use crate::Orientation::*;

  use proptest::prelude::*;
  use rand::rngs::SmallRng;
  use rand::SeedableRng;
  use test_strategy::proptest;

  #[test]
  fn getters() {
    let pt = Point::new([3, -7]);
    assert_eq!(pt.x_coord(), 3);
    assert_eq!(pt.y_coord(), -7);
    assert_eq!(pt[0], 3);
    assert_eq!(pt.to_string(), "(3, -7)");
  }

  #[test]
  fn natural_order_is_y_then_x() {
    let a = Point::new([5, 1]);
    let b = Point::new([0, 2]);
    let c = Point::new([6, 1]);
    assert!(a < b);
    assert!(a < c);
    assert!(c < b);
    assert_eq!(a.cmp(&a), Ordering::Equal);
  }

  #[test]
  fn slopes() {
    let origin = Point::new([0, 0]);
    assert_eq!(origin.slope_to(&Point::new([2, 1])), 0.5);
    assert_eq!(origin.slope_to(&Point::new([-2, 1])), -0.5);
    assert_eq!(origin.slope_to(&Point::new([4, 0])), 0.0);
    assert_eq!(origin.slope_to(&Point::new([0, 5])), f64::INFINITY);
    assert_eq!(origin.slope_to(&Point::new([0, -5])), f64::INFINITY);
  }

  #[test]
  fn turns() {
    assert_eq!(
      Point::orient(
        &Point::new([0, 0]),
        &Point::new([1, 1]),
        &Point::new([2, 2])
      ),
      CoLinear
    );
    assert_eq!(
      Point::new([0, 0]).orientation(&Point::new([0, 1]), &Point::new([2, 2])),
      ClockWise
    );
    assert_eq!(
      Point::new([0, 0]).orientation(&Point::new([0, 1]), &Point::new([-2, 2])),
      CounterClockWise
    );
    assert_eq!(
      Point::new([1, 0]).orientation(&Point::new([0, 6]), &Point::new([0, 8])),
      ClockWise
    );
  }

  #[test]
  fn distances() {
    let origin = Point::new([0, 0]);
    let near = Point::new([1, 1]);
    let far = Point::new([2, 0]);
    assert_eq!(origin.squared_euclidean_distance(&far), 4);
    assert_eq!(origin.cmp_distance_to(&near, &far), Ordering::Less);
    let lo = Point::new([i32::MIN, i32::MIN]);
    let hi = Point::new([i32::MAX, i32::MAX]);
    assert_eq!(lo.squared_euclidean_distance(&hi), 2 * i128::from(u32::MAX).pow(2));
  }

  #[test]
  fn ccw_cmp_around_quadrants() {
    let origin = Point::new([0, 0]);
    let ring = [
      Point::new([1, 0]),
      Point::new([1, 1]),
      Point::new([0, 1]),
      Point::new([-1, 1]),
      Point::new([-1, 0]),
      Point::new([-1, -1]),
      Point::new([0, -1]),
      Point::new([1, -1]),
    ];
    for (i, a) in ring.iter().enumerate() {
      for (j, b) in ring.iter().enumerate() {
        assert_eq!(origin.ccw_cmp_around(a, b), i.cmp(&j), "{a} vs {b}");
      }
    }
    assert_eq!(
      origin.ccw_cmp_around(&Point::new([2, 2]), &Point::new([1, 1])),
      Ordering::Equal
    );
  }

  #[test]
  fn random_points_are_distinct() {
    let mut rng = SmallRng::seed_from_u64(0xdead_beef);
    let pts = random_points(50, 500, &mut rng);
    assert_eq!(pts.len(), 50);
    let set: BTreeSet<_> = pts.iter().collect();
    assert_eq!(set.len(), 50);
    assert!(pts
      .iter()
      .all(|p| (0..=500).contains(&p.x_coord()) && (0..=500).contains(&p.y_coord())));
  }

  #[test]
  fn random_points_fill_box() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(random_points(4, 1, &mut rng).len(), 4);
  }

  #[proptest]
  fn squared_distance_symmetric(a: [i32; 2], b: [i32; 2]) {
    let (a, b) = (Point::new(a), Point::new(b));
    prop_assert_eq!(
      a.squared_euclidean_distance(&b),
      b.squared_euclidean_distance(&a)
    );
  }

  #[proptest]
  fn ccw_cmp_around_antisymmetric(
    #[strategy(any::<[i16; 2]>())] o: [i16; 2],
    #[strategy(any::<[i16; 2]>())] p: [i16; 2],
    #[strategy(any::<[i16; 2]>())] q: [i16; 2],
  ) {
    let conv = |a: [i16; 2]| Point::new([i32::from(a[0]), i32::from(a[1])]);
    let (o, p, q) = (conv(o), conv(p), conv(q));
    prop_assume!(o != p && o != q);
    prop_assert_eq!(o.ccw_cmp_around(&p, &q), o.ccw_cmp_around(&q, &p).reverse());
  }
}
