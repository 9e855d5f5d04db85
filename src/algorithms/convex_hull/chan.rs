use log::debug;
use std::collections::HashMap;

use super::degenerate_hull;
use super::graham_scan::{hull_of, scan};
use crate::algorithms::heap_sort::heap_sort_by;
use crate::data::{ConvexHull, Point};
use crate::order::PolarOrder;
use crate::Error;

// https://en.wikipedia.org/wiki/Chan%27s_algorithm

/// Tuning for [`convex_hull_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChanConfig {
  /// First guess for the number of hull vertices. Values below 2 act as 2.
  pub initial_group_size: usize,
}

impl Default for ChanConfig {
  fn default() -> ChanConfig {
    ChanConfig {
      initial_group_size: 4,
    }
  }
}

/// $O(n \log h)$ Convex hull of a set of points.
///
/// Same as [`convex_hull_with`] using the default [`ChanConfig`].
///
/// # Errors
/// Will return an error iff the input set contains less than three points.
pub fn convex_hull(pts: Vec<Point>) -> Result<ConvexHull, Error> {
  convex_hull_with(pts, ChanConfig::default())
}

/// $O(n \log h)$ Convex hull of a set of points.
///
/// Guesses the hull size `m`, splits the input into groups of `m` points and
/// computes each group's hull with a Graham scan. A gift wrapping pass then
/// walks around those mini-hulls, finding the tangent to each one by binary
/// search. If the walk has not closed after `m` steps the guess was too small:
/// `m` is squared, the mini-hulls are merged into coarser groups and the walk
/// starts over.
///
/// # Errors
/// Will return an error iff the input set contains less than three points.
///
/// # Properties
/// * No points from the input set will be outside the returned convex hull.
/// * All vertices in the convex hull are from the input set.
/// * The first vertex is the lowest point (leftmost among ties).
pub fn convex_hull_with(pts: Vec<Point>, config: ChanConfig) -> Result<ConvexHull, Error> {
  if let Some(hull) = degenerate_hull(&pts)? {
    return Ok(hull);
  }
  let start = pts.iter().copied().min().ok_or(Error::InsufficientVertices)?;
  let mut m = config.initial_group_size.max(2);
  let mut groups: Vec<Vec<Point>> = pts
    .chunks(m)
    .map(|chunk| hull_of(&mut chunk.to_vec()))
    .collect();

  loop {
    if let Some(hull) = wrap(&groups, start, m) {
      return Ok(ConvexHull::new_unchecked(hull));
    }
    let grown = m.saturating_mul(m);
    let count = pts.len().div_ceil(grown);
    debug!(
      "chan: hull has more than {} vertices, regrouping {} mini-hulls into {} (m = {})",
      m,
      groups.len(),
      count,
      grown
    );
    m = grown;
    groups = regroup(groups, count);
  }
}

// Gift wrapping over the mini-hulls. None if the hull does not close within
// `limit` steps.
fn wrap(groups: &[Vec<Point>], start: Point, limit: usize) -> Option<Vec<Point>> {
  let owner: HashMap<Point, (usize, usize)> = groups
    .iter()
    .enumerate()
    .flat_map(|(g, group)| group.iter().enumerate().map(move |(i, pt)| (*pt, (g, i))))
    .collect();

  let mut hull = vec![start];
  let mut p = start;
  for _ in 0..limit {
    let mut best: Option<Point> = None;
    for (g, group) in groups.iter().enumerate() {
      let candidate = match owner.get(&p) {
        Some(&(home, i)) if home == g => successor(group, i),
        _ => right_tangent(group, &p),
      };
      best = match (best, candidate) {
        (Some(b), Some(q)) if !turns_further(&p, &b, &q) => Some(b),
        (best, None) => best,
        (_, q) => q,
      };
    }
    let q = best?;
    if q == start {
      return Some(hull);
    }
    hull.push(q);
    p = q;
  }
  None
}

// Is `q` a better gift wrapping candidate than `b`, seen from `p`?
fn turns_further(p: &Point, b: &Point, q: &Point) -> bool {
  let orientation = Point::orient(p, b, q);
  orientation.is_cw() || (orientation.is_colinear() && p.cmp_distance_to(q, b).is_gt())
}

fn successor(hull: &[Point], i: usize) -> Option<Point> {
  if hull.len() < 2 {
    None
  } else {
    Some(hull[(i + 1) % hull.len()])
  }
}

/// The vertex `q` of a counterclockwise convex polygon such that no vertex is
/// right of `p -> q`, the farthest one on ties. `p` must lie outside `hull`.
///
/// O(log n)
fn right_tangent(hull: &[Point], p: &Point) -> Option<Point> {
  let n = hull.len();
  if n <= 2 {
    return hull.iter().copied().reduce(|b, q| {
      if turns_further(p, &b, &q) {
        q
      } else {
        b
      }
    });
  }

  // Edge i runs from hull[i] to hull[i + 1]. The edges visible from `p` form
  // one contiguous run and the tangent vertex ends it.
  let visible = |i: usize| Point::orient(p, &hull[i], &hull[(i + 1) % n]).is_cw();
  let right_of_first = |i: usize| Point::orient(p, &hull[0], &hull[i]);
  let t = if visible(0) {
    first_in(1, n, |i| !visible(i) || !right_of_first(i).is_cw())
  } else if visible(n - 1) {
    0
  } else {
    first_in(1, n, |i| {
      let side = right_of_first(i);
      !visible(i) && (side.is_cw() || (side.is_colinear() && visible(i - 1)))
    })
  };
  let t = t % n;

  let (tangent, next) = (hull[t], hull[(t + 1) % n]);
  if Point::orient(p, &tangent, &next).is_colinear() && p.cmp_distance_to(&next, &tangent).is_gt()
  {
    Some(next)
  } else {
    Some(tangent)
  }
}

// Smallest index in lo..hi satisfying a monotone predicate, or hi.
fn first_in<F>(mut lo: usize, mut hi: usize, pred: F) -> usize
where
  F: Fn(usize) -> bool,
{
  while lo < hi {
    let mid = lo + (hi - lo) / 2;
    if pred(mid) {
      hi = mid;
    } else {
      lo = mid + 1;
    }
  }
  lo
}

// Deal the mini-hulls round-robin into `count` groups and merge each group
// into one hull.
fn regroup(hulls: Vec<Vec<Point>>, count: usize) -> Vec<Vec<Point>> {
  let count = count.max(1);
  let mut buckets: Vec<Vec<Vec<Point>>> = vec![Vec::new(); count];
  for (i, hull) in hulls.into_iter().enumerate() {
    buckets[i % count].push(hull);
  }
  buckets.into_iter().filter_map(merge_all).collect()
}

fn merge_all(mut hulls: Vec<Vec<Point>>) -> Option<Vec<Point>> {
  while hulls.len() > 1 {
    let mut merged = Vec::with_capacity(hulls.len().div_ceil(2));
    let mut iter = hulls.into_iter();
    while let Some(a) = iter.next() {
      merged.push(match iter.next() {
        Some(b) => merge_hulls(a, b),
        None => a,
      });
    }
    hulls = merged;
  }
  hulls.pop()
}

// Both hulls start at their lowest vertex. The lower of the two starts is the
// pivot: its own hull is already in polar order around it, the other one gets
// sorted, and a linear merge feeds a single Graham pass.
fn merge_hulls(a: Vec<Point>, b: Vec<Point>) -> Vec<Point> {
  if a.is_empty() {
    return b;
  }
  if b.is_empty() {
    return a;
  }
  let (own, mut other) = if b[0] < a[0] { (b, a) } else { (a, b) };
  let order = PolarOrder::new(own[0]);
  heap_sort_by(&mut other, |x, y| order.compare(x, y));

  let mut sorted = Vec::with_capacity(own.len() + other.len());
  let (mut i, mut j) = (0, 0);
  while i < own.len() && j < other.len() {
    if order.compare(&other[j], &own[i]).is_lt() {
      sorted.push(other[j]);
      j += 1;
    } else {
      sorted.push(own[i]);
      i += 1;
    }
  }
  sorted.extend_from_slice(&own[i..]);
  sorted.extend_from_slice(&other[j..]);
  scan(&sorted).into_vec()
}
