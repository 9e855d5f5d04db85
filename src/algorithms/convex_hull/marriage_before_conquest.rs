use num_rational::Ratio;

use super::degenerate_hull;
use crate::algorithms::selection::{median_by, select_by};
use crate::data::{ConvexHull, Line, Point, VertexStack};
use crate::Error;

// Kirkpatrick, D. G., & Seidel, R. (1986). The ultimate planar convex hull
// algorithm? SIAM Journal on Computing, 15(1), 287-299.

/// $O(n \log h)$ Convex hull of a set of points.
///
/// Marriage-before-conquest (Kirkpatrick–Seidel). The upper and lower hulls
/// are built separately. For each, the hull edge crossing the median vertical
/// line (the bridge) is found in linear time through prune-and-search, then
/// the points left and right of the bridge are handled recursively.
///
/// # Errors
/// Will return an error iff the input set contains less than three points.
///
/// # Properties
/// * No points from the input set will be outside the returned convex hull.
/// * All vertices in the convex hull are from the input set.
/// * The first vertex is the leftmost point (lowest among ties).
pub fn convex_hull(pts: Vec<Point>) -> Result<ConvexHull, Error> {
  if let Some(hull) = degenerate_hull(&pts)? {
    return Ok(hull);
  }
  let lower = half_hull(Half::Lower, &pts);
  let upper = half_hull(Half::Upper, &pts);

  // Lower hull left to right, then upper hull right to left. The two chains
  // share their endpoints whenever the extreme x-coordinates are unique.
  let mut chain = lower;
  for pt in upper.into_iter().rev() {
    if chain.last() != Some(&pt) {
      chain.push(pt);
    }
  }
  if chain.len() > 1 && chain.first() == chain.last() {
    chain.pop();
  }

  // A bridge may end on a point in the middle of a hull edge. The first
  // vertex is extreme, so it goes through the sweep twice to close the loop.
  let mut hull = VertexStack::new();
  for pt in chain.iter().chain(chain.first()) {
    while let Some((top, below)) = hull.last_two() {
      if Point::orient(below, top, pt).is_ccw() {
        break;
      }
      hull.pop();
    }
    hull.push(*pt);
  }
  hull.pop();
  Ok(ConvexHull::new_unchecked(hull.into_vec()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Half {
  Upper,
  Lower,
}

impl Half {
  // The lower hull is computed as the upper hull of the mirrored points.
  fn lift(self, pt: &Point) -> Lifted {
    let (x, y) = (i64::from(pt.x_coord()), i64::from(pt.y_coord()));
    let y = match self {
      Half::Upper => y,
      Half::Lower => -y,
    };
    Lifted {
      x,
      y,
      pt: *pt,
      half: self,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Lifted {
  x: i64,
  y: i64,
  pt: Point,
  half: Half,
}

impl Lifted {
  // Slope in lifted coordinates. None for vertical pairs.
  fn slope_to(&self, other: &Lifted) -> Option<Ratio<i64>> {
    let slope = Line::new(self.pt, other.pt).exact_slope()?;
    Some(match self.half {
      Half::Upper => slope,
      Half::Lower => -slope,
    })
  }
}

// Vertices of one half hull, left to right.
fn half_hull(half: Half, pts: &[Point]) -> Vec<Point> {
  let lifted: Vec<Lifted> = pts.iter().map(|pt| half.lift(pt)).collect();
  let left = lifted
    .iter()
    .min_by(|a, b| a.x.cmp(&b.x).then_with(|| b.y.cmp(&a.y)));
  let right = lifted
    .iter()
    .max_by(|a, b| a.x.cmp(&b.x).then_with(|| a.y.cmp(&b.y)));
  let (left, right) = match (left, right) {
    (Some(left), Some(right)) => (*left, *right),
    _ => return Vec::new(),
  };
  if left.x == right.x {
    return vec![left.pt];
  }

  let mut candidates = vec![left, right];
  candidates.extend(lifted.iter().filter(|p| left.x < p.x && p.x < right.x));
  let mut out = Vec::new();
  connect(left, right, &candidates, &mut out);
  out.into_iter().map(|p| p.pt).collect()
}

// Push the upper hull of `pts` from `left` to `right`, both included. `left`
// and `right` are the unique points of `pts` with the smallest and largest x.
fn connect(left: Lifted, right: Lifted, pts: &[Lifted], out: &mut Vec<Lifted>) {
  let xs: Vec<i64> = pts.iter().map(|p| p.x).collect();
  let median = select_by(&xs, (xs.len() - 1) / 2, |a, b| a.cmp(b));
  let (i, j) = match bridge(pts, median) {
    Some(edge) => edge,
    None => (left, right),
  };

  if i == left {
    out.push(i);
  } else {
    let mut below = vec![i];
    below.extend(pts.iter().filter(|p| p.x < i.x));
    connect(left, i, &below, out);
  }
  if j == right {
    out.push(j);
  } else {
    let mut above = vec![j];
    above.extend(pts.iter().filter(|p| p.x > j.x));
    connect(j, right, &above, out);
  }
}

// The upper hull edge (i, j) with i.x <= a < j.x.
//
// Each round pairs the candidates up and takes the median slope K of the
// pairs. The line of slope K supporting the candidates from above tells on
// which side of `a` the bridge lies, and then one point of every pair on the
// wrong side of K can be dropped.
fn bridge(pts: &[Lifted], a: i64) -> Option<(Lifted, Lifted)> {
  let mut candidates = pts.to_vec();
  loop {
    if let [p, q] = candidates.as_slice() {
      return Some(if p.x <= q.x { (*p, *q) } else { (*q, *p) });
    }

    let mut next = Vec::with_capacity(candidates.len());
    let mut pairs = Vec::with_capacity(candidates.len() / 2);
    for chunk in candidates.chunks(2) {
      match chunk {
        [p, q] => {
          let (p, q) = if p.x <= q.x { (*p, *q) } else { (*q, *p) };
          match p.slope_to(&q) {
            Some(slope) => pairs.push((p, q, slope)),
            // Only the higher point of a vertical pair can be on the upper hull.
            None => next.push(if p.y > q.y { p } else { q }),
          }
        }
        [p] => next.push(*p),
        _ => {}
      }
    }
    if pairs.is_empty() {
      if next.len() < 2 {
        return None;
      }
      candidates = next;
      continue;
    }

    let slopes: Vec<Ratio<i64>> = pairs.iter().map(|(_, _, slope)| *slope).collect();
    let k = median_by(&slopes, |a, b| a.cmp(b));
    // Proportional to y - K*x; the denominator of a Ratio is always positive.
    let height = |p: &Lifted| {
      i128::from(p.y) * i128::from(*k.denom()) - i128::from(*k.numer()) * i128::from(p.x)
    };
    let top = candidates.iter().map(&height).max()?;
    let on_top = candidates.iter().filter(|p| height(p) == top);
    let pk = *on_top.clone().min_by_key(|p| p.x)?;
    let pm = *on_top.max_by_key(|p| p.x)?;

    if pk.x <= a && a < pm.x {
      return Some((pk, pm));
    }
    for &(p, q, slope) in &pairs {
      if pm.x <= a {
        // The bridge is less steep than K.
        if slope < k {
          next.push(p);
        }
        next.push(q);
      } else {
        // The bridge is steeper than K.
        next.push(p);
        if slope > k {
          next.push(q);
        }
      }
    }
    candidates = next;
  }
}
