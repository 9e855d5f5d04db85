//! Eight convex hull algorithms over the same contract.
//!
//! Every algorithm takes a set of distinct points and returns its extreme
//! points in counterclockwise order. Points lying on a hull edge are never
//! reported. Inputs with fewer than three points are rejected with
//! [`Error::InsufficientVertices`]. Inputs where every point lies on one line
//! produce a degenerate hull of the two extreme points.
//!
//! Duplicate points are a precondition violation. Deduplicate first (for
//! example through a `BTreeSet`) if the input may contain them.
use log::{debug, trace};
use std::fmt;
use std::str::FromStr;

use crate::data::{ConvexHull, Point};
use crate::order::XOrder;
use crate::{Error, ParseAlgorithmError};

pub mod chan;
pub mod divide_and_conquer;
pub mod gift_wrapping;
pub mod graham_scan;
pub mod incremental;
pub mod marriage_before_conquest;
pub mod monotone_chain;
pub mod quickhull;
mod tangent;

/// Selects one of the hull algorithms.
///
/// ```rust
/// # use planar_hull::algorithms::convex_hull::Algorithm;
/// # use planar_hull::data::Point;
/// let pts = vec![
///   Point::new([0, 0]),
///   Point::new([4, 0]),
///   Point::new([2, 1]),
///   Point::new([2, 5]),
/// ];
/// let algorithm: Algorithm = "chan".parse().unwrap();
/// let hull = algorithm.convex_hull(pts).unwrap();
/// assert_eq!(hull.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
  GrahamScan,
  JarvisMarch,
  MonotoneChain,
  DivideAndConquer,
  Incremental,
  QuickHull,
  Chan,
  MarriageBeforeConquest,
}

impl Algorithm {
  pub const ALL: [Algorithm; 8] = [
    Algorithm::GrahamScan,
    Algorithm::JarvisMarch,
    Algorithm::MonotoneChain,
    Algorithm::DivideAndConquer,
    Algorithm::Incremental,
    Algorithm::QuickHull,
    Algorithm::Chan,
    Algorithm::MarriageBeforeConquest,
  ];

  pub fn name(self) -> &'static str {
    match self {
      Algorithm::GrahamScan => "graham-scan",
      Algorithm::JarvisMarch => "jarvis-march",
      Algorithm::MonotoneChain => "monotone-chain",
      Algorithm::DivideAndConquer => "divide-and-conquer",
      Algorithm::Incremental => "incremental",
      Algorithm::QuickHull => "quickhull",
      Algorithm::Chan => "chan",
      Algorithm::MarriageBeforeConquest => "marriage-before-conquest",
    }
  }

  /// Worst-case running time, `h` being the number of hull vertices.
  pub fn complexity(self) -> &'static str {
    match self {
      Algorithm::GrahamScan
      | Algorithm::MonotoneChain
      | Algorithm::DivideAndConquer
      | Algorithm::Incremental => "O(n log n)",
      Algorithm::JarvisMarch => "O(nh)",
      Algorithm::QuickHull => "O(n^2)",
      Algorithm::Chan | Algorithm::MarriageBeforeConquest => "O(n log h)",
    }
  }

  pub fn convex_hull(self, pts: Vec<Point>) -> Result<ConvexHull, Error> {
    match self {
      Algorithm::GrahamScan => graham_scan::convex_hull(pts),
      Algorithm::JarvisMarch => gift_wrapping::convex_hull(pts),
      Algorithm::MonotoneChain => monotone_chain::convex_hull(pts),
      Algorithm::DivideAndConquer => divide_and_conquer::convex_hull(pts),
      Algorithm::Incremental => incremental::convex_hull(pts),
      Algorithm::QuickHull => quickhull::convex_hull(pts),
      Algorithm::Chan => chan::convex_hull(pts),
      Algorithm::MarriageBeforeConquest => marriage_before_conquest::convex_hull(pts),
    }
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for Algorithm {
  type Err = ParseAlgorithmError;

  fn from_str(s: &str) -> Result<Algorithm, ParseAlgorithmError> {
    let name = s.trim().to_ascii_lowercase().replace('_', "-");
    let algorithm = match name.as_str() {
      "graham-scan" | "graham" => Algorithm::GrahamScan,
      "jarvis-march" | "jarvis" | "gift-wrapping" => Algorithm::JarvisMarch,
      "monotone-chain" | "monotone" | "andrew" => Algorithm::MonotoneChain,
      "divide-and-conquer" | "divide-n-conquer" | "dnc" => Algorithm::DivideAndConquer,
      "incremental" => Algorithm::Incremental,
      "quickhull" | "quick-hull" => Algorithm::QuickHull,
      "chan" => Algorithm::Chan,
      "marriage-before-conquest" | "kirkpatrick-seidel" | "mbc" => {
        Algorithm::MarriageBeforeConquest
      }
      _ => return Err(ParseAlgorithmError::new(s)),
    };
    Ok(algorithm)
  }
}

/// Runs one algorithm over one point set and keeps the result around.
///
/// Before [`solve`](HullSolver::solve) the current hull is empty; afterwards
/// it is the complete counterclockwise hull.
#[derive(Debug, Clone)]
pub struct HullSolver {
  algorithm: Algorithm,
  points: Vec<Point>,
  hull: Option<ConvexHull>,
}

impl HullSolver {
  /// # Errors
  /// Returns [`Error::InsufficientVertices`] for fewer than three points.
  pub fn new(algorithm: Algorithm, points: Vec<Point>) -> Result<HullSolver, Error> {
    if points.len() < 3 {
      return Err(Error::InsufficientVertices);
    }
    Ok(HullSolver {
      algorithm,
      points,
      hull: None,
    })
  }

  pub fn algorithm(&self) -> Algorithm {
    self.algorithm
  }

  pub fn points(&self) -> &[Point] {
    &self.points
  }

  /// Compute the hull. Later calls return the cached result.
  pub fn solve(&mut self) -> Result<&ConvexHull, Error> {
    let hull = match self.hull.take() {
      Some(hull) => hull,
      None => {
        let hull = self.algorithm.convex_hull(self.points.clone())?;
        trace!(
          "{}: {} points, {} hull vertices",
          self.algorithm,
          self.points.len(),
          hull.len()
        );
        hull
      }
    };
    let hull: &ConvexHull = self.hull.insert(hull);
    Ok(hull)
  }

  /// The hull as far as it is known.
  pub fn hull(&self) -> &[Point] {
    self.hull.as_ref().map(ConvexHull::vertices).unwrap_or_default()
  }

  pub fn is_complete(&self) -> bool {
    self.hull.is_some()
  }
}

// Shared prologue: rejects small inputs and answers fully collinear ones.
// Ok(None) means the input spans a proper polygon.
pub(crate) fn degenerate_hull(pts: &[Point]) -> Result<Option<ConvexHull>, Error> {
  if pts.len() < 3 {
    return Err(Error::InsufficientVertices);
  }
  let (p, q) = (&pts[0], &pts[1]);
  if !pts.iter().all(|r| Point::orient(p, q, r).is_colinear()) {
    return Ok(None);
  }
  let lo = pts.iter().min_by(|a, b| XOrder.compare(a, b));
  let hi = pts.iter().max_by(|a, b| XOrder.compare(a, b));
  match (lo, hi) {
    (Some(lo), Some(hi)) if lo != hi => {
      debug!("all {} points are collinear; hull is {} -> {}", pts.len(), lo, hi);
      Ok(Some(ConvexHull::new_unchecked(vec![*lo, *hi])))
    }
    _ => Err(Error::InsufficientVertices),
  }
}
