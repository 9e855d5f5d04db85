// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Planar convex hulls over exact integer points.
//!
//! Eight classic algorithms share one contract: given distinct points they
//! return the extreme points in counterclockwise order. All predicates are
//! evaluated exactly, so results never depend on rounding.
//!
//! ```rust
//! # use planar_hull::algorithms::convex_hull;
//! # use planar_hull::data::Point;
//! let pts = vec![
//!   Point::new([0, 0]),
//!   Point::new([10, 0]),
//!   Point::new([10, 10]),
//!   Point::new([0, 10]),
//!   Point::new([5, 5]),
//! ];
//! let hull = convex_hull(pts).unwrap();
//! assert_eq!(hull.len(), 4);
//! ```
use std::fmt;

pub mod algorithms;
pub mod data;
pub mod order;
mod orientation;
mod utils;

#[cfg(test)]
pub mod testing;

pub use orientation::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Fewer than three input points, or fewer than two distinct ones.
  InsufficientVertices,
  DuplicatePoints,
  /// Two consecutive hull edges are either colinear or oriented clockwise.
  ConvexViolation,
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::DuplicatePoints => write!(f, "Duplicate points"),
      Error::ConvexViolation => write!(f, "Convex violation"),
    }
  }
}

impl std::error::Error for Error {}

/// An algorithm name that [`Algorithm`](algorithms::convex_hull::Algorithm)
/// does not recognise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError {
  name: String,
}

impl ParseAlgorithmError {
  pub(crate) fn new(name: &str) -> ParseAlgorithmError {
    ParseAlgorithmError {
      name: name.to_owned(),
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }
}

impl fmt::Display for ParseAlgorithmError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
    write!(f, "unknown convex hull algorithm: {}", self.name)
  }
}

impl std::error::Error for ParseAlgorithmError {}
