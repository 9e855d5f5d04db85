mod hull;
mod hull_ring;
mod line;
pub(crate) mod point;
mod vertex_stack;

pub use hull::ConvexHull;
pub use hull_ring::{HullRing, NodeId, RingIter};
pub use line::{Line, Side};
pub use point::{random_points, Point};
pub use vertex_stack::VertexStack;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
