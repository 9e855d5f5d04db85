use std::ops::Index;

use super::Point;

/// Index of a node inside a [`HullRing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
  pub fn usize(self) -> usize {
    self.0
  }
}

#[derive(Debug, Clone)]
struct Node {
  point: Point,
  cw: NodeId,
  ccw: NodeId,
}

/// Arena of doubly linked hull vertices.
///
/// Every node belongs to exactly one cycle. A fresh node is a cycle of one:
/// both of its links point back at itself. Following `ccw` links walks a
/// hull counterclockwise, following `cw` links walks it clockwise.
///
/// Nodes can be flagged as collinear-disabled when they are created. Links
/// into or out of disabled nodes are never made.
#[derive(Debug, Clone, Default)]
pub struct HullRing {
  nodes: Vec<Node>,
  disabled: Vec<bool>,
}

impl HullRing {
  pub fn new() -> HullRing {
    HullRing::default()
  }

  pub fn with_capacity(capacity: usize) -> HullRing {
    HullRing {
      nodes: Vec::with_capacity(capacity),
      disabled: Vec::with_capacity(capacity),
    }
  }

  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  /// Allocate a self-looped node.
  pub fn insert(&mut self, point: Point, collinear_disabled: bool) -> NodeId {
    let id = NodeId(self.nodes.len());
    self.nodes.push(Node {
      point,
      cw: id,
      ccw: id,
    });
    self.disabled.push(collinear_disabled);
    id
  }

  pub fn point(&self, id: NodeId) -> &Point {
    &self.nodes[id.0].point
  }

  pub fn is_disabled(&self, id: NodeId) -> bool {
    self.disabled[id.0]
  }

  /// Clockwise neighbour.
  pub fn cw(&self, id: NodeId) -> NodeId {
    self.nodes[id.0].cw
  }

  /// Counterclockwise neighbour.
  pub fn ccw(&self, id: NodeId) -> NodeId {
    self.nodes[id.0].ccw
  }

  /// Make `next` the clockwise neighbour of `id` (and `id` the counterclockwise
  /// neighbour of `next`). Does nothing if either node is disabled.
  pub fn set_cw(&mut self, id: NodeId, next: NodeId) {
    if self.is_disabled(id) || self.is_disabled(next) {
      return;
    }
    self.nodes[id.0].cw = next;
    self.nodes[next.0].ccw = id;
  }

  /// Make `next` the counterclockwise neighbour of `id` (and `id` the clockwise
  /// neighbour of `next`). Does nothing if either node is disabled.
  pub fn set_ccw(&mut self, id: NodeId, next: NodeId) {
    if self.is_disabled(id) || self.is_disabled(next) {
      return;
    }
    self.nodes[id.0].ccw = next;
    self.nodes[next.0].cw = id;
  }

  /// Visit each node of the cycle containing `start` once, counterclockwise.
  pub fn iter_ccw(&self, start: NodeId) -> RingIter<'_> {
    RingIter {
      ring: self,
      start,
      next: Some(start),
      ccw: true,
    }
  }

  /// Visit each node of the cycle containing `start` once, clockwise.
  pub fn iter_cw(&self, start: NodeId) -> RingIter<'_> {
    RingIter {
      ring: self,
      start,
      next: Some(start),
      ccw: false,
    }
  }

  pub fn collect_ccw(&self, start: NodeId) -> Vec<Point> {
    self.iter_ccw(start).map(|id| self.nodes[id.0].point).collect()
  }
}

impl Index<NodeId> for HullRing {
  type Output = Point;
  fn index(&self, id: NodeId) -> &Point {
    self.point(id)
  }
}

pub struct RingIter<'a> {
  ring: &'a HullRing,
  start: NodeId,
  next: Option<NodeId>,
  ccw: bool,
}

impl<'a> Iterator for RingIter<'a> {
  type Item = NodeId;
  fn next(&mut self) -> Option<NodeId> {
    let current = self.next?;
    let following = if self.ccw {
      self.ring.ccw(current)
    } else {
      self.ring.cw(current)
    };
    self.next = if following == self.start {
      None
    } else {
      Some(following)
    };
    Some(current)
  }
}
