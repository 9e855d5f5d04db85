use super::Point;

const MIN_CAPACITY: usize = 4;

/// LIFO stack of hull vertices.
///
/// Storage starts at four slots, doubles when full and is halved once the
/// stack drops to a quarter of its capacity.
#[derive(Debug, Clone)]
pub struct VertexStack {
  slots: Vec<Point>,
  capacity: usize,
}

impl Default for VertexStack {
  fn default() -> Self {
    VertexStack::new()
  }
}

impl VertexStack {
  pub fn new() -> VertexStack {
    VertexStack {
      slots: Vec::with_capacity(MIN_CAPACITY),
      capacity: MIN_CAPACITY,
    }
  }

  pub fn len(&self) -> usize {
    self.slots.len()
  }

  pub fn is_empty(&self) -> bool {
    self.slots.is_empty()
  }

  /// Number of slots currently reserved.
  pub fn capacity(&self) -> usize {
    self.capacity
  }

  pub fn push(&mut self, pt: Point) {
    if self.slots.len() == self.capacity {
      self.resize(self.capacity * 2);
    }
    self.slots.push(pt);
  }

  /// Remove and return the most recently pushed vertex.
  ///
  /// # Panics
  ///
  /// Panics if the stack is empty.
  pub fn pop(&mut self) -> Point {
    let top = self
      .slots
      .pop()
      .unwrap_or_else(|| panic!("pop from an empty vertex stack"));
    if self.capacity > MIN_CAPACITY && self.slots.len() <= self.capacity / 4 {
      self.resize(self.capacity / 2);
    }
    top
  }

  pub fn last(&self) -> Option<&Point> {
    self.slots.last()
  }

  /// The two most recently pushed vertices, most recent first.
  pub fn last_two(&self) -> Option<(&Point, &Point)> {
    match self.slots.as_slice() {
      [.., below, top] => Some((top, below)),
      _ => None,
    }
  }

  pub fn clear(&mut self) {
    self.slots.clear();
    self.resize(MIN_CAPACITY);
  }

  /// Bottom-to-top snapshot sized exactly to the contents.
  pub fn to_vec(&self) -> Vec<Point> {
    self.slots.clone()
  }

  pub fn into_vec(self) -> Vec<Point> {
    self.slots
  }

  pub fn as_slice(&self) -> &[Point] {
    &self.slots
  }

  fn resize(&mut self, capacity: usize) {
    let mut slots = Vec::with_capacity(capacity);
    slots.append(&mut self.slots);
    self.slots = slots;
    self.capacity = capacity;
  }
}
