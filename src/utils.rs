use std::ops::Range;

use crate::data::Point;

/// Maximal runs of consecutive points with the same x-coordinate.
/// `pts` must be sorted by x.
pub fn vertical_runs(pts: &[Point]) -> impl Iterator<Item = Range<usize>> + '_ {
  let mut start = 0;
  std::iter::from_fn(move || {
    let x = pts.get(start)?.x_coord();
    let len = pts[start..]
      .iter()
      .take_while(|pt| pt.x_coord() == x)
      .count();
    let run = start..start + len;
    start += len;
    Some(run)
  })
}

/// Flags every point that lies strictly between the lowest and the highest
/// point of its vertical run. `pts` must be sorted by x, then y.
///
/// Such points are never hull vertices.
pub fn vertical_interiors(pts: &[Point]) -> Vec<bool> {
  let mut flags = vec![false; pts.len()];
  for run in vertical_runs(pts) {
    if run.len() > 2 {
      flags[run.start + 1..run.end - 1].fill(true);
    }
  }
  flags
}

// All orderings of `items`, duplicates included.
#[cfg(test)]
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
  fn heap<T: Clone>(k: usize, items: &mut Vec<T>, out: &mut Vec<Vec<T>>) {
    if k <= 1 {
      out.push(items.clone());
      return;
    }
    heap(k - 1, items, out);
    for i in 0..k - 1 {
      if k % 2 == 0 {
        items.swap(i, k - 1);
      } else {
        items.swap(0, k - 1);
      }
      heap(k - 1, items, out);
    }
  }
  let mut items = items.to_vec();
  let mut out = Vec::new();
  heap(items.len(), &mut items, &mut out);
  out
}
