use std::cmp::Ordering;

use super::heap_sort::heap_sort_by;

// https://en.wikipedia.org/wiki/Median_of_medians

const SMALL: usize = 6;
const GROUP: usize = 5;

/// $O(n)$ The element of rank `k` (0-based) under `cmp`, as if `items` had
/// been sorted. `items` is left untouched.
///
/// Worst-case linear time using the median-of-medians pivot.
///
/// # Panics
///
/// Panics if `k >= items.len()`.
///
/// # Examples
///
/// ```rust
/// # use planar_hull::algorithms::selection::select_by;
/// let v = [9, 3, 7, 1, 5, 8, 2];
/// assert_eq!(select_by(&v, 0, |a, b| a.cmp(b)), 1);
/// assert_eq!(select_by(&v, 3, |a, b| a.cmp(b)), 5);
/// ```
pub fn select_by<T, F>(items: &[T], k: usize, mut cmp: F) -> T
where
  T: Clone,
  F: FnMut(&T, &T) -> Ordering,
{
  assert!(k < items.len(), "rank {} out of bounds for {} items", k, items.len());
  select(items.to_vec(), k, &mut cmp)
}

/// Upper median: the element of rank `len / 2`.
///
/// # Panics
///
/// Panics if `items` is empty.
pub fn median_by<T, F>(items: &[T], cmp: F) -> T
where
  T: Clone,
  F: FnMut(&T, &T) -> Ordering,
{
  select_by(items, items.len() / 2, cmp)
}

fn select<T, F>(mut items: Vec<T>, mut k: usize, cmp: &mut F) -> T
where
  T: Clone,
  F: FnMut(&T, &T) -> Ordering,
{
  loop {
    if items.len() < SMALL {
      heap_sort_by(&mut items, &mut *cmp);
      return items.swap_remove(k);
    }
    let medians: Vec<T> = items
      .chunks(GROUP)
      .map(|group| {
        let mut group = group.to_vec();
        heap_sort_by(&mut group, &mut *cmp);
        let mid = group.len() / 2;
        group.swap_remove(mid)
      })
      .collect();
    let mid = medians.len() / 2;
    let pivot = select(medians, mid, cmp);

    let mut less = Vec::new();
    let mut greater = Vec::new();
    let mut equal = 0;
    for item in items {
      match cmp(&item, &pivot) {
        Ordering::Less => less.push(item),
        Ordering::Greater => greater.push(item),
        Ordering::Equal => equal += 1,
      }
    }
    if k < less.len() {
      items = less;
    } else if k < less.len() + equal {
      return pivot;
    } else {
      k -= less.len() + equal;
      items = greater;
    }
  }
}
