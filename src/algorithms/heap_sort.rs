use std::cmp::Ordering;
use std::ops::Range;

// https://en.wikipedia.org/wiki/Heapsort

/// $O(n \log n)$ In-place, unstable sort with a caller supplied comparator.
///
/// Used instead of `sort_unstable_by` where the hull algorithms need a
/// guaranteed worst case and no allocation.
///
/// # Examples
///
/// ```rust
/// # use planar_hull::algorithms::heap_sort::heap_sort_by;
/// let mut v = vec![5, 1, 4, 2, 3];
/// heap_sort_by(&mut v, |a, b| b.cmp(a));
/// assert_eq!(v, vec![5, 4, 3, 2, 1]);
/// ```
pub fn heap_sort_by<T, F>(v: &mut [T], mut cmp: F)
where
  F: FnMut(&T, &T) -> Ordering,
{
  let mut len = v.len();
  // Build a max-heap. Heap positions are 1-based; slot `i` lives at v[i - 1].
  for i in (1..=len / 2).rev() {
    sink(v, i, len, &mut cmp);
  }
  while len > 1 {
    v.swap(0, len - 1);
    len -= 1;
    sink(v, 1, len, &mut cmp);
  }
}

/// Sort only `v[range]`. Elements outside the range are not touched, so a
/// partially filled buffer can be sorted without its tail.
///
/// # Panics
///
/// Panics if `range` is out of bounds.
pub fn heap_sort_range_by<T, F>(v: &mut [T], range: Range<usize>, cmp: F)
where
  F: FnMut(&T, &T) -> Ordering,
{
  heap_sort_by(&mut v[range], cmp)
}

fn sink<T, F>(v: &mut [T], mut i: usize, len: usize, cmp: &mut F)
where
  F: FnMut(&T, &T) -> Ordering,
{
  while 2 * i <= len {
    let mut child = 2 * i;
    if child < len && cmp(&v[child - 1], &v[child]).is_lt() {
      child += 1;
    }
    if cmp(&v[i - 1], &v[child - 1]).is_lt() {
      v.swap(i - 1, child - 1);
      i = child;
    } else {
      break;
    }
  }
}
