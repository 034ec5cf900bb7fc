use alloc::vec::Vec;
use core::cmp::Ordering;

#[cfg(test)]
mod tests;

/// Returns a sorted copy of `items` using a top-down merge sort.
///
/// The sort is stable and runs in O(n log n). Elements that do not compare (a `NaN`, say) are
/// treated as equal to their neighbour, which keeps them in input order relative to it.
#[must_use]
pub fn merge_sort<T: PartialOrd + Clone>(items: &[T]) -> Vec<T> {
  merge_sort_by(items, |left, right| left.partial_cmp(right).unwrap_or(Ordering::Equal))
}

/// Returns a copy of `items` sorted with `compare`, using a stable top-down merge sort.
pub fn merge_sort_by<T: Clone>(items: &[T], mut compare: impl FnMut(&T, &T) -> Ordering) -> Vec<T> {
  sort_slice(items, &mut compare)
}

fn sort_slice<T: Clone, F>(items: &[T], compare: &mut F) -> Vec<T>
where
  F: FnMut(&T, &T) -> Ordering, {
  if items.len() <= 1 {
    return items.to_vec();
  }
  let (left, right) = items.split_at(items.len() / 2);
  let left = sort_slice(left, compare);
  let right = sort_slice(right, compare);
  merge(left, right, compare)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
  F: FnMut(&T, &T) -> Ordering, {
  let mut merged = Vec::with_capacity(left.len() + right.len());
  let mut left = left.into_iter().peekable();
  let mut right = right.into_iter().peekable();
  loop {
    // ties go left, which is what makes the sort stable
    let take_right = match (left.peek(), right.peek()) {
      | (Some(l), Some(r)) => compare(r, l) == Ordering::Less,
      | (Some(_), None) => false,
      | (None, Some(_)) => true,
      | (None, None) => break,
    };
    merged.extend(if take_right { right.next() } else { left.next() });
  }
  merged
}
