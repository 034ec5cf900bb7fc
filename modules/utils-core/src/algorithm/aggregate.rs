use alloc::{
  collections::{BTreeMap, BTreeSet},
  vec::Vec,
};


/// Counts the elements equal to `value`.
pub fn count<T: PartialEq>(elements: &[T], value: &T) -> usize {
  elements.iter().filter(|element| *element == value).count()
}

/// Counts the elements satisfying `pred`.
pub fn count_if<T>(elements: &[T], mut pred: impl FnMut(&T) -> bool) -> usize {
  elements.iter().filter(|&element| pred(element)).count()
}

/// Groups equal elements and counts the occurrences of each distinct value.
///
/// The map is ordered by value, so iteration over the result is deterministic.
#[must_use]
pub fn group_by<T: Ord + Clone>(elements: &[T]) -> BTreeMap<T, usize> {
  let mut groups = BTreeMap::new();
  for element in elements {
    *groups.entry(element.clone()).or_insert(0) += 1;
  }
  groups
}

/// Returns the distinct elements in first-seen order.
#[must_use]
pub fn unique_copy<T: Ord + Clone>(elements: &[T]) -> Vec<T> {
  let mut seen = BTreeSet::new();
  elements.iter().filter(|element| seen.insert(*element)).cloned().collect()
}
