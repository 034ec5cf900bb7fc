
/// Returns `true` when every element satisfies `pred`. Vacuously `true` for an empty slice.
pub fn all_of<T>(elements: &[T], pred: impl FnMut(&T) -> bool) -> bool {
  elements.iter().all(pred)
}

/// Returns `true` when at least one element satisfies `pred`. `false` for an empty slice.
pub fn any_of<T>(elements: &[T], pred: impl FnMut(&T) -> bool) -> bool {
  elements.iter().any(pred)
}

/// Returns `true` when no element satisfies `pred`.
pub fn none_of<T>(elements: &[T], pred: impl FnMut(&T) -> bool) -> bool {
  !any_of(elements, pred)
}

/// Calls `f` with every element, in order.
pub fn for_each<T>(elements: &[T], f: impl FnMut(&T)) {
  elements.iter().for_each(f);
}
