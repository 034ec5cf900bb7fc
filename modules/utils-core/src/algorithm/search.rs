use core::cmp::Ordering;


/// Returns the index of the first element equal to `x`.
pub fn linear_search<T: PartialEq>(values: &[T], x: &T) -> Option<usize> {
  values.iter().position(|value| value == x)
}

/// Searches an ascending slice for `x` by bisection.
///
/// Works with any `PartialOrd` element, floats included. Elements that do not compare with `x`
/// (a `NaN`, say) end the search with `None`. When `x` occurs several times, any one of the
/// matching indices may be returned.
pub fn binary_search<T: PartialOrd>(values: &[T], x: &T) -> Option<usize> {
  let mut low = 0;
  let mut high = values.len();
  while low < high {
    let mid = low + (high - low) / 2;
    match values[mid].partial_cmp(x)? {
      | Ordering::Equal => return Some(mid),
      | Ordering::Greater => high = mid,
      | Ordering::Less => low = mid + 1,
    }
  }
  None
}
