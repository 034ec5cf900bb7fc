use super::*;

fn is_sorted<T: PartialOrd>(values: &[T]) -> bool {
  values.windows(2).all(|pair| pair[0] <= pair[1])
}

#[test]
fn sorts_integers() {
  let data = [-15, 2, 13, -20, -32, 23, 53, 102, -13];
  let sorted = merge_sort(&data);
  assert_eq!(sorted, vec![-32, -20, -15, -13, 2, 13, 23, 53, 102]);
  assert_eq!(data[0], -15);
}

#[test]
fn sorts_floats_including_infinity() {
  let floats = [-12351.2, 123.30, 9923.2, -2300.5, f64::NEG_INFINITY];
  let sorted = merge_sort(&floats);
  assert!(is_sorted(&sorted));
  assert_eq!(sorted[0], f64::NEG_INFINITY);
}

#[test]
fn handles_empty_and_single_inputs() {
  assert!(merge_sort::<i32>(&[]).is_empty());
  assert_eq!(merge_sort(&[42]), vec![42]);
}

#[test]
fn sort_is_stable() {
  let records = [(3, 'a'), (1, 'b'), (3, 'c'), (2, 'd'), (1, 'e')];
  let sorted = merge_sort_by(&records, |left, right| left.0.cmp(&right.0));
  assert_eq!(sorted, vec![(1, 'b'), (1, 'e'), (2, 'd'), (3, 'a'), (3, 'c')]);
}

#[test]
fn sort_by_accepts_custom_order() {
  let words = ["pear", "fig", "banana", "kiwi"];
  let by_len_desc = merge_sort_by(&words, |left, right| right.len().cmp(&left.len()));
  assert_eq!(by_len_desc, vec!["banana", "pear", "kiwi", "fig"]);
}

#[test]
fn matches_std_sort_on_larger_input() {
  let mut state = 0x2545_f491_u32;
  let values: Vec<u32> = (0..500)
    .map(|_| {
      state ^= state << 13;
      state ^= state >> 17;
      state ^= state << 5;
      state % 1_000
    })
    .collect();
  let mut expected = values.clone();
  expected.sort();
  assert_eq!(merge_sort(&values), expected);
}
