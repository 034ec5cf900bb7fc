use super::*;

fn backend(capacity: usize) -> VecStackBackend<u32> {
  VecStackBackend::try_with_capacity(capacity).unwrap()
}

#[test]
fn zero_capacity_is_rejected() {
  assert_eq!(VecStackBackend::<u32>::try_with_capacity(0).unwrap_err(), StackCapacityError::Zero);
}

#[test]
fn full_backend_hands_the_item_back() {
  let mut backend = backend(2);
  backend.push(1).unwrap();
  backend.push(2).unwrap();
  assert!(backend.is_full());

  let rejected = backend.push(3).unwrap_err();
  assert_eq!(rejected.into_inner(), 3);
  assert_eq!(backend.len(), 2);
  assert_eq!(backend.storage().as_slice(), &[1, 2]);
}

#[test]
fn pop_and_peek_follow_lifo_order() {
  let mut backend = backend(3);
  assert_eq!(backend.peek(), None);
  for value in [10, 20, 30] {
    backend.push(value).unwrap();
  }
  assert_eq!(backend.peek(), Some(&30));
  assert_eq!(backend.pop(), Ok(30));
  assert_eq!(backend.pop(), Ok(20));
  assert_eq!(backend.pop(), Ok(10));
  assert_eq!(backend.pop(), Err(StackError::Empty));
  assert!(backend.is_empty());
}

#[test]
fn push_error_converts_into_full() {
  let mut backend = backend(1);
  backend.push(1).unwrap();
  let err = backend.push(2).unwrap_err();
  assert_eq!(err.kind(), StackError::Full);
  assert_eq!(StackError::from(err), StackError::Full);
}
