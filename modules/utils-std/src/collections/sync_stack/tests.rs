use std::{
  io::Write,
  sync::{Arc, Barrier, Mutex},
  thread,
};

use kitbag_utils_core_rs::collections::stack::StackError;
use tracing::subscriber::with_default;
use tracing_subscriber::fmt;

use super::*;

#[test]
fn push_pop_roundtrip() {
  let stack = make_std_vec_stack::<u32>(4).unwrap();
  assert!(stack.push(1).is_ok());
  assert!(stack.push(2).is_ok());
  assert_eq!(stack.len(), 2);
  assert_eq!(stack.pop().unwrap(), 2);
  assert_eq!(stack.pop().unwrap(), 1);
  assert!(matches!(stack.pop(), Err(StackError::Empty)));
}

#[test]
fn zero_capacity_is_rejected() {
  assert_eq!(make_std_vec_stack::<u32>(0).unwrap_err(), StackCapacityError::Zero);
}

#[test]
fn capacity_three_end_to_end() {
  let stack = make_std_vec_stack(3).unwrap();
  assert!(stack.push(1).is_ok());
  assert!(stack.push(2).is_ok());
  assert!(stack.push(3).is_ok());
  assert!(stack.push(4).is_err());
  assert_eq!(stack.len(), 3);
  assert_eq!(stack.pop(), Ok(3));
  assert_eq!(stack.pop(), Ok(2));
  assert_eq!(stack.pop(), Ok(1));
  assert_eq!(stack.pop(), Err(StackError::Empty));
}

#[test]
fn threads_racing_for_remaining_capacity() {
  const THREADS: usize = 32;
  let stack = make_std_vec_stack::<usize>(20).unwrap();
  for value in 0..5 {
    stack.push(value).unwrap();
  }
  let remaining = stack.capacity() - stack.len();
  let barrier = Arc::new(Barrier::new(THREADS));

  let handles: Vec<_> = (0..THREADS)
    .map(|index| {
      let stack = stack.clone();
      let barrier = barrier.clone();
      thread::spawn(move || {
        barrier.wait();
        stack.push(100 + index).is_ok()
      })
    })
    .collect();
  let accepted = handles.into_iter().map(|handle| handle.join().unwrap()).filter(|ok| *ok).count();

  assert_eq!(accepted, remaining);
  assert_eq!(stack.len(), 5 + remaining);

  let mut drained = Vec::new();
  while let Ok(value) = stack.pop() {
    drained.push(value);
  }
  assert_eq!(&drained[remaining..], &[4, 3, 2, 1, 0]);
  drained[..remaining].iter().for_each(|value| assert!((100..100 + THREADS).contains(value)));
}

#[test]
fn peeks_share_the_lock() {
  let stack = make_std_vec_stack::<u32>(2).unwrap();
  stack.push(9).unwrap();

  let held = stack.shared().read();
  let peeked = thread::scope(|scope| {
    let reader = stack.clone();
    scope.spawn(move || reader.peek()).join().unwrap()
  });
  drop(held);

  assert_eq!(peeked, Ok(9));
  assert_eq!(stack.len(), 1);
}

#[test]
fn concurrent_mixed_operations_keep_len_consistent() {
  let stack = make_std_vec_stack::<u64>(16).unwrap();
  let pushed = Arc::new(Mutex::new(0_usize));
  let popped = Arc::new(Mutex::new(0_usize));

  thread::scope(|scope| {
    for worker in 0..8_u64 {
      let stack = stack.clone();
      let pushed = pushed.clone();
      let popped = popped.clone();
      scope.spawn(move || {
        for step in 0..500_u64 {
          if (worker + step) % 3 == 0 {
            if stack.pop().is_ok() {
              *popped.lock().unwrap() += 1;
            }
          } else if stack.push(step).is_ok() {
            *pushed.lock().unwrap() += 1;
          }
          let _ = stack.peek();
        }
      });
    }
  });

  let pushed = *pushed.lock().unwrap();
  let popped = *popped.lock().unwrap();
  assert_eq!(stack.len(), pushed - popped);
  assert!(stack.len() <= stack.capacity());
}

struct CaptureWriter {
  buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for CaptureWriter {
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    let mut guard = self.buffer.lock().unwrap();
    guard.extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

#[test]
fn rejected_push_is_logged() {
  let buffer: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));
  let writer_source = buffer.clone();
  let subscriber = fmt::SubscriberBuilder::default()
    .with_max_level(tracing::Level::DEBUG)
    .with_writer(move || CaptureWriter { buffer: writer_source.clone() })
    .with_ansi(false)
    .finish();

  let stack = make_std_vec_stack::<u8>(1).unwrap();
  with_default(subscriber, || {
    stack.push(1).unwrap();
    assert!(stack.push(2).is_err());
  });

  let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
  assert!(output.contains("push rejected: stack is full"));
  assert!(output.contains("capacity=1"));
}
