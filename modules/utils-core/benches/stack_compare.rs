use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use kitbag_utils_core_rs::{SharedVecStack, StackBackend, VecStackBackend};

const BATCH: u32 = 256;

fn make_backend() -> VecStackBackend<u32> {
  VecStackBackend::try_with_capacity(BATCH as usize).unwrap()
}

fn make_shared_stack() -> SharedVecStack<u32> {
  SharedVecStack::with_capacity(BATCH as usize).unwrap()
}

fn bench_stack_push_pop(c: &mut Criterion) {
  let mut group = c.benchmark_group("stack_push_pop");

  group.bench_function("unshared_vec_backend", |b| {
    b.iter_batched(
      make_backend,
      |mut backend| {
        for value in 0..BATCH {
          backend.push(value).unwrap();
        }
        for _ in 0..BATCH {
          let _ = backend.pop().unwrap();
        }
      },
      BatchSize::SmallInput,
    );
  });

  group.bench_function("spin_rw_shared_stack", |b| {
    b.iter_batched(
      make_shared_stack,
      |stack| {
        for value in 0..BATCH {
          stack.push(value).unwrap();
        }
        for _ in 0..BATCH {
          let _ = stack.pop().unwrap();
        }
      },
      BatchSize::SmallInput,
    );
  });

  group.finish();
}

fn bench_stack_peek(c: &mut Criterion) {
  let stack = make_shared_stack();
  stack.push(1).unwrap();
  c.bench_function("spin_rw_shared_stack_peek", |b| b.iter(|| stack.peek().unwrap()));
}

criterion_group!(benches, bench_stack_push_pop, bench_stack_peek);
criterion_main!(benches);
