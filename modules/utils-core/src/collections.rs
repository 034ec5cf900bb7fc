//! Collection data structures exposed by `kitbag-utils-core-rs`.

/// Capacity-bounded LIFO stack layered as storage, backend, and shared facade.
pub mod stack;
