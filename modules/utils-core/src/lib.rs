#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::redundant_pattern)]
#![deny(clippy::redundant_static_lifetimes)]
#![deny(clippy::unnecessary_to_owned)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_ok_or)]
#![deny(clippy::manual_map)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unused_self)]
#![deny(clippy::unnecessary_wraps)]
#![deny(clippy::unreachable)]
#![deny(clippy::no_effect)]
#![deny(dropping_copy_types)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![deny(clippy::from_over_into)]
#![deny(clippy::eq_op)]
#![deny(clippy::bool_comparison)]
#![deny(clippy::needless_bool)]
#![deny(clippy::match_like_matches_macro)]
#![deny(clippy::manual_assert)]
#![deny(clippy::if_same_then_else)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! Runtime-agnostic utility primitives.
//!
//! The crate is `no_std` + `alloc` and hosts everything that does not need an operating system:
//! the capacity-bounded [`SyncStack`](collections::stack::SyncStack) together with the lock
//! abstraction it is generic over, pure slice algorithms (predicates, aggregation, search, merge
//! sort), the lazy [`Generator`](generator::Generator), and the Postgres connection configuration
//! formatter. Std bindings live in `kitbag-utils-std-rs`.

extern crate alloc;

/// Pure predicate, aggregation, search, and sort functions over slices.
pub mod algorithm;
/// Collection data structures built on the shared/lock abstractions.
pub mod collections;
/// Lazy, finite, restartable value generators.
pub mod generator;
/// Postgres connection configuration and keyword/value formatting.
pub mod pg;
/// Shared ownership and lock abstractions.
pub mod sync;

pub use algorithm::{
  all_of, any_of, binary_search, count, count_if, for_each, group_by, linear_search, merge_sort, merge_sort_by,
  none_of, unique_copy,
};
pub use collections::stack::{
  PushError, SharedVecStack, StackBackend, StackCapacityError, StackError, StackStorage, SyncStack, VecStackBackend,
  VecStackStorage,
};
pub use generator::{Generator, GeneratorIntoIter, GeneratorIter};
pub use pg::{ConnectionConfig, SslMode, SslModeParseError, DEFAULT_PORT};
pub use sync::{ArcShared, SpinRwLock, SyncRwLockLike};
