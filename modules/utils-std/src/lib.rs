#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::disallowed_types))]
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
#![deny(clippy::unnecessary_struct_initialization)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::manual_ok_or)]
#![deny(clippy::manual_map)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::manual_strip)]
#![deny(clippy::unused_async)]
#![deny(clippy::unused_self)]
#![deny(clippy::unnecessary_wraps)]
#![deny(clippy::unreachable)]
#![deny(clippy::empty_enum)]
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
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![deny(clippy::from_over_into)]
#![deny(clippy::eq_op)]
#![deny(clippy::bool_comparison)]
#![deny(clippy::needless_bool)]
#![deny(clippy::match_like_matches_macro)]
#![deny(clippy::manual_assert)]
#![deny(clippy::if_same_then_else)]

//! Utilities for std runtimes.
//!
//! This crate binds the abstractions defined in `kitbag_utils_core_rs` to std and tokio: a
//! `std::sync::RwLock`-backed bounded stack, environment-variable lookup that reports missing keys
//! instead of panicking, Postgres configuration loaded from the environment, and a generator whose
//! producer runs ahead on a tokio blocking task.

/// Stack aliases and constructors backed by std locks.
pub mod collections;
/// Environment-variable lookup.
pub mod env;
/// Generators with a background producer.
pub mod generator;
/// Postgres configuration loaded from environment variables.
pub mod pg;
/// std lock implementations of the core lock abstractions.
pub mod sync;

pub use collections::{make_std_vec_stack, StdVecSyncStack};
pub use env::{get_env, get_env_from, get_env_or, get_env_or_from, EnvError, EnvSource, ProcessEnv};
pub use generator::BackgroundGenerator;
pub use kitbag_utils_core_rs::{
  algorithm, ArcShared, ConnectionConfig, Generator, PushError, SslMode, StackCapacityError, StackError,
  SyncRwLockLike, SyncStack,
};
pub use pg::{connection_config_from_env, connection_config_from_process_env, PgConfigError};
pub use sync::StdSyncRwLock;

/// Prelude module that re-exports commonly used types and traits.
pub mod prelude {
  pub use kitbag_utils_core_rs::{
    algorithm::{
      all_of, any_of, binary_search, count, count_if, for_each, group_by, linear_search, merge_sort, merge_sort_by,
      none_of, unique_copy,
    },
    ArcShared, ConnectionConfig, Generator, PushError, SslMode, StackCapacityError, StackError, SyncRwLockLike,
    SyncStack,
  };

  pub use crate::{
    collections::{make_std_vec_stack, StdVecSyncStack},
    env::{get_env, get_env_or, EnvError, EnvSource, ProcessEnv},
    generator::BackgroundGenerator,
    pg::{connection_config_from_env, PgConfigError},
    sync::StdSyncRwLock,
  };
}
