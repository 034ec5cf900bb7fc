//! Pure functions over slices.
//!
//! Nothing here allocates except [`group_by`], [`unique_copy`], and the merge sorts, which return
//! new collections and leave their input untouched.

mod aggregate;
mod predicate;
mod search;
mod sort;

pub use aggregate::{count, count_if, group_by, unique_copy};
pub use predicate::{all_of, any_of, for_each, none_of};
pub use search::{binary_search, linear_search};
pub use sort::{merge_sort, merge_sort_by};
