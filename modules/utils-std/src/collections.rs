//! Collection modules exposed by `kitbag-utils-std-rs`.

mod sync_stack;

pub use sync_stack::*;
