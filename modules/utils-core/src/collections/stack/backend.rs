//! Backend layer traits and supporting types for stack operations.

mod push_error;
mod stack_backend;
mod stack_capacity_error;
mod stack_error;
mod vec_stack_backend;

pub use push_error::PushError;
pub use stack_backend::StackBackend;
pub use stack_capacity_error::StackCapacityError;
pub use stack_error::StackError;
pub use vec_stack_backend::VecStackBackend;
