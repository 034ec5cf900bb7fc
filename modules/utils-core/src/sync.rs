#[allow(clippy::disallowed_types)]
mod arc_shared;
/// Reader-writer lock abstraction and the spin-based default implementation.
pub mod rw_lock_like;

pub use arc_shared::ArcShared;
pub use rw_lock_like::{SpinRwLock, SyncRwLockLike};
