mod std_sync_rw_lock;

pub use kitbag_utils_core_rs::sync::ArcShared;
pub use std_sync_rw_lock::StdSyncRwLock;
