pub mod thread_safe;
pub mod shared_storage;

pub use self::shared_storage::SharedStorage;
pub use self::thread_safe::{AtomicCounter, ThreadSafe};
