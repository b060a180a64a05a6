pub mod errors;
#[macro_use]
pub mod util;
pub mod counter;
pub mod element;
pub mod backend;
pub mod readable_storage;

pub use self::backend::{Backend, DenseBackend};
pub use self::counter::Counter;
pub use self::element::{Accumulator, Element, SharedDefault};
pub use self::errors::*;
pub use self::readable_storage::ReadableStorage;
