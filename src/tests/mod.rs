#[macro_use]
pub mod util;
pub mod element;
pub mod shared_storage;
