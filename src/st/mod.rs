pub mod vec_backing;
pub mod array_backing;
pub mod map_backing;
pub mod storage;

pub use self::array_backing::ArrayBacking;
pub use self::map_backing::MapBacking;
pub use self::storage::{ArrayStorage, Iter, MapStorage, Storage, VecStorage};
pub use self::vec_backing::VecBacking;
