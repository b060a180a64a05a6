use std::error::Error;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StorageError {
    /// A fixed-capacity backing was asked to hold more bins than it has room for.
    CapacityExceeded { requested: usize, capacity: usize },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            StorageError::CapacityExceeded { requested, capacity } => {
                write!(f, "size {} exceeds maximum capacity {}", requested, capacity)
            }
        }
    }
}

impl Error for StorageError {}
