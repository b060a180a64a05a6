use crate::core::element::Element;
use crate::core::errors::StorageError;

/// Representation strategy behind a [`Storage`](crate::st::Storage).
///
/// Indexed operations require `index < size()`. This is a contract, checked by
/// `debug_assert!` only.
pub trait Backend: Default {
    type Value: Element;

    /// Set the logical size to `size` and every one of its slots to the default value.
    /// On error the backing is left untouched.
    fn reset(&mut self, size: usize) -> Result<(), StorageError>;

    fn size(&self) -> usize;

    fn get(&self, index: usize) -> &Self::Value;

    fn set(&mut self, index: usize, value: Self::Value);

    /// Mutate the value at `index` in place.
    fn update<F: FnOnce(&mut Self::Value)>(&mut self, index: usize, f: F);
}

/// Backing that keeps every slot below `size()` materialized, so a slot can be shared
/// by reference and mutated through interior mutability.
pub trait DenseBackend: Backend {}
