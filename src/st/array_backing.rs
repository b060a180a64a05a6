use crate::core::{Backend, DenseBackend, Element, StorageError};
use log::debug;

/// Dense backing over an inline buffer of `CAPACITY` slots. The logical size is
/// tracked separately and can never exceed the capacity.
#[derive(Clone, Debug)]
pub struct ArrayBacking<T, const CAPACITY: usize> {
    buffer: [T; CAPACITY],
    length: usize,
}

impl<T: Default, const CAPACITY: usize> ArrayBacking<T, CAPACITY> {
    pub fn new() -> ArrayBacking<T, CAPACITY> {
        ArrayBacking {
            buffer: std::array::from_fn(|_| T::default()),
            length: 0,
        }
    }
}

impl<T, const CAPACITY: usize> ArrayBacking<T, CAPACITY> {
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        CAPACITY
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer[..self.length]
    }
}

impl<T: Default, const CAPACITY: usize> Default for ArrayBacking<T, CAPACITY> {
    fn default() -> ArrayBacking<T, CAPACITY> {
        ArrayBacking::new()
    }
}

impl<T: Element, const CAPACITY: usize> Backend for ArrayBacking<T, CAPACITY> {
    type Value = T;

    fn reset(&mut self, size: usize) -> Result<(), StorageError> {
        if size > CAPACITY {
            debug!("rejecting resize to {} slots, capacity is {}", size, CAPACITY);
            return Err(StorageError::CapacityExceeded {
                requested: size,
                capacity: CAPACITY,
            });
        }
        for slot in self.buffer[..size].iter_mut() {
            *slot = T::default();
        }
        self.length = size;
        Ok(())
    }

    #[inline(always)]
    fn size(&self) -> usize {
        self.length
    }

    #[inline(always)]
    fn get(&self, index: usize) -> &T {
        &self.buffer[index]
    }

    #[inline(always)]
    fn set(&mut self, index: usize, value: T) {
        self.buffer[index] = value;
    }

    #[inline(always)]
    fn update<F: FnOnce(&mut T)>(&mut self, index: usize, f: F) {
        f(&mut self.buffer[index]);
    }
}

impl<T: Element, const CAPACITY: usize> DenseBackend for ArrayBacking<T, CAPACITY> {}
