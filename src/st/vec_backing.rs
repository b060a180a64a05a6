use crate::core::{Backend, DenseBackend, Element, StorageError};
use log::trace;

/// Growable dense backing. Any size is accepted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VecBacking<T> {
    counts: Vec<T>,
}

impl<T> VecBacking<T> {
    pub fn new() -> VecBacking<T> {
        VecBacking { counts: Vec::new() }
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.counts
    }

    pub fn into_vec(self) -> Vec<T> {
        self.counts
    }
}

impl<T> From<Vec<T>> for VecBacking<T> {
    fn from(counts: Vec<T>) -> VecBacking<T> {
        VecBacking { counts }
    }
}

impl<T: Element> Backend for VecBacking<T> {
    type Value = T;

    fn reset(&mut self, size: usize) -> Result<(), StorageError> {
        trace!("resetting vec backing from {} to {} slots", self.counts.len(), size);
        self.counts.clear();
        self.counts.resize(size, T::default());
        Ok(())
    }

    #[inline(always)]
    fn size(&self) -> usize {
        self.counts.len()
    }

    #[inline(always)]
    fn get(&self, index: usize) -> &T {
        &self.counts[index]
    }

    #[inline(always)]
    fn set(&mut self, index: usize, value: T) {
        self.counts[index] = value;
    }

    #[inline(always)]
    fn update<F: FnOnce(&mut T)>(&mut self, index: usize, f: F) {
        f(&mut self.counts[index]);
    }
}

impl<T: Element> DenseBackend for VecBacking<T> {}
