//! Storage shared between threads.
//!
//! Resizing, assignment and plain increments take the write lock. Storages of
//! [`ThreadSafe`] bins over a dense backing can also be incremented under the read
//! lock, so any number of writers accumulate concurrently while a resize still waits
//! for exclusive access.

use crate::concurrent::thread_safe::{AtomicCounter, ThreadSafe};
use crate::core::*;
use crate::st::Storage;
use log::debug;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
pub struct SharedStorage<B> {
    storage: RwLock<Storage<B>>,
}

impl<B: Backend> SharedStorage<B> {
    pub fn new() -> SharedStorage<B> {
        SharedStorage::from_storage(Storage::new())
    }

    pub fn from_storage(storage: Storage<B>) -> SharedStorage<B> {
        SharedStorage {
            storage: RwLock::new(storage),
        }
    }

    pub fn size(&self) -> usize {
        self.storage.read().size()
    }

    pub fn resize(&self, size: usize) -> Result<(), StorageError> {
        self.storage.write().resize(size)
    }

    pub fn increment(&self, index: usize) {
        self.storage.write().increment(index);
    }

    pub fn add(&self, index: usize, weight: <B::Value as Element>::Weight) {
        self.storage.write().add(index, weight);
    }

    pub fn assign<S>(&self, source: &S) -> Result<(), StorageError>
    where
        S: ReadableStorage<Value = B::Value> + ?Sized,
    {
        self.storage.write().assign(source)
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Storage<B>> {
        self.storage.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Storage<B>> {
        self.storage.write()
    }

    pub fn into_inner(self) -> Storage<B> {
        self.storage.into_inner()
    }
}

impl<B: Backend + Clone> SharedStorage<B> {
    /// Copy of the current contents, taken under the write lock so that no shared
    /// increment is in flight.
    pub fn snapshot(&self) -> Storage<B> {
        let storage = self.storage.write();
        debug!("taking snapshot of {} bins", storage.size());
        storage.clone()
    }
}

impl<T, B> SharedStorage<B>
where
    T: AtomicCounter,
    B: DenseBackend<Value = ThreadSafe<T>>,
{
    pub fn increment_shared(&self, index: usize) {
        let storage = self.storage.read();
        storage[index].increment_shared();
    }

    pub fn add_shared(&self, index: usize, value: T) {
        let storage = self.storage.read();
        storage[index].add_shared(value);
    }
}

impl<B: Backend> From<Storage<B>> for SharedStorage<B> {
    fn from(storage: Storage<B>) -> SharedStorage<B> {
        SharedStorage::from_storage(storage)
    }
}
