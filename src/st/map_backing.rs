use crate::core::{Backend, SharedDefault, StorageError};
use log::trace;
use std::collections::btree_map::{self, BTreeMap, Entry};

/// Sparse backing keyed by bin index.
///
/// Only bins that differ from the default value are stored; reading any other index
/// in range yields the default. The logical size is independent of the number of
/// stored entries. Every unstored index reads the same default instance, hence the
/// [`SharedDefault`] bound.
#[derive(Clone, Debug, Default)]
pub struct MapBacking<T> {
    entries: BTreeMap<usize, T>,
    length: usize,
    zero: T,
}

impl<T: SharedDefault> MapBacking<T> {
    pub fn new() -> MapBacking<T> {
        MapBacking::default()
    }

    /// Build a backing of logical size `size` from `(index, value)` pairs. Default
    /// values and indices past `size` are dropped.
    pub fn from_entries<I>(size: usize, entries: I) -> MapBacking<T>
    where
        I: IntoIterator<Item = (usize, T)>,
    {
        let zero = T::default();
        let entries = entries
            .into_iter()
            .filter(|&(index, ref value)| index < size && *value != zero)
            .collect();
        MapBacking {
            entries,
            length: size,
            zero,
        }
    }

    /// Number of stored, non-default entries.
    #[inline(always)]
    pub fn materialized(&self) -> usize {
        self.entries.len()
    }

    /// Stored entries in index order.
    pub fn entries(&self) -> btree_map::Iter<'_, usize, T> {
        self.entries.iter()
    }
}

impl<T: SharedDefault> Backend for MapBacking<T> {
    type Value = T;

    fn reset(&mut self, size: usize) -> Result<(), StorageError> {
        trace!(
            "resetting map backing to {} slots, dropping {} entries",
            size,
            self.entries.len()
        );
        self.entries.clear();
        self.length = size;
        Ok(())
    }

    #[inline(always)]
    fn size(&self) -> usize {
        self.length
    }

    #[inline]
    fn get(&self, index: usize) -> &T {
        self.entries.get(&index).unwrap_or(&self.zero)
    }

    fn set(&mut self, index: usize, value: T) {
        if value == self.zero {
            self.entries.remove(&index);
        } else {
            self.entries.insert(index, value);
        }
    }

    fn update<F: FnOnce(&mut T)>(&mut self, index: usize, f: F) {
        match self.entries.entry(index) {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                if *entry.get() == self.zero {
                    entry.remove();
                }
            }
            Entry::Vacant(entry) => {
                let mut value = T::default();
                f(&mut value);
                if value != self.zero {
                    entry.insert(value);
                }
            }
        }
    }
}
