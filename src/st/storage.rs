use crate::core::*;
use crate::st::array_backing::ArrayBacking;
use crate::st::map_backing::MapBacking;
use crate::st::vec_backing::VecBacking;
use log::debug;
use std::iter::FusedIterator;
use std::ops::{AddAssign, DivAssign, Index, MulAssign};

/// Bin storage over an interchangeable [`Backend`].
///
/// All operations behave the same whatever the backing; only [`ArrayBacking`] can
/// refuse a size. Indexed operations take `index < size()` as a precondition that is
/// checked in debug builds only.
#[derive(Clone, Debug, Default)]
pub struct Storage<B> {
    backing: B,
}

pub type VecStorage<T> = Storage<VecBacking<T>>;
pub type ArrayStorage<T, const CAPACITY: usize> = Storage<ArrayBacking<T, CAPACITY>>;
pub type MapStorage<T> = Storage<MapBacking<T>>;

// read methods
impl<B: Backend> Storage<B> {
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.backing.size()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn get(&self, index: usize) -> Option<&B::Value> {
        if index < self.size() {
            return Some(self.backing.get(index));
        }
        None
    }

    pub fn backing(&self) -> &B {
        &self.backing
    }

    pub fn iter(&self) -> Iter<'_, B> {
        Iter {
            backing: &self.backing,
            index: 0,
            end: self.backing.size(),
        }
    }

    /// Elementwise comparison against any readable storage.
    pub fn equals<S>(&self, other: &S) -> bool
    where
        S: ReadableStorage<Value = B::Value> + ?Sized,
    {
        let size = self.size();
        check_eq!(size, other.size());
        for i in 0..size {
            check_eq!(self.backing.get(i), other.value_at(i));
        }
        true
    }
}

// write methods
impl<B: Backend> Storage<B> {
    pub fn new() -> Storage<B> {
        Storage { backing: B::default() }
    }

    pub fn from_backing(backing: B) -> Storage<B> {
        Storage { backing }
    }

    pub fn from_storage<S>(source: &S) -> Result<Storage<B>, StorageError>
    where
        S: ReadableStorage<Value = B::Value> + ?Sized,
    {
        let mut storage = Storage::new();
        storage.assign(source)?;
        Ok(storage)
    }

    pub fn into_backing(self) -> B {
        self.backing
    }

    /// Resize to `size` bins, all of them reset to the default value. On error the
    /// storage is unchanged.
    pub fn resize(&mut self, size: usize) -> Result<(), StorageError> {
        debug!("resizing storage from {} to {} bins", self.size(), size);
        self.backing.reset(size)
    }

    #[inline(always)]
    pub fn set(&mut self, index: usize, value: B::Value) {
        debug_check_index!(index, self.size());
        self.backing.set(index, value);
    }

    #[inline(always)]
    pub fn increment(&mut self, index: usize) {
        debug_check_index!(index, self.size());
        self.backing.update(index, |value| value.increment());
    }

    #[inline(always)]
    pub fn add(&mut self, index: usize, weight: <B::Value as Element>::Weight) {
        debug_check_index!(index, self.size());
        self.backing.update(index, |value| value.add(weight));
    }

    /// Replace the contents with a copy of `source`, which may use any backing.
    /// On error the storage is unchanged.
    pub fn assign<S>(&mut self, source: &S) -> Result<(), StorageError>
    where
        S: ReadableStorage<Value = B::Value> + ?Sized,
    {
        let size = source.size();
        debug!("assigning {} bins", size);
        self.backing.reset(size)?;
        for i in 0..size {
            self.backing.set(i, source.value_at(i).clone());
        }
        Ok(())
    }
}

impl<B: Backend> ReadableStorage for Storage<B> {
    type Value = B::Value;

    #[inline(always)]
    fn size(&self) -> usize {
        self.backing.size()
    }

    #[inline(always)]
    fn value_at(&self, index: usize) -> &B::Value {
        self.backing.get(index)
    }
}

impl<B: Backend> Index<usize> for Storage<B> {
    type Output = B::Value;

    #[inline(always)]
    fn index(&self, index: usize) -> &B::Value {
        debug_check_index!(index, self.size());
        self.backing.get(index)
    }
}

impl<B, O> PartialEq<Storage<O>> for Storage<B>
where
    B: Backend,
    O: Backend<Value = B::Value>,
{
    fn eq(&self, other: &Storage<O>) -> bool {
        self.equals(other)
    }
}

/// Elementwise addition. Panics if the sizes differ.
impl<'a, B, S> AddAssign<&'a S> for Storage<B>
where
    B: Backend,
    S: ReadableStorage<Value = B::Value> + ?Sized,
{
    fn add_assign(&mut self, other: &'a S) {
        let size = self.size();
        assert_eq!(size, other.size(), "sizes must be equal");
        for i in 0..size {
            let rhs = other.value_at(i);
            self.backing.update(i, |value| value.merge(rhs));
        }
    }
}

impl<B: Backend> MulAssign<f64> for Storage<B> {
    fn mul_assign(&mut self, factor: f64) {
        for i in 0..self.size() {
            self.backing.update(i, |value| value.scale(factor));
        }
    }
}

impl<B: Backend> DivAssign<f64> for Storage<B> {
    fn div_assign(&mut self, divisor: f64) {
        *self *= 1.0 / divisor;
    }
}

impl<T: Element> From<Vec<T>> for VecStorage<T> {
    fn from(counts: Vec<T>) -> VecStorage<T> {
        Storage::from_backing(VecBacking::from(counts))
    }
}

/// Bin values in index order.
pub struct Iter<'a, B> {
    backing: &'a B,
    index: usize,
    end: usize,
}

impl<'a, B: Backend> Iterator for Iter<'a, B> {
    type Item = &'a B::Value;

    fn next(&mut self) -> Option<&'a B::Value> {
        if self.index < self.end {
            let value = self.backing.get(self.index);
            self.index += 1;
            return Some(value);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a, B: Backend> ExactSizeIterator for Iter<'a, B> {}

impl<'a, B: Backend> FusedIterator for Iter<'a, B> {}

impl<'a, B: Backend> IntoIterator for &'a Storage<B> {
    type Item = &'a B::Value;
    type IntoIter = Iter<'a, B>;

    fn into_iter(self) -> Iter<'a, B> {
        self.iter()
    }
}
