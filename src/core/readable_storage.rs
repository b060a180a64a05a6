/// Anything with a size and indexed read access. Storages can be assigned from and
/// compared against any of these.
pub trait ReadableStorage {
    type Value;

    fn size(&self) -> usize;
    fn value_at(&self, index: usize) -> &Self::Value;
}

impl<T> ReadableStorage for [T] {
    type Value = T;

    #[inline(always)]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn value_at(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> ReadableStorage for Vec<T> {
    type Value = T;

    #[inline(always)]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn value_at(&self, index: usize) -> &T {
        &self[index]
    }
}
