//! Per-element increment strategy.
//!
//! Every bin value is an [`Element`]. Which flavour of increment applies is fixed by
//! the element type: plain numeric [`Counter`](crate::core::Counter)s are bumped with `+=`, while
//! [`Accumulator`]s are called, with no argument for a unit increment or with the
//! weight for a weighted one.

pub trait Element: Default + Clone + PartialEq {
    /// Argument type of a weighted increment.
    type Weight;

    fn increment(&mut self);
    fn add(&mut self, weight: Self::Weight);
    /// Fold another bin value of the same type into this one. Elementwise `+=`
    /// between storages goes through here.
    fn merge(&mut self, other: &Self);
    fn scale(&mut self, factor: f64);
}

/// Bin value that accumulates by being called.
pub trait Accumulator: Default + Clone + PartialEq {
    type Weight;

    fn call(&mut self);
    fn call_with(&mut self, weight: Self::Weight);
    fn merge(&mut self, other: &Self);
    fn scale(&mut self, factor: f64);
}

impl<A: Accumulator> Element for A {
    type Weight = A::Weight;

    #[inline(always)]
    fn increment(&mut self) {
        self.call();
    }

    #[inline(always)]
    fn add(&mut self, weight: A::Weight) {
        self.call_with(weight);
    }

    #[inline(always)]
    fn merge(&mut self, other: &A) {
        Accumulator::merge(self, other);
    }

    #[inline(always)]
    fn scale(&mut self, factor: f64) {
        Accumulator::scale(self, factor);
    }
}

/// Element that can only change through `&mut`, so a single default instance can
/// stand in for every bin a sparse backing has not stored.
///
/// Bins with interior mutability, such as
/// [`ThreadSafe`](crate::concurrent::ThreadSafe), do not qualify:
///
/// ```compile_fail
/// use histogram_storage::concurrent::ThreadSafe;
/// use histogram_storage::st::MapStorage;
///
/// let sparse = MapStorage::<ThreadSafe<u32>>::new();
/// ```
///
/// They live in dense storages instead:
///
/// ```
/// use histogram_storage::concurrent::ThreadSafe;
/// use histogram_storage::st::VecStorage;
///
/// let mut dense = VecStorage::<ThreadSafe<u32>>::new();
/// dense.resize(2).unwrap();
/// dense[0].increment_shared();
/// assert_eq!(dense[1], 0_u32);
/// ```
pub trait SharedDefault: Element {}

impl<A: Accumulator> SharedDefault for A {}

pub(crate) mod plain {
    use crate::core::counter::Counter;

    #[inline(always)]
    pub fn increment<T: Counter>(value: &mut T) {
        *value += T::one();
    }

    #[inline(always)]
    pub fn add<T: Counter>(value: &mut T, weight: T) {
        *value += weight;
    }

    #[inline(always)]
    pub fn scale<T: Counter>(value: &mut T, factor: f64) {
        *value = value.scaled(factor);
    }
}

macro_rules! impl_plain_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                type Weight = $t;

                #[inline(always)]
                fn increment(&mut self) {
                    plain::increment(self);
                }
                #[inline(always)]
                fn add(&mut self, weight: $t) {
                    plain::add(self, weight);
                }
                #[inline(always)]
                fn merge(&mut self, other: &$t) {
                    plain::add(self, *other);
                }
                #[inline(always)]
                fn scale(&mut self, factor: f64) {
                    plain::scale(self, factor);
                }
            }

            impl SharedDefault for $t {}
        )*
    }
}

impl_plain_element!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);
