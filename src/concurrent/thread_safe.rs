use crate::core::counter::Counter;
use crate::core::element::{plain, Element};
use std::fmt;
use std::ops::AddAssign;
use std::sync::atomic::{AtomicI32, AtomicI64, AtomicIsize, AtomicU32, AtomicU64, AtomicUsize, Ordering};

/// Counter with an atomic representation.
pub trait AtomicCounter: Counter + fmt::Display {
    type Atomic: Send + Sync;

    fn new_atomic(value: Self) -> Self::Atomic;
    fn load(atomic: &Self::Atomic) -> Self;
    fn store(atomic: &Self::Atomic, value: Self);
    fn fetch_add(atomic: &Self::Atomic, value: Self);
}

macro_rules! impl_atomic_integer {
    ($($t:ty => $atomic:ty),*) => {
        $(
            impl AtomicCounter for $t {
                type Atomic = $atomic;

                #[inline(always)]
                fn new_atomic(value: $t) -> $atomic {
                    <$atomic>::new(value)
                }
                #[inline(always)]
                fn load(atomic: &$atomic) -> $t {
                    atomic.load(Ordering::Acquire)
                }
                #[inline(always)]
                fn store(atomic: &$atomic, value: $t) {
                    atomic.store(value, Ordering::Release);
                }
                #[inline(always)]
                fn fetch_add(atomic: &$atomic, value: $t) {
                    atomic.fetch_add(value, Ordering::AcqRel);
                }
            }
        )*
    }
}

// floats live in an atomic integer of the same width and are added with a CAS loop
macro_rules! impl_atomic_float {
    ($($t:ty => $atomic:ty),*) => {
        $(
            impl AtomicCounter for $t {
                type Atomic = $atomic;

                #[inline(always)]
                fn new_atomic(value: $t) -> $atomic {
                    <$atomic>::new(value.to_bits())
                }
                #[inline(always)]
                fn load(atomic: &$atomic) -> $t {
                    <$t>::from_bits(atomic.load(Ordering::Acquire))
                }
                #[inline(always)]
                fn store(atomic: &$atomic, value: $t) {
                    atomic.store(value.to_bits(), Ordering::Release);
                }
                #[inline(always)]
                fn fetch_add(atomic: &$atomic, value: $t) {
                    let mut current = atomic.load(Ordering::Acquire);
                    loop {
                        let desired = (<$t>::from_bits(current) + value).to_bits();
                        match atomic.compare_exchange_weak(current, desired, Ordering::AcqRel, Ordering::Acquire) {
                            Ok(_) => return,
                            Err(actual) => current = actual,
                        }
                    }
                }
            }
        )*
    }
}

impl_atomic_integer!(u32 => AtomicU32, u64 => AtomicU64, usize => AtomicUsize,
                     i32 => AtomicI32, i64 => AtomicI64, isize => AtomicIsize);
impl_atomic_float!(f32 => AtomicU32, f64 => AtomicU64);

/// Bin value that can be incremented concurrently through a shared reference.
///
/// Cloning takes a plain snapshot of the current value. That is only meaningful
/// while no other thread is writing, which holds whenever the owning storage is
/// locked for the clone.
pub struct ThreadSafe<T: AtomicCounter> {
    value: T::Atomic,
}

impl<T: AtomicCounter> ThreadSafe<T> {
    pub fn new(value: T) -> ThreadSafe<T> {
        ThreadSafe {
            value: T::new_atomic(value),
        }
    }

    #[inline(always)]
    pub fn load(&self) -> T {
        T::load(&self.value)
    }

    #[inline(always)]
    pub fn store(&self, value: T) {
        T::store(&self.value, value);
    }

    #[inline(always)]
    pub fn increment_shared(&self) {
        T::fetch_add(&self.value, T::one());
    }

    #[inline(always)]
    pub fn add_shared(&self, value: T) {
        T::fetch_add(&self.value, value);
    }
}

impl<T: AtomicCounter> Default for ThreadSafe<T> {
    fn default() -> ThreadSafe<T> {
        ThreadSafe::new(T::zero())
    }
}

impl<T: AtomicCounter> Clone for ThreadSafe<T> {
    fn clone(&self) -> ThreadSafe<T> {
        ThreadSafe::new(self.load())
    }
}

impl<T: AtomicCounter> PartialEq for ThreadSafe<T> {
    fn eq(&self, other: &ThreadSafe<T>) -> bool {
        self.load() == other.load()
    }
}

impl<T: AtomicCounter> From<T> for ThreadSafe<T> {
    fn from(value: T) -> ThreadSafe<T> {
        ThreadSafe::new(value)
    }
}

impl<'a, T: AtomicCounter> AddAssign<&'a ThreadSafe<T>> for ThreadSafe<T> {
    fn add_assign(&mut self, other: &'a ThreadSafe<T>) {
        self.add_shared(other.load());
    }
}

impl<T: AtomicCounter> fmt::Debug for ThreadSafe<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("ThreadSafe").field(&self.load()).finish()
    }
}

impl<T: AtomicCounter> fmt::Display for ThreadSafe<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.load(), f)
    }
}

impl<T: AtomicCounter> Element for ThreadSafe<T> {
    type Weight = T;

    #[inline(always)]
    fn increment(&mut self) {
        self.increment_shared();
    }

    #[inline(always)]
    fn add(&mut self, weight: T) {
        self.add_shared(weight);
    }

    #[inline(always)]
    fn merge(&mut self, other: &ThreadSafe<T>) {
        self.add_shared(other.load());
    }

    fn scale(&mut self, factor: f64) {
        let mut value = self.load();
        plain::scale(&mut value, factor);
        self.store(value);
    }
}

macro_rules! impl_value_ops {
    ($($t:ty),*) => {
        $(
            impl PartialEq<$t> for ThreadSafe<$t> {
                fn eq(&self, other: &$t) -> bool {
                    self.load() == *other
                }
            }

            impl AddAssign<$t> for ThreadSafe<$t> {
                fn add_assign(&mut self, value: $t) {
                    self.add_shared(value);
                }
            }
        )*
    }
}

impl_value_ops!(u32, u64, usize, i32, i64, isize, f32, f64);
