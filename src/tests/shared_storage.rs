use crate::concurrent::{SharedStorage, ThreadSafe};
use crate::core::StorageError;
use crate::st::{ArrayBacking, MapBacking, Storage, VecBacking, VecStorage};
use std::sync::{Arc, Barrier};
use std::thread;

const THREAD_COUNT: usize = 4;
const ITERATIONS: usize = 1000;

fn run_writers<F: Fn(usize) + Send + Sync + 'static>(f: F) {
    let barrier = Arc::new(Barrier::new(THREAD_COUNT));
    let f = Arc::new(f);
    let handles: Vec<thread::JoinHandle<()>> = (0..THREAD_COUNT)
        .map(|t| {
            let barrier = barrier.clone();
            let f = f.clone();
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..ITERATIONS {
                    f(t);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn locked_increments_from_many_threads() {
    let shared = Arc::new(SharedStorage::<MapBacking<u64>>::new());
    succ!(shared.resize(THREAD_COUNT + 1));
    let s = shared.clone();
    run_writers(move |t| {
        s.increment(t);
        s.add(THREAD_COUNT, 2);
    });

    let snapshot = shared.snapshot();
    let mut expected = vec![ITERATIONS as u64; THREAD_COUNT];
    expected.push((2 * THREAD_COUNT * ITERATIONS) as u64);
    assert!(snapshot.equals(&expected));
}

#[test]
fn shared_increments_of_thread_safe_bins() {
    let shared = Arc::new(SharedStorage::<VecBacking<ThreadSafe<u32>>>::new());
    succ!(shared.resize(2));
    let s = shared.clone();
    run_writers(move |_| {
        s.increment_shared(0);
        s.add_shared(1, 3);
    });

    let storage = Arc::try_unwrap(shared).unwrap().into_inner();
    assert_eq!(storage[0], (THREAD_COUNT * ITERATIONS) as u32);
    assert_eq!(storage[1], (3 * THREAD_COUNT * ITERATIONS) as u32);
}

#[test]
fn shared_float_bins_on_fixed_backing() {
    let shared = Arc::new(SharedStorage::<ArrayBacking<ThreadSafe<f64>, 2>>::new());
    succ!(shared.resize(2));
    let s = shared.clone();
    run_writers(move |_| s.add_shared(1, 0.5));
    assert_eq!(shared.read()[1], (THREAD_COUNT * ITERATIONS) as f64 * 0.5);
    assert_eq!(shared.read()[0], 0.0_f64);
}

#[test]
fn resize_and_assign_under_write_lock() {
    let shared = SharedStorage::<ArrayBacking<u32, 3>>::new();
    assert_eq!(0, shared.size());
    succ!(shared.resize(3));
    assert_eq!(
        Err(StorageError::CapacityExceeded { requested: 4, capacity: 3 }),
        shared.resize(4)
    );
    assert_eq!(3, shared.size());

    succ!(shared.assign(&vec![1, 2]));
    assert_eq!(2, shared.size());
    shared.write().increment(0);
    assert!(shared.read().equals(&vec![2, 2]));
}

#[test]
fn from_storage_round_trip() {
    let storage = VecStorage::<u16>::from(vec![3, 0, 1]);
    let shared = SharedStorage::from(storage.clone());
    shared.increment(1);
    let inner: Storage<VecBacking<u16>> = shared.into_inner();
    assert!(inner.equals(&vec![3, 1, 1]));
    assert!(inner != storage);
}
