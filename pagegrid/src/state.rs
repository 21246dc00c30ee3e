use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

/// Observable state cell.
///
/// The coordinator owns one `State<T>` per watched field (options,
/// pagination, rows, loading flag) and hands out shared references;
/// interior mutability lets setters run through `&self` while an async
/// fetch is in flight.
///
/// Every write marks the cell dirty. An event loop calls
/// [`take_dirty`](State::take_dirty) once per turn to decide whether the
/// field changed since its last look, without comparing values itself.
#[derive(Debug)]
pub struct State<T> {
    inner: RwLock<T>,
    dirty: AtomicBool,
}

impl<T> State<T> {
    /// Create a new state with the given value
    pub fn new(value: T) -> Self {
        Self {
            inner: RwLock::new(value),
            dirty: AtomicBool::new(false),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Set a new value
    pub fn set(&self, value: T) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = value;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Update the value using a closure
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        if let Ok(mut guard) = self.inner.write() {
            f(&mut guard);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Consume the dirty flag: true if the value was written since the
    /// previous call.
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::SeqCst)
    }
}
