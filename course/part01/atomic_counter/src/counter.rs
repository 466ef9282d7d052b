use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
    PoisonError,
};

/// A counter that several threads can bump through a shared reference.
pub trait SharedCounter: Sync {
    fn increment(&self);
    fn get(&self) -> usize;
}

/// Adds one to `counter`, `n` times.
pub fn increment_n_times<C>(counter: &C, n: usize)
where
    C: SharedCounter + ?Sized,
{
    for _ in 0..n {
        counter.increment();
    }
}

impl SharedCounter for AtomicUsize {
    fn increment(&self) {
        self.fetch_add(1, Ordering::SeqCst);
    }

    fn get(&self) -> usize {
        self.load(Ordering::SeqCst)
    }
}

impl SharedCounter for Mutex<usize> {
    fn increment(&self) {
        *self.lock().unwrap_or_else(PoisonError::into_inner) += 1;
    }

    fn get(&self) -> usize {
        *self.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Increments with a separate load and store, so two threads can read the
/// same value and one of the writes gets lost.
#[derive(Debug, Default)]
pub struct RacyCounter(AtomicUsize);

impl RacyCounter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SharedCounter for RacyCounter {
    fn increment(&self) {
        let current = self.0.load(Ordering::Relaxed);
        self.0.store(current + 1, Ordering::Relaxed);
    }

    fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

#[cfg(loom)]
impl SharedCounter for loom::sync::atomic::AtomicUsize {
    fn increment(&self) {
        self.fetch_add(1, Ordering::SeqCst);
    }

    fn get(&self) -> usize {
        self.load(Ordering::SeqCst)
    }
}
