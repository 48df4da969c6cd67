use std::sync::{Arc, Mutex};

/// Source of uniformly distributed indices for [`Shuffler`].
pub trait RandomSource: Send + Sync {
    /// Returns a uniformly chosen value in `0..=upper`.
    fn index_through(&self, upper: usize) -> usize;
}

/// Thread-local `fastrand` generator. No shared state between query tasks.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn index_through(&self, upper: usize) -> usize {
        fastrand::usize(..=upper)
    }
}

/// Deterministic generator for reproducible orderings.
pub struct SeededRandom {
    rng: Mutex<fastrand::Rng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn index_through(&self, upper: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.usize(..=upper)
    }
}

/// Randomizes the order of equally valid address records so repeated queries
/// spread clients across the configured addresses.
#[derive(Clone)]
pub struct Shuffler {
    source: Arc<dyn RandomSource>,
}

impl Shuffler {
    pub fn new(source: Arc<dyn RandomSource>) -> Self {
        Self { source }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Arc::new(SeededRandom::new(seed)))
    }

    /// In-place Fisher–Yates: position `i` swaps with a uniform `j` in `[0, i]`.
    pub fn shuffle<T>(&self, items: &mut [T]) {
        for i in 0..items.len() {
            let j = self.source.index_through(i);
            items.swap(i, j);
        }
    }
}

impl Default for Shuffler {
    fn default() -> Self {
        Self::new(Arc::new(ThreadRandom))
    }
}
