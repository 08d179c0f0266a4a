// Hit/miss bookkeeping for the tree type factory.

use serde::Serialize;
use std::cell::Cell;

/// Snapshot of how a factory's lookups were served.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
}

impl CacheStats {
    pub fn lookups(&self) -> usize {
        self.hits + self.misses
    }
}

// Counters behind `&self`, so lookups don't need a mutable factory.
#[derive(Debug, Default)]
pub(crate) struct StatsTracker {
    hits: Cell<usize>,
    misses: Cell<usize>,
}

impl StatsTracker {
    pub(crate) fn new() -> Self {
        StatsTracker {
            hits: Cell::new(0),
            misses: Cell::new(0),
        }
    }

    pub(crate) fn record_hit(&self) {
        self.hits.set(self.hits.get() + 1);
    }

    pub(crate) fn record_miss(&self) {
        self.misses.set(self.misses.get() + 1);
    }

    pub(crate) fn snapshot(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.get(),
            misses: self.misses.get(),
        }
    }
}
