// Singleton with OnceLock: created on first access, exactly once, and safe to
// reach from any thread. Prefer passing an explicit instance around (as
// `Forest` does with its factory); reach for this only for true process state.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;
use tracing::info;

static INSTANCE: OnceLock<Instance> = OnceLock::new();
static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug)]
pub struct Instance {
    id: usize,
}

impl Instance {
    // Private: the only way to an `Instance` is `Instance::get`.
    fn new() -> Self {
        let id = CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst) + 1;
        info!("singleton instance #{id} created");
        Instance { id }
    }

    /// Returns the process-wide instance, creating it on first call.
    pub fn get() -> &'static Instance {
        INSTANCE.get_or_init(|| {
            info!("instance not found, creating one");
            Instance::new()
        })
    }

    pub fn id(&self) -> usize {
        self.id
    }
}

/// How many times the constructor has run. Never more than one.
pub fn constructions() -> usize {
    CONSTRUCTIONS.load(Ordering::SeqCst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_same_instance() {
        let first = Instance::get();
        let second = Instance::get();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.id(), 1);
        assert_eq!(constructions(), 1);
    }

    #[test]
    fn test_single_construction_across_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| Instance::get() as *const Instance as usize))
            .collect();

        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(addresses[0], Instance::get() as *const Instance as usize);
        assert_eq!(constructions(), 1);
    }
}
