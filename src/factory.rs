// TreeTypeFactory: the flyweight cache. One `TreeType` per name, created on
// first request (or eagerly via `with_types`) and shared from then on.

use crate::stats::{CacheStats, StatsTracker};
use crate::tree_type::TreeType;
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info};

#[derive(Debug)]
pub struct TreeTypeFactory {
    types: RefCell<FxHashMap<String, Rc<TreeType>>>,
    stats: StatsTracker,
}

impl TreeTypeFactory {
    /// Creates an empty factory; every type will be built lazily.
    pub fn new() -> Self {
        debug!("constructed empty TreeTypeFactory");
        TreeTypeFactory {
            types: RefCell::new(FxHashMap::default()),
            stats: StatsTracker::new(),
        }
    }

    /// Creates a factory with one tree type already built per distinct name.
    ///
    /// Preloading is not a lookup: it counts as neither a hit nor a miss.
    pub fn with_types<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut types: FxHashMap<String, Rc<TreeType>> = FxHashMap::default();
        for name in names {
            let name = name.as_ref();
            types
                .entry(name.to_string())
                .or_insert_with(|| Rc::new(TreeType::new(name)));
        }
        info!("created TreeTypeFactory with {} preloaded types", types.len());
        TreeTypeFactory {
            types: RefCell::new(types),
            stats: StatsTracker::new(),
        }
    }

    /// Returns the shared tree type for `name`, creating it on a miss.
    ///
    /// Every call with the same name yields the same allocation, so
    /// `Rc::ptr_eq` holds between any two results for one name.
    pub fn get(&self, name: &str) -> Rc<TreeType> {
        if let Some(existing) = self.types.borrow().get(name) {
            self.stats.record_hit();
            info!("TreeType {name} already in memory");
            return Rc::clone(existing);
        }

        self.stats.record_miss();
        info!("TreeType {name} not found in cache, creating new one");
        let tree_type = Rc::new(TreeType::new(name));
        self.types
            .borrow_mut()
            .insert(name.to_string(), Rc::clone(&tree_type));
        tree_type
    }

    /// Whether `name` has been built. Does not count as a lookup.
    pub fn contains(&self, name: &str) -> bool {
        self.types.borrow().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.types.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.borrow().is_empty()
    }

    /// Names of every cached type, sorted.
    pub fn type_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.types.borrow().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot()
    }
}

impl Default for TreeTypeFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TreeTypeFactory {
    fn drop(&mut self) {
        info!("releasing TreeTypeFactory ({} types)", self.types.get_mut().len());
    }
}
