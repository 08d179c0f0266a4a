// Trees carry the extrinsic state (location, age); the intrinsic state is a
// shared `Rc<TreeType>` handed out by the factory. A forest borrows its
// factory, so it can never outlive it.

use crate::factory::TreeTypeFactory;
use crate::tree_type::TreeType;
use rustc_hash::FxHashSet;
use std::rc::Rc;
use tracing::{debug, info};

#[derive(Debug)]
pub struct Tree {
    location: i32,
    age: i32,
    tree_type: Rc<TreeType>,
}

impl Tree {
    fn new(location: i32, age: i32, tree_type: Rc<TreeType>) -> Self {
        debug!("new {} tree at {location}, {age} yrs old", tree_type.name());
        Tree {
            location,
            age,
            tree_type,
        }
    }

    pub fn location(&self) -> i32 {
        self.location
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn tree_type(&self) -> &Rc<TreeType> {
        &self.tree_type
    }

    pub fn type_name(&self) -> &str {
        self.tree_type.name()
    }
}

impl Drop for Tree {
    fn drop(&mut self) {
        debug!("removed tree at {}", self.location);
    }
}

/// An append-only collection of trees resolved against one factory.
#[derive(Debug)]
pub struct Forest<'f> {
    trees: Vec<Tree>,
    factory: &'f TreeTypeFactory,
}

impl<'f> Forest<'f> {
    pub fn new(factory: &'f TreeTypeFactory) -> Self {
        debug!("constructed Forest");
        Forest {
            trees: Vec::new(),
            factory,
        }
    }

    /// Plants a tree of `type_name`, creating the type in the factory if needed.
    pub fn add_tree(&mut self, location: i32, age: i32, type_name: &str) -> &Tree {
        let tree_type = self.factory.get(type_name);
        self.trees.push(Tree::new(location, age, tree_type));
        info!("new tree added to forest, num_trees = {}", self.trees.len());
        &self.trees[self.trees.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    pub fn factory(&self) -> &'f TreeTypeFactory {
        self.factory
    }

    /// How many distinct tree types the trees of this forest point at.
    pub fn shared_type_count(&self) -> usize {
        self.trees
            .iter()
            .map(|tree| Rc::as_ptr(&tree.tree_type))
            .collect::<FxHashSet<_>>()
            .len()
    }
}

impl Drop for Forest<'_> {
    fn drop(&mut self) {
        info!("releasing Forest ({} trees)", self.trees.len());
    }
}
