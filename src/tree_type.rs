// TreeType is the flyweight: the static information shared by every tree of
// one category. Nothing in it changes after construction.

use std::fmt;
use tracing::debug;

#[derive(Debug, PartialEq, Eq)]
pub struct TreeType {
    name: String,
}

impl TreeType {
    // Only the factory creates tree types; everyone else gets an `Rc`.
    pub(crate) fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        debug!("constructed TreeType {name}");
        TreeType { name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for TreeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TreeType({})", self.name)
    }
}

impl Drop for TreeType {
    fn drop(&mut self) {
        debug!("destroyed TreeType {}", self.name);
    }
}
