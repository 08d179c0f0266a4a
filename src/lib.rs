// Flyweight and Singleton, worked through in Rust.
//
// The flyweight half lives in `tree_type`, `factory` and `forest`: a forest of
// trees where every tree carries its own location and age but shares one
// immutable `TreeType` per category. The singleton half lives in `singleton`.

//! # Flyweight & Singleton
//!
//! ## Flyweight
//! - [`TreeType`]: the shared, immutable intrinsic state
//! - [`TreeTypeFactory`]: hands out one `Rc<TreeType>` per type name
//! - [`Forest`] / [`Tree`]: extrinsic state (location, age) plus a shared handle
//!
//! ## Singleton
//! - [`singleton::Instance`]: lazily created once per process via `OnceLock`
//!
//! Run the demos with:
//! ```bash
//! cargo run --bin flyweight
//! cargo run --bin singleton
//! ```

pub mod factory;
pub mod forest;
pub mod scenario;
pub mod singleton;
pub mod stats;
pub mod tree_type;

pub use factory::TreeTypeFactory;
pub use forest::{Forest, Tree};
pub use scenario::{PhaseReport, Scenario, ScenarioError, ScenarioReport};
pub use stats::CacheStats;
pub use tree_type::TreeType;
