// Singleton demo: two lookups, one construction.

use colored::Colorize;
use flyweight_patterns::singleton::{self, Instance};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    println!("{}", "=== Singleton Pattern ===".bold());

    let t1 = Instance::get();
    let t2 = Instance::get();

    println!("  t1 id: {}", t1.id());
    println!("  t2 id: {}", t2.id());
    println!("  Same instance: {}", std::ptr::eq(t1, t2));
    println!("  Constructions: {}", singleton::constructions());
}
