// End-to-end forest scenarios against the public API.

use flyweight_patterns::{CacheStats, Forest, Scenario, TreeTypeFactory};
use std::rc::Rc;

#[test]
fn preloaded_factory_scenario() {
    let factory = TreeTypeFactory::with_types(["TypeOne", "TypeTwo", "TypeThree"]);
    let type_one = factory.get("TypeOne");

    let mut forest = Forest::new(&factory);
    forest.add_tree(1, 1, "TypeOne");
    forest.add_tree(2, 2, "TypeTwo");
    forest.add_tree(3, 3, "TypeThree");
    forest.add_tree(4, 4, "TypeFour");
    forest.add_tree(5, 5, "TypeFive");

    assert_eq!(forest.len(), 5);
    assert_eq!(factory.len(), 5);
    assert!(factory.contains("TypeFour"));
    assert!(factory.contains("TypeFive"));
    assert!(Rc::ptr_eq(forest.trees()[0].tree_type(), &type_one));
    // the explicit lookup above plus three planted preloads
    assert_eq!(factory.stats(), CacheStats { hits: 4, misses: 2 });
}

#[test]
fn empty_factory_scenario() {
    let factory = TreeTypeFactory::new();
    let mut forest = Forest::new(&factory);
    forest.add_tree(1, 1, "TypeOne");
    forest.add_tree(7, 7, "TypeTwo");

    assert_eq!(factory.len(), 2);
    assert_eq!(forest.len(), 2);
    assert_eq!(factory.stats(), CacheStats { hits: 0, misses: 2 });
    assert_eq!(forest.trees()[1].location(), 7);
    assert_eq!(forest.trees()[1].age(), 7);
}

#[test]
fn forest_then_factory_teardown() {
    let factory = TreeTypeFactory::new();
    let mut forest = Forest::new(&factory);
    forest.add_tree(1, 1, "Oak");
    let oak = Rc::clone(forest.trees()[0].tree_type());

    drop(forest);
    assert_eq!(Rc::strong_count(&oak), 2);
    assert!(Rc::ptr_eq(&oak, &factory.get("Oak")));

    drop(factory);
    assert_eq!(Rc::strong_count(&oak), 1);
    assert_eq!(oak.name(), "Oak");
}

#[test]
fn builtin_scenario_report() {
    let report = Scenario::builtin().unwrap().run();
    assert_eq!(report.phases.len(), 2);

    let preloaded = &report.phases[0];
    assert_eq!(preloaded.name, "preloaded factory");
    assert_eq!(preloaded.forest_size, 5);
    assert_eq!(preloaded.cache_size, 5);
    assert_eq!(
        preloaded.type_names,
        vec!["TypeFive", "TypeFour", "TypeOne", "TypeThree", "TypeTwo"]
    );
    assert_eq!(preloaded.stats, CacheStats { hits: 3, misses: 2 });

    let empty = &report.phases[1];
    assert_eq!(empty.forest_size, 2);
    assert_eq!(empty.cache_size, 2);
    assert_eq!(empty.stats, CacheStats { hits: 0, misses: 2 });
}
