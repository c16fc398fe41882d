//! Integration tests for the configuration context

use starscript_context::factory;
use starscript_foundation::{PropertyCollector, TypeHint, Value};
use starscript_storage::World;

fn configured_world() -> World {
    let world = World::new();
    let mut config = world.config().borrow_mut();
    config.set("GameName", Value::from("North Star 7"));
    config.set("MaxShips", Value::Int(500));
    drop(config);
    world
}

#[test]
fn config_needs_no_backing_object() {
    let world = configured_world();
    let mut ctx = factory::config(&world);

    assert!(ctx.object_ref().is_none());
    assert!(!ctx.next());
    let index = ctx.lookup("GAMENAME").unwrap();
    assert_eq!(ctx.get(index).unwrap(), Value::from("North Star 7"));
}

#[test]
fn config_writes_are_visible_in_the_world() {
    let world = configured_world();
    let mut ctx = factory::config(&world);

    let index = ctx.lookup("MaxShips").unwrap();
    ctx.set(index, &Value::Int(999)).unwrap();
    assert_eq!(
        world.config().borrow().get("maxships"),
        Some(&Value::Int(999))
    );
}

#[test]
fn config_enumeration_derives_hints() {
    let world = configured_world();
    let ctx = factory::config(&world);
    let mut collector = PropertyCollector::new();
    ctx.enumerate(&mut collector);

    assert_eq!(collector.properties.len(), 2);
    assert_eq!(collector.hint_for("GameName"), Some(TypeHint::String));
    assert_eq!(collector.hint_for("MaxShips"), Some(TypeHint::Int));
}
