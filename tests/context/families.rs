//! Integration tests for family and fixed-object contexts

use starscript_context::factory;
use starscript_foundation::{PropertyCollector, TypeHint, Value};
use starscript_storage::{ObjectKind, World};

fn seeded_world() -> World {
    let world = World::new();
    let mut universe = world.universe().borrow_mut();
    for ext_id in [3, 1, 2] {
        let id = universe.create(ObjectKind::Ship, ext_id).unwrap();
        universe
            .get_mut(id)
            .unwrap()
            .set_field("Owner", Value::Int(ext_id * 10));
    }
    universe.create(ObjectKind::Explosion, 9).unwrap();
    drop(universe);
    world
}

// =============================================================================
// Iteration contract
// =============================================================================

#[test]
fn next_is_false_forever_once_exhausted() {
    let world = seeded_world();
    let mut ctx = factory::ships(&world).unwrap();

    let mut steps = 1;
    while ctx.next() {
        steps += 1;
    }
    assert_eq!(steps, 3);
    for _ in 0..5 {
        assert!(!ctx.next());
    }
}

#[test]
fn clone_and_original_never_interfere() {
    let world = seeded_world();
    let mut original = factory::ships(&world).unwrap();
    let mut clone = original.clone_context();

    assert!(original.next());
    assert!(original.next());
    assert!(!original.next());

    // The clone still sees the full remainder of the collection.
    let mut remaining = 1;
    while clone.next() {
        remaining += 1;
    }
    assert_eq!(remaining, 3);
}

#[test]
fn iteration_is_ascending_by_id() {
    let world = seeded_world();
    let mut ctx = factory::ships(&world).unwrap();
    let index = ctx.lookup("ID").unwrap();

    let mut ids = vec![ctx.get(index).unwrap()];
    while ctx.next() {
        ids.push(ctx.get(index).unwrap());
    }
    assert_eq!(ids, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
}

// =============================================================================
// Property access
// =============================================================================

#[test]
fn lookup_is_case_insensitive_and_reusable() {
    let world = seeded_world();
    let mut ctx = factory::ships(&world).unwrap();

    let index = ctx.lookup("owner").unwrap();
    assert_eq!(ctx.lookup("OWNER"), Some(index));
    assert_eq!(ctx.get(index).unwrap(), Value::Int(10));
    assert!(ctx.next());
    // The same handle reads the new current object.
    assert_eq!(ctx.get(index).unwrap(), Value::Int(20));
}

#[test]
fn enumerate_reports_declared_hints() {
    let world = seeded_world();
    let ctx = factory::ships(&world).unwrap();
    let mut collector = PropertyCollector::new();
    ctx.enumerate(&mut collector);

    assert_eq!(collector.hint_for("ID"), Some(TypeHint::Int));
    assert_eq!(collector.hint_for("NAME"), Some(TypeHint::String));
    assert_eq!(collector.hint_for("WARP"), None);
}

#[test]
fn deleted_referent_reads_as_empty() {
    let world = seeded_world();
    let mut ctx = factory::ship(&world, 2).unwrap();
    let index = ctx.lookup("OWNER").unwrap();
    assert_eq!(ctx.get(index).unwrap(), Value::Int(20));

    let doomed = world
        .universe()
        .borrow()
        .find(ObjectKind::Ship, 2)
        .unwrap();
    world.universe().borrow_mut().destroy(doomed).unwrap();

    assert_eq!(ctx.get(index).unwrap(), Value::Null);
    assert!(ctx.set(index, &Value::Int(1)).is_err());
}

// =============================================================================
// Fixed-object contexts
// =============================================================================

#[test]
fn explosion_context_is_single_object() {
    let world = seeded_world();
    let mut ctx = factory::explosion(&world, 9).unwrap();

    assert!(!ctx.next());
    let index = ctx.lookup("ID").unwrap();
    assert_eq!(ctx.get(index).unwrap(), Value::Int(9));
    assert!(ctx.object_ref().is_some());
    assert!(factory::explosion(&world, 10).is_none());
}
