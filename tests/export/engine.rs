//! Integration tests for the export engine

use starscript_context::factory;
use starscript_export::{export, export_filtered, Decision, FieldList, SeparatedExporter};
use starscript_foundation::{ErrorKind, Value};
use starscript_storage::{ObjectKind, World};

fn world_with_ships(count: i32) -> World {
    let world = World::new();
    let mut universe = world.universe().borrow_mut();
    for ext_id in 1..=count {
        let id = universe.create(ObjectKind::Ship, ext_id).unwrap();
        let ship = universe.get_mut(id).unwrap();
        ship.set_field("Name", Value::from(format!("Ship {ext_id}")));
        ship.set_field("Owner", Value::Int(ext_id % 3));
    }
    drop(universe);
    world
}

#[test]
fn n_objects_by_m_fields() {
    let world = world_with_ships(4);
    let mut ctx = factory::ships(&world).unwrap();
    let mut fields = FieldList::new();
    fields.add_list("ID,NAME,OWNER").unwrap();
    let mut sink = SeparatedExporter::comma();

    export(ctx.as_mut(), &fields, &mut sink).unwrap();

    let lines: Vec<&str> = sink.output().lines().collect();
    // Header plus one record per object, each with all three fields.
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "ID,NAME,OWNER");
    assert_eq!(lines[1], "1,Ship 1,1");
    assert!(lines.iter().skip(1).all(|l| l.split(',').count() == 3));
}

#[test]
fn unknown_field_is_a_hard_precondition() {
    let world = world_with_ships(2);
    let mut ctx = factory::ships(&world).unwrap();
    let mut fields = FieldList::new();
    fields.add_list("ID,WARP").unwrap();
    let mut sink = SeparatedExporter::comma();

    let err = export(ctx.as_mut(), &fields, &mut sink).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownField(_)));
    assert!(sink.output().is_empty());
}

#[test]
fn reject_and_cancel_decisions() {
    let world = world_with_ships(5);
    let mut fields = FieldList::new();
    fields.add_list("ID").unwrap();

    // Reject the second object only.
    let mut ctx = factory::ships(&world).unwrap();
    let mut sink = SeparatedExporter::comma();
    let mut seen = 0;
    export_filtered(
        ctx.as_mut(),
        &fields,
        &mut |_| {
            seen += 1;
            if seen == 2 {
                Decision::Reject
            } else {
                Decision::Accept
            }
        },
        &mut sink,
    )
    .unwrap();
    assert_eq!(sink.output(), "ID\n1\n3\n4\n5\n");

    // Cancel on the third object: nothing from it onward.
    let mut ctx = factory::ships(&world).unwrap();
    let mut sink = SeparatedExporter::comma();
    let mut seen = 0;
    export_filtered(
        ctx.as_mut(),
        &fields,
        &mut |_| {
            seen += 1;
            if seen == 3 {
                Decision::Cancel
            } else {
                Decision::Accept
            }
        },
        &mut sink,
    )
    .unwrap();
    assert_eq!(sink.output(), "ID\n1\n2\n");
}

#[test]
fn filters_may_inspect_the_object() {
    let world = world_with_ships(6);
    let mut ctx = factory::ships(&world).unwrap();
    let mut fields = FieldList::new();
    fields.add_list("ID").unwrap();
    let mut sink = SeparatedExporter::comma();

    // Keep only objects owned by player 1, read through the context.
    export_filtered(
        ctx.as_mut(),
        &fields,
        &mut |ctx| {
            let owner = ctx.lookup("OWNER").unwrap();
            match ctx.get(owner) {
                Ok(Value::Int(1)) => Decision::Accept,
                _ => Decision::Reject,
            }
        },
        &mut sink,
    )
    .unwrap();

    assert_eq!(sink.output(), "ID\n1\n4\n");
}

#[test]
fn config_context_exports_like_any_other() {
    let world = World::new();
    world
        .config()
        .borrow_mut()
        .set("GameName", Value::from("North Star 7"));
    world.config().borrow_mut().set("MaxShips", Value::Int(500));

    let mut ctx = factory::config(&world);
    let mut fields = FieldList::new();
    fields.add_list("GameName,MaxShips").unwrap();
    let mut sink = SeparatedExporter::comma();

    export(ctx.as_mut(), &fields, &mut sink).unwrap();
    assert_eq!(
        sink.output(),
        "GAMENAME,MAXSHIPS\nNorth Star 7,500\n"
    );
}
