//! Integration tests for the concrete export sinks

use starscript_context::factory;
use starscript_export::{
    export, resolve_width, Alignment, FieldList, SeparatedExporter, TextTableExporter,
    WidthDefaults,
};
use starscript_foundation::{TypeHint, Value};
use starscript_storage::{ObjectKind, World};

fn world_with_planets() -> World {
    let world = World::new();
    let mut universe = world.universe().borrow_mut();
    for (ext_id, name) in [(1, "Vulcan"), (2, "Andor")] {
        let id = universe.create(ObjectKind::Planet, ext_id).unwrap();
        universe
            .get_mut(id)
            .unwrap()
            .set_field("Name", Value::from(name));
    }
    drop(universe);
    world
}

#[test]
fn text_table_output() {
    let world = world_with_planets();
    let mut ctx = factory::planets(&world).unwrap();
    let mut fields = FieldList::new();
    fields.add_list("ID@4,NAME@8").unwrap();
    let mut sink = TextTableExporter::new();

    export(ctx.as_mut(), &fields, &mut sink).unwrap();

    let expected = "  ID NAME\n---- --------\n   1 Vulcan\n   2 Andor\n";
    assert_eq!(sink.into_output(), expected);
}

#[test]
fn text_table_uses_per_type_defaults_for_zero_width() {
    let world = world_with_planets();
    let mut ctx = factory::planets(&world).unwrap();
    let mut fields = FieldList::new();
    fields.add_list("ID,NAME").unwrap();
    let mut sink = TextTableExporter::new();

    export(ctx.as_mut(), &fields, &mut sink).unwrap();

    let rule = sink.output().lines().nth(1).unwrap();
    // Int default 10, string default 30.
    assert_eq!(rule, format!("{} {}", "-".repeat(10), "-".repeat(30)));
}

#[test]
fn negative_width_flips_alignment_in_output() {
    let world = world_with_planets();
    let mut ctx = factory::planets(&world).unwrap();
    let mut fields = FieldList::new();
    fields.add_list("ID@-4").unwrap();
    let mut sink = TextTableExporter::new();

    export(ctx.as_mut(), &fields, &mut sink).unwrap();

    // Ids are left-aligned now; trailing pad is trimmed away.
    assert_eq!(sink.output().lines().nth(2), Some("1"));
}

#[test]
fn dsv_quotes_only_when_needed() {
    let world = World::new();
    let mut universe = world.universe().borrow_mut();
    let id = universe.create(ObjectKind::Planet, 1).unwrap();
    universe
        .get_mut(id)
        .unwrap()
        .set_field("Name", Value::from("New, Vulcan"));
    drop(universe);

    let mut ctx = factory::planets(&world).unwrap();
    let mut fields = FieldList::new();
    fields.add_list("ID,NAME").unwrap();
    let mut sink = SeparatedExporter::comma();

    export(ctx.as_mut(), &fields, &mut sink).unwrap();
    assert_eq!(sink.output(), "ID,NAME\n1,\"New, Vulcan\"\n");
}

#[test]
fn width_resolution_fixture() {
    let defaults = WidthDefaults::TEXT_TABLE;
    assert_eq!(
        resolve_width(0, TypeHint::Int, &defaults),
        (10, Alignment::Right)
    );
    assert_eq!(
        resolve_width(0, TypeHint::String, &defaults),
        (30, Alignment::Left)
    );
    assert_eq!(
        resolve_width(-8, TypeHint::Float, &defaults),
        (8, Alignment::Left)
    );
    assert_eq!(
        resolve_width(8, TypeHint::Bool, &defaults),
        (8, Alignment::Left)
    );
}
