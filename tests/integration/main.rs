//! End-to-end integration tests
//!
//! Reference scenarios exercising the full stack: custom contexts driving
//! the export engine, keymap operators over one world, and the trig edge
//! fixtures.

use starscript_export::{export, Exporter, FieldList};
use starscript_foundation::{
    Context, ObjectId, PropertyAcceptor, PropertyCollector, PropertyIndex, Result,
    TypeHint, Value,
};
use starscript_interpreter::{execute_ternary, execute_unary, TernaryOp, UnaryOp};
use starscript_storage::World;

// =============================================================================
// Reference export fixture: 6 objects, Ids 5..10, fields A..D = 1..4
// =============================================================================

/// Synthetic collection of six objects with Ids 5 through 10, each
/// exposing integer fields A=1, B=2, C=3, D=4 plus its own ID.
struct FixtureContext {
    current: i32,
}

impl FixtureContext {
    const PROPERTIES: [(&'static str, i32); 5] =
        [("A", 1), ("B", 2), ("C", 3), ("D", 4), ("ID", 0)];

    fn new() -> Self {
        Self { current: 5 }
    }
}

impl Context for FixtureContext {
    fn lookup(&self, name: &str) -> Option<PropertyIndex> {
        Self::PROPERTIES
            .iter()
            .position(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(PropertyIndex::new)
    }

    fn get(&mut self, index: PropertyIndex) -> Result<Value> {
        let (name, fixed) = Self::PROPERTIES[index.index()];
        if name == "ID" {
            Ok(Value::Int(self.current))
        } else {
            Ok(Value::Int(fixed))
        }
    }

    fn set(&mut self, _index: PropertyIndex, _value: &Value) -> Result<()> {
        Err(starscript_foundation::Error::not_assignable())
    }

    fn next(&mut self) -> bool {
        if self.current < 10 {
            self.current += 1;
            true
        } else {
            false
        }
    }

    fn clone_context(&self) -> Box<dyn Context> {
        Box::new(Self {
            current: self.current,
        })
    }

    fn enumerate(&self, acceptor: &mut dyn PropertyAcceptor) {
        for (name, _) in Self::PROPERTIES {
            acceptor.add_property(name, TypeHint::Int);
        }
    }

    fn object_ref(&self) -> Option<ObjectId> {
        None
    }

    fn name(&self) -> &str {
        "FIXTURE"
    }
}

/// Sink rendering each record as `NAME=value` pairs joined by commas.
#[derive(Default)]
struct KeyValueSink {
    record: Vec<String>,
    lines: Vec<String>,
}

impl Exporter for KeyValueSink {
    fn start_table(&mut self, _fields: &FieldList, _hints: &[TypeHint]) -> Result<()> {
        Ok(())
    }

    fn start_record(&mut self) -> Result<()> {
        self.record.clear();
        Ok(())
    }

    fn add_field(&mut self, value: &Value, name: &str, _hint: TypeHint) -> Result<()> {
        self.record.push(format!("{name}={}", value.stringify(false)));
        Ok(())
    }

    fn end_record(&mut self) -> Result<()> {
        self.lines.push(self.record.join(","));
        Ok(())
    }

    fn end_table(&mut self) -> Result<()> {
        Ok(())
    }
}

#[test]
fn reference_export_fixture() {
    let mut ctx = FixtureContext::new();
    let mut fields = FieldList::new();
    fields.add_list("ID,A").unwrap();
    let mut sink = KeyValueSink::default();

    export(&mut ctx, &fields, &mut sink).unwrap();

    assert_eq!(
        sink.lines,
        vec![
            "ID=5,A=1", "ID=6,A=1", "ID=7,A=1", "ID=8,A=1", "ID=9,A=1", "ID=10,A=1",
        ]
    );
}

#[test]
fn fixture_context_obeys_the_iteration_contract() {
    let mut ctx = FixtureContext::new();
    let mut clone = ctx.clone_context();

    for _ in 0..5 {
        assert!(ctx.next());
    }
    assert!(!ctx.next());
    assert!(!ctx.next());

    // The clone is unaffected by exhausting the original.
    assert!(clone.next());
    let index = clone.lookup("id").unwrap();
    assert_eq!(clone.get(index).unwrap(), Value::Int(6));
}

// =============================================================================
// Keymap scenario across dispatch calls
// =============================================================================

#[test]
fn keymap_lifecycle_through_operators() {
    let mut world = World::new();

    let keymap =
        execute_unary(&mut world, UnaryOp::KeyCreate as u8, &Value::from("ShipScreen"))
            .unwrap();
    let result = execute_ternary(
        &mut world,
        TernaryOp::KeyAdd as u8,
        &keymap,
        &Value::from("q"),
        &Value::from("ui.exit"),
    )
    .unwrap();
    assert_eq!(result, keymap);

    // The binding is observable through an independent lookup.
    let found =
        execute_unary(&mut world, UnaryOp::KeyLookup as u8, &Value::from("shipscreen"))
            .unwrap();
    let handle = found.as_keymap().unwrap();
    let bound = world
        .keymaps()
        .get(handle)
        .unwrap()
        .command_for("q")
        .unwrap();
    assert_ne!(bound.index(), 0);
    assert_eq!(world.atoms().get(bound), Some("ui.exit"));

    // Null propagation leaves the registry untouched.
    let null_result = execute_ternary(
        &mut world,
        TernaryOp::KeyAdd as u8,
        &Value::Null,
        &Value::from("x"),
        &Value::from("cmd"),
    )
    .unwrap();
    assert_eq!(null_result, Value::Null);
    assert_eq!(world.keymaps().get(handle).unwrap().len(), 1);
}

// =============================================================================
// Trigonometry fixtures
// =============================================================================

#[test]
fn tangent_fixtures() {
    let mut world = World::new();

    let err = execute_unary(&mut world, UnaryOp::Tan as u8, &Value::Int(90)).unwrap_err();
    assert!(matches!(
        err.kind,
        starscript_foundation::ErrorKind::DivideByZero
    ));

    let zero = execute_unary(&mut world, UnaryOp::Tan as u8, &Value::Int(0)).unwrap();
    match zero {
        Value::Float(n) => assert!(n.abs() < 1e-6),
        other => panic!("expected float, got {other:?}"),
    }
}

// =============================================================================
// Context values inside the value model
// =============================================================================

#[test]
fn contexts_are_values() {
    let ctx = Value::context(FixtureContext::new());
    assert!(ctx.is_truthy());
    assert_eq!(ctx.stringify(false), "#<FIXTURE>");

    let mut world = World::new();
    let flag =
        execute_unary(&mut world, UnaryOp::IsProcedure as u8, &ctx).unwrap();
    assert_eq!(flag, Value::Bool(false));
    let dims = execute_unary(&mut world, UnaryOp::IsArray as u8, &ctx).unwrap();
    assert_eq!(dims, Value::Int(0));

    // Enumeration works through the shared reference.
    let Value::Context(shared) = &ctx else { panic!() };
    let mut collector = PropertyCollector::new();
    shared.borrow().enumerate(&mut collector);
    assert_eq!(collector.properties.len(), 5);
}
