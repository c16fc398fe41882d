//! Static per-family property tables.
//!
//! Each object family declares its scriptable properties once, as a static
//! table; contexts resolve names against the table and read the values out
//! of the live object's field bag. `ID` is special: it is the external id
//! every object carries structurally, not a bag entry.

use starscript_foundation::{ObjectId, PropertyIndex, TypeHint, Value};
use starscript_storage::{ObjectKind, Universe};

/// One scriptable property of an object family.
#[derive(Copy, Clone, Debug)]
pub struct PropertyDef {
    /// Canonical (upper-case) property name.
    pub name: &'static str,
    /// Declared value type, consumed by export width resolution.
    pub hint: TypeHint,
    /// Whether scripts may assign to this property.
    pub writable: bool,
}

const fn def(name: &'static str, hint: TypeHint, writable: bool) -> PropertyDef {
    PropertyDef {
        name,
        hint,
        writable,
    }
}

static SHIP_PROPERTIES: &[PropertyDef] = &[
    def("ID", TypeHint::Int, false),
    def("NAME", TypeHint::String, true),
    def("OWNER", TypeHint::Int, false),
    def("X", TypeHint::Int, false),
    def("Y", TypeHint::Int, false),
    def("HULL", TypeHint::String, false),
    def("CREW", TypeHint::Int, false),
    def("MISSION", TypeHint::Int, true),
];

static PLANET_PROPERTIES: &[PropertyDef] = &[
    def("ID", TypeHint::Int, false),
    def("NAME", TypeHint::String, true),
    def("OWNER", TypeHint::Int, false),
    def("X", TypeHint::Int, false),
    def("Y", TypeHint::Int, false),
    def("TEMP", TypeHint::Int, false),
    def("COLONISTS", TypeHint::Int, false),
    def("FCODE", TypeHint::String, true),
];

static MINEFIELD_PROPERTIES: &[PropertyDef] = &[
    def("ID", TypeHint::Int, false),
    def("OWNER", TypeHint::Int, false),
    def("X", TypeHint::Int, false),
    def("Y", TypeHint::Int, false),
    def("RADIUS", TypeHint::Int, false),
    def("UNITS", TypeHint::Int, false),
];

static EXPLOSION_PROPERTIES: &[PropertyDef] = &[
    def("ID", TypeHint::Int, false),
    def("X", TypeHint::Int, false),
    def("Y", TypeHint::Int, false),
    def("NAME", TypeHint::String, false),
];

static DRAWING_PROPERTIES: &[PropertyDef] = &[
    def("ID", TypeHint::Int, false),
    def("X", TypeHint::Int, false),
    def("Y", TypeHint::Int, false),
    def("COLOR", TypeHint::Int, true),
    def("COMMENT", TypeHint::String, true),
];

/// Returns the property table of an object family.
#[must_use]
pub fn table_for(kind: ObjectKind) -> &'static [PropertyDef] {
    match kind {
        ObjectKind::Ship => SHIP_PROPERTIES,
        ObjectKind::Planet => PLANET_PROPERTIES,
        ObjectKind::Minefield => MINEFIELD_PROPERTIES,
        ObjectKind::Explosion => EXPLOSION_PROPERTIES,
        ObjectKind::Drawing => DRAWING_PROPERTIES,
    }
}

/// Family name as a static string, for context stringification.
#[must_use]
pub const fn family_name(kind: ObjectKind) -> &'static str {
    match kind {
        ObjectKind::Ship => "SHIP",
        ObjectKind::Planet => "PLANET",
        ObjectKind::Minefield => "MINEFIELD",
        ObjectKind::Explosion => "EXPLOSION",
        ObjectKind::Drawing => "DRAWING",
    }
}

/// Resolves a property name case-insensitively against a table.
#[must_use]
pub fn lookup_in(table: &[PropertyDef], name: &str) -> Option<PropertyIndex> {
    table
        .iter()
        .position(|p| p.name.eq_ignore_ascii_case(name))
        .map(PropertyIndex::new)
}

/// Reads one property off a live object, or `Null` if the referent is
/// gone. `ID` reads the external id; everything else reads the field bag,
/// where an unset field is also `Null`.
#[must_use]
pub fn read_property(universe: &Universe, id: ObjectId, prop: &PropertyDef) -> Value {
    let Some(object) = universe.get(id) else {
        return Value::Null;
    };
    if prop.name == "ID" {
        return Value::Int(object.ext_id());
    }
    object.field(prop.name).cloned().unwrap_or(Value::Null)
}
