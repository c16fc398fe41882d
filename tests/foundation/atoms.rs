//! Integration tests for the atom table and handle types

use starscript_foundation::{AtomId, AtomTable, ObjectId};

#[test]
fn atoms_are_stable_integers() {
    let mut atoms = AtomTable::new();
    let a = atoms.intern("ui.go");
    let b = atoms.intern("ui.exit");

    assert_ne!(a, b);
    assert_eq!(atoms.intern("ui.go"), a);
    assert_eq!(atoms.get(a), Some("ui.go"));
}

#[test]
fn the_null_atom_is_reserved() {
    let mut atoms = AtomTable::new();
    assert_eq!(atoms.intern(""), AtomId::NULL);
    assert!(!atoms.intern("real").is_null());
}

#[test]
fn object_ids_compare_by_slot_and_generation() {
    let a = ObjectId::new(1, 1);
    let b = ObjectId::new(1, 3);
    assert_ne!(a, b);
    assert_eq!(a, ObjectId::new(1, 1));
    assert_ne!(a, ObjectId::null());
}
