//! Integration tests for Value types
//!
//! Tests Value variants, truthiness, stringification, store/restore, and
//! shared-reference semantics.

use starscript_foundation::{ErrorKind, StoredValue, Value};

// =============================================================================
// Construction and truthiness
// =============================================================================

#[test]
fn value_null() {
    let v = Value::Null;
    assert!(v.is_null());
    assert!(!v.is_truthy());
}

#[test]
fn value_scalars() {
    assert_eq!(Value::Int(42).as_int(), Some(42));
    assert_eq!(Value::Float(1.5).as_float(), Some(1.5));
    assert_eq!(Value::Bool(true).as_bool(), Some(true));
    assert_eq!(Value::from("hello").as_str(), Some("hello"));
}

#[test]
fn falsy_values() {
    for v in [
        Value::Null,
        Value::Bool(false),
        Value::Int(0),
        Value::Float(0.0),
        Value::from(""),
    ] {
        assert!(!v.is_truthy(), "expected falsy: {v:?}");
    }
}

#[test]
fn reference_variants_are_truthy() {
    assert!(Value::hash().is_truthy());
    assert!(Value::array(&[1]).unwrap().is_truthy());
    assert!(Value::FileHandle(0).is_truthy());
}

// =============================================================================
// Stringification
// =============================================================================

#[test]
fn stringify_plain_and_readable() {
    assert_eq!(Value::Null.stringify(false), "");
    assert_eq!(Value::Null.stringify(true), "Z(0)");
    assert_eq!(Value::Bool(true).stringify(false), "YES");
    assert_eq!(Value::Bool(false).stringify(true), "False");
    assert_eq!(Value::Int(-3).stringify(true), "-3");
    assert_eq!(Value::from("a \"b\"").stringify(true), r#""a \"b\"""#);
}

// =============================================================================
// Shared references
// =============================================================================

#[test]
fn hash_clones_share_mutation() {
    let a = Value::hash();
    let b = a.clone();
    if let Value::Hash(h) = &a {
        h.borrow_mut().insert("K".to_string(), Value::Int(1));
    }
    let Value::Hash(h) = &b else { panic!() };
    assert_eq!(h.borrow().get("K"), Some(&Value::Int(1)));
}

#[test]
fn array_clones_share_mutation() {
    let a = Value::array(&[3]).unwrap();
    let b = a.clone();
    if let Value::Array(arr) = &a {
        arr.borrow_mut().set(&[1], Value::Int(7)).unwrap();
    }
    let Value::Array(arr) = &b else { panic!() };
    assert_eq!(arr.borrow().get(&[1]).unwrap(), Value::Int(7));
}

#[test]
fn reference_equality_is_identity() {
    let a = Value::hash();
    assert_eq!(a, a.clone());
    assert_ne!(a, Value::hash());
}

// =============================================================================
// Store / restore
// =============================================================================

#[test]
fn store_round_trips_the_persistable_subset() {
    for v in [
        Value::Null,
        Value::Bool(true),
        Value::Int(-7),
        Value::FileHandle(2),
    ] {
        assert_eq!(v.store().unwrap().restore(), v);
    }
    assert_eq!(Value::Int(1).store().unwrap(), StoredValue::Int(1));
}

#[test]
fn store_rejects_everything_else() {
    for v in [Value::Float(1.0), Value::from("x"), Value::hash()] {
        let err = v.store().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::NotSerializable));
    }
}
