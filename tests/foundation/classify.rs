//! Integration tests for arithmetic classification

use starscript_foundation::{classify, Classified, KeymapRef, Value};

#[test]
fn null_classifies_as_null_and_nothing_else_does() {
    assert_eq!(classify(&Value::Null), Classified::Null);
    for v in [Value::Int(0), Value::from(""), Value::Bool(false)] {
        assert_ne!(classify(&v), Classified::Null, "value {v:?}");
    }
}

#[test]
fn booleans_classify_as_integers() {
    assert_eq!(classify(&Value::Bool(false)), Classified::Int(0));
    assert_eq!(classify(&Value::Bool(true)), Classified::Int(1));
}

#[test]
fn numbers_classify_as_themselves() {
    assert_eq!(classify(&Value::Int(-9)), Classified::Int(-9));
    assert_eq!(classify(&Value::Float(0.25)), Classified::Float(0.25));
}

#[test]
fn everything_else_is_not_numeric() {
    for v in [
        Value::from("12"),
        Value::hash(),
        Value::array(&[1]).unwrap(),
        Value::FileHandle(0),
        Value::Keymap(KeymapRef::new(0)),
    ] {
        assert_eq!(classify(&v), Classified::NotNumeric, "value {v:?}");
    }
}
