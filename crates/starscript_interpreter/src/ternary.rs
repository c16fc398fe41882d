//! Ternary operator dispatch and implementations.

use starscript_foundation::{AtomId, Error, Expectation, Result, Value};
use starscript_storage::World;

use crate::opcode::TernaryOp;

/// Executes a ternary operator.
///
/// As with the unary table, an opcode outside the table is an internal
/// error, not a script error.
pub fn execute_ternary(
    world: &mut World,
    opcode: u8,
    a: &Value,
    b: &Value,
    c: &Value,
) -> Result<Value> {
    let op = TernaryOp::from_u8(opcode)
        .ok_or_else(|| Error::internal(format!("unknown ternary opcode {opcode}")))?;

    match op {
        TernaryOp::KeyAdd => key_add(world, a, b, c),
    }
}

/// Binds `key` to `command` in `keymap`, yielding the keymap so bindings
/// chain: `KeyAdd(KeyAdd(k, "a", cmd), "b", cmd2)`.
///
/// The empty value in any operand short-circuits before type checking.
/// The command may be given as an atom (integer) or as a command string,
/// which is interned on the spot.
fn key_add(world: &mut World, keymap: &Value, key: &Value, command: &Value) -> Result<Value> {
    if keymap.is_null() || key.is_null() || command.is_null() {
        return Ok(Value::Null);
    }

    let handle = keymap
        .as_keymap()
        .ok_or_else(|| Error::type_error(Expectation::Keymap))?;
    let key = key
        .as_str()
        .ok_or_else(|| Error::type_error(Expectation::String))?;
    let atom = match command {
        Value::Int(n) => {
            let index = u32::try_from(*n).map_err(|_| Error::range_error())?;
            AtomId::new(index)
        }
        Value::Str(s) => world.atoms_mut().intern(s),
        _ => return Err(Error::type_error(Expectation::Atom)),
    };

    world.keymaps_mut().add_key(handle, key, atom)?;
    Ok(keymap.clone())
}
