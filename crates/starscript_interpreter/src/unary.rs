//! Unary operator dispatch and implementations.
//!
//! Every operator follows the same contract: the empty value propagates
//! (with the handful of exceptions noted per operator), type errors report
//! the unmet operand expectation, and domain violations report range
//! errors. Operators never mutate their operand; reference operands are
//! cloned by handle.

use starscript_foundation::{
    classify, AtomId, Classified, Error, Expectation, Result, Value,
};
use starscript_storage::World;

use crate::opcode::UnaryOp;

/// Largest angle, in degrees, the trigonometric operators accept.
///
/// Beyond this the degree-to-radian conversion has lost too much precision
/// for the result to mean anything.
const MAX_ANGLE_DEGREES: f64 = 1.0e6;

/// Cosine magnitude below which the tangent is treated as a pole.
const TAN_POLE_EPSILON: f64 = 1.0e-6;

/// Largest magnitude `Trunc`/`Round` accept after rounding.
const MAX_INT_MAGNITUDE: f64 = 2_147_483_647.0;

/// Executes a unary operator.
///
/// The opcode comes from compiled bytecode; an opcode outside the table is
/// an internal error (compiler/runtime mismatch), not a script error.
pub fn execute_unary(world: &mut World, opcode: u8, arg: &Value) -> Result<Value> {
    let op = UnaryOp::from_u8(opcode)
        .ok_or_else(|| Error::internal(format!("unknown unary opcode {opcode}")))?;

    match op {
        UnaryOp::Not => Ok(logical_not(arg)),
        UnaryOp::Not2 => Ok(Value::Bool(!arg.is_truthy())),
        UnaryOp::Bool => Ok(to_bool(arg)),
        UnaryOp::Neg => negate(arg),
        UnaryOp::Pos => identity(arg),
        UnaryOp::Abs => absolute(arg),
        UnaryOp::Inc => step(arg, 1),
        UnaryOp::Dec => step(arg, -1),
        UnaryOp::Zap => Ok(zap(arg)),
        UnaryOp::Sin => trig(arg, f64::sin),
        UnaryOp::Cos => trig(arg, f64::cos),
        UnaryOp::Tan => tangent(arg),
        UnaryOp::Sqrt => square_root(arg),
        UnaryOp::Log => logarithm(arg),
        UnaryOp::Exp => float_fn(arg, f64::exp),
        UnaryOp::Trunc => to_int(arg, f64::trunc),
        UnaryOp::Round => to_int(arg, round_half_away),
        UnaryOp::LTrim => string_fn(arg, |s| s.trim_start().to_string()),
        UnaryOp::RTrim => string_fn(arg, |s| s.trim_end().to_string()),
        UnaryOp::LRTrim => string_fn(arg, |s| s.trim().to_string()),
        UnaryOp::UCase => string_fn(arg, str::to_uppercase),
        UnaryOp::LCase => string_fn(arg, str::to_lowercase),
        UnaryOp::Length => length(arg),
        UnaryOp::Chr => chr(arg),
        UnaryOp::Str => Ok(to_string(arg)),
        UnaryOp::Asc => Ok(asc(arg)),
        UnaryOp::Val => val(arg),
        UnaryOp::IsEmpty => Ok(Value::Bool(arg.is_null())),
        UnaryOp::IsNum => Ok(is_num(arg)),
        UnaryOp::IsString => Ok(Value::Bool(matches!(arg, Value::Str(_)))),
        UnaryOp::IsArray => Ok(is_array(arg)),
        UnaryOp::IsProcedure => Ok(is_procedure(arg)),
        UnaryOp::Atom => Ok(atom(world, arg)),
        UnaryOp::AtomStr => atom_str(world, arg),
        UnaryOp::KeyCreate => key_create(world, arg),
        UnaryOp::KeyLookup => key_lookup(world, arg),
        UnaryOp::FileNr => file_nr(arg),
    }
}

/// Classifies an operand as a float, or `None` for the empty value.
fn require_numeric(arg: &Value) -> Result<Option<f64>> {
    match classify(arg) {
        Classified::Null => Ok(None),
        Classified::Int(n) => Ok(Some(f64::from(n))),
        Classified::Float(n) => Ok(Some(n)),
        Classified::NotNumeric => Err(Error::type_error(Expectation::Numeric)),
    }
}

/// Requires a string operand, or `None` for the empty value.
fn require_string(arg: &Value) -> Result<Option<&str>> {
    match arg {
        Value::Null => Ok(None),
        Value::Str(s) => Ok(Some(s)),
        _ => Err(Error::type_error(Expectation::String)),
    }
}

fn logical_not(arg: &Value) -> Value {
    if arg.is_null() {
        Value::Null
    } else {
        Value::Bool(!arg.is_truthy())
    }
}

fn to_bool(arg: &Value) -> Value {
    if arg.is_null() {
        Value::Null
    } else {
        Value::Bool(arg.is_truthy())
    }
}

fn negate(arg: &Value) -> Result<Value> {
    match classify(arg) {
        Classified::Null => Ok(Value::Null),
        Classified::Int(n) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(Error::range_error),
        Classified::Float(n) => Ok(Value::Float(-n)),
        Classified::NotNumeric => Err(Error::type_error(Expectation::Numeric)),
    }
}

/// Unary plus: the identity on numbers, a type check on everything else.
fn identity(arg: &Value) -> Result<Value> {
    match classify(arg) {
        Classified::Null => Ok(Value::Null),
        Classified::Int(n) => Ok(Value::Int(n)),
        Classified::Float(n) => Ok(Value::Float(n)),
        Classified::NotNumeric => Err(Error::type_error(Expectation::Numeric)),
    }
}

fn absolute(arg: &Value) -> Result<Value> {
    match classify(arg) {
        Classified::Null => Ok(Value::Null),
        Classified::Int(n) => n
            .checked_abs()
            .map(Value::Int)
            .ok_or_else(Error::range_error),
        Classified::Float(n) => Ok(Value::Float(n.abs())),
        Classified::NotNumeric => Err(Error::type_error(Expectation::Numeric)),
    }
}

fn step(arg: &Value, delta: i32) -> Result<Value> {
    match classify(arg) {
        Classified::Null => Ok(Value::Null),
        Classified::Int(n) => n
            .checked_add(delta)
            .map(Value::Int)
            .ok_or_else(Error::range_error),
        Classified::Float(n) => Ok(Value::Float(n + f64::from(delta))),
        Classified::NotNumeric => Err(Error::type_error(Expectation::Numeric)),
    }
}

/// Turns falsy values into the empty value; truthy values pass through.
fn zap(arg: &Value) -> Value {
    if arg.is_truthy() {
        arg.clone()
    } else {
        Value::Null
    }
}

/// Checks and converts a degree operand to radians.
fn angle_radians(arg: &Value) -> Result<Option<f64>> {
    match require_numeric(arg)? {
        None => Ok(None),
        Some(degrees) => {
            if degrees.abs() > MAX_ANGLE_DEGREES {
                return Err(Error::range_error());
            }
            Ok(Some(degrees.to_radians()))
        }
    }
}

fn trig(arg: &Value, f: fn(f64) -> f64) -> Result<Value> {
    match angle_radians(arg)? {
        None => Ok(Value::Null),
        Some(radians) => Ok(Value::Float(f(radians))),
    }
}

/// Tangent computed as sin/cos so the pole check sees the same cosine the
/// quotient uses.
fn tangent(arg: &Value) -> Result<Value> {
    match angle_radians(arg)? {
        None => Ok(Value::Null),
        Some(radians) => {
            let cos = radians.cos();
            if cos.abs() < TAN_POLE_EPSILON {
                return Err(Error::divide_by_zero());
            }
            Ok(Value::Float(radians.sin() / cos))
        }
    }
}

fn square_root(arg: &Value) -> Result<Value> {
    match require_numeric(arg)? {
        None => Ok(Value::Null),
        Some(n) if n < 0.0 => Err(Error::range_error()),
        Some(n) => Ok(Value::Float(n.sqrt())),
    }
}

fn logarithm(arg: &Value) -> Result<Value> {
    match require_numeric(arg)? {
        None => Ok(Value::Null),
        Some(n) if n <= 0.0 => Err(Error::range_error()),
        Some(n) => Ok(Value::Float(n.ln())),
    }
}

fn float_fn(arg: &Value, f: fn(f64) -> f64) -> Result<Value> {
    match require_numeric(arg)? {
        None => Ok(Value::Null),
        Some(n) => Ok(Value::Float(f(n))),
    }
}

/// Rounds half away from zero, the convention scripts expect (`0.5 -> 1`,
/// `-0.5 -> -1`).
fn round_half_away(n: f64) -> f64 {
    if n >= 0.0 {
        (n + 0.5).trunc()
    } else {
        (n - 0.5).trunc()
    }
}

/// Shared body of `Trunc` and `Round`: integers pass through, floats are
/// rounded by `f` and must land in the 32-bit range.
#[allow(clippy::cast_possible_truncation)]
fn to_int(arg: &Value, f: fn(f64) -> f64) -> Result<Value> {
    match classify(arg) {
        Classified::Null => Ok(Value::Null),
        Classified::Int(n) => Ok(Value::Int(n)),
        Classified::Float(n) => {
            let rounded = f(n);
            if !rounded.is_finite() || rounded.abs() > MAX_INT_MAGNITUDE {
                return Err(Error::range_error());
            }
            Ok(Value::Int(rounded as i32))
        }
        Classified::NotNumeric => Err(Error::type_error(Expectation::Numeric)),
    }
}

fn string_fn(arg: &Value, f: impl Fn(&str) -> String) -> Result<Value> {
    match require_string(arg)? {
        None => Ok(Value::Null),
        Some(s) => Ok(Value::string(f(s))),
    }
}

fn length(arg: &Value) -> Result<Value> {
    match require_string(arg)? {
        None => Ok(Value::Null),
        Some(s) => {
            let count = i32::try_from(s.chars().count())
                .map_err(|_| Error::range_error())?;
            Ok(Value::Int(count))
        }
    }
}

fn chr(arg: &Value) -> Result<Value> {
    match classify(arg) {
        Classified::Null => Ok(Value::Null),
        Classified::Int(n) => {
            let code = u32::try_from(n).map_err(|_| Error::range_error())?;
            let ch = char::from_u32(code).ok_or_else(Error::range_error)?;
            Ok(Value::string(ch.to_string()))
        }
        Classified::Float(_) | Classified::NotNumeric => {
            Err(Error::type_error(Expectation::Integer))
        }
    }
}

fn to_string(arg: &Value) -> Value {
    if arg.is_null() {
        Value::Null
    } else {
        Value::string(arg.stringify(false))
    }
}

/// Code point of the first character of the stringified operand; the empty
/// string has no first character and yields the empty value.
#[allow(clippy::cast_possible_wrap)]
fn asc(arg: &Value) -> Value {
    if arg.is_null() {
        return Value::Null;
    }
    match arg.stringify(false).chars().next() {
        Some(ch) => Value::Int(u32::from(ch) as i32),
        None => Value::Null,
    }
}

/// Parses a string as a number the way a script literal would be read.
///
/// Only digits, a sign, a decimal point, and surrounding blanks are
/// accepted; in particular scientific notation is not a `Val` number.
/// Anything unparseable yields the empty value, never an error.
#[allow(clippy::cast_precision_loss)]
fn val(arg: &Value) -> Result<Value> {
    let Some(text) = require_string(arg)? else {
        return Ok(Value::Null);
    };
    let trimmed = text.trim_matches([' ', '\t']);
    if trimmed.is_empty()
        || trimmed.contains([' ', '\t'])
        || !trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-'))
    {
        return Ok(Value::Null);
    }

    if trimmed.contains('.') {
        Ok(trimmed.parse::<f64>().map_or(Value::Null, Value::Float))
    } else {
        match trimmed.parse::<i64>() {
            // Prefer the exact integer when it fits the value range.
            Ok(n) => Ok(i32::try_from(n).map_or(Value::Float(n as f64), Value::Int)),
            Err(_) => Ok(trimmed.parse::<f64>().map_or(Value::Null, Value::Float)),
        }
    }
}

fn is_num(arg: &Value) -> Value {
    let numeric = matches!(
        classify(arg),
        Classified::Int(_) | Classified::Float(_)
    );
    Value::Bool(numeric)
}

/// First-dimension size for arrays, integer zero for every other non-empty
/// value.
#[allow(clippy::cast_possible_wrap)]
fn is_array(arg: &Value) -> Value {
    match arg {
        Value::Null => Value::Null,
        Value::Array(a) => Value::Int(a.borrow().first_dim() as i32),
        _ => Value::Int(0),
    }
}

fn is_procedure(arg: &Value) -> Value {
    match arg {
        Value::Null => Value::Null,
        Value::Context(ctx) => Value::Bool(ctx.borrow().is_procedure()),
        _ => Value::Bool(false),
    }
}

/// Interns the stringified operand, yielding the atom as an integer.
#[allow(clippy::cast_possible_wrap)]
fn atom(world: &mut World, arg: &Value) -> Value {
    if arg.is_null() {
        return Value::Null;
    }
    let id = world.atoms_mut().intern(&arg.stringify(false));
    Value::Int(id.index() as i32)
}

/// Resolves an atom back to its string; atoms never interned resolve to
/// the empty string rather than failing.
fn atom_str(world: &World, arg: &Value) -> Result<Value> {
    match classify(arg) {
        Classified::Null => Ok(Value::Null),
        Classified::Int(n) => {
            let text = u32::try_from(n)
                .ok()
                .and_then(|index| world.atoms().get(AtomId::new(index)))
                .unwrap_or("");
            Ok(Value::string(text))
        }
        Classified::Float(_) | Classified::NotNumeric => {
            Err(Error::type_error(Expectation::Integer))
        }
    }
}

fn key_create(world: &mut World, arg: &Value) -> Result<Value> {
    match require_string(arg)? {
        None => Ok(Value::Null),
        Some(name) => Ok(Value::Keymap(world.keymaps_mut().create(name)?)),
    }
}

fn key_lookup(world: &World, arg: &Value) -> Result<Value> {
    match require_string(arg)? {
        None => Ok(Value::Null),
        Some(name) => Ok(Value::Keymap(world.keymaps().lookup(name)?)),
    }
}

/// Normalizes a script file number: non-negative integers become handles,
/// handles pass through unchanged.
fn file_nr(arg: &Value) -> Result<Value> {
    match arg {
        Value::Null => Ok(Value::Null),
        Value::FileHandle(n) => Ok(Value::FileHandle(*n)),
        Value::Int(n) if *n >= 0 => Ok(Value::FileHandle(*n)),
        Value::Int(_) => Err(Error::range_error()),
        _ => Err(Error::type_error(Expectation::Integer)),
    }
}
