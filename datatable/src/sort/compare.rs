//! Value comparison used by every sort key.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use crate::model::Value;

/// Compares two extracted sort values in ascending order.
///
/// - equal values compare `Equal`, including two nulls;
/// - `Null` sorts before any other value;
/// - numbers compare numerically across `Int`, `Long`, `Float` and `Decimal`;
/// - strings, booleans, GUIDs and datetimes use their natural order;
/// - lists compare element-wise;
/// - records have no order and compare `Equal` to each other.
///
/// Values of unrelated types fall back to a fixed type rank, which keeps the
/// comparison a total order.
pub fn compare(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Less,
        (_, Value::Null) => Ordering::Greater,
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Guid(a), Value::Guid(b)) => a.cmp(b),
        (Value::DateTime(a), Value::DateTime(b)) => a.cmp(b),
        (Value::Record(_), Value::Record(_)) => Ordering::Equal,
        (Value::List(a), Value::List(b)) => compare_lists(a, b),
        _ => match (Number::of(left), Number::of(right)) {
            (Some(a), Some(b)) => a.compare(b),
            _ => type_rank(left).cmp(&type_rank(right)),
        },
    }
}

fn compare_lists(left: &[Value], right: &[Value]) -> Ordering {
    for (a, b) in left.iter().zip(right) {
        let ordering = compare(a, b);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    left.len().cmp(&right.len())
}

/// Rank used when two values have no common ordering.
fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Int(_) | Value::Long(_) | Value::Float(_) | Value::Decimal(_) => 2,
        Value::String(_) => 3,
        Value::Guid(_) => 4,
        Value::DateTime(_) => 5,
        Value::List(_) => 6,
        Value::Record(_) => 7,
    }
}

#[derive(Clone, Copy)]
enum Number {
    Integer(i64),
    Decimal(Decimal),
    Float(f64),
}

impl Number {
    fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Int(n) => Some(Number::Integer(i64::from(*n))),
            Value::Long(n) => Some(Number::Integer(*n)),
            Value::Decimal(d) => Some(Number::Decimal(*d)),
            Value::Float(f) => Some(Number::Float(*f)),
            _ => None,
        }
    }

    fn compare(self, other: Number) -> Ordering {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a.cmp(&b),
            (Number::Decimal(a), Number::Decimal(b)) => a.cmp(&b),
            (Number::Float(a), Number::Float(b)) => compare_floats(a, b),
            (Number::Integer(a), Number::Decimal(b)) => Decimal::from(a).cmp(&b),
            (Number::Decimal(a), Number::Integer(b)) => a.cmp(&Decimal::from(b)),
            (Number::Integer(a), Number::Float(b)) => compare_integer_float(a, b),
            (Number::Float(a), Number::Integer(b)) => compare_integer_float(b, a).reverse(),
            (Number::Decimal(a), Number::Float(b)) => compare_decimal_float(a, b),
            (Number::Float(a), Number::Decimal(b)) => compare_decimal_float(b, a).reverse(),
        }
    }
}

/// Zeros compare equal; negative NaNs sort below every number and positive
/// NaNs above.
fn compare_floats(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

/// Where a number that is not NaN sorts against a NaN.
fn against_nan(nan: f64) -> Ordering {
    if nan.is_sign_negative() {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

/// Exact comparison, without rounding the integer to a float.
fn compare_integer_float(n: i64, f: f64) -> Ordering {
    // 2^63: the first float above every i64.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if f.is_nan() {
        return against_nan(f);
    }
    if f >= LIMIT {
        return Ordering::Less;
    }
    if f < -LIMIT {
        return Ordering::Greater;
    }

    let whole = f.trunc();
    // In range and integral, so the cast is exact.
    match n.cmp(&(whole as i64)) {
        Ordering::Equal => compare_floats(whole, f),
        ordering => ordering,
    }
}

fn compare_decimal_float(d: Decimal, f: f64) -> Ordering {
    if f.is_nan() {
        return against_nan(f);
    }
    match Decimal::from_f64_retain(f) {
        Some(converted) => d.cmp(&converted),
        // Infinite or beyond the decimal range.
        None if f > 0.0 => Ordering::Less,
        None => Ordering::Greater,
    }
}
