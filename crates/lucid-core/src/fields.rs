//! Typed field lookups over a `ValueMap`

use crate::error::{DecodeError, Result};
use crate::value::{Value, ValueMap};

pub(crate) fn required<'a>(map: &'a ValueMap, field: &'static str) -> Result<&'a Value> {
    map.get(field).ok_or(DecodeError::MissingField(field))
}

fn mismatch(field: &'static str, expected: &'static str, got: &Value) -> DecodeError {
    DecodeError::TypeMismatch {
        field,
        expected,
        got: got.type_name(),
    }
}

pub(crate) fn int(value: &Value, field: &'static str) -> Result<i64> {
    value.as_int().ok_or_else(|| mismatch(field, "int", value))
}

pub(crate) fn string<'a>(map: &'a ValueMap, field: &'static str) -> Result<&'a str> {
    let value = required(map, field)?;
    value.as_str().ok_or_else(|| mismatch(field, "string", value))
}

pub(crate) fn list<'a>(map: &'a ValueMap, field: &'static str) -> Result<&'a [Value]> {
    let value = required(map, field)?;
    value.as_list().ok_or_else(|| mismatch(field, "list", value))
}

pub(crate) fn map<'a>(value: &'a Value, field: &'static str) -> Result<&'a ValueMap> {
    value.as_map().ok_or_else(|| mismatch(field, "map", value))
}
