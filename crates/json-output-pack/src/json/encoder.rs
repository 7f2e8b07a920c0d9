//! Value encoder.
//!
//! [`try_jsonize`] is the strict conversion. [`jsonize`] is the encoder used
//! on every delivery surface: it never fails for a value it merely cannot
//! represent and instead wraps the value's text as `{"result": "..."}`.

use serde::Serialize;
use serde_json::{Map, Number, Value};

use super::formatter::DumpsFormatter;
use crate::{EncodeError, FormatError, ResultValue};

/// Convert `value` into a JSON tree, unboxing numeric scalars and
/// expanding numeric arrays.
pub fn to_json_value(value: &ResultValue) -> Result<Value, EncodeError> {
    Ok(match value {
        ResultValue::Null => Value::Null,
        ResultValue::Bool(b) => Value::Bool(*b),
        ResultValue::Int(n) => Value::from(*n),
        ResultValue::UInt(n) => Value::from(*n),
        ResultValue::BigInt(n) => {
            if let Ok(i) = i64::try_from(*n) {
                Value::from(i)
            } else if let Ok(u) = u64::try_from(*n) {
                Value::from(u)
            } else {
                return Err(EncodeError::Overflow(*n));
            }
        }
        ResultValue::Float(x) => Number::from_f64(*x)
            .map(Value::Number)
            .ok_or(EncodeError::NonFinite(*x))?,
        ResultValue::Str(s) => Value::String(s.clone()),
        ResultValue::Seq(items) => Value::Array(
            items
                .iter()
                .map(to_json_value)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        ResultValue::Map(entries) => {
            let mut map = Map::with_capacity(entries.len());
            for (key, item) in entries {
                map.insert(key.clone(), to_json_value(item)?);
            }
            Value::Object(map)
        }
        ResultValue::Scalar(s) => to_json_value(&s.item())?,
        ResultValue::Array(a) => to_json_value(&a.to_list())?,
        ResultValue::Opaque(o) => return Err(EncodeError::Unrepresentable(o.type_name.clone())),
        ResultValue::Failure(err) => return Err(EncodeError::Failed(err.clone())),
    })
}

/// Serialize a JSON tree with the payload layout.
pub fn write_json(value: &Value) -> Result<String, EncodeError> {
    let mut buf = Vec::with_capacity(128);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, DumpsFormatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

/// Strict encoding: any value that cannot be represented is an error.
pub fn try_jsonize(value: &ResultValue) -> Result<String, EncodeError> {
    write_json(&to_json_value(value)?)
}

/// Encode `value`, falling back to `{"result": "<text of value>"}` when it
/// cannot be represented.
///
/// Only per-item failures carried by the value escape, so each can become
/// an error response for its own caller.
pub fn jsonize(value: &ResultValue) -> Result<String, FormatError> {
    if let Some(err) = value.failure() {
        return Err(err.clone());
    }
    match try_jsonize(value) {
        Ok(payload) => Ok(payload),
        Err(err) if err.is_absorbable() => {
            tracing::debug!(error = %err, "encoding text form of unserializable result");
            let mut wrapper = Map::with_capacity(1);
            wrapper.insert("result".to_owned(), Value::String(value.to_string()));
            write_json(&Value::Object(wrapper)).map_err(internal)
        }
        Err(EncodeError::Failed(err)) => Err(err),
        Err(err) => Err(internal(err)),
    }
}

fn internal(err: EncodeError) -> FormatError {
    FormatError::internal(err.to_string())
}
