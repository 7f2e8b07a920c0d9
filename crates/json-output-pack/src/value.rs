//! [`ResultValue`] — the value shapes a model call can return.

use std::fmt::{self, Write};

use ndarray::ArrayD;
use serde_json::Value as JsonValue;

use crate::repr::{float_repr, write_str_repr};
use crate::{FormatError, NumericArray, NumericScalar};

/// A value with no JSON representation, known only by its type and text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opaque {
    pub type_name: String,
    pub text: String,
}

impl Opaque {
    pub fn new(type_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            text: text.into(),
        }
    }
}

/// One result of a compute call, as handed to the output adapter.
///
/// The first eight variants are JSON-native. The rest need a conversion
/// rule of their own before encoding, or cannot be encoded at all.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultValue {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    Seq(Vec<ResultValue>),
    /// Text-keyed mapping in insertion order.
    Map(Vec<(String, ResultValue)>),
    /// Integer wider than 64 bits.
    BigInt(i128),
    Scalar(NumericScalar),
    Array(NumericArray),
    Opaque(Opaque),
    /// A failure the compute call recorded for this one item.
    Failure(FormatError),
}

impl ResultValue {
    /// First per-item failure in depth-first order, if any.
    pub fn failure(&self) -> Option<&FormatError> {
        match self {
            ResultValue::Failure(err) => Some(err),
            ResultValue::Seq(items) => items.iter().find_map(ResultValue::failure),
            ResultValue::Map(entries) => entries.iter().find_map(|(_, v)| v.failure()),
            _ => None,
        }
    }

    fn write_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultValue::Str(s) => write_str_repr(f, s),
            ResultValue::Seq(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.write_repr(f)?;
                }
                f.write_char(']')
            }
            ResultValue::Map(entries) => {
                f.write_char('{')?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_str_repr(f, key)?;
                    f.write_str(": ")?;
                    value.write_repr(f)?;
                }
                f.write_char('}')
            }
            ResultValue::Array(a) => a.write_repr(f),
            other => fmt::Display::fmt(other, f),
        }
    }
}

/// Plain text form: strings print bare at the top level and quoted inside
/// containers.
impl fmt::Display for ResultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultValue::Null => f.write_str("None"),
            ResultValue::Bool(b) => f.write_str(if *b { "True" } else { "False" }),
            ResultValue::Int(n) => write!(f, "{n}"),
            ResultValue::UInt(n) => write!(f, "{n}"),
            ResultValue::BigInt(n) => write!(f, "{n}"),
            ResultValue::Float(x) => f.write_str(&float_repr(*x)),
            ResultValue::Str(s) => f.write_str(s),
            ResultValue::Seq(_) | ResultValue::Map(_) => self.write_repr(f),
            ResultValue::Scalar(s) => write!(f, "{s}"),
            ResultValue::Array(a) => write!(f, "{a}"),
            ResultValue::Opaque(o) => f.write_str(&o.text),
            ResultValue::Failure(err) => write!(f, "{err}"),
        }
    }
}

impl From<JsonValue> for ResultValue {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => ResultValue::Null,
            JsonValue::Bool(b) => ResultValue::Bool(b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    ResultValue::Int(i)
                } else if let Some(u) = n.as_u64() {
                    ResultValue::UInt(u)
                } else {
                    ResultValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            JsonValue::String(s) => ResultValue::Str(s),
            JsonValue::Array(items) => {
                ResultValue::Seq(items.into_iter().map(ResultValue::from).collect())
            }
            JsonValue::Object(map) => ResultValue::Map(
                map.into_iter()
                    .map(|(k, v)| (k, ResultValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for ResultValue {
    fn from(b: bool) -> Self {
        ResultValue::Bool(b)
    }
}

impl From<i64> for ResultValue {
    fn from(n: i64) -> Self {
        ResultValue::Int(n)
    }
}

impl From<i32> for ResultValue {
    fn from(n: i32) -> Self {
        ResultValue::Int(i64::from(n))
    }
}

impl From<u64> for ResultValue {
    fn from(n: u64) -> Self {
        ResultValue::UInt(n)
    }
}

impl From<i128> for ResultValue {
    fn from(n: i128) -> Self {
        ResultValue::BigInt(n)
    }
}

impl From<f64> for ResultValue {
    fn from(x: f64) -> Self {
        ResultValue::Float(x)
    }
}

impl From<&str> for ResultValue {
    fn from(s: &str) -> Self {
        ResultValue::Str(s.to_owned())
    }
}

impl From<String> for ResultValue {
    fn from(s: String) -> Self {
        ResultValue::Str(s)
    }
}

impl<T: Into<ResultValue>> From<Vec<T>> for ResultValue {
    fn from(items: Vec<T>) -> Self {
        ResultValue::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ResultValue>> From<Option<T>> for ResultValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ResultValue::Null, Into::into)
    }
}

impl From<NumericScalar> for ResultValue {
    fn from(s: NumericScalar) -> Self {
        ResultValue::Scalar(s)
    }
}

impl From<NumericArray> for ResultValue {
    fn from(a: NumericArray) -> Self {
        ResultValue::Array(a)
    }
}

impl<T> From<ArrayD<T>> for ResultValue
where
    ArrayD<T>: Into<NumericArray>,
{
    fn from(a: ArrayD<T>) -> Self {
        ResultValue::Array(a.into())
    }
}

impl From<Opaque> for ResultValue {
    fn from(o: Opaque) -> Self {
        ResultValue::Opaque(o)
    }
}

impl From<FormatError> for ResultValue {
    fn from(err: FormatError) -> Self {
        ResultValue::Failure(err)
    }
}
