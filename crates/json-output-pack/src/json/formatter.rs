//! Text layout for encoded payloads.
//!
//! Payloads use the same layout as the Python serving stack's default
//! `json.dumps` call, so clients see identical bytes from either
//! implementation: `", "` between items, `": "` after keys, everything on
//! one line, and every non-ASCII character escaped as `\uXXXX`.

use std::io;

use serde_json::ser::Formatter;

use crate::repr::float_repr;

/// [`Formatter`] producing `json.dumps`-style single-line output.
#[derive(Debug, Clone, Copy, Default)]
pub struct DumpsFormatter;

impl Formatter for DumpsFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(float_repr(value).as_bytes())
    }

    fn write_f32<W>(&mut self, writer: &mut W, value: f32) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.write_f64(writer, value as f64)
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..i])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::json;

    fn dumps(value: &serde_json::Value) -> String {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, DumpsFormatter);
        value.serialize(&mut ser).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn separators() {
        assert_eq!(dumps(&json!({"x": 1})), r#"{"x": 1}"#);
        assert_eq!(dumps(&json!([[1, 2], [3, 4]])), "[[1, 2], [3, 4]]");
        assert_eq!(dumps(&json!({"a": [], "b": {}})), r#"{"a": [], "b": {}}"#);
    }

    #[test]
    fn floats_keep_fraction() {
        assert_eq!(dumps(&json!([1.0, 3.5, 1e16])), "[1.0, 3.5, 1e+16]");
    }

    #[test]
    fn non_ascii_is_escaped() {
        assert_eq!(dumps(&json!("café")), r#""caf\u00e9""#);
        assert_eq!(dumps(&json!("🎉")), r#""\ud83c\udf89""#);
        assert_eq!(dumps(&json!("a\"b\n")), r#""a\"b\n""#);
    }
}
