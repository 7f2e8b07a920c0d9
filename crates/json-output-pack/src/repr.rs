//! Plain-text representations shared by `Display` and the JSON formatter.
//!
//! Floats and strings are rendered the way a Python runtime prints them, so
//! the CLI `str` mode and the encoder fallback read the same as the JSON
//! payloads produced for numeric results.

use std::fmt::{self, Write};

/// Shortest round-trip float text with Python-style exponents.
///
/// `1.0` stays `1.0`, `1e16` becomes `1e+16`, `1.5e-5` becomes `1.5e-05`.
pub(crate) fn float_repr(f: f64) -> String {
    if f.is_nan() {
        return "nan".to_owned();
    }
    if f.is_infinite() {
        return if f > 0.0 { "inf" } else { "-inf" }.to_owned();
    }
    with_signed_exponent(format!("{f:?}"))
}

/// Same as [`float_repr`] but shortest for single precision, so `0.1f32`
/// prints as `0.1` rather than its widened `f64` digits.
pub(crate) fn float32_repr(f: f32) -> String {
    if f.is_nan() {
        return "nan".to_owned();
    }
    if f.is_infinite() {
        return if f > 0.0 { "inf" } else { "-inf" }.to_owned();
    }
    with_signed_exponent(format!("{f:?}"))
}

fn with_signed_exponent(s: String) -> String {
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => s,
    }
}

/// Quoted string literal as printed inside a container.
pub(crate) fn write_str_repr<W: Write>(out: &mut W, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    out.write_char(quote)?;
    for ch in s.chars() {
        match ch {
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            c if c == quote => {
                out.write_char('\\')?;
                out.write_char(c)?;
            }
            c if (c as u32) < 0x20 || c as u32 == 0x7f => write!(out, "\\x{:02x}", c as u32)?,
            c => out.write_char(c)?,
        }
    }
    out.write_char(quote)
}
