//! JSON encoding of [`crate::ResultValue`]s.

pub mod encoder;
pub mod formatter;

pub use encoder::{jsonize, to_json_value, try_jsonize, write_json};
pub use formatter::DumpsFormatter;
