//! Command-line output formatting.

use std::ffi::OsString;
use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use thiserror::Error;

use json_output_pack::{jsonize, FormatError, ResultValue};

/// How a result is printed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Plain text form of the value.
    #[default]
    Str,
    /// Encoded JSON payload.
    Json,
}

/// Arguments understood by the output formatter.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "json-output", no_binary_name = true)]
pub struct CliArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputMode::Str)]
    pub output: OutputMode,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(#[from] clap::Error),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Render `result` for `mode` without printing it.
pub fn render(result: &ResultValue, mode: OutputMode) -> Result<String, FormatError> {
    match mode {
        OutputMode::Json => jsonize(result),
        OutputMode::Str => Ok(result.to_string()),
    }
}

/// Parse `args` and print `result` to `out`, one line.
pub fn format_for_cli<I, T, W>(result: &ResultValue, args: I, out: &mut W) -> Result<(), CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write + ?Sized,
{
    let args = CliArgs::try_parse_from(args)?;
    let text = render(result, args.output)?;
    writeln!(out, "{text}")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(result: &ResultValue, args: &[&str]) -> Result<String, CliError> {
        let mut out = Vec::new();
        format_for_cli(result, args.iter().copied(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn json_mode() {
        let value = ResultValue::from(json!({"x": 1}));
        assert_eq!(run(&value, &["--output", "json"]).unwrap(), "{\"x\": 1}\n");
        assert_eq!(run(&value, &["-o", "json"]).unwrap(), "{\"x\": 1}\n");
    }

    #[test]
    fn str_mode_is_default() {
        let value = ResultValue::from(json!({"x": 1}));
        assert_eq!(run(&value, &[]).unwrap(), "{'x': 1}\n");
        assert_eq!(run(&value, &["--output=str"]).unwrap(), "{'x': 1}\n");
    }

    #[test]
    fn unknown_mode_is_usage_error() {
        let value = ResultValue::Int(1);
        let err = run(&value, &["--output", "yaml"]).unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
        let err = run(&value, &["--verbose"]).unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
    }

    #[test]
    fn item_failure_in_json_mode() {
        let value = ResultValue::Failure(FormatError::validation("bad"));
        assert!(matches!(
            run(&value, &["-o", "json"]),
            Err(CliError::Format(FormatError::Validation(_)))
        ));
    }
}
