//! Print a JSON document read from stdin the way the output adapter would.
//!
//! ```text
//! echo '{"x": 1}' | json-output --output json
//! ```

use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use json_output::{CliArgs, CliError, JsonSerializableOutput, OutputAdapter, ResultValue};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = CliArgs::try_parse_from(&args) {
        err.exit();
    }

    let mut input = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut input) {
        eprintln!("json-output: failed to read stdin: {err}");
        return ExitCode::FAILURE;
    }
    let value: serde_json::Value = match serde_json::from_str(&input) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("json-output: invalid JSON input: {err}");
            return ExitCode::FAILURE;
        }
    };

    let adapter = JsonSerializableOutput::default();
    let mut stdout = io::stdout().lock();
    match adapter.to_cli(&ResultValue::from(value), &args, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Usage(err)) => err.exit(),
        Err(err) => {
            eprintln!("json-output: {err}");
            ExitCode::FAILURE
        }
    }
}
