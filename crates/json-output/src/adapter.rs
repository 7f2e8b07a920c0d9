//! Output adapters.
//!
//! A serving layer holds one [`OutputAdapter`] per API endpoint and routes
//! every result through it, whichever surface the request came from.

use std::io::Write;

use serde_json::Value;

use json_output_pack::{FormatError, ResultValue};

use crate::batch::{assemble, Slice};
use crate::cli::{format_for_cli, CliError};
use crate::config::JsonOutputConfig;
use crate::lambda::format_for_event;
use crate::Response;

/// Converts compute results into the response of each delivery surface.
pub trait OutputAdapter {
    /// HTTP: one response per caller of a batch, see [`assemble`].
    fn to_batch_response(
        &self,
        results: &[ResultValue],
        slices: Option<&[Option<Slice>]>,
        fallbacks: Option<Vec<Option<Response>>>,
    ) -> Vec<Option<Response>>;

    /// CLI: parse the output arguments and print the result.
    fn to_cli(
        &self,
        result: &ResultValue,
        args: &[String],
        out: &mut dyn Write,
    ) -> Result<(), CliError>;

    /// AWS Lambda: build the proxy response payload.
    fn to_aws_lambda_event(
        &self,
        result: &ResultValue,
        event: &Value,
    ) -> Result<Value, FormatError>;
}

/// Adapter for results that encode as JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonSerializableOutput {
    config: JsonOutputConfig,
}

impl JsonSerializableOutput {
    pub fn new(config: JsonOutputConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &JsonOutputConfig {
        &self.config
    }
}

impl OutputAdapter for JsonSerializableOutput {
    fn to_batch_response(
        &self,
        results: &[ResultValue],
        slices: Option<&[Option<Slice>]>,
        fallbacks: Option<Vec<Option<Response>>>,
    ) -> Vec<Option<Response>> {
        assemble(results, slices, fallbacks)
    }

    fn to_cli(
        &self,
        result: &ResultValue,
        args: &[String],
        out: &mut dyn Write,
    ) -> Result<(), CliError> {
        format_for_cli(result, args, out)
    }

    fn to_aws_lambda_event(
        &self,
        result: &ResultValue,
        event: &Value,
    ) -> Result<Value, FormatError> {
        format_for_event(result, event, self.config.cors())
    }
}
