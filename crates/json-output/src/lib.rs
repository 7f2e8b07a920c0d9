//! JSON output adapter for model serving.
//!
//! Formats the results of a batched compute call for three delivery
//! surfaces:
//! - [`batch`]: one HTTP [`Response`] per caller of a batch
//! - [`cli`]: plain text or JSON printed on the command line
//! - [`lambda`]: a single AWS Lambda proxy response
//!
//! [`JsonSerializableOutput`] ties them together behind [`OutputAdapter`].
//! Encoding itself lives in [`json_output_pack`].

mod adapter;
mod response;

pub mod batch;
pub mod cli;
pub mod config;
pub mod lambda;

pub use adapter::{JsonSerializableOutput, OutputAdapter};
pub use batch::{assemble, ResultCollection, Slice};
pub use cli::{format_for_cli, CliArgs, CliError, OutputMode};
pub use config::JsonOutputConfig;
pub use lambda::format_for_event;
pub use response::{
    Response, APPLICATION_JSON, CONTENT_TYPE, STATUS_BAD_REQUEST, STATUS_INTERNAL_ERROR, STATUS_OK,
};

pub use json_output_pack::{FormatError, NumericArray, NumericScalar, Opaque, ResultValue};
