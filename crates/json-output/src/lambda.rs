//! AWS Lambda event payloads.

use serde_json::{Map, Value};

use json_output_pack::{jsonize, FormatError, ResultValue};

use crate::response::STATUS_OK;

pub const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";

/// Build the Lambda proxy response for a single invocation.
///
/// `event` is the incoming invocation event; it is not inspected. An
/// `Access-Control-Allow-Origin` header is added only for a non-empty
/// `cors` origin, otherwise the payload has no `headers` key at all.
pub fn format_for_event(
    result: &ResultValue,
    _event: &Value,
    cors: Option<&str>,
) -> Result<Value, FormatError> {
    let body = jsonize(result)?;

    let mut payload = Map::new();
    payload.insert("statusCode".to_owned(), Value::from(STATUS_OK));
    payload.insert("body".to_owned(), Value::String(body));
    if let Some(origin) = cors.filter(|origin| !origin.is_empty()) {
        let mut headers = Map::new();
        headers.insert(ALLOW_ORIGIN.to_owned(), Value::String(origin.to_owned()));
        payload.insert("headers".to_owned(), Value::Object(headers));
    }
    Ok(Value::Object(payload))
}
