//! [`Response`] — one caller's formatted response.

use json_output_pack::FormatError;

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// Status code, ordered header pairs and a text body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Response {
    pub fn new(status: u16, headers: Vec<(String, String)>, body: impl Into<String>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// `200` response carrying an encoded JSON payload.
    pub fn json(payload: impl Into<String>) -> Self {
        Self::new(
            STATUS_OK,
            vec![(CONTENT_TYPE.to_owned(), APPLICATION_JSON.to_owned())],
            payload,
        )
    }

    /// Header-less response whose body is an error description.
    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self::new(status, Vec::new(), message)
    }

    /// First value of `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl From<FormatError> for Response {
    fn from(err: FormatError) -> Self {
        match err {
            FormatError::Validation(message) => Response::error(STATUS_BAD_REQUEST, message),
            FormatError::Internal(message) => Response::error(STATUS_INTERNAL_ERROR, message),
        }
    }
}
