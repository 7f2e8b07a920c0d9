//! Adapter configuration.

use serde::{Deserialize, Serialize};

/// Origin allowed by default on Lambda responses.
pub const DEFAULT_CORS: &str = "*";

/// Options of [`crate::JsonSerializableOutput`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JsonOutputConfig {
    /// `Access-Control-Allow-Origin` value for Lambda responses. `None` or
    /// an empty string leaves the header out.
    pub cors: Option<String>,
}

impl Default for JsonOutputConfig {
    fn default() -> Self {
        Self {
            cors: Some(DEFAULT_CORS.to_owned()),
        }
    }
}

impl JsonOutputConfig {
    pub fn with_cors(origin: impl Into<String>) -> Self {
        Self {
            cors: Some(origin.into()),
        }
    }

    pub fn disabled_cors() -> Self {
        Self { cors: None }
    }

    pub fn cors(&self) -> Option<&str> {
        self.cors.as_deref().filter(|origin| !origin.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_wildcard() {
        assert_eq!(JsonOutputConfig::default().cors(), Some("*"));
    }

    #[test]
    fn deserializes_from_json() {
        let config: JsonOutputConfig = serde_json::from_str(r#"{"cors": null}"#).unwrap();
        assert_eq!(config, JsonOutputConfig::disabled_cors());

        let config: JsonOutputConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, JsonOutputConfig::default());

        let unknown = serde_json::from_str::<JsonOutputConfig>(r#"{"origin": "*"}"#);
        assert!(unknown.is_err());
    }
}
