//! Object serialization strategy used for JSON bodies.

use crate::error::Result;
use serde_json::Value;
use std::fmt;

/// Converts between structured values and body bytes.
///
/// The configured serializer is registered in a context's instance services
/// and used by `read_from_json` / `write_as_json`.
pub trait ObjectSerializer: Send + Sync + fmt::Debug {
    fn serialize(&self, value: &Value) -> Result<Vec<u8>>;

    fn deserialize(&self, bytes: &[u8]) -> Result<Value>;

    /// Content type written alongside serialized bodies.
    fn content_type(&self) -> &str {
        "application/json; charset=utf-8"
    }
}

/// Default serializer backed by `serde_json`.
#[derive(Debug, Clone, Default)]
pub struct JsonObjectSerializer {
    pretty: bool,
}

impl JsonObjectSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl ObjectSerializer for JsonObjectSerializer {
    fn serialize(&self, value: &Value) -> Result<Vec<u8>> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(value)?
        } else {
            serde_json::to_vec(value)?
        };
        Ok(bytes)
    }

    fn deserialize(&self, bytes: &[u8]) -> Result<Value> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FakeError;
    use serde_json::json;

    #[test]
    fn test_compact_output() {
        let bytes = JsonObjectSerializer::new()
            .serialize(&json!({"id": 1, "value": "test"}))
            .unwrap();
        assert_eq!(bytes, br#"{"id":1,"value":"test"}"#);
    }

    #[test]
    fn test_pretty_output_is_indented() {
        let bytes = JsonObjectSerializer::pretty()
            .serialize(&json!({"id": 1}))
            .unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "{\n  \"id\": 1\n}");
    }

    #[test]
    fn test_deserialize_invalid_json() {
        let err = JsonObjectSerializer::new().deserialize(b"{").unwrap_err();
        assert!(matches!(err, FakeError::Serialization(_)));
    }
}
