use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::RalineApiError;

/// Key under which the server version is merged into flat results.
pub const VERSION_KEY: &str = "__version";

/// Successful response: parsed body plus the `x-raline-version` header.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub version: Option<String>,
    pub body: Value,
}

impl ApiResponse {
    /// The `data` envelope when present, the whole body otherwise.
    pub fn data(&self) -> &Value {
        match &self.body {
            Value::Object(map) if map.contains_key("data") => &map["data"],
            body => body,
        }
    }

    pub fn into_data(self) -> Value {
        match self.body {
            Value::Object(mut map) if map.contains_key("data") => {
                map.remove("data").unwrap_or(Value::Null)
            }
            body => body,
        }
    }

    /// Unwrapped data with the server version merged in as `__version`.
    /// Non-object data is wrapped as `{"data": ..}` first.
    pub fn into_flat(self) -> Value {
        let version = self.version.clone();
        let mut flat = match self.into_data() {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                let mut map = Map::new();
                map.insert("data".to_owned(), other);
                map
            }
        };
        flat.insert(
            VERSION_KEY.to_owned(),
            version.map(Value::String).unwrap_or(Value::Null),
        );
        Value::Object(flat)
    }

    pub fn decode_data<T: DeserializeOwned>(self) -> Result<T, RalineApiError> {
        Ok(serde_json::from_value(self.into_data())?)
    }

    pub fn decode_body<T: DeserializeOwned>(self) -> Result<T, RalineApiError> {
        Ok(serde_json::from_value(self.body)?)
    }
}
