use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Envelope wrapping every response from the store
///
/// `ok` decides success; the HTTP status does not. A body without `ok`
/// counts as a rejection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope {
    #[serde(default)]
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
}

/// Response of the token-issuing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Options for a read
///
/// `order`, `filter` and `value_type` are passed through to the remote as
/// `orderKey`, `filterValue` and `valueType`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetOptions {
    pub path: String,
    pub order: Option<String>,
    pub filter: Option<String>,
    pub value_type: Option<String>,
}

impl GetOptions {
    /// Read at `path`, relative to the client's base path
    pub fn at(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn order(mut self, key: impl Into<String>) -> Self {
        self.order = Some(key.into());
        self
    }

    pub fn filter(mut self, value: impl Into<String>) -> Self {
        self.filter = Some(value.into());
        self
    }

    pub fn value_type(mut self, value_type: impl Into<String>) -> Self {
        self.value_type = Some(value_type.into());
        self
    }
}

/// Options for a delete
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DelOptions {
    pub path: String,
}

impl DelOptions {
    pub fn at(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}
