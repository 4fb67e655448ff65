//! Error body returned by the remote API
//!
//! The API reports failures as `{"detail": ...}`. For business errors
//! `detail` is a string; for request validation errors it is an array of
//! field reports. Only the string form is surfaced to operators.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Best-effort error body of a non-2xx response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// Parse an error body, tolerating anything that is not JSON
    pub fn parse(bytes: &[u8]) -> Self {
        serde_json::from_slice(bytes).unwrap_or_default()
    }

    /// The server-provided message, if `detail` is a plain string
    pub fn detail_message(&self) -> Option<&str> {
        match &self.detail {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.as_str()),
            _ => None,
        }
    }
}
