//! Newline-delimited JSON host protocol.
//!
//! One request per line, one response per line:
//!
//! ```text
//! -> {"id": "entry-1", "text": "I feel calm today"}
//! <- {"id": "entry-1", "ok": true, "result": { ...AnalysisResponse... }}
//! ```

pub mod stdio;

use crate::response::AnalysisResponse;
use serde::{Deserialize, Serialize};

/// Response line written for every non-blank request line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostResponse {
    /// Echo of the request `id`; `null` when absent or unparseable.
    pub id: Option<String>,
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<AnalysisResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HostResponse {
    pub fn success(id: Option<String>, result: AnalysisResponse) -> Self {
        Self {
            id,
            ok: true,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Option<String>, message: impl Into<String>) -> Self {
        Self {
            id,
            ok: false,
            result: None,
            error: Some(message.into()),
        }
    }
}

/// String `id` of a request object, if any.
pub fn request_id(request: &serde_json::Value) -> Option<String> {
    request
        .get("id")
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
}
