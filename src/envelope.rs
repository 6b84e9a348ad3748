use serde::Serialize;
use serde_json::Value;

/// Response envelope shared by every JSON endpoint.
///
/// `data` is only present on success; failed responses carry just the
/// status flag and a message describing what went wrong.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    pub status: bool,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Envelope {
    /// Create a success envelope carrying a payload
    pub fn ok(msg: impl Into<String>, data: Value) -> Self {
        Self {
            status: true,
            msg: msg.into(),
            data: Some(data),
        }
    }

    /// Create a failure envelope (no payload)
    pub fn fail(msg: impl Into<String>) -> Self {
        Self {
            status: false,
            msg: msg.into(),
            data: None,
        }
    }
}
