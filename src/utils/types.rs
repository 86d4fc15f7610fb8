use serde::Serialize;
use serde_json::Value;

/// Body written by the outer safety net: `{ "data": null, "error": {...} }`.
#[derive(Debug, Serialize)]
pub struct ApiEnvelope {
    pub data: Option<Value>,
    pub error: Option<ErrorDetail>,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ApiEnvelope {
    pub fn err(status: u16, message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(ErrorDetail {
                code: status.to_string(),
                message: message.into(),
            }),
        }
    }
}

/// Flat `{ "message": ... }` body used by the dispatch wrapper.
#[derive(Debug, Serialize)]
pub struct MessageBody<'a> {
    pub message: &'a str,
}
