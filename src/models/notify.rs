// src/models/notify.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;

pub const DEFAULT_EMAIL: &str = "student@example.com";
pub const DEFAULT_SECRET: &str = "TEST_SECRET";

/// Body of `POST /api/send`.
#[derive(Debug, Clone)]
pub struct SendRequest {
    pub endpoint: String,
    pub email: String,
    pub secret: String,
}

impl SendRequest {
    /// `endpoint` is required; blank or missing `email`/`secret` fall back to the sample values.
    ///
    /// Any non-empty endpoint value counts as present. A non-string one is passed on
    /// as its JSON text and fails when the POST is attempted.
    pub fn from_body(body: Option<&Value>) -> Result<Self, AppError> {
        let field = |name: &str| {
            body.and_then(|b| b.get(name))
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let endpoint = body
            .and_then(|b| b.get("endpoint"))
            .filter(|v| is_truthy(v))
            .map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .ok_or_else(|| {
                AppError::BadRequest("Missing 'endpoint' in request body".to_string())
            })?;

        Ok(Self {
            endpoint,
            email: field("email").unwrap_or_else(|| DEFAULT_EMAIL.to_string()),
            secret: field("secret").unwrap_or_else(|| DEFAULT_SECRET.to_string()),
        })
    }
}

/// `null`, `false`, zero, and empty strings, arrays or objects count as absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// What the student's agent receives: where to find the quiz and how to identify itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizNotification {
    pub email: String,
    pub secret: String,
    pub url: String,
}

/// Relayed downstream result.
#[derive(Debug, Serialize, Deserialize)]
pub struct SendResponse {
    pub ok: bool,
    pub status_code: u16,
    pub response_body: String,
}
