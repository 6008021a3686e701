// src/models/submission.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One answer attempt, stored exactly as it was posted.
///
/// The body is kept as an opaque JSON value; an absent or malformed body is `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub payload: Value,
}

impl Submission {
    pub fn new(body: Option<Value>) -> Self {
        Self {
            payload: body.unwrap_or(Value::Null),
        }
    }
}

pub const ACK_MESSAGE: &str = "Mock Server: Correct!";

/// Fixed acknowledgment returned for every submission.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitAck {
    pub correct: bool,
    pub message: String,
}

impl Default for SubmitAck {
    fn default() -> Self {
        Self {
            correct: true,
            message: ACK_MESSAGE.to_string(),
        }
    }
}
