// src/models/quiz.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /set_quiz`.
#[derive(Debug)]
pub struct SetQuizRequest {
    pub html: String,
}

impl SetQuizRequest {
    /// Reads `html` from a loosely-typed body. Anything but a string becomes an empty document.
    pub fn from_body(body: Option<&Value>) -> Self {
        let html = body
            .and_then(|b| b.get("html"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Self { html }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SetQuizResponse {
    pub status: String,
}

impl SetQuizResponse {
    pub fn updated() -> Self {
        Self {
            status: "updated".to_string(),
        }
    }
}

/// Successful `POST /api/generate` result.
#[derive(Debug, Serialize, Deserialize)]
pub struct GeneratedQuiz {
    pub html: String,
}
