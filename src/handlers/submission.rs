// src/handlers/submission.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::Value;

use crate::{
    models::submission::{SubmitAck, Submission},
    store::QuizStore,
    utils::body::LenientJson,
};

/// Records an answer attempt. Always reports success; nothing is graded.
pub async fn submit(
    State(store): State<Arc<QuizStore>>,
    LenientJson(body): LenientJson,
) -> impl IntoResponse {
    let keys = match &body {
        Some(Value::Object(map)) => {
            let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
            keys.sort_unstable();
            Some(keys.join(","))
        }
        _ => None,
    };
    tracing::info!(
        "submit: received payload type={} keys={:?}",
        kind(body.as_ref()),
        keys
    );

    store.add_submission(Submission::new(body));

    Json(SubmitAck::default())
}

/// Lists every submission since the last quiz change, newest first.
pub async fn list_submissions(State(store): State<Arc<QuizStore>>) -> impl IntoResponse {
    Json(store.submissions())
}

fn kind(body: Option<&Value>) -> &'static str {
    match body {
        None | Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "bool",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}
