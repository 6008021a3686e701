// src/handlers/dashboard.rs

use axum::{extract::State, response::Html};

use crate::{
    state::AppState,
    utils::{html::escape, request_url::RequestUrls},
};

const TEMPLATE: &str = include_str!("../templates/dashboard.html");

/// Operator page showing this server's base URL plus buttons for the JSON API.
pub async fn dashboard(State(state): State<AppState>, urls: RequestUrls) -> Html<String> {
    let generator = match &state.generator {
        Some(_) => format!("model {}", state.config.openai_model),
        None => "not configured".to_string(),
    };

    Html(
        TEMPLATE
            .replace("{{server_url}}", &escape(&urls.base_url))
            .replace("{{generator}}", &escape(&generator)),
    )
}
