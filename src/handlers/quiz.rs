// src/handlers/quiz.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    response::{Html, IntoResponse},
};

use crate::{
    error::AppError,
    generator,
    models::quiz::{GeneratedQuiz, SetQuizRequest, SetQuizResponse},
    state::AppState,
    store::QuizStore,
    utils::{body::LenientJson, html::render_quiz as render_page, request_url::RequestUrls, snippet},
};

/// Generates a fresh quiz through the text-generation service.
///
/// The request body is ignored. Nothing is stored: the operator reviews the
/// markup and publishes it with `/set_quiz`.
pub async fn generate_quiz(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let Some(client) = state.generator.as_deref() else {
        return Err(AppError::NotConfigured(
            "No OpenAI Key configured".to_string(),
        ));
    };

    let category = generator::pick_category(&mut rand::thread_rng());

    let html = generator::generate_quiz(client, category)
        .await
        .map_err(|e| {
            tracing::error!("Error while calling OpenAI for quiz generation: {:?}", e);
            AppError::from(e)
        })?;

    Ok(Json(GeneratedQuiz { html }))
}

/// Replaces the served quiz and clears every recorded submission.
pub async fn set_quiz(
    State(store): State<Arc<QuizStore>>,
    LenientJson(body): LenientJson,
) -> impl IntoResponse {
    let req = SetQuizRequest::from_body(body.as_ref());
    tracing::info!(
        "set_quiz: updated quiz HTML length={} snippet={:?}",
        req.html.len(),
        snippet(&req.html)
    );
    store.set_quiz(req.html);

    Json(SetQuizResponse::updated())
}

/// Serves the current quiz with submission instructions pointing back at this server.
pub async fn render_quiz(
    State(store): State<Arc<QuizStore>>,
    urls: RequestUrls,
) -> Html<String> {
    let quiz_html = store.quiz();
    tracing::info!(
        "render_quiz: current_quiz_html length={} snippet={:?}",
        quiz_html.len(),
        snippet(&quiz_html)
    );

    Html(render_page(&quiz_html, &urls.base_url, &urls.full_url))
}
