// src/handlers/notify.rs

use axum::{Json, extract::State, response::IntoResponse};

use crate::{
    error::AppError,
    models::notify::{QuizNotification, SendRequest, SendResponse},
    state::AppState,
    utils::{body::LenientJson, request_url::RequestUrls},
};

/// Tells a student agent that a quiz is waiting at this server's `/quiz`.
///
/// * Missing `endpoint` → 400 without any outbound call.
/// * Transport failures (timeout, refused, DNS) → 502 with the error text.
/// * Otherwise the downstream status and raw body are relayed, whatever the status.
pub async fn send_test_payload(
    State(state): State<AppState>,
    urls: RequestUrls,
    LenientJson(body): LenientJson,
) -> Result<impl IntoResponse, AppError> {
    let req = SendRequest::from_body(body.as_ref())?;

    let payload = QuizNotification {
        email: req.email,
        secret: req.secret,
        url: urls.quiz_url(),
    };

    tracing::info!(
        "api_send: posting to endpoint={} with payload={:?}",
        req.endpoint,
        payload
    );

    let response = state
        .http
        .post(&req.endpoint)
        .timeout(state.config.notify_timeout)
        .json(&payload)
        .send()
        .await
        .map_err(|e| {
            tracing::error!("api_send: error posting to endpoint: {:?}", e);
            AppError::from(e)
        })?;

    let status_code = response.status().as_u16();
    let response_body = response.text().await.map_err(|e| {
        tracing::error!("api_send: error reading response body: {:?}", e);
        AppError::from(e)
    })?;

    tracing::info!(
        "api_send: got status_code={} response_length={}",
        status_code,
        response_body.len()
    );

    Ok(Json(SendResponse {
        ok: true,
        status_code,
        response_body,
    }))
}
