// src/utils/body.rs

use axum::{
    body::Bytes,
    extract::{FromRequest, Request, rejection::BytesRejection},
    http::{HeaderMap, header},
};
use serde_json::Value;

/// JSON body that never rejects on shape.
///
/// Holds `Some` only when the request declares a JSON content type and the body parses.
/// Missing, mistyped or malformed bodies all come through as `None`. Only a body that
/// cannot be read at all (e.g. a length limit) is rejected.
#[derive(Debug, Clone, Default)]
pub struct LenientJson(pub Option<Value>);

impl<S> FromRequest<S> for LenientJson
where
    S: Send + Sync,
{
    type Rejection = BytesRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json(req.headers()) {
            return Ok(Self(None));
        }

        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::warn!("failed to read request body: {}", e);
            e
        })?;
        Ok(Self(serde_json::from_slice(&bytes).ok()))
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}
