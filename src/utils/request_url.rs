// src/utils/request_url.rs

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

/// The server's own address as seen by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestUrls {
    /// `scheme://host/`, always with a trailing slash.
    pub base_url: String,
    /// `scheme://host/path?query` of the current request.
    pub full_url: String,
}

impl RequestUrls {
    pub fn from_parts(parts: &Parts) -> Self {
        let scheme = parts
            .headers
            .get("x-forwarded-proto")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .or_else(|| parts.uri.scheme_str())
            .unwrap_or("http");

        let host = parts
            .headers
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
            .or_else(|| parts.uri.authority().map(|a| a.as_str()))
            .unwrap_or("localhost");

        let path_and_query = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");

        Self {
            base_url: format!("{scheme}://{host}/"),
            full_url: format!("{scheme}://{host}{path_and_query}"),
        }
    }

    /// `<base>/quiz`, the address handed to agents by the notifier.
    pub fn quiz_url(&self) -> String {
        format!("{}/quiz", self.base_url.trim_end_matches('/'))
    }
}

impl<S> FromRequestParts<S> for RequestUrls
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_parts(parts))
    }
}
