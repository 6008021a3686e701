// src/utils/mod.rs

pub mod body;
pub mod html;
pub mod llm;
pub mod request_url;

/// First 200 characters of `text`, for log lines.
pub fn snippet(text: &str) -> String {
    text.chars().take(200).collect()
}
