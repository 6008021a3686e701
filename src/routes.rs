// src/routes.rs

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{Method, header},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{dashboard, notify, quiz, submission},
    state::AppState,
};

/// Assembles the application router.
///
/// * Operator surface: dashboard, generation, publishing, notifier.
/// * Agent surface: `/quiz` and `/submit`.
/// * Applies global middleware (Trace, CORS) and injects the shared state.
pub fn create_router(state: AppState) -> Router {
    // Agents and the dashboard may be served from anywhere.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/generate", post(quiz::generate_quiz))
        .route("/submissions", get(submission::list_submissions))
        .route("/send", post(notify::send_test_payload));

    Router::new()
        .route("/", get(dashboard::dashboard))
        .route("/set_quiz", post(quiz::set_quiz))
        .route("/quiz", get(quiz::render_quiz))
        .route("/submit", post(submission::submit))
        .nest("/api", api_routes)
        // Quizzes and submissions of any size are stored as posted.
        .layer(DefaultBodyLimit::disable())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
