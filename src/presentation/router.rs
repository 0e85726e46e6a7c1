use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    consultation_handler, create_session_handler, delete_session_handler, followup_handler,
    generate_report_handler, health_handler, login_handler, register_handler,
    report_history_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState, max_upload_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/auth/register", post(register_handler))
        .route("/api/v1/auth/login", post(login_handler))
        .route("/api/v1/sessions", post(create_session_handler))
        .route(
            "/api/v1/sessions/{session_id}",
            axum::routing::delete(delete_session_handler),
        )
        .route(
            "/api/v1/sessions/{session_id}/consultations",
            post(consultation_handler),
        )
        .route(
            "/api/v1/sessions/{session_id}/follow-ups",
            post(followup_handler),
        )
        .route(
            "/api/v1/sessions/{session_id}/reports",
            post(generate_report_handler).get(report_history_handler),
        )
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
