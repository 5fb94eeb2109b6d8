//! API Routes
//!
//! Configures the Axum router with all Q&A endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    delete_question_handler, get_question_handler, get_questions_handler,
    get_unanswered_questions_handler, health_handler, post_answer_handler, post_question_handler,
    put_question_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/questions` - List or search questions
/// - `POST /api/questions` - Ask a question
/// - `GET /api/questions/unanswered` - Questions without answers
/// - `POST /api/questions/answer` - Answer a question
/// - `GET /api/questions/:question_id` - Single question with answers (cached)
/// - `PUT /api/questions/:question_id` - Edit a question
/// - `DELETE /api/questions/:question_id` - Delete a question
/// - `GET /stats` - Question cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/questions",
            get(get_questions_handler).post(post_question_handler),
        )
        .route(
            "/api/questions/unanswered",
            get(get_unanswered_questions_handler),
        )
        .route("/api/questions/answer", post(post_answer_handler))
        .route(
            "/api/questions/:question_id",
            get(get_question_handler)
                .put(put_question_handler)
                .delete(delete_question_handler),
        )
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
