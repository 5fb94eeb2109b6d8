//! API Module
//!
//! HTTP handlers and routing for the Q&A REST API.
//!
//! # Endpoints
//! - `GET|POST /api/questions` - List/search and create questions
//! - `GET /api/questions/unanswered` - Unanswered questions
//! - `POST /api/questions/answer` - Create an answer
//! - `GET|PUT|DELETE /api/questions/:question_id` - Single question
//! - `GET /stats` - Question cache statistics
//! - `GET /health` - Health check endpoint

pub mod extractors;
pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
