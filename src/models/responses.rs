//! Response DTOs for the Q&A API
//!
//! Defines the structure of outgoing HTTP response bodies. The single
//! question representation doubles as the question cache payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a question.
pub type QuestionId = i64;

/// Identifier of an answer.
pub type AnswerId = i64;

/// A single answer as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerGetResponse {
    pub answer_id: AnswerId,
    pub content: String,
    pub user_name: String,
    pub created: DateTime<Utc>,
}

/// Fully materialized question with its answers, in creation order.
///
/// This is what `GET /api/questions/:id` returns and what the question
/// cache stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionGetSingleResponse {
    pub question_id: QuestionId,
    pub title: String,
    pub content: String,
    pub user_id: String,
    pub user_name: String,
    pub created: DateTime<Utc>,
    pub answers: Vec<AnswerGetResponse>,
}

/// Question as it appears in listings.
///
/// `answers` is only populated when the caller asked for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionGetManyResponse {
    pub question_id: QuestionId,
    pub title: String,
    pub content: String,
    pub user_name: String,
    pub created: DateTime<Utc>,
    pub answers: Vec<AnswerGetResponse>,
}

impl QuestionGetManyResponse {
    /// Builds a listing row from a full question, optionally keeping answers.
    pub fn from_single(question: &QuestionGetSingleResponse, include_answers: bool) -> Self {
        Self {
            question_id: question.question_id,
            title: question.title.clone(),
            content: question.content.clone(),
            user_name: question.user_name.clone(),
            created: question.created,
            answers: if include_answers {
                question.answers.clone()
            } else {
                Vec::new()
            },
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of capacity evictions
    pub evictions: u64,
    /// Number of entries removed because their question changed
    pub invalidations: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Configured maximum number of entries
    pub capacity: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
