//! API Handlers
//!
//! HTTP request handlers for each Q&A endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::cache::QuestionCache;
use crate::config::Config;
use crate::error::Result;
use crate::models::{
    AnswerGetResponse, AnswerPostRequest, HealthResponse, QuestionGetManyResponse,
    QuestionGetSingleResponse, QuestionId, QuestionPostRequest, QuestionPutRequest,
    QuestionsQuery, StatsResponse,
};
use crate::notify::QuestionHub;
use crate::repository::{DataRepository, InMemoryRepository};
use crate::service::{Caller, QuestionService};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: QuestionService,
    /// Subscription side of answer notifications
    pub hub: Arc<QuestionHub>,
}

impl AppState {
    /// Wires the service from explicitly constructed collaborators.
    pub fn new(
        repository: Arc<dyn DataRepository>,
        cache: QuestionCache,
        hub: Arc<QuestionHub>,
    ) -> Self {
        let service = QuestionService::new(repository, cache, hub.clone());
        Self { service, hub }
    }

    /// Creates state backed by an in-memory repository, sized from `config`.
    pub fn from_config(config: &Config) -> Self {
        let cache = QuestionCache::with_ttl(config.max_entries, config.cache_ttl);
        Self::new(
            Arc::new(InMemoryRepository::new()),
            cache,
            Arc::new(QuestionHub::default()),
        )
    }

    pub fn cache(&self) -> &QuestionCache {
        self.service.cache()
    }
}

/// Handler for GET /api/questions
pub async fn get_questions_handler(
    State(state): State<AppState>,
    Query(query): Query<QuestionsQuery>,
) -> Result<Json<Vec<QuestionGetManyResponse>>> {
    Ok(Json(state.service.get_questions(&query).await?))
}

/// Handler for GET /api/questions/unanswered
pub async fn get_unanswered_questions_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<QuestionGetManyResponse>>> {
    Ok(Json(state.service.get_unanswered_questions().await?))
}

/// Handler for GET /api/questions/:question_id
///
/// Served from the question cache when possible.
pub async fn get_question_handler(
    State(state): State<AppState>,
    Path(question_id): Path<QuestionId>,
) -> Result<Json<QuestionGetSingleResponse>> {
    Ok(Json(state.service.get_question(question_id).await?))
}

/// Handler for POST /api/questions
pub async fn post_question_handler(
    State(state): State<AppState>,
    caller: Caller,
    Json(req): Json<QuestionPostRequest>,
) -> Result<impl IntoResponse> {
    let saved = state.service.post_question(req, &caller).await?;
    let location = format!("/api/questions/{}", saved.question_id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(saved)))
}

/// Handler for PUT /api/questions/:question_id
pub async fn put_question_handler(
    State(state): State<AppState>,
    Path(question_id): Path<QuestionId>,
    caller: Caller,
    Json(req): Json<QuestionPutRequest>,
) -> Result<Json<QuestionGetSingleResponse>> {
    Ok(Json(
        state.service.put_question(question_id, req, &caller).await?,
    ))
}

/// Handler for DELETE /api/questions/:question_id
pub async fn delete_question_handler(
    State(state): State<AppState>,
    Path(question_id): Path<QuestionId>,
    caller: Caller,
) -> Result<StatusCode> {
    state.service.delete_question(question_id, &caller).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for POST /api/questions/answer
pub async fn post_answer_handler(
    State(state): State<AppState>,
    caller: Caller,
    Json(req): Json<AnswerPostRequest>,
) -> Result<(StatusCode, Json<AnswerGetResponse>)> {
    let saved = state.service.post_answer(req, &caller).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// Handler for GET /stats
///
/// Returns question cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache();
    let stats = cache.stats();

    Json(StatsResponse {
        hits: stats.hits,
        misses: stats.misses,
        evictions: stats.evictions,
        invalidations: stats.invalidations,
        total_entries: stats.total_entries,
        capacity: cache.capacity(),
        hit_rate: stats.hit_rate(),
    })
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
