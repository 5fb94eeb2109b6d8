//! Request and Response models for the Q&A API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{
    AnswerPostFullRequest, AnswerPostRequest, QuestionPostFullRequest, QuestionPostRequest,
    QuestionPutRequest, QuestionsQuery, DEFAULT_PAGE_SIZE, MAX_TITLE_LENGTH,
};
pub use responses::{
    AnswerGetResponse, AnswerId, ErrorResponse, HealthResponse, QuestionGetManyResponse,
    QuestionGetSingleResponse, QuestionId, StatsResponse,
};
