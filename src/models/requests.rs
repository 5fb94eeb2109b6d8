//! Request DTOs for the Q&A API
//!
//! Defines the structure of incoming HTTP request bodies and query strings,
//! plus the "full" variants the service hands to the repository once the
//! author and creation time are known.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::responses::QuestionId;

/// Maximum allowed question title length in characters
pub const MAX_TITLE_LENGTH: usize = 100;

/// Default page size for searches
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Request body for POST /api/questions
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl QuestionPostRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.title.trim().is_empty() {
            return Some("Please include a title".to_string());
        }
        if self.title.chars().count() > MAX_TITLE_LENGTH {
            return Some(format!(
                "Title must be at most {} characters",
                MAX_TITLE_LENGTH
            ));
        }
        if self.content.trim().is_empty() {
            return Some("Please include some content for the question".to_string());
        }
        None
    }
}

/// Question ready to be persisted.
#[derive(Debug, Clone)]
pub struct QuestionPostFullRequest {
    pub title: String,
    pub content: String,
    pub user_id: String,
    pub user_name: String,
    pub created: DateTime<Utc>,
}

/// Request body for PUT /api/questions/:question_id
///
/// Missing or empty fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPutRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl QuestionPutRequest {
    pub fn validate(&self) -> Option<String> {
        match &self.title {
            Some(title) if title.chars().count() > MAX_TITLE_LENGTH => Some(format!(
                "Title must be at most {} characters",
                MAX_TITLE_LENGTH
            )),
            _ => None,
        }
    }

    /// Fills empty fields from the currently stored question.
    pub fn merged_with(self, title: &str, content: &str) -> Self {
        fn keep_or(value: Option<String>, current: &str) -> Option<String> {
            match value {
                Some(v) if !v.is_empty() => Some(v),
                _ => Some(current.to_string()),
            }
        }

        Self {
            title: keep_or(self.title, title),
            content: keep_or(self.content, content),
        }
    }
}

/// Request body for POST /api/questions/answer
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerPostRequest {
    #[serde(default)]
    pub question_id: Option<QuestionId>,
    #[serde(default)]
    pub content: String,
}

impl AnswerPostRequest {
    pub fn validate(&self) -> Option<String> {
        if self.question_id.is_none() {
            return Some("Please include a question id".to_string());
        }
        if self.content.trim().is_empty() {
            return Some("Please include an answer".to_string());
        }
        None
    }
}

/// Answer ready to be persisted.
#[derive(Debug, Clone)]
pub struct AnswerPostFullRequest {
    pub question_id: QuestionId,
    pub content: String,
    pub user_id: String,
    pub user_name: String,
    pub created: DateTime<Utc>,
}

/// Query string for GET /api/questions
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub include_answers: bool,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for QuestionsQuery {
    fn default() -> Self {
        Self {
            search: None,
            include_answers: false,
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}
