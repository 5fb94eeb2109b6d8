//! Notification Module
//!
//! Pushes refreshed questions to viewers subscribed to that question.
//!
//! # Groups
//! Viewers join the group `Question-{id}`; after an answer is posted the
//! whole question, answers included, is sent to every member of its group.

mod hub;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{QuestionGetSingleResponse, QuestionId};

pub use hub::QuestionHub;

/// Errors raised while delivering a notification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    #[error("Delivery failed: {0}")]
    Delivery(String),
}

/// Name of the subscriber group for a question.
pub fn group_name(question_id: QuestionId) -> String {
    format!("Question-{}", question_id)
}

/// Sink for "this question changed" events.
#[async_trait]
pub trait QuestionNotifier: Send + Sync {
    /// Sends `question` to its group. Returns how many subscribers received it.
    async fn question_updated(
        &self,
        question: &QuestionGetSingleResponse,
    ) -> std::result::Result<usize, NotifyError>;
}
