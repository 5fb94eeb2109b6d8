//! Repository Module
//!
//! Persistence interface for questions and answers. The question cache never
//! talks to a repository; the service layer sits between the two.

mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    AnswerGetResponse, AnswerId, AnswerPostFullRequest, QuestionGetManyResponse,
    QuestionGetSingleResponse, QuestionId, QuestionPostFullRequest, QuestionPutRequest,
};

pub use memory::InMemoryRepository;

/// Errors raised by a [`DataRepository`] implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Target row does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Arguments rejected by the store
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Backing store could not be reached or failed the operation
    #[error("Repository unavailable: {0}")]
    Unavailable(String),
}

pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Data access for questions and answers.
#[async_trait]
pub trait DataRepository: Send + Sync {
    /// All questions, without answers.
    async fn get_questions(&self) -> RepositoryResult<Vec<QuestionGetManyResponse>>;

    /// All questions, each with its answers.
    async fn get_questions_with_answers(&self) -> RepositoryResult<Vec<QuestionGetManyResponse>>;

    /// Questions whose title or content contains `search`, case-insensitively.
    async fn get_questions_by_search(
        &self,
        search: &str,
    ) -> RepositoryResult<Vec<QuestionGetManyResponse>>;

    /// One page of [`get_questions_by_search`](Self::get_questions_by_search).
    /// `page` is 1-based.
    async fn get_questions_by_search_with_paging(
        &self,
        search: &str,
        page: u32,
        page_size: u32,
    ) -> RepositoryResult<Vec<QuestionGetManyResponse>>;

    /// Questions that have no answers yet.
    async fn get_unanswered_questions(&self) -> RepositoryResult<Vec<QuestionGetManyResponse>>;

    async fn get_question(
        &self,
        question_id: QuestionId,
    ) -> RepositoryResult<Option<QuestionGetSingleResponse>>;

    async fn question_exists(&self, question_id: QuestionId) -> RepositoryResult<bool>;

    async fn get_answer(&self, answer_id: AnswerId) -> RepositoryResult<Option<AnswerGetResponse>>;

    async fn post_question(
        &self,
        question: QuestionPostFullRequest,
    ) -> RepositoryResult<QuestionGetSingleResponse>;

    /// Overwrites title and content; `None` fields keep their stored value.
    async fn put_question(
        &self,
        question_id: QuestionId,
        question: QuestionPutRequest,
    ) -> RepositoryResult<QuestionGetSingleResponse>;

    /// Deletes a question together with its answers.
    async fn delete_question(&self, question_id: QuestionId) -> RepositoryResult<()>;

    async fn post_answer(&self, answer: AnswerPostFullRequest)
        -> RepositoryResult<AnswerGetResponse>;
}
