//! Question service.
//!
//! Sits between the HTTP handlers, the repository, the question cache and
//! the notifier. The cache is filled only after a successful repository read
//! and invalidated only after a successful repository write.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::cache::QuestionCache;
use crate::error::{AppError, Result};
use crate::models::{
    AnswerGetResponse, AnswerPostFullRequest, AnswerPostRequest, QuestionGetManyResponse,
    QuestionGetSingleResponse, QuestionId, QuestionPostFullRequest, QuestionPostRequest,
    QuestionPutRequest, QuestionsQuery,
};
use crate::notify::QuestionNotifier;
use crate::repository::DataRepository;

/// Identity of the caller performing a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub user_id: String,
    pub user_name: String,
}

impl Caller {
    pub fn new(user_id: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            user_name: user_name.into(),
        }
    }
}

/// Question and answer operations.
#[derive(Clone)]
pub struct QuestionService {
    repository: Arc<dyn DataRepository>,
    cache: QuestionCache,
    notifier: Arc<dyn QuestionNotifier>,
}

impl QuestionService {
    pub fn new(
        repository: Arc<dyn DataRepository>,
        cache: QuestionCache,
        notifier: Arc<dyn QuestionNotifier>,
    ) -> Self {
        Self {
            repository,
            cache,
            notifier,
        }
    }

    pub fn cache(&self) -> &QuestionCache {
        &self.cache
    }

    /// Lists questions. Without a search term, answers are included on
    /// request; with one, results are paged.
    pub async fn get_questions(&self, query: &QuestionsQuery) -> Result<Vec<QuestionGetManyResponse>> {
        let questions = match query.search.as_deref().filter(|s| !s.is_empty()) {
            None if query.include_answers => self.repository.get_questions_with_answers().await?,
            None => self.repository.get_questions().await?,
            Some(search) => {
                if query.page < 1 || query.page_size < 1 {
                    return Err(AppError::InvalidRequest(
                        "page and pageSize must be at least 1".to_string(),
                    ));
                }
                self.repository
                    .get_questions_by_search_with_paging(search, query.page, query.page_size)
                    .await?
            }
        };
        Ok(questions)
    }

    pub async fn get_unanswered_questions(&self) -> Result<Vec<QuestionGetManyResponse>> {
        Ok(self.repository.get_unanswered_questions().await?)
    }

    /// Reads a single question through the cache.
    pub async fn get_question(&self, question_id: QuestionId) -> Result<QuestionGetSingleResponse> {
        if let Some(question) = self.cache.get(question_id) {
            return Ok(question);
        }

        let question = self
            .repository
            .get_question(question_id)
            .await?
            .ok_or_else(|| AppError::question_not_found(question_id))?;

        self.cache.set(question_id, question.clone());
        Ok(question)
    }

    pub async fn post_question(
        &self,
        request: QuestionPostRequest,
        caller: &Caller,
    ) -> Result<QuestionGetSingleResponse> {
        if let Some(msg) = request.validate() {
            return Err(AppError::InvalidRequest(msg));
        }

        let saved = self
            .repository
            .post_question(QuestionPostFullRequest {
                title: request.title,
                content: request.content,
                user_id: caller.user_id.clone(),
                user_name: caller.user_name.clone(),
                created: Utc::now(),
            })
            .await?;

        info!(question_id = saved.question_id, user_id = %caller.user_id, "question created");
        Ok(saved)
    }

    /// Updates a question's title and/or content. Only its author may do so.
    pub async fn put_question(
        &self,
        question_id: QuestionId,
        request: QuestionPutRequest,
        caller: &Caller,
    ) -> Result<QuestionGetSingleResponse> {
        if let Some(msg) = request.validate() {
            return Err(AppError::InvalidRequest(msg));
        }

        let current = self.load_owned(question_id, caller).await?;
        let request = request.merged_with(&current.title, &current.content);

        let saved = self.repository.put_question(question_id, request).await?;
        self.cache.remove(saved.question_id);

        info!(question_id, "question updated");
        Ok(saved)
    }

    /// Deletes a question and its answers. Only its author may do so.
    pub async fn delete_question(&self, question_id: QuestionId, caller: &Caller) -> Result<()> {
        self.load_owned(question_id, caller).await?;

        self.repository.delete_question(question_id).await?;
        self.cache.remove(question_id);

        info!(question_id, "question deleted");
        Ok(())
    }

    /// Adds an answer, pushes the refreshed question to its viewers and
    /// invalidates the cached copy.
    pub async fn post_answer(
        &self,
        request: AnswerPostRequest,
        caller: &Caller,
    ) -> Result<AnswerGetResponse> {
        if let Some(msg) = request.validate() {
            return Err(AppError::InvalidRequest(msg));
        }
        let question_id = request
            .question_id
            .ok_or_else(|| AppError::InvalidRequest("Please include a question id".to_string()))?;

        if !self.repository.question_exists(question_id).await? {
            return Err(AppError::question_not_found(question_id));
        }

        let saved = self
            .repository
            .post_answer(AnswerPostFullRequest {
                question_id,
                content: request.content,
                user_id: caller.user_id.clone(),
                user_name: caller.user_name.clone(),
                created: Utc::now(),
            })
            .await?;

        self.notify_viewers(question_id).await;
        self.cache.remove(question_id);

        info!(question_id, answer_id = saved.answer_id, "answer created");
        Ok(saved)
    }

    async fn load_owned(
        &self,
        question_id: QuestionId,
        caller: &Caller,
    ) -> Result<QuestionGetSingleResponse> {
        let question = self
            .repository
            .get_question(question_id)
            .await?
            .ok_or_else(|| AppError::question_not_found(question_id))?;

        if question.user_id != caller.user_id {
            return Err(AppError::Forbidden(format!(
                "Only the author may modify question {}",
                question_id
            )));
        }
        Ok(question)
    }

    /// Delivery problems never fail the write that triggered them.
    async fn notify_viewers(&self, question_id: QuestionId) {
        let question = match self.repository.get_question(question_id).await {
            Ok(Some(question)) => question,
            Ok(None) => return,
            Err(err) => {
                warn!(question_id, error = %err, "could not reload question for notification");
                return;
            }
        };

        match self.notifier.question_updated(&question).await {
            Ok(delivered) => debug!(question_id, delivered, "viewers notified"),
            Err(err) => warn!(question_id, error = %err, "failed to notify viewers"),
        }
    }
}
