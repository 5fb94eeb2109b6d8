//! In-memory repository.
//!
//! Keeps questions (with their answers embedded) in an ordered map behind a
//! tokio `RwLock`. Ids are assigned from monotonically increasing counters
//! and never reused.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::{DataRepository, RepositoryError, RepositoryResult};
use crate::models::{
    AnswerGetResponse, AnswerId, AnswerPostFullRequest, QuestionGetManyResponse,
    QuestionGetSingleResponse, QuestionId, QuestionPostFullRequest, QuestionPutRequest,
};

#[derive(Debug, Default)]
struct State {
    questions: BTreeMap<QuestionId, QuestionGetSingleResponse>,
    /// answer id -> owning question id
    answers: HashMap<AnswerId, QuestionId>,
    last_question_id: QuestionId,
    last_answer_id: AnswerId,
}

impl State {
    fn list<'a>(
        &'a self,
        include_answers: bool,
    ) -> impl Iterator<Item = QuestionGetManyResponse> + 'a {
        self.questions
            .values()
            .map(move |q| QuestionGetManyResponse::from_single(q, include_answers))
    }

    fn search<'a>(&'a self, search: &str) -> impl Iterator<Item = QuestionGetManyResponse> + 'a {
        let needle = search.to_lowercase();
        self.questions
            .values()
            .filter(move |q| {
                q.title.to_lowercase().contains(&needle)
                    || q.content.to_lowercase().contains(&needle)
            })
            .map(|q| QuestionGetManyResponse::from_single(q, false))
    }
}

/// [`DataRepository`] backed by process memory.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    state: RwLock<State>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DataRepository for InMemoryRepository {
    async fn get_questions(&self) -> RepositoryResult<Vec<QuestionGetManyResponse>> {
        Ok(self.state.read().await.list(false).collect())
    }

    async fn get_questions_with_answers(&self) -> RepositoryResult<Vec<QuestionGetManyResponse>> {
        Ok(self.state.read().await.list(true).collect())
    }

    async fn get_questions_by_search(
        &self,
        search: &str,
    ) -> RepositoryResult<Vec<QuestionGetManyResponse>> {
        Ok(self.state.read().await.search(search).collect())
    }

    async fn get_questions_by_search_with_paging(
        &self,
        search: &str,
        page: u32,
        page_size: u32,
    ) -> RepositoryResult<Vec<QuestionGetManyResponse>> {
        if page < 1 || page_size < 1 {
            return Err(RepositoryError::InvalidInput(
                "page and pageSize must be at least 1".to_string(),
            ));
        }

        let skip = (page as usize - 1).saturating_mul(page_size as usize);
        Ok(self
            .state
            .read()
            .await
            .search(search)
            .skip(skip)
            .take(page_size as usize)
            .collect())
    }

    async fn get_unanswered_questions(&self) -> RepositoryResult<Vec<QuestionGetManyResponse>> {
        let state = self.state.read().await;
        Ok(state
            .questions
            .values()
            .filter(|q| q.answers.is_empty())
            .map(|q| QuestionGetManyResponse::from_single(q, false))
            .collect())
    }

    async fn get_question(
        &self,
        question_id: QuestionId,
    ) -> RepositoryResult<Option<QuestionGetSingleResponse>> {
        Ok(self.state.read().await.questions.get(&question_id).cloned())
    }

    async fn question_exists(&self, question_id: QuestionId) -> RepositoryResult<bool> {
        Ok(self.state.read().await.questions.contains_key(&question_id))
    }

    async fn get_answer(&self, answer_id: AnswerId) -> RepositoryResult<Option<AnswerGetResponse>> {
        let state = self.state.read().await;
        let answer = state
            .answers
            .get(&answer_id)
            .and_then(|question_id| state.questions.get(question_id))
            .and_then(|q| q.answers.iter().find(|a| a.answer_id == answer_id))
            .cloned();
        Ok(answer)
    }

    async fn post_question(
        &self,
        question: QuestionPostFullRequest,
    ) -> RepositoryResult<QuestionGetSingleResponse> {
        let mut state = self.state.write().await;
        state.last_question_id += 1;
        let question_id = state.last_question_id;

        let saved = QuestionGetSingleResponse {
            question_id,
            title: question.title,
            content: question.content,
            user_id: question.user_id,
            user_name: question.user_name,
            created: question.created,
            answers: Vec::new(),
        };
        state.questions.insert(question_id, saved.clone());
        debug!(question_id, "question stored");

        Ok(saved)
    }

    async fn put_question(
        &self,
        question_id: QuestionId,
        question: QuestionPutRequest,
    ) -> RepositoryResult<QuestionGetSingleResponse> {
        let mut state = self.state.write().await;
        let stored = state
            .questions
            .get_mut(&question_id)
            .ok_or_else(|| RepositoryError::NotFound(format!("question {}", question_id)))?;

        if let Some(title) = question.title {
            stored.title = title;
        }
        if let Some(content) = question.content {
            stored.content = content;
        }

        Ok(stored.clone())
    }

    async fn delete_question(&self, question_id: QuestionId) -> RepositoryResult<()> {
        let mut state = self.state.write().await;
        let removed = state
            .questions
            .remove(&question_id)
            .ok_or_else(|| RepositoryError::NotFound(format!("question {}", question_id)))?;

        for answer in &removed.answers {
            state.answers.remove(&answer.answer_id);
        }
        debug!(question_id, answers = removed.answers.len(), "question deleted");

        Ok(())
    }

    async fn post_answer(
        &self,
        answer: AnswerPostFullRequest,
    ) -> RepositoryResult<AnswerGetResponse> {
        let mut state = self.state.write().await;
        if !state.questions.contains_key(&answer.question_id) {
            return Err(RepositoryError::NotFound(format!(
                "question {}",
                answer.question_id
            )));
        }

        state.last_answer_id += 1;
        let answer_id = state.last_answer_id;
        let saved = AnswerGetResponse {
            answer_id,
            content: answer.content,
            user_name: answer.user_name,
            created: answer.created,
        };

        state.answers.insert(answer_id, answer.question_id);
        if let Some(question) = state.questions.get_mut(&answer.question_id) {
            question.answers.push(saved.clone());
        }

        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn new_question(title: &str, content: &str) -> QuestionPostFullRequest {
        QuestionPostFullRequest {
            title: title.to_string(),
            content: content.to_string(),
            user_id: "u1".to_string(),
            user_name: "bob".to_string(),
            created: Utc::now(),
        }
    }

    fn new_answer(question_id: QuestionId, content: &str) -> AnswerPostFullRequest {
        AnswerPostFullRequest {
            question_id,
            content: content.to_string(),
            user_id: "u2".to_string(),
            user_name: "alice".to_string(),
            created: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_post_and_get_question() {
        let repo = InMemoryRepository::new();

        let saved = repo
            .post_question(new_question("Lifetimes?", "What is 'a?"))
            .await
            .unwrap();
        assert_eq!(saved.question_id, 1);

        let loaded = repo.get_question(1).await.unwrap().unwrap();
        assert_eq!(loaded, saved);
        assert!(repo.question_exists(1).await.unwrap());
        assert!(!repo.question_exists(2).await.unwrap());
    }

    #[tokio::test]
    async fn test_answers_are_attached_in_order() {
        let repo = InMemoryRepository::new();
        let q = repo.post_question(new_question("T", "C")).await.unwrap();

        let a1 = repo.post_answer(new_answer(q.question_id, "first")).await.unwrap();
        let a2 = repo.post_answer(new_answer(q.question_id, "second")).await.unwrap();

        let loaded = repo.get_question(q.question_id).await.unwrap().unwrap();
        let contents: Vec<_> = loaded.answers.iter().map(|a| a.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second"]);
        assert_eq!(repo.get_answer(a2.answer_id).await.unwrap(), Some(a2));
        assert_eq!(repo.get_answer(a1.answer_id).await.unwrap(), Some(a1));
    }

    #[tokio::test]
    async fn test_answer_for_missing_question_fails() {
        let repo = InMemoryRepository::new();
        let result = repo.post_answer(new_answer(9, "orphan")).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_put_question_keeps_unset_fields() {
        let repo = InMemoryRepository::new();
        let q = repo.post_question(new_question("Old", "Body")).await.unwrap();

        let updated = repo
            .put_question(
                q.question_id,
                QuestionPutRequest {
                    title: Some("New".to_string()),
                    content: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "New");
        assert_eq!(updated.content, "Body");
    }

    #[tokio::test]
    async fn test_put_and_delete_missing_question() {
        let repo = InMemoryRepository::new();

        let put = repo.put_question(3, QuestionPutRequest::default()).await;
        assert!(matches!(put, Err(RepositoryError::NotFound(_))));

        let delete = repo.delete_question(3).await;
        assert!(matches!(delete, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_removes_answers() {
        let repo = InMemoryRepository::new();
        let q = repo.post_question(new_question("T", "C")).await.unwrap();
        let a = repo.post_answer(new_answer(q.question_id, "x")).await.unwrap();

        repo.delete_question(q.question_id).await.unwrap();

        assert!(repo.get_question(q.question_id).await.unwrap().is_none());
        assert!(repo.get_answer(a.answer_id).await.unwrap().is_none());
        assert!(repo.get_questions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        let repo = InMemoryRepository::new();
        let first = repo.post_question(new_question("A", "a")).await.unwrap();
        repo.delete_question(first.question_id).await.unwrap();
        let second = repo.post_question(new_question("B", "b")).await.unwrap();

        assert!(second.question_id > first.question_id);
    }

    #[tokio::test]
    async fn test_listings() {
        let repo = InMemoryRepository::new();
        let q1 = repo.post_question(new_question("Rust traits", "dyn or impl?")).await.unwrap();
        repo.post_question(new_question("Async", "How does tokio schedule?")).await.unwrap();
        repo.post_answer(new_answer(q1.question_id, "impl")).await.unwrap();

        let all = repo.get_questions().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.iter().all(|q| q.answers.is_empty()));

        let with_answers = repo.get_questions_with_answers().await.unwrap();
        assert_eq!(with_answers[0].answers.len(), 1);

        let unanswered = repo.get_unanswered_questions().await.unwrap();
        assert_eq!(unanswered.len(), 1);
        assert_eq!(unanswered[0].title, "Async");

        let found = repo.get_questions_by_search("TOKIO").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Async");
    }

    #[tokio::test]
    async fn test_search_paging() {
        let repo = InMemoryRepository::new();
        for i in 0..5 {
            repo.post_question(new_question(&format!("rust {}", i), "c"))
                .await
                .unwrap();
        }

        let page1 = repo.get_questions_by_search_with_paging("rust", 1, 2).await.unwrap();
        let page3 = repo.get_questions_by_search_with_paging("rust", 3, 2).await.unwrap();
        let page4 = repo.get_questions_by_search_with_paging("rust", 4, 2).await.unwrap();

        assert_eq!(page1.len(), 2);
        assert_eq!(page1[0].title, "rust 0");
        assert_eq!(page3.len(), 1);
        assert_eq!(page3[0].title, "rust 4");
        assert!(page4.is_empty());

        let bad = repo.get_questions_by_search_with_paging("rust", 0, 2).await;
        assert!(matches!(bad, Err(RepositoryError::InvalidInput(_))));
    }

    #[test]
    fn test_usable_from_blocking_context() {
        let repo = InMemoryRepository::new();
        let saved = tokio_test::block_on(repo.post_question(new_question("Sync", "caller")));
        assert!(saved.is_ok());
    }
}
