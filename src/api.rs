//! Asynchronous access to quizzes and results.
//!
//! The UI only ever talks to a [`QuizApi`]. [`MockApi`] stands in for a
//! remote backend: it waits a fixed latency, then delegates to the shared
//! [`Store`](crate::store::Store).

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{NewResult, Quiz, QuizDraft, QuizResult};
use crate::store::SharedStore;

/// Latency of every mock call unless configured otherwise.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

/// Failure reported by a backend. The mock never produces one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[async_trait]
pub trait QuizApi: Send + Sync {
    async fn fetch_quizzes(&self) -> ApiResult<Vec<Quiz>>;
    async fn fetch_quiz(&self, id: Uuid) -> ApiResult<Option<Quiz>>;
    async fn add_quiz(&self, draft: QuizDraft) -> ApiResult<Quiz>;
    /// `Ok(None)` when no quiz has this id.
    async fn update_quiz(&self, id: Uuid, draft: QuizDraft) -> ApiResult<Option<Quiz>>;
    async fn delete_quiz(&self, id: Uuid) -> ApiResult<()>;
    async fn add_result(&self, result: NewResult) -> ApiResult<QuizResult>;
    async fn fetch_results(&self) -> ApiResult<Vec<QuizResult>>;
    async fn fetch_results_for_quiz(&self, quiz_id: Uuid) -> ApiResult<Vec<QuizResult>>;
}

/// Latency-simulating pass-through to an in-memory store.
pub struct MockApi {
    store: SharedStore,
    latency: Duration,
}

impl MockApi {
    pub fn new(store: SharedStore, latency: Duration) -> Self {
        Self { store, latency }
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    async fn delay(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl QuizApi for MockApi {
    async fn fetch_quizzes(&self) -> ApiResult<Vec<Quiz>> {
        self.delay().await;
        Ok(self.store.lock().await.quizzes().to_vec())
    }

    async fn fetch_quiz(&self, id: Uuid) -> ApiResult<Option<Quiz>> {
        self.delay().await;
        Ok(self.store.lock().await.quiz(id).cloned())
    }

    async fn add_quiz(&self, draft: QuizDraft) -> ApiResult<Quiz> {
        self.delay().await;
        Ok(self.store.lock().await.add_quiz(draft))
    }

    async fn update_quiz(&self, id: Uuid, draft: QuizDraft) -> ApiResult<Option<Quiz>> {
        self.delay().await;
        Ok(self.store.lock().await.update_quiz(id, draft))
    }

    async fn delete_quiz(&self, id: Uuid) -> ApiResult<()> {
        self.delay().await;
        self.store.lock().await.delete_quiz(id);
        Ok(())
    }

    async fn add_result(&self, result: NewResult) -> ApiResult<QuizResult> {
        self.delay().await;
        Ok(self.store.lock().await.add_result(result))
    }

    async fn fetch_results(&self) -> ApiResult<Vec<QuizResult>> {
        self.delay().await;
        Ok(self.store.lock().await.results().to_vec())
    }

    async fn fetch_results_for_quiz(&self, quiz_id: Uuid) -> ApiResult<Vec<QuizResult>> {
        self.delay().await;
        Ok(self.store.lock().await.results_for_quiz(quiz_id))
    }
}
