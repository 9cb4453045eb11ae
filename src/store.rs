//! In-memory store of quizzes and results.
//!
//! The store is the single owner of the canonical collections. It lives for
//! the lifetime of the process and is handed to whoever needs it; nothing
//! here is persisted.

use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::models::{NewResult, Quiz, QuizDraft, QuizResult};

/// Store shared between the mock API and its spawned calls.
pub type SharedStore = Arc<Mutex<Store>>;

/// Quizzes and results, both kept in insertion order.
#[derive(Debug, Default)]
pub struct Store {
    quizzes: Vec<Quiz>,
    results: Vec<QuizResult>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given quizzes, in order.
    pub fn with_quizzes(drafts: impl IntoIterator<Item = QuizDraft>) -> Self {
        let mut store = Self::new();
        for draft in drafts {
            store.add_quiz(draft);
        }
        store
    }

    /// Wrap the store for sharing with async callers.
    pub fn into_shared(self) -> SharedStore {
        Arc::new(Mutex::new(self))
    }

    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    pub fn results(&self) -> &[QuizResult] {
        &self.results
    }

    pub fn quiz(&self, id: Uuid) -> Option<&Quiz> {
        self.quizzes.iter().find(|q| q.id == id)
    }

    /// Append a new quiz under a fresh id.
    pub fn add_quiz(&mut self, draft: QuizDraft) -> Quiz {
        let id = self.fresh_quiz_id();
        let quiz = build_quiz(id, draft);
        self.quizzes.push(quiz.clone());
        log::debug!("Added quiz {} ({} questions)", id, quiz.question_count());
        quiz
    }

    /// Replace title and questions of an existing quiz, keeping its id and
    /// position. Returns `None` and changes nothing when `id` is unknown.
    pub fn update_quiz(&mut self, id: Uuid, draft: QuizDraft) -> Option<Quiz> {
        let slot = self.quizzes.iter_mut().find(|q| q.id == id)?;
        *slot = build_quiz(id, draft);
        log::debug!("Updated quiz {}", id);
        Some(slot.clone())
    }

    /// Remove the quiz with `id`. Returns whether anything was removed.
    pub fn delete_quiz(&mut self, id: Uuid) -> bool {
        let before = self.quizzes.len();
        self.quizzes.retain(|q| q.id != id);
        let removed = self.quizzes.len() != before;
        if removed {
            log::debug!("Deleted quiz {}", id);
        }
        removed
    }

    /// Append a result under a fresh id.
    pub fn add_result(&mut self, new: NewResult) -> QuizResult {
        let id = self.fresh_result_id();
        let result = new.into_result(id);
        self.results.push(result.clone());
        log::debug!(
            "Recorded result {} for quiz {}: {:.2}",
            id,
            result.quiz_id,
            result.score
        );
        result
    }

    pub fn results_for_quiz(&self, quiz_id: Uuid) -> Vec<QuizResult> {
        self.results
            .iter()
            .filter(|r| r.quiz_id == quiz_id)
            .cloned()
            .collect()
    }

    fn fresh_quiz_id(&self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if self.quiz(id).is_none() {
                return id;
            }
        }
    }

    fn fresh_result_id(&self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if !self.results.iter().any(|r| r.id == id) {
                return id;
            }
        }
    }
}

fn build_quiz(id: Uuid, draft: QuizDraft) -> Quiz {
    let questions = draft
        .questions
        .into_iter()
        .map(|q| q.into_question(Uuid::new_v4()))
        .collect();

    Quiz {
        id,
        title: draft.title,
        questions,
    }
}
