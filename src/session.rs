//! Quiz-taking engine.
//!
//! A [`SolveSession`] walks one quiz question by question under a countdown
//! and produces exactly one [`NewResult`] when it reaches
//! [`Phase::Finished`], whether by confirmation or by running out of time.

use std::time::Duration;

use chrono::Utc;

use crate::models::{NewResult, Question, Quiz};

/// Time allowed for one quiz unless configured otherwise.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(120);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Answering questions; the countdown runs only here.
    InProgress,
    /// Waiting for the user to confirm finishing the quiz.
    ConfirmingFinish,
    /// Terminal. No further transitions.
    Finished { score: f64 },
}

#[derive(Debug, Clone)]
pub struct SolveSession {
    quiz: Quiz,
    phase: Phase,
    current: usize,
    answers: Vec<usize>,
    remaining_secs: u64,
}

impl SolveSession {
    pub fn new(quiz: Quiz, duration: Duration) -> Self {
        Self {
            quiz,
            phase: Phase::InProgress,
            current: 0,
            answers: Vec::new(),
            remaining_secs: duration.as_secs(),
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_in_progress(&self) -> bool {
        self.phase == Phase::InProgress
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.quiz.questions.get(self.current)
    }

    pub fn answers(&self) -> &[usize] {
        &self.answers
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn score(&self) -> Option<f64> {
        match self.phase {
            Phase::Finished { score } => Some(score),
            _ => None,
        }
    }

    /// Record `choice` for the current question.
    ///
    /// Moves on to the next question, or to [`Phase::ConfirmingFinish`]
    /// after the last one. Answering the last question again after a
    /// cancelled confirmation replaces the earlier choice. Choices outside
    /// the question's answers are ignored.
    pub fn answer(&mut self, choice: usize) {
        if self.phase != Phase::InProgress {
            return;
        }
        let Some(question) = self.current_question() else {
            return;
        };
        if choice >= question.answers.len() {
            return;
        }

        if self.current < self.answers.len() {
            self.answers[self.current] = choice;
        } else {
            self.answers.push(choice);
        }

        if self.current + 1 < self.quiz.questions.len() {
            self.current += 1;
        } else {
            self.phase = Phase::ConfirmingFinish;
        }
    }

    /// Ask to stop before every question is answered.
    pub fn request_finish(&mut self) {
        if self.phase == Phase::InProgress {
            self.phase = Phase::ConfirmingFinish;
        }
    }

    /// Confirm finishing. Returns the result to record.
    pub fn confirm_finish(&mut self) -> Option<NewResult> {
        if self.phase != Phase::ConfirmingFinish {
            return None;
        }
        Some(self.finish())
    }

    /// Back out of the confirmation and keep answering.
    pub fn cancel_finish(&mut self) {
        if self.phase == Phase::ConfirmingFinish {
            self.phase = Phase::InProgress;
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Only counts down while in progress. When time runs out the session
    /// finishes with the answers collected so far and returns the result to
    /// record.
    pub fn tick(&mut self) -> Option<NewResult> {
        if self.phase != Phase::InProgress {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            log::info!("Time is up for quiz {}", self.quiz.id);
            return Some(self.finish());
        }
        None
    }

    fn finish(&mut self) -> NewResult {
        let score = score_answers(&self.quiz.questions, &self.answers);
        self.phase = Phase::Finished { score };
        NewResult {
            quiz_id: self.quiz.id,
            score,
            taken_at: Utc::now(),
        }
    }
}

/// Percentage of questions whose answer matches the correct one.
/// Missing answers count as wrong. A quiz without questions scores zero.
pub fn score_answers(questions: &[Question], answers: &[usize]) -> f64 {
    if questions.is_empty() {
        return 0.0;
    }
    let correct = questions
        .iter()
        .zip(answers)
        .filter(|(question, answer)| question.is_correct(**answer))
        .count();
    correct as f64 / questions.len() as f64 * 100.0
}

/// Format seconds as `m:ss`.
pub fn format_clock(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
