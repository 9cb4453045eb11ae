use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Score at or below which the solver shows "try again".
pub const PASS_THRESHOLD: f64 = 60.0;

/// The recorded score of one completed quiz-taking session.
///
/// `quiz_id` is not checked against existing quizzes; a result may outlive
/// the quiz it refers to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub id: Uuid,
    pub quiz_id: Uuid,
    pub score: f64,
    pub taken_at: DateTime<Utc>,
}

/// A result waiting for the store to assign its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewResult {
    pub quiz_id: Uuid,
    pub score: f64,
    pub taken_at: DateTime<Utc>,
}

impl NewResult {
    pub(crate) fn into_result(self, id: Uuid) -> QuizResult {
        QuizResult {
            id,
            quiz_id: self.quiz_id,
            score: self.score,
            taken_at: self.taken_at,
        }
    }
}

/// Whether a score earns the "success" framing.
pub fn is_passing(score: f64) -> bool {
    score > PASS_THRESHOLD
}
