use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fewest answer choices a question may offer.
pub const MIN_ANSWERS: usize = 2;
/// Most answer choices a question may offer.
pub const MAX_ANSWERS: usize = 4;

/// A stored question. Ids are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    pub text: String,
    pub answers: Vec<String>,
    pub correct_answer: usize,
}

impl Question {
    pub fn is_correct(&self, choice: usize) -> bool {
        self.correct_answer == choice
    }
}

/// A question as entered by the author, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub text: String,
    pub answers: Vec<String>,
    #[serde(alias = "correctAnswerIndex")]
    pub correct_answer: usize,
}

impl QuestionDraft {
    pub(crate) fn into_question(self, id: Uuid) -> Question {
        Question {
            id,
            text: self.text,
            answers: self.answers,
            correct_answer: self.correct_answer,
        }
    }
}
