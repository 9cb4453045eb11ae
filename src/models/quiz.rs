use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::question::{MAX_ANSWERS, MIN_ANSWERS, Question, QuestionDraft};

/// A titled, ordered collection of questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: Uuid,
    pub title: String,
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

/// Everything about a quiz except its identifiers. Input of create and
/// update, and the shape of quizzes in a seed file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizDraft {
    pub title: String,
    pub questions: Vec<QuestionDraft>,
}

/// Reasons a draft is refused before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Quiz must have a title and at least one question.")]
    MissingTitleOrQuestions,

    #[error("Each question must have text and all answers filled.")]
    IncompleteQuestion { question: usize },

    #[error("Each question must have at least 2 answers.")]
    TooFewAnswers { question: usize },

    #[error("Each question can have at most 4 answers.")]
    TooManyAnswers { question: usize },

    #[error("Question {} must mark one of its answers as correct.", .question + 1)]
    CorrectAnswerOutOfRange { question: usize },
}

impl QuizDraft {
    /// Presence checks applied at the form boundary.
    ///
    /// Checks run in the order the author sees them: title and question
    /// count first, then each question top to bottom.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() || self.questions.is_empty() {
            return Err(ValidationError::MissingTitleOrQuestions);
        }

        for (question, draft) in self.questions.iter().enumerate() {
            if draft.text.is_empty() || draft.answers.iter().any(String::is_empty) {
                return Err(ValidationError::IncompleteQuestion { question });
            }
            if draft.answers.len() < MIN_ANSWERS {
                return Err(ValidationError::TooFewAnswers { question });
            }
            if draft.answers.len() > MAX_ANSWERS {
                return Err(ValidationError::TooManyAnswers { question });
            }
            if draft.correct_answer >= draft.answers.len() {
                return Err(ValidationError::CorrectAnswerOutOfRange { question });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(text: &str, answers: &[&str], correct_answer: usize) -> QuestionDraft {
        QuestionDraft {
            text: text.to_string(),
            answers: answers.iter().map(|a| a.to_string()).collect(),
            correct_answer,
        }
    }

    fn draft(title: &str, questions: Vec<QuestionDraft>) -> QuizDraft {
        QuizDraft {
            title: title.to_string(),
            questions,
        }
    }

    #[test]
    fn test_valid_draft() {
        let quiz = draft("Capitals", vec![question("France?", &["Paris", "Rome"], 0)]);
        assert_eq!(quiz.validate(), Ok(()));
    }

    #[test]
    fn test_missing_title_or_questions() {
        let untitled = draft("", vec![question("France?", &["Paris", "Rome"], 0)]);
        assert_eq!(
            untitled.validate(),
            Err(ValidationError::MissingTitleOrQuestions)
        );

        let empty = draft("Capitals", vec![]);
        assert_eq!(empty.validate(), Err(ValidationError::MissingTitleOrQuestions));
    }

    #[test]
    fn test_incomplete_question() {
        let blank_text = draft("Capitals", vec![question("", &["Paris", "Rome"], 0)]);
        assert_eq!(
            blank_text.validate(),
            Err(ValidationError::IncompleteQuestion { question: 0 })
        );

        let blank_answer = draft(
            "Capitals",
            vec![
                question("France?", &["Paris", "Rome"], 0),
                question("Italy?", &["Rome", ""], 0),
            ],
        );
        assert_eq!(
            blank_answer.validate(),
            Err(ValidationError::IncompleteQuestion { question: 1 })
        );
    }

    #[test]
    fn test_answer_count_bounds() {
        let one = draft("Capitals", vec![question("France?", &["Paris"], 0)]);
        assert_eq!(
            one.validate(),
            Err(ValidationError::TooFewAnswers { question: 0 })
        );

        let five = draft(
            "Capitals",
            vec![question("France?", &["a", "b", "c", "d", "e"], 0)],
        );
        assert_eq!(
            five.validate(),
            Err(ValidationError::TooManyAnswers { question: 0 })
        );
    }

    #[test]
    fn test_correct_answer_out_of_range() {
        let quiz = draft("Capitals", vec![question("France?", &["Paris", "Rome"], 2)]);
        let err = quiz.validate().unwrap_err();
        assert_eq!(err, ValidationError::CorrectAnswerOutOfRange { question: 0 });
        assert_eq!(
            err.to_string(),
            "Question 1 must mark one of its answers as correct."
        );
    }

    #[test]
    fn test_error_messages_match_form_alerts() {
        assert_eq!(
            ValidationError::MissingTitleOrQuestions.to_string(),
            "Quiz must have a title and at least one question."
        );
        assert_eq!(
            ValidationError::IncompleteQuestion { question: 0 }.to_string(),
            "Each question must have text and all answers filled."
        );
        assert_eq!(
            ValidationError::TooFewAnswers { question: 0 }.to_string(),
            "Each question must have at least 2 answers."
        );
    }

    #[test]
    fn test_draft_accepts_camel_case_index() {
        let json = r#"{
            "title": "Capitals",
            "questions": [
                { "text": "France?", "answers": ["Paris", "Rome"], "correctAnswerIndex": 1 }
            ]
        }"#;
        let quiz: QuizDraft = serde_json::from_str(json).unwrap();
        assert_eq!(quiz.questions[0].correct_answer, 1);
    }
}
