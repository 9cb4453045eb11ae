mod question;
mod quiz;
mod result;

pub use question::{MAX_ANSWERS, MIN_ANSWERS, Question, QuestionDraft};
pub use quiz::{Quiz, QuizDraft, ValidationError};
pub use result::{NewResult, PASS_THRESHOLD, QuizResult, is_passing};
