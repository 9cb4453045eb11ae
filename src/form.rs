//! Editable state of the create/edit quiz form.

use uuid::Uuid;

use crate::models::{MAX_ANSWERS, MIN_ANSWERS, QuestionDraft, Quiz, QuizDraft, ValidationError};

/// The input that receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    QuestionText(usize),
    Answer(usize, usize),
    Correct(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionForm {
    pub text: String,
    pub answers: Vec<String>,
    pub correct_answer: usize,
}

impl QuestionForm {
    fn blank() -> Self {
        Self {
            text: String::new(),
            answers: vec![String::new(); MIN_ANSWERS],
            correct_answer: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizForm {
    editing: Option<Uuid>,
    pub title: String,
    pub questions: Vec<QuestionForm>,
    focus: Field,
}

impl QuizForm {
    /// An empty form for a new quiz.
    pub fn create() -> Self {
        Self {
            editing: None,
            title: String::new(),
            questions: Vec::new(),
            focus: Field::Title,
        }
    }

    /// A form pre-filled with an existing quiz.
    pub fn edit(quiz: &Quiz) -> Self {
        let questions = quiz
            .questions
            .iter()
            .map(|q| QuestionForm {
                text: q.text.clone(),
                answers: q.answers.clone(),
                correct_answer: q.correct_answer,
            })
            .collect();

        Self {
            editing: Some(quiz.id),
            title: quiz.title.clone(),
            questions,
            focus: Field::Title,
        }
    }

    /// Id of the quiz being edited, `None` when creating.
    pub fn editing(&self) -> Option<Uuid> {
        self.editing
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn add_question(&mut self) {
        self.questions.push(QuestionForm::blank());
        self.focus = Field::QuestionText(self.questions.len() - 1);
    }

    /// Append an empty answer to `question`, up to the maximum.
    pub fn add_answer(&mut self, question: usize) {
        let Some(form) = self.questions.get_mut(question) else {
            return;
        };
        if form.answers.len() < MAX_ANSWERS {
            form.answers.push(String::new());
            self.focus = Field::Answer(question, form.answers.len() - 1);
        }
    }

    /// Remove one answer, never going below the minimum. The correct index
    /// follows the answer it pointed at, or stays in range.
    pub fn remove_answer(&mut self, question: usize, answer: usize) {
        let Some(form) = self.questions.get_mut(question) else {
            return;
        };
        if form.answers.len() <= MIN_ANSWERS || answer >= form.answers.len() {
            return;
        }

        form.answers.remove(answer);
        if form.correct_answer > answer {
            form.correct_answer -= 1;
        }
        form.correct_answer = form.correct_answer.min(form.answers.len() - 1);

        if let Field::Answer(q, a) = self.focus
            && q == question
            && a >= form.answers.len()
        {
            self.focus = Field::Answer(q, form.answers.len() - 1);
        }
    }

    /// Move the correct-answer marker of `question` by `delta`, staying in
    /// range.
    pub fn shift_correct(&mut self, question: usize, delta: isize) {
        if let Some(form) = self.questions.get_mut(question) {
            let last = form.answers.len().saturating_sub(1);
            form.correct_answer = form.correct_answer.saturating_add_signed(delta).min(last);
        }
    }

    /// Question the focused field belongs to.
    pub fn focused_question(&self) -> Option<usize> {
        match self.focus {
            Field::Title => None,
            Field::QuestionText(q) | Field::Answer(q, _) | Field::Correct(q) => Some(q),
        }
    }

    pub fn focus_next(&mut self) {
        let fields = self.fields();
        let pos = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(pos + 1) % fields.len()];
    }

    pub fn focus_previous(&mut self) {
        let fields = self.fields();
        let pos = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(pos + fields.len() - 1) % fields.len()];
    }

    /// Type a character into the focused field. Digits on the correct
    /// answer field pick that answer (1-based).
    pub fn insert_char(&mut self, c: char) {
        if let Field::Correct(q) = self.focus {
            if let (Some(digit), Some(form)) = (c.to_digit(10), self.questions.get_mut(q)) {
                let index = (digit as usize).saturating_sub(1);
                if index < form.answers.len() {
                    form.correct_answer = index;
                }
            }
            return;
        }
        if let Some(text) = self.focused_text_mut() {
            text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.focused_text_mut() {
            text.pop();
        }
    }

    /// Build the draft and run the presence checks.
    pub fn submit(&self) -> Result<QuizDraft, ValidationError> {
        let draft = QuizDraft {
            title: self.title.clone(),
            questions: self
                .questions
                .iter()
                .map(|q| QuestionDraft {
                    text: q.text.clone(),
                    answers: q.answers.clone(),
                    correct_answer: q.correct_answer,
                })
                .collect(),
        };
        draft.validate()?;
        Ok(draft)
    }

    fn fields(&self) -> Vec<Field> {
        let mut fields = vec![Field::Title];
        for (q, form) in self.questions.iter().enumerate() {
            fields.push(Field::QuestionText(q));
            fields.extend((0..form.answers.len()).map(|a| Field::Answer(q, a)));
            fields.push(Field::Correct(q));
        }
        fields
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::Title => Some(&mut self.title),
            Field::QuestionText(q) => self.questions.get_mut(q).map(|f| &mut f.text),
            Field::Answer(q, a) => self
                .questions
                .get_mut(q)
                .and_then(|f| f.answers.get_mut(a)),
            Field::Correct(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(form: &mut QuizForm, text: &str) {
        text.chars().for_each(|c| form.insert_char(c));
    }

    fn filled_form() -> QuizForm {
        let mut form = QuizForm::create();
        type_str(&mut form, "Capitals");
        form.add_question();
        type_str(&mut form, "France?");
        form.focus_next();
        type_str(&mut form, "Paris");
        form.focus_next();
        type_str(&mut form, "Rome");
        form
    }

    #[test]
    fn test_new_form_is_empty() {
        let form = QuizForm::create();
        assert!(form.title.is_empty());
        assert!(form.questions.is_empty());
        assert_eq!(form.editing(), None);
        assert_eq!(
            form.submit(),
            Err(ValidationError::MissingTitleOrQuestions)
        );
    }

    #[test]
    fn test_add_question_starts_with_two_blank_answers() {
        let mut form = QuizForm::create();
        form.add_question();

        assert_eq!(form.questions[0], QuestionForm::blank());
        assert_eq!(form.questions[0].answers.len(), 2);
        assert_eq!(form.focus(), Field::QuestionText(0));
    }

    #[test]
    fn test_typing_fills_fields_in_order() {
        let form = filled_form();
        let draft = form.submit().unwrap();

        assert_eq!(draft.title, "Capitals");
        assert_eq!(draft.questions[0].text, "France?");
        assert_eq!(draft.questions[0].answers, ["Paris", "Rome"]);
        assert_eq!(draft.questions[0].correct_answer, 0);
    }

    #[test]
    fn test_answer_count_stays_between_two_and_four() {
        let mut form = QuizForm::create();
        form.add_question();

        for _ in 0..5 {
            form.add_answer(0);
        }
        assert_eq!(form.questions[0].answers.len(), 4);

        for _ in 0..5 {
            form.remove_answer(0, 0);
        }
        assert_eq!(form.questions[0].answers.len(), 2);
    }

    #[test]
    fn test_remove_answer_keeps_correct_index_in_range() {
        let mut form = QuizForm::create();
        form.add_question();
        form.add_answer(0);
        form.add_answer(0);
        form.questions[0].correct_answer = 3;

        form.remove_answer(0, 3);
        assert_eq!(form.questions[0].correct_answer, 2);

        form.questions[0].correct_answer = 2;
        form.remove_answer(0, 0);
        assert_eq!(form.questions[0].correct_answer, 1);
    }

    #[test]
    fn test_correct_field_takes_digits_and_shifts() {
        let mut form = filled_form();
        form.focus_next();
        assert_eq!(form.focus(), Field::Correct(0));

        form.insert_char('2');
        assert_eq!(form.questions[0].correct_answer, 1);
        form.insert_char('9');
        assert_eq!(form.questions[0].correct_answer, 1);

        form.shift_correct(0, 5);
        assert_eq!(form.questions[0].correct_answer, 1);
        form.shift_correct(0, -5);
        assert_eq!(form.questions[0].correct_answer, 0);
    }

    #[test]
    fn test_focus_wraps_around() {
        let mut form = filled_form();
        // Title, text, two answers, correct.
        for _ in 0..5 {
            form.focus_next();
        }
        assert_eq!(form.focus(), Field::Answer(0, 1));

        let mut form = QuizForm::create();
        form.focus_previous();
        assert_eq!(form.focus(), Field::Title);
    }

    #[test]
    fn test_blank_answer_is_rejected() {
        let mut form = filled_form();
        form.add_answer(0);

        assert_eq!(
            form.submit(),
            Err(ValidationError::IncompleteQuestion { question: 0 })
        );
    }

    #[test]
    fn test_edit_prefills_from_quiz() {
        let draft = filled_form().submit().unwrap();
        let mut store = crate::store::Store::new();
        let quiz = store.add_quiz(draft.clone());

        let mut form = QuizForm::edit(&quiz);
        assert_eq!(form.editing(), Some(quiz.id));
        assert_eq!(form.submit(), Ok(draft));

        form.backspace();
        assert_eq!(form.title, "Capital");
    }
}
