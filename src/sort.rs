//! Display orderings for the quiz list and the history table.

use crate::models::{Quiz, QuizResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListSort {
    /// Insertion order.
    #[default]
    Default,
    Title,
    Questions,
}

impl ListSort {
    pub fn label(self) -> &'static str {
        match self {
            ListSort::Default => "Default",
            ListSort::Title => "Title",
            ListSort::Questions => "Number of Questions",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ListSort::Default => ListSort::Title,
            ListSort::Title => ListSort::Questions,
            ListSort::Questions => ListSort::Default,
        }
    }

    /// Sorted view of `quizzes`. The sort is stable, so ties keep
    /// insertion order.
    pub fn apply<'a>(self, quizzes: &'a [Quiz]) -> Vec<&'a Quiz> {
        let mut sorted: Vec<&Quiz> = quizzes.iter().collect();
        match self {
            ListSort::Default => {}
            ListSort::Title => sorted.sort_by(|a, b| {
                a.title
                    .to_lowercase()
                    .cmp(&b.title.to_lowercase())
                    .then_with(|| a.title.cmp(&b.title))
            }),
            ListSort::Questions => sorted.sort_by_key(|q| q.question_count()),
        }
        sorted
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HistorySort {
    /// Newest first.
    #[default]
    Date,
    /// Highest score first.
    Score,
}

impl HistorySort {
    pub fn label(self) -> &'static str {
        match self {
            HistorySort::Date => "Date",
            HistorySort::Score => "Score",
        }
    }

    pub fn next(self) -> Self {
        match self {
            HistorySort::Date => HistorySort::Score,
            HistorySort::Score => HistorySort::Date,
        }
    }

    pub fn apply<'a>(self, results: &'a [QuizResult]) -> Vec<&'a QuizResult> {
        let mut sorted: Vec<&QuizResult> = results.iter().collect();
        match self {
            HistorySort::Date => sorted.sort_by(|a, b| b.taken_at.cmp(&a.taken_at)),
            HistorySort::Score => sorted.sort_by(|a, b| b.score.total_cmp(&a.score)),
        }
        sorted
    }
}
