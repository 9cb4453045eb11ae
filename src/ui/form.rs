use std::borrow::Cow;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use super::render_notice;
use crate::app::FormScreen;
use crate::form::{Field, QuizForm};

const LABEL_WIDTH: usize = 12;

pub fn render(frame: &mut Frame, area: Rect, screen: &FormScreen) {
    match screen {
        FormScreen::Loading => render_notice(frame, area, "Loading quiz...", Color::DarkGray),
        FormScreen::Missing => render_notice(frame, area, "Quiz not found.", Color::Red),
        FormScreen::Ready(form) => render_form(frame, area, form),
    }
}

fn render_form(frame: &mut Frame, area: Rect, form: &QuizForm) {
    let heading = if form.editing().is_some() {
        "Edit Quiz"
    } else {
        "Create Quiz"
    };

    let mut lines = vec![field_line("Title", form.title.as_str(), form.focus() == Field::Title)];
    let mut focused_line = 0;

    for (q, question) in form.questions.iter().enumerate() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Question {}", q + 1),
            Style::default().fg(Color::Cyan).bold(),
        )));

        if form.focus() == Field::QuestionText(q) {
            focused_line = lines.len();
        }
        lines.push(field_line(
            "Text",
            question.text.as_str(),
            form.focus() == Field::QuestionText(q),
        ));

        for (a, answer) in question.answers.iter().enumerate() {
            if form.focus() == Field::Answer(q, a) {
                focused_line = lines.len();
            }
            lines.push(field_line(
                &format!("Answer {}", a + 1),
                answer.as_str(),
                form.focus() == Field::Answer(q, a),
            ));
        }

        let correct = format!("◀ {} ▶", question.correct_answer + 1);
        if form.focus() == Field::Correct(q) {
            focused_line = lines.len();
        }
        lines.push(field_line("Correct", correct, form.focus() == Field::Correct(q)));
    }

    if form.questions.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "No questions yet. Press ctrl-n to add one.",
            Style::default().fg(Color::DarkGray).italic(),
        )));
    }

    let visible = area.height.saturating_sub(4) as usize;
    let offset = focused_line.saturating_sub(visible.saturating_sub(2));

    let widget = Paragraph::new(lines).scroll((offset as u16, 0)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(format!(" {} ", heading))
            .title_style(Style::default().fg(Color::Cyan).bold())
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn field_line<'a>(label: &str, value: impl Into<Cow<'a, str>>, focused: bool) -> Line<'a> {
    let label_style = if focused {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let value_style = if focused {
        Style::default().fg(Color::White).underlined()
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = if focused { "▏" } else { "" };

    Line::from(vec![
        Span::styled(format!("{:<width$}", label, width = LABEL_WIDTH), label_style),
        Span::styled(value, value_style),
        Span::styled(cursor, Style::default().fg(Color::Yellow)),
    ])
}
