use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use super::{dialog, render_notice};
use crate::app::{SolveScreen, SolveState};
use crate::models::is_passing;
use crate::session::{Phase, SolveSession, format_clock};

/// Remaining time below which the clock turns red.
const LOW_TIME_SECS: u64 = 10;

pub fn render(frame: &mut Frame, area: Rect, screen: &SolveScreen) {
    let session = match &screen.state {
        SolveState::Loading => {
            render_notice(frame, area, "Loading quiz...", Color::DarkGray);
            return;
        }
        SolveState::Missing => {
            render_notice(frame, area, "Quiz not found.", Color::Red);
            return;
        }
        SolveState::Active(session) => session,
    };

    if let Phase::Finished { score } = session.phase() {
        render_finished(frame, area, session, score);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], session);

    match session.current_question() {
        Some(question) => {
            render_question_text(frame, chunks[1], &question.text);
            render_answers(frame, chunks[2], &question.answers, screen.selected);
        }
        None => render_notice(
            frame,
            chunks[1],
            "This quiz has no questions. Press f to finish.",
            Color::DarkGray,
        ),
    }

    if session.phase() == Phase::ConfirmingFinish {
        dialog::render(frame, area, "Are you sure you want to finish the quiz?");
    }
}

fn render_progress(frame: &mut Frame, area: Rect, session: &SolveSession) {
    let remaining = session.remaining_secs();
    let clock_color = if remaining <= LOW_TIME_SECS {
        Color::Red
    } else {
        Color::Yellow
    };

    let chunks = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let title = Paragraph::new(session.quiz().title.as_str())
        .fg(Color::Cyan)
        .bold();
    frame.render_widget(title, chunks[0]);

    let status = Line::from(vec![
        Span::styled(
            format!(
                "{}/{}    ",
                session.current_index() + 1,
                session.quiz().question_count().max(1)
            ),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("Time Left: {}", format_clock(remaining)),
            Style::default().fg(clock_color).bold(),
        ),
    ]);
    frame.render_widget(Paragraph::new(status).alignment(Alignment::Right), chunks[1]);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_answers(frame: &mut Frame, area: Rect, answers: &[String], selected: usize) {
    let mut lines: Vec<Line> = Vec::with_capacity(answers.len() * 2);

    for (index, answer) in answers.iter().enumerate() {
        let is_selected = index == selected;
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };
        let label = char::from(b'A' + (index % 26) as u8);

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(answer.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_finished(frame: &mut Frame, area: Rect, session: &SolveSession, score: f64) {
    let passed = is_passing(score);
    let (color, verdict) = if passed {
        (Color::Green, "Congratulations, you have successfully finished the quiz!")
    } else {
        (Color::Red, "Please try again.")
    };

    let answered = session.answers().len();
    let total = session.quiz().question_count();

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            session.quiz().title.as_str(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Your Score: {:.2}%", score),
            Style::default().fg(color).bold(),
        )),
        Line::from(Span::styled(
            format!("{} of {} questions answered", answered, total),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(verdict, Style::default().fg(color))),
        Line::from(""),
        Line::from(Span::styled(
            "enter back to list  ·  h history",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::uniform(1)),
    );
    frame.render_widget(widget, area);
}
