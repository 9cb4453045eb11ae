mod dialog;
mod form;
mod history;
mod list;
mod solve;

use ratatui::{prelude::*, widgets::{Block, Borders, Paragraph}};

use crate::app::{App, Screen, StatusKind};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::vertical([
        Constraint::Length(3), // Navigation
        Constraint::Fill(1),   // Screen
        Constraint::Length(1), // Status
        Constraint::Length(1), // Controls
    ])
    .split(area);

    render_navigation(frame, chunks[0], app);

    match &app.screen {
        Screen::List(list) => list::render(frame, chunks[1], app, list),
        Screen::Form(form) => form::render(frame, chunks[1], form),
        Screen::Solve(solve) => solve::render(frame, chunks[1], solve),
        Screen::History(history) => history::render(frame, chunks[1], app, history),
    }

    render_status(frame, chunks[2], app);
    render_controls(frame, chunks[3], app);
}

fn render_navigation(frame: &mut Frame, area: Rect, app: &App) {
    let active = match app.screen {
        Screen::List(_) | Screen::Solve(_) => 0,
        Screen::Form(_) => 1,
        Screen::History(_) => 2,
    };

    let mut spans = vec![Span::styled(" QUIZ BUILDER  ", Style::default().fg(Color::Cyan).bold())];
    for (index, label) in ["1 Quiz List", "2 Create Quiz", "3 History"].iter().enumerate() {
        let style = if index == active {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("  {}  ", label), style));
    }

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let Some(status) = app.status() else {
        return;
    };
    let color = match status.kind {
        StatusKind::Info => Color::Green,
        StatusKind::Error => Color::Red,
    };
    let widget = Paragraph::new(status.message.as_str())
        .alignment(Alignment::Center)
        .fg(color)
        .bold();
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let text = match &app.screen {
        Screen::List(_) => {
            "j/k select  ·  enter solve  ·  e edit  ·  d delete  ·  s sort  ·  1-3 navigate  ·  q quit"
        }
        Screen::Form(_) => {
            "tab/↑↓ field  ·  ←→ correct answer  ·  ^n question  ·  ^a/^d answer  ·  ^s save  ·  esc back"
        }
        Screen::Solve(_) => "j/k select  ·  enter answer  ·  f finish  ·  esc leave",
        Screen::History(_) => "j/k scroll  ·  s sort  ·  esc back  ·  q quit",
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

/// Centered one-line placeholder such as "Loading quizzes...".
fn render_notice(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .split(area);
    let widget = Paragraph::new(text).alignment(Alignment::Center).fg(color);
    frame.render_widget(widget, chunks[1]);
}
