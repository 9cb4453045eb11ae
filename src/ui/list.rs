use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use super::{dialog, render_notice};
use crate::app::{App, ListScreen};

pub fn render(frame: &mut Frame, area: Rect, app: &App, list: &ListScreen) {
    if !app.quizzes_loaded() && app.quizzes().is_empty() {
        render_notice(frame, area, "Loading quizzes...", Color::DarkGray);
        return;
    }

    let chunks = Layout::vertical([Constraint::Length(2), Constraint::Fill(1)])
        .margin(1)
        .split(area);

    render_header(frame, chunks[0], app, list);

    let quizzes = app.sorted_quizzes();
    if quizzes.is_empty() {
        render_notice(frame, chunks[1], "No quizzes available.", Color::DarkGray);
    } else {
        let lines: Vec<Line> = quizzes
            .iter()
            .enumerate()
            .map(|(index, quiz)| {
                let is_selected = index == list.selected;
                let style = if is_selected {
                    Style::default().fg(Color::Cyan).bold()
                } else {
                    Style::default().fg(Color::Gray)
                };
                let marker = if is_selected { ">" } else { " " };

                let mut spans = vec![
                    Span::styled(format!(" {} ", marker), style),
                    Span::styled(quiz.title.as_str(), style),
                    Span::styled(
                        format!("  ({} questions)", quiz.question_count()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ];
                if quiz.id.is_nil() {
                    spans.push(Span::styled(
                        "  (saving…)",
                        Style::default().fg(Color::Yellow).italic(),
                    ));
                }
                Line::from(spans)
            })
            .collect();

        let visible = chunks[1].height.saturating_sub(2) as usize;
        let offset = list.selected.saturating_sub(visible.saturating_sub(1));
        let widget = Paragraph::new(lines).scroll((offset as u16, 0)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(widget, chunks[1]);
    }

    if let Some(id) = list.confirm_delete {
        let title = app.quiz_title(id).unwrap_or("this quiz");
        let message = format!("Delete \"{}\"?", title);
        dialog::render(frame, area, &message);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, list: &ListScreen) {
    let mut spans = vec![
        Span::styled("Quizzes", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!("    sort: {}", list.sort.label()),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if app.quizzes_pending() {
        spans.push(Span::styled(
            "    syncing…",
            Style::default().fg(Color::Yellow),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
