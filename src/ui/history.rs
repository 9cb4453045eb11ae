use chrono::Local;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use super::render_notice;
use crate::app::{App, HistoryScreen};
use crate::models::is_passing;

pub fn render(frame: &mut Frame, area: Rect, app: &App, history: &HistoryScreen) {
    if history.loading {
        render_notice(frame, area, "Loading history...", Color::DarkGray);
        return;
    }

    let chunks = Layout::vertical([Constraint::Length(2), Constraint::Fill(1)])
        .margin(1)
        .split(area);

    let header = Line::from(vec![
        Span::styled("Quiz History", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!("    sort: {}", history.sort.label()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let results = app.sorted_results();
    if results.is_empty() {
        render_notice(frame, chunks[1], "No quiz results available.", Color::DarkGray);
        return;
    }

    let rows: Vec<Row> = results
        .iter()
        .skip(history.scroll)
        .map(|result| {
            // Results outlive deleted quizzes; fall back to the raw id.
            let title = app
                .quiz_title(result.quiz_id)
                .map(str::to_string)
                .unwrap_or_else(|| result.quiz_id.to_string());
            let score_color = if is_passing(result.score) {
                Color::Green
            } else {
                Color::Red
            };
            let taken_at = result
                .taken_at
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string();

            Row::new(vec![
                Cell::from(title).style(Style::default().fg(Color::Gray)),
                Cell::from(format!("{:.2}%", result.score)).style(Style::default().fg(score_color)),
                Cell::from(taken_at).style(Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Fill(1),
            Constraint::Length(10),
            Constraint::Length(20),
        ],
    )
    .header(
        Row::new(vec!["Quiz", "Score", "Date"])
            .style(Style::default().fg(Color::Yellow).bold())
            .bottom_margin(1),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(table, chunks[1]);
}
