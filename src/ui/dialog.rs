//! Modal yes/no confirmation.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

const WIDTH: u16 = 50;
const HEIGHT: u16 = 7;

/// Draw `message` in a box over the middle of `area`.
pub fn render(frame: &mut Frame, area: Rect, message: &str) {
    let popup = centered(area, WIDTH, HEIGHT);

    let content = vec![
        Line::from(Span::styled(message, Style::default().fg(Color::White).bold())),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y] ", Style::default().fg(Color::Green).bold()),
            Span::styled("Yes", Style::default().fg(Color::Gray)),
            Span::raw("    "),
            Span::styled("[N] ", Style::default().fg(Color::Red).bold()),
            Span::styled("No", Style::default().fg(Color::Gray)),
        ]),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" Confirm ")
                .title_style(Style::default().fg(Color::Yellow).bold())
                .padding(Padding::uniform(1)),
        );

    frame.render_widget(Clear, popup);
    frame.render_widget(widget, popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fits_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered(area, 50, 7), Rect::new(15, 8, 50, 7));

        let small = Rect::new(2, 2, 20, 4);
        assert_eq!(centered(small, 50, 7), small);
    }
}
