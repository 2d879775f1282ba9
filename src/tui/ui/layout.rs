use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::tui::app::AppState;

pub(super) fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);
    area[1]
}

/// Header, play area and status bar, top to bottom.
pub(super) fn scene_chunks(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3), Constraint::Length(4)])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Status bar shared by both game scenes: latest event on the left, keys on the right.
pub(super) fn draw_status(f: &mut Frame, area: Rect, app: &AppState, hint: &str, keys: &str) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner(area));

    let mut left = vec![match app.status() {
        Some(msg) => Line::from(Span::styled(msg.to_string(), Style::default().fg(Color::Green))),
        None => Line::from(Span::styled(hint.to_string(), Style::default().add_modifier(Modifier::DIM))),
    }];
    if let Some(text) = app.compliment() {
        left.push(Line::from(Span::styled(
            text,
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        )));
    }
    let right = vec![Line::from(keys.to_string()), Line::from("? help • M menu • Q quit")];
    f.render_widget(Paragraph::new(left).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(
        Paragraph::new(right).wrap(Wrap { trim: true }).alignment(Alignment::Right),
        cols[1],
    );
}
