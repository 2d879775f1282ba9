use crate::cards::{Color as CardColor, Suit};
use crate::match3::Token;
use crate::tui::app::{AppState, GameChoice};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_menu(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let area = centered_rect(80, 80, size);
    let block = Block::default().title("compliment-arcade").borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    let inner_all = inner(area);

    // ASCII logo at the top (render left-aligned to preserve spacing)
    let logo = r#"
  ___                  _ _                   _
 / __|___ _ __  _ __| (_)_ __  ___ _ _| |_
| (__/ _ \ '  \| '_ \ | | '  \/ -_) ' \  _|
 \___\___/_|_|_| .__/_|_|_|_|_\___|_||_\__|
   /_\  _ _ __|_|_ _  __| |___
  / _ \| '_/ _/ _` |/ _` / -_)
 /_/ \_\_| \__\__,_|\__,_\___|
                                 "#;

    let logo_lines: Vec<Line> = logo
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Cyan))))
        .collect();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(logo_lines.len() as u16 + 1), Constraint::Min(3)])
        .split(inner_all);

    let logo_para =
        Paragraph::new(logo_lines).wrap(Wrap { trim: false }).alignment(Alignment::Center);
    f.render_widget(logo_para, rows[0]);

    // Now-playing line, then the settings with a marker on the focused one
    let seed = match app.fixed_seed {
        Some(seed) => format!("seed {seed}"),
        None => "random deal".to_string(),
    };
    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::raw("Now playing: "),
            Span::styled(app.active_game.label(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(" ({seed})")),
        ]),
        Line::from(preview(app.cfg_game)),
        Line::from(""),
    ];
    for (i, item) in app.menu_items_display().into_iter().enumerate() {
        let line = if i == app.menu_index {
            Line::from(Span::styled(
                format!("▶ {item} ◀"),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(item)
        };
        lines.push(line);
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] Play  [Esc] Back  [↑/↓] Move  [←/→] Adjust  [Q] Quit",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true }).alignment(Alignment::Center);
    f.render_widget(para, rows[1]);
}

/// A one-line taste of the game being picked.
fn preview(choice: GameChoice) -> Line<'static> {
    let spans: Vec<Span> = match choice {
        GameChoice::Match3 => Token::ALL.iter().map(|t| Span::raw(format!("{} ", t.symbol()))).collect(),
        GameChoice::Klondike => Suit::ALL
            .iter()
            .map(|s| {
                let fg = if s.color() == CardColor::Red { Color::Red } else { Color::White };
                Span::styled(format!("{} ", s.symbol()), Style::default().fg(fg))
            })
            .collect(),
    };
    Line::from(spans)
}
