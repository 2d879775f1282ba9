use crate::match3::{Coord, Token, GRID_SIZE};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{draw_status, scene_chunks};

pub(super) fn draw_match3(f: &mut Frame, app: &AppState) {
    let [header_area, board_area, status_area] = scene_chunks(f.area());

    let header = Paragraph::new(Line::from(format!(
        "Score: {}   Combos: {}",
        app.match3.score(),
        app.match3.combos()
    )))
    .block(Block::default().title("Match-3").borders(Borders::ALL));
    f.render_widget(header, header_area);

    // each cell is four columns wide: a space, a two-column emoji, a space
    let board_width = (GRID_SIZE * 4) as u16 + 2;
    let board_height = GRID_SIZE as u16 + 2;
    let board = Rect {
        x: board_area.x + board_area.width.saturating_sub(board_width) / 2,
        y: board_area.y,
        width: board_width.min(board_area.width),
        height: board_height.min(board_area.height),
    };
    let lines: Vec<Line> = (0..GRID_SIZE)
        .map(|row| {
            let spans: Vec<Span> = (0..GRID_SIZE)
                .map(|col| cell_span(app, Coord::new(row, col)))
                .collect();
            Line::from(spans)
        })
        .collect();
    let para = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(para, board);

    let hint = if app.pending_cell.is_some() {
        "Now pick a neighbouring cell to swap with"
    } else {
        "Line up three or more of a kind"
    };
    draw_status(f, status_area, app, hint, "Enter pick/swap • Esc drop • R new board");
}

fn cell_span(app: &AppState, at: Coord) -> Span<'static> {
    let text = match app.match3.grid().get(at) {
        Some(token) => format!(" {} ", token.symbol()),
        None => "    ".to_string(),
    };
    let mut style = app.match3.grid().get(at).map_or_else(Style::default, token_style);
    if app.pending_cell == Some(at) {
        style = style.bg(Color::Yellow);
    }
    if app.grid_cursor == at {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(text, style)
}

fn token_style(token: Token) -> Style {
    let color = match token {
        Token::Heart => Color::Red,
        Token::Sparkles => Color::Yellow,
        Token::Star => Color::LightYellow,
        Token::Ribbon => Color::Magenta,
        Token::TwoHearts => Color::LightMagenta,
        Token::Blossom => Color::LightRed,
    };
    Style::default().fg(color)
}
