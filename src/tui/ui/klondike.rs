use crate::cards::{Card, PileCard, Suit};
use crate::klondike::{Source, TABLEAU_COLUMNS};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{draw_status, inner, scene_chunks};

const STOCK_SLOT: usize = 0;
const WASTE_SLOT: usize = 1;
const FOUNDATION_SLOT: usize = 2;

pub(super) fn draw_klondike(f: &mut Frame, app: &AppState) {
    let [header_area, table_area, status_area] = scene_chunks(f.area());
    let game = &app.klondike;

    let secs = game.elapsed().as_secs();
    let mut header = format!(
        "Score: {}   Moves: {}   Time: {:02}:{:02}",
        game.score(),
        game.moves(),
        secs / 60,
        secs % 60
    );
    if let Some(seed) = app.fixed_seed {
        header.push_str(&format!("   Seed: {seed}"));
    }
    let mut header_block = Block::default().title("Klondike").borders(Borders::ALL);
    if game.is_won() {
        header.push_str("   ★ WON ★");
        header_block = header_block.border_style(Style::default().fg(Color::Green));
    }
    f.render_widget(Paragraph::new(Line::from(header)).block(header_block), header_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(table_area);
    let ratios = [Constraint::Ratio(1, TABLEAU_COLUMNS as u32); TABLEAU_COLUMNS];
    let top = Layout::default().direction(Direction::Horizontal).constraints(ratios).split(rows[0]);
    let columns =
        Layout::default().direction(Direction::Horizontal).constraints(ratios).split(rows[1]);

    // stock, waste, a gap, then the four foundations
    let stock_label = if game.stock().is_empty() { "↻".to_string() } else { "▒▒▒".to_string() };
    draw_pile(
        f,
        top[0],
        &format!("Stock {}", game.stock().len()),
        Line::from(stock_label),
        app.pile_cursor.slot == STOCK_SLOT,
    );
    let waste_line = match game.waste_top() {
        Some(card) => card_line(card, selected_from(app, Source::Waste)),
        None => Line::from("[  ]"),
    };
    draw_pile(
        f,
        top[1],
        &format!("Waste {}", game.waste().len()),
        waste_line,
        app.pile_cursor.slot == WASTE_SLOT,
    );
    for (i, suit) in Suit::ALL.into_iter().enumerate() {
        let line = match game.foundation(suit).last() {
            Some(&card) => card_line(card, false),
            None => Line::from(Span::styled(
                format!("[{}]", suit.symbol()),
                Style::default().add_modifier(Modifier::DIM),
            )),
        };
        draw_pile(f, top[3 + i], "", line, app.pile_cursor.slot == FOUNDATION_SLOT + i);
    }

    for (column, area) in columns.iter().enumerate() {
        draw_column(f, *area, app, column);
    }

    let hint = if game.is_won() {
        "All four foundations are full. Press R for a new deal"
    } else if game.selection().is_some() {
        "Move to a pile and press Enter to drop"
    } else {
        "Build foundations from Ace to King"
    };
    draw_status(f, status_area, app, hint, "Enter pick/drop • D draw • R new deal");
}

fn draw_pile(f: &mut Frame, area: Rect, title: &str, content: Line, focused: bool) {
    let mut block = Block::default().title(title.to_string()).borders(Borders::ALL);
    if focused {
        block = block.border_style(Style::default().fg(Color::Yellow));
    }
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(content).alignment(Alignment::Center), inner(area));
}

fn draw_column(f: &mut Frame, area: Rect, app: &AppState, column: usize) {
    let cursor = app.pile_cursor;
    let focused = cursor.column() == Some(column);
    let mut block = Block::default().title(format!("{}", column + 1)).borders(Borders::ALL);
    if focused {
        block = block.border_style(Style::default().fg(Color::Yellow));
    }
    let pile = app.klondike.column(column).unwrap_or(&[]);
    let reach = focused.then(|| pile.len().saturating_sub(1 + cursor.depth));
    let lines: Vec<Line> = if pile.is_empty() {
        vec![Line::from(Span::styled("[  ]", Style::default().add_modifier(Modifier::DIM)))]
    } else {
        pile.iter()
            .enumerate()
            .map(|(index, &pc)| {
                let selected = selected_from(app, Source::Tableau { column, index });
                let mut line = pile_card_line(pc, selected);
                if reach.is_some_and(|r| index >= r) {
                    line = line.patch_style(Style::default().add_modifier(Modifier::UNDERLINED));
                }
                line
            })
            .collect()
    };
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner(area));
}

/// True when the card at `at` is part of the pending selection.
fn selected_from(app: &AppState, at: Source) -> bool {
    let Some(selection) = app.klondike.selection() else {
        return false;
    };
    match (selection.source(), at) {
        (Source::Waste, Source::Waste) => true,
        (Source::Tableau { column: c, index: i }, Source::Tableau { column, index }) => {
            c == column && index >= i
        }
        _ => false,
    }
}

fn pile_card_line(pc: PileCard, selected: bool) -> Line<'static> {
    if pc.face_up {
        card_line(pc.card, selected)
    } else {
        Line::from(Span::styled("▒▒▒", Style::default().fg(Color::Blue)))
    }
}

fn card_line(card: Card, selected: bool) -> Line<'static> {
    let mut style = card_style(card);
    if selected {
        style = style.bg(Color::Cyan).add_modifier(Modifier::BOLD);
    }
    Line::from(Span::styled(format!("{}{}", card.rank().label(), card.suit().symbol()), style))
}

fn card_style(card: Card) -> Style {
    let fg = if card.is_red() { Color::Red } else { Color::White };
    Style::default().fg(fg)
}
