use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Match-3:", bold)),
        Line::from("- Arrows / hjkl: move the cursor"),
        Line::from("- Enter / Space: pick a cell, then a neighbour to swap"),
        Line::from("- Esc: drop the picked cell"),
        Line::from("- Runs of three or more clear for 10 points a tile"),
        Line::from("- Every clear earns a compliment"),
        Line::from(""),
        Line::from(Span::styled("Klondike:", bold)),
        Line::from("- Left / Right: move between piles"),
        Line::from("- Up / Down: reach deeper into a face-up run"),
        Line::from("- Enter / Space: draw, pick up, or drop on the pile"),
        Line::from("- D: draw from the stock"),
        Line::from("- Esc: put the picked-up cards back"),
        Line::from("- +5 onto a column, +10 onto a foundation"),
        Line::from("- Good moves sometimes earn a compliment; a win always does"),
        Line::from(""),
        Line::from(Span::styled("Both:", bold)),
        Line::from("- R / N: new board or new deal"),
        Line::from("- M: open / close menu"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from(Span::styled("Menu:", bold)),
        Line::from("- Up / Down: move selection"),
        Line::from("- Left / Right or + / -: adjust value"),
        Line::from("- Enter: apply and play"),
        Line::from("- Esc: back to the game"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}
