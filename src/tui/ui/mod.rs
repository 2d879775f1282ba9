mod help;
mod klondike;
mod layout;
mod match3;
mod menu;

use crate::tui::app::{AppState, Scene};
use ratatui::prelude::Frame;

pub fn draw(f: &mut Frame, app: &AppState) {
    match app.scene {
        Scene::Menu => menu::draw_menu(f, app),
        Scene::Match3 => match3::draw_match3(f, app),
        Scene::Klondike => klondike::draw_klondike(f, app),
    }
    if app.help_open() {
        help::draw_help(f);
    }
}
