use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Instant;

pub fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut AppState) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // re-read each pass so a menu change takes effect at once
        let tick_rate = app.tick_rate();
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release && handle_key(app, key.code) {
                    break;
                }
            }
        }

        let since = last_tick.elapsed();
        if since >= tick_rate {
            app.on_tick(since);
            last_tick = Instant::now();
        }
    }
    tracing::info!("tui closed");
    Ok(())
}

/// Map a key to an action for the current scene. Returns true to quit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    if matches!(code, KeyCode::Char('?')) {
        let _ = app.handle_input(InputAction::ToggleHelp);
        return false;
    }
    if app.help_open() {
        if matches!(code, KeyCode::Esc) {
            let _ = app.handle_input(InputAction::ToggleHelp);
        }
        return false;
    }

    let action = match app.scene {
        Scene::Menu => match code {
            KeyCode::Up => InputAction::MenuPrev,
            KeyCode::Down => InputAction::MenuNext,
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => InputAction::MenuInc,
            KeyCode::Left | KeyCode::Char('-') | KeyCode::Char('_') => InputAction::MenuDec,
            KeyCode::Enter => InputAction::MenuApply,
            KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M') => InputAction::MenuCancel,
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            _ => return false,
        },
        Scene::Match3 | Scene::Klondike => match code {
            KeyCode::Up | KeyCode::Char('k') => InputAction::Up,
            KeyCode::Down | KeyCode::Char('j') => InputAction::Down,
            KeyCode::Left | KeyCode::Char('h') => InputAction::Left,
            KeyCode::Right | KeyCode::Char('l') => InputAction::Right,
            KeyCode::Enter | KeyCode::Char(' ') => InputAction::Activate,
            KeyCode::Esc => InputAction::Cancel,
            KeyCode::Char('d') | KeyCode::Char('D') => InputAction::Draw,
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char('n') | KeyCode::Char('N') => {
                InputAction::Restart
            }
            KeyCode::Char('m') | KeyCode::Char('M') => InputAction::ToggleMenu,
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            _ => return false,
        },
    };
    let _ = app.handle_input(action);
    false
}
