use crate::cards::Suit;
use crate::klondike::{ClickOutcome, DrawOutcome, KlondikeGame, Location, MoveOutcome};
use crate::match3::{Coord, Match3Game, SwapOutcome, GRID_SIZE};
use std::time::{Duration, Instant};

use super::compliments::{
    Complimenter, KLONDIKE_COMPLIMENTS, MATCH3_COMPLIMENTS, MOVE_COMPLIMENT_CHANCE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Match3,
    Klondike,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameChoice {
    Match3,
    Klondike,
}

impl GameChoice {
    pub fn label(self) -> &'static str {
        match self {
            GameChoice::Match3 => "Match-3",
            GameChoice::Klondike => "Klondike",
        }
    }

    pub fn scene(self) -> Scene {
        match self {
            GameChoice::Match3 => Scene::Match3,
            GameChoice::Klondike => Scene::Klondike,
        }
    }
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    Up,
    Down,
    Left,
    Right,
    Activate,
    Cancel,
    Draw,
    Restart,
}

/// Cursor over the klondike table: slot 0 is the stock, 1 the waste,
/// 2..6 the foundations, 6.. the tableau columns. `depth` counts cards up
/// from the end of a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KlondikeCursor {
    pub slot: usize,
    pub depth: usize,
}

impl KlondikeCursor {
    const FIRST_COLUMN: usize = 2 + Suit::ALL.len();
    pub const SLOTS: usize = Self::FIRST_COLUMN + crate::klondike::TABLEAU_COLUMNS;

    pub fn column(self) -> Option<usize> {
        self.slot.checked_sub(Self::FIRST_COLUMN)
    }

    pub fn location(self, game: &KlondikeGame) -> Location {
        match self.slot {
            0 => Location::Stock,
            1 => Location::Waste,
            s if s < Self::FIRST_COLUMN => Location::Foundation(Suit::ALL[s - 2]),
            s => {
                let column = s - Self::FIRST_COLUMN;
                let len = game.column(column).map_or(0, <[_]>::len);
                let index = len.checked_sub(1 + self.depth.min(len.saturating_sub(1)));
                Location::Tableau { column, index }
            }
        }
    }
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    // Core game engine instances
    pub match3: Match3Game,
    pub klondike: KlondikeGame,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_game: GameChoice,
    pub cfg_fixed_seed: bool,
    pub cfg_seed: u64,
    pub cfg_tick_ms: u64,
    // Applied config
    pub active_game: GameChoice,
    pub fixed_seed: Option<u64>,
    pub tick_ms: u64,
    // Match-3 cursor and the first cell of a pending swap
    pub grid_cursor: Coord,
    pub pending_cell: Option<Coord>,
    pub pile_cursor: KlondikeCursor,
    pub complimenter: Complimenter,
    help_open: bool,
    status: Option<String>,
    status_at: Option<Instant>,
    compliment: Option<&'static str>,
    compliment_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        let default_tick = 250;
        Self {
            scene: Scene::Menu,
            match3: Match3Game::new(),
            klondike: KlondikeGame::new(),
            menu_index: 0,
            cfg_game: GameChoice::Match3,
            cfg_fixed_seed: false,
            cfg_seed: 1,
            cfg_tick_ms: default_tick,
            active_game: GameChoice::Match3,
            fixed_seed: None,
            tick_ms: default_tick,
            grid_cursor: Coord::new(0, 0),
            pending_cell: None,
            pile_cursor: KlondikeCursor::default(),
            complimenter: Complimenter::for_seed(None),
            help_open: false,
            status: None,
            status_at: None,
            compliment: None,
            compliment_at: None,
        }
    }
}

impl AppState {
    const STATUS_TTL: Duration = Duration::from_secs(3);

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn set_status(&mut self, msg: String) {
        self.status = Some(msg);
        self.status_at = Some(Instant::now());
    }

    fn clear_status(&mut self) {
        self.status = None;
        self.status_at = None;
    }

    /// The compliment currently on show, if any.
    pub fn compliment(&self) -> Option<&'static str> {
        self.compliment
    }

    fn show_compliment(&mut self, text: Option<&'static str>) {
        if let Some(text) = text {
            tracing::debug!(text, "compliment");
            self.compliment = Some(text);
            self.compliment_at = Some(Instant::now());
        }
    }

    fn clear_compliment(&mut self) {
        self.compliment = None;
        self.compliment_at = None;
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(10))
    }

    /// Called by the controller once per tick with the time since the last one.
    pub fn on_tick(&mut self, dt: Duration) {
        if self.scene == Scene::Klondike && !self.help_open {
            self.klondike.tick(dt);
        }
        if let Some(at) = self.status_at {
            if at.elapsed() >= Self::STATUS_TTL {
                self.clear_status();
            }
        }
        if let Some(at) = self.compliment_at {
            if at.elapsed() >= Self::STATUS_TTL {
                self.clear_compliment();
            }
        }
    }

    /// Returns true when the action changed game state.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene != Scene::Menu {
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::Up => self.move_cursor(-1, 0),
            InputAction::Down => self.move_cursor(1, 0),
            InputAction::Left => self.move_cursor(0, -1),
            InputAction::Right => self.move_cursor(0, 1),
            InputAction::Activate => match self.scene {
                Scene::Match3 => self.match3_activate(),
                Scene::Klondike => self.klondike_activate(),
                Scene::Menu => false,
            },
            InputAction::Cancel => {
                match self.scene {
                    Scene::Match3 => self.pending_cell = None,
                    Scene::Klondike => {
                        if self.klondike.clear_selection() {
                            self.clear_status();
                        }
                    }
                    Scene::Menu => {}
                }
                false
            }
            InputAction::Draw => {
                if self.scene == Scene::Klondike {
                    let out = self.klondike.draw_from_stock();
                    self.report_draw(out);
                    return out != DrawOutcome::Empty;
                }
                false
            }
            InputAction::Restart => {
                if self.scene == Scene::Menu {
                    return false;
                }
                self.restart_game();
                true
            }
        }
    }

    /// New board or new deal for the active game, honouring a fixed seed.
    pub fn restart_game(&mut self) {
        match self.active_game {
            GameChoice::Match3 => {
                self.match3 = self.fixed_seed.map_or_else(Match3Game::new, Match3Game::with_seed);
                self.grid_cursor = Coord::new(0, 0);
                self.pending_cell = None;
            }
            GameChoice::Klondike => {
                match self.fixed_seed {
                    Some(seed) => self.klondike.deal_seeded(seed),
                    None => self.klondike.deal(),
                }
                self.pile_cursor = KlondikeCursor::default();
            }
        }
        self.clear_status();
        self.clear_compliment();
    }

    fn move_cursor(&mut self, d_row: isize, d_col: isize) -> bool {
        match self.scene {
            Scene::Match3 => {
                let step = |v: usize, d: isize| (v as isize + d).clamp(0, GRID_SIZE as isize - 1);
                self.grid_cursor = Coord::new(
                    step(self.grid_cursor.row, d_row) as usize,
                    step(self.grid_cursor.col, d_col) as usize,
                );
            }
            Scene::Klondike => {
                let slots = KlondikeCursor::SLOTS as isize;
                if d_col != 0 {
                    let slot = (self.pile_cursor.slot as isize + d_col).rem_euclid(slots);
                    self.pile_cursor = KlondikeCursor { slot: slot as usize, depth: 0 };
                } else if let Some(column) = self.pile_cursor.column() {
                    // up digs into the face-up run, down comes back to the end
                    let face_up = self
                        .klondike
                        .column(column)
                        .map_or(0, |c| c.iter().filter(|p| p.face_up).count());
                    let depth = self.pile_cursor.depth as isize - d_row;
                    self.pile_cursor.depth =
                        depth.clamp(0, face_up.saturating_sub(1) as isize) as usize;
                }
            }
            Scene::Menu => {}
        }
        false
    }

    fn match3_activate(&mut self) -> bool {
        let here = self.grid_cursor;
        let Some(first) = self.pending_cell.take() else {
            self.pending_cell = Some(here);
            return false;
        };
        if first == here {
            return false;
        }
        // a non-neighbour just drops the pending cell
        match self.match3.try_swap(first, here) {
            SwapOutcome::Matched(report) => {
                let chain = if report.rounds > 1 {
                    format!(" (chain x{})", report.rounds)
                } else {
                    String::new()
                };
                self.set_status(format!(
                    "Cleared {} run(s) for {} points{chain}",
                    report.matches, report.points
                ));
                let text = self.complimenter.pick(&MATCH3_COMPLIMENTS);
                self.show_compliment(text);
                true
            }
            SwapOutcome::NoMatch | SwapOutcome::Rejected(_) => false,
        }
    }

    fn klondike_activate(&mut self) -> bool {
        let location = self.pile_cursor.location(&self.klondike);
        match self.klondike.click(location) {
            ClickOutcome::Drew(out) => {
                self.report_draw(out);
                out != DrawOutcome::Empty
            }
            ClickOutcome::Selected(selection) => {
                self.set_status(format!("Picked up {} card(s)", selection.len()));
                false
            }
            ClickOutcome::Placed(MoveOutcome::Moved(report)) => {
                self.pile_cursor.depth = 0;
                let text = if report.won {
                    self.set_status("Every foundation is complete. You won!".to_string());
                    self.complimenter.pick(&KLONDIKE_COMPLIMENTS)
                } else {
                    self.set_status(format!("Moved {} card(s) to {}", report.cards, report.target));
                    self.complimenter.maybe_pick(&KLONDIKE_COMPLIMENTS, MOVE_COMPLIMENT_CHANCE)
                };
                self.show_compliment(text);
                true
            }
            ClickOutcome::Placed(MoveOutcome::Rejected(_)) | ClickOutcome::Ignored => {
                self.clear_status();
                false
            }
        }
    }

    fn report_draw(&mut self, out: DrawOutcome) {
        match out {
            DrawOutcome::Drew(card) => self.set_status(format!("Drew {card}")),
            DrawOutcome::Recycled(n) => self.set_status(format!("Turned {n} cards back over")),
            DrawOutcome::Empty => self.clear_status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::PileCard;
    use crate::klondike::Layout;

    #[test]
    fn cursor_maps_slots_to_locations() {
        let king = PileCard::up("Ks".parse().unwrap());
        let game = KlondikeGame::from_layout(Layout::default().with_column(0, vec![king])).unwrap();
        let at = |slot, depth| KlondikeCursor { slot, depth }.location(&game);
        assert_eq!(at(0, 0), Location::Stock);
        assert_eq!(at(1, 0), Location::Waste);
        assert_eq!(at(2, 0), Location::Foundation(Suit::Hearts));
        assert_eq!(at(5, 0), Location::Foundation(Suit::Spades));
        assert_eq!(at(6, 0), Location::Tableau { column: 0, index: Some(0) });
        assert_eq!(at(6, 4), Location::Tableau { column: 0, index: Some(0) });
        assert_eq!(at(7, 0), Location::Tableau { column: 1, index: None });
    }

    #[test]
    fn klondike_cursor_wraps_around() {
        let mut app = AppState::default();
        app.cfg_game = GameChoice::Klondike;
        app.apply_menu();
        let _ = app.handle_input(InputAction::Left);
        assert_eq!(app.pile_cursor.slot, KlondikeCursor::SLOTS - 1);
        let _ = app.handle_input(InputAction::Right);
        assert_eq!(app.pile_cursor.slot, 0);
    }
}
