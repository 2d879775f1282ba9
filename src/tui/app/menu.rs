use crate::klondike::KlondikeGame;
use crate::match3::{Coord, Match3Game};

use super::{AppState, Complimenter, GameChoice, KlondikeCursor, Scene};

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Game,
    SeedMode,
    Seed,
    TickMs,
}

const MENU_ITEMS: [MenuItem; 4] = [MenuItem::Game, MenuItem::SeedMode, MenuItem::Seed, MenuItem::TickMs];

const MIN_TICK_MS: u64 = 50;
const MAX_TICK_MS: u64 = 1000;

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::Game => format!("Game: {}", app.cfg_game.label()),
            MenuItem::SeedMode => {
                format!("Deal: {}", if app.cfg_fixed_seed { "fixed seed" } else { "random" })
            }
            MenuItem::Seed if app.cfg_fixed_seed => format!("Seed: {}", app.cfg_seed),
            MenuItem::Seed => format!("Seed: {} (unused)", app.cfg_seed),
            MenuItem::TickMs => format!("Tick (ms): {}", app.cfg_tick_ms),
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::Game | MenuItem::SeedMode => self.toggle(app),
            MenuItem::Seed => app.cfg_seed = app.cfg_seed.wrapping_add(1),
            MenuItem::TickMs => app.cfg_tick_ms = (app.cfg_tick_ms + 50).min(MAX_TICK_MS),
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::Game | MenuItem::SeedMode => self.toggle(app),
            MenuItem::Seed => app.cfg_seed = app.cfg_seed.wrapping_sub(1),
            MenuItem::TickMs => {
                app.cfg_tick_ms = app.cfg_tick_ms.saturating_sub(50).max(MIN_TICK_MS);
            }
        }
    }

    fn toggle(self, app: &mut AppState) {
        match self {
            MenuItem::Game => {
                app.cfg_game = match app.cfg_game {
                    GameChoice::Match3 => GameChoice::Klondike,
                    GameChoice::Klondike => GameChoice::Match3,
                };
            }
            MenuItem::SeedMode => app.cfg_fixed_seed = !app.cfg_fixed_seed,
            MenuItem::Seed | MenuItem::TickMs => {}
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        if self.scene == Scene::Menu {
            self.cancel_menu();
        } else {
            self.open_menu();
        }
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.menu_index = 0;
        self.cfg_game = self.active_game;
        self.cfg_fixed_seed = self.fixed_seed.is_some();
        if let Some(seed) = self.fixed_seed {
            self.cfg_seed = seed;
        }
        self.cfg_tick_ms = self.tick_ms;
        self.scene = Scene::Menu;
    }

    /// Start both games afresh with the edited settings and enter the chosen one.
    pub fn apply_menu(&mut self) {
        self.cfg_tick_ms = self.cfg_tick_ms.clamp(MIN_TICK_MS, MAX_TICK_MS);
        self.active_game = self.cfg_game;
        self.fixed_seed = self.cfg_fixed_seed.then_some(self.cfg_seed);
        self.tick_ms = self.cfg_tick_ms;

        self.match3 = self.fixed_seed.map_or_else(Match3Game::new, Match3Game::with_seed);
        self.klondike = self.fixed_seed.map_or_else(KlondikeGame::new, KlondikeGame::seeded);
        self.grid_cursor = Coord::new(0, 0);
        self.pending_cell = None;
        self.pile_cursor = KlondikeCursor::default();
        self.complimenter = Complimenter::for_seed(self.fixed_seed);
        tracing::info!(
            game = self.active_game.label(),
            seed = ?self.fixed_seed,
            tick_ms = self.tick_ms,
            "settings applied"
        );
        self.scene = self.active_game.scene();
    }

    /// Leave the menu without touching the running games.
    pub fn cancel_menu(&mut self) {
        self.scene = self.active_game.scene();
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
