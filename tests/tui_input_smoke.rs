use compliment_arcade::cards::{Card, PileCard, Rank, Suit};
use compliment_arcade::klondike::{KlondikeGame, Layout};
use compliment_arcade::match3::{Grid, Match3Game, RandomTokens};
use compliment_arcade::tui::app::{
    AppState, GameChoice, InputAction, Scene, KLONDIKE_COMPLIMENTS, MATCH3_COMPLIMENTS,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn setup_app(game: GameChoice) -> AppState {
    let mut app = AppState::default();
    app.cfg_game = game;
    app.cfg_fixed_seed = true;
    app.cfg_seed = 7;
    app.apply_menu();
    app
}

#[test]
fn menu_navigation_and_apply() {
    let mut app = AppState::default();
    assert!(matches!(app.scene, Scene::Menu));
    let start = app.menu_index;
    let _ = app.handle_input(InputAction::MenuNext);
    assert_ne!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuPrev);
    assert_eq!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuInc);
    assert_eq!(app.cfg_game, GameChoice::Klondike);
    let _ = app.handle_input(InputAction::MenuApply);
    assert!(matches!(app.scene, Scene::Klondike));
}

#[test]
fn help_toggle_and_menu_round_trip() {
    let mut app = setup_app(GameChoice::Match3);
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(app.help_open());
    let _ = app.handle_input(InputAction::ToggleMenu);
    assert!(!app.help_open());
    assert!(matches!(app.scene, Scene::Menu));
    let _ = app.handle_input(InputAction::MenuCancel);
    assert!(matches!(app.scene, Scene::Match3));
}

#[test]
fn match3_pick_then_cancel() {
    let mut app = setup_app(GameChoice::Match3);
    let _ = app.handle_input(InputAction::Right);
    let _ = app.handle_input(InputAction::Down);
    let at = app.grid_cursor;
    assert_eq!((at.row, at.col), (1, 1));
    assert!(!app.handle_input(InputAction::Activate));
    assert_eq!(app.pending_cell, Some(at));
    let _ = app.handle_input(InputAction::Cancel);
    assert_eq!(app.pending_cell, None);

    // cursor stays on the board
    for _ in 0..20 {
        let _ = app.handle_input(InputAction::Up);
        let _ = app.handle_input(InputAction::Left);
    }
    assert_eq!((app.grid_cursor.row, app.grid_cursor.col), (0, 0));
}

#[test]
fn klondike_draw_and_restart() {
    let mut app = setup_app(GameChoice::Klondike);
    assert_eq!(app.klondike.seed(), Some(7));
    assert!(app.handle_input(InputAction::Draw));
    assert_eq!(app.klondike.waste().len(), 1);
    assert_eq!(app.klondike.moves(), 1);
    assert!(app.status().is_some());

    // the stock slot is under the cursor after a deal
    assert!(app.handle_input(InputAction::Activate));
    assert_eq!(app.klondike.waste().len(), 2);

    assert!(app.handle_input(InputAction::Restart));
    assert_eq!(app.klondike.moves(), 0);
    assert!(app.klondike.waste().is_empty());
    assert_eq!(app.klondike.seed(), Some(7));
}

#[test]
fn klondike_clock_runs_only_in_its_scene() {
    let mut app = setup_app(GameChoice::Klondike);
    app.on_tick(std::time::Duration::from_secs(1));
    assert_eq!(app.klondike.elapsed().as_secs(), 1);
    let _ = app.handle_input(InputAction::ToggleMenu);
    app.on_tick(std::time::Duration::from_secs(1));
    assert_eq!(app.klondike.elapsed().as_secs(), 1);
}

#[test]
fn a_match_earns_a_compliment() {
    let mut app = setup_app(GameChoice::Match3);
    let grid = Grid::from_rows(&[
        "AACAEFAB", "BCDEFABC", "CDEFABCD", "DEFABCDE", "EFABCDEF", "FABCDEFA", "ABCDEFAB",
        "BCDEFABC",
    ])
    .unwrap();
    app.match3 = Match3Game::from_grid(grid, RandomTokens::new(ChaCha8Rng::seed_from_u64(3)));
    assert_eq!(app.compliment(), None);

    // swap (0,2) with (0,3) to line up three hearts
    let _ = app.handle_input(InputAction::Right);
    let _ = app.handle_input(InputAction::Right);
    let _ = app.handle_input(InputAction::Activate);
    let _ = app.handle_input(InputAction::Right);
    assert!(app.handle_input(InputAction::Activate));

    assert!(app.match3.score() >= 30);
    let text = app.compliment().expect("a match always compliments");
    assert!(MATCH3_COMPLIMENTS.contains(&text), "{text}");
}

#[test]
fn winning_earns_a_compliment() {
    let mut app = setup_app(GameChoice::Klondike);
    let mut layout = Layout::default().with_waste(vec![Card::new(Rank::King, Suit::Spades)]);
    for suit in Suit::ALL {
        let top = if suit == Suit::Spades { 12 } else { 13 };
        let run = Rank::ALL[..top].iter().map(|&r| Card::new(r, suit)).collect();
        layout = layout.with_foundation(suit, run);
    }
    app.klondike = KlondikeGame::from_layout(layout).unwrap();

    // waste is slot 1, the spades foundation slot 5
    let _ = app.handle_input(InputAction::Right);
    let _ = app.handle_input(InputAction::Activate);
    for _ in 0..4 {
        let _ = app.handle_input(InputAction::Right);
    }
    assert!(app.handle_input(InputAction::Activate));

    assert!(app.klondike.is_won());
    let text = app.compliment().expect("a win always compliments");
    assert!(KLONDIKE_COMPLIMENTS.contains(&text), "{text}");
}

#[test]
fn escape_puts_klondike_cards_back() {
    let mut app = setup_app(GameChoice::Klondike);
    let king = Card::new(Rank::King, Suit::Spades);
    let layout = Layout::default().with_column(1, vec![PileCard::up(king)]);
    app.klondike = KlondikeGame::from_layout(layout).unwrap();

    // column 2 (index 1) sits at slot 7
    for _ in 0..7 {
        let _ = app.handle_input(InputAction::Right);
    }
    let _ = app.handle_input(InputAction::Activate);
    assert_eq!(app.klondike.selection().map(|s| s.len()), Some(1));

    let _ = app.handle_input(InputAction::Cancel);
    assert!(app.klondike.selection().is_none());
    assert_eq!(app.klondike.column(1).unwrap(), &[PileCard::up(king)]);

    // nothing is carried over to the next click
    let _ = app.handle_input(InputAction::Left);
    let _ = app.handle_input(InputAction::Activate);
    assert_eq!(app.klondike.moves(), 0);
}
