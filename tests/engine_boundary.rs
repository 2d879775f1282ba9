use compliment_arcade::cards::{Card, PileCard};
use compliment_arcade::engine::{KlondikeEngine, Match3Engine};
use compliment_arcade::klondike::{DrawOutcome, KlondikeGame, Layout, Source, Target};
use compliment_arcade::match3::{Coord, Grid, Match3Game, ScriptedTokens, Token};

fn play_king_home<E: KlondikeEngine>(engine: &mut E) -> u32 {
    let _ = engine.select_source(Source::Waste);
    let _ = engine.attempt_place(Target::Tableau(6));
    engine.score()
}

fn swap_and_score<E: Match3Engine>(engine: &mut E, a: Coord, b: Coord) -> (u32, u32) {
    let _ = engine.try_swap(a, b);
    (engine.score(), engine.combos())
}

#[test]
fn klondike_through_the_trait() {
    let king: Card = "Kc".parse().unwrap();
    let layout = Layout::default().with_waste(vec![king]);
    let mut game = KlondikeGame::from_layout(layout).unwrap();
    assert_eq!(play_king_home(&mut game), 5);
    assert_eq!(KlondikeEngine::tableau(&game)[6], vec![PileCard::up(king)]);
    assert_eq!(KlondikeEngine::moves(&game), 1);

    KlondikeEngine::deal(&mut game);
    assert_eq!(KlondikeEngine::stock(&game).len(), 24);
    assert_eq!(KlondikeEngine::score(&game), 0);
    assert!(matches!(KlondikeEngine::draw_from_stock(&mut game), DrawOutcome::Drew(_)));
    assert_eq!(KlondikeEngine::waste(&game).len(), 1);
}

#[test]
fn match3_through_the_trait() {
    let grid = Grid::from_rows(&[
        "AACAEFAB", "BCDEFABC", "CDEFABCD", "DEFABCDE", "EFABCDEF", "FABCDEFA", "ABCDEFAB",
        "BCDEFABC",
    ])
    .unwrap();
    let refill = ScriptedTokens::new([Token::Ribbon, Token::Blossom, Token::Ribbon]);
    let mut game = Match3Game::from_grid(grid, refill);
    assert_eq!(swap_and_score(&mut game, Coord::new(0, 2), Coord::new(0, 3)), (30, 1));

    Match3Engine::restart(&mut game);
    assert_eq!(Match3Engine::score(&game), 0);
    assert_eq!(Match3Engine::grid(&game).empty_cells(), 0);
}
