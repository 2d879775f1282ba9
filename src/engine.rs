// Engine API boundary. These traits expose each game's gestures and queries
// so front-ends (the TUI, tests) can drive a game without reaching into
// its internals. They are implemented for the concrete game types.

use std::time::Duration;

use crate::cards::{Card, PileCard, Suit};
use crate::klondike::{
    DrawOutcome, KlondikeGame, MoveOutcome, Selection, Source, Target, TABLEAU_COLUMNS,
};
use crate::match3::{Coord, Grid, Match3Game, SwapOutcome, TokenSource};

pub trait Match3Engine {
    // Lifecycle
    fn restart(&mut self);

    // Gestures
    fn try_swap(&mut self, a: Coord, b: Coord) -> SwapOutcome;

    // Queries
    fn grid(&self) -> &Grid;
    fn score(&self) -> u32;
    fn combos(&self) -> u32;
}

impl<S: TokenSource> Match3Engine for Match3Game<S> {
    fn restart(&mut self) {
        self.restart();
    }

    fn try_swap(&mut self, a: Coord, b: Coord) -> SwapOutcome {
        self.try_swap(a, b)
    }

    fn grid(&self) -> &Grid {
        self.grid()
    }
    fn score(&self) -> u32 {
        self.score()
    }
    fn combos(&self) -> u32 {
        self.combos()
    }
}

pub trait KlondikeEngine {
    // Lifecycle
    fn deal(&mut self);

    // Gestures
    fn draw_from_stock(&mut self) -> DrawOutcome;
    fn select_source(&mut self, source: Source) -> Option<Selection>;
    fn attempt_place(&mut self, target: Target) -> MoveOutcome;

    // Queries
    fn stock(&self) -> &[Card];
    fn waste(&self) -> &[Card];
    fn foundation(&self, suit: Suit) -> &[Card];
    fn tableau(&self) -> &[Vec<PileCard>; TABLEAU_COLUMNS];
    fn selection(&self) -> Option<&Selection>;
    fn moves(&self) -> u32;
    fn score(&self) -> u32;
    fn elapsed(&self) -> Duration;
    fn is_won(&self) -> bool;
}

impl KlondikeEngine for KlondikeGame {
    fn deal(&mut self) {
        self.deal();
    }

    fn draw_from_stock(&mut self) -> DrawOutcome {
        self.draw_from_stock()
    }
    fn select_source(&mut self, source: Source) -> Option<Selection> {
        self.select_source(source)
    }
    fn attempt_place(&mut self, target: Target) -> MoveOutcome {
        self.attempt_place(target)
    }

    fn stock(&self) -> &[Card] {
        self.stock()
    }
    fn waste(&self) -> &[Card] {
        self.waste()
    }
    fn foundation(&self, suit: Suit) -> &[Card] {
        self.foundation(suit)
    }
    fn tableau(&self) -> &[Vec<PileCard>; TABLEAU_COLUMNS] {
        self.tableau()
    }
    fn selection(&self) -> Option<&Selection> {
        self.selection()
    }
    fn moves(&self) -> u32 {
        self.moves()
    }
    fn score(&self) -> u32 {
        self.score()
    }
    fn elapsed(&self) -> Duration {
        self.elapsed()
    }
    fn is_won(&self) -> bool {
        self.is_won()
    }
}
