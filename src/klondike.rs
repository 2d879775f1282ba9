//! Klondike engine: one deal of patience with a single-card draw, unlimited
//! recycling of the waste, and click-to-pick / click-to-place moves.

pub mod layout;
pub mod location;
pub mod rules;

pub use layout::{Layout, LayoutError};
pub use location::{Location, Selection, Source, Target, TABLEAU_COLUMNS};

use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::cards::{Card, PileCard, Suit};
use crate::deck::Deck;
use rules::{can_stack_foundation, can_stack_tableau, is_alternating_run};

/// Points for any successful move onto a tableau column.
pub const TABLEAU_POINTS: u32 = 5;
/// Points for any successful move onto a foundation.
pub const FOUNDATION_POINTS: u32 = 10;
/// Cards per suit; a full foundation.
pub const SUIT_SIZE: usize = 13;

/// Result of clicking the stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// One card turned onto the waste.
    Drew(Card),
    /// The waste was turned back over into the stock.
    Recycled(usize),
    /// Nothing left to draw or recycle.
    Empty,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum MoveRejection {
    #[error("nothing is selected")]
    NoSelection,
    #[error("the game is already won")]
    GameOver,
    #[error("there is no column {0}")]
    NoSuchColumn(usize),
    #[error("cards are already in that column")]
    SameColumn,
    #[error("only a King can fill an empty column, not {0}")]
    NeedsKing(Card),
    #[error("{card} does not go on {onto}")]
    TableauMismatch { card: Card, onto: Card },
    #[error("only single cards go to a foundation")]
    RunToFoundation,
    #[error("{card} does not go on the {} foundation", .suit.symbol())]
    FoundationMismatch { card: Card, suit: Suit },
}

/// A move that happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub target: Target,
    pub cards: usize,
    pub points: u32,
    /// Card turned face-up in the source column, if any.
    pub revealed: Option<Card>,
    /// True only for the move that completed the last foundation.
    pub won: bool,
}

/// What a placement attempt did. Rejections leave the table untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved(MoveReport),
    Rejected(MoveRejection),
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved(_))
    }
}

/// What a click on the table did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Drew(DrawOutcome),
    Selected(Selection),
    Placed(MoveOutcome),
    Ignored,
}

/// Full klondike table plus move/score/clock counters.
#[derive(Debug, Clone)]
pub struct KlondikeGame {
    stock: Vec<Card>,
    waste: Vec<Card>,
    foundations: [Vec<Card>; 4],
    tableau: [Vec<PileCard>; TABLEAU_COLUMNS],
    selection: Option<Selection>,
    moves: u32,
    score: u32,
    elapsed: Duration,
    won: bool,
    seed: Option<u64>,
}

impl Default for KlondikeGame {
    fn default() -> Self {
        Self::new()
    }
}

impl KlondikeGame {
    /// A freshly dealt game from a random seed.
    pub fn new() -> Self {
        let mut game = Self::blank();
        game.deal();
        game
    }

    /// A freshly dealt game; the same seed always gives the same deal.
    pub fn seeded(seed: u64) -> Self {
        let mut game = Self::blank();
        game.deal_seeded(seed);
        game
    }

    /// Start from a prepared position. Counters start at zero.
    pub fn from_layout(layout: Layout) -> Result<Self, LayoutError> {
        layout.validate()?;
        let mut game = Self::blank();
        game.stock = layout.stock;
        game.waste = layout.waste;
        game.foundations = layout.foundations;
        game.tableau = layout.tableau;
        game.won = game.foundations_complete();
        Ok(game)
    }

    fn blank() -> Self {
        Self {
            stock: Vec::new(),
            waste: Vec::new(),
            foundations: Default::default(),
            tableau: Default::default(),
            selection: None,
            moves: 0,
            score: 0,
            elapsed: Duration::ZERO,
            won: false,
            seed: None,
        }
    }

    /// Shuffle a new deck and deal it out from a random seed.
    pub fn deal(&mut self) {
        let seed: u64 = rand::rng().random();
        self.deal_seeded(seed);
    }

    pub fn deal_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.deal_with(&mut rng);
        self.seed = Some(seed);
    }

    /// Shuffle with `rng` and deal: column `i` gets `i + 1` cards with only
    /// the last one face-up, the rest of the deck becomes the stock.
    pub fn deal_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut deck = Deck::standard();
        deck.shuffle_with(rng);
        let mut cards = deck.into_cards();
        let dealt = TABLEAU_COLUMNS * (TABLEAU_COLUMNS + 1) / 2;
        let stock = cards.split_off(dealt);

        *self = Self::blank();
        let mut next = cards.into_iter();
        for (col, pile) in self.tableau.iter_mut().enumerate() {
            for row in 0..=col {
                if let Some(card) = next.next() {
                    pile.push(if row == col { PileCard::up(card) } else { PileCard::down(card) });
                }
            }
        }
        self.stock = stock;
        debug_assert_eq!(self.cards_in_play().len(), 52);
        tracing::info!(stock = self.stock.len(), "klondike dealt");
    }

    pub fn stock(&self) -> &[Card] {
        &self.stock
    }

    pub fn waste(&self) -> &[Card] {
        &self.waste
    }

    pub fn waste_top(&self) -> Option<Card> {
        self.waste.last().copied()
    }

    pub fn foundation(&self, suit: Suit) -> &[Card] {
        &self.foundations[suit.index()]
    }

    pub fn tableau(&self) -> &[Vec<PileCard>; TABLEAU_COLUMNS] {
        &self.tableau
    }

    pub fn column(&self, column: usize) -> Option<&[PileCard]> {
        self.tableau.get(column).map(Vec::as_slice)
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Seed of the current deal, when it came from one.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Every card on the table, pile by pile.
    pub fn cards_in_play(&self) -> Vec<Card> {
        self.stock
            .iter()
            .chain(&self.waste)
            .chain(self.foundations.iter().flatten())
            .copied()
            .chain(self.tableau.iter().flatten().map(|p| p.card))
            .collect()
    }

    /// Advance the game clock. The clock stops once the game is won.
    pub fn tick(&mut self, dt: Duration) {
        if !self.won {
            self.elapsed += dt;
        }
    }

    /// Turn one stock card onto the waste, or recycle the waste when the
    /// stock is empty. Both count as a move. Drops any pending selection.
    /// Does nothing once the game is won.
    pub fn draw_from_stock(&mut self) -> DrawOutcome {
        self.selection = None;
        if self.won {
            return DrawOutcome::Empty;
        }
        if let Some(card) = self.stock.pop() {
            self.waste.push(card);
            self.moves += 1;
            tracing::debug!(%card, stock = self.stock.len(), "drew from stock");
            return DrawOutcome::Drew(card);
        }
        if self.waste.is_empty() {
            return DrawOutcome::Empty;
        }
        let count = self.waste.len();
        self.stock = self.waste.drain(..).rev().collect();
        self.moves += 1;
        tracing::debug!(count, "recycled waste into stock");
        DrawOutcome::Recycled(count)
    }

    /// Pick up the waste top or a tableau run. Replaces any pending
    /// selection; an illegal pick leaves nothing selected.
    pub fn select_source(&mut self, source: Source) -> Option<Selection> {
        self.selection = if self.won { None } else { self.selection_at(source) };
        if self.selection.is_none() {
            tracing::trace!(?source, "nothing selectable");
        }
        self.selection.clone()
    }

    fn selection_at(&self, source: Source) -> Option<Selection> {
        let cards = match source {
            Source::Waste => vec![self.waste_top()?],
            Source::Tableau { column, index } => {
                let tail = self.tableau.get(column)?.get(index..)?;
                if tail.is_empty() || !is_alternating_run(tail) {
                    return None;
                }
                tail.iter().map(|p| p.card).collect()
            }
        };
        Some(Selection { source, cards })
    }

    /// Drop the pending selection. Returns whether there was one.
    pub fn clear_selection(&mut self) -> bool {
        self.selection.take().is_some()
    }

    /// Put the pending selection on `target`. The selection is always
    /// cleared, whether or not the move happens.
    pub fn attempt_place(&mut self, target: Target) -> MoveOutcome {
        let Some(selection) = self.selection.take() else {
            return MoveOutcome::Rejected(MoveRejection::NoSelection);
        };
        let result = if self.won {
            Err(MoveRejection::GameOver)
        } else {
            match target {
                Target::Tableau(column) => self.place_on_tableau(&selection, column),
                Target::Foundation(suit) => self.place_on_foundation(&selection, suit),
            }
        };
        match result {
            Ok(report) => {
                tracing::debug!(
                    %target,
                    cards = report.cards,
                    score = self.score,
                    moves = self.moves,
                    "placed selection"
                );
                MoveOutcome::Moved(report)
            }
            Err(rejection) => {
                tracing::trace!(%rejection, "placement rejected");
                MoveOutcome::Rejected(rejection)
            }
        }
    }

    fn place_on_tableau(
        &mut self,
        selection: &Selection,
        column: usize,
    ) -> Result<MoveReport, MoveRejection> {
        let top = self.tableau.get(column).ok_or(MoveRejection::NoSuchColumn(column))?.last();
        if matches!(selection.source, Source::Tableau { column: c, .. } if c == column) {
            return Err(MoveRejection::SameColumn);
        }
        let first = *selection.cards.first().ok_or(MoveRejection::NoSelection)?;
        if !can_stack_tableau(top.copied(), first) {
            return Err(match top {
                None => MoveRejection::NeedsKing(first),
                Some(top) => MoveRejection::TableauMismatch { card: first, onto: top.card },
            });
        }

        let revealed = self.take_from_source(selection.source);
        self.tableau[column].extend(selection.cards.iter().copied().map(PileCard::up));
        self.moves += 1;
        self.score += TABLEAU_POINTS;
        Ok(MoveReport {
            target: Target::Tableau(column),
            cards: selection.len(),
            points: TABLEAU_POINTS,
            revealed,
            won: false,
        })
    }

    fn place_on_foundation(
        &mut self,
        selection: &Selection,
        suit: Suit,
    ) -> Result<MoveReport, MoveRejection> {
        let &[card] = selection.cards.as_slice() else {
            return Err(MoveRejection::RunToFoundation);
        };
        let top = self.foundations[suit.index()].last().copied();
        if !can_stack_foundation(suit, top, card) {
            return Err(MoveRejection::FoundationMismatch { card, suit });
        }

        let revealed = self.take_from_source(selection.source);
        self.foundations[suit.index()].push(card);
        self.moves += 1;
        self.score += FOUNDATION_POINTS;
        let won = self.check_win();
        Ok(MoveReport {
            target: Target::Foundation(suit),
            cards: 1,
            points: FOUNDATION_POINTS,
            revealed,
            won,
        })
    }

    /// Remove the selected cards from where they came from, turning up the
    /// newly exposed column card. Returns that card if one was turned.
    fn take_from_source(&mut self, source: Source) -> Option<Card> {
        match source {
            Source::Waste => {
                self.waste.pop();
                None
            }
            Source::Tableau { column, index } => {
                let pile = &mut self.tableau[column];
                pile.truncate(index);
                match pile.last_mut() {
                    Some(top) if !top.face_up => {
                        top.face_up = true;
                        Some(top.card)
                    }
                    _ => None,
                }
            }
        }
    }

    fn foundations_complete(&self) -> bool {
        self.foundations.iter().all(|f| f.len() == SUIT_SIZE)
    }

    /// Latch the win flag; true only on the transition.
    fn check_win(&mut self) -> bool {
        if self.won || !self.foundations_complete() {
            return false;
        }
        self.won = true;
        tracing::info!(moves = self.moves, score = self.score, "klondike won");
        true
    }

    /// Dispatch a click the way the table reacts to a pointer:
    /// the stock draws, the waste picks up its top card, and any other
    /// click either picks up (nothing selected) or places (something is).
    pub fn click(&mut self, location: Location) -> ClickOutcome {
        match (location, self.selection.is_some()) {
            (Location::Stock, _) => ClickOutcome::Drew(self.draw_from_stock()),
            (Location::Waste, _) => self.select_or_ignore(Source::Waste),
            (Location::Foundation(suit), true) => {
                ClickOutcome::Placed(self.attempt_place(Target::Foundation(suit)))
            }
            (Location::Tableau { column, .. }, true) => {
                ClickOutcome::Placed(self.attempt_place(Target::Tableau(column)))
            }
            (Location::Tableau { column, index: Some(index) }, false) => {
                self.select_or_ignore(Source::Tableau { column, index })
            }
            (Location::Foundation(_), false) | (Location::Tableau { index: None, .. }, false) => {
                ClickOutcome::Ignored
            }
        }
    }

    fn select_or_ignore(&mut self, source: Source) -> ClickOutcome {
        // an empty waste keeps whatever was already picked up
        if source == Source::Waste && self.waste.is_empty() {
            return ClickOutcome::Ignored;
        }
        match self.select_source(source) {
            Some(selection) => ClickOutcome::Selected(selection),
            None => ClickOutcome::Ignored,
        }
    }
}
