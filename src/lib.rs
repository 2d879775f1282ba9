//! compliment-arcade: rule engines for two casual games
//!
//! Goals:
//! - A match-3 board and a klondike table as plain owned state structs
//! - Deterministic play from a seed or an injected generator
//! - No panics and no errors for illegal gestures; they come back as values
//!
//! ## Quick start: a klondike move
//! ```
//! use compliment_arcade::cards::{Card, PileCard, Rank, Suit};
//! use compliment_arcade::klondike::{KlondikeGame, Layout, Source, Target};
//!
//! let king = Card::new(Rank::King, Suit::Spades);
//! let layout = Layout::default().with_column(3, vec![PileCard::up(king)]);
//! let mut game = KlondikeGame::from_layout(layout).unwrap();
//!
//! game.select_source(Source::Tableau { column: 3, index: 0 });
//! assert!(game.attempt_place(Target::Tableau(0)).is_moved());
//! assert_eq!(game.score(), 5);
//! ```
//!
//! ## Quick start: a match-3 swap
//! ```
//! use compliment_arcade::match3::{Coord, Match3Game, SwapOutcome};
//!
//! let mut game = Match3Game::with_seed(7);
//! let out = game.try_swap(Coord::new(0, 0), Coord::new(5, 5));
//! assert!(matches!(out, SwapOutcome::Rejected(_)));
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin compliment-arcade
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod klondike;
pub mod match3;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
