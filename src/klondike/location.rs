use std::fmt;

use crate::cards::{Card, Suit};

/// Number of tableau columns.
pub const TABLEAU_COLUMNS: usize = 7;

/// Where a selection is picked up from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// The top waste card.
    Waste,
    /// The run starting at `index` down to the visible end of `column`.
    Tableau { column: usize, index: usize },
}

/// Where a selection is put down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Tableau(usize),
    Foundation(Suit),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Tableau(c) => write!(f, "column {}", c + 1),
            Target::Foundation(s) => write!(f, "{} foundation", s.symbol()),
        }
    }
}

/// Anything on the table a player can click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    Stock,
    Waste,
    Foundation(Suit),
    /// A card in a column, or the column itself (`index: None`) when empty.
    Tableau { column: usize, index: Option<usize> },
}

/// A picked-up card or run waiting for a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub(crate) source: Source,
    pub(crate) cards: Vec<Card>,
}

impl Selection {
    pub fn source(&self) -> Source {
        self.source
    }

    /// Cards in column order: the picked card first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
