use std::collections::HashSet;

use crate::cards::{Card, PileCard, Suit};

use super::location::TABLEAU_COLUMNS;
use super::rules::is_foundation_run;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LayoutError {
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("{suit} foundation is not an ascending run from the Ace")]
    Foundation { suit: Suit },
    #[error("column {column} has a face-down card above a face-up one")]
    HiddenAboveUp { column: usize },
    #[error("column {column} ends with a face-down card")]
    HiddenTop { column: usize },
}

/// A table position to start a game from. It does not have to hold the
/// whole deck, which makes it handy for practice positions and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    /// Face-down; the last card is drawn first.
    pub stock: Vec<Card>,
    /// Face-up; the last card is on top.
    pub waste: Vec<Card>,
    /// Indexed by `Suit::index`.
    pub foundations: [Vec<Card>; 4],
    pub tableau: [Vec<PileCard>; TABLEAU_COLUMNS],
}

impl Layout {
    pub fn with_stock(mut self, cards: Vec<Card>) -> Self {
        self.stock = cards;
        self
    }

    pub fn with_waste(mut self, cards: Vec<Card>) -> Self {
        self.waste = cards;
        self
    }

    pub fn with_foundation(mut self, suit: Suit, cards: Vec<Card>) -> Self {
        self.foundations[suit.index()] = cards;
        self
    }

    /// Out-of-range columns are ignored.
    pub fn with_column(mut self, column: usize, cards: Vec<PileCard>) -> Self {
        if let Some(col) = self.tableau.get_mut(column) {
            *col = cards;
        }
        self
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        let mut seen = HashSet::new();
        let all = self
            .stock
            .iter()
            .chain(&self.waste)
            .chain(self.foundations.iter().flatten())
            .copied()
            .chain(self.tableau.iter().flatten().map(|p| p.card));
        for card in all {
            if !seen.insert(card) {
                return Err(LayoutError::DuplicateCard(card));
            }
        }

        for suit in Suit::ALL {
            if !is_foundation_run(suit, &self.foundations[suit.index()]) {
                return Err(LayoutError::Foundation { suit });
            }
        }

        for (column, cards) in self.tableau.iter().enumerate() {
            if cards.windows(2).any(|w| w[0].face_up && !w[1].face_up) {
                return Err(LayoutError::HiddenAboveUp { column });
            }
            if cards.last().is_some_and(|c| !c.face_up) {
                return Err(LayoutError::HiddenTop { column });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    #[test]
    fn empty_layout_is_valid() {
        assert_eq!(Layout::default().validate(), Ok(()));
    }

    #[test]
    fn duplicates_are_rejected_across_piles() {
        let layout = Layout::default()
            .with_stock(cards("Ks"))
            .with_column(0, vec![PileCard::up("Ks".parse().unwrap())]);
        assert_eq!(layout.validate(), Err(LayoutError::DuplicateCard("Ks".parse().unwrap())));
    }

    #[test]
    fn foundation_must_climb_from_ace() {
        let layout = Layout::default().with_foundation(Suit::Spades, cards("2s"));
        assert_eq!(layout.validate(), Err(LayoutError::Foundation { suit: Suit::Spades }));
        let layout = Layout::default().with_foundation(Suit::Spades, cards("Ah"));
        assert_eq!(layout.validate(), Err(LayoutError::Foundation { suit: Suit::Spades }));
    }

    #[test]
    fn columns_keep_face_down_cards_underneath() {
        let c = cards("9h 8s");
        let bad = Layout::default().with_column(2, vec![PileCard::up(c[0]), PileCard::down(c[1])]);
        assert!(matches!(bad.validate(), Err(LayoutError::HiddenAboveUp { column: 2 })));
        let hidden = Layout::default().with_column(4, vec![PileCard::down(c[0])]);
        assert_eq!(hidden.validate(), Err(LayoutError::HiddenTop { column: 4 }));
        let ok = Layout::default().with_column(3, vec![PileCard::down(c[0]), PileCard::up(c[1])]);
        assert_eq!(ok.validate(), Ok(()));
    }
}
