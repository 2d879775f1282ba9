use crate::cards::{Card, PileCard, Rank, Suit};

/// Can `card` (the first card of a moving run) land on a column whose top is `top`?
/// Empty columns only take Kings; otherwise opposite colour, one rank lower.
pub fn can_stack_tableau(top: Option<PileCard>, card: Card) -> bool {
    match top {
        None => card.rank() == Rank::King,
        Some(top) => {
            top.face_up
                && top.card.color() != card.color()
                && top.card.rank().value() == card.rank().value() + 1
        }
    }
}

/// Can `card` go onto the `suit` foundation whose top is `top`?
pub fn can_stack_foundation(suit: Suit, top: Option<Card>, card: Card) -> bool {
    if card.suit() != suit {
        return false;
    }
    match top {
        None => card.rank() == Rank::Ace,
        Some(top) => top.rank().next() == Some(card.rank()),
    }
}

/// A movable tableau run: every card face-up, colours alternating and ranks
/// dropping by exactly one from the first card to the last.
///
/// ```
/// use compliment_arcade::cards::{parse_cards, PileCard};
/// use compliment_arcade::klondike::rules::is_alternating_run;
///
/// let run: Vec<PileCard> = parse_cards("7s 6h 5c").unwrap().into_iter().map(PileCard::up).collect();
/// assert!(is_alternating_run(&run));
/// ```
pub fn is_alternating_run(cards: &[PileCard]) -> bool {
    cards.iter().all(|c| c.face_up)
        && cards.windows(2).all(|pair| {
            let (a, b) = (pair[0].card, pair[1].card);
            a.color() != b.color() && a.rank().value() == b.rank().value() + 1
        })
}

/// A legal foundation pile: `suit` only, ascending from Ace with no gaps.
pub fn is_foundation_run(suit: Suit, cards: &[Card]) -> bool {
    cards
        .iter()
        .enumerate()
        .all(|(i, c)| c.suit() == suit && usize::from(c.rank().value()) == i + 1)
}
