use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const MATCH3_COMPLIMENTS: [&str; 5] = [
    "Well done! You're simply brilliant! ✨",
    "Magnificent! You're doing wonderfully! 💫",
    "Amazing! You're getting really good at this! 🌸",
    "Bravo! Your skills are impressive! 💖",
    "Wonderful! You find the best combinations! 🌟",
];

pub const KLONDIKE_COMPLIMENTS: [&str; 5] = [
    "Excellent! You're a true card genius! ♠️",
    "Brilliant move! ♥️",
    "Amazing! Top-notch strategy! ♦️",
    "Well done! Your skills are impressive! ♣️",
    "Perfect! You were born for this game! 💫",
];

/// Chance that an ordinary card move earns a compliment.
pub const MOVE_COMPLIMENT_CHANCE: f64 = 0.15;

/// Picks compliments uniformly from a fixed list.
#[derive(Debug, Clone)]
pub struct Complimenter<R = ChaCha8Rng> {
    rng: R,
}

impl Complimenter<ChaCha8Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Seeded from `seed` when given, from the OS otherwise.
    pub fn for_seed(seed: Option<u64>) -> Self {
        Self::seeded(seed.unwrap_or_else(|| rand::rng().random()))
    }
}

impl<R: Rng> Complimenter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn pick(&mut self, list: &[&'static str]) -> Option<&'static str> {
        if list.is_empty() {
            return None;
        }
        Some(list[self.rng.random_range(0..list.len())])
    }

    /// Like `pick`, but only with probability `chance`.
    pub fn maybe_pick(&mut self, list: &[&'static str], chance: f64) -> Option<&'static str> {
        if !self.rng.random_bool(chance.clamp(0.0, 1.0)) {
            return None;
        }
        self.pick(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_come_from_the_list() {
        let mut c = Complimenter::seeded(5);
        for _ in 0..50 {
            let pick = c.pick(&MATCH3_COMPLIMENTS).unwrap();
            assert!(MATCH3_COMPLIMENTS.contains(&pick));
        }
        assert_eq!(c.pick(&[]), None);
    }

    #[test]
    fn same_seed_same_picks() {
        let mut a = Complimenter::seeded(9);
        let mut b = Complimenter::seeded(9);
        for _ in 0..10 {
            assert_eq!(a.pick(&KLONDIKE_COMPLIMENTS), b.pick(&KLONDIKE_COMPLIMENTS));
        }
    }

    #[test]
    fn chance_bounds_are_respected() {
        let mut c = Complimenter::seeded(1);
        assert!((0..50).all(|_| c.maybe_pick(&KLONDIKE_COMPLIMENTS, 0.0).is_none()));
        assert!((0..50).all(|_| c.maybe_pick(&KLONDIKE_COMPLIMENTS, 1.0).is_some()));
    }

    #[test]
    fn move_chance_is_rare_but_real() {
        let mut c = Complimenter::seeded(3);
        let hits = (0..2000)
            .filter(|_| c.maybe_pick(&KLONDIKE_COMPLIMENTS, MOVE_COMPLIMENT_CHANCE).is_some())
            .count();
        assert!((150..450).contains(&hits), "hits = {hits}");
    }
}
