//! Match-3 engine: an 8×8 board of tokens where swapping two neighbours
//! that forms a run of three or more clears it, drops the tokens above and
//! refills from the top until nothing lines up.

pub mod cascade;
pub mod grid;
pub mod matcher;

pub use cascade::{
    clear_matches, resolve_cascade, score_matches, CascadeFrame, CascadeReport, CascadeStage,
    MAX_CASCADE_ROUNDS, POINTS_PER_CELL,
};
pub use grid::{
    Cell, Coord, Grid, GridError, RandomTokens, ScriptedTokens, Token, TokenSource, GRID_SIZE,
};
pub use matcher::{find_all_matches, has_match, Direction, Match, MIN_RUN};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Default token source: a seeded ChaCha stream.
pub type SeededTokens = RandomTokens<ChaCha8Rng>;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SwapRejection {
    #[error("cell {0} is outside the board")]
    OutOfBounds(Coord),
    #[error("cells {0} and {1} are not neighbours")]
    NotAdjacent(Coord, Coord),
}

/// What a swap gesture did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapOutcome {
    /// Bad coordinates; nothing was touched.
    Rejected(SwapRejection),
    /// The swap formed no run and was put back.
    NoMatch,
    /// The swap stuck and the board was resolved.
    Matched(CascadeReport),
}

impl SwapOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, SwapOutcome::Matched(_))
    }
}

/// Match-3 game state: board, score and combo counter.
#[derive(Debug, Clone)]
pub struct Match3Game<S = SeededTokens> {
    grid: Grid,
    score: u32,
    combos: u32,
    source: S,
}

impl Match3Game<SeededTokens> {
    /// Fresh board from an OS-seeded generator.
    pub fn new() -> Self {
        let seed: u64 = rand::rng().random();
        Self::with_seed(seed)
    }

    /// Fresh board from a fixed seed; the same seed gives the same game.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_source(RandomTokens::new(ChaCha8Rng::seed_from_u64(seed)))
    }
}

impl Default for Match3Game<SeededTokens> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TokenSource> Match3Game<S> {
    /// Fresh board drawn from `source`. The board may already contain runs;
    /// they are cleared by the cascade of the first successful swap.
    pub fn with_source(mut source: S) -> Self {
        let grid = Grid::filled(&mut source);
        Self { grid, score: 0, combos: 0, source }
    }

    /// Start from a prepared board; `source` feeds later refills.
    pub fn from_grid(grid: Grid, source: S) -> Self {
        Self { grid, score: 0, combos: 0, source }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of distinct runs cleared so far, cascades included.
    pub fn combos(&self) -> u32 {
        self.combos
    }

    /// Throw the board away and deal a new one; counters go back to zero.
    pub fn restart(&mut self) {
        self.grid = Grid::filled(&mut self.source);
        self.score = 0;
        self.combos = 0;
        tracing::info!("match-3 board restarted");
    }

    /// Swap two neighbouring cells. Kept only when it forms a run.
    pub fn try_swap(&mut self, a: Coord, b: Coord) -> SwapOutcome {
        self.try_swap_observed(a, b, |_| {})
    }

    /// Like `try_swap`, reporting every clear and refill to `observer` so a
    /// front-end can replay the cascade step by step.
    pub fn try_swap_observed<F>(&mut self, a: Coord, b: Coord, observer: F) -> SwapOutcome
    where
        F: FnMut(&CascadeFrame<'_>),
    {
        if let Err(rejection) = check_swap(a, b) {
            tracing::trace!(%rejection, "swap rejected");
            return SwapOutcome::Rejected(rejection);
        }

        self.grid.swap(a, b);
        if !has_match(&self.grid) {
            self.grid.swap(a, b);
            tracing::trace!(%a, %b, "swap formed no run; reverted");
            return SwapOutcome::NoMatch;
        }

        let report = resolve_cascade(&mut self.grid, &mut self.source, observer);
        self.score = self.score.saturating_add(report.points);
        self.combos = self.combos.saturating_add(report.matches as u32);
        tracing::debug!(
            %a,
            %b,
            rounds = report.rounds,
            points = report.points,
            score = self.score,
            "swap matched"
        );
        SwapOutcome::Matched(report)
    }
}

fn check_swap(a: Coord, b: Coord) -> Result<(), SwapRejection> {
    for at in [a, b] {
        if !at.in_bounds() {
            return Err(SwapRejection::OutOfBounds(at));
        }
    }
    if !a.is_adjacent(b) {
        return Err(SwapRejection::NotAdjacent(a, b));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: [&str; 8] = [
        "ABCDEFAB", "BCDEFABC", "CDEFABCD", "DEFABCDE", "EFABCDEF", "FABCDEFA", "ABCDEFAB",
        "BCDEFABC",
    ];

    fn game(rows: [&str; 8], refill: &[Token]) -> Match3Game<ScriptedTokens> {
        Match3Game::from_grid(
            Grid::from_rows(&rows).unwrap(),
            ScriptedTokens::new(refill.iter().copied()),
        )
    }

    #[test]
    fn seeded_games_are_reproducible() {
        let a = Match3Game::with_seed(11);
        let b = Match3Game::with_seed(11);
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.grid().empty_cells(), 0);
    }

    #[test]
    fn non_adjacent_swap_is_rejected_untouched() {
        let mut g = game(QUIET, &[]);
        let before = g.grid().clone();
        let out = g.try_swap(Coord::new(0, 0), Coord::new(1, 1));
        assert_eq!(
            out,
            SwapOutcome::Rejected(SwapRejection::NotAdjacent(Coord::new(0, 0), Coord::new(1, 1)))
        );
        assert_eq!(g.grid(), &before);
    }

    #[test]
    fn out_of_bounds_swap_is_rejected() {
        let mut g = game(QUIET, &[]);
        let out = g.try_swap(Coord::new(7, 7), Coord::new(7, 8));
        assert_eq!(out, SwapOutcome::Rejected(SwapRejection::OutOfBounds(Coord::new(7, 8))));
    }

    #[test]
    fn swap_without_run_is_reverted() {
        let mut g = game(QUIET, &[]);
        let before = g.grid().clone();
        assert_eq!(g.try_swap(Coord::new(0, 0), Coord::new(0, 1)), SwapOutcome::NoMatch);
        assert_eq!(g.grid(), &before);
        assert_eq!(g.score(), 0);
    }

    #[test]
    fn matching_swap_scores_and_counts_combo() {
        // swapping (0,2) and (0,3) turns "AACA" into "AAAC"
        let mut rows = QUIET;
        rows[0] = "AACAEFAB";
        let mut g = game(rows, &[Token::Ribbon, Token::Blossom, Token::Ribbon]);
        let out = g.try_swap(Coord::new(0, 2), Coord::new(0, 3));
        let SwapOutcome::Matched(report) = out else {
            panic!("expected a match, got {out:?}");
        };
        assert_eq!(report.rounds, 1);
        assert_eq!(g.score(), 30);
        assert_eq!(g.combos(), 1);
        assert!(!has_match(g.grid()));
    }

    #[test]
    fn restart_resets_counters() {
        let mut rows = QUIET;
        rows[0] = "AACAEFAB";
        let mut g = game(rows, &[Token::Ribbon, Token::Blossom, Token::Ribbon]);
        assert!(g.try_swap(Coord::new(0, 2), Coord::new(0, 3)).is_match());
        g.restart();
        assert_eq!(g.score(), 0);
        assert_eq!(g.combos(), 0);
        assert_eq!(g.grid().empty_cells(), 0);
    }
}
