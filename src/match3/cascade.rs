use std::collections::HashSet;

use super::grid::{Coord, Grid, TokenSource};
use super::matcher::{find_all_matches, Match};

/// Points awarded per matched cell, counted once per match it belongs to.
pub const POINTS_PER_CELL: u32 = 10;

/// Upper bound on clear/refill rounds for a single resolution.
pub const MAX_CASCADE_ROUNDS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeStage {
    /// Matched cells were just emptied.
    Cleared,
    /// Columns were compacted and refilled.
    Refilled,
}

/// Snapshot handed to a cascade observer. Purely informational.
#[derive(Debug, Clone, Copy)]
pub struct CascadeFrame<'a> {
    pub round: usize,
    pub stage: CascadeStage,
    pub grid: &'a Grid,
    pub matches: &'a [Match],
}

/// Totals for one full resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeReport {
    pub rounds: usize,
    pub matches: usize,
    pub matched_cells: usize,
    pub cleared_cells: usize,
    pub points: u32,
    /// False only when `MAX_CASCADE_ROUNDS` cut resolution short.
    pub settled: bool,
}

/// Points for a batch of matches: ten per cell per match.
pub fn score_matches(matches: &[Match]) -> u32 {
    let cells: usize = matches.iter().map(Match::len).sum();
    POINTS_PER_CELL * cells as u32
}

/// Empty every matched cell. Returns the number of distinct cells emptied.
pub fn clear_matches(grid: &mut Grid, matches: &[Match]) -> usize {
    let cells: HashSet<Coord> = matches.iter().flat_map(|m| m.cells().iter().copied()).collect();
    for &at in &cells {
        grid.set(at, None);
    }
    cells.len()
}

/// Clear, drop, refill and re-match until the board is stable.
///
/// Every round's matches are scored, so chain reactions add to the report.
pub fn resolve_cascade<S, F>(grid: &mut Grid, source: &mut S, mut observer: F) -> CascadeReport
where
    S: TokenSource + ?Sized,
    F: FnMut(&CascadeFrame<'_>),
{
    let mut report = CascadeReport { settled: true, ..CascadeReport::default() };
    let mut matches = find_all_matches(grid);
    while !matches.is_empty() {
        if report.rounds == MAX_CASCADE_ROUNDS {
            tracing::warn!(rounds = report.rounds, "cascade hit round limit; leaving board unsettled");
            report.settled = false;
            break;
        }
        report.rounds += 1;
        report.matches += matches.len();
        report.matched_cells += matches.iter().map(Match::len).sum::<usize>();
        report.points += score_matches(&matches);
        report.cleared_cells += clear_matches(grid, &matches);
        observer(&CascadeFrame {
            round: report.rounds,
            stage: CascadeStage::Cleared,
            grid: &*grid,
            matches: &matches,
        });

        grid.collapse_and_refill(source);
        observer(&CascadeFrame {
            round: report.rounds,
            stage: CascadeStage::Refilled,
            grid: &*grid,
            matches: &matches,
        });
        tracing::trace!(round = report.rounds, matches = matches.len(), "cascade round");
        matches = find_all_matches(grid);
    }
    report
}
