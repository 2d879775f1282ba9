use super::grid::{Coord, Grid, Token, GRID_SIZE};

/// Shortest run that counts as a match.
pub const MIN_RUN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    fn step(self, at: Coord, n: usize) -> Coord {
        match self {
            Direction::Horizontal => Coord::new(at.row, at.col + n),
            Direction::Vertical => Coord::new(at.row + n, at.col),
        }
    }
}

/// A maximal contiguous run of one token, ordered from its first cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    token: Token,
    direction: Direction,
    cells: Vec<Coord>,
}

impl Match {
    pub fn token(&self) -> Token {
        self.token
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, at: Coord) -> bool {
        self.cells.contains(&at)
    }
}

/// Every horizontal run (rows top to bottom), then every vertical run
/// (columns left to right). Empty cells never match. A cell may belong to
/// one horizontal and one vertical match at the same time.
///
/// ```
/// use compliment_arcade::match3::{find_all_matches, Coord, Grid};
///
/// let grid = Grid::from_rows(&[
///     "AAABCDEF", "BCDEFABC", "CDEFABCD", "DEFABCDE",
///     "EFABCDEF", "FABCDEFA", "ABCDEFAB", "BCDEFABC",
/// ]).unwrap();
/// let matches = find_all_matches(&grid);
/// assert_eq!(matches.len(), 1);
/// assert_eq!(matches[0].cells(), &[Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]);
/// ```
pub fn find_all_matches(grid: &Grid) -> Vec<Match> {
    let mut matches = Vec::new();
    for row in 0..GRID_SIZE {
        scan_line(grid, Coord::new(row, 0), Direction::Horizontal, &mut matches);
    }
    for col in 0..GRID_SIZE {
        scan_line(grid, Coord::new(0, col), Direction::Vertical, &mut matches);
    }
    matches
}

/// True when the board holds at least one run of three.
pub fn has_match(grid: &Grid) -> bool {
    !find_all_matches(grid).is_empty()
}

fn scan_line(grid: &Grid, origin: Coord, dir: Direction, out: &mut Vec<Match>) {
    let mut i = 0;
    while i + MIN_RUN <= GRID_SIZE {
        match run_at(grid, dir.step(origin, i), dir) {
            Some(run) => {
                // resume right after the run so it is not reported twice
                i += run.len();
                out.push(run);
            }
            None => i += 1,
        }
    }
}

fn run_at(grid: &Grid, start: Coord, dir: Direction) -> Option<Match> {
    let token = grid.get(start)?;
    let mut cells = vec![start];
    loop {
        let next = dir.step(start, cells.len());
        if grid.get(next) != Some(token) {
            break;
        }
        cells.push(next);
    }
    (cells.len() >= MIN_RUN).then_some(Match { token, direction: dir, cells })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: [&str; 8]) -> Grid {
        Grid::from_rows(&rows).unwrap()
    }

    // no runs anywhere; diagonals only
    const QUIET: [&str; 8] = [
        "ABCDEFAB", "BCDEFABC", "CDEFABCD", "DEFABCDE", "EFABCDEF", "FABCDEFA", "ABCDEFAB",
        "BCDEFABC",
    ];

    #[test]
    fn quiet_board_has_no_matches() {
        assert!(find_all_matches(&grid(QUIET)).is_empty());
    }

    #[test]
    fn horizontal_run_is_extended_to_full_length() {
        let mut rows = QUIET;
        rows[4] = "EAAAAAEF";
        let m = find_all_matches(&grid(rows));
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].direction(), Direction::Horizontal);
        assert_eq!(m[0].len(), 5);
        assert_eq!(m[0].cells()[0], Coord::new(4, 1));
        assert_eq!(m[0].token(), Token::Heart);
    }

    #[test]
    fn two_runs_in_one_row_are_separate() {
        let mut rows = QUIET;
        rows[0] = "AAABBBCD";
        let m = find_all_matches(&grid(rows));
        assert_eq!(m.len(), 2);
        assert_eq!(m[0].token(), Token::Heart);
        assert_eq!(m[1].token(), Token::Sparkles);
        assert_eq!(m[1].cells()[0], Coord::new(0, 3));
    }

    #[test]
    fn vertical_run_at_bottom_edge() {
        let mut rows = QUIET;
        rows[5] = "FABCDEFE";
        rows[6] = "ABCDEFAE";
        rows[7] = "BCDEFABE";
        let m = find_all_matches(&grid(rows));
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].direction(), Direction::Vertical);
        assert_eq!(m[0].token(), Token::TwoHearts);
        assert_eq!(m[0].cells(), &[Coord::new(5, 7), Coord::new(6, 7), Coord::new(7, 7)]);
    }

    #[test]
    fn crossing_runs_share_a_cell() {
        let rows = [
            "ABCDEFAB", "BCADEFBC", "CAAAFABC", "DEADCDEF", "EFBCDEFA", "FABCDEFB", "ABCDEFAC",
            "BCDEFABD",
        ];
        let m = find_all_matches(&grid(rows));
        assert_eq!(m.len(), 2);
        let corner = Coord::new(2, 2);
        assert!(m.iter().all(|x| x.contains(corner)));
    }

    #[test]
    fn empty_cells_never_match() {
        let mut rows = QUIET;
        rows[3] = "...ABCDE";
        assert!(!has_match(&grid(rows)));
    }
}
