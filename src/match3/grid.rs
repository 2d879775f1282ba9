use std::collections::VecDeque;
use std::fmt;

use rand::Rng;

/// Board side length. The board is always square.
pub const GRID_SIZE: usize = 8;

/// The six token kinds that can fill a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Heart,
    Sparkles,
    Star,
    Ribbon,
    TwoHearts,
    Blossom,
}

impl Token {
    pub const ALL: [Token; 6] = [
        Token::Heart,
        Token::Sparkles,
        Token::Star,
        Token::Ribbon,
        Token::TwoHearts,
        Token::Blossom,
    ];

    pub const fn symbol(self) -> &'static str {
        match self {
            Token::Heart => "💖",
            Token::Sparkles => "✨",
            Token::Star => "🌟",
            Token::Ribbon => "🎀",
            Token::TwoHearts => "💕",
            Token::Blossom => "🌸",
        }
    }

    /// Single-letter form used by `Grid::from_rows` and `Display`.
    pub const fn glyph(self) -> char {
        match self {
            Token::Heart => 'A',
            Token::Sparkles => 'B',
            Token::Star => 'C',
            Token::Ribbon => 'D',
            Token::TwoHearts => 'E',
            Token::Blossom => 'F',
        }
    }

    pub fn from_glyph(c: char) -> Option<Token> {
        Token::ALL.into_iter().find(|t| t.glyph() == c.to_ascii_uppercase())
    }
}

/// A cell holds a token, or nothing right after a clear.
pub type Cell = Option<Token>;

/// Supplies fresh tokens for initial fill and refills.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

/// Uniformly random tokens drawn from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomTokens<R> {
    rng: R,
}

impl<R: Rng> RandomTokens<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TokenSource for RandomTokens<R> {
    fn next_token(&mut self) -> Token {
        Token::ALL[self.rng.random_range(0..Token::ALL.len())]
    }
}

/// Replays a fixed sequence of tokens, starting over when it runs out.
///
/// ```
/// use compliment_arcade::match3::{ScriptedTokens, Token, TokenSource};
///
/// let mut src = ScriptedTokens::new([Token::Star, Token::Heart]);
/// assert_eq!(src.next_token(), Token::Star);
/// assert_eq!(src.next_token(), Token::Heart);
/// assert_eq!(src.next_token(), Token::Star);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedTokens {
    queue: VecDeque<Token>,
}

impl ScriptedTokens {
    /// An empty script falls back to cycling through every token kind.
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        let mut queue: VecDeque<Token> = tokens.into_iter().collect();
        if queue.is_empty() {
            queue.extend(Token::ALL);
        }
        Self { queue }
    }
}

impl TokenSource for ScriptedTokens {
    fn next_token(&mut self) -> Token {
        // never empty: `new` guarantees at least one token and we rotate
        let t = self.queue.pop_front().unwrap_or(Token::Heart);
        self.queue.push_back(t);
        t
    }
}

/// A grid position; row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub const fn in_bounds(self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }

    /// True when the two coordinates share an edge (no diagonals).
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GridError {
    #[error("expected 8 rows, got {0}")]
    RowCount(usize),
    #[error("row {row} has {len} cells, expected 8")]
    RowLength { row: usize, len: usize },
    #[error("row {row}: unknown glyph '{glyph}'")]
    Glyph { row: usize, glyph: char },
}

/// Fixed 8×8 board of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    pub fn empty() -> Self {
        Self { cells: [[None; GRID_SIZE]; GRID_SIZE] }
    }

    /// A full board with every cell drawn from `source`, top row first.
    pub fn filled<S: TokenSource + ?Sized>(source: &mut S) -> Self {
        let mut grid = Self::empty();
        for row in grid.cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = Some(source.next_token());
            }
        }
        grid
    }

    /// Build a board from glyph rows (`A`..`F`, `.` for empty); spaces are ignored.
    ///
    /// ```
    /// use compliment_arcade::match3::{Coord, Grid, Token};
    ///
    /// let grid = Grid::from_rows(&[
    ///     "AAABCDEF", "BCDEFABC", "CDEFABCD", "DEFABCDE",
    ///     "EFABCDEF", "FABCDEFA", "ABCDEFAB", "BCDEFABC",
    /// ]).unwrap();
    /// assert_eq!(grid.get(Coord::new(0, 3)), Some(Token::Sparkles));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self, GridError> {
        if rows.len() != GRID_SIZE {
            return Err(GridError::RowCount(rows.len()));
        }
        let mut grid = Self::empty();
        for (r, line) in rows.iter().enumerate() {
            let glyphs: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if glyphs.len() != GRID_SIZE {
                return Err(GridError::RowLength { row: r, len: glyphs.len() });
            }
            for (c, glyph) in glyphs.into_iter().enumerate() {
                grid.cells[r][c] = match glyph {
                    '.' => None,
                    g => Some(Token::from_glyph(g).ok_or(GridError::Glyph { row: r, glyph: g })?),
                };
            }
        }
        Ok(grid)
    }

    /// Token at `at`; `None` for an empty cell or an out-of-range coordinate.
    pub fn get(&self, at: Coord) -> Cell {
        if !at.in_bounds() {
            return None;
        }
        self.cells[at.row][at.col]
    }

    pub fn rows(&self) -> &[[Cell; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    pub fn empty_cells(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_none()).count()
    }

    pub(crate) fn set(&mut self, at: Coord, cell: Cell) {
        debug_assert!(at.in_bounds());
        self.cells[at.row][at.col] = cell;
    }

    pub(crate) fn swap(&mut self, a: Coord, b: Coord) {
        let ta = self.get(a);
        let tb = self.get(b);
        self.set(a, tb);
        self.set(b, ta);
    }

    /// Drop tokens down each column, keeping their order, then fill the
    /// vacated top cells from `source`. Returns how many cells were refilled.
    pub(crate) fn collapse_and_refill<S: TokenSource + ?Sized>(&mut self, source: &mut S) -> usize {
        let mut refilled = 0;
        for col in 0..GRID_SIZE {
            let mut write = GRID_SIZE;
            for row in (0..GRID_SIZE).rev() {
                if let Some(t) = self.cells[row][col] {
                    write -= 1;
                    self.cells[write][col] = Some(t);
                }
            }
            for row in 0..write {
                self.cells[row][col] = Some(source.next_token());
                refilled += 1;
            }
        }
        refilled
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let c = cell.map(Token::glyph).unwrap_or('.');
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROWS: [&str; 8] = [
        "ABCDEFAB", "BCDEFABC", "CDEFABCD", "DEFABCDE", "EFABCDEF", "FABCDEFA", "ABCDEFAB",
        "BCDEFABC",
    ];

    #[test]
    fn adjacency_is_four_directional() {
        let c = Coord::new(3, 3);
        assert!(c.is_adjacent(Coord::new(2, 3)));
        assert!(c.is_adjacent(Coord::new(3, 4)));
        assert!(!c.is_adjacent(Coord::new(4, 4)));
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(Coord::new(3, 5)));
    }

    #[test]
    fn from_rows_round_trips_through_display() {
        let grid = Grid::from_rows(&ROWS).unwrap();
        assert_eq!(grid.to_string(), ROWS.join("\n"));
    }

    #[test]
    fn from_rows_rejects_bad_shapes() {
        assert_eq!(Grid::from_rows(&ROWS[..7]), Err(GridError::RowCount(7)));
        let mut rows = ROWS;
        rows[2] = "ABC";
        assert_eq!(Grid::from_rows(&rows), Err(GridError::RowLength { row: 2, len: 3 }));
        rows[2] = "ABCDEFAZ";
        assert_eq!(Grid::from_rows(&rows), Err(GridError::Glyph { row: 2, glyph: 'Z' }));
    }

    #[test]
    fn out_of_range_reads_are_empty() {
        let grid = Grid::from_rows(&ROWS).unwrap();
        assert_eq!(grid.get(Coord::new(8, 0)), None);
        assert_eq!(grid.get(Coord::new(0, 99)), None);
    }

    #[test]
    fn collapse_keeps_order_and_refills_from_top() {
        let mut grid = Grid::from_rows(&[
            "A.......", "B.......", "........", "C.......", "........", "D.......", "........",
            "E.......",
        ])
        .unwrap();
        // fill the other columns so only column 0 has gaps to refill
        for r in 0..GRID_SIZE {
            for c in 1..GRID_SIZE {
                grid.set(Coord::new(r, c), Some(Token::Star));
            }
        }
        let mut src = ScriptedTokens::new([Token::Blossom]);
        let refilled = grid.collapse_and_refill(&mut src);
        assert_eq!(refilled, 3);
        let column: Vec<char> =
            (0..GRID_SIZE).map(|r| grid.get(Coord::new(r, 0)).map_or('.', Token::glyph)).collect();
        assert_eq!(column, vec!['F', 'F', 'F', 'A', 'B', 'C', 'D', 'E']);
        assert_eq!(grid.empty_cells(), 0);
    }
}
