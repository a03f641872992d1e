//! Board representation for the sliding-tile puzzle.
//!
//! A [`Board`] is one arrangement of the tiles `1..n²-1` plus a single blank
//! (written `0`) on an `n`×`n` grid. Boards are immutable once built: the
//! heuristic values, the blank position, and the solvability verdict are all
//! computed at construction and served from caches afterwards.

use std::fmt;
use std::hash::{Hash, Hasher};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Errors raised when constructing a [`Board`] from caller-supplied tiles.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The grid contained no rows at all.
    #[error("board grid is empty")]
    Empty,

    /// A row's width did not match the number of rows.
    #[error("row {row} has {width} columns, expected {expected}")]
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Number of columns found in that row.
        width: usize,
        /// Number of columns required for a square grid.
        expected: usize,
    },

    /// A tile value fell outside `0..n²`.
    #[error("tile value {value} is outside 0..{cells}")]
    TileOutOfRange {
        /// The offending value.
        value: u32,
        /// Total number of cells on the board.
        cells: usize,
    },

    /// The same tile value appeared in more than one cell.
    #[error("tile value {value} appears more than once")]
    DuplicateTile {
        /// The repeated value.
        value: u32,
    },
}

/// One arrangement of numbered tiles on an `n`×`n` grid with a single blank.
///
/// Tiles are stored row-major; the value `0` denotes the blank cell. Board
/// identity ([`PartialEq`] and [`Hash`]) covers the full tile grid and
/// nothing else, so two boards reached along different search paths still
/// compare equal when their tiles match.
#[derive(Clone, Debug)]
pub struct Board {
    n: usize,
    tiles: Vec<u32>,
    blank_row: usize,
    blank_col: usize,
    inversions: u32,
    hamming: u32,
    manhattan: u32,
    solvable: bool,
}

impl Board {
    /// Builds a board from a square grid of tile values.
    ///
    /// The grid must be `n`×`n` with every value in `0..n²` appearing exactly
    /// once; `0` marks the blank cell. Anything else is rejected with a
    /// [`BoardError`] rather than producing a half-built board.
    ///
    /// # Examples
    /// ```
    /// use npuzzle_solver::board::Board;
    ///
    /// let board = Board::new(vec![
    ///     vec![1, 2, 3],
    ///     vec![4, 5, 6],
    ///     vec![7, 8, 0],
    /// ]).unwrap();
    /// assert!(board.is_goal());
    ///
    /// // Ragged rows are malformed, not undefined behavior.
    /// assert!(Board::new(vec![vec![1, 2], vec![0]]).is_err());
    /// ```
    pub fn new(grid: Vec<Vec<u32>>) -> Result<Board, BoardError> {
        let n = grid.len();
        if n == 0 {
            return Err(BoardError::Empty);
        }

        for (row, cells) in grid.iter().enumerate() {
            if cells.len() != n {
                return Err(BoardError::NotSquare {
                    row,
                    width: cells.len(),
                    expected: n,
                });
            }
        }

        let cells = n * n;
        let tiles: Vec<u32> = grid.into_iter().flatten().collect();

        let mut seen = vec![false; cells];
        for &value in &tiles {
            if value as usize >= cells {
                return Err(BoardError::TileOutOfRange { value, cells });
            }
            if seen[value as usize] {
                return Err(BoardError::DuplicateTile { value });
            }
            seen[value as usize] = true;
        }
        // All n² values in 0..n² are distinct, so the blank is present.

        Ok(Board::from_tiles(n, tiles))
    }

    /// Builds the canonical goal arrangement: tiles ascending, blank last.
    ///
    /// # Panics
    /// Panics if `n` is zero.
    pub fn goal(n: usize) -> Board {
        assert!(n > 0, "board dimension must be at least 1");
        let cells = n * n;
        let mut tiles: Vec<u32> = (1..cells as u32).collect();
        tiles.push(0);
        Board::from_tiles(n, tiles)
    }

    /// Builds a solvable board by walking `steps` random slides away from the
    /// goal arrangement.
    ///
    /// The walk never immediately undoes its previous slide, and the same
    /// `seed` always produces the same board.
    pub fn scrambled(n: usize, steps: usize, seed: u64) -> Board {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut current = Board::goal(n);
        let mut previous: Option<Board> = None;

        for _ in 0..steps {
            let mut options = current.neighbors();
            if let Some(prev) = &previous {
                options.retain(|b| b != prev);
            }
            if options.is_empty() {
                break; // 1x1 board has nowhere to go
            }
            let next = options.swap_remove(rng.gen_range(0..options.len()));
            previous = Some(std::mem::replace(&mut current, next));
        }

        current
    }

    // Caches every derived quantity in two passes over the tiles. Callers
    // must guarantee `tiles` is a permutation of 0..n².
    fn from_tiles(n: usize, tiles: Vec<u32>) -> Board {
        let mut blank_row = 0;
        let mut blank_col = 0;
        let mut hamming = 0;
        let mut manhattan = 0;

        for (index, &value) in tiles.iter().enumerate() {
            let row = index / n;
            let col = index % n;
            if value == 0 {
                blank_row = row;
                blank_col = col;
                continue;
            }
            let goal_row = (value as usize - 1) / n;
            let goal_col = (value as usize - 1) % n;
            if row != goal_row || col != goal_col {
                hamming += 1;
            }
            manhattan += (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32;
        }

        let mut inversions = 0;
        for (index, &value) in tiles.iter().enumerate() {
            if value == 0 {
                continue;
            }
            for &later in &tiles[index + 1..] {
                if later != 0 && later < value {
                    inversions += 1;
                }
            }
        }

        let solvable = if n % 2 == 1 {
            inversions % 2 == 0
        } else {
            (inversions + blank_row as u32) % 2 == 1
        };

        Board {
            n,
            tiles,
            blank_row,
            blank_col,
            inversions,
            hamming,
            manhattan,
            solvable,
        }
    }

    /// Grid dimension `n`.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Total number of cells, `n²`.
    pub fn size(&self) -> usize {
        self.n * self.n
    }

    /// Value of the tile at row `r`, column `c` (`0` for the blank).
    ///
    /// # Panics
    /// Panics if `r` or `c` is outside the board.
    pub fn tile(&self, r: usize, c: usize) -> u32 {
        assert!(r < self.n && c < self.n, "cell ({}, {}) out of bounds", r, c);
        self.tiles[r * self.n + c]
    }

    /// Position of the blank cell as `(row, col)`.
    pub fn blank(&self) -> (usize, usize) {
        (self.blank_row, self.blank_col)
    }

    /// Snapshot of the grid as rows of tile values, for callers that render
    /// or re-serialize the board.
    pub fn rows(&self) -> Vec<Vec<u32>> {
        self.tiles.chunks(self.n).map(|row| row.to_vec()).collect()
    }

    /// Number of non-blank tiles that are not in their goal cell.
    pub fn hamming(&self) -> u32 {
        self.hamming
    }

    /// Sum over non-blank tiles of the grid distance to their goal cell.
    pub fn manhattan(&self) -> u32 {
        self.manhattan
    }

    /// Number of tile pairs out of order in a row-major scan, blank excluded.
    pub fn inversions(&self) -> u32 {
        self.inversions
    }

    /// Whether this board is the goal arrangement.
    pub fn is_goal(&self) -> bool {
        self.hamming == 0
    }

    /// Whether the goal arrangement is reachable from this board.
    ///
    /// Constant time: the verdict follows the inversion-parity rule and was
    /// fixed at construction. Odd `n` boards are solvable iff the inversion
    /// count is even; even `n` boards are solvable iff the inversion count
    /// plus the blank's row index is odd.
    pub fn is_solvable(&self) -> bool {
        self.solvable
    }

    /// All boards reachable by sliding one adjacent tile into the blank.
    ///
    /// Returns 2 boards when the blank is in a corner, 3 on an edge, and 4 in
    /// the interior, always in the order right, left, up, down (skipping
    /// directions that fall off the grid).
    pub fn neighbors(&self) -> Vec<Board> {
        let mut result = Vec::with_capacity(4);
        let (r, c) = (self.blank_row, self.blank_col);

        if c + 1 < self.n {
            result.push(self.slide_from(r, c + 1));
        }
        if c > 0 {
            result.push(self.slide_from(r, c - 1));
        }
        if r > 0 {
            result.push(self.slide_from(r - 1, c));
        }
        if r + 1 < self.n {
            result.push(self.slide_from(r + 1, c));
        }

        result
    }

    // Fresh board with the tile at (r, c) moved into the blank cell. The
    // swap keeps the tiles a permutation, so validation is not repeated.
    fn slide_from(&self, r: usize, c: usize) -> Board {
        let mut tiles = self.tiles.clone();
        tiles[self.blank_row * self.n + self.blank_col] = tiles[r * self.n + c];
        tiles[r * self.n + c] = 0;
        Board::from_tiles(self.n, tiles)
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Board) -> bool {
        self.n == other.n && self.tiles == other.tiles
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.n.hash(state);
        self.tiles.hash(state);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.size() - 1).to_string().len();
        for (index, row) in self.tiles.chunks(self.n).enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for (col, value) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", value, width = width)?;
            }
        }
        Ok(())
    }
}
