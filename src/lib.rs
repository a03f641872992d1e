//! # N-Puzzle Solver Library
//!
//! This library solves the sliding-tile (N-puzzle) problem: given a
//! permutation of numbered tiles on an N×N grid with one blank cell, it
//! finds a minimum-length sequence of single-tile slides that reaches the
//! ascending goal arrangement, using A* search driven by the Hamming
//! (misplaced-tile) heuristic.
//!
//! It is used by two binaries:
//! - `puzzle_solver`: reads a board from a text file, solves it, and prints
//!   every board along an optimal path.
//! - `puzzle_scrambler`: emits a random solvable board in the same text
//!   format, suitable as `puzzle_solver` input.
//!
//! ## Modules
//! - `board`: the board representation (`Board`), with cached Hamming and
//!   Manhattan distances, constant-time solvability detection, and
//!   neighbor generation.
//! - `pqueue`: an adaptable binary min-heap whose entries can be
//!   re-prioritized in place through stable locators.
//! - `map`: an open-addressing probing hash map backing the solver's
//!   open/closed bookkeeping.
//! - `solver`: the A* driver (`Solver`), path reconstruction, and search
//!   statistics.
//! - `utils`: parsing and serializing the text board format.

pub mod board;
pub mod map;
pub mod pqueue;
pub mod solver;
pub mod utils;
