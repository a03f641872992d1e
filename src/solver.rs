//! A* search over the slide graph.
//!
//! The whole search runs inside [`Solver::new`]: seed the open queue with
//! the initial board, repeatedly expand the lowest estimated-total-cost
//! board, and stop the moment the goal is popped. Priorities are
//! `moves-so-far + hamming`, an admissible estimate, so the first pop of the
//! goal carries the optimal move count and closed boards never need
//! reopening.
//!
//! Discovered boards live in an arena; a board records the arena index of
//! the board it was reached from, and the final path is recovered by walking
//! those indices back from the goal.

use thiserror::Error;

use crate::board::Board;
use crate::map::ProbeHashMap;
use crate::pqueue::{AdaptableHeap, Locator};

/// Errors raised when starting a solve.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The initial board's permutation parity forbids reaching the goal.
    /// The search never starts for such a board.
    #[error("board is unsolvable: the goal arrangement is unreachable")]
    Unsolvable,
}

// One discovered board with its search bookkeeping. `parent` is an arena
// index, not an owning reference; the initial board has none. `cost` is
// mutable only while the board sits in the open set.
struct Node {
    board: Board,
    parent: Option<usize>,
    cost: u32,
}

/// A completed A* solve of one sliding-tile puzzle.
///
/// # Examples
/// ```
/// use npuzzle_solver::board::Board;
/// use npuzzle_solver::solver::Solver;
///
/// let board = Board::new(vec![
///     vec![1, 2, 3],
///     vec![4, 5, 6],
///     vec![7, 0, 8],
/// ]).unwrap();
/// let solver = Solver::new(board).unwrap();
/// assert_eq!(solver.moves(), 1);
/// assert_eq!(solver.solution().count(), 2);
/// ```
pub struct Solver {
    nodes: Vec<Node>,
    path: Vec<usize>,
    optimal_steps: u32,
    expanded: usize,
}

impl Solver {
    /// Solves `initial`, running the full search before returning.
    ///
    /// Fails with [`SolverError::Unsolvable`], without searching, when the
    /// board's parity rules out the goal.
    pub fn new(initial: Board) -> Result<Solver, SolverError> {
        if !initial.is_solvable() {
            return Err(SolverError::Unsolvable);
        }

        let mut nodes: Vec<Node> = Vec::new();
        let mut queue: AdaptableHeap<u32, usize> = AdaptableHeap::new();
        // Three board-keyed stores: tentative priority while open, heap
        // locator while open, final cost once closed.
        let mut open: ProbeHashMap<Board, u32> = ProbeHashMap::new();
        let mut open_locators: ProbeHashMap<Board, Locator> = ProbeHashMap::new();
        let mut closed: ProbeHashMap<Board, u32> = ProbeHashMap::new();
        let mut expanded = 0;

        let seed_priority = initial.hamming();
        nodes.push(Node {
            board: initial.clone(),
            parent: None,
            cost: 0,
        });
        let seed_locator = queue.insert(seed_priority, 0);
        open.put(initial.clone(), seed_priority);
        open_locators.put(initial, seed_locator);

        while let Some((_, index)) = queue.remove_min() {
            let cost = nodes[index].cost;
            let current = nodes[index].board.clone();

            if current.is_goal() {
                let mut path = Vec::new();
                let mut walk = Some(index);
                while let Some(at) = walk {
                    path.push(at);
                    walk = nodes[at].parent;
                }
                path.reverse();
                return Ok(Solver {
                    nodes,
                    path,
                    optimal_steps: cost,
                    expanded,
                });
            }

            open.remove(&current);
            open_locators.remove(&current);
            closed.put(current.clone(), cost);
            expanded += 1;

            let came_from = nodes[index].parent.map(|p| nodes[p].board.clone());

            for neighbor in current.neighbors() {
                // Sliding back where we came from only undoes the last move.
                if came_from.as_ref() == Some(&neighbor) {
                    continue;
                }
                if closed.contains_key(&neighbor) {
                    continue;
                }

                let tentative = cost + 1;
                let priority = tentative + neighbor.hamming();

                if let Some(&recorded) = open.get(&neighbor) {
                    // Path relaxation: a cheaper route to an open board
                    // re-keys its queue entry in place.
                    if priority < recorded {
                        let locator = open_locators
                            .get(&neighbor)
                            .expect("every open board has a live locator");
                        let at = *queue.value(locator);
                        queue.replace_key(locator, priority);
                        open.put(neighbor, priority);
                        nodes[at].parent = Some(index);
                        nodes[at].cost = tentative;
                    }
                } else {
                    let at = nodes.len();
                    nodes.push(Node {
                        board: neighbor.clone(),
                        parent: Some(index),
                        cost: tentative,
                    });
                    let locator = queue.insert(priority, at);
                    open.put(neighbor.clone(), priority);
                    open_locators.put(neighbor, locator);
                }
            }
        }

        // The constructor rejected unsolvable boards, and the heuristic is
        // admissible, so the queue cannot drain before the goal is popped.
        unreachable!("open queue drained before reaching the goal of a solvable board");
    }

    /// Optimal number of moves from the initial board to the goal.
    pub fn moves(&self) -> u32 {
        self.optimal_steps
    }

    /// The boards along a shortest solution, from the initial board to the
    /// goal inclusive. Each call returns a fresh iterator over the same
    /// stored path.
    pub fn solution(&self) -> impl Iterator<Item = &Board> + '_ {
        self.path.iter().map(|&at| &self.nodes[at].board)
    }

    /// Number of boards expanded (moved from open to closed) during the
    /// search.
    pub fn expanded(&self) -> usize {
        self.expanded
    }
}
