//! Parsing and serializing the text board format.
//!
//! The format is a whitespace-separated token stream: the grid dimension
//! `n` first, then the `n²` tile values in row-major order, `0` for the
//! blank. Line breaks are cosmetic; any whitespace separates tokens.

use crate::board::Board;

/// Parses a board from its text representation.
///
/// # Arguments
/// * `s`: Token stream: dimension first, then the row-major tile values.
///
/// # Returns
/// * `Ok(Board)` when the tokens parse and form a valid board.
/// * `Err(String)` describing the first problem found: a non-numeric
///   token, too few or too many tiles, or a grid [`Board::new`] rejects
///   (duplicate tiles, values out of range).
///
/// # Examples
/// ```
/// use npuzzle_solver::utils::board_from_str;
///
/// let board = board_from_str("3\n1 2 3\n4 5 6\n7 8 0\n").unwrap();
/// assert!(board.is_goal());
///
/// assert!(board_from_str("3\n1 2 3").is_err());
/// ```
pub fn board_from_str(s: &str) -> Result<Board, String> {
    let mut tokens = s.split_whitespace();

    let n: usize = match tokens.next() {
        None => return Err("board text is empty".to_string()),
        Some(token) => token
            .parse()
            .map_err(|_| format!("invalid board dimension '{}'", token))?,
    };

    let mut grid = Vec::with_capacity(n);
    for r in 0..n {
        let mut row = Vec::with_capacity(n);
        for c in 0..n {
            let token = tokens.next().ok_or_else(|| {
                format!(
                    "board text ends early: expected {} tiles, found {}",
                    n * n,
                    r * n + c
                )
            })?;
            let value: u32 = token.parse().map_err(|_| {
                format!("invalid tile value '{}' at row {} col {}", token, r, c)
            })?;
            row.push(value);
        }
        grid.push(row);
    }

    if let Some(extra) = tokens.next() {
        return Err(format!(
            "unexpected trailing token '{}' after {} tiles",
            extra,
            n * n
        ));
    }

    Board::new(grid).map_err(|e| e.to_string())
}

/// Serializes a board back into the text format [`board_from_str`] reads.
pub fn board_to_string(board: &Board) -> String {
    let mut out = board.n().to_string();
    out.push('\n');
    out.push_str(&board.to_string());
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_goal_board() {
        let board = board_from_str("3 1 2 3 4 5 6 7 8 0").unwrap();
        assert!(board.is_goal());
        assert_eq!(board.n(), 3);
    }

    #[test]
    fn test_parses_across_line_breaks() {
        let board = board_from_str("3\n8 1 3\n4 0 2\n7 6 5\n").unwrap();
        assert_eq!(board.tile(0, 0), 8);
        assert_eq!(board.blank(), (1, 1));
    }

    #[test]
    fn test_rejects_empty_input() {
        let result = board_from_str("   \n  ");
        assert_eq!(result.unwrap_err(), "board text is empty");
    }

    #[test]
    fn test_rejects_bad_dimension() {
        let result = board_from_str("three 1 2 0");
        assert!(result.unwrap_err().contains("invalid board dimension"));
    }

    #[test]
    fn test_rejects_truncated_grid() {
        let result = board_from_str("3 1 2 3 4");
        assert!(result.unwrap_err().contains("ends early"));
    }

    #[test]
    fn test_rejects_non_numeric_tile() {
        let result = board_from_str("2 1 x 3 0");
        assert!(result.unwrap_err().contains("invalid tile value 'x'"));
    }

    #[test]
    fn test_rejects_trailing_tokens() {
        let result = board_from_str("2 1 2 3 0 9");
        assert!(result.unwrap_err().contains("trailing token '9'"));
    }

    #[test]
    fn test_reports_invalid_grids_from_construction() {
        let result = board_from_str("2 1 1 3 0");
        assert!(result.unwrap_err().contains("appears more than once"));
    }

    #[test]
    fn test_round_trips_through_text() {
        let board = Board::scrambled(4, 25, 11);
        let text = board_to_string(&board);
        assert_eq!(board_from_str(&text).unwrap(), board);
    }
}
