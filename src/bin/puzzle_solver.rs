use clap::Parser;
use npuzzle_solver::board::Board;
use npuzzle_solver::solver::Solver;
use npuzzle_solver::utils::board_from_str;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the board file (grid dimension, then the row-major tiles)
    board_file: PathBuf,
}

fn read_board_file(path: &PathBuf) -> Result<Board, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
    board_from_str(&content)
}

fn main() {
    let args = Args::parse();

    let board = read_board_file(&args.board_file).unwrap_or_else(|e| {
        eprintln!(
            "Failed to load board from {}: {}",
            args.board_file.display(),
            e
        );
        std::process::exit(1);
    });

    println!("Loaded board from {}\n", args.board_file.display());
    println!("Initial board state:\n{}\n", board);

    if !board.is_solvable() {
        println!("This puzzle is unsolvable.");
        return;
    }

    println!("Solving...\n");
    match Solver::new(board) {
        Ok(solver) => {
            println!(
                "Puzzle solved in optimal {} steps ({} boards expanded).\n",
                solver.moves(),
                solver.expanded()
            );
            println!("Boards along the solution:\n");
            for (step, snapshot) in solver.solution().enumerate() {
                println!("Step {}:\n{}\n", step, snapshot);
            }
        }
        Err(e) => println!("{}", e),
    }
}
