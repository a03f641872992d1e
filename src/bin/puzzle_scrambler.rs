use clap::Parser;
use npuzzle_solver::board::Board;
use npuzzle_solver::utils::board_to_string;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Grid dimension n for an n-by-n board
    #[clap(short = 'n', long, default_value_t = 3)]
    size: usize,

    /// Number of random slides to walk away from the goal
    #[clap(short, long, default_value_t = 30)]
    steps: usize,

    /// Seed for the deterministic scramble
    #[clap(long, default_value_t = 0)]
    seed: u64,
}

fn main() {
    let args = Args::parse();
    if args.size == 0 {
        eprintln!("Board dimension must be at least 1.");
        std::process::exit(1);
    }

    let board = Board::scrambled(args.size, args.steps, args.seed);
    print!("{}", board_to_string(&board));
}
