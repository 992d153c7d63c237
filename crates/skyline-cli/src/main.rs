//! Command-line skyscraper puzzle solver.
//!
//! Solves a puzzle given as clues, or a bundled one, and prints the board.
//!
//! # Usage
//!
//! ```sh
//! skyline 0,0,1,2,0,2,0,0,0,3,0,0,0,1,0,0
//! skyline --puzzle hard7 --stats
//! skyline --puzzle ambiguous4 --candidates
//! RUST_LOG=skyline_solver=debug skyline --puzzle very-hard7
//! ```
//!
//! Clues run clockwise: the top edge left to right, the right edge top to bottom, the
//! bottom edge right to left, then the left edge bottom to top. `0` means no clue.

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use skyline_core::{ClueError, Clues};
use skyline_solver::{ClueSolver, Solution, SweepOrder};

use crate::{
    presets::Preset,
    render::{render_board, render_candidates},
};

mod presets;
mod render;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OrderArg {
    /// Lines with the fewest candidates first.
    Cheapest,
    /// Clue slots in clockwise order.
    Clockwise,
}

impl From<OrderArg> for SweepOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Cheapest => Self::CheapestFirst,
            OrderArg::Clockwise => Self::Clockwise,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Clues in clockwise order, separated by commas or whitespace.
    #[arg(
        value_name = "CLUES",
        num_args = 1..,
        required_unless_present = "puzzle",
        conflicts_with = "puzzle"
    )]
    clues: Vec<String>,

    /// Bundled puzzle to solve instead of CLUES.
    #[arg(short, long, value_name = "NAME")]
    puzzle: Option<Preset>,

    /// Order in which each sweep visits the clued lines.
    #[arg(long, value_name = "ORDER", default_value = "cheapest")]
    order: OrderArg,

    /// Also list the candidates of every cell.
    #[arg(long)]
    candidates: bool,

    /// Also print solver statistics.
    #[arg(long)]
    stats: bool,
}

impl Args {
    fn clues(&self) -> Result<Clues, ClueError> {
        match self.puzzle {
            Some(preset) => Clues::try_from(preset.clues()),
            None => self.clues.join(" ").parse(),
        }
    }
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let clues = match args.clues() {
        Ok(clues) => clues,
        Err(err) => {
            eprintln!("Invalid clues: {err}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("solving {} puzzle", clues.size());

    let solver = ClueSolver::with_order(args.order.into());
    match solver.solve(clues) {
        Ok(solution) => {
            print_solution(&solution, &args);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Cannot solve puzzle: {err}");
            ExitCode::FAILURE
        }
    }
}

fn print_solution(solution: &Solution, args: &Args) {
    let board = solution.board();
    print!("{}", render_board(board));
    println!();
    println!("Outcome: {}", solution.outcome());

    if args.candidates {
        println!();
        println!("Candidates:");
        print!("{}", render_candidates(board));
    }

    if args.stats {
        let stats = solution.stats();
        println!();
        println!("Stats:");
        println!("  Sweeps: {}", stats.sweeps);
        println!("  Lines reconciled: {}", stats.lines_reconciled);
        println!("  Permutations examined: {}", stats.permutations_examined);
        println!("  Permutations accepted: {}", stats.permutations_accepted);
        println!("  Eliminations: {}", stats.eliminations);
        println!("  Tasks processed: {}", stats.tasks_processed);
    }
}
