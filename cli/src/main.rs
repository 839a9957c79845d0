use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use wordmaze::{Board, Location, Outcome, Solver};

/// Find a path through an ASCII word maze that spells a target word.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to the board file.
    board: PathBuf,
    /// The word the path must spell, uppercase letters only.
    word: String,
    /// Give up after considering this many cells.
    #[arg(long)]
    budget: Option<u64>,
    /// Log every cell the search considers to stderr.
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let text = fs::read_to_string(&args.board)
        .with_context(|| format!("cannot read board file {}", args.board.display()))?;
    let board = Board::parse(&text)?;

    let mut solver = Solver::new(&board, &args.word)?;
    if let Some(budget) = args.budget {
        solver = solver.with_budget(budget);
    }

    let outcome = if args.verbose {
        solver.run_observed(|visit| {
            eprintln!(
                "considering {}: word={:?} path={:?}",
                visit.location, visit.current_word, visit.path_word
            );
        })
    } else {
        solver.run()
    };

    match outcome {
        Outcome::Solved(solution) => {
            print!("{}", render(&board, &solution.trace));
            println!("word: {}", solution.word.bold());
            println!("path: {}", solution.path);
            println!("cells considered: {}", solver.nodes_visited());
            Ok(ExitCode::SUCCESS)
        }
        Outcome::NoSolution => {
            eprintln!(
                "no path spells {:?} on this board ({} cells considered)",
                args.word,
                solver.nodes_visited()
            );
            Ok(ExitCode::FAILURE)
        }
        Outcome::BudgetExhausted => {
            eprintln!("gave up after {} cells without an answer", solver.nodes_visited());
            Ok(ExitCode::FAILURE)
        }
    }
}

/// The board with the found path highlighted and everything else dimmed.
fn render(board: &Board, trace: &[Location]) -> String {
    let on_path: HashSet<Location> = trace.iter().copied().collect();
    let mut out = String::new();

    for y in 0..board.height() {
        for x in 0..board.width() {
            let location = Location(x, y);
            let ch = board.symbol_at(location).map_or(' ', |symbol| symbol.as_char());
            let styled = if on_path.contains(&location) {
                ch.to_string().green().bold()
            } else {
                ch.to_string().dimmed()
            };
            out.push_str(&styled.to_string());
        }
        out.push('\n');
    }

    out
}
