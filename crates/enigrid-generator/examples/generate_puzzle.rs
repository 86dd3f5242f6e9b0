//! Example demonstrating basic Sudoku puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` for a difficulty tier
//! - Generate a random or seeded puzzle
//! - Display the puzzle, solution, seed, and clue count
//! - Sample many puzzles in parallel and keep the one with the fewest clues
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a difficulty tier:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty expert
//! ```
//!
//! Reproduce a puzzle from its seed (64 hex characters):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <SEED>
//! ```
//!
//! Sample puzzles and keep the one with the fewest clues:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty expert --samples 1000
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use enigrid_generator::{Difficulty, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
            DifficultyArg::Expert => Difficulty::Expert,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty tier to generate.
    #[arg(long, value_name = "TIER", default_value = "easy")]
    difficulty: DifficultyArg,

    /// Seed to reproduce a specific puzzle (64 hex characters).
    #[arg(long, value_name = "SEED", conflicts_with = "samples")]
    seed: Option<String>,

    /// Number of puzzles to sample; the one with the fewest clues is kept.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    samples: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let generator = PuzzleGenerator::new(args.difficulty.into());

    if let Some(seed) = &args.seed {
        let seed = match seed.parse::<PuzzleSeed>() {
            Ok(seed) => seed,
            Err(err) => {
                eprintln!("Invalid seed: {err}");
                process::exit(2);
            }
        };
        print_puzzle(&generator.generate_with_seed(seed), None);
        return;
    }

    if args.samples == 0 {
        eprintln!("--samples must be at least 1.");
        process::exit(1);
    }

    let best = (0..args.samples)
        .into_par_iter()
        .map(|_| generator.generate())
        .min_by_key(GeneratedPuzzle::clue_count)
        .expect("at least one sample");
    print_puzzle(&best, Some(args.samples));
}

fn print_puzzle(puzzle: &GeneratedPuzzle, samples: Option<usize>) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    if let Some(samples) = samples.filter(|samples| *samples > 1) {
        println!("Selection:");
        println!("  Samples: {samples}");
        println!();
    }

    println!("Problem:");
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
    println!();

    println!("Difficulty: {}", puzzle.difficulty);
    println!(
        "Clues: {} (target {})",
        puzzle.clue_count(),
        puzzle.difficulty.target_clues()
    );
}
