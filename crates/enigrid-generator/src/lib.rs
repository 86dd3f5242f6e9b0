//! Sudoku puzzle generation.
//!
//! This crate produces `(problem, solution)` pairs for a requested
//! [`Difficulty`]:
//!
//! 1. A complete, rule-valid solution grid is built with randomized
//!    backtracking.
//! 2. Clues are carved out of a copy of the solution one cell at a time;
//!    a removal is kept only when the remaining clues still admit exactly
//!    one completion, proven by the same backtracking search with an
//!    early abort at the second solution.
//!
//! Generation is deterministic per [`PuzzleSeed`]: the same seed and
//! difficulty always reproduce the same puzzle, which the benchmark suite
//! and regression tests rely on.
//!
//! # Examples
//!
//! ```
//! use enigrid_generator::{Difficulty, PuzzleGenerator};
//! use enigrid_core::rules;
//!
//! let generator = PuzzleGenerator::new(Difficulty::Easy);
//! let puzzle = generator.generate();
//!
//! assert!(rules::is_complete(&puzzle.solution));
//! assert!(puzzle.clue_count() < 81);
//! ```

pub mod difficulty;
pub mod generator;
pub mod seed;

// Re-export commonly used types
pub use self::{
    difficulty::Difficulty,
    generator::{GeneratedPuzzle, PuzzleGenerator, count_solutions},
    seed::{ParsePuzzleSeedError, PuzzleSeed},
};
