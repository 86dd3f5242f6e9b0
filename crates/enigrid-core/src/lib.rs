//! Core data structures and rule predicates for Sudoku engines.
//!
//! This crate provides the board model shared by puzzle generation and game
//! session management:
//!
//! 1. **Core types**
//!    - [`digit`]: Type-safe representation of sudoku digits 1-9
//!    - [`position`]: Board cell coordinates and house (row/column/box) peers
//! 2. **Sets and grids**
//!    - [`position_set`]: An 81-bit set of board positions, used for
//!      conflict and progress reporting
//!    - [`grid`]: The 9x9 board of optional digits, with an 81-character
//!      text format for fixtures and tooling
//! 3. **Rules**
//!    - [`rules`]: Pure predicates over a grid — placement legality,
//!      conflict discovery, and completion
//!
//! # Examples
//!
//! ```
//! use enigrid_core::{Digit, DigitGrid, Position, rules};
//!
//! let mut grid = DigitGrid::new();
//! grid.set(Position::new(0, 0), Some(Digit::D5));
//!
//! // Placing another 5 in the same row is illegal
//! assert!(!rules::is_valid_placement(&grid, Position::new(8, 0), Digit::D5));
//! // ...but the same digit in an unrelated cell is fine
//! assert!(rules::is_valid_placement(&grid, Position::new(8, 8), Digit::D5));
//! ```

pub mod digit;
pub mod grid;
pub mod position;
pub mod position_set;
pub mod rules;

// Re-export commonly used types
pub use self::{
    digit::Digit,
    grid::{DigitGrid, ParseDigitGridError},
    position::Position,
    position_set::PositionSet,
};
