//! Sudoku game session management.
//!
//! This crate owns the mutable per-session state of a game in progress: the
//! working board over an immutable clue layout and its solution, the
//! selection cursor, the conflict set, the completion state, and the play
//! clock. The view layer drives a [`GameSession`] through its operations
//! and renders [`GameSnapshot`] values; it never touches the grids
//! directly.
//!
//! # Examples
//!
//! ```
//! use enigrid_game::GameSession;
//! use enigrid_generator::Difficulty;
//!
//! let mut session = GameSession::new(Difficulty::Easy);
//! assert!(!session.is_complete());
//!
//! // Reveal cells until the puzzle is done
//! while session.hint().is_some() {}
//! assert!(session.is_complete());
//! assert!(session.check_solution());
//! ```

pub mod clock;
pub mod session;

// Re-export commonly used types
pub use self::{
    clock::GameClock,
    session::{GameSession, GameSnapshot, GameStatus, InputOutcome},
};
