//! The per-game session state machine.

use std::time::Duration;

use enigrid_core::{Digit, DigitGrid, Position, PositionSet, rules};
use enigrid_generator::{Difficulty, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use log::debug;

use crate::clock::GameClock;

/// Lifecycle state of a session.
///
/// A session is created playing; it moves to `Complete` when the board is
/// full and conflict-free, and back to `Playing` through
/// [`GameSession::reset`] or [`GameSession::new_game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameStatus {
    /// The puzzle is in progress and accepts input.
    Playing,
    /// The board matches the solution; input is ignored until a reset.
    Complete,
}

/// The effect of an input operation.
///
/// Blocked input — no selection, a given cell, or a finished game — is not
/// an error; the operation simply reports that it did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum InputOutcome {
    /// The board changed.
    Applied,
    /// Nothing changed.
    Ignored,
}

/// A mutable Sudoku game session.
///
/// Owns the generated puzzle (immutable clue layout and solution), the
/// working board, the selection cursor, the cached conflict set, and the
/// play clock. Every operation runs to completion synchronously and either
/// fully applies or is a no-op.
///
/// # Examples
///
/// ```
/// use enigrid_core::{Digit, Position};
/// use enigrid_game::GameSession;
/// use enigrid_generator::Difficulty;
///
/// let mut session = GameSession::new(Difficulty::Easy);
///
/// // Find an empty cell and fill it with its solution digit
/// let pos = Position::ALL
///     .into_iter()
///     .find(|pos| session.board()[*pos].is_none())
///     .expect("a fresh puzzle has empty cells");
/// session.select_cell(pos);
/// let digit = session.solution()[pos].expect("solution is complete");
/// assert!(session.input_digit(digit).is_applied());
/// assert!(session.completed_cells().contains(pos));
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    solution: DigitGrid,
    initial: DigitGrid,
    board: DigitGrid,
    difficulty: Difficulty,
    seed: PuzzleSeed,
    selected: Option<Position>,
    conflicts: PositionSet,
    status: GameStatus,
    clock: GameClock,
}

/// An immutable view of the session for rendering.
///
/// All fields are plain values; the view layer reads them and calls back
/// into [`GameSession`] operations for every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// The working board, givens included.
    pub board: DigitGrid,
    /// The clue layout; a cell is editable iff it is empty here.
    pub initial_board: DigitGrid,
    /// The active input focus, if any.
    pub selected_cell: Option<Position>,
    /// Occupied cells currently violating a row, column, or box rule.
    pub conflicts: PositionSet,
    /// Player-filled cells that match the solution (progress display).
    pub completed_cells: PositionSet,
    /// The difficulty the puzzle was generated for.
    pub difficulty: Difficulty,
    /// `true` once the board equals the solution.
    pub is_complete: bool,
    /// Play time accrued so far.
    pub elapsed: Duration,
}

impl GameSession {
    /// Generates a fresh puzzle and starts a session on it.
    ///
    /// Generation runs to completion before the session exists; there is no
    /// observable intermediate state.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::from_puzzle(PuzzleGenerator::new(difficulty).generate())
    }

    /// Like [`new`](Self::new), with a seed for a reproducible puzzle.
    #[must_use]
    pub fn with_seed(difficulty: Difficulty, seed: PuzzleSeed) -> Self {
        Self::from_puzzle(PuzzleGenerator::new(difficulty).generate_with_seed(seed))
    }

    /// Starts a session on an already generated puzzle.
    #[must_use]
    pub fn from_puzzle(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            problem,
            solution,
            difficulty,
            seed,
        } = puzzle;
        debug!(
            "starting {difficulty} game with {} clues",
            problem.clue_count()
        );
        let mut clock = GameClock::new();
        clock.start();
        Self {
            solution,
            board: problem.clone(),
            initial: problem,
            difficulty,
            seed,
            selected: None,
            conflicts: PositionSet::EMPTY,
            status: GameStatus::Playing,
            clock,
        }
    }

    /// Replaces this session with a freshly generated puzzle.
    ///
    /// Everything is replaced wholesale: grids, selection, conflicts,
    /// completion state, and the clock.
    pub fn new_game(&mut self, difficulty: Difficulty) {
        *self = Self::new(difficulty);
    }

    /// Returns the working board.
    #[must_use]
    pub const fn board(&self) -> &DigitGrid {
        &self.board
    }

    /// Returns the clue layout.
    #[must_use]
    pub const fn initial_board(&self) -> &DigitGrid {
        &self.initial
    }

    /// Returns the solution grid.
    #[must_use]
    pub const fn solution(&self) -> &DigitGrid {
        &self.solution
    }

    /// Returns the difficulty the puzzle was generated for.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the seed that reproduces the puzzle.
    #[must_use]
    pub const fn seed(&self) -> PuzzleSeed {
        self.seed
    }

    /// Returns the current selection, if any.
    #[must_use]
    pub const fn selected_cell(&self) -> Option<Position> {
        self.selected
    }

    /// Returns the session lifecycle state.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns `true` once the board equals the solution.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.status.is_complete()
    }

    /// Returns the occupied cells currently violating a rule.
    ///
    /// The set is symmetric: when two cells clash, both are reported.
    #[must_use]
    pub const fn conflicts(&self) -> PositionSet {
        self.conflicts
    }

    /// Returns the play time accrued so far.
    ///
    /// The clock stops in the same transition that completes the game, so
    /// this value is stable once [`is_complete`](Self::is_complete) holds.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }

    /// Returns `true` if the cell accepts player input.
    ///
    /// Givens are permanently fixed; everything else is editable.
    #[must_use]
    pub fn is_editable(&self, pos: Position) -> bool {
        self.initial[pos].is_none()
    }

    /// Returns the player-filled cells that match the solution.
    ///
    /// Used for progress display only; givens are not included.
    #[must_use]
    pub fn completed_cells(&self) -> PositionSet {
        Position::ALL
            .into_iter()
            .filter(|pos| self.is_editable(*pos) && self.board[*pos] == self.solution[*pos])
            .collect()
    }

    /// Moves the selection cursor.
    ///
    /// Any cell can be selected, givens included; the selection only gates
    /// whether [`input_digit`](Self::input_digit) applies.
    pub fn select_cell(&mut self, pos: Position) {
        self.selected = Some(pos);
    }

    /// Clears the selection cursor.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Writes a digit into the selected cell.
    ///
    /// Ignored without a selection, on a given cell, when the value would
    /// not change, or after completion. On a change, conflicts and
    /// completion are recomputed; reaching the solution stops the clock.
    pub fn input_digit(&mut self, digit: Digit) -> InputOutcome {
        self.write_selected(Some(digit))
    }

    /// Clears the selected cell.
    ///
    /// Ignored under the same conditions as [`input_digit`](Self::input_digit).
    pub fn clear_cell(&mut self) -> InputOutcome {
        self.write_selected(None)
    }

    fn write_selected(&mut self, value: Option<Digit>) -> InputOutcome {
        if self.status.is_complete() {
            return InputOutcome::Ignored;
        }
        let Some(pos) = self.selected else {
            return InputOutcome::Ignored;
        };
        if !self.is_editable(pos) || self.board[pos] == value {
            return InputOutcome::Ignored;
        }
        self.board.set(pos, value);
        self.refresh_derived_state();
        InputOutcome::Applied
    }

    /// Reveals the solution digit of one cell and returns its position.
    ///
    /// Targets an editable cell that does not yet hold its solution digit:
    /// conflicting cells first, then empty cells in row-major order. Every
    /// hint brings the board strictly closer to the solution, so repeated
    /// hints always finish the puzzle. Returns `None` (a no-op) when the
    /// game is complete or nothing qualifies.
    pub fn hint(&mut self) -> Option<Position> {
        if self.status.is_complete() {
            return None;
        }
        let pos = self
            .conflicts
            .into_iter()
            .find(|pos| self.is_editable(*pos) && self.board[*pos] != self.solution[*pos])
            .or_else(|| {
                Position::ALL
                    .into_iter()
                    .find(|pos| self.board[*pos].is_none())
            })?;
        debug!("hint reveals {pos}");
        self.board.set(pos, self.solution[pos]);
        self.refresh_derived_state();
        Some(pos)
    }

    /// Returns `true` if the board currently equals the solution
    /// cell-for-cell.
    ///
    /// Stronger than conflict-freedom: every cell must be occupied and
    /// match the unique target solution. Pure; repeated calls without
    /// intervening mutation return the same value.
    #[must_use]
    pub fn check_solution(&self) -> bool {
        self.board == self.solution
    }

    /// Restores the board to the clue layout and restarts the clock.
    ///
    /// The solution and clue layout are kept; conflicts and completion are
    /// cleared. Calling this twice in a row is equivalent to calling it
    /// once.
    pub fn reset(&mut self) {
        debug!("resetting {} game", self.difficulty);
        self.board = self.initial.clone();
        self.conflicts = PositionSet::EMPTY;
        self.status = GameStatus::Playing;
        self.clock.start();
    }

    /// Captures the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            initial_board: self.initial.clone(),
            selected_cell: self.selected,
            conflicts: self.conflicts,
            completed_cells: self.completed_cells(),
            difficulty: self.difficulty,
            is_complete: self.is_complete(),
            elapsed: self.elapsed(),
        }
    }

    /// Recomputes the conflict set and completion state after a board
    /// mutation; completion pauses the clock in the same step.
    fn refresh_derived_state(&mut self) {
        self.conflicts = rules::find_conflicts(&self.board);
        if self.conflicts.is_empty() && self.board.is_full() {
            debug!("puzzle complete in {:?}", self.clock.elapsed());
            self.status = GameStatus::Complete;
            self.clock.pause();
        }
    }
}
