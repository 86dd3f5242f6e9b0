//! The 9x9 board of optional digits.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{digit::Digit, position::Position, position_set::PositionSet};

/// A 9x9 board where each cell holds a [`Digit`] or is empty.
///
/// Cells are addressed by [`Position`] through `Index`/`IndexMut` or the
/// [`get`](Self::get)/[`set`](Self::set) accessors. The grid has an
/// 81-character text form (row-major, `.` for empty cells) used by tests,
/// benchmarks, and tooling.
///
/// # Examples
///
/// ```
/// use enigrid_core::{Digit, DigitGrid, Position};
///
/// let mut grid = DigitGrid::new();
/// grid.set(Position::new(0, 0), Some(Digit::D1));
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D1));
/// assert_eq!(grid.clue_count(), 1);
///
/// let parsed: DigitGrid = format!("1{}", ".".repeat(80)).parse()?;
/// assert_eq!(parsed, grid);
/// # Ok::<(), enigrid_core::ParseDigitGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the cell value at the position.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets or clears the cell value at the position.
    pub const fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index()] = digit;
    }

    /// Returns the number of occupied cells.
    #[must_use]
    pub fn clue_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the set of empty positions.
    #[must_use]
    pub fn empty_positions(&self) -> PositionSet {
        Position::ALL
            .into_iter()
            .filter(|pos| self[*pos].is_none())
            .collect()
    }

    /// Returns an iterator over all cells as `(Position, Option<Digit>)`
    /// pairs, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Option<Digit>)> {
        Position::ALL.into_iter().map(|pos| (pos, self[pos]))
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Option<Digit> {
        &self.cells[pos.index()]
    }
}

impl IndexMut<Position> for DigitGrid {
    fn index_mut(&mut self, pos: Position) -> &mut Option<Digit> {
        &mut self.cells[pos.index()]
    }
}

/// Error parsing a [`DigitGrid`] from its 81-character text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseDigitGridError {
    /// The input did not contain exactly 81 characters.
    #[display("expected 81 characters, found {_0}")]
    InvalidLength(#[error(not(source))] usize),
    /// A character was not a digit 1-9, `.`, or `0`.
    #[display("invalid character {character:?} at index {index}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Its index in the input string.
        index: usize,
    },
}

impl FromStr for DigitGrid {
    type Err = ParseDigitGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 81 {
            return Err(ParseDigitGridError::InvalidLength(len));
        }
        let mut grid = Self::new();
        for (index, character) in s.chars().enumerate() {
            let digit = match character {
                '.' | '0' => None,
                '1'..='9' => Digit::try_from_value(character as u8 - b'0'),
                _ => return Err(ParseDigitGridError::InvalidCharacter { character, index }),
            };
            grid.cells[index] = digit;
        }
        Ok(grid)
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => Display::fmt(digit, f)?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const SOLVED: &str =
        "185362947793148526246795183564239871931874265827516394318427659672951438459683712";

    #[test]
    fn test_new_grid_is_empty() {
        let grid = DigitGrid::new();
        assert_eq!(grid.clue_count(), 0);
        assert!(!grid.is_full());
        assert_eq!(grid.empty_positions().len(), 81);
        for pos in Position::ALL {
            assert_eq!(grid[pos], None);
        }
    }

    #[test]
    fn test_set_get_index() {
        let mut grid = DigitGrid::new();
        let pos = Position::new(5, 2);

        grid.set(pos, Some(Digit::D9));
        assert_eq!(grid.get(pos), Some(Digit::D9));
        assert_eq!(grid[pos], Some(Digit::D9));

        grid[pos] = Some(Digit::D1);
        assert_eq!(grid.get(pos), Some(Digit::D1));

        grid.set(pos, None);
        assert_eq!(grid.get(pos), None);
    }

    #[test]
    fn test_parse_solved_grid() {
        let grid: DigitGrid = SOLVED.parse().expect("valid grid");
        assert!(grid.is_full());
        assert_eq!(grid.clue_count(), 81);
        assert_eq!(grid[Position::new(0, 0)], Some(Digit::D1));
        assert_eq!(grid[Position::new(8, 8)], Some(Digit::D2));
    }

    #[test]
    fn test_parse_accepts_zero_as_empty() {
        let dotted: DigitGrid = format!("5{}", ".".repeat(80)).parse().expect("valid grid");
        let zeroed: DigitGrid = format!("5{}", "0".repeat(80)).parse().expect("valid grid");
        assert_eq!(dotted, zeroed);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "123".parse::<DigitGrid>(),
            Err(ParseDigitGridError::InvalidLength(3))
        );
        assert_eq!(
            format!("x{}", ".".repeat(80)).parse::<DigitGrid>(),
            Err(ParseDigitGridError::InvalidCharacter {
                character: 'x',
                index: 0,
            })
        );
    }

    #[test]
    fn test_display_round_trip() {
        let grid: DigitGrid = SOLVED.parse().expect("valid grid");
        assert_eq!(grid.to_string(), SOLVED);

        let sparse: DigitGrid = format!(".7{}", ".".repeat(79)).parse().expect("valid grid");
        assert_eq!(sparse.to_string(), format!(".7{}", ".".repeat(79)));
    }

    proptest! {
        #[test]
        fn prop_display_parse_round_trip(cells in prop::collection::vec(0u8..=9, 81)) {
            let mut grid = DigitGrid::new();
            for (i, value) in cells.iter().enumerate() {
                grid.set(Position::from_index(i), Digit::try_from_value(*value));
            }
            let reparsed: DigitGrid = grid.to_string().parse().unwrap();
            prop_assert_eq!(reparsed, grid);
        }
    }
}
