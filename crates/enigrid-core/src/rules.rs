//! Pure rule predicates over a [`DigitGrid`].
//!
//! These functions have no state and no failure modes: every [`Position`]
//! and [`Digit`] value is in range by construction.

use crate::{digit::Digit, grid::DigitGrid, position::Position, position_set::PositionSet};

/// Returns `true` if placing `digit` at `pos` introduces no duplicate in
/// the cell's row, column, or 3x3 box.
///
/// The current value at `pos` itself is ignored, so the check can be used
/// both for filling empty cells and for replacing existing values.
///
/// # Examples
///
/// ```
/// use enigrid_core::{Digit, DigitGrid, Position, rules};
///
/// let mut grid = DigitGrid::new();
/// grid.set(Position::new(0, 0), Some(Digit::D5));
///
/// assert!(!rules::is_valid_placement(&grid, Position::new(4, 0), Digit::D5));
/// assert!(rules::is_valid_placement(&grid, Position::new(4, 0), Digit::D6));
/// // Replacing a cell with its own value is always legal
/// assert!(rules::is_valid_placement(&grid, Position::new(0, 0), Digit::D5));
/// ```
#[must_use]
pub fn is_valid_placement(grid: &DigitGrid, pos: Position, digit: Digit) -> bool {
    pos.peers().iter().all(|peer| grid[*peer] != Some(digit))
}

/// Returns every occupied position whose digit also appears in a peer cell.
///
/// The result is symmetric: when two cells clash, both are included.
#[must_use]
pub fn find_conflicts(grid: &DigitGrid) -> PositionSet {
    let mut conflicts = PositionSet::new();
    for pos in Position::ALL {
        if let Some(digit) = grid[pos]
            && !is_valid_placement(grid, pos, digit)
        {
            conflicts.insert(pos);
        }
    }
    conflicts
}

/// Returns `true` if every cell is occupied and no conflicts remain.
#[must_use]
pub fn is_complete(grid: &DigitGrid) -> bool {
    grid.is_full() && find_conflicts(grid).is_empty()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const SOLVED: &str =
        "185362947793148526246795183564239871931874265827516394318427659672951438459683712";

    fn solved_grid() -> DigitGrid {
        SOLVED.parse().expect("valid solved grid")
    }

    #[test]
    fn test_valid_placement_on_empty_grid() {
        let grid = DigitGrid::new();
        for pos in [Position::new(0, 0), Position::new(4, 4), Position::new(8, 8)] {
            for digit in Digit::ALL {
                assert!(is_valid_placement(&grid, pos, digit));
            }
        }
    }

    #[test]
    fn test_placement_rejected_per_house() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(4, 4), Some(Digit::D7));

        // Same row, same column, same box
        assert!(!is_valid_placement(&grid, Position::new(0, 4), Digit::D7));
        assert!(!is_valid_placement(&grid, Position::new(4, 0), Digit::D7));
        assert!(!is_valid_placement(&grid, Position::new(3, 3), Digit::D7));
        // Unrelated cell
        assert!(is_valid_placement(&grid, Position::new(0, 0), Digit::D7));
    }

    #[test]
    fn test_find_conflicts_marks_both_cells() {
        let mut grid = DigitGrid::new();
        grid.set(Position::new(1, 0), Some(Digit::D3));
        grid.set(Position::new(7, 0), Some(Digit::D3));

        let conflicts = find_conflicts(&grid);
        assert_eq!(conflicts.len(), 2);
        assert!(conflicts.contains(Position::new(1, 0)));
        assert!(conflicts.contains(Position::new(7, 0)));
    }

    #[test]
    fn test_find_conflicts_empty_for_valid_grids() {
        assert!(find_conflicts(&DigitGrid::new()).is_empty());
        assert!(find_conflicts(&solved_grid()).is_empty());
    }

    #[test]
    fn test_is_complete() {
        assert!(is_complete(&solved_grid()));
        assert!(!is_complete(&DigitGrid::new()));

        // Full but conflicting: overwrite one cell with a duplicate
        let mut grid = solved_grid();
        grid.set(Position::new(0, 0), grid.get(Position::new(1, 0)));
        assert!(grid.is_full());
        assert!(!is_complete(&grid));

        // Valid but not full
        let mut grid = solved_grid();
        grid.set(Position::new(0, 0), None);
        assert!(!is_complete(&grid));
    }

    proptest! {
        /// If a position is conflicting, some peer holds the same digit and
        /// is itself reported as conflicting.
        #[test]
        fn prop_conflicts_are_symmetric(cells in prop::collection::vec((0usize..81, 1u8..=9), 0..30)) {
            let mut grid = DigitGrid::new();
            for (index, value) in cells {
                grid.set(Position::from_index(index), Digit::try_from_value(value));
            }

            let conflicts = find_conflicts(&grid);
            for pos in conflicts {
                let digit = grid[pos].expect("conflicting cells are occupied");
                let clashing_peer = pos
                    .peers()
                    .into_iter()
                    .find(|peer| grid[*peer] == Some(digit))
                    .expect("conflicting cell has a clashing peer");
                prop_assert!(conflicts.contains(clashing_peer));
            }
        }

        /// Cells whose digit is unique in every house are never reported.
        #[test]
        fn prop_lone_digits_never_conflict(index in 0usize..81, value in 1u8..=9) {
            let mut grid = DigitGrid::new();
            grid.set(Position::from_index(index), Digit::try_from_value(value));
            prop_assert!(find_conflicts(&grid).is_empty());
        }
    }
}
