//! Puzzle generation: solution fill and uniqueness-preserving carving.

use enigrid_core::{Digit, DigitGrid, Position, rules};
use log::{debug, trace};
use rand::{SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;

use crate::{difficulty::Difficulty, seed::PuzzleSeed};

/// A generated puzzle: the clue layout, its unique solution, and the
/// parameters that produced it.
///
/// `problem` is a sub-assignment of `solution` (every clue matches the
/// solution cell) with exactly one valid completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The clue layout presented to the player.
    pub problem: DigitGrid,
    /// The complete solution the clues were carved from.
    pub solution: DigitGrid,
    /// The difficulty tier the puzzle was generated for.
    pub difficulty: Difficulty,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
}

impl GeneratedPuzzle {
    /// Returns the number of clues in the problem grid.
    #[must_use]
    pub fn clue_count(&self) -> usize {
        self.problem.clue_count()
    }
}

/// Generates puzzles for a fixed difficulty tier.
///
/// # Examples
///
/// ```
/// use enigrid_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new(Difficulty::Medium);
///
/// // Seeded generation is reproducible
/// let seed = PuzzleSeed::from_phrase("docs");
/// let a = generator.generate_with_seed(seed);
/// let b = generator.generate_with_seed(seed);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PuzzleGenerator {
    difficulty: Difficulty,
}

impl PuzzleGenerator {
    /// Creates a generator for the given difficulty tier.
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    /// Returns the difficulty tier this generator produces.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// The same seed and difficulty always produce the same puzzle. The
    /// solution grid depends on the seed alone, so tiers generated from one
    /// seed share their solution and differ only in how far carving went.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = Pcg64::from_seed(*seed.as_bytes());
        let solution = fill_solution(&mut rng);
        let problem = carve(&solution, self.difficulty.target_clues(), &mut rng);
        debug!(
            "generated {} puzzle: {} clues (seed {seed})",
            self.difficulty,
            problem.clue_count(),
        );
        GeneratedPuzzle {
            problem,
            solution,
            difficulty: self.difficulty,
            seed,
        }
    }
}

/// Counts the valid completions of `grid`, stopping early at `limit`.
///
/// The same backtracking search drives generation (`limit` 1) and
/// uniqueness proofs (`limit` 2); this function exposes it for callers that
/// want to verify a puzzle. The result saturates at `limit`: a return value
/// of 2 with `limit` 2 means "two or more".
///
/// # Examples
///
/// ```
/// use enigrid_core::DigitGrid;
/// use enigrid_generator::count_solutions;
///
/// // An empty grid has a vast number of completions; the search stops at 2.
/// assert_eq!(count_solutions(&DigitGrid::new(), 2), 2);
/// ```
#[must_use]
pub fn count_solutions(grid: &DigitGrid, limit: usize) -> usize {
    // The search only validates the cells it places, so a grid that already
    // breaks the rules must be rejected up front.
    if !rules::find_conflicts(grid).is_empty() {
        return 0;
    }
    let mut grid = grid.clone();
    // Candidate order does not affect the count; any fixed stream works here.
    let mut rng = Pcg64::seed_from_u64(0);
    let mut search = CompletionSearch::new(&mut grid, &mut rng, limit);
    search.run();
    search.found
}

/// Builds a complete, rule-valid solution grid with randomized backtracking.
fn fill_solution(rng: &mut Pcg64) -> DigitGrid {
    let mut grid = DigitGrid::new();
    let mut search = CompletionSearch::new(&mut grid, rng, 1);
    search.run();
    let solution = search
        .first
        .expect("an empty grid always has a completion");
    debug_assert!(rules::is_complete(&solution));
    solution
}

/// Removes clues from a copy of `solution` while the puzzle keeps a unique
/// completion, stopping once `target_clues` is reached.
///
/// Positions are visited in one shuffled pass; a removal that breaks
/// uniqueness is restored and that position is not retried. When the pass
/// ends above the target, the result is accepted as-is.
fn carve(solution: &DigitGrid, target_clues: usize, rng: &mut Pcg64) -> DigitGrid {
    let mut problem = solution.clone();
    let mut order = Position::ALL;
    order.shuffle(rng);

    let mut clues = 81;
    for pos in order {
        if clues <= target_clues {
            break;
        }
        let removed = problem[pos].take();
        let mut search = CompletionSearch::new(&mut problem, rng, 2);
        search.run();
        if search.found == 1 {
            clues -= 1;
        } else {
            trace!("removal at {pos} breaks uniqueness, restoring");
            problem[pos] = removed;
        }
    }

    if clues > target_clues {
        debug!("carving stopped at {clues} clues (target {target_clues})");
    }
    debug_assert_eq!(problem.clue_count(), clues);
    problem
}

/// Backtracking search over the completions of a grid.
///
/// Fills the first empty cell (row-major) with candidate digits in a
/// shuffled order, recursing on each legal placement and undoing it on the
/// way back, so the grid always returns to its input state. The search
/// aborts as soon as `limit` completions have been found; the first
/// completion encountered is kept in `first`.
struct CompletionSearch<'a> {
    grid: &'a mut DigitGrid,
    rng: &'a mut Pcg64,
    limit: usize,
    found: usize,
    first: Option<DigitGrid>,
}

impl<'a> CompletionSearch<'a> {
    fn new(grid: &'a mut DigitGrid, rng: &'a mut Pcg64, limit: usize) -> Self {
        Self {
            grid,
            rng,
            limit,
            found: 0,
            first: None,
        }
    }

    fn run(&mut self) {
        let Some(pos) = self.first_empty() else {
            // Every cell is occupied; placements were legal all the way down.
            if self.first.is_none() {
                self.first = Some(self.grid.clone());
            }
            self.found += 1;
            return;
        };

        let mut candidates = Digit::ALL;
        candidates.shuffle(self.rng);
        for digit in candidates {
            if !rules::is_valid_placement(self.grid, pos, digit) {
                continue;
            }
            self.grid.set(pos, Some(digit));
            self.run();
            self.grid.set(pos, None);
            if self.found >= self.limit {
                return;
            }
        }
    }

    fn first_empty(&self) -> Option<Position> {
        Position::ALL.into_iter().find(|pos| self.grid[*pos].is_none())
    }
}
