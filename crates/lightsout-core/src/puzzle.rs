use crate::{Grid, Position, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Whether the puzzle has been won
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolvedState {
    /// At least one light is still on
    InProgress,
    /// Every light is off
    Solved,
}

impl SolvedState {
    pub fn is_solved(self) -> bool {
        self == SolvedState::Solved
    }
}

impl fmt::Display for SolvedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolvedState::InProgress => write!(f, "In progress"),
            SolvedState::Solved => write!(f, "Solved"),
        }
    }
}

/// The Lights Out engine: an owned grid plus its own random source.
///
/// Toggles are accepted whether or not the puzzle is solved; reacting to a
/// win is up to the caller.
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: Grid,
    rng: ChaCha8Rng,
}

impl Puzzle {
    /// Create an all-lit puzzle, seeding the random source from the thread RNG
    pub fn new(size: usize) -> Result<Self> {
        Self::with_seed(size, rand::random())
    }

    /// Create an all-lit puzzle with a fixed seed for reproducible randomizing
    pub fn with_seed(size: usize, seed: u64) -> Result<Self> {
        Ok(Self {
            grid: Grid::lit(size)?,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Start from an existing grid
    pub fn from_grid(grid: Grid, seed: u64) -> Self {
        Self {
            grid,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Replace the grid with a fresh `size`x`size` all-lit grid.
    ///
    /// On error the previous grid is kept.
    pub fn reset(&mut self, size: usize) -> Result<()> {
        self.grid = Grid::lit(size)?;
        debug!(size, "puzzle reset");
        Ok(())
    }

    /// Light each cell independently with probability 1/2
    pub fn randomize(&mut self) {
        let rng = &mut self.rng;
        self.grid.fill_with(|| rng.gen_bool(0.5));
        debug!(grid = %self.grid.to_string_compact(), "puzzle randomized");
    }

    /// Press the cell at (`row`, `col`), flipping it and its orthogonal
    /// neighbours. Off-grid coordinates are rejected and change nothing.
    pub fn toggle(&mut self, row: isize, col: isize) -> Result<SolvedState> {
        let pos = self.grid.position(row, col)?;
        self.toggle_at(pos)
    }

    /// Like [`Puzzle::toggle`], for a position already in grid coordinates
    pub fn toggle_at(&mut self, pos: Position) -> Result<SolvedState> {
        self.grid.press(pos)?;
        Ok(self.state())
    }

    /// True iff every cell is unlit
    pub fn is_solved(&self) -> bool {
        self.grid.is_all_unlit()
    }

    /// Current meta-state, derived from [`Puzzle::is_solved`]
    pub fn state(&self) -> SolvedState {
        if self.is_solved() {
            SolvedState::Solved
        } else {
            SolvedState::InProgress
        }
    }

    /// Lit state of the cell at (`row`, `col`)
    pub fn cell_state(&self, row: isize, col: isize) -> Result<bool> {
        let pos = self.grid.position(row, col)?;
        Ok(self.grid.get(pos).unwrap_or(false))
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PuzzleError;

    fn lit_positions(puzzle: &Puzzle) -> Vec<(usize, usize)> {
        puzzle
            .grid()
            .positions()
            .filter(|&p| puzzle.grid().get(p) == Some(true))
            .map(|p| (p.row, p.col))
            .collect()
    }

    #[test]
    fn test_new_is_all_lit() {
        let puzzle = Puzzle::with_seed(3, 1).unwrap();
        assert_eq!(puzzle.size(), 3);
        assert_eq!(puzzle.grid().lit_count(), 9);
        assert!(!puzzle.is_solved());
        assert_eq!(puzzle.state(), SolvedState::InProgress);
    }

    #[test]
    fn test_reset_changes_size() {
        let mut puzzle = Puzzle::with_seed(3, 1).unwrap();
        puzzle.toggle(0, 0).unwrap();
        for size in 1..=7 {
            puzzle.reset(size).unwrap();
            assert_eq!(puzzle.size(), size);
            assert_eq!(puzzle.grid().lit_count(), size * size);
            assert!(!puzzle.is_solved());
        }
    }

    #[test]
    fn test_reset_zero_keeps_grid() {
        let mut puzzle = Puzzle::with_seed(4, 1).unwrap();
        puzzle.toggle(1, 1).unwrap();
        let before = puzzle.grid().clone();
        assert!(matches!(puzzle.reset(0), Err(PuzzleError::InvalidArgument(_))));
        assert_eq!(puzzle.grid(), &before);
    }

    #[test]
    fn test_toggle_center_3x3() {
        let mut puzzle = Puzzle::with_seed(3, 1).unwrap();
        let state = puzzle.toggle(1, 1).unwrap();
        assert_eq!(state, SolvedState::InProgress);
        assert_eq!(lit_positions(&puzzle), vec![(0, 0), (0, 2), (2, 0), (2, 2)]);
        assert!(!puzzle.is_solved());
    }

    #[test]
    fn test_toggle_corner_3x3() {
        let mut puzzle = Puzzle::with_seed(3, 1).unwrap();
        puzzle.toggle(0, 0).unwrap();
        assert!(!puzzle.cell_state(0, 0).unwrap());
        assert!(!puzzle.cell_state(0, 1).unwrap());
        assert!(!puzzle.cell_state(1, 0).unwrap());
        assert_eq!(
            lit_positions(&puzzle),
            vec![(0, 2), (1, 1), (1, 2), (2, 0), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn test_toggle_out_of_bounds() {
        let mut puzzle = Puzzle::with_seed(3, 1).unwrap();
        let before = puzzle.grid().clone();
        for (row, col) in [(-1, 0), (3, 0), (0, -1), (0, 3), (isize::MIN, isize::MAX)] {
            assert!(matches!(
                puzzle.toggle(row, col),
                Err(PuzzleError::InvalidArgument(_))
            ));
        }
        assert_eq!(puzzle.grid(), &before);
        assert!(puzzle.cell_state(3, 3).is_err());
    }

    #[test]
    fn test_toggle_reports_solved() {
        // Pressing the center of a plus shape clears it
        let grid = Grid::from_string(".#./###/.#.").unwrap();
        let mut puzzle = Puzzle::from_grid(grid, 7);
        assert_eq!(puzzle.toggle(1, 1).unwrap(), SolvedState::Solved);
        assert!(puzzle.is_solved());

        // Still accepts toggles after the win
        assert_eq!(puzzle.toggle(1, 1).unwrap(), SolvedState::InProgress);
    }

    #[test]
    fn test_single_flip_unsolves() {
        let grid = Grid::unlit(4).unwrap();
        for pos in grid.positions() {
            let mut g = grid.clone();
            g.flip(pos).unwrap();
            assert!(!Puzzle::from_grid(g, 0).is_solved());
        }
        assert!(Puzzle::from_grid(grid, 0).is_solved());
    }

    #[test]
    fn test_randomize_keeps_size() {
        let mut puzzle = Puzzle::with_seed(5, 3).unwrap();
        puzzle.randomize();
        assert_eq!(puzzle.size(), 5);
        assert_eq!(puzzle.grid().cells().len(), 25);
    }

    #[test]
    fn test_randomize_is_seeded() {
        let mut a = Puzzle::with_seed(5, 99).unwrap();
        let mut b = Puzzle::with_seed(5, 99).unwrap();
        for _ in 0..10 {
            a.randomize();
            b.randomize();
            assert_eq!(a.grid(), b.grid());
        }
    }

    #[test]
    fn test_randomize_distribution() {
        let mut puzzle = Puzzle::with_seed(5, 2024).unwrap();
        let rounds = 2000;
        let mut lit = vec![0usize; 25];
        for _ in 0..rounds {
            puzzle.randomize();
            for (count, &cell) in lit.iter_mut().zip(puzzle.grid().cells()) {
                if cell {
                    *count += 1;
                }
            }
        }
        for (idx, count) in lit.iter().enumerate() {
            let ratio = *count as f64 / rounds as f64;
            assert!(
                (0.45..=0.55).contains(&ratio),
                "cell {} lit {:.3} of the time",
                idx,
                ratio
            );
        }
    }

    #[test]
    fn test_solved_state_display() {
        assert_eq!(SolvedState::Solved.to_string(), "Solved");
        assert!(SolvedState::Solved.is_solved());
        assert!(!SolvedState::InProgress.is_solved());
    }
}
