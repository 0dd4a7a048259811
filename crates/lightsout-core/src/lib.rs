//! Lights Out puzzle engine.
//!
//! A square grid of lights; pressing a cell flips it and its up, down, left
//! and right neighbours. The puzzle is won when every light is off.
//!
//! ```
//! use lightsout_core::{Puzzle, SolvedState};
//!
//! let mut puzzle = Puzzle::with_seed(3, 42)?;
//! assert_eq!(puzzle.toggle(1, 1)?, SolvedState::InProgress);
//! assert!(!puzzle.cell_state(0, 1)?);
//! assert!(puzzle.cell_state(0, 0)?);
//! # Ok::<(), lightsout_core::PuzzleError>(())
//! ```

mod error;
mod grid;
mod puzzle;
mod solver;

pub use error::{PuzzleError, Result};
pub use grid::{Grid, Position};
pub use puzzle::{Puzzle, SolvedState};
pub use solver::{Solution, Solver};
