use lightsout_core::{Grid, Position, Puzzle, Result, SolvedState, Solver};
use tracing::{debug, info};

/// How many boards to deal before settling for an unsolvable one
const MAX_DEALS: usize = 64;

/// The game state: the engine plus dealing policy and solver queries
#[derive(Debug, Clone)]
pub struct Game {
    puzzle: Puzzle,
    solver: Solver,
    /// Re-deal random boards that cannot be solved
    solvable_only: bool,
}

impl Game {
    /// Create an all-lit game of the given size
    pub fn new(size: usize, seed: Option<u64>, solvable_only: bool) -> Result<Self> {
        let puzzle = match seed {
            Some(seed) => Puzzle::with_seed(size, seed)?,
            None => Puzzle::new(size)?,
        };
        info!(size, ?seed, solvable_only, "new game");
        Ok(Self {
            puzzle,
            solver: Solver::new(),
            solvable_only,
        })
    }

    pub fn grid(&self) -> &Grid {
        self.puzzle.grid()
    }

    pub fn size(&self) -> usize {
        self.puzzle.size()
    }

    pub fn is_solved(&self) -> bool {
        self.puzzle.is_solved()
    }

    /// Check if a cell is lit
    pub fn is_lit(&self, pos: Position) -> bool {
        self.grid().get(pos).unwrap_or(false)
    }

    /// Deal a random board.
    ///
    /// Boards that are already solved are re-dealt, and so are unsolvable
    /// ones in solvable-only mode.
    pub fn new_game(&mut self) {
        for deal in 1..=MAX_DEALS {
            self.puzzle.randomize();
            let acceptable = !self.puzzle.is_solved()
                && (!self.solvable_only || self.solver.is_solvable(self.grid()));
            if acceptable {
                debug!(deal, "dealt board");
                return;
            }
        }
        debug!("gave up re-dealing after {} boards", MAX_DEALS);
    }

    /// Switch to an all-lit board of `size`
    pub fn reset(&mut self, size: usize) -> Result<()> {
        self.puzzle.reset(size)?;
        info!(size, "board reset");
        Ok(())
    }

    /// Press a cell
    pub fn press(&mut self, pos: Position) -> Result<SolvedState> {
        let state = self.puzzle.toggle_at(pos)?;
        debug!(%pos, %state, "pressed");
        Ok(state)
    }

    pub fn is_solvable(&self) -> bool {
        self.solver.is_solvable(self.grid())
    }

    /// The next cell to press, if the board can still be solved
    pub fn hint(&self) -> Option<Position> {
        self.solver.hint(self.grid())
    }

    /// Fewest presses left to win, or `None` if the board is unsolvable
    pub fn min_presses(&self) -> Option<usize> {
        self.solver.solve(self.grid()).map(|s| s.len())
    }
}
