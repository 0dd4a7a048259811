//! Lights Out solver.
//!
//! Pressing a cell twice cancels out and presses commute, so a board `b` is
//! solved by a press set `x` exactly when `A·x = b` over GF(2), where row `i`
//! of `A` marks the cells flipped by pressing cell `i`. The solver reduces
//! the augmented system `[A | b]` to reduced row echelon form, reads off one
//! solution, and searches the null space for the shortest one.

use crate::{Grid, Position};
use tracing::trace;

/// Null spaces up to this dimension are searched exhaustively for the
/// shortest solution (2^16 candidates).
const MAX_EXHAUSTIVE_NULLITY: usize = 16;

/// A fixed-width row of bits over GF(2)
#[derive(Debug, Clone, PartialEq, Eq)]
struct BitRow {
    words: Vec<u64>,
}

impl BitRow {
    fn zeros(bits: usize) -> Self {
        Self {
            words: vec![0; bits.div_ceil(64)],
        }
    }

    fn get(&self, bit: usize) -> bool {
        self.words[bit / 64] & (1u64 << (bit % 64)) != 0
    }

    fn set(&mut self, bit: usize, value: bool) {
        let mask = 1u64 << (bit % 64);
        if value {
            self.words[bit / 64] |= mask;
        } else {
            self.words[bit / 64] &= !mask;
        }
    }

    fn xor_assign(&mut self, other: &BitRow) {
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a ^= b;
        }
    }

    fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

/// An augmented system `[A | b]` in reduced row echelon form
struct Reduced {
    /// Number of cells (unknowns)
    cells: usize,
    rows: Vec<BitRow>,
    /// Pivot column of each of the first `pivots.len()` rows
    pivots: Vec<usize>,
}

impl Reduced {
    fn new(grid: &Grid) -> Self {
        let cells = grid.cells().len();
        let rhs = cells;

        let mut rows: Vec<BitRow> = grid
            .positions()
            .enumerate()
            .map(|(i, pos)| {
                let mut row = BitRow::zeros(cells + 1);
                // A is symmetric, so row i lists the presses that flip cell i
                for n in grid.neighborhood(pos) {
                    row.set(n.row * grid.size() + n.col, true);
                }
                row.set(rhs, grid.cells()[i]);
                row
            })
            .collect();

        let mut pivots = Vec::new();
        for col in 0..cells {
            let rank = pivots.len();
            let Some(found) = (rank..rows.len()).find(|&r| rows[r].get(col)) else {
                continue;
            };
            rows.swap(rank, found);
            let pivot = rows[rank].clone();
            for (r, row) in rows.iter_mut().enumerate() {
                if r != rank && row.get(col) {
                    row.xor_assign(&pivot);
                }
            }
            pivots.push(col);
        }

        Self {
            cells,
            rows,
            pivots,
        }
    }

    fn is_consistent(&self) -> bool {
        // Rows past the rank have no coefficients left; a set rhs means 0 = 1
        self.rows[self.pivots.len()..]
            .iter()
            .all(|row| !row.get(self.cells))
    }

    fn free_columns(&self) -> Vec<usize> {
        let mut is_pivot = vec![false; self.cells];
        for &p in &self.pivots {
            is_pivot[p] = true;
        }
        (0..self.cells).filter(|&c| !is_pivot[c]).collect()
    }

    /// The solution with every free variable set to zero
    fn particular(&self) -> BitRow {
        let mut x = BitRow::zeros(self.cells);
        for (row, &col) in self.rows.iter().zip(&self.pivots) {
            x.set(col, row.get(self.cells));
        }
        x
    }

    /// One null-space vector per free column
    fn null_basis(&self) -> Vec<BitRow> {
        self.free_columns()
            .into_iter()
            .map(|free| {
                let mut v = BitRow::zeros(self.cells);
                v.set(free, true);
                for (row, &col) in self.rows.iter().zip(&self.pivots) {
                    v.set(col, row.get(free));
                }
                v
            })
            .collect()
    }
}

/// A set of presses that turns every light off
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    presses: Vec<Position>,
}

impl Solution {
    /// Presses in row-major order
    pub fn presses(&self) -> &[Position] {
        &self.presses
    }

    pub fn len(&self) -> usize {
        self.presses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presses.is_empty()
    }

    /// Press every cell of the solution on `grid`
    pub fn apply_to(&self, grid: &mut Grid) -> crate::Result<()> {
        for &pos in &self.presses {
            grid.press(pos)?;
        }
        Ok(())
    }
}

/// GF(2) Lights Out solver
#[derive(Debug, Clone, Default)]
pub struct Solver;

impl Solver {
    pub fn new() -> Self {
        Self
    }

    /// Find the presses that solve `grid`, or `None` if no press set does.
    ///
    /// The result has the fewest presses whenever the board's null space
    /// is small enough to search (true for every size up to 5x5).
    pub fn solve(&self, grid: &Grid) -> Option<Solution> {
        let reduced = Reduced::new(grid);
        if !reduced.is_consistent() {
            return None;
        }

        let mut best = reduced.particular();
        let basis = reduced.null_basis();
        trace!(
            size = grid.size(),
            nullity = basis.len(),
            "reduced lights out system"
        );

        if basis.len() <= MAX_EXHAUSTIVE_NULLITY {
            let start = best.clone();
            let mut best_weight = best.count_ones();
            for mask in 1u32..(1u32 << basis.len()) {
                let mut candidate = start.clone();
                for (i, v) in basis.iter().enumerate() {
                    if mask & (1 << i) != 0 {
                        candidate.xor_assign(v);
                    }
                }
                let weight = candidate.count_ones();
                if weight < best_weight {
                    best_weight = weight;
                    best = candidate;
                }
            }
        }

        let size = grid.size();
        let presses = (0..reduced.cells)
            .filter(|&i| best.get(i))
            .map(|i| Position::new(i / size, i % size))
            .collect();
        Some(Solution { presses })
    }

    /// Check whether any sequence of presses turns every light off
    pub fn is_solvable(&self, grid: &Grid) -> bool {
        Reduced::new(grid).is_consistent()
    }

    /// The next cell to press, or `None` if the board is solved or unsolvable
    pub fn hint(&self, grid: &Grid) -> Option<Position> {
        self.solve(grid)?.presses.first().copied()
    }

    /// Press patterns that leave any board unchanged (a null-space basis).
    ///
    /// A board is solvable exactly when it has an even number of lit cells
    /// in common with every quiet pattern.
    pub fn quiet_patterns(&self, size: usize) -> crate::Result<Vec<Grid>> {
        let empty = Grid::unlit(size)?;
        let reduced = Reduced::new(&empty);
        let mut patterns = Vec::new();
        for v in reduced.null_basis() {
            let mut pattern = empty.clone();
            for pos in empty.positions() {
                if v.get(pos.row * size + pos.col) {
                    pattern.set(pos, true)?;
                }
            }
            patterns.push(pattern);
        }
        Ok(patterns)
    }
}
