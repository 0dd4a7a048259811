use crate::{PuzzleError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Offsets of the cells flipped by a press: the cell itself plus its
/// up/down/left/right neighbours. Diagonals are never part of it.
const NEIGHBORHOOD: [(isize, isize); 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];

/// A cell position on the grid (row, column), zero-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A square grid of lights, stored row-major. `true` is lit.
///
/// A grid is always fully allocated: `cells.len() == size * size` and
/// `size >= 1`. Every constructor enforces this.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a `size`x`size` grid with every cell lit
    pub fn lit(size: usize) -> Result<Self> {
        Self::filled(size, true)
    }

    /// Create a `size`x`size` grid with every cell unlit (already solved)
    pub fn unlit(size: usize) -> Result<Self> {
        Self::filled(size, false)
    }

    fn filled(size: usize, value: bool) -> Result<Self> {
        if size == 0 {
            return Err(PuzzleError::invalid_size(size));
        }
        let len = size
            .checked_mul(size)
            .ok_or_else(|| PuzzleError::invalid_size(size))?;
        Ok(Self {
            size,
            cells: vec![value; len],
        })
    }

    /// Parse a grid from rows of `#` (lit) and `.` (unlit).
    ///
    /// Rows are separated by `/` or newlines; surrounding whitespace is
    /// ignored. `1`/`*` and `0` are accepted as aliases. Returns `None` if
    /// the rows do not form a non-empty square.
    pub fn from_string(s: &str) -> Option<Self> {
        let rows: Vec<&str> = s
            .split(|c: char| c == '/' || c == '\n')
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();

        let size = rows.len();
        if size == 0 {
            return None;
        }

        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let start = cells.len();
            for ch in row.chars() {
                match ch {
                    '#' | '*' | '1' => cells.push(true),
                    '.' | '0' => cells.push(false),
                    _ => return None,
                }
            }
            if cells.len() - start != size {
                return None;
            }
        }

        Some(Self { size, cells })
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major cell states
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Iterate over the rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.size)
    }

    /// Iterate over every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Check that a position lies on this grid
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Convert signed coordinates to a position, rejecting anything off the grid
    pub fn position(&self, row: isize, col: isize) -> Result<Position> {
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) if r < self.size && c < self.size => Ok(Position::new(r, c)),
            _ => Err(PuzzleError::out_of_bounds(row, col, self.size)),
        }
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }

    fn check(&self, pos: Position) -> Result<usize> {
        if self.contains(pos) {
            Ok(self.index(pos))
        } else {
            Err(PuzzleError::out_of_bounds(
                pos.row as isize,
                pos.col as isize,
                self.size,
            ))
        }
    }

    /// Lit state of a cell, or `None` if the position is off the grid
    pub fn get(&self, pos: Position) -> Option<bool> {
        self.contains(pos).then(|| self.cells[self.index(pos)])
    }

    /// Set a single cell without touching its neighbours
    pub fn set(&mut self, pos: Position, lit: bool) -> Result<()> {
        let idx = self.check(pos)?;
        self.cells[idx] = lit;
        Ok(())
    }

    /// Flip a single cell without touching its neighbours
    pub fn flip(&mut self, pos: Position) -> Result<()> {
        let idx = self.check(pos)?;
        self.cells[idx] = !self.cells[idx];
        Ok(())
    }

    /// The cells flipped by pressing `pos`, clipped to the grid (no wraparound)
    pub fn neighborhood(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        NEIGHBORHOOD.iter().filter_map(move |&(dr, dc)| {
            let row = pos.row.checked_add_signed(dr)?;
            let col = pos.col.checked_add_signed(dc)?;
            (row < self.size && col < self.size).then(|| Position::new(row, col))
        })
    }

    /// Press a cell: flip it and its orthogonal neighbours
    pub fn press(&mut self, pos: Position) -> Result<()> {
        self.check(pos)?;
        let targets: Vec<usize> = self.neighborhood(pos).map(|p| self.index(p)).collect();
        for idx in targets {
            self.cells[idx] = !self.cells[idx];
        }
        Ok(())
    }

    /// Replace every cell using a generator, in row-major order
    pub(crate) fn fill_with(&mut self, mut f: impl FnMut() -> bool) {
        for cell in self.cells.iter_mut() {
            *cell = f();
        }
    }

    /// Number of lit cells
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&lit| lit).count()
    }

    /// True iff every cell is unlit
    pub fn is_all_unlit(&self) -> bool {
        self.cells.iter().all(|&lit| !lit)
    }

    /// Single-line form, rows separated by `/` (e.g. `#.#/.#./#.#`)
    pub fn to_string_compact(&self) -> String {
        self.rows()
            .map(|row| row.iter().map(|&lit| if lit { '#' } else { '.' }).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &lit in row {
                write!(f, "{}", if lit { '#' } else { '.' })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lit_grid() {
        let grid = Grid::lit(4).unwrap();
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.cells().len(), 16);
        assert_eq!(grid.lit_count(), 16);
        assert!(!grid.is_all_unlit());
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(Grid::lit(0), Err(PuzzleError::InvalidArgument(_))));
        assert!(Grid::unlit(0).is_err());
    }

    #[test]
    fn test_overflowing_size_rejected() {
        assert!(Grid::lit(usize::MAX).is_err());
    }

    #[test]
    fn test_from_string() {
        let grid = Grid::from_string("#.#/.#./#.#").unwrap();
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.get(Position::new(0, 0)), Some(true));
        assert_eq!(grid.get(Position::new(0, 1)), Some(false));
        assert_eq!(grid.get(Position::new(1, 1)), Some(true));
        assert_eq!(grid.lit_count(), 5);

        let multiline = Grid::from_string("\n  ##\n  .. \n").unwrap();
        assert_eq!(multiline.to_string_compact(), "##/..");
    }

    #[test]
    fn test_from_string_rejects_non_square() {
        assert!(Grid::from_string("##/#").is_none());
        assert!(Grid::from_string("###/###").is_none());
        assert!(Grid::from_string("").is_none());
        assert!(Grid::from_string("#x/..").is_none());
    }

    #[test]
    fn test_display() {
        let grid = Grid::from_string("#./.#").unwrap();
        assert_eq!(grid.to_string(), "#.\n.#");
        assert_eq!(grid.to_string_compact(), "#./.#");
    }

    #[test]
    fn test_position_bounds() {
        let grid = Grid::lit(3).unwrap();
        assert_eq!(grid.position(2, 0).unwrap(), Position::new(2, 0));
        assert!(grid.position(-1, 0).is_err());
        assert!(grid.position(0, -1).is_err());
        assert!(grid.position(3, 0).is_err());
        assert!(grid.position(0, 3).is_err());
    }

    #[test]
    fn test_neighborhood_center() {
        let grid = Grid::lit(3).unwrap();
        let mut cells: Vec<Position> = grid.neighborhood(Position::new(1, 1)).collect();
        cells.sort();
        assert_eq!(
            cells,
            vec![
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1),
                Position::new(1, 2),
                Position::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_neighborhood_corner_and_edge() {
        let grid = Grid::lit(5).unwrap();
        assert_eq!(grid.neighborhood(Position::new(0, 0)).count(), 3);
        assert_eq!(grid.neighborhood(Position::new(4, 4)).count(), 3);
        assert_eq!(grid.neighborhood(Position::new(0, 2)).count(), 4);
        assert_eq!(grid.neighborhood(Position::new(2, 2)).count(), 5);

        let single = Grid::lit(1).unwrap();
        assert_eq!(single.neighborhood(Position::new(0, 0)).count(), 1);
    }

    #[test]
    fn test_press_does_not_touch_diagonals() {
        let mut grid = Grid::unlit(3).unwrap();
        grid.press(Position::new(1, 1)).unwrap();
        assert_eq!(grid.to_string_compact(), ".#./###/.#.");
    }

    #[test]
    fn test_press_off_grid() {
        let mut grid = Grid::lit(3).unwrap();
        assert!(grid.press(Position::new(3, 0)).is_err());
        assert_eq!(grid.lit_count(), 9);
    }

    #[test]
    fn test_set_and_flip() {
        let mut grid = Grid::unlit(2).unwrap();
        grid.set(Position::new(1, 0), true).unwrap();
        assert_eq!(grid.get(Position::new(1, 0)), Some(true));
        grid.flip(Position::new(1, 0)).unwrap();
        assert!(grid.is_all_unlit());
        assert!(grid.flip(Position::new(2, 2)).is_err());
        assert_eq!(grid.get(Position::new(2, 2)), None);
    }

    #[test]
    fn test_positions_row_major() {
        let grid = Grid::lit(2).unwrap();
        let positions: Vec<Position> = grid.positions().collect();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_position_serializes() {
        let json = serde_json::to_string(&Position::new(1, 2)).unwrap();
        assert_eq!(json, r#"{"row":1,"col":2}"#);
    }
}
