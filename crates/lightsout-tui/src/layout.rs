use lightsout_core::Position;

/// Width of one cell on screen, outline included
pub const CELL_WIDTH: u16 = 7;
/// Height of one cell on screen, outline included
pub const CELL_HEIGHT: u16 = 3;
/// Columns reserved to the right of the board for the info panel
pub const PANEL_WIDTH: u16 = 28;

/// Where the board sits on screen, used both to draw it and to map
/// pointer clicks back to cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Left column of the board
    pub x: u16,
    /// Top row of the board
    pub y: u16,
    /// Cells per side
    pub size: usize,
}

impl GridLayout {
    /// Center the board (plus info panel) in the terminal
    pub fn centered(size: usize, term_width: u16, term_height: u16) -> Self {
        let mut layout = Self { x: 0, y: 0, size };
        let total_width = layout.width() + PANEL_WIDTH;
        layout.x = if term_width > total_width {
            (term_width - total_width) / 2
        } else {
            1
        };
        layout.y = if term_height > layout.height() + 8 { 2 } else { 1 };
        layout
    }

    pub fn width(&self) -> u16 {
        self.size as u16 * CELL_WIDTH
    }

    pub fn height(&self) -> u16 {
        self.size as u16 * CELL_HEIGHT
    }

    /// Top-left screen coordinate of a cell
    pub fn cell_origin(&self, pos: Position) -> (u16, u16) {
        (
            self.x + pos.col as u16 * CELL_WIDTH,
            self.y + pos.row as u16 * CELL_HEIGHT,
        )
    }

    /// The cell under a screen coordinate, or `None` outside the board
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        if column < self.x || row < self.y {
            return None;
        }
        let col = ((column - self.x) / CELL_WIDTH) as usize;
        let row = ((row - self.y) / CELL_HEIGHT) as usize;
        (row < self.size && col < self.size).then(|| Position::new(row, col))
    }
}
