//! Board module - manages the game grid
//!
//! The grid is width x height cells (default 10x20), each empty or filled
//! with a piece kind. Flat row-major storage, (x, y) with x growing right
//! and y growing down. Pieces may overlap the top edge (y < 0) while
//! falling; those cells are ignored for collision and never stored.

use crate::core::clear::{clear_lines, ClearResult};
use crate::core::pieces::Piece;
use crate::types::{Cell, Position, CELL_ACTIVE, CELL_EMPTY, CELL_FILLED};
use crate::types::{DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

/// The game board
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Spawn anchor for new pieces: horizontally centered, top row
    pub fn spawn_anchor(&self) -> Position {
        Position::new(self.width as i32 / 2 - 1, 0)
    }

    /// Calculate flat index from (x, y), None if out of bounds
    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// Get cell at (x, y), None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check whether the piece fits at its current anchor.
    ///
    /// Every occupied cell must lie within horizontal bounds and above the
    /// floor, and must not overlap a filled cell. Cells above the visible
    /// grid (y < 0) are allowed and skipped for collision, so a freshly
    /// spawned piece may protrude past the top edge.
    pub fn can_place(&self, piece: &Piece) -> bool {
        piece.cells().all(|(x, y)| {
            if x < 0 || x >= self.width as i32 || y >= self.height as i32 {
                return false;
            }
            if y < 0 {
                return true;
            }
            !self.is_occupied(x, y)
        })
    }

    /// Whether moving the piece one row down would collide
    pub fn has_landed(&self, piece: &Piece) -> bool {
        !self.can_place(&piece.shifted(0, 1))
    }

    /// Lowest anchor reachable from the piece's position by repeated
    /// single-row descents.
    ///
    /// If the starting position is already invalid the search is a no-op:
    /// the start is returned unchanged and the anomaly is logged rather
    /// than raised.
    pub fn find_drop_position(&self, piece: &Piece) -> Position {
        if !self.can_place(piece) {
            eprintln!(
                "[Board] drop search started from an invalid position ({}, {})",
                piece.x, piece.y
            );
            return piece.position();
        }

        let mut current = *piece;
        while self.can_place(&current.shifted(0, 1)) {
            current = current.shifted(0, 1);
        }
        current.position()
    }

    /// Mark every occupied cell of the piece as filled.
    ///
    /// Returns false without mutating if the piece does not fit. Cells
    /// above the top edge are dropped silently.
    pub(crate) fn fill_piece(&mut self, piece: &Piece) -> bool {
        if !self.can_place(piece) {
            return false;
        }
        for (x, y) in piece.cells() {
            if y >= 0 {
                self.set(x, y, Some(piece.kind));
            }
        }
        true
    }

    /// Place the piece and run the line clearer.
    ///
    /// Returns None without mutating if the piece does not fit.
    pub fn place_piece(&mut self, piece: &Piece) -> Option<ClearResult> {
        if !self.fill_piece(piece) {
            return None;
        }
        Some(clear_lines(self))
    }

    /// Game over when the next piece cannot legally appear at its spawn anchor
    pub fn is_game_over(&self, piece: &Piece) -> bool {
        !self.can_place(piece)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height {
            return false;
        }
        let start = y * self.width;
        self.cells[start..start + self.width]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Copy row `src` over row `dst` (used by the line clearer)
    pub(crate) fn copy_row(&mut self, src: usize, dst: usize) {
        let w = self.width;
        self.cells.copy_within(src * w..src * w + w, dst * w);
    }

    /// Blank a row (used by the line clearer)
    pub(crate) fn blank_row(&mut self, y: usize) {
        let start = y * self.width;
        for cell in &mut self.cells[start..start + self.width] {
            *cell = None;
        }
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// True when no cell is filled
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Index of the highest row containing a filled cell
    pub fn top_filled_row(&self) -> Option<usize> {
        (0..self.height).find(|&y| {
            let start = y * self.width;
            self.cells[start..start + self.width]
                .iter()
                .any(|cell| cell.is_some())
        })
    }

    /// Render the grid as text: exactly `height` lines of exactly `width`
    /// characters. Filled cells, the active piece's cells and empty cells
    /// each use a distinct reserved character so the decision source can
    /// tell the falling piece apart from the landed stack.
    pub fn serialize(&self, active: Option<&Piece>) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let on_active = active
                    .map(|p| p.cells().any(|(px, py)| px == x && py == y))
                    .unwrap_or(false);
                let ch = if on_active {
                    CELL_ACTIVE
                } else if self.is_occupied(x, y) {
                    CELL_FILLED
                } else {
                    CELL_EMPTY
                };
                out.push(ch);
            }
            if y + 1 < self.height as i32 {
                out.push('\n');
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT)
    }
}
