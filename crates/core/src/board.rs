//! Board module - manages the game grid
//!
//! The board is a `width x height` grid of color indices (0 = empty).
//! Uses a flat buffer allocated once at creation; its size never changes.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.

use arrayvec::ArrayVec;

use crate::types::{ColorIndex, COLOR_COUNT, EMPTY};

/// Largest board side, in cells.
pub const MAX_BOARD_SIDE: usize = 64;

/// Row indices removed by one line-clear pass, in the order they were found.
///
/// A pass removes at most `height` rows, so a full-height list never overflows.
pub type ClearedRows = ArrayVec<usize, MAX_BOARD_SIDE>;

/// How a line-clear pass walks the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineClearScan {
    /// Visit each index once, bottom to top. After a clear at `y` the scan
    /// continues at `y - 1`, so the row that shifted into `y` is not
    /// re-examined in the same pass.
    #[default]
    SinglePass,
    /// Re-examine the same index after a clear until no full row remains.
    Exhaustive,
}

impl LineClearScan {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "single-pass" | "single" | "singlepass" => Some(LineClearScan::SinglePass),
            "exhaustive" | "full" => Some(LineClearScan::Exhaustive),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineClearScan::SinglePass => "single-pass",
            LineClearScan::Exhaustive => "exhaustive",
        }
    }
}

/// The game board using flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Row-major cells (y * width + x)
    cells: Box<[ColorIndex]>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            (1..=MAX_BOARD_SIDE).contains(&width) && (1..=MAX_BOARD_SIDE).contains(&height),
            "board {width}x{height} outside 1..={MAX_BOARD_SIDE} per side"
        );
        Self {
            width,
            height,
            cells: vec![EMPTY; width * height].into_boxed_slice(),
        }
    }

    /// Flat index for (x, y). Panics when out of bounds.
    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "board cell ({x}, {y}) out of bounds for {}x{} board",
            self.width,
            self.height
        );
        y * self.width + x
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the color index at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) lies outside the board.
    pub fn get(&self, x: usize, y: usize) -> ColorIndex {
        self.cells[self.index(x, y)]
    }

    /// Set the color index at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) lies outside the board or `value` is not a color index.
    pub fn set(&mut self, x: usize, y: usize, value: ColorIndex) {
        assert!(
            (value as usize) < COLOR_COUNT,
            "color index {value} out of range"
        );
        let idx = self.index(x, y);
        self.cells[idx] = value;
    }

    /// Check if (x, y) is inside the board and filled.
    ///
    /// Unlike [`Board::get`] this tolerates any coordinates.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        x < self.width && y < self.height && self.cells[y * self.width + x] != EMPTY
    }

    /// Cells of row `y`.
    pub fn row(&self, y: usize) -> &[ColorIndex] {
        let start = self.index(0, y);
        &self.cells[start..start + self.width]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[ColorIndex]> {
        self.cells.chunks_exact(self.width)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).iter().all(|&cell| cell != EMPTY)
    }

    /// Remove row `y`: every row above shifts down by one and an empty row
    /// is inserted at the top. Rows below `y` are untouched.
    pub fn clear_row(&mut self, y: usize) {
        let width = self.width;
        let end = self.index(0, y);

        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..end, width);
        self.cells[..width].fill(EMPTY);
    }

    /// Clear full rows scanning from the bottom row upward.
    ///
    /// Returns the indices at which rows were removed, in scan order.
    pub fn clear_full_rows(&mut self, scan: LineClearScan) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut y = self.height;

        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.clear_row(row);
                cleared.push(row);
                if scan == LineClearScan::Exhaustive {
                    continue;
                }
            }
            y -= 1;
        }

        cleared
    }

    /// Check if every cell is empty
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == EMPTY)
    }

    /// Raw row-major cells
    pub fn cells(&self) -> &[ColorIndex] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Build a board from rows of color indices (top row first).
    ///
    /// # Panics
    ///
    /// Panics if the rows are empty, ragged, or contain values above 7.
    pub fn from_rows(rows: &[&[ColorIndex]]) -> Self {
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut board = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width, "row {y} has a different width");
            for (x, &value) in row.iter().enumerate() {
                board.set(x, y, value);
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(
            crate::types::BOARD_WIDTH as usize,
            crate::types::BOARD_HEIGHT as usize,
        )
    }
}
