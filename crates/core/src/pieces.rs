//! Pieces module - shape templates and matrix rotation
//!
//! Every piece is a square matrix of color indices (0 = empty cell). The
//! seven templates are constants; rotation always builds a new matrix.

use crate::rng::PieceSource;
use crate::types::{ColorIndex, PieceKind, EMPTY};

/// Largest template side (the I piece).
pub const MAX_SHAPE_SIZE: usize = 4;

/// Square shape matrix of side `size` (at most [`MAX_SHAPE_SIZE`]).
///
/// Cells outside `size x size` are always empty, so two shapes compare equal
/// exactly when their visible matrices do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: usize,
    cells: [[ColorIndex; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    const fn padded(size: usize, cells: [[ColorIndex; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE]) -> Self {
        Self { size, cells }
    }

    /// Build a shape from matrix rows (top row first).
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square or is larger than 4x4.
    pub fn from_rows(rows: &[&[ColorIndex]]) -> Self {
        let size = rows.len();
        assert!(
            size > 0 && size <= MAX_SHAPE_SIZE,
            "shape side {size} outside 1..={MAX_SHAPE_SIZE}"
        );
        let mut cells = [[EMPTY; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), size, "shape must be square, row {r} differs");
            cells[r][..size].copy_from_slice(row);
        }
        Self { size, cells }
    }

    /// Side length of the matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Value at (row, col) of the matrix.
    pub fn get(&self, row: usize, col: usize) -> ColorIndex {
        assert!(row < self.size && col < self.size, "shape cell out of bounds");
        self.cells[row][col]
    }

    /// Offsets `(dx, dy)` of every filled cell, row by row.
    pub fn filled_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..self.size).flat_map(move |r| {
            (0..self.size)
                .filter(move |&c| self.cells[r][c] != EMPTY)
                .map(move |c| (c as i32, r as i32))
        })
    }

    /// Matrix rows, top first.
    pub fn rows(&self) -> impl Iterator<Item = &[ColorIndex]> {
        self.cells[..self.size].iter().map(move |row| &row[..self.size])
    }

    /// Clockwise quarter turn.
    pub fn rotate_cw(&self) -> Shape {
        rotate_clockwise(self)
    }
}

/// Rotate a square matrix clockwise: `result[i][j] = matrix[n - 1 - j][i]`.
pub fn rotate_clockwise(matrix: &Shape) -> Shape {
    let n = matrix.size;
    let mut cells = [[EMPTY; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
    for (i, row) in cells.iter_mut().enumerate().take(n) {
        for (j, cell) in row.iter_mut().enumerate().take(n) {
            *cell = matrix.cells[n - 1 - j][i];
        }
    }
    Shape { size: n, cells }
}

const O_TEMPLATE: Shape = Shape::padded(2, [[1, 1, 0, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);

const I_TEMPLATE: Shape = Shape::padded(
    4,
    [[0, 2, 0, 0], [0, 2, 0, 0], [0, 2, 0, 0], [0, 2, 0, 0]],
);

const T_TEMPLATE: Shape = Shape::padded(3, [[0, 0, 0, 0], [3, 3, 3, 0], [0, 3, 0, 0], [0; 4]]);

const L_TEMPLATE: Shape = Shape::padded(3, [[0, 0, 0, 0], [4, 4, 4, 0], [4, 0, 0, 0], [0; 4]]);

const J_TEMPLATE: Shape = Shape::padded(3, [[0, 0, 0, 0], [5, 5, 5, 0], [0, 0, 5, 0], [0; 4]]);

const S_TEMPLATE: Shape = Shape::padded(3, [[0, 0, 0, 0], [0, 6, 6, 0], [6, 6, 0, 0], [0; 4]]);

const Z_TEMPLATE: Shape = Shape::padded(3, [[0, 0, 0, 0], [7, 7, 0, 0], [0, 7, 7, 0], [0; 4]]);

/// Spawn orientation of a piece kind.
pub fn template(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::O => O_TEMPLATE,
        PieceKind::I => I_TEMPLATE,
        PieceKind::T => T_TEMPLATE,
        PieceKind::L => L_TEMPLATE,
        PieceKind::J => J_TEMPLATE,
        PieceKind::S => S_TEMPLATE,
        PieceKind::Z => Z_TEMPLATE,
    }
}

/// Pick one of the seven templates uniformly from `source`.
///
/// Returns the kind together with its spawn shape; the color index is
/// `kind.color_index()`.
pub fn random_template(source: &mut dyn PieceSource) -> (PieceKind, Shape) {
    let kind = PieceKind::ALL[source.next_index(PieceKind::ALL.len())];
    (kind, template(kind))
}
