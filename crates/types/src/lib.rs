//! Shared types and constants
//!
//! Pure data types used by every other crate in the workspace (core engine,
//! terminal view, input mapping). No external dependencies.
//!
//! # Board Dimensions
//!
//! The playfield is derived from a fixed drawing surface divided by the cell
//! size:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SURFACE_WIDTH_PX` | 320 | Drawing surface width |
//! | `SURFACE_HEIGHT_PX` | 640 | Drawing surface height |
//! | `CELL_SIZE_PX` | 32 | Side of one board cell |
//! | `BOARD_WIDTH` | 10 | Columns (indexed 0-9) |
//! | `BOARD_HEIGHT` | 20 | Rows (indexed 0-19) |
//!
//! New pieces spawn with their shape's top-left corner at `SPAWN_POSITION`.
//!
//! # Timing
//!
//! - `DROP_INTERVAL_MS`: 1000ms of accumulated time per gravity step
//! - `FRAME_MS`: 16ms frame pacing for the terminal loop (~60 FPS)
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 20));
//! assert_eq!(PieceKind::T.color_index(), 3);
//! assert_eq!(PieceKind::from_color_index(3), Some(PieceKind::T));
//! assert_eq!(PieceKind::T.as_str(), "t");
//! ```

/// Drawing surface size in pixels.
pub const SURFACE_WIDTH_PX: u32 = 320;
pub const SURFACE_HEIGHT_PX: u32 = 640;

/// Side length of one board cell in pixels.
pub const CELL_SIZE_PX: u32 = 32;

/// Board dimensions
pub const BOARD_WIDTH: u8 = (SURFACE_WIDTH_PX / CELL_SIZE_PX) as u8;
pub const BOARD_HEIGHT: u8 = (SURFACE_HEIGHT_PX / CELL_SIZE_PX) as u8;

/// Anchor (x, y) of a freshly spawned piece.
pub const SPAWN_POSITION: (i32, i32) = (3, 0);

/// Timing constants (in milliseconds)
pub const DROP_INTERVAL_MS: u32 = 1000;
pub const FRAME_MS: u32 = 16;

/// Color index stored per board cell: 0 = empty, 1..=7 = piece color.
pub type ColorIndex = u8;

/// The empty cell value.
pub const EMPTY: ColorIndex = 0;

/// Number of entries in the color table (empty + seven pieces).
pub const COLOR_COUNT: usize = 8;


/// The seven piece kinds, in color-table order.
///
/// - **O**: Yellow, 2x2 square
/// - **I**: Cyan, straight bar
/// - **T**: Purple, T-shaped
/// - **L**: Orange, L-shaped
/// - **J**: Blue, J-shaped (mirror of L)
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    O,
    I,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds, ordered by color index.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::I,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Fixed 1-based index into the color table.
    pub fn color_index(&self) -> ColorIndex {
        match self {
            PieceKind::O => 1,
            PieceKind::I => 2,
            PieceKind::T => 3,
            PieceKind::L => 4,
            PieceKind::J => 5,
            PieceKind::S => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::color_index`]. Returns `None` for empty or
    /// out-of-range values.
    pub fn from_color_index(color: ColorIndex) -> Option<Self> {
        match color {
            1..=7 => Some(Self::ALL[(color - 1) as usize]),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::O => "o",
            PieceKind::I => "i",
            PieceKind::T => "t",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }
}

/// Player actions, one per discrete key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
}
