//! Game state module - the falling-piece engine
//!
//! Owns the board, the active piece, the drop accumulator and the piece
//! source. Every operation runs to completion synchronously; spawning,
//! freezing, line clears and game over all happen inside a single call.

use crate::board::{Board, ClearedRows};
use crate::config::GameConfig;
use crate::pieces::{random_template, Shape, MAX_SHAPE_SIZE};
use crate::rng::{PieceSource, SimpleRng};
use crate::types::{ColorIndex, GameAction, PieceKind};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Current (possibly rotated) matrix
    pub shape: Shape,
    /// Column of the matrix's top-left cell
    pub x: i32,
    /// Row of the matrix's top-left cell (may be negative)
    pub y: i32,
}

impl ActivePiece {
    pub fn new(kind: PieceKind, shape: Shape, x: i32, y: i32) -> Self {
        Self { kind, shape, x, y }
    }

    pub fn color_index(&self) -> ColorIndex {
        self.kind.color_index()
    }

    /// Absolute board coordinates of every filled cell.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .filled_cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    pub fn collides(&self, board: &Board) -> bool {
        collides(self, board)
    }
}

/// Check a piece against the board edges and frozen cells.
///
/// Cells above the top edge (`y < 0`) only collide with the side walls.
pub fn collides(piece: &ActivePiece, board: &Board) -> bool {
    let width = board.width() as i32;
    let height = board.height() as i32;
    piece.cells().any(|(x, y)| {
        x < 0 || x >= width || y >= height || (y >= 0 && board.is_occupied(x, y))
    })
}

/// Summary of one lock sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEvent {
    /// Id of the piece that froze
    pub piece_id: u32,
    pub kind: PieceKind,
    /// Anchor where it froze
    pub x: i32,
    pub y: i32,
    /// Row indices removed, in scan order
    pub cleared_rows: ClearedRows,
    /// The next piece collided on spawn and the board was reset
    pub game_over: bool,
}

/// Result of one downward step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The piece moved down one row.
    Fell,
    /// The piece could not move and was frozen into the board.
    Locked(LockEvent),
}

impl Step {
    pub fn is_locked(&self) -> bool {
        matches!(self, Step::Locked(_))
    }
}

/// Complete game state
#[derive(Debug)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    active: ActivePiece,
    source: Box<dyn PieceSource>,
    /// Milliseconds accumulated toward the next gravity step.
    drop_timer_ms: u32,
    /// Monotonic id for spawned pieces.
    piece_id: u32,
    /// Monotonic id for games (increments on every game-over reset).
    episode_id: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Start a session on an empty board and spawn the first piece.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`GameState::with_board`].
    pub fn new(config: GameConfig, source: impl PieceSource + 'static) -> Self {
        let board = Board::new(config.width, config.height);
        Self::with_board(config, source, board)
    }

    /// Start a session on a prepared board.
    ///
    /// # Panics
    ///
    /// Panics if the board size differs from the config, or if a 4x4 piece
    /// matrix anchored at the spawn point would not fit inside the board.
    pub fn with_board(config: GameConfig, source: impl PieceSource + 'static, board: Board) -> Self {
        assert_eq!(
            (board.width(), board.height()),
            (config.width, config.height),
            "board size must match the config"
        );
        let (spawn_x, spawn_y) = config.spawn;
        assert!(
            spawn_x >= 0 && spawn_x as usize + MAX_SHAPE_SIZE <= config.width,
            "spawn column {spawn_x} leaves no room for a {MAX_SHAPE_SIZE}-wide piece"
        );
        assert!(
            spawn_y >= 0 && spawn_y as usize + MAX_SHAPE_SIZE <= config.height,
            "spawn row {spawn_y} leaves no room for a {MAX_SHAPE_SIZE}-tall piece"
        );
        let mut source: Box<dyn PieceSource> = Box::new(source);
        let active = draw_piece(source.as_mut(), &config);

        Self {
            config,
            board,
            active,
            source,
            drop_timer_ms: 0,
            piece_id: 1,
            episode_id: 0,
            last_event: None,
        }
    }

    /// Default board with a seeded [`SimpleRng`].
    pub fn with_seed(seed: u32) -> Self {
        Self::new(GameConfig::default(), SimpleRng::new(seed))
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn drop_timer_ms(&self) -> u32 {
        self.drop_timer_ms
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Replace the active piece with a new random one at the spawn anchor.
    pub fn spawn(&mut self) {
        self.active = draw_piece(self.source.as_mut(), &self.config);
        self.piece_id = self.piece_id.wrapping_add(1);
    }

    /// Does the active piece overlap a wall, the floor, or a frozen cell?
    pub fn active_collides(&self) -> bool {
        self.active.collides(&self.board)
    }

    /// Shift the active piece by `delta` columns unless that collides.
    ///
    /// Returns true if the piece moved.
    pub fn move_horizontal(&mut self, delta: i32) -> bool {
        self.active.x += delta;
        if self.active_collides() {
            self.active.x -= delta;
            return false;
        }
        true
    }

    /// Move the active piece down one row, or lock it if it cannot move.
    ///
    /// A successful move resets the drop accumulator; a lock leaves it as is.
    pub fn step_down(&mut self) -> Step {
        self.active.y += 1;
        if self.active_collides() {
            self.active.y -= 1;
            return Step::Locked(self.lock_piece());
        }
        self.drop_timer_ms = 0;
        Step::Fell
    }

    /// Player-requested step down; always restarts the drop accumulator.
    pub fn soft_drop(&mut self) -> Step {
        let step = self.step_down();
        self.drop_timer_ms = 0;
        step
    }

    /// Rotate the active piece clockwise in place unless that collides.
    ///
    /// There are no wall kicks. Returns true if the rotation was kept.
    pub fn rotate(&mut self) -> bool {
        let original = self.active.shape;
        self.active.shape = original.rotate_cw();
        if self.active_collides() {
            self.active.shape = original;
            return false;
        }
        true
    }

    /// Advance the gravity timer by `elapsed_ms`.
    ///
    /// Once the accumulator exceeds the drop interval the piece steps down
    /// and the accumulator restarts from zero.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<Step> {
        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms <= self.config.drop_interval_ms {
            return None;
        }
        let step = self.step_down();
        self.drop_timer_ms = 0;
        Some(step)
    }

    /// Apply a game action
    ///
    /// Returns true if the action changed the active piece or the board.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_horizontal(-1),
            GameAction::MoveRight => self.move_horizontal(1),
            GameAction::SoftDrop => {
                self.soft_drop();
                true
            }
            GameAction::Rotate => self.rotate(),
        }
    }

    /// Freeze the active piece, clear lines, spawn the next piece and reset
    /// the board if that piece has nowhere to go.
    fn lock_piece(&mut self) -> LockEvent {
        let locked = self.active;
        self.freeze();

        let cleared_rows = self.board.clear_full_rows(self.config.line_clear);

        let locked_id = self.piece_id;
        self.spawn();

        let game_over = self.active_collides();
        if game_over {
            self.board.clear();
            self.episode_id = self.episode_id.wrapping_add(1);
        }

        let event = LockEvent {
            piece_id: locked_id,
            kind: locked.kind,
            x: locked.x,
            y: locked.y,
            cleared_rows,
            game_over,
        };
        self.last_event = Some(event.clone());
        event
    }

    /// Write the active piece's color into the board.
    ///
    /// Cells above the top edge have no board row and are dropped.
    fn freeze(&mut self) {
        let color = self.active.color_index();
        for (x, y) in self.active.cells() {
            if y >= 0 {
                self.board.set(x as usize, y as usize, color);
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_seed(1)
    }
}

fn draw_piece(source: &mut dyn PieceSource, config: &GameConfig) -> ActivePiece {
    let (kind, shape) = random_template(source);
    let (x, y) = config.spawn;
    ActivePiece::new(kind, shape, x, y)
}
