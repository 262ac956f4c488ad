//! Integration tests - whole lock sequences through the public engine API

use blockfall::core::{Board, GameConfig, GameState, LineClearScan, ScriptedSource, Step};
use blockfall::types::{GameAction, PieceKind, EMPTY};

fn script(kinds: &[PieceKind]) -> ScriptedSource {
    ScriptedSource::new(
        kinds
            .iter()
            .map(|k| k.color_index() as usize - 1)
            .collect(),
    )
}

fn drop_until_locked(game: &mut GameState) -> blockfall::core::LockEvent {
    for _ in 0..game.board().height() + 4 {
        if let Step::Locked(event) = game.step_down() {
            return event;
        }
    }
    panic!("piece never locked");
}

#[test]
fn test_piece_freezes_at_bottom_and_next_spawns() {
    let mut game = GameState::new(
        GameConfig::default(),
        script(&[PieceKind::O, PieceKind::T]),
    );
    let mut falls = 0;
    loop {
        match game.step_down() {
            Step::Fell => falls += 1,
            Step::Locked(event) => {
                assert_eq!(event.kind, PieceKind::O);
                assert_eq!((event.x, event.y), (3, 18));
                assert!(event.cleared_rows.is_empty());
                assert!(!event.game_over);
                break;
            }
        }
    }
    assert_eq!(falls, 18);

    let board = game.board();
    for (x, y) in [(3, 18), (4, 18), (3, 19), (4, 19)] {
        assert_eq!(board.get(x, y), PieceKind::O.color_index());
    }
    assert_eq!(board.cells().iter().filter(|&&c| c != EMPTY).count(), 4);

    let active = game.active();
    assert_eq!(active.kind, PieceKind::T);
    assert_eq!((active.x, active.y), (3, 0));
    assert_eq!(game.piece_id(), 2);
}

#[test]
fn test_lock_leaves_drop_timer_alone() {
    let mut game = GameState::new(GameConfig::default(), script(&[PieceKind::O]));
    for _ in 0..18 {
        assert_eq!(game.step_down(), Step::Fell);
    }
    game.tick(400);
    assert_eq!(game.drop_timer_ms(), 400);

    assert!(game.step_down().is_locked());
    assert_eq!(game.drop_timer_ms(), 400);
}

#[test]
fn test_completing_bottom_row_clears_it() {
    let mut board = Board::new(10, 20);
    // Bottom row full except the two columns the O piece will fill.
    for x in 0..10 {
        if x != 3 && x != 4 {
            board.set(x, 19, 6);
        }
    }
    board.set(0, 18, 5);
    board.set(9, 17, 2);

    let mut game = GameState::with_board(GameConfig::default(), script(&[PieceKind::O]), board);
    let event = drop_until_locked(&mut game);
    assert_eq!(event.cleared_rows.as_slice(), &[19]);

    let board = game.board();
    // Old row 18 (O top half plus the 5) is now the bottom row.
    assert_eq!(board.row(19), &[5, 0, 0, 1, 1, 0, 0, 0, 0, 0]);
    assert_eq!(board.get(9, 18), 2);
    assert!(board.row(0).iter().all(|&c| c == EMPTY));
}

#[test]
fn test_exhaustive_scan_clears_both_rows_of_an_o_piece() {
    let mut board = Board::new(10, 20);
    for y in 18..20 {
        for x in 0..10 {
            if x != 3 && x != 4 {
                board.set(x, y, 7);
            }
        }
    }
    let config = GameConfig {
        line_clear: LineClearScan::Exhaustive,
        ..GameConfig::default()
    };

    let mut game = GameState::with_board(config, script(&[PieceKind::O]), board);
    let event = drop_until_locked(&mut game);
    assert_eq!(event.cleared_rows.len(), 2);
    assert!(game.board().is_empty());
}

#[test]
fn test_blocked_spawn_resets_board() {
    let mut board = Board::new(10, 20);
    // Occupy the O spawn cells so the next O cannot appear.
    board.set(3, 1, 4);
    board.set(4, 1, 4);

    let mut game = GameState::with_board(GameConfig::default(), script(&[PieceKind::O]), board);
    // First O sits on the blocked cells already; one step locks it at y = 0.
    let event = match game.step_down() {
        Step::Locked(event) => event,
        Step::Fell => panic!("piece should lock immediately"),
    };
    assert!(event.game_over);
    assert_eq!(event.y, 0);
    assert_eq!(game.episode_id(), 1);
    assert!(game.board().is_empty());

    let active = game.active();
    assert_eq!((active.x, active.y), (3, 0));
    assert!(!active.collides(game.board()));
}

#[test]
fn test_play_continues_after_game_over() {
    let mut game = GameState::new(GameConfig::with_size(4, 4), script(&[PieceKind::O]));
    // The second O locks at the top of a 4x4 board, so every second lock
    // blocks the next spawn.
    let mut game_overs = 0;
    for _ in 0..6 {
        if drop_until_locked(&mut game).game_over {
            game_overs += 1;
        }
    }
    assert_eq!(game_overs, 3);
    assert_eq!(game.episode_id(), game_overs);
}

#[test]
fn test_moves_and_rotations_never_touch_the_board() {
    let mut game = GameState::new(
        GameConfig::default(),
        script(&[PieceKind::I, PieceKind::T, PieceKind::S]),
    );
    let actions = [
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::MoveLeft,
        GameAction::MoveLeft,
        GameAction::MoveLeft,
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::MoveRight,
        GameAction::Rotate,
        GameAction::Rotate,
    ];
    for action in actions {
        game.apply_action(action);
        assert!(game.board().is_empty());
        assert!(!game.active_collides());
    }
}

#[test]
fn test_tick_drives_gravity_at_frame_rate() {
    let mut game = GameState::new(GameConfig::default(), script(&[PieceKind::T]));
    // 62 * 16 = 992ms: not yet over the interval.
    for _ in 0..62 {
        assert_eq!(game.tick(16), None);
    }
    assert_eq!(game.drop_timer_ms(), 992);
    assert_eq!(game.active().y, 0);

    assert_eq!(game.tick(16), Some(Step::Fell));
    assert_eq!(game.active().y, 1);
    assert_eq!(game.drop_timer_ms(), 0);
}
