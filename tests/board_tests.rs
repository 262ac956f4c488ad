//! Board tests - grid storage and row clearing

use blockfall::core::{Board, LineClearScan};
use blockfall::types::{BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

fn fill_row(board: &mut Board, y: usize, color: u8) {
    for x in 0..board.width() {
        board.set(x, y, color);
    }
}

#[test]
fn test_board_default_is_empty() {
    let board = Board::default();
    assert_eq!(board.width(), BOARD_WIDTH as usize);
    assert_eq!(board.height(), BOARD_HEIGHT as usize);
    assert!(board.cells().iter().all(|&c| c == EMPTY));
    assert_eq!(board.rows().count(), BOARD_HEIGHT as usize);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new(10, 20);
    board.set(5, 10, 3);
    assert_eq!(board.get(5, 10), 3);
    assert!(board.is_occupied(5, 10));
    assert!(!board.is_occupied(4, 10));
    assert!(!board.is_empty());

    board.clear();
    assert!(board.is_empty());
}

#[test]
#[should_panic]
fn test_board_get_out_of_bounds_panics() {
    let board = Board::new(10, 20);
    board.get(10, 0);
}

#[test]
fn test_clear_bottom_row_shifts_everything_down() {
    let mut board = Board::new(10, 20);
    fill_row(&mut board, 19, 2);
    board.set(0, 18, 5);
    board.set(9, 0, 1);

    let cleared = board.clear_full_rows(LineClearScan::SinglePass);
    assert_eq!(cleared.as_slice(), &[19]);

    assert_eq!(board.get(0, 19), 5);
    assert_eq!(board.get(9, 1), 1);
    assert!(board.row(0).iter().all(|&c| c == EMPTY));
    assert_eq!(board.cells().iter().filter(|&&c| c != EMPTY).count(), 2);
}

#[test]
fn test_no_full_rows_leaves_board_untouched() {
    let mut board = Board::new(10, 20);
    for x in 0..9 {
        board.set(x, 19, 4);
    }
    let before = board.clone();
    assert!(board.clear_full_rows(LineClearScan::Exhaustive).is_empty());
    assert_eq!(board, before);
}

#[test]
fn test_single_pass_skips_second_of_two_adjacent_rows() {
    let mut board = Board::new(10, 20);
    fill_row(&mut board, 18, 6);
    fill_row(&mut board, 19, 7);

    let cleared = board.clear_full_rows(LineClearScan::SinglePass);
    assert_eq!(cleared.as_slice(), &[19]);
    // Row 18 shifted into 19 and was not re-examined.
    assert!(board.is_row_full(19));
    assert!(board.row(19).iter().all(|&c| c == 6));
}

#[test]
fn test_exhaustive_clears_adjacent_rows() {
    let mut board = Board::new(10, 20);
    for y in 16..20 {
        fill_row(&mut board, y, 2);
    }
    board.set(3, 15, 1);

    let cleared = board.clear_full_rows(LineClearScan::Exhaustive);
    assert_eq!(cleared.as_slice(), &[19, 19, 19, 19]);
    assert_eq!(board.get(3, 19), 1);
    assert_eq!(board.cells().iter().filter(|&&c| c != EMPTY).count(), 1);
}

#[test]
fn test_from_rows_round_trips_through_rows() {
    let board = Board::from_rows(&[&[0, 1, 0], &[2, 2, 2]]);
    assert_eq!((board.width(), board.height()), (3, 2));
    let rows: Vec<&[u8]> = board.rows().collect();
    assert_eq!(rows, vec![&[0, 1, 0][..], &[2, 2, 2][..]]);
}
