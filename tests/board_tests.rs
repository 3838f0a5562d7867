use broadside::{within_bounds, Board, BoardError, Cell, Orientation, ShotOutcome};

#[test]
fn test_empty_board() {
    let board = Board::new();
    assert_eq!(board.size(), 8);
    assert!(board.fleet().is_empty());
    assert_eq!(board.alive_count(), 0);
    assert_eq!(board.unresolved_cells().len(), 64);
    for y in 0..8 {
        for x in 0..8 {
            assert!(!board.is_occupied(x, y));
            assert!(!board.is_resolved(x, y));
        }
    }
}

#[test]
fn test_within_bounds() {
    assert!(within_bounds(0, 0, 8));
    assert!(within_bounds(7, 7, 8));
    assert!(!within_bounds(8, 0, 8));
    assert!(!within_bounds(0, 8, 8));
}

#[test]
fn test_place_marks_cells_with_placement_index() {
    let mut board = Board::new();
    let a = board.place_ship(3, Cell::new(1, 1), Orientation::Horizontal).unwrap();
    let b = board.place_ship(2, Cell::new(5, 3), Orientation::Vertical).unwrap();
    assert_eq!((a, b), (1, 2));
    assert_eq!(board.ship_at(1, 1), 1);
    assert_eq!(board.ship_at(3, 1), 1);
    assert_eq!(board.ship_at(5, 4), 2);
    assert_eq!(board.ship_at(4, 1), 0);
    assert_eq!(board.alive_count(), 2);
}

#[test]
fn test_overlap_rejected_without_mutation() {
    let mut board = Board::new();
    board.place_ship(4, Cell::new(0, 2), Orientation::Horizontal).unwrap();
    let before = board.clone();
    assert_eq!(
        board
            .place_ship(3, Cell::new(2, 0), Orientation::Vertical)
            .unwrap_err(),
        BoardError::ShipOverlaps
    );
    assert_eq!(board, before);
    assert_eq!(board.fleet().len(), 1);
}

#[test]
fn test_manual_place_and_shoot_until_sunk() {
    let mut board = Board::new();
    board.place_ship(3, Cell::new(2, 5), Orientation::Horizontal).unwrap();
    board.place_ship(2, Cell::new(7, 0), Orientation::Vertical).unwrap();

    let first = board.resolve_shot(2, 5).unwrap();
    assert_eq!(
        first,
        ShotOutcome {
            duplicate: false,
            hit: true,
            sunk: false,
            ship_id: Some(1)
        }
    );
    assert!(!board.resolve_shot(3, 5).unwrap().sunk);
    let last = board.resolve_shot(4, 5).unwrap();
    assert!(last.hit && last.sunk);
    assert_eq!(last.ship_id, Some(1));

    let ship = board.ship(1).unwrap();
    assert!(ship.is_sunk());
    assert_eq!(ship.hit_count(), 3);
    assert_eq!(board.alive_count(), 1);
    assert!(!board.all_sunk());
}

#[test]
fn test_miss_then_duplicate() {
    let mut board = Board::new();
    board.place_ship(2, Cell::new(0, 0), Orientation::Horizontal).unwrap();

    let miss = board.resolve_shot(2, 3).unwrap();
    assert!(!miss.duplicate && !miss.hit && !miss.sunk);
    assert_eq!(miss.ship_id, None);
    assert!(board.misses().get(2, 3).unwrap());

    let again = board.resolve_shot(2, 3).unwrap();
    assert!(again.duplicate);
    assert!(!again.hit);
    assert_eq!(board.misses().count_ones(), 1);
    assert!(board.hits().is_empty());
}

#[test]
fn test_duplicate_hit_does_not_count_twice() {
    let mut board = Board::new();
    board.place_ship(2, Cell::new(0, 0), Orientation::Horizontal).unwrap();
    board.resolve_shot(0, 0).unwrap();
    assert!(board.resolve_shot(0, 0).unwrap().duplicate);
    assert_eq!(board.ship(1).unwrap().hit_count(), 1);
    assert!(!board.ship(1).unwrap().is_sunk());
}

#[test]
fn test_out_of_bounds_shot_rejected() {
    let mut board = Board::new();
    assert_eq!(
        board.resolve_shot(8, 2).unwrap_err(),
        BoardError::OutOfBounds { x: 8, y: 2 }
    );
    assert!(board.hits().is_empty() && board.misses().is_empty());
}

#[test]
fn test_last_ship_sink_empties_board() {
    let mut board = Board::new();
    board.place_ship(2, Cell::new(0, 0), Orientation::Horizontal).unwrap();
    assert_eq!(board.alive_count(), 1);

    assert!(!board.resolve_shot(0, 0).unwrap().sunk);
    assert_eq!(board.alive_count(), 1);
    let outcome = board.resolve_shot(1, 0).unwrap();
    assert!(outcome.sunk);
    assert_eq!(board.ship(1).unwrap().hit_count(), 2);
    assert_eq!(board.alive_count(), 0);
    assert!(board.all_sunk());
}

#[test]
fn test_cell_lists_are_row_major() {
    let mut board = Board::new();
    board.place_ship(2, Cell::new(6, 6), Orientation::Horizontal).unwrap();
    board.resolve_shot(7, 6).unwrap();
    board.resolve_shot(3, 1).unwrap();
    board.resolve_shot(0, 4).unwrap();
    assert_eq!(board.hit_cells(), vec![Cell::new(7, 6)]);
    assert_eq!(board.miss_cells(), vec![Cell::new(3, 1), Cell::new(0, 4)]);
    assert_eq!(board.unresolved_cells().len(), 61);
}
