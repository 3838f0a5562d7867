#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use broadside::cli::{board_to_string, coord_to_string, parse_coord};
    use broadside::{Board, Cell, Orientation};

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("A1"), Ok(Cell::new(0, 0)));
        assert_eq!(parse_coord("c4"), Ok(Cell::new(2, 3)));
        assert_eq!(parse_coord(" H8 "), Ok(Cell::new(7, 7)));
        assert!(parse_coord("I1").is_err());
        assert!(parse_coord("A9").is_err());
        assert!(parse_coord("A0").is_err());
        assert!(parse_coord("4C").is_err());
        assert!(parse_coord("B").is_err());
    }

    #[test]
    fn test_coord_round_trip() {
        let cell = Cell::new(5, 6);
        assert_eq!(coord_to_string(cell), "F7");
        assert_eq!(parse_coord(&coord_to_string(cell)), Ok(cell));
    }

    #[test]
    fn test_board_rendering_hides_ships() {
        let mut board = Board::new();
        board
            .place_ship(2, Cell::new(0, 0), Orientation::Horizontal)
            .unwrap();
        board.resolve_shot(0, 0).unwrap();
        board.resolve_shot(2, 0).unwrap();

        let hidden = board_to_string(&board, false);
        let first_row = hidden.lines().nth(1).unwrap();
        assert_eq!(first_row, " 1  X . o . . . . .");

        let revealed = board_to_string(&board, true);
        assert_eq!(revealed.lines().nth(1).unwrap(), " 1  X S o . . . . .");

        board.resolve_shot(1, 0).unwrap();
        let sunk = board_to_string(&board, false);
        assert_eq!(sunk.lines().nth(1).unwrap(), " 1  # # o . . . . .");
    }
}
