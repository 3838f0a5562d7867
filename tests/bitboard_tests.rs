use broadside::{BitBoard, BitBoardError};

#[test]
fn test_try_new_sizes() {
    let ok = BitBoard::<u64, 8>::try_new();
    assert!(ok.is_ok());

    let err = BitBoard::<u8, 3>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { .. })));
}

#[test]
fn test_get_set_uses_x_then_y() {
    let mut bb = BitBoard::<u64, 8>::new();
    assert!(bb.is_empty());

    bb.set(5, 1).unwrap();
    assert!(bb.get(5, 1).unwrap());
    assert!(!bb.get(1, 5).unwrap());
    assert_eq!(bb.count_ones(), 1);
}

#[test]
fn test_out_of_bounds_is_an_error() {
    let mut bb = BitBoard::<u64, 8>::new();
    assert_eq!(
        bb.set(8, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { x: 8, y: 0 }
    );
    assert!(bb.get(0, 9).is_err());
}

#[test]
fn test_cells_are_row_major() {
    let bb = BitBoard::<u16, 4>::from_cells([(3, 0), (1, 2), (0, 1)]).unwrap();
    let cells: Vec<_> = bb.cells().collect();
    assert_eq!(cells, vec![(3, 0), (0, 1), (1, 2)]);
}

#[test]
fn test_complement_stays_inside_board() {
    // 3x3 only uses 9 of the 16 bits.
    let bb = BitBoard::<u16, 3>::from_cells([(0, 0)]).unwrap();
    let open = !bb;
    assert_eq!(open.count_ones(), 8);
    assert!(!open.get(0, 0).unwrap());
    assert!((open & bb).is_empty());
    assert_eq!((open | bb).count_ones(), 9);
}
