use super::*;

fn c(column: i8, row: i8) -> Coordinate {
    Coordinate::new(column, row).unwrap()
}

fn sparse_board() -> Board {
    Board::empty()
        .with(c(4, 7), Piece::King(Color::White))
        .with(c(4, 0), Piece::King(Color::Black))
        .with(c(2, 5), Piece::Bishop(Color::Black))
        .with(c(6, 3), Piece::Pawn(Color::White))
        .with(c(1, 1), Piece::InitialPawn(Color::Black))
        .with(c(0, 4), Piece::Rook(Color::White))
}

#[test]
fn test_standard_board_round_trip() {
    let board = Board::standard();
    let records = board.to_squares();
    assert_eq!(records.len(), 64);
    assert_eq!(Board::from_squares(&records), Ok(board));
}

#[test]
fn test_sparse_board_round_trip_through_json() {
    let snapshot = Snapshot::new(Color::Black, &sparse_board());
    let json = serde_json::to_string(&snapshot).unwrap();
    let decoded: Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, snapshot);

    let game = decoded.to_game().unwrap();
    assert_eq!(game.turn(), Color::Black);
    assert_eq!(game.board(), &sparse_board());
}

#[test]
fn test_wire_names() {
    let rec = SquareRecord::new(c(1, 1), Piece::InitialPawn(Color::Black));
    let json = serde_json::to_value(rec).unwrap();
    assert_eq!(json["kind"], "UNMOVED_PAWN");
    assert_eq!(json["color"], "BLACK");

    let empty = SquareRecord::new(c(3, 3), Piece::Empty);
    assert_eq!(empty.kind, PieceKind::Empty);
    assert_eq!(empty.color, EMPTY_SQUARE_COLOR);
    assert_eq!(empty.piece(), Piece::Empty);
}

#[test]
fn test_records_in_any_order() {
    let mut records = sparse_board().to_squares();
    records.reverse();
    assert_eq!(Board::from_squares(&records), Ok(sparse_board()));
}

#[test]
fn test_rejects_malformed_snapshots() {
    let mut records = Board::standard().to_squares();
    records.pop();
    assert_eq!(
        Board::from_squares(&records),
        Err(SnapshotError::SquareCount(63))
    );

    let mut records = Board::standard().to_squares();
    records[10].column = 8;
    assert!(matches!(
        Board::from_squares(&records),
        Err(SnapshotError::OutOfBounds { column: 8, .. })
    ));

    let mut records = Board::standard().to_squares();
    records[1] = records[0];
    assert_eq!(
        Board::from_squares(&records),
        Err(SnapshotError::DuplicateSquare(c(0, 0)))
    );
}

#[test]
fn test_changed_squares_after_move() {
    let mut game = Game::new();
    let before = game.snapshot();
    game.make_move(c(4, 6), c(4, 4)).unwrap();
    let after = game.snapshot();

    assert_eq!(after.changed_squares(&before), vec![c(4, 4), c(4, 6)]);
    assert!(after.changed_squares(&after).is_empty());
    assert_eq!(Game::from_snapshot(&after), Ok(game));
}
