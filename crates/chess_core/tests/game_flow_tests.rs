use chess_core::{Board, Color, Coordinate, Game, MoveError, Piece, PieceKind, Snapshot};

fn sq(name: &str) -> Coordinate {
    name.parse().unwrap()
}

#[test]
fn opening_pawn_moves_alternate_turns() {
    let mut game = Game::new();

    // e2-e4: column 4, row 6 -> row 4
    game.make_move(Coordinate::new(4, 6).unwrap(), Coordinate::new(4, 4).unwrap())
        .unwrap();
    assert_eq!(game.turn(), Color::Black);

    let before = game.clone();
    let err = game
        .make_move(Coordinate::new(4, 4).unwrap(), Coordinate::new(4, 3).unwrap())
        .unwrap_err();
    assert!(matches!(
        err,
        MoveError::WrongTurn {
            turn: Color::Black,
            owner: Color::White,
            ..
        }
    ));
    assert_eq!(game, before);

    game.make_move(Coordinate::new(4, 1).unwrap(), Coordinate::new(4, 3).unwrap())
        .unwrap();
    assert_eq!(game.turn(), Color::White);
    assert_eq!(game.board().piece_at(sq("e4")), Piece::Pawn(Color::White));
    assert_eq!(game.board().piece_at(sq("e5")), Piece::Pawn(Color::Black));

    // blocked head-on
    let err = game.make_move(sq("e4"), sq("e5")).unwrap_err();
    assert_eq!(
        err,
        MoveError::InvalidPawnCapture {
            from: sq("e4"),
            to: sq("e5"),
        }
    );
}

#[test]
fn saved_game_resumes_where_it_stopped() {
    let mut game = Game::new();
    for (from, to) in [("d2", "d4"), ("g8", "f6"), ("c1", "g5")] {
        game.make_move(sq(from), sq(to)).unwrap();
    }

    let json = serde_json::to_string_pretty(&game.snapshot()).unwrap();
    let snapshot: Snapshot = serde_json::from_str(&json).unwrap();
    let mut resumed = Game::from_snapshot(&snapshot).unwrap();
    assert_eq!(resumed, game);
    assert_eq!(resumed.turn(), Color::Black);

    // unmoved pawns keep their double step after a reload
    assert_eq!(
        resumed.board().piece_at(sq("e7")).kind(),
        PieceKind::UnmovedPawn
    );
    resumed.make_move(sq("e7"), sq("e5")).unwrap();
    // moved pawns do not
    let err = resumed.make_move(sq("d4"), sq("d6")).unwrap_err();
    assert!(matches!(err, MoveError::IllegalMove { .. }));
}

#[test]
fn knight_hops_over_a_full_rank() {
    let mut game = Game::new();
    game.make_move(sq("b1"), sq("c3")).unwrap();
    game.make_move(sq("b8"), sq("a6")).unwrap();
    assert_eq!(game.board().piece_at(sq("b1")), Piece::Empty);
    assert_eq!(game.board().piece_at(sq("a6")), Piece::Knight(Color::Black));
    assert_ne!(game.board(), &Board::standard());
}
