use super::*;
use chess_core::{Coordinate, Game, Piece};

fn c(column: i8, row: i8) -> Coordinate {
    Coordinate::new(column, row).unwrap()
}

#[test]
fn test_save_and_load() {
    let mut repo = MemoryRepository::new();
    let id = repo.save(Color::White, &Board::standard()).unwrap();
    assert_eq!(id, "1");

    let (turn, board) = repo.load(&id).unwrap();
    assert_eq!(turn, Color::White);
    assert_eq!(board, Board::standard());
}

#[test]
fn test_ids_are_not_reused() {
    let mut repo = MemoryRepository::new();
    let a = repo.save(Color::White, &Board::standard()).unwrap();
    let b = repo.save(Color::Black, &Board::empty()).unwrap();
    repo.delete(&b).unwrap();
    let c = repo.save(Color::White, &Board::empty()).unwrap();

    assert_eq!(repo.list_ids().unwrap(), vec![a, c.clone()]);
    assert_eq!(c, "3");
    assert_eq!(repo.len(), 2);
}

#[test]
fn test_update_overwrites() {
    let mut repo = MemoryRepository::new();
    let mut game = Game::new();
    let id = repo.save(game.turn(), game.board()).unwrap();

    game.make_move(c(6, 7), c(5, 5)).unwrap();
    repo.update(&id, game.turn(), game.board()).unwrap();

    let loaded = repo.load_game(&id).unwrap();
    assert_eq!(loaded, game);
    assert_eq!(loaded.board().piece_at(c(5, 5)), Piece::Knight(Color::White));
}

#[test]
fn test_unknown_ids() {
    let mut repo = MemoryRepository::new();
    assert!(matches!(repo.load("1"), Err(StorageError::NotFound(_))));
    assert!(matches!(repo.load("nope"), Err(StorageError::NotFound(_))));
    assert!(matches!(
        repo.update("4", Color::White, &Board::empty()),
        Err(StorageError::NotFound(_))
    ));
    assert!(matches!(repo.delete("1"), Err(StorageError::NotFound(_))));
    assert!(repo.is_empty());
}
