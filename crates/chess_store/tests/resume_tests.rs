use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use chess_core::{Color, Game, MoveError};
use chess_store::{Backend, GameRepository, StoreConfig};

fn unique_temp_dir(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    std::env::temp_dir()
        .join("chess_store_tests")
        .join(format!("{name}-{}-{nanos}", std::process::id()))
}

#[test]
fn game_survives_a_restart() {
    let dir = unique_temp_dir("restart");
    let config = StoreConfig {
        backend: Backend::Json,
        directory: dir.clone(),
    };

    let id = {
        let mut repo = config.open().unwrap();
        let mut game = Game::new();
        game.make_move("e2".parse().unwrap(), "e4".parse().unwrap())
            .unwrap();
        let id = repo.save(game.turn(), game.board()).unwrap();

        game.make_move("e7".parse().unwrap(), "e5".parse().unwrap())
            .unwrap();
        repo.update(&id, game.turn(), game.board()).unwrap();
        id
    };

    let repo = config.open().unwrap();
    let mut game = repo.load_game(&id).unwrap();
    assert_eq!(game.turn(), Color::White);

    let err = game
        .make_move("e5".parse().unwrap(), "e4".parse().unwrap())
        .unwrap_err();
    assert!(matches!(err, MoveError::WrongTurn { .. }));
    game.make_move("g1".parse().unwrap(), "f3".parse().unwrap())
        .unwrap();

    std::fs::remove_dir_all(&dir).unwrap();
}
