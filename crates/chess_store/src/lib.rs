//! Saved-game storage.
//!
//! A repository keeps complete game snapshots (side to move plus all 64
//! squares) under string identifiers. Two backends are provided: an
//! in-memory map and a directory of JSON files.

pub mod config;
pub mod error;
pub mod json;
pub mod memory;

pub use config::{Backend, StoreConfig};
pub use error::StorageError;
pub use json::JsonFileRepository;
pub use memory::MemoryRepository;

use chess_core::{Board, Color, Game};

/// Identifier a repository hands out for a saved game.
pub type GameId = String;

/// Storage for games between sessions.
///
/// Implementations must keep each saved game independent: updating or
/// deleting one id never touches another.
pub trait GameRepository {
    /// Ids of all saved games, oldest first.
    fn list_ids(&self) -> Result<Vec<GameId>, StorageError>;

    /// Store a new game and return its id.
    fn save(&mut self, turn: Color, board: &Board) -> Result<GameId, StorageError>;

    /// Fetch a saved game. Unknown ids fail with [`StorageError::NotFound`].
    fn load(&self, id: &str) -> Result<(Color, Board), StorageError>;

    /// Replace the stored state of an existing game.
    fn update(&mut self, id: &str, turn: Color, board: &Board) -> Result<(), StorageError>;

    fn delete(&mut self, id: &str) -> Result<(), StorageError>;

    /// Convenience wrapper around [`GameRepository::load`].
    fn load_game(&self, id: &str) -> Result<Game, StorageError> {
        let (turn, board) = self.load(id)?;
        Ok(Game::from_parts(turn, board))
    }
}

impl<R: GameRepository + ?Sized> GameRepository for Box<R> {
    fn list_ids(&self) -> Result<Vec<GameId>, StorageError> {
        (**self).list_ids()
    }

    fn save(&mut self, turn: Color, board: &Board) -> Result<GameId, StorageError> {
        (**self).save(turn, board)
    }

    fn load(&self, id: &str) -> Result<(Color, Board), StorageError> {
        (**self).load(id)
    }

    fn update(&mut self, id: &str, turn: Color, board: &Board) -> Result<(), StorageError> {
        (**self).update(id, turn, board)
    }

    fn delete(&mut self, id: &str) -> Result<(), StorageError> {
        (**self).delete(id)
    }
}
