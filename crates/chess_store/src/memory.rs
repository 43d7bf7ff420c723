use std::collections::BTreeMap;

use chess_core::{Board, Color, Snapshot};
use tracing::debug;

use crate::{GameId, GameRepository, StorageError};

/// Repository that lives only as long as the process. Ids are consecutive
/// integers starting at 1 and are never reused.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    games: BTreeMap<u64, Snapshot>,
    last_id: u64,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    fn key(&self, id: &str) -> Result<u64, StorageError> {
        id.parse::<u64>()
            .ok()
            .filter(|key| self.games.contains_key(key))
            .ok_or_else(|| StorageError::NotFound(id.to_string()))
    }
}

impl GameRepository for MemoryRepository {
    fn list_ids(&self) -> Result<Vec<GameId>, StorageError> {
        Ok(self.games.keys().map(|k| k.to_string()).collect())
    }

    fn save(&mut self, turn: Color, board: &Board) -> Result<GameId, StorageError> {
        self.last_id += 1;
        self.games.insert(self.last_id, Snapshot::new(turn, board));
        debug!(id = self.last_id, "game saved in memory");
        Ok(self.last_id.to_string())
    }

    fn load(&self, id: &str) -> Result<(Color, Board), StorageError> {
        let snapshot = self
            .games
            .get(&self.key(id)?)
            .ok_or_else(|| StorageError::NotFound(id.to_string()))?;
        let board = snapshot.to_board().map_err(|source| StorageError::Snapshot {
            id: id.to_string(),
            source,
        })?;
        Ok((snapshot.turn, board))
    }

    fn update(&mut self, id: &str, turn: Color, board: &Board) -> Result<(), StorageError> {
        let key = self.key(id)?;
        let next = Snapshot::new(turn, board);
        if let Some(previous) = self.games.insert(key, next.clone()) {
            debug!(id, changed = next.changed_squares(&previous).len(), "game updated in memory");
        }
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<(), StorageError> {
        let key = self.key(id)?;
        self.games.remove(&key);
        debug!(id, "game deleted from memory");
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod memory_tests;
