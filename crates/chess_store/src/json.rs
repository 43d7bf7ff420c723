//! Directory-backed repository: one pretty-printed JSON snapshot per game,
//! stored as `<id>.json`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chess_core::{Board, Color, Snapshot};
use tracing::{debug, info, warn};

use crate::{GameId, GameRepository, StorageError};

const EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    dir: PathBuf,
}

impl JsonFileRepository {
    /// Use `dir` as the save directory, creating it if needed.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| StorageError::io(&dir, e))?;
        info!(dir = %dir.display(), "opened json game store");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    // Ids are plain integers; anything else cannot name a file we wrote.
    fn path_for(&self, id: &str) -> Result<PathBuf, StorageError> {
        let n: u64 = id
            .parse()
            .map_err(|_| StorageError::NotFound(id.to_string()))?;
        Ok(self.dir.join(format!("{n}.{EXTENSION}")))
    }

    fn numeric_ids(&self) -> Result<Vec<u64>, StorageError> {
        let entries = fs::read_dir(&self.dir).map_err(|e| StorageError::io(&self.dir, e))?;
        let mut ids = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| StorageError::io(&self.dir, e))?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(n) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| s.parse::<u64>().ok())
            {
                ids.push(n);
            }
        }
        ids.sort_unstable();
        Ok(ids)
    }

    fn read_snapshot(&self, id: &str) -> Result<Snapshot, StorageError> {
        let path = self.path_for(id)?;
        let contents = fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StorageError::NotFound(id.to_string()),
            _ => StorageError::io(&path, e),
        })?;
        serde_json::from_str(&contents).map_err(|source| StorageError::Decode {
            id: id.to_string(),
            source,
        })
    }

    fn write_snapshot(&self, path: &Path, snapshot: &Snapshot) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(snapshot).map_err(StorageError::Encode)?;
        // Readers never see a half-written save.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| StorageError::io(&tmp, e))?;
        fs::rename(&tmp, path).map_err(|e| StorageError::io(path, e))
    }
}

impl GameRepository for JsonFileRepository {
    fn list_ids(&self) -> Result<Vec<GameId>, StorageError> {
        Ok(self
            .numeric_ids()?
            .into_iter()
            .map(|n| n.to_string())
            .collect())
    }

    fn save(&mut self, turn: Color, board: &Board) -> Result<GameId, StorageError> {
        let next = self.numeric_ids()?.last().map_or(1, |n| n + 1);
        let id = next.to_string();
        let path = self.path_for(&id)?;
        self.write_snapshot(&path, &Snapshot::new(turn, board))?;
        info!(%id, path = %path.display(), "game saved");
        Ok(id)
    }

    fn load(&self, id: &str) -> Result<(Color, Board), StorageError> {
        let snapshot = self.read_snapshot(id)?;
        let board = snapshot.to_board().map_err(|source| StorageError::Snapshot {
            id: id.to_string(),
            source,
        })?;
        debug!(%id, turn = %snapshot.turn, "game loaded");
        Ok((snapshot.turn, board))
    }

    fn update(&mut self, id: &str, turn: Color, board: &Board) -> Result<(), StorageError> {
        let path = self.path_for(id)?;
        if !path.exists() {
            return Err(StorageError::NotFound(id.to_string()));
        }

        let next = Snapshot::new(turn, board);
        match self.read_snapshot(id) {
            Ok(previous) => {
                debug!(%id, changed = next.changed_squares(&previous).len(), "updating game");
            }
            Err(e) => warn!(%id, error = %e, "overwriting unreadable save"),
        }
        self.write_snapshot(&path, &next)?;
        info!(%id, "game updated");
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<(), StorageError> {
        let path = self.path_for(id)?;
        fs::remove_file(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StorageError::NotFound(id.to_string()),
            _ => StorageError::io(&path, e),
        })?;
        info!(%id, "game deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod json_tests;
