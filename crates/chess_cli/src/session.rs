//! One console session: at most one game in progress plus a repository to
//! save it to.

use anyhow::{Context, Result};
use chess_core::{Game, MoveError};
use chess_store::{GameId, GameRepository};
use tracing::info;

use crate::command::{Command, USAGE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text to show the user; the session continues.
    Reply(String),
    Quit,
}

pub struct Session<R> {
    repo: R,
    game: Option<Game>,
    saved_id: Option<GameId>,
}

impl<R: GameRepository> Session<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            game: None,
            saved_id: None,
        }
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    pub fn saved_id(&self) -> Option<&str> {
        self.saved_id.as_deref()
    }

    /// Run one command. Errors leave the session as it was.
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        let reply = match command {
            Command::Start => {
                self.game = Some(Game::new());
                self.saved_id = None;
                self.show()?
            }
            Command::Move { from, to } => {
                self.game_mut()?.make_move(from, to)?;
                self.show()?
            }
            Command::Board => self.show()?,
            Command::Status => {
                let game = self.current()?;
                match &self.saved_id {
                    Some(id) => format!("{} to move (saved as game {id})", game.turn()),
                    None => format!("{} to move (not saved)", game.turn()),
                }
            }
            Command::Save => self.save()?,
            Command::Load(id) => {
                let game = self
                    .repo
                    .load_game(&id)
                    .with_context(|| format!("cannot load game {id}"))?;
                info!(%id, "resumed game");
                self.game = Some(game);
                self.saved_id = Some(id);
                self.show()?
            }
            Command::List => {
                let ids = self.repo.list_ids()?;
                if ids.is_empty() {
                    "no saved games".to_string()
                } else {
                    format!("saved games: {}", ids.join(", "))
                }
            }
            Command::Delete(id) => {
                self.repo.delete(&id)?;
                if self.saved_id.as_deref() == Some(id.as_str()) {
                    self.saved_id = None;
                }
                format!("deleted game {id}")
            }
            Command::Help => USAGE.to_string(),
            Command::End => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Reply(reply))
    }

    fn save(&mut self) -> Result<String> {
        let Some(game) = &self.game else {
            return Err(no_game());
        };
        match &self.saved_id {
            Some(id) => {
                self.repo.update(id, game.turn(), game.board())?;
                Ok(format!("updated game {id}"))
            }
            None => {
                let id = self.repo.save(game.turn(), game.board())?;
                let reply = format!("saved as game {id}");
                self.saved_id = Some(id);
                Ok(reply)
            }
        }
    }

    fn current(&self) -> Result<&Game> {
        self.game.as_ref().ok_or_else(no_game)
    }

    fn game_mut(&mut self) -> Result<&mut Game> {
        self.game.as_mut().ok_or_else(no_game)
    }

    fn show(&self) -> Result<String> {
        Ok(render(self.current()?))
    }
}

fn no_game() -> anyhow::Error {
    anyhow::anyhow!("no game in progress, use `start` or `load <id>`")
}

/// Board with rank and file labels, followed by the side to move.
pub fn render(game: &Game) -> String {
    let mut out = String::new();
    for (i, line) in game.board().to_string().lines().enumerate() {
        out.push_str(&format!("{} {line}\n", 8 - i));
    }
    out.push_str("  abcdefgh\n");
    out.push_str(&format!("{} to move", game.turn()));
    out
}

/// Whether an error is an ordinary rejected move rather than a fault.
pub fn is_rejected_move(err: &anyhow::Error) -> bool {
    err.downcast_ref::<MoveError>().is_some()
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
