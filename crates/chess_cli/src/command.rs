use anyhow::{Context, Result, bail};
use chess_core::Coordinate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Move { from: Coordinate, to: Coordinate },
    Board,
    Status,
    Save,
    Load(String),
    List,
    Delete(String),
    Help,
    End,
}

pub const USAGE: &str = "\
Commands:
  start              new game from the standard layout
  move <from> <to>   e.g. `move e2 e4`
  board              show the board
  status             whose turn it is and the save id
  save               save the game (updates it if already saved)
  load <id>          resume a saved game
  list               list saved game ids
  delete <id>        delete a saved game
  help               show this text
  end                quit";

/// Parse one input line. Blank lines give `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = parts.split_first() else {
        return Ok(None);
    };

    let command = match (name.to_ascii_lowercase().as_str(), args) {
        ("start", []) => Command::Start,
        ("move", [from, to]) => Command::Move {
            from: from.parse().with_context(|| format!("bad source square {from:?}"))?,
            to: to.parse().with_context(|| format!("bad target square {to:?}"))?,
        },
        ("move", _) => bail!("usage: move <from> <to>"),
        ("board", []) => Command::Board,
        ("status", []) => Command::Status,
        ("save", []) => Command::Save,
        ("load", [id]) => Command::Load(id.to_string()),
        ("load", _) => bail!("usage: load <id>"),
        ("list", []) => Command::List,
        ("delete", [id]) => Command::Delete(id.to_string()),
        ("delete", _) => bail!("usage: delete <id>"),
        ("help" | "--help" | "-h", _) => Command::Help,
        ("end" | "quit" | "exit", []) => Command::End,
        ("start" | "board" | "status" | "save" | "list" | "end" | "quit" | "exit", _) => {
            bail!("`{name}` takes no arguments")
        }
        (other, _) => bail!("unknown command {other:?}, type `help`"),
    };
    Ok(Some(command))
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod command_tests;
