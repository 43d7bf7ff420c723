pub mod board;
pub mod coordinate;
pub mod error;
pub mod game;
pub mod piece;
pub mod route;
pub mod snapshot;
pub mod types;

pub use board::*;
pub use coordinate::*;
pub use error::*;
pub use game::*;
pub use piece::*;
pub use route::*;
pub use snapshot::*;
pub use types::*;
