pub mod board;
pub mod game;
pub mod server;

pub use board::{Axis, Board, Cell, JumpRecord};
pub use game::{Action, Game, GameView, HistoryStore, Outcome};
