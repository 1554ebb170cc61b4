//! Chess rules core: board model, move generation, legality, and SAN.

mod board;
mod color;
mod error;
mod game;
mod game_state;
pub mod movegen;
mod piece;
mod piece_kind;
mod position;
pub mod san;
mod square;
pub mod validator;

pub use board::{Board, PrettyBoard};
pub use color::Color;
pub use error::{BoardError, MoveError, ParsePositionError};
pub use game::{Game, MoveRecord};
pub use game_state::{GameState, Status};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::Position;
pub use san::SanFlags;
pub use square::Square;
