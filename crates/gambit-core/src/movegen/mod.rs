//! Pseudo-legal move generation, one module per piece family.
//!
//! Generators respect blockers and captures but not the safety of the
//! mover's own king; see [`crate::validator`] for the legality filter.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::piece::Piece;
use crate::position::Position;

pub use self::king::{castling_targets, king_moves};
pub(crate) use self::king::range_between;
pub use self::knights::knight_moves;
pub use self::pawns::{en_passant_moves, pawn_moves};
pub use self::sliders::{BISHOP_RAYS, QUEEN_RAYS, ROOK_RAYS, slider_moves};

/// Push `target` if it is on the board and either empty or held by an opponent.
#[inline]
fn push_step(piece: &Piece, board: &Board, target: Position, out: &mut Vec<Position>) {
    let Some(sq) = board.square(target) else {
        return;
    };
    match sq.piece() {
        None => out.push(target),
        Some(other) if piece.is_opponent(other) => out.push(target),
        Some(_) => {}
    }
}
