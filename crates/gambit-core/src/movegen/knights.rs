//! Knight move generation.

use crate::board::Board;
use crate::piece::Piece;
use crate::position::Position;

use super::push_step;

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// The eight L-shaped jumps, landing on empty or enemy squares.
pub fn knight_moves(piece: &Piece, board: &Board, out: &mut Vec<Position>) {
    for (dr, dc) in KNIGHT_JUMPS {
        push_step(piece, board, piece.position().offset(dr, dc), out);
    }
}
