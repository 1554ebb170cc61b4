//! King step and castling target generation.

use crate::board::Board;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

use super::push_step;

const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Adjacent squares plus geometrically available castling targets.
pub fn king_moves(piece: &Piece, board: &Board, out: &mut Vec<Position>) {
    for (dr, dc) in KING_STEPS {
        push_step(piece, board, piece.position().offset(dr, dc), out);
    }
    castling_targets(piece, board, out);
}

/// Castling destinations for an unmoved king whose corner rook is unmoved and
/// whose path to that rook is empty.
///
/// Attacked squares are not considered here; the validator rejects castling
/// out of, through, or into check.
pub fn castling_targets(king: &Piece, board: &Board, out: &mut Vec<Position>) {
    if king.kind() != PieceKind::King || king.has_moved() {
        return;
    }
    let from = king.position();
    for (rook_col, step) in [(7i8, 1i8), (0, -1)] {
        let rook_ready = board
            .piece_at(Position::new(from.row(), rook_col))
            .is_some_and(|rook| {
                rook.kind() == PieceKind::Rook && rook.color() == king.color() && !rook.has_moved()
            });
        if !rook_ready {
            continue;
        }
        let path_clear = range_between(from.col(), rook_col)
            .all(|col| board.is_empty_at(Position::new(from.row(), col)));
        let target = from.offset(0, 2 * step);
        if path_clear && target.is_valid() {
            out.push(target);
        }
    }
}

/// Columns strictly between `a` and `b`.
pub(crate) fn range_between(a: i8, b: i8) -> impl Iterator<Item = i8> {
    (a.min(b) + 1)..a.max(b)
}
