//! Pawn pushes, diagonal captures, and en passant targets.

use crate::board::Board;
use crate::game_state::GameState;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// Single push, double push while unmoved, and diagonal captures.
///
/// En passant is reported separately by [`en_passant_moves`] because it
/// depends on the previous half-move.
pub fn pawn_moves(piece: &Piece, board: &Board, out: &mut Vec<Position>) {
    let dr = piece.color().pawn_direction();
    let from = piece.position();

    let one = from.offset(dr, 0);
    if board.is_empty_at(one) {
        out.push(one);
        let two = from.offset(2 * dr, 0);
        if !piece.has_moved() && board.is_empty_at(two) {
            out.push(two);
        }
    }

    for dc in [-1, 1] {
        let target = from.offset(dr, dc);
        if board.piece_at(target).is_some_and(|other| piece.is_opponent(other)) {
            out.push(target);
        }
    }
}

/// En passant target for `piece`, if the previous half-move was an adjacent
/// enemy pawn's double push.
pub fn en_passant_moves(piece: &Piece, board: &Board, state: &GameState) -> Vec<Position> {
    let mut out = Vec::new();
    if piece.kind() != PieceKind::Pawn {
        return out;
    }
    let from = piece.position();
    if from.row() != piece.color().en_passant_row() {
        return out;
    }
    let Some((last_from, last_to)) = state.last_move() else {
        return out;
    };
    let Some(last) = board.piece_at(last_to) else {
        return out;
    };
    if last.kind() == PieceKind::Pawn
        && piece.is_opponent(last)
        && (last_from.row() - last_to.row()).abs() == 2
        && last_to.row() == from.row()
        && (last_to.col() - from.col()).abs() == 1
    {
        out.push(Position::new(from.row() + piece.color().pawn_direction(), last_to.col()));
    }
    out
}
