//! Move legality over a board and game state.
//!
//! Every query is read-only. What-if questions (does this move leave the
//! king attacked?) are answered by applying the move to a clone of the
//! board and testing the clone, so pins, discovered checks, and en passant
//! exposure need no special geometry.

use crate::board::Board;
use crate::color::Color;
use crate::game_state::{GameState, Status};
use crate::movegen::{en_passant_moves, range_between};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// Return `true` if `player` may move the piece on `from` to `to`.
pub fn is_valid_move(board: &Board, from: Position, to: Position, player: Color, state: &GameState) -> bool {
    if !from.is_valid() || !to.is_valid() {
        return false;
    }
    let Some(piece) = board.piece_at(from) else {
        return false;
    };
    if piece.color() != player {
        return false;
    }

    if is_castling_move(board, from, to) {
        return is_valid_castling(board, from, to, piece);
    }
    if is_en_passant_move(board, from, to, state) {
        return is_valid_en_passant(board, from, to, player, state);
    }

    piece.pseudo_moves(board).contains(&to) && !would_move_expose_king(board, from, to, player)
}

/// Legal destinations for the piece on `from`, empty if it is not `player`'s.
pub fn legal_moves_from(board: &Board, from: Position, player: Color, state: &GameState) -> Vec<Position> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };
    if piece.color() != player {
        return Vec::new();
    }
    let mut candidates = piece.pseudo_moves(board);
    candidates.extend(en_passant_moves(piece, board, state));
    candidates.retain(|&to| is_valid_move(board, from, to, player, state));
    candidates
}

/// Return `true` if any piece of `by` has `target` among its pseudo-moves.
///
/// This is not a pure attack map: an unmoved king's castling targets count,
/// and pawn pushes count while diagonals onto empty squares do not. Queries
/// that place a king on `target` first, as every legality check here does,
/// get the usual meaning.
pub fn is_square_attacked(board: &Board, target: Position, by: Color) -> bool {
    board.pieces(by).any(|p| p.pseudo_moves(board).contains(&target))
}

/// Return `true` if `color`'s king is attacked. A board without that king is never in check.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    match board.king(color) {
        Some(king) => is_square_attacked(board, king.position(), color.opposite()),
        None => false,
    }
}

/// In check with no legal move for any piece.
pub fn is_checkmate(board: &Board, color: Color, state: &GameState) -> bool {
    is_king_in_check(board, color) && !has_any_legal_move(board, color, state)
}

/// Not in check, yet no legal move for any piece.
pub fn is_stalemate(board: &Board, color: Color, state: &GameState) -> bool {
    !is_king_in_check(board, color) && !has_any_legal_move(board, color, state)
}

/// Return `true` if `color` has at least one legal move.
pub fn has_any_legal_move(board: &Board, color: Color, state: &GameState) -> bool {
    board
        .pieces(color)
        .any(|p| !legal_moves_from(board, p.position(), color, state).is_empty())
}

/// Status of the position for `color` to move. Never returns `Draw`.
pub fn classify(board: &Board, color: Color, state: &GameState) -> Status {
    match (is_king_in_check(board, color), has_any_legal_move(board, color, state)) {
        (true, true) => Status::Check,
        (true, false) => Status::Checkmate,
        (false, true) => Status::Playing,
        (false, false) => Status::Stalemate,
    }
}

/// Apply the plain move `from -> to` to a copy and report whether `color`'s king is attacked.
pub fn would_move_expose_king(board: &Board, from: Position, to: Position, color: Color) -> bool {
    let mut probe = board.clone();
    probe.move_piece(from, to);
    is_king_in_check(&probe, color)
}

/// A king moving two files sideways.
pub fn is_castling_move(board: &Board, from: Position, to: Position) -> bool {
    board
        .piece_at(from)
        .is_some_and(|p| p.kind() == PieceKind::King && (to.col() - from.col()).abs() == 2)
}

/// A pawn moving to its current en passant target.
pub fn is_en_passant_move(board: &Board, from: Position, to: Position, state: &GameState) -> bool {
    board
        .piece_at(from)
        .is_some_and(|p| p.kind() == PieceKind::Pawn && en_passant_moves(p, board, state).contains(&to))
}

fn is_valid_castling(board: &Board, from: Position, to: Position, king: &Piece) -> bool {
    if king.has_moved() || to.row() != from.row() {
        return false;
    }
    if is_king_in_check(board, king.color()) {
        return false;
    }

    let step: i8 = if to.col() > from.col() { 1 } else { -1 };
    let rook_col = if step > 0 { 7 } else { 0 };
    let rook_ready = board
        .piece_at(Position::new(from.row(), rook_col))
        .is_some_and(|rook| {
            rook.kind() == PieceKind::Rook && rook.color() == king.color() && !rook.has_moved()
        });
    if !rook_ready {
        return false;
    }

    if !range_between(from.col(), rook_col).all(|col| board.is_empty_at(Position::new(from.row(), col))) {
        return false;
    }

    // The king may not cross or land on an attacked square.
    let mut col = from.col();
    while col != to.col() {
        col += step;
        if would_move_expose_king(board, from, Position::new(from.row(), col), king.color()) {
            return false;
        }
    }
    true
}

fn is_valid_en_passant(board: &Board, from: Position, to: Position, player: Color, state: &GameState) -> bool {
    let Some(captured) = state.last_move_to() else {
        return false;
    };
    let mut probe = board.clone();
    probe.perform_en_passant(from, to, captured);
    !is_king_in_check(&probe, player)
}
