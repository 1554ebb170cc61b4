//! Standard Algebraic Notation rendering.

use crate::board::Board;
use crate::game_state::GameState;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::validator::is_valid_move;

/// Facts about a move that SAN needs beyond the pre-move board.
///
/// `gives_check` and `gives_mate` describe the position after the move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SanFlags {
    /// Render as `O-O` or `O-O-O`.
    pub is_castle: bool,
    /// The capture was in passing.
    pub is_en_passant: bool,
    /// Adds `x`, and the origin file for pawns.
    pub is_capture: bool,
    /// Kind the pawn promotes to, rendered as `=X`.
    pub promotion: Option<PieceKind>,
    /// Appends `+` unless `gives_mate` is set.
    pub gives_check: bool,
    /// Appends `#`.
    pub gives_mate: bool,
}

/// Render one move. `board` and `state` are the position before the move.
pub fn render(board: &Board, state: &GameState, piece: &Piece, from: Position, to: Position, flags: SanFlags) -> String {
    let mut san = String::new();

    if flags.is_castle {
        san.push_str(if to.col() > from.col() { "O-O" } else { "O-O-O" });
    } else {
        match piece.kind().san_letter() {
            Some(letter) => {
                san.push(letter);
                san.push_str(&disambiguation(board, state, piece, from, to));
            }
            None if flags.is_capture => san.push(from.file_char()),
            None => {}
        }
        if flags.is_capture {
            san.push('x');
        }
        san.push_str(&to.to_string());
        if let Some(kind) = flags.promotion
            && let Some(letter) = kind.san_letter()
        {
            san.push('=');
            san.push(letter);
        }
    }

    if flags.gives_mate {
        san.push('#');
    } else if flags.gives_check {
        san.push('+');
    }
    san
}

/// File, rank, or both of `from`, when another piece of the same kind and
/// color could also legally reach `to`.
fn disambiguation(board: &Board, state: &GameState, piece: &Piece, from: Position, to: Position) -> String {
    let rivals: Vec<Position> = board
        .pieces(piece.color())
        .filter(|p| p.kind() == piece.kind() && p.position() != from)
        .map(Piece::position)
        .filter(|&pos| is_valid_move(board, pos, to, piece.color(), state))
        .collect();

    if rivals.is_empty() {
        return String::new();
    }
    let shares_file = rivals.iter().any(|p| p.col() == from.col());
    let shares_rank = rivals.iter().any(|p| p.row() == from.row());
    if !shares_file {
        from.file_char().to_string()
    } else if !shares_rank {
        from.rank_char().to_string()
    } else {
        format!("{}{}", from.file_char(), from.rank_char())
    }
}
