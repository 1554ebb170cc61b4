//! A colored piece standing on the board.

use std::fmt;

use crate::board::Board;
use crate::color::Color;
use crate::movegen;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// A piece with its color, location, and whether it has ever moved.
///
/// The board keeps `position` in sync with the cell that holds the piece.
/// `has_moved` only ever goes from `false` to `true`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    position: Position,
    has_moved: bool,
}

impl Piece {
    /// Create an unmoved piece.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color, position: Position) -> Piece {
        Piece {
            kind,
            color,
            position,
            has_moved: false,
        }
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Return the piece color.
    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Return the square the piece stands on.
    #[inline]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Return `true` once the piece has moved (or was created by promotion).
    #[inline]
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// Return the same piece flagged as moved.
    #[inline]
    pub const fn moved(mut self) -> Piece {
        self.has_moved = true;
        self
    }

    #[inline]
    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    #[inline]
    pub(crate) fn mark_moved(&mut self) {
        self.has_moved = true;
    }

    /// Return `true` if `other` belongs to the opposing side.
    #[inline]
    pub const fn is_opponent(&self, other: &Piece) -> bool {
        self.color as u8 != other.color as u8
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    pub fn fen_char(&self) -> char {
        let c = self.kind.fen_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Geometrically reachable squares, ignoring the safety of the own king.
    pub fn pseudo_moves(&self, board: &Board) -> Vec<Position> {
        let mut out = Vec::new();
        match self.kind {
            PieceKind::King => movegen::king_moves(self, board, &mut out),
            PieceKind::Queen => movegen::slider_moves(self, board, &movegen::QUEEN_RAYS, &mut out),
            PieceKind::Rook => movegen::slider_moves(self, board, &movegen::ROOK_RAYS, &mut out),
            PieceKind::Bishop => movegen::slider_moves(self, board, &movegen::BISHOP_RAYS, &mut out),
            PieceKind::Knight => movegen::knight_moves(self, board, &mut out),
            PieceKind::Pawn => movegen::pawn_moves(self, board, &mut out),
        }
        out
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color {
            Color::White => 'W',
            Color::Black => 'B',
        };
        write!(
            f,
            "{}{}@{}{}",
            color_prefix,
            self.kind.fen_char().to_ascii_uppercase(),
            self.position,
            if self.has_moved { "*" } else { "" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;
    use crate::position::Position;

    #[test]
    fn new_is_unmoved() {
        let piece = Piece::new(PieceKind::Rook, Color::White, Position::A1);
        assert_eq!(piece.kind(), PieceKind::Rook);
        assert_eq!(piece.color(), Color::White);
        assert_eq!(piece.position(), Position::A1);
        assert!(!piece.has_moved());
        assert!(piece.moved().has_moved());
    }

    #[test]
    fn fen_char_case() {
        assert_eq!(Piece::new(PieceKind::Knight, Color::White, Position::B1).fen_char(), 'N');
        assert_eq!(Piece::new(PieceKind::Knight, Color::Black, Position::B8).fen_char(), 'n');
    }

    #[test]
    fn opponents() {
        let white = Piece::new(PieceKind::Pawn, Color::White, Position::E2);
        let black = Piece::new(PieceKind::Pawn, Color::Black, Position::E7);
        assert!(white.is_opponent(&black));
        assert!(!white.is_opponent(&white));
    }

    #[test]
    fn debug_format() {
        let piece = Piece::new(PieceKind::Queen, Color::Black, Position::D8);
        assert_eq!(format!("{piece:?}"), "BQ@d8");
        assert_eq!(format!("{:?}", piece.moved()), "BQ@d8*");
    }
}
