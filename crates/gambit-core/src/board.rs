//! The board: an 8x8 mailbox of squares plus a cache of both king locations.

use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// Back rank layout from file a to file h.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement.
///
/// The board owns every piece. `kings` is a lookup alias, indexed by
/// [`Color::index()`], updated whenever a king enters or leaves a cell.
/// Cloning yields a fully independent board.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Square; 8]; 8],
    kings: [Option<Position>; Color::COUNT],
}

impl Board {
    /// Return a board with no pieces.
    pub fn empty() -> Board {
        let mut squares = [[Square::new(Position::new(0, 0)); 8]; 8];
        for pos in Position::all() {
            squares[pos.row() as usize][pos.col() as usize] = Square::new(pos);
        }
        Board {
            squares,
            kings: [None; Color::COUNT],
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            let back = color.back_row();
            let pawns = back + color.pawn_direction();
            for (col, kind) in BACK_RANK.into_iter().enumerate() {
                let col = col as i8;
                board.place_piece(Piece::new(kind, color, Position::new(back, col)), Position::new(back, col));
                board.place_piece(
                    Piece::new(PieceKind::Pawn, color, Position::new(pawns, col)),
                    Position::new(pawns, col),
                );
            }
        }
        board
    }

    /// Return the cell at `pos`, or `None` off the board.
    #[inline]
    pub fn square(&self, pos: Position) -> Option<&Square> {
        if !pos.is_valid() {
            return None;
        }
        Some(&self.squares[pos.row() as usize][pos.col() as usize])
    }

    #[inline]
    fn square_mut(&mut self, pos: Position) -> Option<&mut Square> {
        if !pos.is_valid() {
            return None;
        }
        Some(&mut self.squares[pos.row() as usize][pos.col() as usize])
    }

    /// Return the piece on `pos`, if any.
    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        self.square(pos)?.piece()
    }

    /// Return `true` if `pos` is on the board and empty.
    #[inline]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.square(pos).is_some_and(Square::is_empty)
    }

    /// Iterate over the 64 cells, row by row from a8.
    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter().flatten()
    }

    /// Iterate over all pieces of `color`, row by row from a8.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.squares()
            .filter_map(Square::piece)
            .filter(move |p| p.color() == color)
    }

    /// Return the cached king location for `color`.
    #[inline]
    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.kings[color.index()]
    }

    /// Return the king of `color`, resolved through the cache.
    #[inline]
    pub fn king(&self, color: Color) -> Option<&Piece> {
        self.piece_at(self.king_position(color)?)
    }

    /// Put `piece` on `pos`, replacing any occupant. No-op off the board.
    pub fn place_piece(&mut self, mut piece: Piece, pos: Position) {
        if !pos.is_valid() {
            return;
        }
        self.clear(pos);
        piece.set_position(pos);
        if piece.kind() == PieceKind::King {
            self.kings[piece.color().index()] = Some(pos);
        }
        if let Some(sq) = self.square_mut(pos) {
            sq.set_piece(piece);
        }
    }

    /// Remove and return the occupant of `pos`.
    pub fn clear(&mut self, pos: Position) -> Option<Piece> {
        let removed = self.square_mut(pos)?.take_piece()?;
        if removed.kind() == PieceKind::King && self.kings[removed.color().index()] == Some(pos) {
            self.kings[removed.color().index()] = None;
        }
        Some(removed)
    }

    /// Move the piece on `from` to `to`, capturing any occupant there.
    ///
    /// The moved piece is flagged as moved. No-op if either square is off
    /// the board or `from` is empty.
    pub fn move_piece(&mut self, from: Position, to: Position) {
        if !from.is_valid() || !to.is_valid() {
            return;
        }
        if let Some(mut piece) = self.clear(from) {
            piece.mark_moved();
            self.place_piece(piece, to);
        }
    }

    /// Move the king two files and bring the corner rook to the square it crossed.
    pub fn perform_castling(&mut self, king_from: Position, king_to: Position) {
        if !self
            .piece_at(king_from)
            .is_some_and(|p| p.kind() == PieceKind::King)
        {
            return;
        }
        let kingside = king_to.col() > king_from.col();
        let (rook_col, rook_to_col) = if kingside {
            (7, king_to.col() - 1)
        } else {
            (0, king_to.col() + 1)
        };
        self.move_piece(king_from, king_to);
        self.move_piece(
            Position::new(king_from.row(), rook_col),
            Position::new(king_from.row(), rook_to_col),
        );
    }

    /// Move the capturing pawn to `to` and remove the pawn standing on `captured`.
    pub fn perform_en_passant(&mut self, from: Position, to: Position, captured: Position) {
        self.move_piece(from, to);
        self.clear(captured);
    }

    /// Replace the pawn on `pos` with a piece of the chosen kind.
    ///
    /// Missing or unsupported choices become a queen. The new piece counts as moved.
    pub fn promote_pawn(&mut self, pos: Position, choice: Option<PieceKind>) {
        let Some(pawn) = self.piece_at(pos).copied() else {
            return;
        };
        if pawn.kind() != PieceKind::Pawn {
            return;
        }
        let kind = PieceKind::promotion_or_queen(choice);
        self.place_piece(Piece::new(kind, pawn.color(), pos).moved(), pos);
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        for sq in self.squares() {
            if let Some(piece) = sq.piece()
                && piece.position() != sq.position()
            {
                return Err(BoardError::MisplacedPiece {
                    cell: sq.position(),
                    recorded: piece.position(),
                });
            }
        }

        for color in Color::ALL {
            let kings: Vec<Position> = self
                .pieces(color)
                .filter(|p| p.kind() == PieceKind::King)
                .map(Piece::position)
                .collect();
            if kings.len() != 1 {
                return Err(BoardError::InvalidKingCount {
                    color,
                    count: kings.len(),
                });
            }
            let cached = self.king_position(color);
            if cached != Some(kings[0]) {
                return Err(BoardError::StaleKingCache {
                    color,
                    cached,
                    actual: Some(kings[0]),
                });
            }
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board, with coordinates.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard {
            board: self,
            coords: true,
        }
    }

    /// Return a pretty-printable wrapper for this board without coordinates.
    pub fn pretty_plain(&self) -> PrettyBoard<'_> {
        PrettyBoard {
            board: self,
            coords: false,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(")?;
        for (i, row) in self.squares.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            for sq in row {
                match sq.piece() {
                    Some(p) => write!(f, "{p}")?,
                    None => write!(f, ".")?,
                }
            }
        }
        write!(f, ")")
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, rank 8 on top.
pub struct PrettyBoard<'a> {
    board: &'a Board,
    coords: bool,
}

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_idx, row) in self.board.squares.iter().enumerate() {
            if self.coords {
                write!(f, "{}  ", 8 - row_idx)?;
            }
            for (col_idx, sq) in row.iter().enumerate() {
                let c = sq.piece().map_or('.', Piece::fen_char);
                if col_idx < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            if row_idx < 7 || self.coords {
                writeln!(f)?;
            }
        }
        if self.coords {
            write!(f, "   a b c d e f g h")?;
        }
        Ok(())
    }
}
