//! Sliding piece (bishop, rook, queen) move generation.

use crate::board::Board;
use crate::piece::Piece;
use crate::position::Position;

/// Orthogonal ray directions as (row, col) steps.
pub const ROOK_RAYS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal ray directions as (row, col) steps.
pub const BISHOP_RAYS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// All eight ray directions.
pub const QUEEN_RAYS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Walk each ray until the edge or the first occupied square, which is
/// included only when it holds an opponent.
pub fn slider_moves(piece: &Piece, board: &Board, rays: &[(i8, i8)], out: &mut Vec<Position>) {
    for &(dr, dc) in rays {
        let mut target = piece.position().offset(dr, dc);
        while let Some(sq) = board.square(target) {
            match sq.piece() {
                None => out.push(target),
                Some(other) => {
                    if piece.is_opponent(other) {
                        out.push(target);
                    }
                    break;
                }
            }
            target = target.offset(dr, dc);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::position::Position;

    fn lone(kind: PieceKind, pos: Position) -> Board {
        let mut board = Board::empty();
        board.place_piece(Piece::new(kind, Color::White, pos), pos);
        board
    }

    #[test]
    fn open_board_counts() {
        let board = lone(PieceKind::Rook, Position::D4);
        assert_eq!(board.piece_at(Position::D4).unwrap().pseudo_moves(&board).len(), 14);

        let board = lone(PieceKind::Bishop, Position::D4);
        assert_eq!(board.piece_at(Position::D4).unwrap().pseudo_moves(&board).len(), 13);

        let board = lone(PieceKind::Queen, Position::D4);
        assert_eq!(board.piece_at(Position::D4).unwrap().pseudo_moves(&board).len(), 27);

        let board = lone(PieceKind::Bishop, Position::A1);
        assert_eq!(board.piece_at(Position::A1).unwrap().pseudo_moves(&board).len(), 7);
    }

    #[test]
    fn ray_stops_at_blockers() {
        let mut board = lone(PieceKind::Rook, Position::A1);
        board.place_piece(Piece::new(PieceKind::Pawn, Color::White, Position::A3), Position::A3);
        board.place_piece(Piece::new(PieceKind::Pawn, Color::Black, Position::D1), Position::D1);
        let moves = board.piece_at(Position::A1).unwrap().pseudo_moves(&board);
        assert!(moves.contains(&Position::A2));
        assert!(!moves.contains(&Position::A3), "own piece is not a target");
        assert!(moves.contains(&Position::D1), "enemy piece is capturable");
        assert!(!moves.contains(&Position::E1), "ray ends at the capture");
        assert_eq!(moves.len(), 4);
    }
}
