//! Integration tests that play whole games through the public API.
//!
//! Moves are entered in SAN where that reads naturally and as coordinate
//! pairs where a rejection is being checked.

use gambit_core::{Board, Color, Game, GameState, MoveError, Piece, PieceKind, Position, Status};

/// Helper: play every SAN move in order, failing on the first rejection.
fn play(game: &mut Game, moves: &[&str]) {
    for san in moves {
        assert!(game.play_san(san), "{san} should be legal after {:?}", game.history());
    }
}

fn game_after(moves: &[&str]) -> Game {
    let mut game = Game::new();
    play(&mut game, moves);
    game
}

fn kind_at(game: &Game, pos: Position) -> Option<(PieceKind, Color)> {
    game.board().piece_at(pos).map(|p| (p.kind(), p.color()))
}

// ── Openings and mates ────────────────────────────────────────────────────────

#[test]
fn ruy_lopez_opening() {
    let game = game_after(&["e4", "e5", "Nf3", "Nc6", "Bb5"]);
    assert_eq!(game.status(), Status::Playing);
    assert_eq!(game.side_to_move(), Color::Black);
    assert_eq!(game.history(), ["e4", "e5", "Nf3", "Nc6", "Bb5"]);
    assert_eq!(kind_at(&game, Position::B5), Some((PieceKind::Bishop, Color::White)));
    assert_eq!(game.formatted_history(), vec!["1. e4    e5", "2. Nf3   Nc6", "3. Bb5"]);
}

#[test]
fn fools_mate() {
    let game = game_after(&["f3", "e5", "g4", "Qh4"]);
    assert_eq!(game.status(), Status::Checkmate);
    assert_eq!(game.side_to_move(), Color::White);
    assert_eq!(game.last_san(), Some("Qh4#"));
    assert!(game.state().is_game_over());
    assert_eq!(game.state().status_message(), "Checkmate! Black wins.");
    assert!(game.legal_moves().is_empty());
}

#[test]
fn scholars_mate() {
    let game = game_after(&["e4", "e5", "Bc4", "Nc6", "Qh5", "Nf6", "Qxf7#"]);
    assert_eq!(game.status(), Status::Checkmate);
    assert_eq!(game.side_to_move(), Color::Black);
    assert_eq!(game.last_san(), Some("Qxf7#"));
    assert_eq!(game.state().status_message(), "Checkmate! White wins.");
}

#[test]
fn check_is_reported_and_answered() {
    let mut game = game_after(&["e4", "f5", "Qh5"]);
    assert_eq!(game.status(), Status::Check);
    assert_eq!(game.last_san(), Some("Qh5+"));
    assert_eq!(game.state().status_message(), "Game is running. Black is in check.");
    // Only g6 blocks; the king has no flight square.
    assert_eq!(game.legal_moves(), vec![(Position::G7, Position::G6)]);
    play(&mut game, &["g6"]);
    assert_eq!(game.status(), Status::Playing);
}

// ── En passant ────────────────────────────────────────────────────────────────

#[test]
fn en_passant_capture() {
    let mut game = game_after(&["e4", "a6", "e5", "d5"]);
    let record = game.try_move(Position::E5, Position::D6, None).unwrap();
    assert!(record.is_en_passant);
    assert!(record.is_capture);
    assert_eq!(record.san, "exd6");
    assert_eq!(kind_at(&game, Position::D6), Some((PieceKind::Pawn, Color::White)));
    assert!(game.board().is_empty_at(Position::D5));
    assert!(game.board().is_empty_at(Position::E5));
}

#[test]
fn en_passant_window_expires() {
    let mut game = game_after(&["e4", "a6", "e5", "d5", "Nf3", "a5"]);
    let before = game.board().clone();
    assert_eq!(
        game.try_move(Position::E5, Position::D6, None),
        Err(MoveError::Illegal {
            from: Position::E5,
            to: Position::D6
        })
    );
    assert_eq!(game.board(), &before);
    assert_eq!(game.state().move_count(), 6);
}

#[test]
fn en_passant_undo_restores_captured_pawn() {
    let mut game = game_after(&["e4", "a6", "e5", "d5", "exd6"]);
    assert!(game.undo_last_move());
    assert_eq!(kind_at(&game, Position::D5), Some((PieceKind::Pawn, Color::Black)));
    assert_eq!(kind_at(&game, Position::E5), Some((PieceKind::Pawn, Color::White)));
    assert!(game.legal_moves_from(Position::E5).contains(&Position::D6));
}

// ── Castling ──────────────────────────────────────────────────────────────────

#[test]
fn kingside_castling() {
    let mut game = game_after(&["e4", "e5", "Nf3", "Nc6", "Bc4", "Bc5"]);
    let record = game.try_san("O-O").unwrap();
    assert!(record.is_castle);
    assert_eq!(record.san, "O-O");
    assert_eq!(kind_at(&game, Position::G1), Some((PieceKind::King, Color::White)));
    assert_eq!(kind_at(&game, Position::F1), Some((PieceKind::Rook, Color::White)));
    assert!(game.board().is_empty_at(Position::E1));
    assert!(game.board().is_empty_at(Position::H1));
    assert_eq!(game.board().king_position(Color::White), Some(Position::G1));
}

#[test]
fn queenside_castling_accepts_zero_notation() {
    let mut game = game_after(&["d4", "d5", "Nc3", "Nc6", "Bf4", "Bf5", "Qd2", "Qd7"]);
    assert!(game.play_san("0-0-0"));
    assert_eq!(game.last_san(), Some("O-O-O"));
    assert_eq!(kind_at(&game, Position::C1), Some((PieceKind::King, Color::White)));
    assert_eq!(kind_at(&game, Position::D1), Some((PieceKind::Rook, Color::White)));
}

#[test]
fn castling_lost_after_king_moves() {
    let mut game = game_after(&["e4", "e5", "Nf3", "Nc6", "Bc4", "Bc5", "Ke2", "Nf6", "Ke1", "d6"]);
    assert!(!game.play_san("O-O"));
    assert!(game.try_move(Position::E1, Position::G1, None).is_err());
    assert_eq!(game.side_to_move(), Color::White);
}

#[test]
fn castling_rejected_through_attacked_square() {
    let mut board = Board::empty();
    board.place_piece(Piece::new(PieceKind::King, Color::White, Position::E1), Position::E1);
    board.place_piece(Piece::new(PieceKind::Rook, Color::White, Position::H1), Position::H1);
    board.place_piece(Piece::new(PieceKind::King, Color::Black, Position::A8), Position::A8);
    board.place_piece(Piece::new(PieceKind::Rook, Color::Black, Position::F8), Position::F8);
    let mut game = Game::from_board(board, Color::White);
    assert!(game.try_move(Position::E1, Position::G1, None).is_err());
    assert_eq!(kind_at(&game, Position::H1), Some((PieceKind::Rook, Color::White)));
}

// ── Promotion and disambiguation ──────────────────────────────────────────────

#[test]
fn underpromotion_by_capture() {
    let mut board = Board::empty();
    board.place_piece(Piece::new(PieceKind::King, Color::White, Position::E1), Position::E1);
    board.place_piece(Piece::new(PieceKind::King, Color::Black, Position::H8), Position::H8);
    board.place_piece(Piece::new(PieceKind::Pawn, Color::White, Position::B7), Position::B7);
    board.place_piece(Piece::new(PieceKind::Rook, Color::Black, Position::A8), Position::A8);
    let mut game = Game::from_board(board, Color::White);

    let record = game.try_san("bxa8=N").unwrap();
    assert_eq!(record.promotion, Some(PieceKind::Knight));
    assert!(record.is_capture);
    assert_eq!(kind_at(&game, Position::A8), Some((PieceKind::Knight, Color::White)));
    assert!(game.board().is_empty_at(Position::B7));
}

#[test]
fn ambiguous_knight_move_needs_file() {
    let mut game = game_after(&["d4", "d5", "Nf3", "Nf6"]);
    assert!(!game.play_san("Nd2"));
    play(&mut game, &["Nbd2"]);
    assert_eq!(game.last_move(), Some((Position::B1, Position::D2)));
    assert_eq!(game.last_san(), Some("Nbd2"));
}

// ── History and undo ──────────────────────────────────────────────────────────

#[test]
fn history_tracks_move_count() {
    let mut game = Game::new();
    for san in ["c4", "e5", "Nc3", "Nf6", "g3", "d5", "cxd5", "Nxd5"] {
        play(&mut game, &[san]);
        assert_eq!(game.history().len() as u32, game.state().move_count());
    }
    assert_eq!(game.last_san(), Some("Nxd5"));
}

#[test]
fn undo_to_start_matches_fresh_game() {
    let mut game = game_after(&["e4", "e5", "Nf3", "Nc6", "Bc4", "Bc5", "O-O", "Nf6"]);
    while game.can_undo() {
        assert!(game.undo_last_move());
    }
    assert_eq!(game.board(), &Board::starting_position());
    assert_eq!(game.state(), &GameState::new());
    assert!(game.history().is_empty());
    assert!(!game.undo_last_move());
}

#[test]
fn undo_after_mate_resumes_play() {
    let mut game = game_after(&["f3", "e5", "g4", "Qh4#"]);
    assert!(game.undo_last_move());
    assert_eq!(game.status(), Status::Playing);
    assert_eq!(game.side_to_move(), Color::Black);
    assert!(game.legal_moves().contains(&(Position::D8, Position::H4)));
}

// ── Black special moves ───────────────────────────────────────────────────────

#[test]
fn black_kingside_castling() {
    let mut game = game_after(&["e4", "e5", "Nf3", "Nf6", "Bc4", "Be7", "d3"]);
    let record = game.try_san("O-O").unwrap();
    assert!(record.is_castle);
    assert_eq!(record.from, Position::E8);
    assert_eq!(kind_at(&game, Position::G8), Some((PieceKind::King, Color::Black)));
    assert_eq!(kind_at(&game, Position::F8), Some((PieceKind::Rook, Color::Black)));
    assert!(game.board().is_empty_at(Position::H8));
    assert_eq!(game.board().king_position(Color::Black), Some(Position::G8));
}

#[test]
fn black_queenside_castling() {
    let mut game = game_after(&["d4", "d5", "Nc3", "Nc6", "Bf4", "Bf5", "Qd2", "Qd7", "e3"]);
    assert!(game.play_san("O-O-O"));
    assert_eq!(game.last_san(), Some("O-O-O"));
    assert_eq!(kind_at(&game, Position::C8), Some((PieceKind::King, Color::Black)));
    assert_eq!(kind_at(&game, Position::D8), Some((PieceKind::Rook, Color::Black)));
    assert!(game.board().is_empty_at(Position::A8));
    assert!(game.board().is_empty_at(Position::E8));
}

#[test]
fn black_en_passant_capture() {
    let mut game = game_after(&["a3", "e5", "a4", "e4", "d4"]);
    let record = game.try_move(Position::E4, Position::D3, None).unwrap();
    assert!(record.is_en_passant);
    assert_eq!(record.san, "exd3");
    assert_eq!(kind_at(&game, Position::D3), Some((PieceKind::Pawn, Color::Black)));
    assert!(game.board().is_empty_at(Position::D4));
    assert!(game.board().is_empty_at(Position::E4));
}

#[test]
fn black_en_passant_window_expires() {
    let mut game = game_after(&["a3", "e5", "a4", "e4", "d4", "h6", "a5"]);
    let before = game.board().clone();
    assert_eq!(
        game.try_move(Position::E4, Position::D3, None),
        Err(MoveError::Illegal {
            from: Position::E4,
            to: Position::D3
        })
    );
    assert_eq!(game.board(), &before);
    assert_eq!(game.side_to_move(), Color::Black);
}

// ── Check suffixes ────────────────────────────────────────────────────────────

#[test]
fn double_push_check_escaped_by_en_passant_is_not_mate() {
    let mut board = Board::empty();
    board.place_piece(Piece::new(PieceKind::King, Color::White, Position::A4), Position::A4);
    board.place_piece(Piece::new(PieceKind::Pawn, Color::White, Position::A5).moved(), Position::A5);
    board.place_piece(Piece::new(PieceKind::Pawn, Color::White, Position::C5).moved(), Position::C5);
    board.place_piece(Piece::new(PieceKind::King, Color::Black, Position::H8), Position::H8);
    board.place_piece(Piece::new(PieceKind::Pawn, Color::Black, Position::B7), Position::B7);
    board.place_piece(Piece::new(PieceKind::Rook, Color::Black, Position::B1), Position::B1);
    board.place_piece(Piece::new(PieceKind::Knight, Color::Black, Position::C2), Position::C2);
    board.place_piece(Piece::new(PieceKind::Knight, Color::Black, Position::C7), Position::C7);
    let mut game = Game::from_board(board, Color::Black);

    // Only capturing the checking pawn in passing gets the king out.
    let record = game.try_move(Position::B7, Position::B5, None).unwrap();
    assert_eq!(record.san, "b5+");
    assert_eq!(game.status(), Status::Check);
    let mut replies = game.legal_moves();
    replies.sort();
    assert_eq!(replies, vec![(Position::A5, Position::B6), (Position::C5, Position::B6)]);
}
