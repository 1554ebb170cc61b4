//! The game façade: validates and applies moves, keeps SAN history and undo snapshots.

use tracing::{debug, info};

use crate::board::Board;
use crate::color::Color;
use crate::error::MoveError;
use crate::game_state::{GameState, Status};
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::san::{self, SanFlags};
use crate::validator::{classify, is_castling_move, is_en_passant_move, is_valid_move, legal_moves_from};

/// What an accepted move did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// Square the piece left.
    pub from: Position,
    /// Square the piece landed on. For castling, the king's destination.
    pub to: Position,
    /// Kind of the piece that moved (the pawn, for promotions).
    pub piece: PieceKind,
    /// The move in SAN, with any check or mate suffix.
    pub san: String,
    /// An enemy piece was removed, including by en passant.
    pub is_capture: bool,
    /// The king castled; the rook moved too.
    pub is_castle: bool,
    /// A pawn captured in passing.
    pub is_en_passant: bool,
    /// Kind the pawn became, if the move promoted.
    pub promotion: Option<PieceKind>,
}

/// Position and turn bookkeeping as they were before a move.
#[derive(Debug, Clone)]
struct Snapshot {
    board: Board,
    state: GameState,
}

/// A game of chess from one position, with full undo.
///
/// `make_move`, `undo_last_move`, and `reset` must not be interleaved from
/// several threads; clone the game to analyse it elsewhere.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    state: GameState,
    history: Vec<String>,
    snapshots: Vec<Snapshot>,
}

impl Game {
    /// Start a game from the standard position.
    pub fn new() -> Game {
        Game::from_board(Board::starting_position(), Color::White)
    }

    /// Start a game from an arbitrary placement with `side_to_move` on move.
    pub fn from_board(board: Board, side_to_move: Color) -> Game {
        let mut state = GameState::with_side_to_move(side_to_move);
        state.set_status(classify(&board, side_to_move, &state));
        Game {
            board,
            state,
            history: Vec::new(),
            snapshots: Vec::new(),
        }
    }

    /// Return to the standard starting position and forget all history.
    pub fn reset(&mut self) {
        *self = Game::new();
        info!("game reset");
    }

    /// Return the board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return side to move, status, move count, and last move.
    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Return the status for the side to move.
    #[inline]
    pub fn status(&self) -> Status {
        self.state.status()
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move()
    }

    /// Origin and destination of the most recent move.
    #[inline]
    pub fn last_move(&self) -> Option<(Position, Position)> {
        self.state.last_move()
    }

    /// SAN of every move played, oldest first.
    #[inline]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// SAN of the most recent move.
    #[inline]
    pub fn last_san(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    /// History paired by move number, e.g. `"1. e4    e5"`.
    ///
    /// Numbering assumes White made the first move.
    pub fn formatted_history(&self) -> Vec<String> {
        self.history
            .chunks(2)
            .enumerate()
            .map(|(i, pair)| match pair {
                [white, black] => format!("{}. {white:<6}{black}", i + 1),
                [white] => format!("{}. {white}", i + 1),
                _ => String::new(),
            })
            .collect()
    }

    /// Legal destinations from `from` for the side to move.
    pub fn legal_moves_from(&self, from: Position) -> Vec<Position> {
        legal_moves_from(&self.board, from, self.state.side_to_move(), &self.state)
    }

    /// Every legal `(from, to)` pair for the side to move.
    pub fn legal_moves(&self) -> Vec<(Position, Position)> {
        let side = self.state.side_to_move();
        self.board
            .pieces(side)
            .flat_map(|p| {
                let from = p.position();
                legal_moves_from(&self.board, from, side, &self.state)
                    .into_iter()
                    .map(move |to| (from, to))
            })
            .collect()
    }

    /// Attempt a move; `true` if it was accepted.
    ///
    /// A pawn reaching its last rank becomes `promotion`, or a queen when
    /// that is `None` or not a valid promotion kind.
    pub fn make_move(&mut self, from: Position, to: Position, promotion: Option<PieceKind>) -> bool {
        self.try_move(from, to, promotion).is_ok()
    }

    /// Attempt a move, reporting why it was rejected. A rejected move changes nothing.
    pub fn try_move(
        &mut self,
        from: Position,
        to: Position,
        promotion: Option<PieceKind>,
    ) -> Result<MoveRecord, MoveError> {
        let mover = self.state.side_to_move();
        let result = self.check_request(from, to, mover);
        if let Err(ref err) = result {
            debug!(%err, "move rejected");
        }
        result?;

        // Validated above, so the source holds a piece of `mover`.
        let Some(piece) = self.board.piece_at(from).copied() else {
            return Err(MoveError::EmptySquare { position: from });
        };

        let well_formed = cfg!(debug_assertions) && self.board.validate().is_ok();
        let pre_board = self.board.clone();
        let pre_state = self.state.clone();

        let is_castle = is_castling_move(&pre_board, from, to);
        let is_en_passant = is_en_passant_move(&pre_board, from, to, &pre_state);
        let will_promote = piece.kind() == PieceKind::Pawn && to.row() == mover.promotion_row();
        let is_capture = is_en_passant
            || pre_board
                .piece_at(to)
                .is_some_and(|target| piece.is_opponent(target));

        match pre_state.last_move_to() {
            _ if is_castle => self.board.perform_castling(from, to),
            Some(captured) if is_en_passant => self.board.perform_en_passant(from, to, captured),
            _ => self.board.move_piece(from, to),
        }

        let promotion = will_promote.then(|| PieceKind::promotion_or_queen(promotion));
        if let Some(kind) = promotion {
            self.board.promote_pawn(to, Some(kind));
        }

        self.state.set_last_move(from, to);
        self.state.next_turn();
        let status = classify(&self.board, self.state.side_to_move(), &self.state);
        self.state.set_status(status);

        let flags = SanFlags {
            is_castle,
            is_en_passant,
            is_capture,
            promotion,
            gives_check: matches!(status, Status::Check | Status::Checkmate),
            gives_mate: status == Status::Checkmate,
        };
        let san = san::render(&pre_board, &pre_state, &piece, from, to, flags);

        self.snapshots.push(Snapshot {
            board: pre_board,
            state: pre_state,
        });
        self.history.push(san.clone());

        debug_assert!(
            !well_formed || self.board.validate().is_ok(),
            "board invariant broken after {san}"
        );
        debug!(%san, %from, %to, "move played");
        if status.is_terminal() {
            info!(%status, message = %self.state.status_message(), "game over");
        }

        Ok(MoveRecord {
            from,
            to,
            piece: piece.kind(),
            san,
            is_capture,
            is_castle,
            is_en_passant,
            promotion,
        })
    }

    fn check_request(&self, from: Position, to: Position, mover: Color) -> Result<(), MoveError> {
        for position in [from, to] {
            if !position.is_valid() {
                return Err(MoveError::OffBoard { position });
            }
        }
        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveError::EmptySquare { position: from })?;
        if piece.color() != mover {
            return Err(MoveError::WrongColor {
                position: from,
                expected: mover,
            });
        }
        if !is_valid_move(&self.board, from, to, mover, &self.state) {
            return Err(MoveError::Illegal { from, to });
        }
        Ok(())
    }

    /// Return `true` if there is a move to take back.
    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty()
    }

    /// Take back the last move. `false` if nothing has been played.
    pub fn undo_last_move(&mut self) -> bool {
        let Some(snapshot) = self.snapshots.pop() else {
            return false;
        };
        self.board = snapshot.board;
        self.state = snapshot.state;
        let undone = self.history.pop();
        let status = classify(&self.board, self.state.side_to_move(), &self.state);
        self.state.set_status(status);
        debug!(san = ?undone, "move undone");
        true
    }

    /// Resolve a SAN string against the legal moves of the side to move.
    ///
    /// Check and mate markers and `!`/`?` annotations are ignored; `0-0`
    /// is read as `O-O`.
    pub fn find_san(&self, san: &str) -> Option<(Position, Position, Option<PieceKind>)> {
        let wanted = normalize_san(san);
        if wanted.is_empty() {
            return None;
        }
        let side = self.state.side_to_move();
        for (from, to) in self.legal_moves() {
            let promotes = self
                .board
                .piece_at(from)
                .is_some_and(|p| p.kind() == PieceKind::Pawn && to.row() == side.promotion_row());
            let choices: Vec<Option<PieceKind>> = if promotes {
                PieceKind::PROMOTIONS.iter().copied().map(Some).collect()
            } else {
                vec![None]
            };
            for choice in choices {
                let mut probe = Game {
                    board: self.board.clone(),
                    state: self.state.clone(),
                    history: Vec::new(),
                    snapshots: Vec::new(),
                };
                if let Ok(record) = probe.try_move(from, to, choice)
                    && normalize_san(&record.san) == wanted
                {
                    return Some((from, to, choice));
                }
            }
        }
        None
    }

    /// Play the move written in SAN.
    pub fn try_san(&mut self, san: &str) -> Result<MoveRecord, MoveError> {
        let (from, to, promotion) = self.find_san(san).ok_or_else(|| MoveError::UnknownSan {
            san: san.to_string(),
        })?;
        self.try_move(from, to, promotion)
    }

    /// Play the move written in SAN; `true` if it was accepted.
    pub fn play_san(&mut self, san: &str) -> bool {
        self.try_san(san).is_ok()
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

fn normalize_san(san: &str) -> String {
    san.trim()
        .trim_end_matches(['+', '#', '!', '?'])
        .replace('0', "O")
}
