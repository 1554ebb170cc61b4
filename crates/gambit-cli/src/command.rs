//! Session command parsing.

use gambit_core::{PieceKind, Position};

use crate::error::CliError;

/// A display option adjustable via `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// Print the board after each accepted move.
    Board(bool),
    /// Print file and rank labels around the board.
    Coords(bool),
}

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `e2e4`, `e7e8n`, or `move e2e4` -- a coordinate move.
    Move {
        from: Position,
        to: Position,
        promotion: Option<PieceKind>,
    },
    /// `san Nf3` or a bare `Nf3` -- a move in algebraic notation.
    San(String),
    /// `moves e2` -- list legal destinations from a square.
    Moves(Position),
    /// `board` -- print the board.
    Board,
    /// `history` -- print the moves played so far.
    History,
    /// `status` -- print the game status.
    Status,
    /// `undo` -- take back the last move.
    Undo,
    /// `reset` or `new` -- start a new game.
    Reset,
    /// `help` -- list commands.
    Help,
    /// `set <option> on|off` -- change a display option.
    Set(SessionOption),
    /// `quit` or `exit` -- end the session.
    Quit,
    /// A blank line.
    Empty,
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&word) = tokens.first() else {
        return Ok(Command::Empty);
    };

    match word {
        "board" => Ok(Command::Board),
        "history" => Ok(Command::History),
        "status" => Ok(Command::Status),
        "undo" => Ok(Command::Undo),
        "reset" | "new" => Ok(Command::Reset),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "move" => {
            let arg = argument(&tokens, word)?;
            parse_coordinate_move(arg).ok_or_else(|| CliError::InvalidMove {
                input: arg.to_string(),
            })
        }
        "san" => Ok(Command::San(argument(&tokens, word)?.to_string())),
        "moves" => {
            let arg = argument(&tokens, word)?;
            let square = arg.parse::<Position>().map_err(|_| CliError::InvalidSquare {
                input: arg.to_string(),
            })?;
            Ok(Command::Moves(square))
        }
        "set" => parse_set(&tokens[1..]),
        _ => {
            if let Some(cmd) = parse_coordinate_move(word) {
                Ok(cmd)
            } else if tokens.len() == 1 && looks_like_san(word) {
                Ok(Command::San(word.to_string()))
            } else {
                Err(CliError::UnknownCommand {
                    command: word.to_string(),
                })
            }
        }
    }
}

fn argument<'a>(tokens: &[&'a str], command: &str) -> Result<&'a str, CliError> {
    tokens.get(1).copied().ok_or_else(|| CliError::MissingArgument {
        command: command.to_string(),
    })
}

/// Parse `<from><to>[promo]`, e.g. `e2e4` or `e7e8n`.
fn parse_coordinate_move(s: &str) -> Option<Command> {
    if !s.is_ascii() || !(4..=5).contains(&s.len()) || !s.starts_with(|c: char| c.is_ascii_lowercase()) {
        return None;
    }
    let from = Position::from_algebraic(&s[0..2])?;
    let to = Position::from_algebraic(&s[2..4])?;
    let promotion = match s[4..].chars().next() {
        Some(c) => Some(PieceKind::from_char(c).filter(|kind| kind.is_promotion_target())?),
        None => None,
    };
    Some(Command::Move { from, to, promotion })
}

fn parse_set(args: &[&str]) -> Result<Command, CliError> {
    let [name, value] = args else {
        return Err(CliError::MissingArgument {
            command: "set".to_string(),
        });
    };
    let on = match *value {
        "on" => true,
        "off" => false,
        _ => {
            return Err(CliError::InvalidValue {
                name: name.to_string(),
                value: value.to_string(),
            });
        }
    };
    match *name {
        "board" => Ok(Command::Set(SessionOption::Board(on))),
        "coords" => Ok(Command::Set(SessionOption::Coords(on))),
        _ => Err(CliError::UnknownOption {
            name: name.to_string(),
        }),
    }
}

fn looks_like_san(word: &str) -> bool {
    word.chars()
        .next()
        .is_some_and(|c| matches!(c, 'K' | 'Q' | 'R' | 'B' | 'N' | 'O' | '0' | 'a'..='h'))
}
