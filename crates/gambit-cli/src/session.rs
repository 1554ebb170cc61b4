//! Line-oriented play session over stdin and stdout.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use gambit_core::{Color, Game, MoveError, MoveRecord, Position, Status};

use crate::command::{Command, SessionOption, parse_command};
use crate::error::CliError;

const HELP: &str = "\
commands:
  e2e4, e7e8n, move e2e4   play a coordinate move (optional promotion letter q r b n)
  Nf3, O-O, san exd5       play a move in algebraic notation
  moves <square>           list legal destinations from a square
  board                    print the board
  history                  print the moves played so far
  status                   print the game status
  undo                     take back the last move
  reset, new               start a new game
  set board|coords on|off  change display options
  help                     show this text
  quit, exit               leave";

/// Display knobs adjustable via `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Print the board after each accepted move.
    pub show_board: bool,
    /// Print file and rank labels around the board.
    pub coords: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            show_board: true,
            coords: true,
        }
    }
}

/// An interactive game session.
#[derive(Debug, Default)]
pub struct Session {
    game: Game,
    config: SessionConfig,
}

impl Session {
    /// Create a session with a fresh game and default display options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Return the current display options.
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Run the session on stdin and stdout until `quit` or end of input.
    pub fn run(&mut self) -> Result<(), CliError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the session on the given input and output.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<(), CliError> {
        info!("session started");
        self.print_board(&mut out)?;
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");
            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.execute(cmd, &mut out)?,
                Err(e) => {
                    warn!(error = %e, "command parse error");
                    writeln!(out, "error: {e}")?;
                }
            }
            out.flush()?;
        }
        info!(moves = self.game.history().len(), "session ended");
        Ok(())
    }

    /// Apply one parsed command, writing its output.
    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<()> {
        match cmd {
            Command::Move { from, to, promotion } => {
                let result = self.game.try_move(from, to, promotion);
                self.report_move(result, out)
            }
            Command::San(san) => {
                let result = self.game.try_san(&san);
                self.report_move(result, out)
            }
            Command::Moves(square) => self.print_moves(square, out),
            Command::Board => self.print_board(out),
            Command::History => self.print_history(out),
            Command::Status => writeln!(out, "{}", self.game.state().status_message()),
            Command::Undo => self.undo(out),
            Command::Reset => {
                self.game.reset();
                writeln!(out, "new game")?;
                self.print_board(out)
            }
            Command::Help => writeln!(out, "{HELP}"),
            Command::Set(option) => self.apply_option(option, out),
            Command::Quit | Command::Empty => Ok(()),
        }
    }

    fn report_move<W: Write>(&self, result: Result<MoveRecord, MoveError>, out: &mut W) -> io::Result<()> {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "move rejected");
                return writeln!(out, "error: {e}");
            }
        };
        let number = self.game.state().move_count().div_ceil(2);
        let dots = if self.game.side_to_move() == Color::White { "..." } else { "." };
        writeln!(out, "{number}{dots} {}", record.san)?;
        if self.config.show_board {
            self.print_board(out)?;
        }
        if self.game.status() != Status::Playing {
            writeln!(out, "{}", self.game.state().status_message())?;
        }
        Ok(())
    }

    fn undo<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let Some(san) = self.game.last_san().map(str::to_string) else {
            return writeln!(out, "nothing to undo");
        };
        self.game.undo_last_move();
        writeln!(out, "took back {san}")
    }

    fn print_board<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let board = self.game.board();
        if self.config.coords {
            writeln!(out, "{}", board.pretty())
        } else {
            writeln!(out, "{}", board.pretty_plain())
        }
    }

    fn print_history<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let lines = self.game.formatted_history();
        if lines.is_empty() {
            return writeln!(out, "no moves yet");
        }
        for line in lines {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    fn print_moves<W: Write>(&self, square: Position, out: &mut W) -> io::Result<()> {
        let mut targets = self.game.legal_moves_from(square);
        if targets.is_empty() {
            return writeln!(out, "{square}: no legal moves");
        }
        targets.sort_by_key(|p| (p.col(), p.rank()));
        let list: Vec<String> = targets.iter().map(Position::to_string).collect();
        writeln!(out, "{square}: {}", list.join(" "))
    }

    fn apply_option<W: Write>(&mut self, option: SessionOption, out: &mut W) -> io::Result<()> {
        let (name, on) = match option {
            SessionOption::Board(on) => {
                self.config.show_board = on;
                ("board", on)
            }
            SessionOption::Coords(on) => {
                self.config.coords = on;
                ("coords", on)
            }
        };
        debug!(option = name, on, "display option changed");
        writeln!(out, "{name} {}", if on { "on" } else { "off" })
    }
}
