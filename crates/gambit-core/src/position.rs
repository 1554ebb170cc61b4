//! Board coordinates as (row, col) pairs.
//!
//! Row 0 is Black's back rank (rank 8) and row 7 is White's (rank 1).
//! Columns run a–h from 0 to 7.

use std::fmt;
use std::str::FromStr;

use crate::error::ParsePositionError;

/// A board coordinate. May lie off the board; see [`Position::is_valid`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: i8,
    col: i8,
}

impl Position {
    /// Create a position from a row and a column. No range check is made.
    #[inline]
    pub const fn new(row: i8, col: i8) -> Position {
        Position { row, col }
    }

    /// Return the row (0 = rank 8, 7 = rank 1).
    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    /// Return the column (0 = file a, 7 = file h).
    #[inline]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// Return `true` if both coordinates lie in `0..8`.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.row >= 0 && self.row < 8 && self.col >= 0 && self.col < 8
    }

    /// Return the position shifted by the given row and column deltas.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Position {
        Position::new(self.row + dr, self.col + dc)
    }

    /// File letter, `'a'..='h'`.
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col as u8) as char
    }

    /// Rank number as displayed, `1..=8`.
    #[inline]
    pub const fn rank(self) -> u8 {
        (8 - self.row) as u8
    }

    /// Rank digit, `'1'..='8'`.
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'0' + self.rank()) as char
    }

    /// Return `true` if `(row + col)` is even.
    #[inline]
    pub const fn is_light(self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// Parse an algebraic square such as `"e4"`.
    pub fn from_algebraic(s: &str) -> Option<Position> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let (file, rank) = (bytes[0].to_ascii_lowercase(), bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Some(Position::new(8 - (rank - b'0') as i8, (file - b'a') as i8))
    }

    /// Iterate over all 64 on-board positions, row by row from a8 to h1.
    pub fn all() -> impl Iterator<Item = Position> {
        (0i8..8).flat_map(|row| (0i8..8).map(move |col| Position::new(row, col)))
    }

    // Named squares
    pub const A8: Position = Position::new(0, 0);
    pub const B8: Position = Position::new(0, 1);
    pub const C8: Position = Position::new(0, 2);
    pub const D8: Position = Position::new(0, 3);
    pub const E8: Position = Position::new(0, 4);
    pub const F8: Position = Position::new(0, 5);
    pub const G8: Position = Position::new(0, 6);
    pub const H8: Position = Position::new(0, 7);
    pub const A7: Position = Position::new(1, 0);
    pub const B7: Position = Position::new(1, 1);
    pub const C7: Position = Position::new(1, 2);
    pub const D7: Position = Position::new(1, 3);
    pub const E7: Position = Position::new(1, 4);
    pub const F7: Position = Position::new(1, 5);
    pub const G7: Position = Position::new(1, 6);
    pub const H7: Position = Position::new(1, 7);
    pub const A6: Position = Position::new(2, 0);
    pub const B6: Position = Position::new(2, 1);
    pub const C6: Position = Position::new(2, 2);
    pub const D6: Position = Position::new(2, 3);
    pub const E6: Position = Position::new(2, 4);
    pub const F6: Position = Position::new(2, 5);
    pub const G6: Position = Position::new(2, 6);
    pub const H6: Position = Position::new(2, 7);
    pub const A5: Position = Position::new(3, 0);
    pub const B5: Position = Position::new(3, 1);
    pub const C5: Position = Position::new(3, 2);
    pub const D5: Position = Position::new(3, 3);
    pub const E5: Position = Position::new(3, 4);
    pub const F5: Position = Position::new(3, 5);
    pub const G5: Position = Position::new(3, 6);
    pub const H5: Position = Position::new(3, 7);
    pub const A4: Position = Position::new(4, 0);
    pub const B4: Position = Position::new(4, 1);
    pub const C4: Position = Position::new(4, 2);
    pub const D4: Position = Position::new(4, 3);
    pub const E4: Position = Position::new(4, 4);
    pub const F4: Position = Position::new(4, 5);
    pub const G4: Position = Position::new(4, 6);
    pub const H4: Position = Position::new(4, 7);
    pub const A3: Position = Position::new(5, 0);
    pub const B3: Position = Position::new(5, 1);
    pub const C3: Position = Position::new(5, 2);
    pub const D3: Position = Position::new(5, 3);
    pub const E3: Position = Position::new(5, 4);
    pub const F3: Position = Position::new(5, 5);
    pub const G3: Position = Position::new(5, 6);
    pub const H3: Position = Position::new(5, 7);
    pub const A2: Position = Position::new(6, 0);
    pub const B2: Position = Position::new(6, 1);
    pub const C2: Position = Position::new(6, 2);
    pub const D2: Position = Position::new(6, 3);
    pub const E2: Position = Position::new(6, 4);
    pub const F2: Position = Position::new(6, 5);
    pub const G2: Position = Position::new(6, 6);
    pub const H2: Position = Position::new(6, 7);
    pub const A1: Position = Position::new(7, 0);
    pub const B1: Position = Position::new(7, 1);
    pub const C1: Position = Position::new(7, 2);
    pub const D1: Position = Position::new(7, 3);
    pub const E1: Position = Position::new(7, 4);
    pub const F1: Position = Position::new(7, 5);
    pub const G1: Position = Position::new(7, 6);
    pub const H1: Position = Position::new(7, 7);
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}{}", self.file_char(), self.rank())
        } else {
            write!(f, "?")
        }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "Position({self})")
        } else {
            write!(f, "Position({}, {})", self.row, self.col)
        }
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Position, ParsePositionError> {
        Position::from_algebraic(s).ok_or_else(|| ParsePositionError {
            input: s.to_string(),
        })
    }
}
