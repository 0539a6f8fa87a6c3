//! Board square representation
//!
//! A Square is a (row, col) pair on the 8×8 board. Row 0 is the top rank as
//! drawn on screen and col 0 the left file, so `(0, 0)` is `a8` in algebraic
//! notation and `(7, 7)` is `h1`.

use std::fmt;
use std::str::FromStr;

/// Number of rows and columns on the board
pub const BOARD_SIZE: u8 = 8;

/// Number of squares on the board
pub const SQUARE_COUNT: usize = 64;

/// The 8 knight offsets as (Δrow, Δcol)
///
/// The order matters: Warnsdorff ties are broken by the position of the
/// offset that produced each candidate in this array.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// A square on the 8×8 board
///
/// Can only be constructed in range, so every `Square` value is on the board.
///
/// `Default` is the top-left corner, a8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

/// Error type for invalid squares
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    OutOfBounds { row: i64, col: i64 },
    Malformed(String),
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { row, col } => {
                write!(
                    f,
                    "Square ({row}, {col}) is off the board, row and col must be in 0..{BOARD_SIZE}"
                )
            }
            Self::Malformed(text) => write!(
                f,
                "Cannot parse square '{text}', expected 'row,col' (e.g. 3,3) or algebraic (e.g. d5)"
            ),
        }
    }
}

impl std::error::Error for SquareError {}

impl Square {
    /// Create a square from a row and column
    ///
    /// # Errors
    /// Returns `SquareError::OutOfBounds` if row or col is 8 or more.
    ///
    /// # Examples
    /// ```
    /// use knights_tour::core::Square;
    ///
    /// let sq = Square::new(3, 3).unwrap();
    /// assert_eq!((sq.row(), sq.col()), (3, 3));
    ///
    /// assert!(Square::new(8, 0).is_err());
    /// ```
    pub const fn new(row: u8, col: u8) -> Result<Self, SquareError> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self { row, col })
        } else {
            Err(SquareError::OutOfBounds {
                row: row as i64,
                col: col as i64,
            })
        }
    }

    /// Create a square from signed coordinates, rejecting anything off the board
    ///
    /// # Errors
    /// Returns `SquareError::OutOfBounds` for negative or too large coordinates.
    pub fn from_coords(row: i64, col: i64) -> Result<Self, SquareError> {
        match (u8::try_from(row), u8::try_from(col)) {
            (Ok(r), Ok(c)) => Self::new(r, c).map_err(|_| SquareError::OutOfBounds { row, col }),
            _ => Err(SquareError::OutOfBounds { row, col }),
        }
    }

    /// Square for a row-major index in 0..64
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < SQUARE_COUNT {
            Some(Self {
                row: (index / BOARD_SIZE as usize) as u8,
                col: (index % BOARD_SIZE as usize) as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Row-major index (0-63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// Whether this is a light square (the top-left square is light)
    #[inline]
    #[must_use]
    pub const fn is_light(self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// Apply an offset, returning `None` if the result leaves the board
    #[must_use]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Self::new(row, col).ok()
    }

    /// All on-board knight destinations, in `KNIGHT_OFFSETS` order
    ///
    /// # Examples
    /// ```
    /// use knights_tour::core::Square;
    ///
    /// let corner = Square::new(0, 0).unwrap();
    /// let moves: Vec<_> = corner.knight_moves().collect();
    /// assert_eq!(moves, vec![Square::new(1, 2).unwrap(), Square::new(2, 1).unwrap()]);
    /// ```
    pub fn knight_moves(self) -> impl Iterator<Item = Self> {
        KNIGHT_OFFSETS
            .iter()
            .filter_map(move |&(d_row, d_col)| self.offset(d_row, d_col))
    }

    /// Whether `other` is exactly one knight move away
    #[must_use]
    pub fn is_knight_move_to(self, other: Self) -> bool {
        let d_row = i16::from(other.row) - i16::from(self.row);
        let d_col = i16::from(other.col) - i16::from(self.col);
        KNIGHT_OFFSETS
            .iter()
            .any(|&(r, c)| i16::from(r) == d_row && i16::from(c) == d_col)
    }

    /// All 64 squares in row-major order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..SQUARE_COUNT).filter_map(Self::from_index)
    }

    /// Algebraic name, e.g. `a8` for `(0, 0)`
    #[must_use]
    pub fn algebraic(self) -> String {
        let file = char::from(b'a' + self.col);
        let rank = BOARD_SIZE - self.row;
        format!("{file}{rank}")
    }

    fn parse_algebraic(text: &str) -> Option<Self> {
        let bytes = text.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Self::new(BOARD_SIZE - (rank - b'0'), file - b'a').ok()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parse `row,col`, `row col`, `(row, col)` or algebraic notation
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(square) = Self::parse_algebraic(trimmed) {
            return Ok(square);
        }

        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);
        let parts: Vec<&str> = inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        match parts.as_slice() {
            [row, col] => {
                let row: i64 = row
                    .parse()
                    .map_err(|_| SquareError::Malformed(trimmed.to_string()))?;
                let col: i64 = col
                    .parse()
                    .map_err(|_| SquareError::Malformed(trimmed.to_string()))?;
                Self::from_coords(row, col)
            }
            _ => Err(SquareError::Malformed(trimmed.to_string())),
        }
    }
}
