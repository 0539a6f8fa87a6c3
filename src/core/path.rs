//! Knight paths
//!
//! A Path is the ordered list of squares produced by a solve. It always holds
//! at least the start square, and at most all 64 squares.

use super::{SQUARE_COUNT, Square, VisitedSet};
use std::fmt;

/// An ordered sequence of squares, each one knight move from the previous
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    squares: Vec<Square>,
}

/// How a solve terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourOutcome {
    /// Every square visited exactly once
    Complete,
    /// No unvisited square was reachable from `at` after `visited` squares
    Stuck { at: Square, visited: usize },
}

/// Error type for sequences that break the path invariants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    Empty,
    TooLong(usize),
    Repeated { square: Square, position: usize },
    IllegalMove { from: Square, to: Square, position: usize },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Path must contain at least the start square"),
            Self::TooLong(len) => {
                write!(f, "Path has {len} squares, the board only has {SQUARE_COUNT}")
            }
            Self::Repeated { square, position } => {
                write!(f, "Square {square} is visited again at step {position}")
            }
            Self::IllegalMove { from, to, position } => {
                write!(f, "Step {position} from {from} to {to} is not a knight move")
            }
        }
    }
}

impl std::error::Error for PathError {}

impl Path {
    /// A path holding only its start square
    #[must_use]
    pub fn from_start(start: Square) -> Self {
        let mut squares = Vec::with_capacity(SQUARE_COUNT);
        squares.push(start);
        Self { squares }
    }

    /// Build a path from arbitrary squares, checking every invariant
    ///
    /// # Errors
    /// Returns `PathError` if the sequence is empty, too long, repeats a
    /// square or contains a non-knight step.
    ///
    /// # Examples
    /// ```
    /// use knights_tour::core::{Path, Square};
    ///
    /// let hop = vec![Square::new(0, 0).unwrap(), Square::new(1, 2).unwrap()];
    /// assert!(Path::from_squares(hop).is_ok());
    ///
    /// let slide = vec![Square::new(0, 0).unwrap(), Square::new(0, 1).unwrap()];
    /// assert!(Path::from_squares(slide).is_err());
    /// ```
    pub fn from_squares(squares: Vec<Square>) -> Result<Self, PathError> {
        let path = Self { squares };
        path.validate()?;
        Ok(path)
    }

    pub(crate) fn push(&mut self, square: Square) {
        self.squares.push(square);
    }

    /// Check pairwise distinctness, knight adjacency and length bounds
    ///
    /// # Errors
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), PathError> {
        if self.squares.is_empty() {
            return Err(PathError::Empty);
        }
        if self.squares.len() > SQUARE_COUNT {
            return Err(PathError::TooLong(self.squares.len()));
        }

        let mut seen = VisitedSet::new();
        for (position, &square) in self.squares.iter().enumerate() {
            if !seen.insert(square) {
                return Err(PathError::Repeated { square, position });
            }
        }

        for (position, (from, to)) in self.transitions().enumerate() {
            if !from.is_knight_move_to(to) {
                return Err(PathError::IllegalMove {
                    from,
                    to,
                    position: position + 1,
                });
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Always false for paths built through this module
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    #[must_use]
    pub fn start(&self) -> Square {
        self.squares[0]
    }

    #[must_use]
    pub fn last(&self) -> Square {
        self.squares[self.squares.len() - 1]
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ {
        self.squares.iter().copied()
    }

    /// Consecutive (from, to) pairs, in order
    pub fn transitions(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        self.squares.windows(2).map(|w| (w[0], w[1]))
    }

    /// Whether the path covers the whole board
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.squares.len() == SQUARE_COUNT
    }

    #[must_use]
    pub fn outcome(&self) -> TourOutcome {
        if self.is_complete() {
            TourOutcome::Complete
        } else {
            TourOutcome::Stuck {
                at: self.last(),
                visited: self.squares.len(),
            }
        }
    }

    /// Position of `square` in the path, if visited
    #[must_use]
    pub fn step_of(&self, square: Square) -> Option<usize> {
        self.squares.iter().position(|&s| s == square)
    }
}

impl fmt::Display for TourOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complete => write!(f, "complete tour"),
            Self::Stuck { at, visited } => {
                write!(f, "stuck at {at} after {visited}/{SQUARE_COUNT} squares")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn from_start_has_one_square() {
        let path = Path::from_start(sq(4, 4));
        assert_eq!(path.len(), 1);
        assert_eq!(path.start(), sq(4, 4));
        assert_eq!(path.last(), sq(4, 4));
        assert_eq!(path.transitions().count(), 0);
        assert!(path.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty() {
        assert_eq!(Path::from_squares(Vec::new()), Err(PathError::Empty));
    }

    #[test]
    fn validate_rejects_repeats() {
        let squares = vec![sq(0, 0), sq(1, 2), sq(0, 0)];
        assert_eq!(
            Path::from_squares(squares),
            Err(PathError::Repeated {
                square: sq(0, 0),
                position: 2
            })
        );
    }

    #[test]
    fn validate_rejects_non_knight_steps() {
        let squares = vec![sq(0, 0), sq(1, 2), sq(1, 3)];
        assert_eq!(
            Path::from_squares(squares),
            Err(PathError::IllegalMove {
                from: sq(1, 2),
                to: sq(1, 3),
                position: 2
            })
        );
    }

    #[test]
    fn outcome_reports_stuck_square() {
        let path = Path::from_squares(vec![sq(0, 0), sq(2, 1), sq(4, 0)]).unwrap();
        assert_eq!(
            path.outcome(),
            TourOutcome::Stuck {
                at: sq(4, 0),
                visited: 3
            }
        );
        assert!(!path.is_complete());
    }

    #[test]
    fn transitions_follow_order() {
        let path = Path::from_squares(vec![sq(0, 0), sq(2, 1), sq(4, 0)]).unwrap();
        let pairs: Vec<_> = path.transitions().collect();
        assert_eq!(pairs, vec![(sq(0, 0), sq(2, 1)), (sq(2, 1), sq(4, 0))]);
        assert_eq!(path.step_of(sq(2, 1)), Some(1));
        assert_eq!(path.step_of(sq(7, 7)), None);
    }

    #[test]
    fn outcome_display() {
        let stuck = TourOutcome::Stuck {
            at: sq(5, 3),
            visited: 60,
        };
        assert_eq!(stuck.to_string(), "stuck at (5, 3) after 60/64 squares");
        assert_eq!(TourOutcome::Complete.to_string(), "complete tour");
    }
}
