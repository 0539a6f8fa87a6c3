//! Core domain types for the Knight's Tour
//!
//! This module contains the fundamental board types with zero external dependencies.
//! All types here are pure, testable, and uphold the board invariants by construction.

mod path;
mod square;
mod visited;

pub use path::{Path, PathError, TourOutcome};
pub use square::{BOARD_SIZE, KNIGHT_OFFSETS, SQUARE_COUNT, Square, SquareError};
pub use visited::VisitedSet;
