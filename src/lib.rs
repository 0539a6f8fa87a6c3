//! Knight's Tour
//!
//! Builds knight's tours on an 8×8 board with Warnsdorff's rule and animates
//! them in the terminal.
//!
//! # Quick Start
//!
//! ```rust
//! use knights_tour::core::Square;
//! use knights_tour::solver::TourSolver;
//!
//! let solver = TourSolver::new();
//! let path = solver.solve(Square::new(0, 0).unwrap());
//!
//! assert!(path.is_complete());
//! for (from, to) in path.transitions() {
//!     assert!(from.is_knight_move_to(to));
//! }
//! ```

// Core domain types
pub mod core;

// Tour construction
pub mod solver;

// Playback state for the presenter
pub mod animation;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
