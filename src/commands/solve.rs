//! Tour solving command
//!
//! Solves from a single start square and returns the path with timing.

use crate::core::{Path, SQUARE_COUNT, Square, TourOutcome};
use crate::solver::{StepRecord, TourSolver};
use rand::Rng;
use std::time::{Duration, Instant};

/// Configuration for solving one tour
pub struct SolveConfig {
    pub start: Square,
    /// Record the candidate ranking at every step
    pub trace: bool,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(start: Square) -> Self {
        Self {
            start,
            trace: false,
        }
    }
}

/// Result of solving one tour
pub struct SolveResult {
    pub start: Square,
    pub path: Path,
    pub outcome: TourOutcome,
    pub steps: Option<Vec<StepRecord>>,
    pub duration: Duration,
}

/// Solve a tour from the configured start square
pub fn solve_tour(config: &SolveConfig, solver: &TourSolver) -> SolveResult {
    let started = Instant::now();

    let (path, steps) = if config.trace {
        let trace = solver.solve_traced(config.start);
        (trace.path, Some(trace.steps))
    } else {
        (solver.solve(config.start), None)
    };

    SolveResult {
        start: config.start,
        outcome: path.outcome(),
        path,
        steps,
        duration: started.elapsed(),
    }
}

/// Pick a start square uniformly at random
pub fn random_start<R: Rng + ?Sized>(rng: &mut R) -> Square {
    Square::from_index(rng.random_range(0..SQUARE_COUNT)).unwrap_or_default()
}

/// Parse a start square argument, or choose one at random when absent
///
/// # Errors
///
/// Returns an error if the text is not a valid on-board square.
pub fn resolve_start(arg: Option<&str>) -> Result<Square, String> {
    match arg {
        Some(text) => text
            .parse::<Square>()
            .map_err(|e| format!("Invalid start square: {e}")),
        None => Ok(random_start(&mut rand::rng())),
    }
}
