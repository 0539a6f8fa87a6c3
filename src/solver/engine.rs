//! Main tour solver interface

use super::candidates::{Candidate, ranked_candidates};
use crate::core::{Path, SQUARE_COUNT, Square, SquareError, TourOutcome, VisitedSet};
use log::debug;

/// Warnsdorff tour solver
///
/// Holds no state between calls: every solve owns a fresh visited set and
/// path, so one solver can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct TourSolver;

/// One greedy step of a traced solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub from: Square,
    /// Candidates in the order they were ranked; the first one is taken
    pub candidates: Vec<Candidate>,
}

impl StepRecord {
    #[must_use]
    pub fn chosen(&self) -> Option<&Candidate> {
        self.candidates.first()
    }
}

/// A path together with the ranking considered at every step
#[derive(Debug, Clone)]
pub struct SolveTrace {
    pub path: Path,
    /// One record per move made, plus a final empty record if the walk got stuck
    pub steps: Vec<StepRecord>,
}

impl TourSolver {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Build a knight's path from `start` using Warnsdorff's rule
    ///
    /// Stops early, returning a path shorter than 64, when no unvisited square
    /// is reachable. That is a normal outcome, not an error.
    ///
    /// # Examples
    /// ```
    /// use knights_tour::core::Square;
    /// use knights_tour::solver::TourSolver;
    ///
    /// let path = TourSolver::new().solve(Square::new(0, 0).unwrap());
    /// assert_eq!(path.len(), 64);
    /// assert_eq!(path.get(1), Some(Square::new(1, 2).unwrap()));
    /// ```
    #[must_use]
    pub fn solve(&self, start: Square) -> Path {
        walk(start, |_, _| {})
    }

    /// Validated entry point for raw coordinates
    ///
    /// # Errors
    /// Returns `SquareError::OutOfBounds` if either coordinate is off the board.
    pub fn solve_at(&self, row: i64, col: i64) -> Result<Path, SquareError> {
        let start = Square::from_coords(row, col)?;
        Ok(self.solve(start))
    }

    /// Same walk as [`solve`](Self::solve), recording each step's ranking
    #[must_use]
    pub fn solve_traced(&self, start: Square) -> SolveTrace {
        let mut steps = Vec::new();
        let path = walk(start, |from, candidates| {
            steps.push(StepRecord {
                from,
                candidates: candidates.to_vec(),
            });
        });
        SolveTrace { path, steps }
    }
}

/// Greedy non-backtracking walk; `on_step` sees every ranking before the pick
fn walk<F>(start: Square, mut on_step: F) -> Path
where
    F: FnMut(Square, &[Candidate]),
{
    let mut visited = VisitedSet::new();
    visited.insert(start);
    let mut path = Path::from_start(start);
    let mut current = start;

    for _ in 1..SQUARE_COUNT {
        let candidates = ranked_candidates(current, visited);
        on_step(current, &candidates);

        let Some(next) = candidates.first() else {
            break;
        };

        current = next.square;
        visited.insert(current);
        path.push(current);
    }

    match path.outcome() {
        TourOutcome::Complete => debug!("Tour from {start} covered the board"),
        outcome @ TourOutcome::Stuck { .. } => debug!("Tour from {start}: {outcome}"),
    }

    path
}
