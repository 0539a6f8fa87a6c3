//! Move ranking command
//!
//! Shows how Warnsdorff's rule orders the candidates at a given point of a tour.

use crate::core::Square;
use crate::solver::{Candidate, TourSolver};

/// Result of ranking the moves at one step
#[derive(Debug, Clone)]
pub struct RankResult {
    pub start: Square,
    /// Moves already played before this ranking
    pub after: usize,
    pub from: Square,
    pub candidates: Vec<Candidate>,
}

impl RankResult {
    /// The square the heuristic picks, if any move exists
    #[must_use]
    pub fn chosen(&self) -> Option<Square> {
        self.candidates.first().map(|c| c.square)
    }

    /// Candidates sharing the lowest onward-degree
    #[must_use]
    pub fn tied(&self) -> usize {
        self.candidates.first().map_or(0, |best| {
            self.candidates
                .iter()
                .take_while(|c| c.onward_degree == best.onward_degree)
                .count()
        })
    }
}

/// Rank the candidates after `after` moves of the tour from `start`
///
/// # Errors
///
/// Returns an error if the tour ends before `after` moves are played.
pub fn rank_moves(start: Square, after: usize, solver: &TourSolver) -> Result<RankResult, String> {
    let trace = solver.solve_traced(start);

    let step = trace.steps.get(after).ok_or_else(|| {
        format!(
            "Tour from {} ends after {} moves, cannot rank move {}",
            start.algebraic(),
            trace.path.len() - 1,
            after + 1
        )
    })?;

    Ok(RankResult {
        start,
        after,
        from: step.from,
        candidates: step.candidates.clone(),
    })
}
