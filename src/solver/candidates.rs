//! Warnsdorff move ranking
//!
//! Generates the legal next squares from a position and orders them by
//! onward-degree, fewest first.

use crate::core::{Square, VisitedSet};

/// A legal next square annotated with its onward-degree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub square: Square,
    /// Unvisited squares reachable from `square`, counted before it is visited
    pub onward_degree: u8,
}

/// Count legal, unvisited squares reachable from `square`
///
/// # Examples
/// ```
/// use knights_tour::core::{Square, VisitedSet};
/// use knights_tour::solver::onward_degree;
///
/// let corner = Square::new(0, 0).unwrap();
/// assert_eq!(onward_degree(corner, VisitedSet::new()), 2);
/// ```
#[must_use]
pub fn onward_degree(square: Square, visited: VisitedSet) -> u8 {
    square
        .knight_moves()
        .filter(|&next| !visited.contains(next))
        .count() as u8
}

/// Legal unvisited moves from `from`, sorted ascending by onward-degree
///
/// The sort is stable, so candidates with equal degree stay in knight
/// offset order.
///
/// # Examples
/// ```
/// use knights_tour::core::{Square, VisitedSet};
/// use knights_tour::solver::ranked_candidates;
///
/// let from = Square::new(0, 0).unwrap();
/// let visited: VisitedSet = std::iter::once(from).collect();
///
/// let ranked = ranked_candidates(from, visited);
/// assert_eq!(ranked.len(), 2);
/// assert_eq!(ranked[0].square, Square::new(1, 2).unwrap());
/// ```
#[must_use]
pub fn ranked_candidates(from: Square, visited: VisitedSet) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = from
        .knight_moves()
        .filter(|&next| !visited.contains(next))
        .map(|square| Candidate {
            square,
            onward_degree: onward_degree(square, visited),
        })
        .collect();

    candidates.sort_by_key(|c| c.onward_degree);
    candidates
}
