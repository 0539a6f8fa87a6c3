//! Knight's Tour solving
//!
//! Warnsdorff's rule: always step to the reachable unvisited square with the
//! fewest onward moves. Greedy, with no backtracking.

mod candidates;
mod engine;

pub use candidates::{Candidate, onward_degree, ranked_candidates};
pub use engine::{SolveTrace, StepRecord, TourSolver};
