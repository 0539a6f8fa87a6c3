//! Command implementations

pub mod rank;
pub mod simple;
pub mod solve;
pub mod survey;

pub use rank::{RankResult, rank_moves};
pub use simple::run_simple;
pub use solve::{SolveConfig, SolveResult, random_start, resolve_start, solve_tour};
pub use survey::{
    StartResult, SurveyStatistics, print_survey_statistics, run_survey, survey_starts,
};
