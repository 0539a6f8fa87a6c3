//! Survey every start square - comprehensive heuristic evaluation
//!
//! Solves the tour from each start square in parallel and summarises how often
//! Warnsdorff's rule covers the whole board.

use crate::core::{SQUARE_COUNT, Square};
use crate::solver::TourSolver;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result from solving a single start square
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartResult {
    pub start: Square,
    pub length: usize,
    pub last: Square,
}

impl StartResult {
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.length == SQUARE_COUNT
    }
}

/// Statistics from surveying many start squares
#[derive(Debug)]
pub struct SurveyStatistics {
    pub total_starts: usize,
    pub complete: usize,
    /// Incomplete tours, shortest first
    pub incomplete: Vec<StartResult>,
    pub length_distribution: FxHashMap<usize, usize>,
    pub average_length: f64,
    pub min_length: usize,
    pub max_length: usize,
    pub total_time: Duration,
}

/// Start squares in row-major order, optionally limited to the first `limit`
#[must_use]
pub fn survey_starts(limit: Option<usize>) -> Vec<Square> {
    Square::all().take(limit.unwrap_or(SQUARE_COUNT)).collect()
}

/// Solve from every square in `starts` and gather statistics
pub fn run_survey(solver: &TourSolver, starts: &[Square], show_progress: bool) -> SurveyStatistics {
    let pb = if show_progress {
        println!("♞ Surveying {} start squares...", starts.len());
        ProgressBar::new(starts.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let total_start = Instant::now();

    let results: Vec<StartResult> = starts
        .par_iter()
        .map(|&start| {
            let path = solver.solve(start);
            pb.inc(1);
            StartResult {
                start,
                length: path.len(),
                last: path.last(),
            }
        })
        .collect();

    pb.finish_with_message("Complete!");
    let total_time = total_start.elapsed();

    let stats = summarize(&results, total_time);
    info!(
        "Survey of {} starts: {} complete in {:?}",
        stats.total_starts, stats.complete, stats.total_time
    );
    stats
}

fn summarize(results: &[StartResult], total_time: Duration) -> SurveyStatistics {
    let mut length_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for result in results {
        *length_distribution.entry(result.length).or_insert(0) += 1;
    }

    let complete = results.iter().filter(|r| r.is_complete()).count();

    let mut incomplete: Vec<StartResult> = results
        .iter()
        .filter(|r| !r.is_complete())
        .cloned()
        .collect();
    incomplete.sort_by_key(|r| (r.length, r.start));

    let total_length: usize = results.iter().map(|r| r.length).sum();
    let average_length = if results.is_empty() {
        0.0
    } else {
        total_length as f64 / results.len() as f64
    };

    SurveyStatistics {
        total_starts: results.len(),
        complete,
        incomplete,
        length_distribution,
        average_length,
        min_length: results.iter().map(|r| r.length).min().unwrap_or(0),
        max_length: results.iter().map(|r| r.length).max().unwrap_or(0),
        total_time,
    }
}

/// Print survey statistics
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Survey Results ");
    println!("{}", "═".repeat(70));

    if stats.total_starts == 0 {
        println!("\nNo start squares surveyed.");
        return;
    }

    println!("\n📊 {}", "Overall Coverage".bright_cyan().bold());
    println!("  Start squares tested: {}", stats.total_starts);
    println!(
        "  Complete tours:       {} {}",
        stats.complete,
        format!(
            "({:.1}%)",
            stats.complete as f64 / stats.total_starts as f64 * 100.0
        )
        .green()
    );
    let stuck = stats.total_starts - stats.complete;
    if stuck > 0 {
        println!(
            "  Heuristic stuck:      {} {}",
            stuck,
            format!("({:.1}%)", stuck as f64 / stats.total_starts as f64 * 100.0).red()
        );
    }
    println!(
        "  Average length:       {}",
        format!("{:.2}", stats.average_length).bright_yellow().bold()
    );
    println!(
        "  Shortest / longest:   {} / {}",
        stats.min_length, stats.max_length
    );
    println!(
        "  Total time:           {:.2}ms",
        stats.total_time.as_secs_f64() * 1000.0
    );

    println!("\n📈 {}", "Length Distribution".bright_cyan().bold());
    let mut lengths: Vec<(usize, usize)> = stats
        .length_distribution
        .iter()
        .map(|(&len, &count)| (len, count))
        .collect();
    lengths.sort_by_key(|&(len, _)| std::cmp::Reverse(len));
    let max_count = lengths.iter().map(|&(_, c)| c).max().unwrap_or(1);
    for (length, count) in lengths {
        let percentage = count as f64 / stats.total_starts as f64 * 100.0;
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {length:2} squares: {bar} {count:3} ({percentage:5.1}%)");
    }

    if !stats.incomplete.is_empty() {
        println!("\n😰 {}", "Incomplete Tours".yellow().bold());
        for result in &stats.incomplete {
            println!(
                "  {} {} → stuck at {} after {} squares",
                result.start.algebraic().yellow(),
                result.start,
                result.last,
                result.length
            );
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
    fn full_survey_counts() {
        let starts = survey_starts(None);
        let stats = run_survey(&TourSolver::new(), &starts, false);

        assert_eq!(stats.total_starts, 64);
        assert_eq!(stats.complete, 61);
        assert_eq!(stats.min_length, 56);
        assert_eq!(stats.max_length, 64);

        let incomplete: Vec<(Square, usize)> =
            stats.incomplete.iter().map(|r| (r.start, r.length)).collect();
        assert_eq!(
            incomplete,
            vec![(sq(6, 1), 56), (sq(3, 0), 60), (sq(3, 3), 62)]
        );
    }

    #[test]
    fn distribution_sums_to_total() {
        let stats = run_survey(&TourSolver::new(), &survey_starts(None), false);
        let sum: usize = stats.length_distribution.values().sum();
        assert_eq!(sum, stats.total_starts);
        assert_eq!(stats.length_distribution.get(&64), Some(&61));
    }

    #[test]
    fn average_between_bounds() {
        let stats = run_survey(&TourSolver::new(), &survey_starts(None), false);
        assert!(stats.average_length >= stats.min_length as f64);
        assert!(stats.average_length <= stats.max_length as f64);
    }

    #[test]
    fn limited_survey() {
        let starts = survey_starts(Some(8));
        assert_eq!(starts.len(), 8);

        let stats = run_survey(&TourSolver::new(), &starts, false);
        assert_eq!(stats.total_starts, 8);
        assert_eq!(stats.complete, 8);
        assert!(stats.incomplete.is_empty());
    }

    #[test]
    fn empty_survey() {
        let stats = run_survey(&TourSolver::new(), &[], false);
        assert_eq!(stats.total_starts, 0);
        assert!(stats.average_length.abs() < f64::EPSILON);
        assert_eq!(stats.min_length, 0);
    }
}
