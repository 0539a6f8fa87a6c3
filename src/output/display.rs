//! Display functions for command results

use super::formatters::{coverage_bar, format_board, format_squares};
use crate::commands::{RankResult, SolveResult};
use crate::core::TourOutcome;
use colored::Colorize;

/// Print the result of solving a tour
pub fn print_solve_result(result: &SolveResult, verbose: bool, show_board: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Knight's tour from: {} {}",
        result.start.algebraic().bright_yellow().bold(),
        result.start
    );
    println!("{}", "─".repeat(60).cyan());

    if let (true, Some(steps)) = (verbose, &result.steps) {
        for (i, step) in steps.iter().enumerate() {
            let ranking = step
                .candidates
                .iter()
                .map(|c| format!("{}:{}", c.square.algebraic(), c.onward_degree))
                .collect::<Vec<_>>()
                .join(" ");
            match step.chosen() {
                Some(chosen) => println!(
                    "  {:2}. {} → {}   [{}]",
                    i + 1,
                    step.from.algebraic(),
                    chosen.square.algebraic().green(),
                    ranking.bright_black()
                ),
                None => println!(
                    "  {:2}. {} → {}",
                    i + 1,
                    step.from.algebraic(),
                    "no unvisited square reachable".red()
                ),
            }
        }
    } else {
        for chunk in result.path.squares().chunks(8) {
            println!("  {}", format_squares(chunk));
        }
    }

    if show_board {
        println!();
        for line in format_board(&result.path) {
            println!("  {line}");
        }
    }

    println!(
        "\n  Coverage: [{}] {}/64",
        coverage_bar(result.path.len(), 32).green(),
        result.path.len()
    );
    println!(
        "  Solved in {:.1}µs",
        result.duration.as_secs_f64() * 1_000_000.0
    );

    println!();
    match result.outcome {
        TourOutcome::Complete => {
            println!("{}", "✅ Complete tour: every square visited once!".green().bold());
        }
        outcome @ TourOutcome::Stuck { .. } => {
            println!(
                "{}",
                format!("⚠️  Heuristic exhausted, tour incomplete: {outcome}")
                    .yellow()
                    .bold()
            );
        }
    }
}

/// Print the ranking of candidate moves at one step
pub fn print_rank_result(result: &RankResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} (move {} of the tour from {})",
        "WARNSDORFF RANKING:".bright_cyan().bold(),
        result.from.algebraic().bright_yellow().bold(),
        result.after + 1,
        result.start.algebraic()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.candidates.is_empty() {
        println!(
            "\n{}",
            "No unvisited square is reachable: the heuristic stops here.".red()
        );
        return;
    }

    println!("\n  {:<4} {:<8} {:<7} onward", "#", "square", "coords");
    for (i, candidate) in result.candidates.iter().enumerate() {
        let marker = if i == 0 { "◀ chosen" } else { "" };
        let line = format!(
            "  {:<4} {:<8} {:<7} {}",
            i + 1,
            candidate.square.algebraic(),
            candidate.square.to_string(),
            candidate.onward_degree
        );
        if i == 0 {
            println!("{} {}", line.green().bold(), marker.green());
        } else {
            println!("{line}");
        }
    }

    let tied = result.tied();
    if tied > 1 {
        println!("\n  {tied} candidates tie at the lowest degree; offset order picks the first.");
    }
}
