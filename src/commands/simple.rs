//! Simple interactive CLI mode
//!
//! Text-based tour explorer without TUI: enter a start square, get the board.

use super::solve::random_start;
use crate::core::{Path, Square, TourOutcome};
use crate::output::formatters::{coverage_bar, format_board};
use crate::solver::TourSolver;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple(solver: &TourSolver) -> Result<(), String> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(solver, &mut stdin.lock(), &mut stdout)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Prompt loop over arbitrary input and output streams
///
/// Returns the number of tours solved.
///
/// # Errors
///
/// Returns any I/O error from reading `input` or writing `output`.
pub fn run_session<R: BufRead, W: Write>(
    solver: &TourSolver,
    input: &mut R,
    output: &mut W,
) -> io::Result<usize> {
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║            Knight's Tour - Interactive Mode                  ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Enter a start square as 'row,col' (0-7) or algebraic (e.g. d5).")?;
    writeln!(output, "Commands: 'random' for a random start, 'quit' to exit\n")?;

    let mut tours = 0;
    let mut last: Option<Path> = None;

    loop {
        let Some(line) = get_user_input(input, output, "Start square")? else {
            break;
        };

        let start = match line.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => break,
            "random" | "r" => random_start(&mut rand::rng()),
            "again" => match &last {
                Some(path) => path.start(),
                None => {
                    writeln!(output, "No previous tour to repeat!\n")?;
                    continue;
                }
            },
            text => match text.parse::<Square>() {
                Ok(square) => square,
                Err(e) => {
                    writeln!(output, "❌ {e}\n")?;
                    continue;
                }
            },
        };

        let path = solver.solve(start);
        tours += 1;
        write_tour(output, &path)?;
        last = Some(path);
    }

    writeln!(output, "\n👋 Thanks for touring!\n")?;
    Ok(tours)
}

fn write_tour<W: Write>(output: &mut W, path: &Path) -> io::Result<()> {
    writeln!(output, "────────────────────────────────────────────────────────────")?;
    writeln!(
        output,
        "Tour from {} {}: {} squares",
        path.start().algebraic(),
        path.start(),
        path.len()
    )?;
    writeln!(output, "────────────────────────────────────────────────────────────")?;

    for line in format_board(path) {
        writeln!(output, "  {line}")?;
    }

    writeln!(output, "\n  Coverage: [{}] {}/64", coverage_bar(path.len(), 32), path.len())?;
    match path.outcome() {
        TourOutcome::Complete => writeln!(output, "  ✅ Complete tour!\n"),
        outcome @ TourOutcome::Stuck { .. } => {
            writeln!(output, "  ⚠️  Tour incomplete: {outcome}\n")
        }
    }
}

/// Get user input with a prompt, `None` on end of input
fn get_user_input<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
