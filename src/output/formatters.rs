//! Formatting utilities for terminal output

use crate::core::{BOARD_SIZE, Path, Square};

/// Render the board as text rows, each square showing its 1-based move number
///
/// Unvisited squares show `·`. The first line is the file header and each
/// following line starts with the rank label.
///
/// # Examples
/// ```
/// use knights_tour::core::{Path, Square};
/// use knights_tour::output::formatters::format_board;
///
/// let path = Path::from_start(Square::new(0, 0).unwrap());
/// let lines = format_board(&path);
/// assert_eq!(lines.len(), 9);
/// assert!(lines[1].starts_with("8    1"));
/// ```
#[must_use]
pub fn format_board(path: &Path) -> Vec<String> {
    let mut steps = [None; 64];
    for (i, square) in path.iter().enumerate() {
        steps[square.index()] = Some(i + 1);
    }

    let mut lines = Vec::with_capacity(BOARD_SIZE as usize + 1);
    let header: String = (0..BOARD_SIZE)
        .map(|col| format!("{:>4}", char::from(b'a' + col)))
        .collect();
    lines.push(format!("  {header}"));

    for row in 0..BOARD_SIZE {
        let mut line = format!("{} ", BOARD_SIZE - row);
        for col in 0..BOARD_SIZE {
            let cell = Square::new(row, col)
                .ok()
                .and_then(|sq| steps[sq.index()])
                .map_or_else(|| "·".to_string(), |n| n.to_string());
            line.push_str(&format!("{cell:>4}"));
        }
        lines.push(line);
    }

    lines
}

/// Format a run of squares in algebraic notation, separated by arrows
#[must_use]
pub fn format_squares(squares: &[Square]) -> String {
    squares
        .iter()
        .map(|sq| sq.algebraic())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Board coverage as a bar
#[must_use]
pub fn coverage_bar(visited: usize, width: usize) -> String {
    create_progress_bar(visited as f64, 64.0, width)
}
