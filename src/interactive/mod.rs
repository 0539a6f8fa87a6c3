//! Interactive TUI interface
//!
//! Mouse and keyboard driven board that animates each solved tour.

mod app;
mod rendering;

pub use app::{App, AppMode, Message, MessageStyle, Statistics, run_tui};
pub use rendering::{board_inner_area, square_at, ui};
