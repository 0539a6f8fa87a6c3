//! TUI rendering with ratatui
//!
//! The board is drawn on a `Canvas` whose coordinates are board square units,
//! flipped so that row 0 sits at the top.

use super::app::{App, AppMode, MessageStyle};
use crate::animation::{ARROW_HEAD_LENGTH, Point};
use crate::core::{BOARD_SIZE, Square, VisitedSet};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Gauge, List, ListItem, Paragraph,
        canvas::{Canvas, Context, Line as CanvasLine, Painter, Shape},
    },
};

const LIGHT: Color = Color::Rgb(212, 194, 177);
const DARK: Color = Color::Rgb(140, 82, 60);
const LIGHT_VISITED: Color = Color::Rgb(246, 225, 206);
const DARK_VISITED: Color = Color::Rgb(182, 107, 78);
const CURSOR: Color = Color::Rgb(106, 153, 200);
const ARROW: Color = Color::Rgb(46, 139, 87);

const SIDE_PANEL_WIDTH: u16 = 38;
const BOARD: f64 = BOARD_SIZE as f64;

/// Screen regions
struct Regions {
    header: Rect,
    board: Rect,
    side: Rect,
    status: Rect,
}

fn regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),                   // Board
            Constraint::Length(SIDE_PANEL_WIDTH), // Side panel
        ])
        .split(chunks[1]);

    Regions {
        header: chunks[0],
        board: board_outer(main_chunks[0]),
        side: main_chunks[1],
        status: chunks[2],
    }
}

/// Largest bordered board that fits `area`, centred
///
/// Squares are twice as wide as tall so they look square in a terminal.
fn board_outer(area: Rect) -> Rect {
    let avail_w = area.width.saturating_sub(2);
    let avail_h = area.height.saturating_sub(2);
    let size = u16::from(BOARD_SIZE);

    let square_h = (avail_h / size).min(avail_w / size / 2).max(1);
    let square_w = square_h * 2;

    let width = (square_w * size + 2).min(area.width);
    let height = (square_h * size + 2).min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Inner board area (inside the border) for a full terminal area
#[must_use]
pub fn board_inner_area(area: Rect) -> Rect {
    let outer = regions(area).board;
    Block::default().borders(Borders::ALL).inner(outer)
}

/// Map a terminal cell to the board square under it
#[must_use]
pub fn square_at(inner: Rect, column: u16, row: u16) -> Option<Square> {
    if inner.width == 0
        || inner.height == 0
        || column < inner.x
        || row < inner.y
        || column >= inner.x + inner.width
        || row >= inner.y + inner.height
    {
        return None;
    }

    let size = u16::from(BOARD_SIZE);
    let col = (column - inner.x) * size / inner.width;
    let r = (row - inner.y) * size / inner.height;
    Square::new(r as u8, col as u8).ok()
}

/// Canvas coordinates of a board point (canvas y grows upward)
fn to_canvas(p: Point) -> (f64, f64) {
    (p.x, BOARD - p.y)
}

/// Fills every square, lighter where the knight has been
struct BoardShading {
    visited: VisitedSet,
    cursor: Option<Square>,
}

impl Shape for BoardShading {
    fn draw(&self, painter: &mut Painter) {
        let Some((left, top)) = painter.get_point(0.0, BOARD) else {
            return;
        };
        let Some((right, bottom)) = painter.get_point(BOARD, 0.0) else {
            return;
        };
        let width = right - left + 1;
        let height = bottom - top + 1;
        let size = BOARD_SIZE as usize;

        for y in top..=bottom {
            for x in left..=right {
                let col = ((x - left) * size / width).min(size - 1);
                let row = ((y - top) * size / height).min(size - 1);
                let Some(square) = Square::from_index(row * size + col) else {
                    continue;
                };
                painter.paint(x, y, square_color(square, &self.visited, self.cursor));
            }
        }
    }
}

fn square_color(square: Square, visited: &VisitedSet, cursor: Option<Square>) -> Color {
    if cursor == Some(square) {
        return CURSOR;
    }
    match (square.is_light(), visited.contains(square)) {
        (true, false) => LIGHT,
        (false, false) => DARK,
        (true, true) => LIGHT_VISITED,
        (false, true) => DARK_VISITED,
    }
}

fn draw_segment(ctx: &mut Context, from: Point, to: Point) {
    let (x1, y1) = to_canvas(from);
    let (x2, y2) = to_canvas(to);
    ctx.draw(&CanvasLine {
        x1,
        y1,
        x2,
        y2,
        color: ARROW,
    });
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let regions = regions(f.area());

    render_header(f, regions.header);
    render_board(f, app, regions.board);
    render_side_panel(f, app, regions.side);
    render_status(f, app, regions.status);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("♞ KNIGHT'S TOUR - Warnsdorff's Rule")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let visited: VisitedSet = app
        .animation
        .as_ref()
        .map(|a| a.visited().iter().copied().collect())
        .unwrap_or_default();
    let cursor = (app.mode() != AppMode::Touring).then_some(app.cursor);

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .marker(Marker::HalfBlock)
        .x_bounds([0.0, BOARD])
        .y_bounds([0.0, BOARD])
        .paint(|ctx| {
            ctx.draw(&BoardShading { visited, cursor });
            ctx.layer();

            let Some(animation) = &app.animation else {
                return;
            };
            for arrow in animation.arrows() {
                draw_segment(ctx, arrow.tail(), arrow.tip());
                for barb in arrow.head(ARROW_HEAD_LENGTH) {
                    draw_segment(ctx, arrow.tip(), barb);
                }
            }
            ctx.layer();

            let (x, y) = to_canvas(animation.knight_position());
            ctx.print(
                x,
                y,
                Span::styled(
                    "♞",
                    Style::default()
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                ),
            );
        });

    f.render_widget(canvas, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Tour info
            Constraint::Length(3), // Progress gauge
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_tour_info(f, app, chunks[0]);
    render_progress(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_tour_info(f: &mut Frame, app: &App, area: Rect) {
    let content = if let Some(animation) = &app.animation {
        let path = animation.path();
        let current = animation.current_square();
        let outcome_style = if path.is_complete() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Yellow)
        };
        vec![
            Line::from(vec![
                Span::raw("Start:    "),
                Span::styled(
                    format!("{} {}", path.start().algebraic(), path.start()),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!(
                "Knight:   {} {}",
                current.algebraic(),
                current
            )),
            Line::from(format!(
                "Move:     {}/{}",
                animation.moves_done(),
                path.len() - 1
            )),
            Line::from(format!("Length:   {} squares", path.len())),
            Line::from(vec![
                Span::raw("Outcome:  "),
                Span::styled(path.outcome().to_string(), outcome_style),
            ]),
        ]
    } else {
        vec![
            Line::from("No tour yet."),
            Line::from(format!(
                "Cursor:   {} {}",
                app.cursor.algebraic(),
                app.cursor
            )),
        ]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Tour ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let (visited, total) = app
        .animation
        .as_ref()
        .map_or((0, 64), |a| (a.visited().len(), a.path().len()));
    let percent = if total == 0 {
        0
    } else {
        (visited * 100 / total).min(100) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Visited ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{visited}/{total} squares"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(40),
        ])
        .split(area);

    let mode_text = match app.mode() {
        AppMode::Idle => "Mode: Idle",
        AppMode::Touring => "Mode: Touring",
        AppMode::Paused => "Mode: Paused",
        AppMode::Finished => "Mode: Finished",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let speed_text = format!("Speed: {} sq/s", app.config.squares_per_second());
    let speed = Paragraph::new(speed_text).alignment(Alignment::Center);
    f.render_widget(speed, chunks[1]);

    let stats_text = format!(
        "Tours: {} | Full: {}",
        app.stats.tours_started, app.stats.complete_tours
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[2]);

    let help_text = match app.mode() {
        AppMode::Touring | AppMode::Paused => "q: Quit | Space: Pause | s: Skip | +/-: Speed",
        AppMode::Idle | AppMode::Finished => "q: Quit | Click/Enter: Start | r: Random | c: Clear",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::AnimationConfig;
    use ratatui::{Terminal, backend::TestBackend};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn square_at_maps_corners() {
        let inner = Rect::new(2, 1, 32, 16);
        assert_eq!(square_at(inner, 2, 1), Some(sq(0, 0)));
        assert_eq!(square_at(inner, 33, 16), Some(sq(7, 7)));
        assert_eq!(square_at(inner, 6, 1), Some(sq(0, 1)));
        assert_eq!(square_at(inner, 2, 3), Some(sq(1, 0)));
    }

    #[test]
    fn square_at_rejects_outside() {
        let inner = Rect::new(2, 1, 32, 16);
        assert_eq!(square_at(inner, 1, 1), None);
        assert_eq!(square_at(inner, 34, 5), None);
        assert_eq!(square_at(inner, 5, 17), None);
        assert_eq!(square_at(Rect::default(), 0, 0), None);
    }

    #[test]
    fn board_is_whole_squares() {
        let inner = board_inner_area(Rect::new(0, 0, 120, 40));
        assert!(inner.width > 0 && inner.height > 0);
        assert_eq!(inner.width % 8, 0);
        assert_eq!(inner.height % 8, 0);
        assert_eq!(inner.width, inner.height * 2);
    }

    #[test]
    fn every_square_reachable_by_click() {
        let inner = board_inner_area(Rect::new(0, 0, 120, 40));
        let square_w = inner.width / 8;
        let square_h = inner.height / 8;
        for square in Square::all() {
            let column = inner.x + u16::from(square.col()) * square_w;
            let row = inner.y + u16::from(square.row()) * square_h;
            assert_eq!(square_at(inner, column, row), Some(square));
        }
    }

    #[test]
    fn visited_squares_use_lighter_shade() {
        let visited: VisitedSet = [sq(0, 0), sq(0, 1)].into_iter().collect();
        assert_eq!(square_color(sq(0, 0), &visited, None), LIGHT_VISITED);
        assert_eq!(square_color(sq(0, 1), &visited, None), DARK_VISITED);
        assert_eq!(square_color(sq(2, 2), &visited, None), LIGHT);
        assert_eq!(square_color(sq(2, 3), &visited, None), DARK);
        assert_eq!(square_color(sq(2, 3), &visited, Some(sq(2, 3))), CURSOR);
    }

    #[test]
    fn renders_idle_screen() {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let app = App::new(AnimationConfig::default());
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("KNIGHT'S TOUR"));
        assert!(text.contains("No tour yet."));
        assert!(text.contains("Mode: Idle"));
    }

    #[test]
    fn renders_tour_in_progress() {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let mut app = App::new(AnimationConfig::new(60, 64.0).unwrap());
        app.start_tour(sq(0, 0));
        for _ in 0..20 {
            app.tick();
        }
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Mode: Touring"));
        assert!(text.contains("Start:    a8 (0, 0)"));
        assert!(text.contains("♞"));
    }
}
