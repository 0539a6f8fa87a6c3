//! TUI application state and logic

use super::rendering::{board_inner_area, square_at, ui};
use crate::animation::{AnimationConfig, AnimationController, AnimationState};
use crate::commands::random_start;
use crate::core::{BOARD_SIZE, Square, TourOutcome};
use crate::solver::TourSolver;
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::Instant;

/// Application state
pub struct App {
    pub solver: TourSolver,
    pub config: AnimationConfig,
    pub animation: Option<AnimationController>,
    pub cursor: Square,
    pub paused: bool,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    /// Inner board area from the last draw, for mapping clicks
    pub board_area: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Idle,
    Touring,
    Paused,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub tours_started: usize,
    pub complete_tours: usize,
    pub cancelled: usize,
}

impl App {
    #[must_use]
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            solver: TourSolver::new(),
            config,
            animation: None,
            cursor: Square::default(),
            paused: false,
            messages: vec![
                Message {
                    text: "Welcome! Click a square to release the knight.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Or move with arrows/hjkl and press Enter, 'r' for random.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            board_area: Rect::default(),
        }
    }

    #[must_use]
    pub fn mode(&self) -> AppMode {
        match &self.animation {
            None => AppMode::Idle,
            Some(a) if a.state() == AnimationState::Finished => AppMode::Finished,
            Some(_) if self.paused => AppMode::Paused,
            Some(_) => AppMode::Touring,
        }
    }

    /// Solve from `start` and begin a fresh animation, discarding any current one
    pub fn start_tour(&mut self, start: Square) {
        if let Some(old) = self.animation.take()
            && old.state() == AnimationState::Moving
        {
            self.stats.cancelled += 1;
            info!(
                "Cancelled tour from {} after {} moves",
                old.path().start(),
                old.moves_done()
            );
        }

        let path = self.solver.solve(start);
        info!("New tour from {start}: {} squares", path.len());

        self.stats.tours_started += 1;
        self.cursor = start;
        self.paused = false;

        match path.outcome() {
            TourOutcome::Complete => {
                self.stats.complete_tours += 1;
                self.add_message(
                    &format!("Tour from {}: all 64 squares, watch it go!", start.algebraic()),
                    MessageStyle::Info,
                );
            }
            outcome @ TourOutcome::Stuck { .. } => self.add_message(
                &format!("Tour from {}: {outcome}", start.algebraic()),
                MessageStyle::Error,
            ),
        }

        self.animation = Some(AnimationController::new(path, self.config));
    }

    pub fn start_random(&mut self) {
        let start = random_start(&mut rand::rng());
        self.start_tour(start);
    }

    /// Drop the current tour and its overlay
    pub fn clear(&mut self) {
        if self.animation.take().is_some() {
            self.add_message("Board cleared", MessageStyle::Info);
        }
        self.paused = false;
    }

    /// Advance the animation by one frame unless paused
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }
        let Some(animation) = self.animation.as_mut() else {
            return;
        };
        if animation.state() == AnimationState::Finished {
            return;
        }

        if animation.tick() == AnimationState::Finished {
            let path_len = animation.path().len();
            let complete = animation.path().is_complete();
            if complete {
                self.add_message("🎉 Knight's tour complete!", MessageStyle::Success);
            } else {
                self.add_message(
                    &format!("Knight stuck after {path_len} squares. Pick another start!"),
                    MessageStyle::Error,
                );
            }
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.mode() == AppMode::Touring || self.mode() == AppMode::Paused {
            self.paused = !self.paused;
            let text = if self.paused { "Paused" } else { "Resumed" };
            self.add_message(text, MessageStyle::Info);
        }
    }

    pub fn skip_to_end(&mut self) {
        if let Some(animation) = self.animation.as_mut()
            && animation.state() == AnimationState::Moving
        {
            animation.skip_to_end();
            self.paused = false;
            self.add_message("Skipped to the end of the tour", MessageStyle::Info);
        }
    }

    pub fn speed_up(&mut self) {
        self.set_config(self.config.faster());
    }

    pub fn slow_down(&mut self) {
        self.set_config(self.config.slower());
    }

    fn set_config(&mut self, config: AnimationConfig) {
        self.config = config;
        if let Some(animation) = self.animation.as_mut() {
            animation.set_config(config);
        }
        self.add_message(
            &format!("Speed: {} squares/s", config.squares_per_second()),
            MessageStyle::Info,
        );
    }

    /// Move the selection cursor, clamped to the board
    pub fn move_cursor(&mut self, d_row: i8, d_col: i8) {
        let row = self
            .cursor
            .row()
            .saturating_add_signed(d_row)
            .min(BOARD_SIZE - 1);
        let col = self
            .cursor
            .col()
            .saturating_add_signed(d_col)
            .min(BOARD_SIZE - 1);
        if let Ok(square) = Square::new(row, col) {
            self.cursor = square;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        debug!("Key event: {:?} with modifiers {:?}", key.code, key.modifiers);
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),
            KeyCode::Enter => self.start_tour(self.cursor),
            KeyCode::Char('r') => self.start_random(),
            KeyCode::Char(' ') => self.toggle_pause(),
            KeyCode::Char('s') => self.skip_to_end(),
            KeyCode::Char('c') => self.clear(),
            KeyCode::Char('+' | '=') => self.speed_up(),
            KeyCode::Char('-') => self.slow_down(),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            debug!("Click at column {} row {}", mouse.column, mouse.row);
            if let Some(square) = square_at(self.board_area, mouse.column, mouse.row) {
                self.start_tour(square);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    let restored = restore_terminal(&mut terminal);

    session_outcome(res, restored)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Event loop failures take precedence over cleanup failures
fn session_outcome(run: Result<()>, restored: Result<()>) -> Result<()> {
    run.context("TUI event loop failed")?;
    restored.context("Failed to restore the terminal")
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut next_frame = Instant::now() + app.config.frame_duration();

    loop {
        let completed = terminal.draw(|f| ui(f, &app))?;
        app.board_area = board_inner_area(completed.area);

        let timeout = next_frame.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        let now = Instant::now();
        if now >= next_frame {
            app.tick();
            next_frame = now + app.config.frame_duration();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn fast_app() -> App {
        App::new(AnimationConfig::new(60, 64.0).unwrap())
    }

    #[test]
    fn starts_idle() {
        let app = fast_app();
        assert_eq!(app.mode(), AppMode::Idle);
        assert_eq!(app.cursor, sq(0, 0));
    }

    #[test]
    fn enter_starts_tour_at_cursor() {
        let mut app = fast_app();
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Char('l')));
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.mode(), AppMode::Touring);
        let animation = app.animation.as_ref().unwrap();
        assert_eq!(animation.path().start(), sq(1, 1));
        assert_eq!(app.stats.tours_started, 1);
    }

    #[test]
    fn cursor_clamped_to_board() {
        let mut app = fast_app();
        app.move_cursor(-1, -1);
        assert_eq!(app.cursor, sq(0, 0));
        for _ in 0..20 {
            app.move_cursor(1, 1);
        }
        assert_eq!(app.cursor, sq(7, 7));
    }

    #[test]
    fn ticking_finishes_tour() {
        let mut app = fast_app();
        app.start_tour(sq(0, 0));
        for _ in 0..10_000 {
            app.tick();
            if app.mode() == AppMode::Finished {
                break;
            }
        }
        assert_eq!(app.mode(), AppMode::Finished);
        assert_eq!(app.stats.complete_tours, 1);
        assert!(
            app.messages
                .iter()
                .any(|m| m.style == MessageStyle::Success)
        );
    }

    #[test]
    fn pause_stops_ticks() {
        let mut app = fast_app();
        app.start_tour(sq(0, 0));
        app.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(app.mode(), AppMode::Paused);

        let before = app.animation.as_ref().unwrap().ticks();
        app.tick();
        assert_eq!(app.animation.as_ref().unwrap().ticks(), before);

        app.handle_key(key(KeyCode::Char(' ')));
        app.tick();
        assert_eq!(app.animation.as_ref().unwrap().ticks(), before + 1);
    }

    #[test]
    fn new_selection_cancels_running_tour() {
        let mut app = fast_app();
        app.start_tour(sq(0, 0));
        app.tick();
        app.start_tour(sq(3, 3));

        let animation = app.animation.as_ref().unwrap();
        assert_eq!(animation.path().start(), sq(3, 3));
        assert_eq!(animation.moves_done(), 0);
        assert!(animation.arrows().is_empty());
        assert_eq!(app.stats.cancelled, 1);
        assert_eq!(app.stats.tours_started, 2);
    }

    #[test]
    fn incomplete_tour_reported() {
        let mut app = fast_app();
        app.start_tour(sq(6, 1));
        assert_eq!(app.stats.complete_tours, 0);
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("56/64"));
    }

    #[test]
    fn skip_jumps_to_finish() {
        let mut app = fast_app();
        app.start_tour(sq(0, 0));
        app.handle_key(key(KeyCode::Char('s')));
        assert_eq!(app.mode(), AppMode::Finished);
        assert_eq!(app.animation.as_ref().unwrap().arrows().len(), 63);
    }

    #[test]
    fn click_on_board_starts_tour() {
        let mut app = fast_app();
        app.board_area = Rect::new(10, 5, 32, 16);

        // 4 columns x 2 rows per square: (row 2, col 3)
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 10 + 3 * 4 + 1,
            row: 5 + 2 * 2,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(click);
        assert_eq!(app.animation.as_ref().unwrap().path().start(), sq(2, 3));
    }

    #[test]
    fn click_outside_board_ignored() {
        let mut app = fast_app();
        app.board_area = Rect::new(10, 5, 32, 16);
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 2,
            row: 2,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(click);
        assert_eq!(app.mode(), AppMode::Idle);
    }

    #[test]
    fn speed_keys_update_config() {
        let mut app = App::new(AnimationConfig::default());
        app.handle_key(key(KeyCode::Char('+')));
        assert!((app.config.squares_per_second() - 8.0).abs() < f64::EPSILON);
        app.handle_key(key(KeyCode::Char('-')));
        app.handle_key(key(KeyCode::Char('-')));
        assert!((app.config.squares_per_second() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn quit_keys() {
        let mut app = fast_app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = fast_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn clear_discards_tour() {
        let mut app = fast_app();
        app.start_tour(sq(0, 0));
        app.handle_key(key(KeyCode::Char('c')));
        assert_eq!(app.mode(), AppMode::Idle);
    }

    #[test]
    fn loop_failure_is_reported() {
        let err = session_outcome(Err(anyhow::anyhow!("read failed")), Ok(())).unwrap_err();
        assert_eq!(err.to_string(), "TUI event loop failed");
        assert_eq!(err.root_cause().to_string(), "read failed");

        let err =
            session_outcome(Err(anyhow::anyhow!("read failed")), Err(anyhow::anyhow!("tty"))).unwrap_err();
        assert_eq!(err.root_cause().to_string(), "read failed");
    }

    #[test]
    fn cleanup_failure_is_reported() {
        let err = session_outcome(Ok(()), Err(anyhow::anyhow!("tty gone"))).unwrap_err();
        assert_eq!(err.to_string(), "Failed to restore the terminal");
        assert!(session_outcome(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = fast_app();
        for i in 0..10 {
            app.add_message(&format!("msg {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "msg 9");
    }
}
