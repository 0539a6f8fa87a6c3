//! Frame-by-frame traversal of a solved path
//!
//! The controller owns the playback state for one tour: which transition is
//! in flight, how far along it the knight is, which squares have been left
//! behind and which arrows have been drawn. It never touches the path itself.

use super::config::AnimationConfig;
use super::geometry::{Arrow, Point};
use crate::core::{Path, Square};

/// Whether playback still has frames to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Moving,
    Finished,
}

/// Playback state for a single tour
#[derive(Debug, Clone)]
pub struct AnimationController {
    path: Path,
    config: AnimationConfig,
    /// Index of the square the knight is leaving
    index: usize,
    frame: u32,
    frames_for_leg: u32,
    visited: Vec<Square>,
    arrows: Vec<Arrow>,
    ticks: u64,
}

impl AnimationController {
    /// Start playback at the first square of `path`
    #[must_use]
    pub fn new(path: Path, config: AnimationConfig) -> Self {
        let mut controller = Self {
            path,
            config,
            index: 0,
            frame: 0,
            frames_for_leg: 1,
            visited: Vec::new(),
            arrows: Vec::new(),
            ticks: 0,
        };

        if controller.path.len() == 1 {
            controller.visited.push(controller.path.start());
        } else {
            controller.frames_for_leg = controller.leg_frames(0);
        }
        controller
    }

    /// Frames needed to cross the transition starting at `index`
    fn leg_frames(&self, index: usize) -> u32 {
        match (self.path.get(index), self.path.get(index + 1)) {
            (Some(from), Some(to)) => frames_for(from, to, self.config.step_per_frame()),
            _ => 1,
        }
    }

    /// Advance one frame
    pub fn tick(&mut self) -> AnimationState {
        if self.is_finished() {
            return AnimationState::Finished;
        }
        self.ticks += 1;

        let from = self.path.squares()[self.index];
        if self.frame == 0 && self.visited.last() != Some(&from) {
            self.visited.push(from);
        }

        self.frame += 1;
        if self.frame < self.frames_for_leg {
            return AnimationState::Moving;
        }

        let to = self.path.squares()[self.index + 1];
        self.arrows.push(Arrow { from, to });
        self.index += 1;
        self.frame = 0;

        if self.is_finished() {
            self.visited.push(to);
            AnimationState::Finished
        } else {
            self.frames_for_leg = self.leg_frames(self.index);
            AnimationState::Moving
        }
    }

    /// Jump straight to the end of the tour
    pub fn skip_to_end(&mut self) {
        while self.tick() == AnimationState::Moving {}
    }

    /// Change pacing; takes effect from the next transition
    pub fn set_config(&mut self, config: AnimationConfig) {
        self.config = config;
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.index + 1 >= self.path.len()
    }

    #[must_use]
    pub fn state(&self) -> AnimationState {
        if self.is_finished() {
            AnimationState::Finished
        } else {
            AnimationState::Moving
        }
    }

    /// Interpolated knight position in square units
    #[must_use]
    pub fn knight_position(&self) -> Point {
        let from = Point::center(self.path.squares()[self.index]);
        match self.path.get(self.index + 1) {
            Some(to) if !self.is_finished() => {
                let t = f64::from(self.frame) / f64::from(self.frames_for_leg);
                from.lerp(Point::center(to), t)
            }
            _ => from,
        }
    }

    /// Square the knight last stood on
    #[must_use]
    pub fn current_square(&self) -> Square {
        self.path.squares()[self.index]
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn config(&self) -> AnimationConfig {
        self.config
    }

    /// Squares the knight has left (plus the final square once finished)
    #[must_use]
    pub fn visited(&self) -> &[Square] {
        &self.visited
    }

    #[must_use]
    pub fn arrows(&self) -> &[Arrow] {
        &self.arrows
    }

    /// Completed transitions
    #[must_use]
    pub fn moves_done(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// Frames for one transition: at least one, otherwise distance over step
#[must_use]
pub fn frames_for(from: Square, to: Square, step: f64) -> u32 {
    let distance = Point::center(from).distance_to(Point::center(to));
    let frames = (distance / step).floor();
    if frames.is_finite() && frames >= 1.0 {
        frames.min(f64::from(u32::MAX)) as u32
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::TourSolver;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn short_path() -> Path {
        Path::from_squares(vec![sq(0, 0), sq(1, 2), sq(0, 4)]).unwrap()
    }

    #[test]
    fn frames_per_knight_leg() {
        // sqrt(5) squares at 1/15 square per frame
        let step = AnimationConfig::default().step_per_frame();
        assert_eq!(frames_for(sq(0, 0), sq(1, 2), step), 33);
        assert_eq!(frames_for(sq(0, 0), sq(1, 2), 100.0), 1);
    }

    #[test]
    fn single_square_path_is_finished() {
        let mut controller =
            AnimationController::new(Path::from_start(sq(4, 4)), AnimationConfig::default());
        assert!(controller.is_finished());
        assert_eq!(controller.visited(), &[sq(4, 4)]);
        assert_eq!(controller.tick(), AnimationState::Finished);
        assert!(controller.arrows().is_empty());
        assert_eq!(controller.knight_position(), Point::center(sq(4, 4)));
    }

    #[test]
    fn origin_marked_when_leg_starts() {
        let mut controller = AnimationController::new(short_path(), AnimationConfig::default());
        assert!(controller.visited().is_empty());

        assert_eq!(controller.tick(), AnimationState::Moving);
        assert_eq!(controller.visited(), &[sq(0, 0)]);
        assert!(controller.arrows().is_empty());
    }

    #[test]
    fn knight_moves_between_centres() {
        let mut controller = AnimationController::new(short_path(), AnimationConfig::default());
        assert_eq!(controller.knight_position(), Point::center(sq(0, 0)));

        controller.tick();
        let p = controller.knight_position();
        assert!(p.x > 0.5 && p.x < 2.5);
        assert!(p.y > 0.5 && p.y < 1.5);
    }

    #[test]
    fn playback_consumes_path_in_order() {
        let path = short_path();
        let mut controller = AnimationController::new(path.clone(), AnimationConfig::default());

        let mut frames = 0;
        while controller.tick() == AnimationState::Moving {
            frames += 1;
            assert!(frames < 10_000, "animation never finished");
        }

        let expected: Vec<Arrow> = path
            .transitions()
            .map(|(from, to)| Arrow { from, to })
            .collect();
        assert_eq!(controller.arrows(), &expected[..]);
        assert_eq!(controller.visited(), path.squares());
        assert_eq!(controller.path(), &path);
        assert_eq!(controller.moves_done(), 2);
        assert_eq!(controller.knight_position(), Point::center(sq(0, 4)));
        // 33 frames per leg, two legs
        assert_eq!(controller.ticks(), 66);
    }

    #[test]
    fn full_tour_overlay_and_arrows() {
        let path = TourSolver::new().solve(sq(0, 0));
        let mut controller = AnimationController::new(path.clone(), AnimationConfig::default());
        controller.skip_to_end();

        assert_eq!(controller.state(), AnimationState::Finished);
        assert_eq!(controller.arrows().len(), path.len() - 1);
        assert_eq!(controller.visited(), path.squares());
        assert_eq!(controller.current_square(), path.last());
    }

    #[test]
    fn faster_config_shortens_later_legs() {
        let mut controller = AnimationController::new(short_path(), AnimationConfig::default());
        controller.set_config(AnimationConfig::default().faster().faster().faster());
        controller.skip_to_end();
        // first leg keeps its 33 frames, the second uses the new pace
        assert_eq!(controller.ticks(), 33 + 4);
    }
}
