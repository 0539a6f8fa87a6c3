//! Board-space geometry for the animator
//!
//! Coordinates are in square units: x runs left to right with the centre of
//! column `c` at `c + 0.5`, y runs top to bottom with the centre of row `r` at
//! `r + 0.5`. Renderers scale these to their own surface.

use crate::core::Square;
use std::f64::consts::FRAC_PI_6;

/// Length of each arrowhead barb (12px on a 75px square)
pub const ARROW_HEAD_LENGTH: f64 = 0.16;

/// A point on the board in square units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Centre of a square
    #[must_use]
    pub fn center(square: Square) -> Self {
        Self {
            x: f64::from(square.col()) + 0.5,
            y: f64::from(square.row()) + 0.5,
        }
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Linear interpolation, `t = 0` at `self` and `t = 1` at `other`
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

/// A completed transition, drawn as an arrow between square centres
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrow {
    pub from: Square,
    pub to: Square,
}

impl Arrow {
    #[must_use]
    pub fn tail(&self) -> Point {
        Point::center(self.from)
    }

    #[must_use]
    pub fn tip(&self) -> Point {
        Point::center(self.to)
    }

    /// The two barb ends of the arrowhead, 30° either side of the shaft
    #[must_use]
    pub fn head(&self, length: f64) -> [Point; 2] {
        let tail = self.tail();
        let tip = self.tip();
        let angle = (tip.y - tail.y).atan2(tip.x - tail.x);
        let barb = |theta: f64| Point {
            x: tip.x - length * theta.cos(),
            y: tip.y - length * theta.sin(),
        };
        [barb(angle - FRAC_PI_6), barb(angle + FRAC_PI_6)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn centers() {
        assert_eq!(Point::center(sq(0, 0)), Point::new(0.5, 0.5));
        assert_eq!(Point::center(sq(2, 7)), Point::new(7.5, 2.5));
    }

    #[test]
    fn knight_leg_length() {
        let a = Point::center(sq(0, 0));
        let b = Point::center(sq(1, 2));
        assert!(close(a.distance_to(b), 5.0_f64.sqrt()));
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Point::new(0.5, 0.5);
        let b = Point::new(2.5, 1.5);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Point::new(1.5, 1.0));
    }

    #[test]
    fn arrow_head_barbs_sit_behind_tip() {
        let arrow = Arrow {
            from: sq(0, 0),
            to: sq(0, 2),
        };
        let [left, right] = arrow.head(ARROW_HEAD_LENGTH);
        let tip = arrow.tip();

        // Horizontal shaft: barbs mirror each other across it
        assert!(left.x < tip.x && right.x < tip.x);
        assert!(close(left.x, right.x));
        assert!(close(left.y - tip.y, -(right.y - tip.y)));
        assert!(close(left.distance_to(tip), ARROW_HEAD_LENGTH));
        assert!(close(right.distance_to(tip), ARROW_HEAD_LENGTH));
    }
}
