//! Visited-square set
//!
//! One bit per square, indexed by `Square::index`.

use super::Square;

/// Set of squares already placed on a path
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisitedSet(u64);

impl VisitedSet {
    /// Empty set
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, square: Square) -> bool {
        self.0 & (1 << square.index()) != 0
    }

    /// Insert a square, returning `false` if it was already present
    #[inline]
    pub const fn insert(&mut self, square: Square) -> bool {
        let bit = 1 << square.index();
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether every square on the board is present
    #[inline]
    #[must_use]
    pub const fn is_full(self) -> bool {
        self.0 == u64::MAX
    }

    /// Iterate the squares in row-major order
    pub fn iter(self) -> impl Iterator<Item = Square> {
        Square::all().filter(move |&sq| self.contains(sq))
    }
}

impl FromIterator<Square> for VisitedSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = Self::new();
        for square in iter {
            set.insert(square);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_contains() {
        let mut set = VisitedSet::new();
        let a = Square::new(0, 0).unwrap();
        let b = Square::new(7, 7).unwrap();

        assert!(set.is_empty());
        assert!(set.insert(a));
        assert!(!set.insert(a));
        assert!(set.insert(b));

        assert!(set.contains(a));
        assert!(set.contains(b));
        assert!(!set.contains(Square::new(3, 3).unwrap()));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn full_board() {
        let set: VisitedSet = Square::all().collect();
        assert!(set.is_full());
        assert_eq!(set.len(), 64);
        assert_eq!(set.iter().count(), 64);
    }

    #[test]
    fn iter_is_row_major() {
        let set: VisitedSet = [Square::new(5, 1).unwrap(), Square::new(1, 5).unwrap()]
            .into_iter()
            .collect();
        let squares: Vec<Square> = set.iter().collect();
        assert_eq!(
            squares,
            vec![Square::new(1, 5).unwrap(), Square::new(5, 1).unwrap()]
        );
    }
}
