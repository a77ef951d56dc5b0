use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell on the landing grid.
///
/// Equality and hashing are by value, so two `Coordinates` built from the same
/// `(x, y)` always address the same cell in the platform's reservation maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: i32,
    pub y: i32,
}

impl Coordinates {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the cell `dx` columns and `dy` rows away. No bounds are checked.
    #[inline]
    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The eight surrounding cells (Moore neighbourhood), row by row from the
    /// top-left to the bottom-right.
    pub fn neighbors(self) -> [Coordinates; 8] {
        [
            self.top_left(),
            self.top_middle(),
            self.top_right(),
            self.middle_left(),
            self.middle_right(),
            self.bottom_left(),
            self.bottom_middle(),
            self.bottom_right(),
        ]
    }

    /// The cell itself followed by its eight neighbours.
    pub fn footprint(self) -> [Coordinates; 9] {
        let n = self.neighbors();
        [self, n[0], n[1], n[2], n[3], n[4], n[5], n[6], n[7]]
    }

    #[inline]
    pub const fn top_left(self) -> Self {
        self.translate(-1, -1)
    }

    #[inline]
    pub const fn top_middle(self) -> Self {
        self.translate(0, -1)
    }

    #[inline]
    pub const fn top_right(self) -> Self {
        self.translate(1, -1)
    }

    #[inline]
    pub const fn middle_left(self) -> Self {
        self.translate(-1, 0)
    }

    #[inline]
    pub const fn middle_right(self) -> Self {
        self.translate(1, 0)
    }

    #[inline]
    pub const fn bottom_left(self) -> Self {
        self.translate(-1, 1)
    }

    #[inline]
    pub const fn bottom_middle(self) -> Self {
        self.translate(0, 1)
    }

    #[inline]
    pub const fn bottom_right(self) -> Self {
        self.translate(1, 1)
    }
}

impl From<(i32, i32)> for Coordinates {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
