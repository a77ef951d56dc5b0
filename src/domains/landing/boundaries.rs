use super::coordinates::Coordinates;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An axis-aligned rectangle of grid cells.
///
/// `left` and `top` are inclusive, `right` and `bottom` are exclusive, so the
/// rectangle covers `[left, right) x [top, bottom)`. The corner accessors return
/// the last cell that is still inside, not the exclusive edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boundaries {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Boundaries {
    pub const fn new(pos_x: i32, pos_y: i32, width: i32, length: i32) -> Self {
        Self {
            left: pos_x,
            top: pos_y,
            right: pos_x.saturating_add(width),
            bottom: pos_y.saturating_add(length),
        }
    }

    pub const fn width(&self) -> i64 {
        self.right as i64 - self.left as i64
    }

    pub const fn length(&self) -> i64 {
        self.bottom as i64 - self.top as i64
    }

    pub const fn top_left_corner(&self) -> Coordinates {
        Coordinates::new(self.left, self.top)
    }

    pub const fn top_right_corner(&self) -> Coordinates {
        Coordinates::new(self.right.saturating_sub(1), self.top)
    }

    pub const fn bottom_left_corner(&self) -> Coordinates {
        Coordinates::new(self.left, self.bottom.saturating_sub(1))
    }

    pub const fn bottom_right_corner(&self) -> Coordinates {
        Coordinates::new(self.right.saturating_sub(1), self.bottom.saturating_sub(1))
    }

    pub fn corners(&self) -> [Coordinates; 4] {
        [
            self.top_left_corner(),
            self.top_right_corner(),
            self.bottom_left_corner(),
            self.bottom_right_corner(),
        ]
    }

    #[inline]
    pub const fn contains(&self, c: Coordinates) -> bool {
        self.left <= c.x && c.x < self.right && self.top <= c.y && c.y < self.bottom
    }

    /// True if `other` lies entirely inside `self` on all four sides.
    pub const fn encloses(&self, other: &Boundaries) -> bool {
        other.top >= self.top
            && other.bottom <= self.bottom
            && other.left >= self.left
            && other.right <= self.right
    }
}

impl fmt::Display for Boundaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{})x[{},{})",
            self.left, self.right, self.top, self.bottom
        )
    }
}
