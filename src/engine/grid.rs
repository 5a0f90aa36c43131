use super::direction::Direction;
use rand::Rng;
use std::fmt;

/// A cell on the board.  `(0, 0)` is the bottom-left corner.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    /// Return the point `(dx, dy)` away from `self`, with no regard for any
    /// board edges
    pub(crate) fn offset(self, (dx, dy): (i32, i32)) -> Point {
        Point {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The extent of the board and what happens at its edges
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Bounds {
    pub(crate) width: u16,
    pub(crate) height: u16,
    pub(crate) wrap: bool,
}

impl Bounds {
    pub(crate) fn contains(self, p: Point) -> bool {
        (0..i32::from(self.width)).contains(&p.x) && (0..i32::from(self.height)).contains(&p.y)
    }

    /// Return the cell one step from `pos` in `direction`.  When wrapping,
    /// the result is reduced modulo the board's size; otherwise, `None` is
    /// returned if the step would leave the board.
    pub(crate) fn step(self, pos: Point, direction: Direction) -> Option<Point> {
        let next = pos.offset(direction.delta());
        if self.wrap {
            Some(Point {
                x: next.x.rem_euclid(i32::from(self.width)),
                y: next.y.rem_euclid(i32::from(self.height)),
            })
        } else {
            self.contains(next).then_some(next)
        }
    }

    /// Pick a cell on the board uniformly at random
    pub(crate) fn random_point<R: Rng>(self, rng: &mut R) -> Point {
        Point {
            x: rng.random_range(0..i32::from(self.width)),
            y: rng.random_range(0..i32::from(self.height)),
        }
    }
}
