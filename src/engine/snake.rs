use super::direction::Direction;
use super::grid::Point;
use std::collections::VecDeque;

/// The snake: where its segments are, where it is going, and how much it
/// still has to grow
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Snake {
    /// The position of the snake's head
    pub(crate) head: Point,

    /// The positions of the rest of the snake's segments, nearest the head
    /// first
    pub(crate) body: VecDeque<Point>,

    /// The direction in which the snake will move on the next tick
    pub(crate) direction: Direction,

    /// The direction in which the snake last moved.  Turns are checked
    /// against this rather than `direction` so that two quick turns between
    /// ticks can't reverse the snake into its own neck.
    pub(crate) heading: Direction,

    /// Number of upcoming moves on which the tail stays put
    pub(crate) growth: usize,
}

impl Snake {
    /// Create a snake `length` segments long lying in a horizontal line with
    /// its head at `head`, facing right with its tail trailing off to the
    /// left.
    ///
    /// `length` must be at least 1.
    pub(crate) fn new(head: Point, length: usize) -> Snake {
        let body = std::iter::successors(Some(head), |&p| Some(p.offset(Direction::Left.delta())))
            .skip(1)
            .take(length.saturating_sub(1))
            .collect();
        Snake {
            head,
            body,
            direction: Direction::Right,
            heading: Direction::Right,
            growth: 0,
        }
    }

    /// Return the position of the snake's head
    pub fn head(&self) -> Point {
        self.head
    }

    /// Return the position of the snake's last segment.  For a snake of
    /// length 1, this is the head.
    pub fn tail(&self) -> Point {
        self.body.back().copied().unwrap_or(self.head)
    }

    /// Iterate over the positions of all of the snake's segments, head first
    pub fn segments(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    /// Return the number of segments in the snake
    pub fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// A snake always has a head, so this is always `false`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The direction the snake will move in on the next tick
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The number of upcoming ticks on which the snake will grow
    pub fn pending_growth(&self) -> usize {
        self.growth
    }

    /// Does any segment of the snake lie on `p`?
    pub fn occupies(&self, p: Point) -> bool {
        self.head == p || self.body.contains(&p)
    }

    /// Change the snake's direction to `direction`, unless that would reverse
    /// the way it is currently moving, in which case nothing happens.
    pub(crate) fn turn(&mut self, direction: Direction) {
        if !self.heading.is_opposite(direction) {
            self.direction = direction;
        }
    }

    /// Iterate over the cells the head may not move into on the next tick.
    /// The tail is exempt unless the snake is about to grow, as otherwise it
    /// leaves its cell during the same move.
    pub(crate) fn forbidden(&self) -> impl Iterator<Item = Point> + '_ {
        let qty = if self.growth > 0 {
            self.len()
        } else {
            self.len() - 1
        };
        self.segments().take(qty)
    }

    /// Would moving the head to `p` make the snake run into itself?
    pub(crate) fn collides(&self, p: Point) -> bool {
        self.forbidden().any(|q| q == p)
    }

    /// Move the head to `pos`, dragging the body along behind it.  If growth
    /// is pending, the tail stays where it is and the snake gets one segment
    /// longer.
    pub(crate) fn advance(&mut self, pos: Point) {
        self.body.push_front(self.head);
        self.head = pos;
        self.heading = self.direction;
        if self.growth > 0 {
            self.growth -= 1;
        } else {
            let _ = self.body.pop_back();
        }
    }

    /// Extend the snake by one segment over the coming moves in response to
    /// eating food
    pub(crate) fn grow(&mut self) {
        self.growth += 1;
    }
}
