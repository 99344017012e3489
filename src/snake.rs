use std::collections::VecDeque;
use std::fmt;

use crate::grid::{self, Direction, Position};

const INITIAL_BODY: [Position; 3] = [
    Position::new(5, 10),
    Position::new(4, 10),
    Position::new(3, 10),
];
const INITIAL_DIRECTION: Direction = Direction::Right;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfBite,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collision::Wall => write!(f, "hit the wall"),
            Collision::SelfBite => write!(f, "bit itself"),
        }
    }
}

/// The player's snake. The head is the front of `body`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    pending_growth: bool,
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

impl Snake {
    /// Three segments at the left of row 10, heading right.
    pub fn new() -> Self {
        Self::from_segments(INITIAL_BODY.to_vec(), INITIAL_DIRECTION)
    }

    /// Builds a snake from explicit segments, head first.
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty.
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "a snake needs at least one segment");
        Self {
            body: VecDeque::from(segments),
            direction,
            pending_growth: false,
        }
    }

    pub fn head(&self) -> Position {
        *self.body.front().expect("snake body is never empty")
    }

    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_growth(&self) -> bool {
        self.pending_growth
    }

    pub fn contains(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Steps the head one cell along `direction`. The tail is dropped unless
    /// growth was requested since the previous move.
    pub fn move_forward(&mut self) {
        let new_head = self.head() + self.direction;
        if self.pending_growth {
            self.pending_growth = false;
        } else {
            self.body.pop_back();
        }
        self.body.push_front(new_head);
    }

    /// Lengthens the snake by one on the next move.
    pub fn grow(&mut self) {
        self.pending_growth = true;
    }

    /// Turns the snake. Reversing straight back is ignored.
    pub fn set_direction(&mut self, direction: Direction) {
        if !direction.is_opposite(self.direction) {
            self.direction = direction;
        }
    }

    pub fn collision(&self) -> Option<Collision> {
        let head = self.head();
        if !grid::in_bounds(head) {
            return Some(Collision::Wall);
        }
        if self.body.iter().skip(1).any(|&segment| segment == head) {
            return Some(Collision::SelfBite);
        }
        None
    }

    pub fn is_colliding(&self) -> bool {
        self.collision().is_some()
    }
}
