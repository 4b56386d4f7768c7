use std::collections::VecDeque;

use crate::consts::{GRID_SIZE, START_BODY};
use crate::{Coords, GridInt};
use Direction::*;
use MoveResult::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub const ALL: [Direction; 4] = [Up, Down, Left, Right];

    /// Unit step on the board. Y grows downwards.
    pub fn delta(self) -> (GridInt, GridInt) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveResult {
    Moved { new_head: Coords, old_head: Coords, old_tail: Option<Coords> },
    Crashed
}

/// Answers whether `pos` is covered by any of the given segments.
pub fn is_occupied<'a, I>(pos: Coords, body: I) -> bool
where
    I: IntoIterator<Item = &'a Coords>,
{
    body.into_iter().any(|segment| *segment == pos)
}

/// Cell reached by stepping once from `pos`. The board wraps on both axes.
pub fn wrapped_step(pos: Coords, direction: Direction) -> Coords {
    let (dx, dy) = direction.delta();
    ((pos.0 + dx).rem_euclid(GRID_SIZE), (pos.1 + dy).rem_euclid(GRID_SIZE))
}

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Coords>,
}

impl Snake {
    /// The three-cell snake every game starts with, heading right.
    pub fn new() -> Self {
        Snake { body: START_BODY.iter().copied().collect() }
    }

    /// Builds a snake from its segments, head first. Returns `None` for an empty body.
    pub fn from_segments<I: IntoIterator<Item = Coords>>(segments: I) -> Option<Self> {
        let body: VecDeque<Coords> = segments.into_iter().collect();
        if body.is_empty() {
            None
        } else {
            Some(Snake { body })
        }
    }

    pub fn body(&self) -> &VecDeque<Coords> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn head(&self) -> Coords {
        self.body[0]
    }

    pub fn tail(&self) -> Coords {
        self.body[self.body.len() - 1]
    }

    pub fn occupies(&self, pos: Coords) -> bool {
        is_occupied(pos, &self.body)
    }

    pub fn next_head(&self, direction: Direction) -> Coords {
        wrapped_step(self.head(), direction)
    }

    /// Moves the head one cell in `direction`, growing by one segment if `grow` is set.
    ///
    /// Every current segment counts as an obstacle, the tail included, even though
    /// the tail would be vacated by this same move. A crash leaves the body untouched.
    pub fn move_step(&mut self, direction: Direction, grow: bool) -> MoveResult {
        let old_head = self.head();
        let new_head = self.next_head(direction);

        if self.occupies(new_head) {
            return Crashed;
        }

        self.body.push_front(new_head);

        if grow {
            Moved { new_head, old_head, old_tail: None }
        } else {
            let old_tail = self.body.pop_back();
            Moved { new_head, old_head, old_tail }
        }
    }
}

impl Default for Snake {
    fn default() -> Self {
        Snake::new()
    }
}
