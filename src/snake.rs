use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring cell one step towards `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Snake body (head first) and heading.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    moved_direction: Direction,
}

impl Snake {
    /// Creates a one-cell snake at `start` with the provided direction.
    #[must_use]
    pub fn new(start: Position, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self {
            body,
            direction,
            moved_direction: direction,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// An empty segment list yields a snake at the origin so the body is never
    /// empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        if segments.is_empty() {
            return Self::new(Position { x: 0, y: 0 }, direction);
        }

        Self {
            body: VecDeque::from(segments),
            direction,
            moved_direction: direction,
        }
    }

    /// Sets the heading used for the next head position.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Returns the head position for the next movement tick.
    #[must_use]
    pub fn next_head_position(&self) -> Position {
        self.head().step(self.direction)
    }

    /// Pushes `head` and drops the tail unless `grow` is set.
    pub fn advance(&mut self, head: Position, grow: bool) {
        self.moved_direction = self.direction;
        self.body.push_front(head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        self.body.front().copied().unwrap_or(Position { x: 0, y: 0 })
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Position {
        self.body.back().copied().unwrap_or_else(|| self.head())
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the heading of the last completed move.
    ///
    /// Differs from [`Snake::direction`] while a turn is requested but not yet
    /// taken; reversal checks must use this one.
    #[must_use]
    pub fn moved_direction(&self) -> Direction {
        self.moved_direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    #[test]
    fn bounds_check_is_half_open() {
        let bounds = GridSize {
            width: 30,
            height: 20,
        };

        assert!(Position { x: 0, y: 0 }.is_within_bounds(bounds));
        assert!(Position { x: 29, y: 19 }.is_within_bounds(bounds));
        assert!(!Position { x: 30, y: 5 }.is_within_bounds(bounds));
        assert!(!Position { x: 5, y: -1 }.is_within_bounds(bounds));
    }

    #[test]
    fn snake_advances_one_cell() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);

        let next = snake.next_head_position();
        snake.advance(next, false);

        assert_eq!(snake.head(), Position { x: 6, y: 5 });
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn growth_keeps_previous_tail() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Down);

        let next = snake.next_head_position();
        snake.advance(next, true);

        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Position { x: 5, y: 6 });
        assert_eq!(snake.tail(), Position { x: 5, y: 5 });
    }

    #[test]
    fn next_head_follows_direction_change() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);
        snake.set_direction(Direction::Up);

        assert_eq!(snake.next_head_position(), Position { x: 5, y: 4 });
        assert_eq!(snake.direction(), Direction::Up);
        assert_eq!(snake.moved_direction(), Direction::Right);

        let next = snake.next_head_position();
        snake.advance(next, false);
        assert_eq!(snake.moved_direction(), Direction::Up);
    }

    #[test]
    fn empty_segments_fall_back_to_single_cell() {
        let snake = Snake::from_segments(Vec::new(), Direction::Left);

        assert_eq!(snake.len(), 1);
        assert!(!snake.is_empty());
    }
}
