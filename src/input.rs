use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::config::{CELL_HEIGHT, CELL_WIDTH};
use crate::snake::Position;

/// Canonical movement directions for the snake.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit vector `(dx, dy)` in grid coordinates; y grows downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Pointer location in terminal cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PointerPosition {
    pub column: u16,
    pub row: u16,
}

impl PointerPosition {
    /// Maps the pointer into grid coordinates relative to the play area.
    ///
    /// Uses floor division so a pointer left of or above the play area lands
    /// on a negative cell instead of snapping to the border row or column.
    #[must_use]
    pub fn to_cell(self, play_area: Rect) -> Position {
        let dx = i32::from(self.column) - i32::from(play_area.x);
        let dy = i32::from(self.row) - i32::from(play_area.y);

        Position {
            x: dx.div_euclid(i32::from(CELL_WIDTH)),
            y: dy.div_euclid(i32::from(CELL_HEIGHT)),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Pointer(PointerPosition),
    Pause,
    Restart,
    Quit,
    Confirm,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Reads crossterm events and translates them into [`GameInput`].
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Polls for one pending event, waiting at most `timeout`.
    pub fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<GameInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        Ok(match event::read()? {
            Event::Key(key) => map_key_event(key),
            Event::Mouse(mouse) => map_mouse_event(mouse),
            _ => None,
        })
    }
}

fn map_key_event(key: KeyEvent) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Char('p' | 'P') => Some(GameInput::Pause),
        KeyCode::Char('c' | 'C' | 'r' | 'R') => Some(GameInput::Restart),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(GameInput::Quit),
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameInput::Confirm),
        _ => None,
    }
}

fn map_mouse_event(mouse: MouseEvent) -> Option<GameInput> {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) | MouseEventKind::Down(_) => {
            Some(GameInput::Pointer(PointerPosition {
                column: mouse.column,
                row: mouse.row,
            }))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use ratatui::layout::Rect;

    use super::{
        direction_change_is_valid, map_key_event, map_mouse_event, Direction, GameInput,
        PointerPosition,
    };
    use crate::snake::Position;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn deltas_are_unit_vectors() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn direction_change_rejects_reverse() {
        assert!(!direction_change_is_valid(Direction::Up, Direction::Down));
        assert!(!direction_change_is_valid(
            Direction::Left,
            Direction::Right
        ));

        assert!(direction_change_is_valid(Direction::Up, Direction::Left));
        assert!(direction_change_is_valid(Direction::Up, Direction::Up));
    }

    #[test]
    fn pointer_maps_to_cells_relative_to_play_area() {
        let play_area = Rect::new(3, 2, 60, 20);

        let inside = PointerPosition { column: 8, row: 7 }.to_cell(play_area);
        assert_eq!(inside, Position { x: 2, y: 5 });

        let origin = PointerPosition { column: 3, row: 2 }.to_cell(play_area);
        assert_eq!(origin, Position { x: 0, y: 0 });

        let left_of_area = PointerPosition { column: 2, row: 0 }.to_cell(play_area);
        assert_eq!(left_of_area, Position { x: -1, y: -2 });
    }

    #[test]
    fn keys_map_to_game_inputs() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(
            map_key_event(key(KeyCode::Up)),
            Some(GameInput::Direction(Direction::Up))
        );
        assert_eq!(map_key_event(key(KeyCode::Char('c'))), Some(GameInput::Restart));
        assert_eq!(map_key_event(key(KeyCode::Char('q'))), Some(GameInput::Quit));
        assert_eq!(map_key_event(key(KeyCode::Enter)), Some(GameInput::Confirm));
        assert_eq!(
            map_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(GameInput::Quit)
        );
        assert_eq!(map_key_event(key(KeyCode::Tab)), None);
    }

    #[test]
    fn pointer_motion_is_reported() {
        assert_eq!(
            map_mouse_event(mouse(MouseEventKind::Moved, 10, 4)),
            Some(GameInput::Pointer(PointerPosition { column: 10, row: 4 }))
        );
        assert_eq!(
            map_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 1, 1)),
            Some(GameInput::Pointer(PointerPosition { column: 1, row: 1 }))
        );
        assert_eq!(map_mouse_event(mouse(MouseEventKind::ScrollUp, 1, 1)), None);
    }
}
