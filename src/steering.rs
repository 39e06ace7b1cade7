//! Pointer-follow steering.
//!
//! The snake turns towards the grid cell under the pointer along whichever
//! axis has the larger offset. Vertical wins ties, and a turn that would
//! reverse the snake onto its own neck is ignored for that tick.

use std::cmp::Ordering;

use crate::input::{direction_change_is_valid, Direction};
use crate::snake::Position;

/// Picks the heading that moves `head` towards `target`.
#[must_use]
pub fn resolve_direction(head: Position, current: Direction, target: Position) -> Direction {
    let dx = target.x - head.x;
    let dy = target.y - head.y;

    let wanted = if dx.abs() > dy.abs() {
        match dx.cmp(&0) {
            Ordering::Greater => Some(Direction::Right),
            Ordering::Less => Some(Direction::Left),
            Ordering::Equal => None,
        }
    } else {
        match dy.cmp(&0) {
            Ordering::Greater => Some(Direction::Down),
            Ordering::Less => Some(Direction::Up),
            Ordering::Equal => None,
        }
    };

    match wanted {
        Some(next) if direction_change_is_valid(current, next) => next,
        _ => current,
    }
}
