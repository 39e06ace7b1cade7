use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use ratatui::style::Color;

use crate::config::GridSize;
use crate::error::GameError;
use crate::snake::{Position, Snake};

/// Decorative food type. Has no effect on scoring or movement.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum FoodKind {
    Apple,
    Carrot,
    Grapes,
    Banana,
    Cherry,
    Orange,
}

impl FoodKind {
    /// Every kind, in display order.
    pub const ALL: [Self; 6] = [
        Self::Apple,
        Self::Carrot,
        Self::Grapes,
        Self::Banana,
        Self::Cherry,
        Self::Orange,
    ];

    /// Picks a kind uniformly at random.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL.choose(rng).copied().unwrap_or(Self::Apple)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Apple => "apple",
            Self::Carrot => "carrot",
            Self::Grapes => "grapes",
            Self::Banana => "banana",
            Self::Cherry => "cherry",
            Self::Orange => "orange",
        }
    }

    /// Emoji glyph; two columns wide on most terminals.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Apple => "🍎",
            Self::Carrot => "🥕",
            Self::Grapes => "🍇",
            Self::Banana => "🍌",
            Self::Cherry => "🍒",
            Self::Orange => "🍊",
        }
    }

    /// ASCII glyph for terminals without emoji support.
    #[must_use]
    pub fn plain_glyph(self) -> &'static str {
        match self {
            Self::Apple => "()",
            Self::Carrot => "\\/",
            Self::Grapes => "oo",
            Self::Banana => "((",
            Self::Cherry => "%%",
            Self::Orange => "@@",
        }
    }

    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::Apple => Color::Rgb(255, 69, 0),
            Self::Carrot => Color::Rgb(255, 140, 0),
            Self::Grapes => Color::Rgb(128, 0, 128),
            Self::Banana => Color::Rgb(255, 255, 0),
            Self::Cherry => Color::Rgb(220, 20, 60),
            Self::Orange => Color::Rgb(255, 165, 0),
        }
    }
}

/// Food item currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
    pub kind: FoodKind,
}

impl Food {
    #[must_use]
    pub fn new(position: Position, kind: FoodKind) -> Self {
        Self { position, kind }
    }

    /// Spawns food of a random kind in an unoccupied cell.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        bounds: GridSize,
        snake: &Snake,
    ) -> Result<Self, GameError> {
        let position = spawn_position(rng, bounds, snake)?;
        let kind = FoodKind::random(rng);
        debug!(
            "spawned {} at ({}, {})",
            kind.name(),
            position.x,
            position.y
        );

        Ok(Self::new(position, kind))
    }
}

/// Picks a free cell uniformly among all cells not covered by the snake.
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Result<Position, GameError> {
    let candidates: Vec<Position> = (0..i32::from(bounds.height))
        .flat_map(|y| (0..i32::from(bounds.width)).map(move |x| Position { x, y }))
        .filter(|position| !snake.occupies(*position))
        .collect();

    candidates
        .choose(rng)
        .copied()
        .ok_or(GameError::FoodSpawnExhausted {
            width: bounds.width,
            height: bounds.height,
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::GridSize;
    use crate::error::GameError;
    use crate::input::Direction;

    use super::{spawn_position, Food, FoodKind};
    use crate::snake::{Position, Snake};

    #[test]
    fn food_spawn_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::from_segments(
            vec![
                Position { x: 0, y: 0 },
                Position { x: 1, y: 0 },
                Position { x: 2, y: 0 },
            ],
            Direction::Left,
        );
        let bounds = GridSize {
            width: 8,
            height: 6,
        };

        for _ in 0..100 {
            let food = Food::spawn(&mut rng, bounds, &snake).expect("board has free cells");
            assert!(!snake.occupies(food.position));
            assert!(food.position.is_within_bounds(bounds));
        }
    }

    #[test]
    fn last_free_cell_is_always_chosen() {
        let mut rng = StdRng::seed_from_u64(11);
        let snake = Snake::from_segments(
            vec![
                Position { x: 0, y: 0 },
                Position { x: 1, y: 0 },
                Position { x: 1, y: 1 },
            ],
            Direction::Down,
        );
        let bounds = GridSize {
            width: 2,
            height: 2,
        };

        for _ in 0..20 {
            let position = spawn_position(&mut rng, bounds, &snake).expect("one cell is free");
            assert_eq!(position, Position { x: 0, y: 1 });
        }
    }

    #[test]
    fn full_board_reports_exhaustion() {
        let mut rng = StdRng::seed_from_u64(3);
        let snake = Snake::from_segments(
            vec![Position { x: 0, y: 0 }, Position { x: 1, y: 0 }],
            Direction::Left,
        );
        let bounds = GridSize {
            width: 2,
            height: 1,
        };

        assert_eq!(
            Food::spawn(&mut rng, bounds, &snake),
            Err(GameError::FoodSpawnExhausted {
                width: 2,
                height: 1
            })
        );
    }

    #[test]
    fn every_kind_eventually_appears() {
        let mut rng = StdRng::seed_from_u64(99);
        let seen: HashSet<FoodKind> = (0..500).map(|_| FoodKind::random(&mut rng)).collect();

        assert_eq!(seen.len(), FoodKind::ALL.len());
    }

    #[test]
    fn plain_glyphs_fill_two_columns() {
        for kind in FoodKind::ALL {
            assert_eq!(kind.plain_glyph().len(), 2, "{}", kind.name());
        }
    }
}
