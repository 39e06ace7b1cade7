use thiserror::Error;

/// Errors reported by the game core.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum GameError {
    /// Every cell is covered by the snake, so no food can be placed.
    #[error("no free cell left for food on a {width}x{height} board")]
    FoodSpawnExhausted { width: u16, height: u16 },

    /// The board cannot hold a snake and a food item.
    #[error("grid {width}x{height} is too small to play on")]
    InvalidGrid { width: u16, height: u16 },
}
