use std::time::Duration;

use ratatui::style::Color;

use crate::error::GameError;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Rejects boards that cannot hold both a snake and a food item.
    pub fn validate(self) -> Result<Self, GameError> {
        if self.width == 0 || self.height == 0 || self.total_cells() < 2 {
            return Err(GameError::InvalidGrid {
                width: self.width,
                height: self.height,
            });
        }

        Ok(self)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
        }
    }
}

/// Colors applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub pointer: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_score: Color,
    pub hud_muted: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Green snake on a dark purple field.
pub const THEME: Theme = Theme {
    snake_head: Color::Rgb(34, 139, 34),
    snake_body: Color::Rgb(50, 205, 50),
    snake_tail: Color::Rgb(0, 100, 0),
    pointer: Color::White,
    play_bg: Color::Rgb(40, 0, 70),
    border_fg: Color::Rgb(199, 21, 133),
    hud_score: Color::White,
    hud_muted: Color::DarkGray,
    menu_title: Color::Rgb(255, 182, 193),
    menu_footer: Color::DarkGray,
};

/// Default board width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 30;

/// Default board height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Terminal columns per grid cell; two columns keep cells roughly square.
pub const CELL_WIDTH: u16 = 2;

/// Terminal rows per grid cell.
pub const CELL_HEIGHT: u16 = 1;

/// Default simulation rate in ticks per second.
pub const DEFAULT_TICK_RATE_HZ: u32 = 10;

/// Accepted range for the `--tick-rate` flag.
pub const MIN_TICK_RATE_HZ: u32 = 1;
pub const MAX_TICK_RATE_HZ: u32 = 60;

/// Score granted for every food item eaten.
pub const POINTS_PER_FOOD: u32 = 10;

/// Delay between input polls inside one tick.
pub const FRAME_POLL_INTERVAL: Duration = Duration::from_millis(16);

pub const GLYPH_SNAKE_HEAD_UP: &str = "▲▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶▶";
pub const GLYPH_SNAKE_BODY: &str = "██";
pub const GLYPH_SNAKE_TAIL: &str = "▓▓";
pub const GLYPH_POINTER: &str = "[]";

/// Returns the tick interval for a rate in Hz, clamped to the accepted range.
#[must_use]
pub fn tick_interval(tick_rate_hz: u32) -> Duration {
    let hz = tick_rate_hz.clamp(MIN_TICK_RATE_HZ, MAX_TICK_RATE_HZ);
    Duration::from_millis(1000 / u64::from(hz))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{tick_interval, GridSize, DEFAULT_TICK_RATE_HZ};
    use crate::error::GameError;

    #[test]
    fn default_tick_rate_is_ten_hertz() {
        assert_eq!(tick_interval(DEFAULT_TICK_RATE_HZ), Duration::from_millis(100));
    }

    #[test]
    fn tick_rate_is_clamped() {
        assert_eq!(tick_interval(0), Duration::from_millis(1000));
        assert_eq!(tick_interval(1000), tick_interval(60));
    }

    #[test]
    fn degenerate_grids_are_rejected() {
        let one_cell = GridSize {
            width: 1,
            height: 1,
        };
        assert_eq!(
            one_cell.validate(),
            Err(GameError::InvalidGrid {
                width: 1,
                height: 1
            })
        );

        let flat = GridSize {
            width: 0,
            height: 8,
        };
        assert!(flat.validate().is_err());

        let strip = GridSize {
            width: 2,
            height: 1,
        };
        assert_eq!(strip.validate(), Ok(strip));
    }
}
