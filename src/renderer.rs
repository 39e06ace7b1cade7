use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::{
    GridSize, Theme, CELL_HEIGHT, CELL_WIDTH, GLYPH_POINTER, GLYPH_SNAKE_BODY,
    GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_LEFT, GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP,
    GLYPH_SNAKE_TAIL,
};
use crate::food::FoodKind;
use crate::game::{GameState, GameStatus};
use crate::input::Direction;
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::{
    render_game_over_menu, render_pause_menu, render_start_menu, render_victory_menu,
};

/// Per-frame presentation settings that are not part of the game state.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
    pub theme: &'a Theme,
    /// Use ASCII food glyphs instead of emoji.
    pub plain_glyphs: bool,
    /// Grid cell under the pointer, if known.
    pub pointer: Option<Position>,
}

/// Renders the full game frame from immutable state.
///
/// Returns the grid rectangle used for mapping pointer coordinates, or `None`
/// when the terminal is too small to show the board.
pub fn render(frame: &mut Frame<'_>, state: &GameState, options: RenderOptions<'_>) -> Option<Rect> {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, options.theme);

    let Some(board) = board_area(play_area, state.bounds()) else {
        frame.render_widget(
            Paragraph::new("Terminal too small; enlarge the window")
                .alignment(Alignment::Center),
            play_area,
        );
        return None;
    };

    let theme = options.theme;
    let block = Block::bordered()
        .border_style(Style::new().fg(theme.border_fg))
        .style(Style::new().bg(theme.play_bg));

    let inner = block.inner(board);
    frame.render_widget(block, board);

    if state.status() == GameStatus::Playing {
        render_pointer(frame, inner, state.bounds(), options);
    }
    render_food(frame, inner, state, options.plain_glyphs);
    render_snake(frame, inner, state, theme);

    if state.is_start_screen() {
        render_start_menu(frame, board, theme);
        return Some(inner);
    }

    match state.status() {
        GameStatus::Paused => render_pause_menu(frame, board),
        GameStatus::GameOver => {
            render_game_over_menu(frame, board, state.score(), state.death_reason());
        }
        GameStatus::Victory => render_victory_menu(frame, board, state.score()),
        GameStatus::Playing => {}
    }

    Some(inner)
}

/// Centers a bordered board of the grid's size inside `area`.
fn board_area(area: Rect, bounds: GridSize) -> Option<Rect> {
    let width = bounds.width.checked_mul(CELL_WIDTH)?.checked_add(2)?;
    let height = bounds.height.checked_mul(CELL_HEIGHT)?.checked_add(2)?;
    if width > area.width || height > area.height {
        return None;
    }

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [board] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);

    Some(board)
}

fn render_pointer(frame: &mut Frame<'_>, inner: Rect, bounds: GridSize, options: RenderOptions<'_>) {
    let Some(pointer) = options.pointer else {
        return;
    };
    let Some((x, y)) = logical_to_terminal(inner, bounds, pointer) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_POINTER, Style::new().fg(options.theme.pointer));
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, plain_glyphs: bool) {
    let food = state.food();
    let Some((x, y)) = logical_to_terminal(inner, state.bounds(), food.position) else {
        return;
    };

    let glyph = food_glyph(food.kind, plain_glyphs);
    frame
        .buffer_mut()
        .set_string(x, y, glyph, Style::new().fg(food.kind.color()));
}

/// Emoji glyph when it fills exactly one cell, ASCII otherwise.
fn food_glyph(kind: FoodKind, plain_glyphs: bool) -> &'static str {
    let glyph = kind.glyph();
    if plain_glyphs || glyph.width() != usize::from(CELL_WIDTH) {
        kind.plain_glyph()
    } else {
        glyph
    }
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let snake = state.snake();
    let head = snake.head();
    let tail = snake.tail();
    let many = snake.len() > 1;

    let buffer = frame.buffer_mut();
    for segment in snake.segments() {
        let Some((x, y)) = logical_to_terminal(inner, state.bounds(), *segment) else {
            continue;
        };

        if *segment == head {
            buffer.set_string(
                x,
                y,
                head_glyph(snake.direction()),
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
        } else if many && *segment == tail {
            buffer.set_string(x, y, GLYPH_SNAKE_TAIL, Style::new().fg(theme.snake_tail));
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
        }
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(position.y).ok()?.checked_mul(CELL_HEIGHT)?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
