use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::{GameState, GameStatus};

const HUD_MARGIN_X: u16 = 1;
const SEPARATOR: &str = " │ ";

/// Renders the two-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) -> Rect {
    let [play_area, score_area, hint_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let score_area = inset_horizontal(score_area, HUD_MARGIN_X);
    let hint_area = inset_horizontal(hint_area, HUD_MARGIN_X);

    frame.render_widget(
        Paragraph::new(score_line(
            state.snake.len(),
            state.score(),
            usize::from(score_area.width),
            theme,
        ))
        .alignment(Alignment::Left),
        score_area,
    );

    let hint = hint_text(state.status());
    let dimensions = format!("{}x{}", state.bounds().width, state.bounds().height);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(hint, Style::default().fg(theme.hud_muted)),
            Span::raw(SEPARATOR),
            Span::styled(dimensions, Style::default().fg(theme.hud_muted)),
        ]))
        .alignment(Alignment::Left),
        hint_area,
    );

    play_area
}

fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    let total_margin = margin.saturating_mul(2);
    Rect {
        x: area.x.saturating_add(margin),
        y: area.y,
        width: area.width.saturating_sub(total_margin),
        height: area.height,
    }
}

fn score_line(length: usize, score: u32, available_width: usize, theme: &Theme) -> Line<'static> {
    let compact = score_line_width(length, score, false) > available_width;
    let (length_label, score_label) = if compact {
        ("L", "S")
    } else {
        ("Length", "Score")
    };
    let value_style = Style::default().fg(theme.hud_score);

    Line::from(vec![
        Span::raw(format!("{score_label}: ")),
        Span::styled(score.to_string(), value_style),
        Span::raw(SEPARATOR),
        Span::raw(format!("{length_label}: ")),
        Span::styled(length.to_string(), value_style),
    ])
}

fn score_line_width(length: usize, score: u32, compact: bool) -> usize {
    let (length_label, score_label) = if compact {
        ("L", "S")
    } else {
        ("Length", "Score")
    };
    let text = format!("{score_label}: {score}{SEPARATOR}{length_label}: {length}");
    text.width()
}

fn hint_text(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Playing => "Move the pointer to steer",
        GameStatus::Paused => "Paused",
        GameStatus::GameOver | GameStatus::Victory => "[C] play again  [Q] quit",
    }
}
