use std::fs::File;
use std::io;
use std::panic;
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use log::{error, info};
use pointer_snake::config::{
    tick_interval, GridSize, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_TICK_RATE_HZ,
    FRAME_POLL_INTERVAL, THEME,
};
use pointer_snake::game::GameState;
use pointer_snake::input::{GameInput, InputHandler, PointerPosition};
use pointer_snake::renderer::{self, RenderOptions};
use pointer_snake::terminal_runtime::{cleanup_terminal_best_effort, TerminalSession};
use ratatui::layout::Rect;
use simplelog::{Config, LevelFilter, WriteLogger};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Board width in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    width: u16,

    /// Board height in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    height: u16,

    /// Simulation ticks per second (1-60).
    #[arg(long = "tick-rate", default_value_t = DEFAULT_TICK_RATE_HZ)]
    tick_rate: u32,

    /// Seed for a reproducible food sequence.
    #[arg(long)]
    seed: Option<u64>,

    /// Draw food with ASCII glyphs instead of emoji.
    #[arg(long = "plain-glyphs")]
    plain_glyphs: bool,

    /// Write a log to this file; the terminal itself is in raw mode.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let bounds = GridSize {
        width: cli.width,
        height: cli.height,
    };
    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(bounds, seed),
        None => GameState::new(bounds),
    }
    .map_err(io::Error::other)?;

    install_panic_hook();

    let result = run(&cli, state);
    if let Err(error) = &result {
        error!("game loop failed: {error}");
    }
    result
}

fn init_logging(cli: &Cli) -> io::Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };

    let file = File::create(path)?;
    WriteLogger::init(cli.log_level.into(), Config::default(), file)
        .map_err(io::Error::other)
}

fn run(cli: &Cli, mut state: GameState) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let interval = tick_interval(cli.tick_rate);
    info!(
        "starting {}x{} board at {} ms per tick",
        state.bounds().width,
        state.bounds().height,
        interval.as_millis()
    );

    state.show_start_screen();
    let mut pointer: Option<PointerPosition> = None;
    let mut grid_area: Option<Rect> = None;
    let mut last_tick = Instant::now();

    loop {
        session.terminal_mut().draw(|frame| {
            let target = pointer.zip(grid_area).map(|(p, area)| p.to_cell(area));
            grid_area = renderer::render(
                frame,
                &state,
                RenderOptions {
                    theme: &THEME,
                    plain_glyphs: cli.plain_glyphs,
                    pointer: target,
                },
            );
        })?;

        let timeout = interval
            .saturating_sub(last_tick.elapsed())
            .min(FRAME_POLL_INTERVAL);
        if let Some(game_input) = input.poll_input(timeout)? {
            match game_input {
                GameInput::Quit => break,
                GameInput::Pointer(position) => pointer = Some(position),
                GameInput::Direction(_) => {
                    // Keys take over until the pointer moves again.
                    pointer = None;
                    state.apply_input(game_input);
                }
                other => state.handle_command(other).map_err(io::Error::other)?,
            }
        }

        if last_tick.elapsed() >= interval {
            state.update(grid_area, pointer);
            last_tick = Instant::now();
        }
    }

    info!("quit with score {}", state.score());
    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = cleanup_terminal_best_effort();
        default_hook(panic_info);
    }));
}
