pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod steering;
pub mod terminal_runtime;
pub mod ui;
