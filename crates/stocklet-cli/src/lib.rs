mod args;
mod commands;
pub mod config;
mod tui;

pub use args::Cli;
pub use commands::run;
