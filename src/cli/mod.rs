//! CLI module - argument parsing, interactive menu and command dispatch

pub mod args;
pub mod commands;
pub mod console;
pub mod logging;
pub mod menu;
pub mod prompts;
pub mod table;
pub mod viewer;

pub use args::{Cli, Commands, GlobalOpts, OutputFormat};
