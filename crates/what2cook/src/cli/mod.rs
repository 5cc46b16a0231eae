//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the what2cook binary.

mod commands;
mod display;
mod generate;
mod saved;
mod share;
mod shopping;

pub use commands::{Cli, Commands, GenerateArgs, SavedCommand};
pub use display::error_message;
pub use generate::handle_generate;
pub use saved::handle_saved_command;
pub use share::handle_share;
pub use shopping::handle_shopping_list;
