//! CLI module for shopdb
//!
//! Provides command-line access to the shop's record files:
//! - init: Create the data directory
//! - item, category, order, user: Record management
//! - login: Credential check
//! - next-id: Identifier preview

mod args;
mod commands;
mod errors;
mod io;

pub use args::{CategoryAction, Cli, Command, ItemAction, OrderAction, UserAction};
pub use commands::{execute, init, login, next_id, run, run_command, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_error, write_response};
