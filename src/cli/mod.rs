//! Command-line interface definitions using clap.

mod commands;
pub mod handlers;

pub use commands::{Cli, Commands, SeedArgs};
