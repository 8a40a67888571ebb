//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod cli;
pub mod command_traits;
pub mod convert_command;
pub mod batch_command;

pub use cli::build_cli;
pub use command_traits::{Command, CommandFactory};
pub use convert_command::{ToGeographicCommand, ToPlanarCommand};
pub use batch_command::BatchCommand;

use clap::ArgMatches;
use crate::api::LocalGrid;
use crate::errors::{GridError, GridResult};

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the subcommand and creates the appropriate
/// command instance for execution.
#[derive(Default)]
pub struct LocalGridCommandFactory;

impl LocalGridCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        LocalGridCommandFactory
    }
}

impl<'a> CommandFactory<'a> for LocalGridCommandFactory {
    fn create_command(&self, args: &ArgMatches, grid: &'a LocalGrid) -> GridResult<Box<dyn Command + 'a>> {
        match args.subcommand() {
            Some(("to-planar", sub)) => Ok(Box::new(ToPlanarCommand::new(sub, grid)?)),
            Some(("to-geographic", sub)) => Ok(Box::new(ToGeographicCommand::new(sub, grid)?)),
            Some(("batch", sub)) => Ok(Box::new(BatchCommand::new(sub, grid)?)),
            Some((other, _)) => Err(GridError::GenericError(format!("Unknown command: {}", other))),
            None => Err(GridError::GenericError("No command given".to_string())),
        }
    }
}
