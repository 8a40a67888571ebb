//! Batch conversion command
//!
//! This module implements the command converting a whole file
//! of coordinate pairs.

use clap::ArgMatches;
use log::info;

use crate::api::LocalGrid;
use crate::batch::Direction;
use crate::commands::command_traits::Command;
use crate::errors::{GridError, GridResult};

/// Command for converting a file of coordinate pairs
pub struct BatchCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Path to the output file
    output_file: String,
    /// Conversion direction
    direction: Direction,
    grid: &'a LocalGrid,
}

impl<'a> BatchCommand<'a> {
    /// Create a new batch command
    ///
    /// # Arguments
    /// * `args` - Argument matches of the `batch` subcommand
    /// * `grid` - Converter facade
    ///
    /// # Returns
    /// A new BatchCommand instance or an error
    pub fn new(args: &ArgMatches, grid: &'a LocalGrid) -> GridResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| GridError::GenericError("Missing input file".to_string()))?
            .clone();

        let output_file = args.get_one::<String>("output")
            .ok_or_else(|| GridError::GenericError("Missing output file".to_string()))?
            .clone();

        let direction = match args.get_one::<String>("direction") {
            Some(name) => name.parse::<Direction>()?,
            None => Direction::ToPlanar,
        };

        Ok(BatchCommand {
            input_file,
            output_file,
            direction,
            grid,
        })
    }
}

impl<'a> Command for BatchCommand<'a> {
    fn execute(&self) -> GridResult<()> {
        info!("Batch converting {} to {} ({})", self.input_file, self.output_file, self.direction);

        let summary = self.grid.convert_file(self.direction, &self.input_file, &self.output_file)?;

        info!("Batch conversion successful: {} pairs written", summary.converted);
        Ok(())
    }
}
