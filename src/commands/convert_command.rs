//! Single pair conversion commands
//!
//! This module implements the commands converting one coordinate
//! pair given on the command line.

use clap::ArgMatches;
use log::info;

use crate::api::LocalGrid;
use crate::commands::command_traits::Command;
use crate::errors::{GridError, GridResult};
use crate::utils::coordinate_utils::parse_pair;

/// Command converting `lat,lon` to `easting,northing`
pub struct ToPlanarCommand<'a> {
    latitude: f64,
    longitude: f64,
    grid: &'a LocalGrid,
}

impl<'a> ToPlanarCommand<'a> {
    /// Create a new to-planar command from the subcommand's arguments
    pub fn new(args: &ArgMatches, grid: &'a LocalGrid) -> GridResult<Self> {
        let (latitude, longitude) = parse_pair(coordinate_arg(args)?, 0)?;
        Ok(ToPlanarCommand { latitude, longitude, grid })
    }

    /// Converted pair as printed by [`Command::execute`]
    pub fn output(&self) -> GridResult<String> {
        let planar = self.grid.to_planar(self.latitude, self.longitude)?;
        Ok(self.grid.config().format_pair(planar.easting, planar.northing))
    }
}

impl<'a> Command for ToPlanarCommand<'a> {
    fn execute(&self) -> GridResult<()> {
        info!("Converting ({}, {}) to planar", self.latitude, self.longitude);
        println!("{}", self.output()?);
        Ok(())
    }
}

/// Command converting `easting,northing` to `lat,lon`
pub struct ToGeographicCommand<'a> {
    easting: f64,
    northing: f64,
    grid: &'a LocalGrid,
}

impl<'a> ToGeographicCommand<'a> {
    /// Create a new to-geographic command from the subcommand's arguments
    pub fn new(args: &ArgMatches, grid: &'a LocalGrid) -> GridResult<Self> {
        let (easting, northing) = parse_pair(coordinate_arg(args)?, 0)?;
        Ok(ToGeographicCommand { easting, northing, grid })
    }

    /// Converted pair as printed by [`Command::execute`]
    pub fn output(&self) -> GridResult<String> {
        let geographic = self.grid.to_geographic(self.easting, self.northing)?;
        Ok(self.grid.config().format_pair(geographic.latitude, geographic.longitude))
    }
}

impl<'a> Command for ToGeographicCommand<'a> {
    fn execute(&self) -> GridResult<()> {
        info!("Converting ({}, {}) to geographic", self.easting, self.northing);
        println!("{}", self.output()?);
        Ok(())
    }
}

fn coordinate_arg(args: &ArgMatches) -> GridResult<&str> {
    args.get_one::<String>("coordinate")
        .map(String::as_str)
        .ok_or_else(|| GridError::GenericError("Missing coordinate pair".to_string()))
}
