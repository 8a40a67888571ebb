//! Command line definition

use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use log::{debug, LevelFilter};

use crate::config::{GridConfig, MAX_PRECISION};
use crate::coordinate::Origin;
use crate::errors::{GridError, GridResult};
use crate::utils::coordinate_utils::parse_pair;

/// Build the clap definition of the `localgrid` binary
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("localgrid")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Convert between latitude/longitude and a local easting/northing grid")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .global(true)
                .required(false),
        )
        .arg(
            Arg::new("origin")
                .long("origin")
                .help("Grid origin as 'lat,lon', overrides the configuration")
                .value_name("LAT,LON")
                .allow_hyphen_values(true)
                .global(true)
                .required(false),
        )
        .arg(
            Arg::new("precision")
                .long("precision")
                .help("Decimal places in the output")
                .value_name("N")
                .value_parser(clap::value_parser!(usize))
                .global(true)
                .required(false),
        )
        .arg(
            Arg::new("journal")
                .long("journal")
                .help("Record origin changes and conversions to this file")
                .value_name("FILE")
                .global(true)
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            ClapCommand::new("to-planar")
                .about("Convert 'lat,lon' in degrees to 'easting,northing' in meters")
                .arg(
                    Arg::new("coordinate")
                        .help("Latitude and longitude in degrees")
                        .value_name("LAT,LON")
                        .allow_hyphen_values(true)
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            ClapCommand::new("to-geographic")
                .about("Convert 'easting,northing' in meters to 'lat,lon' in degrees")
                .arg(
                    Arg::new("coordinate")
                        .help("Easting and northing in meters")
                        .value_name("EASTING,NORTHING")
                        .allow_hyphen_values(true)
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            ClapCommand::new("batch")
                .about("Convert a file with one coordinate pair per line")
                .arg(
                    Arg::new("direction")
                        .short('d')
                        .long("direction")
                        .help("Conversion direction (to-planar or to-geographic)")
                        .value_name("DIRECTION")
                        .default_value("to-planar"),
                )
                .arg(
                    Arg::new("input")
                        .help("Input file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .help("Output file")
                        .required(true)
                        .index(2),
                ),
        )
}

/// Resolve the configuration from `--config`, then apply the command line overrides
pub fn load_config(args: &ArgMatches) -> GridResult<GridConfig> {
    let mut config = match args.get_one::<String>("config") {
        Some(path) => {
            debug!("Loading configuration from {}", path);
            GridConfig::from_file(path)?
        },
        None => GridConfig::default(),
    };

    if let Some(origin_str) = args.get_one::<String>("origin") {
        let (latitude, longitude) = parse_pair(origin_str, 0)?;
        config.origin = Origin::new(latitude, longitude)?;
    }

    if let Some(precision) = args.get_one::<usize>("precision") {
        if *precision > MAX_PRECISION {
            return Err(GridError::GenericError(format!(
                "Precision must be at most {}, got {}", MAX_PRECISION, precision)));
        }
        config.precision = *precision;
    }

    if args.get_flag("verbose") {
        config.log_level = LevelFilter::Debug;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_negative_coordinates_are_values() {
        let matches = build_cli()
            .try_get_matches_from(["localgrid", "--origin", "-33.9,151.2", "to-planar", "-33.8,151.3"])
            .unwrap();

        assert_eq!(matches.get_one::<String>("origin").map(String::as_str), Some("-33.9,151.2"));
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "to-planar");
        assert_eq!(sub.get_one::<String>("coordinate").map(String::as_str), Some("-33.8,151.3"));
    }

    #[test]
    fn test_overrides_applied() {
        let matches = build_cli()
            .try_get_matches_from(["localgrid", "--origin", "10,20", "--precision", "2", "-v", "to-planar", "10,20"])
            .unwrap();
        let config = load_config(&matches).unwrap();

        assert_eq!(config.origin, Origin::new(10.0, 20.0).unwrap());
        assert_eq!(config.precision, 2);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_out_of_range_origin_override() {
        let matches = build_cli()
            .try_get_matches_from(["localgrid", "--origin", "95,0", "to-planar", "0,0"])
            .unwrap();
        assert!(matches!(load_config(&matches), Err(GridError::OutOfRange { .. })));

        let matches = build_cli()
            .try_get_matches_from(["localgrid", "--precision", "30", "to-planar", "0,0"])
            .unwrap();
        assert!(load_config(&matches).is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(build_cli().try_get_matches_from(["localgrid"]).is_err());
    }
}
