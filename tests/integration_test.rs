//! Integration tests for the localgrid library and command layer

use std::fs;
use std::io::Write;

use localgrid::commands::{build_cli, cli::load_config, CommandFactory, LocalGridCommandFactory};
use localgrid::commands::{ToGeographicCommand, ToPlanarCommand};
use localgrid::{Direction, GridConfig, GridError, LocalGrid};

fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_default_grid_end_to_end() {
    init_test_logging();
    let grid = LocalGrid::new(GridConfig::default(), None).unwrap();

    let zero = grid.to_planar(52.39, 1.42).unwrap();
    assert_eq!((zero.easting, zero.northing), (0.0, 0.0));

    let planar = grid.to_planar(52.40, 1.43).unwrap();
    assert!((planar.easting - 679.2104895546762).abs() < 1e-6);
    assert!((planar.northing - 1113.1949079325143).abs() < 1e-6);

    let back = grid.to_geographic(planar.easting, planar.northing).unwrap();
    assert!((back.latitude - 52.40).abs() < 1e-9);
    assert!((back.longitude - 1.43).abs() < 1e-9);
}

#[test]
fn test_failed_origin_update_keeps_grid() {
    let grid = LocalGrid::new(GridConfig::default(), None).unwrap();
    grid.set_origin(40.0, -3.7).unwrap();

    assert!(matches!(grid.set_origin(91.0, 0.0), Err(GridError::OutOfRange { .. })));
    assert!(matches!(grid.set_origin(0.0, 181.0), Err(GridError::OutOfRange { .. })));

    let planar = grid.to_planar(40.0, -3.7).unwrap();
    assert_eq!((planar.easting, planar.northing), (0.0, 0.0));
}

#[test]
fn test_batch_file_round_trip() {
    init_test_logging();
    let grid = LocalGrid::new(GridConfig::from_str("[output]\nprecision = 12\n").unwrap(), None).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let geographic_in = dir.path().join("geo_in.txt");
    let planar_out = dir.path().join("planar_out.txt");
    let geographic_out = dir.path().join("geo_out.txt");

    fs::write(&geographic_in, "# lat,lon\n52.39,1.42\n52.40, 1.43\n\n52.45 ,1.50\n").unwrap();

    let summary = grid
        .convert_file(Direction::ToPlanar, geographic_in.to_str().unwrap(), planar_out.to_str().unwrap())
        .unwrap();
    assert_eq!(summary.converted, 3);

    let summary = grid
        .convert_file(Direction::ToGeographic, planar_out.to_str().unwrap(), geographic_out.to_str().unwrap())
        .unwrap();
    assert_eq!(summary.converted, 3);

    let expected = [(52.39, 1.42), (52.40, 1.43), (52.45, 1.50)];
    let contents = fs::read_to_string(&geographic_out).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), expected.len());

    for (line, (lat, lon)) in lines.iter().zip(expected) {
        let values: Vec<f64> = line.split(',').map(|v| v.parse().unwrap()).collect();
        assert!((values[0] - lat).abs() < 1e-9, "{} vs {}", values[0], lat);
        assert!((values[1] - lon).abs() < 1e-9, "{} vs {}", values[1], lon);
    }
}

#[test]
fn test_batch_tab_delimited_files() {
    let grid = LocalGrid::new(GridConfig::from_str("[output]\ndelimiter = \"\\t\"\n").unwrap(), None).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("geo.tsv");
    let planar = dir.path().join("planar.tsv");
    fs::write(&input, "52.39\t1.42\n").unwrap();

    grid.convert_file(Direction::ToPlanar, input.to_str().unwrap(), planar.to_str().unwrap())
        .unwrap();
    assert_eq!(fs::read_to_string(&planar).unwrap(), "0.000000\t0.000000\n");

    fs::write(&input, "52.39,1.42\n").unwrap();
    let result = grid.convert_file(Direction::ToPlanar, input.to_str().unwrap(), planar.to_str().unwrap());
    assert!(matches!(result, Err(GridError::ParseError { line: 1, .. })));
}

#[test]
fn test_batch_missing_input() {
    let grid = LocalGrid::new(GridConfig::default(), None).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does_not_exist.txt");
    let output = dir.path().join("never_written.txt");

    let result = grid.convert_file(Direction::ToPlanar, missing.to_str().unwrap(), output.to_str().unwrap());
    assert!(matches!(result, Err(GridError::IoError(_))));
    assert!(!output.exists());
}

#[test]
fn test_journal_records_operations() {
    let dir = tempfile::tempdir().unwrap();
    let journal = dir.path().join("journal.log");
    let grid = LocalGrid::new(GridConfig::default(), Some(journal.to_str().unwrap())).unwrap();

    let origin = grid.set_origin(10.0, 20.0).unwrap();
    assert_eq!(origin, grid.origin().unwrap());
    grid.to_planar(10.0, 20.0).unwrap();

    let contents = fs::read_to_string(&journal).unwrap();
    assert!(contents.contains("latitude 52.39°"));
    assert!(contents.contains("latitude 10°"));
    assert!(contents.contains("to-planar 10.000000,20.000000 -> 0.000000,0.000000"));
}

#[test]
fn test_config_file_and_commands() {
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    write!(config_file, "[origin]\nlatitude = 0\nlongitude = 0\n\n[output]\nprecision = 3\ndelimiter = \" \"\n").unwrap();
    let config_path = config_file.path();

    let matches = build_cli()
        .try_get_matches_from(["localgrid", "--config", config_path.to_str().unwrap(), "to-planar", "0,0.01"])
        .unwrap();
    let config = load_config(&matches).unwrap();
    let grid = LocalGrid::new(config, None).unwrap();

    let (_, sub) = matches.subcommand().unwrap();
    let command = ToPlanarCommand::new(sub, &grid).unwrap();
    // 0.01° of longitude on the equator
    assert_eq!(command.output().unwrap(), "1113.195 0.000");

    let matches = build_cli()
        .try_get_matches_from(["localgrid", "to-geographic", "-1113.1949079327,0"])
        .unwrap();
    let (_, sub) = matches.subcommand().unwrap();
    let command = ToGeographicCommand::new(sub, &grid).unwrap();
    assert_eq!(command.output().unwrap(), "0.000 -0.010");
}

#[test]
fn test_factory_rejects_bad_input() {
    let grid = LocalGrid::new(GridConfig::default(), None).unwrap();
    let factory = LocalGridCommandFactory::new();

    let matches = build_cli()
        .try_get_matches_from(["localgrid", "to-planar", "52.40;1.43"])
        .unwrap();
    assert!(matches!(factory.create_command(&matches, &grid), Err(GridError::ParseError { .. })));

    let matches = build_cli()
        .try_get_matches_from(["localgrid", "batch", "-d", "sideways", "in.txt", "out.txt"])
        .unwrap();
    assert!(factory.create_command(&matches, &grid).is_err());

    let matches = build_cli()
        .try_get_matches_from(["localgrid", "batch", "in.txt", "out.txt"])
        .unwrap();
    assert!(factory.create_command(&matches, &grid).is_ok());
}

#[test]
fn test_shared_converter_from_grid() {
    let grid = LocalGrid::new(GridConfig::default(), None).unwrap();
    let handle = grid.converter();

    std::thread::spawn(move || handle.set_origin(-33.9, 151.2).unwrap())
        .join()
        .unwrap();

    let origin = grid.origin().unwrap();
    assert_eq!(origin.latitude(), -33.9);
    assert_eq!(origin.longitude(), 151.2);
}
