use std::process;
use log::error;

use localgrid::api::LocalGrid;
use localgrid::commands::{build_cli, cli::load_config, CommandFactory, LocalGridCommandFactory};
use localgrid::config::GridConfig;
use localgrid::errors::GridResult;
use localgrid::utils::logger::Logger;

fn init_logging(config: &GridConfig) -> GridResult<()> {
    match &config.log_file {
        Some(path) => Logger::init_global_logger(path, config.log_level)?,
        None => {
            // RUST_LOG still wins over the configured level
            env_logger::Builder::new()
                .filter_level(config.log_level)
                .parse_default_env()
                .init();
        },
    }
    Ok(())
}

fn main() {
    let matches = build_cli().get_matches();

    let config = match load_config(&matches) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config) {
        eprintln!("Error setting up logging: {}", e);
        process::exit(1);
    }

    let journal = matches.get_one::<String>("journal").map(String::as_str);
    let grid = match LocalGrid::new(config, journal) {
        Ok(g) => g,
        Err(e) => {
            error!("Failed to initialize: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let factory = LocalGridCommandFactory::new();

    let command_result = factory.create_command(&matches, &grid);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
