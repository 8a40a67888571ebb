//! TOML configuration for the origin, output formatting and logging
//!
//! The built-in defaults live in `localgrid.toml` at the crate root and are
//! embedded at compile time. A user file only has to name the keys it changes.

use std::fs;

use lazy_static::lazy_static;
use log::{warn, LevelFilter};

use crate::coordinate::{GeographicConverter, Origin};
use crate::errors::{GridError, GridResult};

/// Largest number of decimal places worth printing for an f64
pub const MAX_PRECISION: usize = 17;

const KNOWN_TABLES: [&str; 3] = ["origin", "output", "logging"];

lazy_static! {
    // Parse the embedded defaults once
    static ref DEFAULT_CONFIG: GridConfig = {
        let content = include_str!("../localgrid.toml");
        GridConfig::parse_over(content, GridConfig::builtin()).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse built-in configuration: {}", e);
            GridConfig::builtin()
        })
    };
}

/// Settings for the converter, its output and logging
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Origin of the local grid
    pub origin: Origin,
    /// Decimal places written for converted values
    pub precision: usize,
    /// Field separator for batch files and printed pairs, a single ASCII character
    pub delimiter: String,
    /// Log file; `None` logs to stderr
    pub log_file: Option<String>,
    /// Maximum log level
    pub log_level: LevelFilter,
}

impl GridConfig {
    /// Parse a configuration from a TOML string, on top of the defaults
    pub fn from_str(content: &str) -> GridResult<Self> {
        Self::parse_over(content, DEFAULT_CONFIG.clone())
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &str) -> GridResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Build a converter positioned at the configured origin
    pub fn converter(&self) -> GeographicConverter {
        GeographicConverter::from_origin(self.origin)
    }

    /// Format a pair of values with the configured precision and delimiter
    pub fn format_pair(&self, a: f64, b: f64) -> String {
        format!("{:.*}{}{:.*}", self.precision, a, self.delimiter, self.precision, b)
    }

    /// The delimiter as the byte the CSV reader and writer expect
    pub fn delimiter_byte(&self) -> GridResult<u8> {
        match self.delimiter.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(GridError::ConfigError(format!(
                "output.delimiter must be a single ASCII character, got '{}'", self.delimiter))),
        }
    }

    /// Values used when even the embedded file is unusable
    fn builtin() -> Self {
        GridConfig {
            origin: Origin::default(),
            precision: 6,
            delimiter: ",".to_string(),
            log_file: None,
            log_level: LevelFilter::Info,
        }
    }

    fn parse_over(content: &str, mut config: GridConfig) -> GridResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(GridError::ConfigError(format!("Failed to parse TOML: {}", e))),
        };

        if let Some(root) = toml_value.as_table() {
            for key in root.keys() {
                if !KNOWN_TABLES.contains(&key.as_str()) {
                    warn!("Ignoring unknown configuration table '{}'", key);
                }
            }
        }

        if let Some(table) = Self::table(&toml_value, "origin")? {
            let latitude = Self::get_f64(table, "origin", "latitude")?
                .unwrap_or(config.origin.latitude());
            let longitude = Self::get_f64(table, "origin", "longitude")?
                .unwrap_or(config.origin.longitude());
            config.origin = Origin::new(latitude, longitude)?;
        }

        if let Some(table) = Self::table(&toml_value, "output")? {
            if let Some(precision) = Self::get_integer(table, "output", "precision")? {
                if precision < 0 || precision as usize > MAX_PRECISION {
                    return Err(GridError::ConfigError(format!(
                        "output.precision must be between 0 and {}, got {}", MAX_PRECISION, precision)));
                }
                config.precision = precision as usize;
            }
            if let Some(delimiter) = Self::get_str(table, "output", "delimiter")? {
                config.delimiter = delimiter.to_string();
                config.delimiter_byte()?;
            }
        }

        if let Some(table) = Self::table(&toml_value, "logging")? {
            if let Some(file) = Self::get_str(table, "logging", "file")? {
                config.log_file = if file.is_empty() { None } else { Some(file.to_string()) };
            }
            if let Some(level) = Self::get_str(table, "logging", "level")? {
                config.log_level = level.parse::<LevelFilter>().map_err(|_| {
                    GridError::ConfigError(format!("Unknown log level: {}", level))
                })?;
            }
        }

        Ok(config)
    }

    fn table<'v>(value: &'v toml::Value, name: &str) -> GridResult<Option<&'v toml::value::Table>> {
        match value.get(name) {
            None => Ok(None),
            Some(v) => v.as_table().map(Some).ok_or_else(|| {
                GridError::ConfigError(format!("'{}' must be a table", name))
            }),
        }
    }

    /// Floats and integers are both accepted for float keys
    fn get_f64(table: &toml::value::Table, section: &str, key: &str) -> GridResult<Option<f64>> {
        match table.get(key) {
            None => Ok(None),
            Some(toml::Value::Float(f)) => Ok(Some(*f)),
            Some(toml::Value::Integer(i)) => Ok(Some(*i as f64)),
            Some(other) => Err(Self::type_error(section, key, "a number", other)),
        }
    }

    fn get_integer(table: &toml::value::Table, section: &str, key: &str) -> GridResult<Option<i64>> {
        match table.get(key) {
            None => Ok(None),
            Some(toml::Value::Integer(i)) => Ok(Some(*i)),
            Some(other) => Err(Self::type_error(section, key, "an integer", other)),
        }
    }

    fn get_str<'v>(table: &'v toml::value::Table, section: &str, key: &str) -> GridResult<Option<&'v str>> {
        match table.get(key) {
            None => Ok(None),
            Some(toml::Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(Self::type_error(section, key, "a string", other)),
        }
    }

    fn type_error(section: &str, key: &str, expected: &str, found: &toml::Value) -> GridError {
        GridError::ConfigError(format!(
            "{}.{} must be {}, found {}", section, key, expected, found.type_str()))
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}
