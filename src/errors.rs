//! Error types for coordinate conversion and the tooling around it

use std::fmt;
use std::io;

use crate::coordinate::Axis;

/// Errors raised by localgrid
#[derive(Debug)]
pub enum GridError {
    /// An origin coordinate outside its valid bound
    OutOfRange {
        /// Which origin argument was rejected
        axis: Axis,
        /// The rejected value in degrees
        value: f64,
    },
    /// I/O error
    IoError(io::Error),
    /// Batch file reading or writing failed inside the CSV layer
    CsvError(csv::Error),
    /// Malformed configuration
    ConfigError(String),
    /// A coordinate pair that could not be parsed (line 0 for command line input)
    ParseError {
        line: usize,
        message: String,
    },
    /// The lock guarding a shared converter was poisoned
    LockPoisoned,
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfRange { axis, value } => {
                let (min, max) = axis.bounds();
                write!(f, "Input {} out of range: {} (expected {} to {})", axis, value, min, max)
            },
            GridError::IoError(e) => write!(f, "I/O error: {}", e),
            GridError::CsvError(e) => write!(f, "CSV error: {}", e),
            GridError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            GridError::ParseError { line: 0, message } => write!(f, "Parse error: {}", message),
            GridError::ParseError { line, message } => write!(f, "Parse error on line {}: {}", line, message),
            GridError::LockPoisoned => write!(f, "Shared converter lock poisoned"),
            GridError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GridError::IoError(e) => Some(e),
            GridError::CsvError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GridError {
    fn from(error: io::Error) -> Self {
        GridError::IoError(error)
    }
}

impl From<csv::Error> for GridError {
    fn from(error: csv::Error) -> Self {
        GridError::CsvError(error)
    }
}

impl From<String> for GridError {
    fn from(msg: String) -> Self {
        GridError::GenericError(msg)
    }
}

/// Result type for localgrid operations
pub type GridResult<T> = Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message_names_axis() {
        let err = GridError::OutOfRange { axis: Axis::Latitude, value: 91.0 };
        assert_eq!(err.to_string(), "Input latitude out of range: 91 (expected -90 to 90)");

        let err = GridError::OutOfRange { axis: Axis::Longitude, value: -181.5 };
        assert_eq!(err.to_string(), "Input longitude out of range: -181.5 (expected -180 to 180)");
    }

    #[test]
    fn test_parse_error_line_number() {
        let err = GridError::ParseError { line: 4, message: "bad pair".to_string() };
        assert_eq!(err.to_string(), "Parse error on line 4: bad pair");

        let err = GridError::ParseError { line: 0, message: "bad pair".to_string() };
        assert_eq!(err.to_string(), "Parse error: bad pair");
    }

    #[test]
    fn test_io_error_conversion() {
        let err: GridError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, GridError::IoError(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
