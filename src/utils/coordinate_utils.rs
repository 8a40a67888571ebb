//! Coordinate value parsing
//!
//! Pairs on the command line are two numbers separated by a comma,
//! whitespace, or both ("52.40,1.43", "52.40 1.43", "52.40, 1.43").
//! Batch files are split by the CSV reader and only their values pass
//! through here.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::errors::{GridError, GridResult};

lazy_static! {
    static ref PAIR_PATTERN: Regex = Regex::new(
        r"^\s*([^\s,]+)\s*(?:,|\s)\s*([^\s,]+)\s*$"
    ).expect("coordinate pair pattern is valid");
}

/// Parse a coordinate pair string into two values
///
/// # Arguments
/// * `pair_str` - Two numbers separated by a comma and/or whitespace
/// * `line` - Line number reported in errors (0 for command line input)
///
/// # Returns
/// The two values in input order, or a `ParseError`
pub fn parse_pair(pair_str: &str, line: usize) -> GridResult<(f64, f64)> {
    let captures = PAIR_PATTERN.captures(pair_str).ok_or_else(|| GridError::ParseError {
        line,
        message: format!("Expected two values separated by ',' or whitespace, got '{}'", pair_str.trim()),
    })?;

    let first = parse_value(&captures[1], line)?;
    let second = parse_value(&captures[2], line)?;

    debug!("Parsed pair '{}' as ({}, {})", pair_str.trim(), first, second);
    Ok((first, second))
}

/// Parse one coordinate value, reporting `line` on failure
pub fn parse_value(value: &str, line: usize) -> GridResult<f64> {
    value.parse::<f64>().map_err(|_| GridError::ParseError {
        line,
        message: format!("Invalid number '{}'", value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_separators() {
        assert_eq!(parse_pair("52.40,1.43", 0).unwrap(), (52.40, 1.43));
        assert_eq!(parse_pair("52.40 1.43", 0).unwrap(), (52.40, 1.43));
        assert_eq!(parse_pair("  52.40 ,  1.43 ", 0).unwrap(), (52.40, 1.43));
        assert_eq!(parse_pair("-679.5\t-1113", 0).unwrap(), (-679.5, -1113.0));
        assert_eq!(parse_pair("1e3,2E-2", 0).unwrap(), (1000.0, 0.02));
    }

    #[test]
    fn test_parse_errors_carry_line() {
        match parse_pair("52.40", 7) {
            Err(GridError::ParseError { line, .. }) => assert_eq!(line, 7),
            other => panic!("expected ParseError, got {:?}", other),
        }

        assert!(parse_pair("52.40,1.43,9", 1).is_err());
        assert!(parse_pair("north,east", 1).is_err());
        assert!(parse_pair("", 1).is_err());
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("-0.5", 3).unwrap(), -0.5);
        assert!(matches!(parse_value("", 3), Err(GridError::ParseError { line: 3, .. })));
    }
}
