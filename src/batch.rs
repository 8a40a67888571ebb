//! Batch conversion of coordinate pair files
//!
//! Input and output are headerless CSV using the configured delimiter, one
//! pair per record. Blank lines and lines starting with `#` carry no pair.
//! The whole file is converted against a single converter snapshot.

use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use log::{debug, info};

use crate::config::GridConfig;
use crate::coordinate::GeographicConverter;
use crate::errors::{GridError, GridResult};
use crate::utils::coordinate_utils::parse_value;
use crate::utils::progress::ProgressTracker;

/// Which way a batch converts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `lat,lon` in, `easting,northing` out
    ToPlanar,
    /// `easting,northing` in, `lat,lon` out
    ToGeographic,
}

impl Direction {
    /// Command line name of this direction
    pub fn name(&self) -> &'static str {
        match self {
            Direction::ToPlanar => "to-planar",
            Direction::ToGeographic => "to-geographic",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Direction {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "to-planar" | "planar" => Ok(Direction::ToPlanar),
            "to-geographic" | "geographic" => Ok(Direction::ToGeographic),
            other => Err(GridError::GenericError(format!(
                "Unknown direction '{}' (expected to-planar or to-geographic)", other))),
        }
    }
}

/// Counts from a finished batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Pairs converted and written
    pub converted: usize,
}

/// Converts streams or files of coordinate pairs
pub struct BatchConverter {
    converter: GeographicConverter,
    direction: Direction,
    config: GridConfig,
}

impl BatchConverter {
    /// Create a batch converter
    ///
    /// # Arguments
    /// * `converter` - Converter snapshot used for every line
    /// * `direction` - Conversion direction
    /// * `config` - Source of output precision and delimiter
    pub fn new(converter: GeographicConverter, direction: Direction, config: &GridConfig) -> Self {
        BatchConverter {
            converter,
            direction,
            config: config.clone(),
        }
    }

    /// Convert every pair read from `reader`, writing results to `writer`
    pub fn convert_reader<R: Read, W: Write>(&self, reader: R, writer: W) -> GridResult<BatchSummary> {
        self.convert_records(reader, writer, &ProgressTracker::hidden())
    }

    /// Convert an input file into an output file
    ///
    /// The output file is only created once the input has been read.
    pub fn convert_file(&self, input_path: &str, output_path: &str) -> GridResult<BatchSummary> {
        info!("Converting {} ({}) into {}", input_path, self.direction, output_path);
        self.config.delimiter_byte()?;

        let contents = fs::read_to_string(input_path)?;
        let expected = contents
            .lines()
            .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
            .count() as u64;

        let output = BufWriter::new(File::create(output_path)?);
        let progress = ProgressTracker::new(expected, self.direction.name());

        match self.convert_records(contents.as_bytes(), output, &progress) {
            Ok(summary) => {
                progress.finish();
                info!("Converted {} pairs", summary.converted);
                Ok(summary)
            },
            Err(e) => {
                progress.abandon("Failed");
                Err(e)
            },
        }
    }

    fn convert_records<R: Read, W: Write>(&self, reader: R, writer: W, progress: &ProgressTracker) -> GridResult<BatchSummary> {
        let delimiter = self.config.delimiter_byte()?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .delimiter(delimiter)
            .comment(Some(b'#'))
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .delimiter(delimiter)
            .from_writer(writer);

        let mut summary = BatchSummary::default();
        let mut record = StringRecord::new();

        while reader.read_record(&mut record)? {
            let line = record.position().map_or(0, |position| position.line() as usize);

            // Whitespace-only lines
            if record.iter().all(str::is_empty) {
                continue;
            }

            if record.len() != 2 {
                return Err(GridError::ParseError {
                    line,
                    message: format!("Expected 2 values separated by '{}', found {}",
                                     self.config.delimiter, record.len()),
                });
            }

            let a = parse_value(&record[0], line)?;
            let b = parse_value(&record[1], line)?;
            let (x, y) = self.convert_pair(a, b);

            let precision = self.config.precision;
            writer.write_record(&[format!("{:.*}", precision, x), format!("{:.*}", precision, y)])?;
            summary.converted += 1;
            progress.increment(1);
        }

        writer.flush()?;
        debug!("Batch finished after {} records", progress.position());
        Ok(summary)
    }

    fn convert_pair(&self, a: f64, b: f64) -> (f64, f64) {
        match self.direction {
            Direction::ToPlanar => self.converter.to_planar(a, b).as_tuple(),
            Direction::ToGeographic => self.converter.to_geographic(a, b).as_tuple(),
        }
    }
}
