use log::{debug, info};

use crate::batch::{BatchConverter, BatchSummary, Direction};
use crate::config::GridConfig;
use crate::coordinate::{GeographicPoint, Origin, PlanarPoint, SharedConverter};
use crate::errors::GridResult;
use crate::utils::logger::Logger;

/// Main interface to the localgrid library
pub struct LocalGrid {
    converter: SharedConverter,
    config: GridConfig,
    logger: Logger,
}

impl LocalGrid {
    /// Create a new LocalGrid instance
    ///
    /// # Arguments
    /// * `config` - Origin and output settings
    /// * `journal_file` - Optional file that records every origin change and conversion
    ///
    /// # Returns
    /// A LocalGrid instance or an error if the journal cannot be created
    pub fn new(config: GridConfig, journal_file: Option<&str>) -> GridResult<Self> {
        let logger = match journal_file {
            Some(path) => Logger::new(path)?,
            None => Logger::disabled(),
        };
        logger.log_origin(&config.origin)?;

        info!("Local grid origin at {}", config.origin);
        Ok(Self::with_journal(config, logger))
    }

    /// Assemble an instance around an existing journal without recording the origin
    pub(crate) fn with_journal(config: GridConfig, logger: Logger) -> Self {
        LocalGrid {
            converter: SharedConverter::new(config.converter()),
            config,
            logger,
        }
    }

    /// Settings this instance was created with
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Handle to the converter, shared with this instance
    pub fn converter(&self) -> SharedConverter {
        self.converter.clone()
    }

    /// Current origin
    pub fn origin(&self) -> GridResult<Origin> {
        self.converter.origin()
    }

    /// Move the origin
    ///
    /// The new origin is validated and journaled before it is installed, so
    /// an out-of-range value or a journal write failure leaves the previous
    /// origin in place.
    pub fn set_origin(&self, latitude: f64, longitude: f64) -> GridResult<Origin> {
        let origin = Origin::new(latitude, longitude)?;
        self.logger.log_origin(&origin)?;
        self.converter.set_origin(origin.latitude(), origin.longitude())
    }

    /// Convert latitude/longitude to easting/northing
    pub fn to_planar(&self, latitude: f64, longitude: f64) -> GridResult<PlanarPoint> {
        let planar = self.converter.to_planar(latitude, longitude)?;
        debug!("({}, {}) -> {}", latitude, longitude, planar);
        self.logger.log(&format!(
            "to-planar {} -> {}",
            self.config.format_pair(latitude, longitude),
            self.config.format_pair(planar.easting, planar.northing)
        ))?;
        Ok(planar)
    }

    /// Convert easting/northing to latitude/longitude
    pub fn to_geographic(&self, easting: f64, northing: f64) -> GridResult<GeographicPoint> {
        let geographic = self.converter.to_geographic(easting, northing)?;
        debug!("({}, {}) -> {}", easting, northing, geographic);
        self.logger.log(&format!(
            "to-geographic {} -> {}",
            self.config.format_pair(easting, northing),
            self.config.format_pair(geographic.latitude, geographic.longitude)
        ))?;
        Ok(geographic)
    }

    /// Convert a file of coordinate pairs
    ///
    /// # Arguments
    /// * `direction` - Which way to convert
    /// * `input_path` - One pair per line split by the configured delimiter; blank lines and `#` comments are skipped
    /// * `output_path` - File receiving one converted pair per input pair
    pub fn convert_file(&self, direction: Direction, input_path: &str, output_path: &str) -> GridResult<BatchSummary> {
        let snapshot = self.converter.snapshot()?;
        let batch = BatchConverter::new(snapshot, direction, &self.config);
        let summary = batch.convert_file(input_path, output_path)?;

        self.logger.log(&format!(
            "{} {} -> {}: {} converted",
            direction, input_path, output_path, summary.converted
        ))?;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};

    use crate::errors::GridError;

    #[test]
    fn test_set_origin_returns_installed_origin() {
        let grid = LocalGrid::new(GridConfig::default(), None).unwrap();
        let origin = grid.set_origin(10.0, 20.0).unwrap();

        assert_eq!(origin, Origin::new(10.0, 20.0).unwrap());
        assert_eq!(grid.origin().unwrap(), origin);
    }

    #[test]
    fn test_journal_failure_keeps_previous_origin() {
        let journal = tempfile::NamedTempFile::new().unwrap();
        let read_only = File::open(journal.path()).unwrap();
        let grid = LocalGrid::with_journal(GridConfig::default(), Logger::from_file(read_only));

        let result = grid.set_origin(10.0, 20.0);
        assert!(matches!(result, Err(GridError::IoError(_))));
        assert_eq!(grid.origin().unwrap(), Origin::default());
    }

    #[test]
    fn test_rejected_origin_is_not_journaled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.log");
        let grid = LocalGrid::new(GridConfig::default(), Some(path.to_str().unwrap())).unwrap();

        assert!(grid.set_origin(95.0, 0.0).is_err());
        grid.set_origin(-33.9, 151.2).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("95"));
        assert!(contents.contains("latitude -33.9°, longitude 151.2°"));
    }
}
