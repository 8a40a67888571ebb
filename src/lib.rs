//! # localgrid
//!
//! Converts between latitude/longitude and a local easting/northing grid
//! using a spherical earth anchored at a south west origin.
//!
//! ```
//! use localgrid::GeographicConverter;
//!
//! # fn main() -> Result<(), localgrid::GridError> {
//! let mut converter = GeographicConverter::new();
//! converter.set_origin(52.39, 1.42)?;
//!
//! let planar = converter.to_planar(52.40, 1.43);
//! let back = converter.to_geographic(planar.easting, planar.northing);
//! assert!((back.latitude - 52.40).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```
//!
//! The approximation only holds near the origin. An origin longitude of ±180°
//! is accepted but wraps badly across the antimeridian, and planar points at a
//! pole produce unbounded longitudes.

pub mod errors;
pub mod coordinate;
pub mod config;
pub mod batch;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::LocalGrid;

pub use errors::{GridError, GridResult};
pub use config::GridConfig;
pub use batch::{BatchConverter, BatchSummary, Direction};
pub use coordinate::{Axis, GeographicConverter, GeographicPoint, Origin, PlanarPoint, SharedConverter};
