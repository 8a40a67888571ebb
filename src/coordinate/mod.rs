//! Coordinate handling for the local grid
//!
//! This module provides the point types, the validated origin and the
//! spherical-earth converter between latitude/longitude and easting/northing.

pub mod constants;
mod converter;
mod origin;
mod point;
mod shared;

// Re-export key types
pub use self::converter::GeographicConverter;
pub use self::origin::{Axis, Origin};
pub use self::point::{GeographicPoint, PlanarPoint};
pub use self::shared::SharedConverter;
