//! Constants for the spherical-earth local grid

use std::f64::consts::PI;

/// Earth semi-major axis in meters according to WGS84, used as the sphere radius
pub const EARTH_SEMI_MAJOR_AXIS_M: f64 = 6378137.0;

/// Degrees to radians factor
pub const DEG_TO_RAD: f64 = PI / 180.0;

/// 1 / f according to the WGS84 ellipsoid.
///
/// Not used by any conversion: the grid assumes a sphere.
pub const RECIPROCAL_FLATTENING: f64 = 298.257223563;

/// Default origin latitude, the south west corner of the OS grid area
pub const DEFAULT_ORIGIN_LATITUDE_DEG: f64 = 52.39;

/// Default origin longitude, the south west corner of the OS grid area
pub const DEFAULT_ORIGIN_LONGITUDE_DEG: f64 = 1.42;

/// Inclusive latitude bounds for an origin
pub const LATITUDE_BOUNDS_DEG: (f64, f64) = (-90.0, 90.0);

/// Inclusive longitude bounds for an origin
pub const LONGITUDE_BOUNDS_DEG: (f64, f64) = (-180.0, 180.0);
