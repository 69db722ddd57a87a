//! Basic 3D point type used throughout the crate.

use std::fmt;

use super::GeometryError;

/// Representation of a 3D point.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Squared distance from the origin, `x² + y² + z²`.
    pub fn norm_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Distance to `other`.
    ///
    /// No metric has been settled on for this type, so this always returns
    /// [`GeometryError::NotImplemented`] rather than a made-up value.
    pub fn distance(&self, _other: &Point3) -> Result<f64, GeometryError> {
        Err(GeometryError::NotImplemented("Point3::distance"))
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}
