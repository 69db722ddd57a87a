//! Random point samplers for disks and spheres centered at the origin.
//!
//! The chord samplers draw their coordinates one after another: `x` picks a
//! vertical strip, `y` a position on that strip's chord, and (for spheres)
//! `z` a position on the remaining segment. No draw is ever rejected.

mod disk;
mod sphere;

pub use disk::{point_in_disk, ChordDisk, UniformDisk};
pub use sphere::{point_in_sphere, ChordSphere, SphereBound};

use rand::distributions::Distribution;

use crate::geometry::Point;

/// A point distribution over a disk of known radius centered at the origin.
pub trait DiskSampler: Distribution<Point> {
    fn radius(&self) -> f64;
}

/// Errors raised while constructing or running a sampler.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SampleError {
    #[error("invalid radius {0}: expected a value >= 0 whose square is finite")]
    InvalidRadius(f64),
    #[error("sampler radius {sampler} does not match configured radius {configured}")]
    RadiusMismatch { configured: f64, sampler: f64 },
    #[error("sampling bound is undefined: square root of negative value {radicand}")]
    UndefinedBound { radicand: f64 },
}

pub(crate) fn validate_radius(radius: f64) -> Result<f64, SampleError> {
    if !(radius * radius).is_finite() || radius < 0.0 {
        return Err(SampleError::InvalidRadius(radius));
    }
    Ok(radius)
}

/// Half-length of the chord of a circle of radius `r` at abscissa `x`.
///
/// Rounding can push `r² - x²` marginally below zero near the rim; that case
/// is clamped to a zero-length chord.
pub fn chord_half_length(r: f64, x: f64) -> f64 {
    (r * r - x * x).max(0.0).sqrt()
}

/// Maps a `[0, 1)` draw onto `[-half, half)`.
pub(crate) fn centered(u: f64, half: f64) -> f64 {
    u * 2.0 * half - half
}
