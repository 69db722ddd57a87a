//! Coordinate-by-coordinate sphere sampler.

use rand::Rng;

use super::{centered, chord_half_length, validate_radius, SampleError};
use crate::geometry::Point3;

/// How the `z` segment of [`ChordSphere`] is bounded once `x` and `y` are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SphereBound {
    /// `sqrt(r² - x² - y²)`, which keeps every point inside the sphere.
    #[default]
    Corrected,
    /// `sqrt(r² - (x² + y²)²)`. Squares the planar norm twice, so it neither
    /// bounds the sphere nor stays defined once `x² + y² > r` (possible only
    /// for `r > 1`). Kept to reproduce legacy output.
    Squared,
}

/// Samples a point inside the sphere of radius `radius` one coordinate at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChordSphere {
    radius: f64,
    bound: SphereBound,
}

impl ChordSphere {
    pub fn new(radius: f64) -> Result<Self, SampleError> {
        Self::with_bound(radius, SphereBound::Corrected)
    }

    pub fn with_bound(radius: f64, bound: SphereBound) -> Result<Self, SampleError> {
        Ok(Self {
            radius: validate_radius(radius)?,
            bound,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn bound(&self) -> SphereBound {
        self.bound
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Point3, SampleError> {
        let r = self.radius;
        let x = centered(rng.gen::<f64>(), r);
        let y_max = chord_half_length(r, x);
        let y = centered(rng.gen::<f64>(), y_max);
        let planar = x * x + y * y;
        let z_max = match self.bound {
            SphereBound::Corrected => (r * r - planar).max(0.0).sqrt(),
            SphereBound::Squared => {
                let radicand = r * r - planar * planar;
                if radicand < 0.0 {
                    log::debug!("squared sphere bound undefined at ({x},{y})");
                    return Err(SampleError::UndefinedBound { radicand });
                }
                radicand.sqrt()
            }
        };
        let z = centered(rng.gen::<f64>(), z_max);
        Ok(Point3::new(x, y, z))
    }
}

/// Returns a random point within the sphere of radius `r` centered at the origin.
pub fn point_in_sphere<R: Rng + ?Sized>(rng: &mut R, r: f64) -> Result<Point3, SampleError> {
    ChordSphere::new(r)?.sample(rng)
}
