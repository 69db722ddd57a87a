//! Disk samplers: the strip-then-chord method and the polar uniform method.

use std::f64::consts::TAU;

use rand::distributions::Distribution;
use rand::Rng;

use super::{centered, chord_half_length, validate_radius, DiskSampler, SampleError};
use crate::geometry::Point;

/// Samples a point inside the disk of radius `radius` by first drawing `x`
/// on `[-r, r)` and then `y` on the chord at that `x`.
///
/// Every output satisfies `x² + y² <= r²` up to rounding. The result is not
/// area-uniform: a strip near the rim receives as many samples as the
/// center strip while covering a much shorter chord, so density rises
/// toward `x = ±r`. Use [`UniformDisk`] when uniformity matters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChordDisk {
    radius: f64,
}

impl ChordDisk {
    pub fn new(radius: f64) -> Result<Self, SampleError> {
        Ok(Self {
            radius: validate_radius(radius)?,
        })
    }
}

impl DiskSampler for ChordDisk {
    fn radius(&self) -> f64 {
        self.radius
    }
}

impl Distribution<Point> for ChordDisk {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        let r = self.radius;
        let x = centered(rng.gen::<f64>(), r);
        let y_max = chord_half_length(r, x);
        let y = centered(rng.gen::<f64>(), y_max);
        Point::new(x, y)
    }
}

/// Area-uniform disk sampler using polar coordinates: `θ` uniform on
/// `[0, 2π)` and `ρ = r·sqrt(u)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformDisk {
    radius: f64,
}

impl UniformDisk {
    pub fn new(radius: f64) -> Result<Self, SampleError> {
        Ok(Self {
            radius: validate_radius(radius)?,
        })
    }
}

impl DiskSampler for UniformDisk {
    fn radius(&self) -> f64 {
        self.radius
    }
}

impl Distribution<Point> for UniformDisk {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        let theta = TAU * rng.gen::<f64>();
        let rho = self.radius * rng.gen::<f64>().sqrt();
        Point::new(rho * theta.cos(), rho * theta.sin())
    }
}

/// Returns a random point within the disk of radius `r` centered at the origin.
pub fn point_in_disk<R: Rng + ?Sized>(rng: &mut R, r: f64) -> Result<Point, SampleError> {
    Ok(ChordDisk::new(r)?.sample(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zero_radius_returns_origin() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(point_in_disk(&mut rng, 0.0).unwrap(), Point::origin());
        }
    }

    #[test]
    fn negative_radius_is_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            point_in_disk(&mut rng, -1.0),
            Err(SampleError::InvalidRadius(-1.0))
        );
        assert!(UniformDisk::new(-0.5).is_err());
    }

    #[test]
    fn huge_radius_is_rejected() {
        assert_eq!(ChordDisk::new(1e200), Err(SampleError::InvalidRadius(1e200)));
        assert!(UniformDisk::new(f64::MAX).is_err());
    }

    #[test]
    fn large_valid_radius_still_spreads_y() {
        let disk = ChordDisk::new(1e150).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let off_axis = (0..1_000).filter(|_| disk.sample(&mut rng).y != 0.0).count();
        assert!(off_axis > 900);
    }

    #[test]
    fn chord_samples_stay_on_their_chord() {
        let disk = ChordDisk::new(3.0).unwrap();
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..10_000 {
            let p = disk.sample(&mut rng);
            assert!(p.x >= -3.0 && p.x < 3.0);
            assert!(p.y.abs() <= chord_half_length(3.0, p.x));
        }
    }

    #[test]
    fn uniform_samples_stay_inside() {
        let disk = UniformDisk::new(2.5).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            assert!(disk.sample(&mut rng).norm_squared() <= 6.25 + 1e-9);
        }
    }
}
