//! Single-threaded Barnes-Hut gravity simulation seeded from the chord disk
//! sampler.
//!
//! Each [`Universe::step`] rebuilds a [`Quadtree`] over the current particle
//! positions, accumulates the approximate force on every particle, then
//! advances velocities and positions by `dt`.

mod quadtree;

pub use quadtree::{gravity_force, Quadrant, Quadtree, GRAVITY, MIN_DISTANCE, POSITION_EPSILON};

use rand::distributions::Distribution;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::sampling::{ChordDisk, SampleError};

/// Parameters of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub particles: usize,
    /// Initial mass of every particle.
    pub mass: f64,
    /// Radius of the disk the particles start in.
    pub radius: f64,
    /// Opening threshold; `0` disables the approximation.
    pub theta: f64,
    pub dt: f64,
    pub steps: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            particles: 100_000,
            mass: 1e12,
            radius: 250.0,
            theta: 0.3,
            dt: 0.01,
            steps: 0,
        }
    }
}

impl SimulationConfig {
    fn validate(&self) -> Result<(), SimulationError> {
        let checks = [
            ("mass", self.mass, self.mass > 0.0),
            ("theta", self.theta, self.theta >= 0.0),
            ("dt", self.dt, self.dt >= 0.0),
        ];
        for (name, value, ok) in checks {
            if !ok || !value.is_finite() {
                return Err(SimulationError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    #[error("invalid {name} {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error(transparent)]
    Sample(#[from] SampleError),
}

/// A moving point mass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: Point,
    pub velocity: Point,
    pub mass: f64,
}

impl Particle {
    pub fn at_rest(position: Point, mass: f64) -> Self {
        Self {
            position,
            velocity: Point::origin(),
            mass,
        }
    }
}

/// Places `count` particles of mass `mass` at rest inside the disk of
/// radius `radius`.
pub fn randomize_particles<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    radius: f64,
    mass: f64,
) -> Result<Vec<Particle>, SampleError> {
    let disk = ChordDisk::new(radius)?;
    Ok((0..count)
        .map(|_| Particle::at_rest(disk.sample(rng), mass))
        .collect())
}

/// Summary of the universe after a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub steps: u64,
    pub particles: usize,
    /// Distance from the origin of the farthest particle.
    pub radius: f64,
}

pub struct Universe {
    config: SimulationConfig,
    particles: Vec<Particle>,
    radius: f64,
    steps: u64,
}

impl Universe {
    /// Seeds `config.particles` particles with [`randomize_particles`].
    pub fn new<R: Rng + ?Sized>(config: SimulationConfig, rng: &mut R) -> Result<Self, SimulationError> {
        config.validate()?;
        let particles = randomize_particles(rng, config.particles, config.radius, config.mass)?;
        Self::from_particles(config, particles)
    }

    pub fn from_particles(
        config: SimulationConfig,
        particles: Vec<Particle>,
    ) -> Result<Self, SimulationError> {
        config.validate()?;
        let radius = farthest(&particles);
        Ok(Self {
            config,
            particles,
            radius,
            steps: 0,
        })
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Advances the universe by one time step and returns the new radius.
    pub fn step(&mut self) -> f64 {
        let Some(tree) = Quadtree::build(&self.particles, self.radius) else {
            return self.radius;
        };
        let theta = self.config.theta;
        let forces: Vec<Point> = self
            .particles
            .iter()
            .map(|p| tree.force_on(p, theta))
            .collect();

        let dt = self.config.dt;
        for (p, force) in self.particles.iter_mut().zip(forces) {
            p.velocity += force * (dt / p.mass);
            p.position += p.velocity * dt;
        }
        self.radius = farthest(&self.particles);
        self.steps += 1;
        log::trace!("step {}: radius {}", self.steps, self.radius);
        self.radius
    }

    /// Runs `config.steps` steps.
    pub fn run(&mut self) -> SimulationReport {
        log::debug!(
            "simulating {} particles for {} steps",
            self.particles.len(),
            self.config.steps
        );
        for _ in 0..self.config.steps {
            self.step();
        }
        self.report()
    }

    pub fn report(&self) -> SimulationReport {
        SimulationReport {
            steps: self.steps,
            particles: self.particles.len(),
            radius: self.radius,
        }
    }
}

fn farthest(particles: &[Particle]) -> f64 {
    particles
        .iter()
        .map(|p| p.position.norm_squared())
        .fold(0.0, f64::max)
        .sqrt()
}
