//! Randomized containment check for disk samplers.
//!
//! A [`Fuzzer`] draws points from a sampler and checks each against
//! `x² + y² <= r² + ε`. The first violation ends the run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::sampling::{validate_radius, ChordDisk, DiskSampler, SampleError};

/// Parameters of a fuzz run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuzzConfig {
    pub radius: f64,
    pub iterations: u64,
    /// Absolute tolerance added to `r²` to absorb rounding.
    pub epsilon: f64,
}

impl FuzzConfig {
    pub const DEFAULT_ITERATIONS: u64 = 1_000_000;
    pub const DEFAULT_EPSILON: f64 = 1e-6;

    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            ..Self::default()
        }
    }

    /// Returns `true` when `p` lies inside the tolerated disk.
    pub fn contains(&self, p: &Point) -> bool {
        p.norm_squared() <= self.radius * self.radius + self.epsilon
    }
}

impl Default for FuzzConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            iterations: Self::DEFAULT_ITERATIONS,
            epsilon: Self::DEFAULT_EPSILON,
        }
    }
}

/// Progress of a fuzz run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FuzzState {
    /// The next iteration to execute.
    Running(u64),
    Failed { iteration: u64, point: Point },
    Passed,
}

/// Summary of a run that found no violation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuzzReport {
    pub radius: f64,
    pub iterations: u64,
    /// Largest `x² + y²` observed.
    pub max_norm_squared: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FuzzError {
    #[error("{iteration}: point {point} not in circle")]
    InvariantViolation { iteration: u64, point: Point },
    #[error(transparent)]
    Sample(#[from] SampleError),
}

/// Drives a sampler through `config.iterations` containment checks.
pub struct Fuzzer<D> {
    config: FuzzConfig,
    sampler: D,
    state: FuzzState,
    max_norm_squared: f64,
}

impl<D: DiskSampler> Fuzzer<D> {
    /// Fails when the sampler draws from a different radius than `config`
    /// checks against.
    pub fn new(config: FuzzConfig, sampler: D) -> Result<Self, SampleError> {
        validate_radius(config.radius)?;
        if sampler.radius() != config.radius {
            return Err(SampleError::RadiusMismatch {
                configured: config.radius,
                sampler: sampler.radius(),
            });
        }
        let state = if config.iterations == 0 {
            FuzzState::Passed
        } else {
            FuzzState::Running(0)
        };
        Ok(Self {
            config,
            sampler,
            state,
            max_norm_squared: 0.0,
        })
    }

    pub fn config(&self) -> &FuzzConfig {
        &self.config
    }

    pub fn state(&self) -> FuzzState {
        self.state
    }

    /// Runs one iteration. Terminal states are returned unchanged.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> FuzzState {
        let FuzzState::Running(i) = self.state else {
            return self.state;
        };
        let point = self.sampler.sample(rng);
        let norm = point.norm_squared();
        if norm > self.max_norm_squared {
            self.max_norm_squared = norm;
        }
        self.state = if !self.config.contains(&point) {
            FuzzState::Failed {
                iteration: i,
                point,
            }
        } else if i + 1 >= self.config.iterations {
            FuzzState::Passed
        } else {
            FuzzState::Running(i + 1)
        };
        self.state
    }

    /// Steps until the run passes or hits its first violation.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<FuzzReport, FuzzError> {
        log::debug!(
            "fuzzing radius {} for {} iterations",
            self.config.radius,
            self.config.iterations
        );
        loop {
            match self.step(rng) {
                FuzzState::Running(_) => continue,
                FuzzState::Failed { iteration, point } => {
                    log::warn!("containment violated at iteration {iteration}: {point}");
                    return Err(FuzzError::InvariantViolation { iteration, point });
                }
                FuzzState::Passed => {
                    let report = FuzzReport {
                        radius: self.config.radius,
                        iterations: self.config.iterations,
                        max_norm_squared: self.max_norm_squared,
                    };
                    log::info!(
                        "{} samples inside radius {} (max x²+y² = {})",
                        report.iterations,
                        report.radius,
                        report.max_norm_squared
                    );
                    return Ok(report);
                }
            }
        }
    }
}

impl Fuzzer<ChordDisk> {
    /// Fuzzer over a [`ChordDisk`] built from `config.radius`.
    pub fn chord(config: FuzzConfig) -> Result<Self, SampleError> {
        Self::new(config, ChordDisk::new(config.radius)?)
    }
}

/// Fuzzes the chord disk sampler at radius `r` with the default iteration
/// count and tolerance, seeded from the thread RNG.
pub fn fuzz(r: f64) -> Result<FuzzReport, FuzzError> {
    let config = FuzzConfig::new(r);
    Fuzzer::chord(config)?.run(&mut rand::thread_rng())
}

/// Deterministic variant of [`fuzz`] driven by a seeded [`StdRng`].
pub fn fuzz_seeded(config: FuzzConfig, seed: u64) -> Result<FuzzReport, FuzzError> {
    let mut rng = StdRng::seed_from_u64(seed);
    Fuzzer::chord(config)?.run(&mut rng)
}
