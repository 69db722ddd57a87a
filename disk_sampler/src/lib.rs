//! Core library for sampling points inside a disk (or sphere), fuzz
//! checking the samplers against the containment inequality, and a small
//! Barnes-Hut simulation seeded from the disk sampler.

pub mod fuzz;
pub mod geometry;
pub mod sampling;
pub mod simulation;

pub use fuzz::{fuzz, fuzz_seeded, FuzzConfig, FuzzError, FuzzReport, FuzzState, Fuzzer};
pub use geometry::{GeometryError, Point, Point3};
pub use sampling::{
    point_in_disk, point_in_sphere, ChordDisk, ChordSphere, DiskSampler, SampleError,
    SphereBound, UniformDisk,
};
pub use simulation::{
    randomize_particles, Particle, SimulationConfig, SimulationError, SimulationReport, Universe,
};
