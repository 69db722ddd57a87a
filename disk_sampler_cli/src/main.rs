use clap::{Args, Parser, Subcommand};
use disk_sampler::{
    point_in_disk, point_in_sphere, FuzzConfig, FuzzError, Fuzzer, SampleError, SimulationConfig,
    SimulationError, Universe,
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::process::ExitCode;

/// Samples random points inside a disk and fuzz checks the sampler.
///
/// Without a subcommand the fuzz check runs with the top-level options.
#[derive(Parser)]
#[command(name = "disk_sampler_cli", version)]
struct Cli {
    #[command(flatten)]
    fuzz: FuzzArgs,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone, Copy)]
struct FuzzArgs {
    /// Radius of the disk centered at the origin
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    radius: f64,
    /// Number of samples to check
    #[arg(long, default_value_t = FuzzConfig::DEFAULT_ITERATIONS)]
    iterations: u64,
    /// Absolute tolerance added to r²
    #[arg(long, default_value_t = FuzzConfig::DEFAULT_EPSILON)]
    epsilon: f64,
    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Clone, Copy)]
struct SampleArgs {
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    radius: f64,
    #[arg(long)]
    seed: Option<u64>,
    /// Print the point as JSON instead of "(x,y)"
    #[arg(long)]
    json: bool,
}

#[derive(Args, Clone, Copy)]
struct SimulateArgs {
    /// Number of simulation steps to compute
    #[arg(long, default_value_t = 10)]
    steps: u64,
    /// Number of particles in the universe
    #[arg(long, default_value_t = 1_000)]
    particles: usize,
    /// Initial mass of each particle
    #[arg(long, default_value_t = SimulationConfig::default().mass)]
    mass: f64,
    /// Initial radius of the universe
    #[arg(long, default_value_t = SimulationConfig::default().radius)]
    radius: f64,
    /// Opening threshold for the force approximation
    #[arg(long, default_value_t = SimulationConfig::default().theta)]
    theta: f64,
    /// Time step
    #[arg(long, default_value_t = SimulationConfig::default().dt)]
    dt: f64,
    #[arg(long)]
    seed: Option<u64>,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that sampled points satisfy x² + y² <= r² + epsilon.
    Fuzz(FuzzArgs),
    /// Print one random point inside the disk.
    SampleDisk(SampleArgs),
    /// Print one random point inside the sphere.
    SampleSphere(SampleArgs),
    /// Run a Barnes-Hut gravity simulation seeded inside the disk.
    Simulate(SimulateArgs),
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Fuzz(#[from] FuzzError),
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Fuzz(FuzzError::InvariantViolation { .. }) => 1,
            CliError::Fuzz(FuzzError::Sample(_)) => 2,
            CliError::Simulation(_) => 2,
            CliError::Json(_) => 1,
        }
    }
}

impl From<SampleError> for CliError {
    fn from(e: SampleError) -> Self {
        CliError::Fuzz(FuzzError::Sample(e))
    }
}

fn make_rng(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => {
            log::debug!("using seed {seed}");
            Box::new(StdRng::seed_from_u64(seed))
        }
        None => Box::new(rand::thread_rng()),
    }
}

fn run_fuzz(args: FuzzArgs) -> Result<(), CliError> {
    let config = FuzzConfig {
        radius: args.radius,
        iterations: args.iterations,
        epsilon: args.epsilon,
    };
    let mut rng = make_rng(args.seed);
    let report = Fuzzer::chord(config)?.run(&mut rng)?;
    log::info!(
        "fuzz passed: {} iterations at radius {}",
        report.iterations,
        report.radius
    );
    Ok(())
}

fn print_sample<T: std::fmt::Display + serde::Serialize>(
    point: T,
    json: bool,
) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string(&point)?);
    } else {
        println!("{point}");
    }
    Ok(())
}

fn run_simulation(args: SimulateArgs) -> Result<(), CliError> {
    let config = SimulationConfig {
        particles: args.particles,
        mass: args.mass,
        radius: args.radius,
        theta: args.theta,
        dt: args.dt,
        steps: args.steps,
    };
    let mut rng = make_rng(args.seed);
    let report = Universe::new(config, &mut rng)?.run();
    if args.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!(
            "{} particles after {} steps, radius {:.3}",
            report.particles, report.steps, report.radius
        );
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        None => run_fuzz(cli.fuzz),
        Some(Commands::Fuzz(args)) => run_fuzz(args),
        Some(Commands::SampleDisk(args)) => {
            let mut rng = make_rng(args.seed);
            print_sample(point_in_disk(&mut rng, args.radius)?, args.json)
        }
        Some(Commands::SampleSphere(args)) => {
            let mut rng = make_rng(args.seed);
            print_sample(point_in_sphere(&mut rng, args.radius)?, args.json)
        }
        Some(Commands::Simulate(args)) => run_simulation(args),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_default_env().init();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
