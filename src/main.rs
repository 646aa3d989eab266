/*
 * Boid Flocking Simulation
 *
 * Boids on a wrap-around plane follow three local rules:
 * 1. Cohesion: move toward the center of nearby boids
 * 2. Separation: back away from boids that are too close
 * 3. Alignment: match the velocity of nearby boids
 *
 * Opens a nannou window by default; `--headless` runs the engine alone and
 * logs flock statistics instead.
 */

use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;
use nannou::prelude::*;
use tracing::{error, info};

use torus_flock::app::{model_with, update, Model};
use torus_flock::headless::run_headless;
use torus_flock::{Plane, SimulationParams};

#[derive(Parser, Debug)]
#[command(name = "torus-flock")]
#[command(about = "Boid flocking on a wrap-around plane", long_about = None)]
struct Args {
    /// Number of boids
    #[arg(short = 'n', long)]
    boids: Option<usize>,

    /// Plane width
    #[arg(long)]
    width: Option<f32>,

    /// Plane height
    #[arg(long)]
    height: Option<f32>,

    /// Per-axis velocity limit
    #[arg(short = 'v', long)]
    speed_limit: Option<f32>,

    #[arg(long)]
    cohesion: Option<f32>,

    #[arg(long)]
    separation: Option<f32>,

    #[arg(long)]
    alignment: Option<f32>,

    /// Simulation ticks per second in windowed mode
    #[arg(long)]
    tps: Option<f32>,

    /// Evaluate rules on all cores
    #[arg(long)]
    parallel: bool,

    /// Seed for positions and colors
    #[arg(short, long)]
    seed: Option<u64>,

    /// Run without a window
    #[arg(long)]
    headless: bool,

    /// Ticks to run in headless mode
    #[arg(long, default_value = "300")]
    ticks: u64,

    /// Log flock statistics every N ticks in headless mode (0 = never)
    #[arg(long, default_value = "30")]
    report_every: u64,
}

impl Args {
    fn params(&self) -> SimulationParams {
        let defaults = SimulationParams::default();
        SimulationParams {
            num_boids: self.boids.unwrap_or(defaults.num_boids),
            plane_width: self.width.unwrap_or(defaults.plane_width),
            plane_height: self.height.unwrap_or(defaults.plane_height),
            speed_limit: self.speed_limit.unwrap_or(defaults.speed_limit),
            cohesion_strength: self.cohesion.unwrap_or(defaults.cohesion_strength),
            separation_strength: self.separation.unwrap_or(defaults.separation_strength),
            alignment_strength: self.alignment.unwrap_or(defaults.alignment_strength),
            ticks_per_second: self.tps.unwrap_or(defaults.ticks_per_second),
            enable_parallel: self.parallel,
            seed: self.seed,
            ..defaults
        }
    }
}

// nannou's model function cannot capture, so the validated setup is parked here
static SETUP: OnceLock<(SimulationParams, Plane)> = OnceLock::new();

fn main() -> ExitCode {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();
    let params = args.params();

    let plane = match params.validate().and_then(|_| params.plane()) {
        Ok(plane) => plane,
        Err(err) => {
            error!(%err, "invalid configuration");
            return ExitCode::from(2);
        }
    };

    if args.headless {
        return match run_headless(&params, args.ticks, args.report_every) {
            Ok(report) => {
                info!(
                    ticks = report.ticks,
                    boids = report.boids,
                    mean_speed = report.mean_speed,
                    elapsed_ms = report.elapsed.as_secs_f64() * 1000.0,
                    "headless run finished"
                );
                ExitCode::SUCCESS
            }
            Err(err) => {
                error!(%err, "headless run failed");
                ExitCode::FAILURE
            }
        };
    }

    if SETUP.set((params, plane)).is_err() {
        error!("simulation setup was already initialised");
        return ExitCode::FAILURE;
    }
    nannou::app(model).update(update).run();
    ExitCode::SUCCESS
}

fn model(app: &App) -> Model {
    let (params, plane) = SETUP
        .get()
        .cloned()
        .expect("setup is stored before the app starts");
    model_with(app, params, plane)
}
