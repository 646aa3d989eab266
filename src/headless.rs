/*
 * Headless Module
 *
 * Runs the flock without a window for a fixed number of ticks, logging the
 * centroid and mean speed at a fixed interval. Used for scripting, profiling
 * and reproducible runs with a seed.
 */

use std::time::{Duration, Instant};

use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::error::SimError;
use crate::flock::Flock;
use crate::params::SimulationParams;

#[derive(Debug, Clone)]
pub struct HeadlessReport {
    pub ticks: u64,
    pub boids: usize,
    pub centroid: Option<Vec2>,
    pub mean_speed: f32,
    pub elapsed: Duration,
}

pub fn run_headless(
    params: &SimulationParams,
    ticks: u64,
    report_every: u64,
) -> Result<HeadlessReport, SimError> {
    params.validate()?;
    let plane = params.plane()?;
    let settings = params.tick_settings();
    let mut rng = seeded_rng(params.seed);
    let mut flock = Flock::spawn(params, &plane, &mut rng);

    info!(
        boids = flock.len(),
        width = plane.width(),
        height = plane.height(),
        speed_limit = settings.speed_limit,
        parallel = settings.parallel,
        ticks,
        "starting headless run"
    );

    let started = Instant::now();
    for tick in 1..=ticks {
        flock.advance(&plane, &settings)?;

        if report_every > 0 && tick % report_every == 0 {
            let centroid = flock.centroid().unwrap_or(Vec2::ZERO);
            info!(
                tick,
                centroid_x = centroid.x,
                centroid_y = centroid.y,
                mean_speed = flock.mean_speed(),
                "flock state"
            );
        }
    }

    Ok(HeadlessReport {
        ticks,
        boids: flock.len(),
        centroid: flock.centroid(),
        mean_speed: flock.mean_speed(),
        elapsed: started.elapsed(),
    })
}

pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
