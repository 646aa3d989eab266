/*
 * Application Module
 *
 * This module defines the nannou model and update loop. The window is sized
 * to the plane, the UI runs every frame and the flock advances at a fixed
 * tick rate driven by an accumulator, independent of the display refresh.
 */

use std::time::{Duration, Instant};

use nannou::prelude::*;
use nannou_egui::Egui;
use rand::rngs::StdRng;
use tracing::{debug, error, info};

use crate::debug::DebugInfo;
use crate::flock::Flock;
use crate::headless::seeded_rng;
use crate::input::{key_pressed, raw_window_event};
use crate::params::SimulationParams;
use crate::plane::Plane;
use crate::renderer::view;
use crate::ui;

// Upper bound on catch-up ticks after a slow frame
const MAX_TICKS_PER_FRAME: usize = 4;

pub struct Model {
    pub flock: Flock,
    pub plane: Plane,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub rng: StdRng,
    pub tick_accumulator: Duration,
}

// Build the model for an already validated parameter set
pub fn model_with(app: &App, params: SimulationParams, plane: Plane) -> Model {
    let window_id = app
        .new_window()
        .title("Boids")
        .size(plane.width().ceil() as u32, plane.height().ceil() as u32)
        .view(view)
        .key_pressed(key_pressed)
        .raw_event(raw_window_event)
        .build()
        .expect("failed to build window");

    let window = app.window(window_id).expect("window closed during setup");
    let egui = Egui::from_window(&window);

    let mut rng = seeded_rng(params.seed);
    let flock = Flock::spawn(&params, &plane, &mut rng);

    info!(
        boids = flock.len(),
        width = plane.width(),
        height = plane.height(),
        speed_limit = params.speed_limit,
        ticks_per_second = params.ticks_per_second,
        "flock ready"
    );

    Model {
        flock,
        plane,
        params,
        egui,
        debug_info: DebugInfo::default(),
        rng,
        tick_accumulator: Duration::ZERO,
    }
}

pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;
    model.debug_info.ticks_this_frame = 0;

    let response = ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);
    if response.reset_boids || response.num_boids_changed {
        reset_boids(model);
    }

    if model.params.pause_simulation {
        model.tick_accumulator = Duration::ZERO;
        return;
    }

    let step = tick_step(&model.params);
    let settings = model.params.tick_settings();
    model.tick_accumulator += update.since_last;

    while model.tick_accumulator >= step
        && model.debug_info.ticks_this_frame < MAX_TICKS_PER_FRAME
    {
        let started = Instant::now();
        if let Err(err) = model.flock.advance(&model.plane, &settings) {
            error!(%err, "tick rejected, pausing");
            model.params.pause_simulation = true;
            return;
        }
        model.debug_info.record_tick(started.elapsed());
        model.tick_accumulator -= step;
    }

    // Drop the backlog instead of spiralling after a long stall
    if model.tick_accumulator >= step {
        model.tick_accumulator = Duration::ZERO;
    }
}

// Scatter a fresh flock with the current parameters
pub fn reset_boids(model: &mut Model) {
    model.flock = Flock::spawn(&model.params, &model.plane, &mut model.rng);
    model.tick_accumulator = Duration::ZERO;
    debug!(boids = model.flock.len(), "reset flock");
}

// Validated params keep this finite; anything else never ticks
pub fn tick_step(params: &SimulationParams) -> Duration {
    Duration::try_from_secs_f32(1.0 / params.ticks_per_second).unwrap_or(Duration::MAX)
}
