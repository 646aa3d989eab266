/*
 * Input Module
 *
 * Keyboard shortcuts and raw window events.
 * - Space: pause / resume
 * - R: scatter a fresh flock
 * - D: toggle the debug overlay
 */

use nannou::prelude::*;
use tracing::debug;

use crate::app::{reset_boids, Model};

pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Space => {
            model.params.pause_simulation = !model.params.pause_simulation;
            debug!(paused = model.params.pause_simulation, "toggled pause");
        }
        Key::R => reset_boids(model),
        Key::D => model.params.show_debug = !model.params.show_debug,
        _ => {}
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
