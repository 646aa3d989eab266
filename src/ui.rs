/*
 * UI Module
 *
 * The egui control panel. Sliders edit a copy of the parameters; the copy is
 * validated and only then replaces the live parameters.
 */

use nannou_egui::{egui, Egui};
use tracing::warn;

use crate::debug::DebugInfo;
use crate::params::SimulationParams;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UiResponse {
    pub reset_boids: bool,
    pub num_boids_changed: bool,
}

pub fn update_ui(egui: &mut Egui, params: &mut SimulationParams, debug_info: &DebugInfo) -> UiResponse {
    let mut response = UiResponse::default();
    let mut edited = params.clone();

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Flock", |ui| {
                ui.add(egui::Slider::new(&mut edited.num_boids, SimulationParams::get_num_boids_range()).text("Number of Boids"));
                if ui.button("Reset Boids").clicked() {
                    response.reset_boids = true;
                }
                ui.add(egui::Slider::new(&mut edited.speed_limit, SimulationParams::get_speed_limit_range()).text("Speed Limit"));
            });

            ui.collapsing("Rule Strengths", |ui| {
                ui.add(egui::Slider::new(&mut edited.cohesion_strength, SimulationParams::get_strength_range()).text("Cohesion"));
                ui.add(egui::Slider::new(&mut edited.separation_strength, SimulationParams::get_strength_range()).text("Separation"));
                ui.add(egui::Slider::new(&mut edited.alignment_strength, SimulationParams::get_strength_range()).text("Alignment"));
            });

            ui.collapsing("Performance", |ui| {
                ui.checkbox(&mut edited.enable_parallel, "Parallel Rule Evaluation");
                ui.add(egui::Slider::new(&mut edited.ticks_per_second, SimulationParams::get_ticks_per_second_range()).text("Ticks per Second"));
                ui.separator();
                for line in debug_info.lines(params.num_boids) {
                    ui.label(line);
                }
            });

            ui.checkbox(&mut edited.show_debug, "Show Debug Info");
            ui.checkbox(&mut edited.pause_simulation, "Pause Simulation");
        });

    if edited != *params {
        match edited.validate() {
            Ok(()) => {
                response.num_boids_changed = edited.num_boids != params.num_boids;
                *params = edited;
            }
            Err(err) => warn!(%err, "rejected parameter edit"),
        }
    }

    response
}
