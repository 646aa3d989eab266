/*
 * Renderer Module
 *
 * Draws each boid as a small colored square. Plane coordinates have their
 * origin in the top-left corner with y pointing down; nannou's window space
 * is centered with y pointing up, so positions are mapped before drawing.
 */

use nannou::prelude::*;
use tracing::error;

use crate::app::Model;
use crate::BOID_SIZE;

pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let window_rect = app.window_rect();

    for boid in &model.flock {
        draw.rect()
            .xy(plane_to_screen(boid.position, window_rect))
            .w_h(BOID_SIZE, BOID_SIZE)
            .color(boid.color);
    }

    if model.params.show_debug {
        draw_debug_overlay(&draw, model, window_rect);
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        error!(?err, "failed to draw frame");
    }
    if let Err(err) = model.egui.draw_to_frame(&frame) {
        error!(?err, "failed to draw ui");
    }
}

// Top-left origin, y down -> centered origin, y up
pub fn plane_to_screen(position: Vec2, window_rect: Rect) -> Vec2 {
    vec2(window_rect.left() + position.x, window_rect.top() - position.y)
}

fn draw_debug_overlay(draw: &Draw, model: &Model, window_rect: Rect) {
    let line_height = 18.0;
    let margin = 12.0;

    // Perception radii of the first boid
    if let Some(first) = model.flock.get(0) {
        let center = plane_to_screen(first.position, window_rect);
        let rings = [
            (first.radii.avoid, RED),
            (first.radii.align, GREEN),
            (first.radii.approach, BLUE),
        ];
        for (radius, color) in rings {
            draw.ellipse()
                .xy(center)
                .radius(radius)
                .no_fill()
                .stroke(color)
                .stroke_weight(1.0);
        }
    }

    for (i, line) in model.debug_info.lines(model.flock.len()).iter().enumerate() {
        let y = window_rect.top() - margin - i as f32 * line_height;
        draw.text(line)
            .x_y(window_rect.left() + margin + 70.0, y)
            .color(WHITE)
            .font_size(12);
    }
}
