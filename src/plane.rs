/*
 * Plane Module
 *
 * The rectangular domain the flock lives on. Opposite edges are joined, so a
 * boid leaving one side comes back in on the other. Coordinates run from 0 to
 * width on x and 0 to height on y, origin in the top-left corner.
 */

use nannou::prelude::*;

use crate::error::{is_positive, SimError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    width: f32,
    height: f32,
}

impl Plane {
    pub fn new(width: f32, height: f32) -> Result<Self, SimError> {
        if !is_positive(width) || !is_positive(height) {
            return Err(SimError::InvalidPlane { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    // Single-step wrap: at most one width (or height) is added or removed per
    // axis, so a point more than one dimension outside stays outside.
    pub fn wrap(&self, point: Vec2) -> Vec2 {
        vec2(
            wrap_axis(point.x, self.width),
            wrap_axis(point.y, self.height),
        )
    }

    // Upper bound is closed: `wrap` keeps a coordinate equal to the dimension
    pub fn contains(&self, point: Vec2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}

#[inline]
fn wrap_axis(mut value: f32, size: f32) -> f32 {
    if value > size {
        value -= size;
    }
    if value < 0.0 {
        value += size;
    }
    value
}
