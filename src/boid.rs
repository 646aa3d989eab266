/*
 * Boid Module
 *
 * This module defines the Boid record the flocking engine reads and updates.
 * A boid is a point with a velocity and three perception radii:
 * 1. Avoid: neighbors closer than this push the boid away (separation)
 * 2. Align: neighbors closer than this share their velocity (alignment)
 * 3. Approach: neighbors closer than this pull the boid in (cohesion)
 *
 * The color is presentation only and never read by the engine.
 */

use std::fmt;

use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerceptionRadii {
    pub avoid: f32,
    pub align: f32,
    pub approach: f32,
}

impl Default for PerceptionRadii {
    fn default() -> Self {
        Self {
            avoid: 10.0,
            align: 50.0,
            approach: 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Boid {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radii: PerceptionRadii,
    pub color: Rgb<u8>,
}

impl Boid {
    // New boids start at rest with the default radii
    pub fn new(position: Vec2, color: Rgb<u8>) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            radii: PerceptionRadii::default(),
            color,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_radii(mut self, radii: PerceptionRadii) -> Self {
        self.radii = radii;
        self
    }

    #[inline]
    pub fn distance_to(&self, other: &Boid) -> f32 {
        self.position.distance(other.position)
    }
}

impl fmt::Display for Boid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Boid | Position ({:.1}, {:.1}) | Velocity ({:.1}, {:.1})",
            self.position.x, self.position.y, self.velocity.x, self.velocity.y
        )
    }
}
