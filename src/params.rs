/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct holding every setting of a
 * run: flock size, plane size, speed limit, rule strengths, perception radii
 * and tick rate. Defaults reproduce the classic 200 boids on a 500x500 plane.
 * Values come from the command line and may be edited through the UI; every
 * edit is validated before it reaches the engine.
 */

use crate::boid::PerceptionRadii;
use crate::error::{is_positive, SimError};
use crate::physics::TickSettings;
use crate::plane::Plane;
use crate::rules::RuleStrengths;

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParams {
    pub num_boids: usize,
    pub plane_width: f32,
    pub plane_height: f32,
    pub speed_limit: f32,
    pub cohesion_strength: f32,
    pub separation_strength: f32,
    pub alignment_strength: f32,
    pub avoid_radius: f32,
    pub align_radius: f32,
    pub approach_radius: f32,
    pub ticks_per_second: f32,
    pub enable_parallel: bool,
    pub show_debug: bool,
    pub pause_simulation: bool,
    pub seed: Option<u64>,
}

impl Default for SimulationParams {
    fn default() -> Self {
        let radii = PerceptionRadii::default();
        let strengths = RuleStrengths::default();
        Self {
            num_boids: 200,
            plane_width: 500.0,
            plane_height: 500.0,
            speed_limit: 3.0,
            cohesion_strength: strengths.cohesion,
            separation_strength: strengths.separation,
            alignment_strength: strengths.alignment,
            avoid_radius: radii.avoid,
            align_radius: radii.align,
            approach_radius: radii.approach,
            ticks_per_second: 30.0,
            enable_parallel: false,
            show_debug: false,
            pause_simulation: false,
            seed: None,
        }
    }
}

impl SimulationParams {
    pub fn validate(&self) -> Result<(), SimError> {
        self.plane()?;
        if self.num_boids == 0 {
            return Err(SimError::parameter("num_boids", self.num_boids));
        }
        if !is_positive(self.speed_limit) {
            return Err(SimError::InvalidSpeedLimit(self.speed_limit));
        }

        let positive = [
            ("avoid_radius", self.avoid_radius),
            ("align_radius", self.align_radius),
            ("approach_radius", self.approach_radius),
        ];
        for (name, value) in positive {
            if !is_positive(value) {
                return Err(SimError::parameter(name, value));
            }
        }

        if !Self::get_ticks_per_second_range().contains(&self.ticks_per_second) {
            return Err(SimError::parameter("ticks_per_second", self.ticks_per_second));
        }

        // Strengths may be zero to switch a rule off
        let strengths = [
            ("cohesion_strength", self.cohesion_strength),
            ("separation_strength", self.separation_strength),
            ("alignment_strength", self.alignment_strength),
        ];
        for (name, value) in strengths {
            if !value.is_finite() || value < 0.0 {
                return Err(SimError::parameter(name, value));
            }
        }

        Ok(())
    }

    pub fn plane(&self) -> Result<Plane, SimError> {
        Plane::new(self.plane_width, self.plane_height)
    }

    pub fn strengths(&self) -> RuleStrengths {
        RuleStrengths {
            cohesion: self.cohesion_strength,
            separation: self.separation_strength,
            alignment: self.alignment_strength,
        }
    }

    pub fn radii(&self) -> PerceptionRadii {
        PerceptionRadii {
            avoid: self.avoid_radius,
            align: self.align_radius,
            approach: self.approach_radius,
        }
    }

    pub fn tick_settings(&self) -> TickSettings {
        TickSettings {
            speed_limit: self.speed_limit,
            strengths: self.strengths(),
            parallel: self.enable_parallel,
        }
    }

    // Get parameter ranges for UI sliders
    pub fn get_num_boids_range() -> std::ops::RangeInclusive<usize> {
        1..=2000
    }

    pub fn get_speed_limit_range() -> std::ops::RangeInclusive<f32> {
        0.5..=20.0
    }

    pub fn get_strength_range() -> std::ops::RangeInclusive<f32> {
        0.0..=3.0
    }

    pub fn get_ticks_per_second_range() -> std::ops::RangeInclusive<f32> {
        1.0..=1000.0
    }
}
