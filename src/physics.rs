/*
 * Physics Module
 *
 * This module advances the flock by one tick. For every boid it evaluates the
 * three rules, adds them to the current velocity, clamps each velocity
 * component to the speed limit, moves the boid and wraps it around the plane.
 *
 * Every boid is evaluated against the state the flock had at the start of the
 * tick: new states go into a separate buffer and are committed only once all
 * boids have been evaluated. The buffer can be filled in parallel.
 */

use nannou::prelude::*;
use rayon::prelude::*;

use crate::boid::Boid;
use crate::error::{is_positive, SimError};
use crate::plane::Plane;
use crate::rules::{self, RuleStrengths};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSettings {
    pub speed_limit: f32,
    pub strengths: RuleStrengths,
    pub parallel: bool,
}

impl TickSettings {
    pub fn new(speed_limit: f32) -> Self {
        Self {
            speed_limit,
            strengths: RuleStrengths::default(),
            parallel: false,
        }
    }
}

// Advance all boids by one tick with every rule at full strength
pub fn advance(boids: &mut [Boid], plane: &Plane, speed_limit: f32) -> Result<(), SimError> {
    advance_with(boids, plane, &TickSettings::new(speed_limit))
}

pub fn advance_with(
    boids: &mut [Boid],
    plane: &Plane,
    settings: &TickSettings,
) -> Result<(), SimError> {
    if !is_positive(settings.speed_limit) {
        return Err(SimError::InvalidSpeedLimit(settings.speed_limit));
    }
    if boids.is_empty() {
        return Ok(());
    }

    // Evaluate against the untouched slice, commit afterwards
    let next: Vec<(Vec2, Vec2)> = {
        let snapshot: &[Boid] = &*boids;
        if settings.parallel {
            (0..snapshot.len())
                .into_par_iter()
                .map(|i| next_state(i, snapshot, plane, settings))
                .collect()
        } else {
            (0..snapshot.len())
                .map(|i| next_state(i, snapshot, plane, settings))
                .collect()
        }
    };

    for (boid, (velocity, position)) in boids.iter_mut().zip(next) {
        boid.velocity = velocity;
        boid.position = position;
    }

    Ok(())
}

// New (velocity, position) for boid `index`, read from the pre-tick snapshot
fn next_state(
    index: usize,
    snapshot: &[Boid],
    plane: &Plane,
    settings: &TickSettings,
) -> (Vec2, Vec2) {
    let boid = &snapshot[index];
    let strengths = &settings.strengths;

    let candidate = boid.velocity
        + rules::cohesion(index, snapshot, strengths.cohesion)
        + rules::separation(index, snapshot, strengths.separation)
        + rules::alignment(index, snapshot, strengths.alignment);

    let velocity = vec2(
        limit(candidate.x, settings.speed_limit),
        limit(candidate.y, settings.speed_limit),
    );
    let position = plane.wrap(boid.position + velocity);

    (velocity, position)
}

// Clamp one component to [-lim, lim]
#[inline]
pub fn limit(value: f32, lim: f32) -> f32 {
    value.min(lim).max(-lim)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boid(x: f32, y: f32) -> Boid {
        Boid::new(vec2(x, y), rgb(0, 0, 0))
    }

    fn plane() -> Plane {
        Plane::new(500.0, 500.0).unwrap()
    }

    #[test]
    fn limit_clamps_both_ways() {
        assert_eq!(limit(5.0, 3.0), 3.0);
        assert_eq!(limit(-5.0, 3.0), -3.0);
        assert_eq!(limit(1.5, 3.0), 1.5);
    }

    #[test]
    fn rejects_bad_speed_limit() {
        let mut boids = vec![boid(1.0, 1.0)];
        assert_eq!(
            advance(&mut boids, &plane(), 0.0),
            Err(SimError::InvalidSpeedLimit(0.0))
        );
        assert!(advance(&mut boids, &plane(), -1.0).is_err());
        assert!(advance(&mut boids, &plane(), f32::NAN).is_err());
        // nothing moved
        assert_eq!(boids[0].position, vec2(1.0, 1.0));
    }

    #[test]
    fn empty_flock_is_a_no_op() {
        let mut boids: Vec<Boid> = Vec::new();
        assert!(advance(&mut boids, &plane(), 3.0).is_ok());
        assert!(boids.is_empty());
    }

    #[test]
    fn lone_boid_keeps_clamped_velocity() {
        let mut boids = vec![boid(10.0, 10.0).with_velocity(vec2(5.0, -1.0))];
        advance(&mut boids, &plane(), 3.0).unwrap();
        assert_eq!(boids[0].velocity, vec2(3.0, -1.0));
        assert_eq!(boids[0].position, vec2(13.0, 9.0));
    }

    #[test]
    fn clamp_is_per_component() {
        let mut boids = vec![boid(100.0, 100.0).with_velocity(vec2(3.0, 3.0))];
        advance(&mut boids, &plane(), 3.0).unwrap();
        // a magnitude clamp would shrink both components
        assert_eq!(boids[0].velocity, vec2(3.0, 3.0));
    }

    #[test]
    fn pair_separates_along_x() {
        let mut boids = vec![boid(100.0, 100.0), boid(105.0, 100.0)];
        advance(&mut boids, &plane(), 3.0).unwrap();
        assert_eq!(boids[0].velocity, vec2(-3.0, 0.0));
        assert_eq!(boids[1].velocity, vec2(3.0, 0.0));
        assert_eq!(boids[0].position, vec2(97.0, 100.0));
        assert_eq!(boids[1].position, vec2(108.0, 100.0));
    }

    #[test]
    fn crossing_the_edge_wraps() {
        let mut boids = vec![boid(499.0, 1.0).with_velocity(vec2(2.0, -2.0))];
        advance(&mut boids, &plane(), 3.0).unwrap();
        assert_eq!(boids[0].position, vec2(1.0, 499.0));
    }

    #[test]
    fn evaluation_sees_pre_tick_state() {
        // boid 1 is only within boid 2's avoid radius before boid 1 moves
        let mut boids = vec![
            boid(200.0, 200.0),
            boid(300.0, 300.0).with_velocity(vec2(3.0, 0.0)),
            boid(308.0, 300.0),
        ];
        advance(&mut boids, &plane(), 3.0).unwrap();
        // boid 2 is pushed by (308 - 300) from boid 1's old position
        assert_eq!(boids[2].velocity, vec2(3.0, 0.0));
        assert_eq!(boids[1].velocity, vec2(-3.0, 0.0));
    }

    #[test]
    fn custom_strengths_are_applied() {
        let mut boids = vec![boid(100.0, 100.0), boid(101.0, 100.0)];
        let settings = TickSettings {
            speed_limit: 3.0,
            strengths: RuleStrengths {
                cohesion: 1.0,
                separation: 0.5,
                alignment: 1.0,
            },
            parallel: false,
        };
        advance_with(&mut boids, &plane(), &settings).unwrap();
        assert_eq!(boids[0].velocity, vec2(-0.5, 0.0));
        assert_eq!(boids[1].velocity, vec2(0.5, 0.0));
    }
}
