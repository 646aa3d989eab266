/*
 * Rules Module
 *
 * The three local flocking rules. Each one looks at every other boid in the
 * slice, gates neighbors by the target boid's own radius, and returns a
 * velocity correction scaled by `strength`:
 * 1. Cohesion: move about 1% of the way toward the local center of mass
 * 2. Separation: back away from every boid that is too close
 * 3. Alignment: move 1/8 of the way toward the local average velocity
 *
 * Cohesion and alignment only act once at least two neighbors qualify, and
 * they divide the neighbor sum by (count - 1). Both quirks are kept as is.
 */

use nannou::prelude::*;

use crate::boid::Boid;

// Cohesion moves 1/100 of the offset per tick, alignment 1/8
const COHESION_DIVISOR: f32 = 100.0;
const ALIGNMENT_DIVISOR: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleStrengths {
    pub cohesion: f32,
    pub separation: f32,
    pub alignment: f32,
}

impl Default for RuleStrengths {
    fn default() -> Self {
        Self {
            cohesion: 1.0,
            separation: 1.0,
            alignment: 1.0,
        }
    }
}

// Seek the center of neighbors within the approach radius
pub fn cohesion(index: usize, boids: &[Boid], strength: f32) -> Vec2 {
    let target = &boids[index];
    let radius = target.radii.approach;

    let (sum, count) = neighbor_sum(index, boids, radius, |other| other.position);
    if count < 2 {
        return Vec2::ZERO;
    }

    let center = sum / (count - 1) as f32;
    (center - target.position) / COHESION_DIVISOR * strength
}

// Flee boids within the avoid radius; no averaging, every one adds up
pub fn separation(index: usize, boids: &[Boid], strength: f32) -> Vec2 {
    let target = &boids[index];
    let radius = target.radii.avoid;

    let mut push = Vec2::ZERO;
    for (j, other) in boids.iter().enumerate() {
        if j != index && target.distance_to(other) < radius {
            push -= other.position - target.position;
        }
    }

    push * strength
}

// Match the average velocity of neighbors within the align radius
pub fn alignment(index: usize, boids: &[Boid], strength: f32) -> Vec2 {
    let target = &boids[index];
    let radius = target.radii.align;

    let (sum, count) = neighbor_sum(index, boids, radius, |other| other.velocity);
    if count < 2 {
        return Vec2::ZERO;
    }

    let average = sum / (count - 1) as f32;
    (average - target.velocity) / ALIGNMENT_DIVISOR * strength
}

// Sum a per-boid quantity over every other boid strictly inside `radius`
#[inline]
fn neighbor_sum<F>(index: usize, boids: &[Boid], radius: f32, quantity: F) -> (Vec2, usize)
where
    F: Fn(&Boid) -> Vec2,
{
    let target = &boids[index];
    boids
        .iter()
        .enumerate()
        .filter(|&(j, other)| j != index && target.distance_to(other) < radius)
        .fold((Vec2::ZERO, 0), |(sum, count), (_, other)| {
            (sum + quantity(other), count + 1)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn boid(x: f32, y: f32) -> Boid {
        Boid::new(vec2(x, y), rgb(255, 255, 255))
    }

    #[test]
    fn cohesion_needs_two_neighbors() {
        let boids = [boid(0.0, 0.0), boid(10.0, 0.0)];
        assert_eq!(cohesion(0, &boids, 1.0), Vec2::ZERO);
        assert_eq!(cohesion(1, &boids, 1.0), Vec2::ZERO);
    }

    #[test]
    fn cohesion_divides_by_count_minus_one() {
        let boids = [boid(0.0, 0.0), boid(10.0, 0.0), boid(0.0, 20.0)];

        // neighbors of 0 sum to (10, 20); divided by (2 - 1) and then by 100
        let pull = cohesion(0, &boids, 1.0);
        assert_relative_eq!(pull.x, 0.1);
        assert_relative_eq!(pull.y, 0.2);

        // neighbors of 1 sum to (0, 20); (0 - 10, 20 - 0) / 100
        let pull = cohesion(1, &boids, 1.0);
        assert_relative_eq!(pull.x, -0.1);
        assert_relative_eq!(pull.y, 0.2);
    }

    #[test]
    fn cohesion_scales_with_strength() {
        let boids = [boid(0.0, 0.0), boid(10.0, 0.0), boid(0.0, 20.0)];
        let pull = cohesion(0, &boids, 0.5);
        assert_relative_eq!(pull.x, 0.05);
        assert_relative_eq!(pull.y, 0.1);
    }

    #[test]
    fn cohesion_radius_is_strict() {
        // second neighbor sits exactly on the approach radius
        let boids = [boid(0.0, 0.0), boid(10.0, 0.0), boid(100.0, 0.0)];
        assert_eq!(cohesion(0, &boids, 1.0), Vec2::ZERO);
    }

    #[test]
    fn separation_is_symmetric_for_a_pair() {
        let boids = [boid(100.0, 100.0), boid(105.0, 100.0)];
        let a = separation(0, &boids, 1.0);
        let b = separation(1, &boids, 1.0);
        assert_eq!(a, vec2(-5.0, 0.0));
        assert_eq!(b, vec2(5.0, 0.0));
        assert_eq!(a, -b);
    }

    #[test]
    fn separation_accumulates_every_close_boid() {
        let boids = [boid(50.0, 50.0), boid(53.0, 50.0), boid(50.0, 46.0), boid(80.0, 80.0)];
        assert_eq!(separation(0, &boids, 1.0), vec2(-3.0, 4.0));
        assert_eq!(separation(0, &boids, 2.0), vec2(-6.0, 8.0));
    }

    #[test]
    fn separation_ignores_boids_on_the_radius() {
        let boids = [boid(0.0, 0.0), boid(10.0, 0.0)];
        assert_eq!(separation(0, &boids, 1.0), Vec2::ZERO);
    }

    #[test]
    fn alignment_matches_velocity_with_two_neighbors() {
        let boids = [
            boid(0.0, 0.0).with_velocity(vec2(1.0, 0.0)),
            boid(10.0, 0.0).with_velocity(vec2(2.0, 1.0)),
            boid(0.0, 10.0).with_velocity(vec2(3.0, -1.0)),
        ];
        // neighbors sum to (5, 0); divided by 1, minus (1, 0), over 8
        let nudge = alignment(0, &boids, 1.0);
        assert_relative_eq!(nudge.x, 0.5);
        assert_relative_eq!(nudge.y, 0.0);
    }

    #[test]
    fn alignment_uses_its_own_radius() {
        // both neighbors inside approach (100) but outside align (50)
        let boids = [
            boid(0.0, 0.0),
            boid(60.0, 0.0).with_velocity(vec2(2.0, 2.0)),
            boid(0.0, 60.0).with_velocity(vec2(2.0, 2.0)),
        ];
        assert_eq!(alignment(0, &boids, 1.0), Vec2::ZERO);
        assert_ne!(cohesion(0, &boids, 1.0), Vec2::ZERO);
    }

    #[test]
    fn isolated_boid_gets_no_correction() {
        let boids = [boid(10.0, 10.0).with_velocity(vec2(1.0, 1.0)), boid(400.0, 400.0)];
        assert_eq!(cohesion(0, &boids, 1.0), Vec2::ZERO);
        assert_eq!(separation(0, &boids, 1.0), Vec2::ZERO);
        assert_eq!(alignment(0, &boids, 1.0), Vec2::ZERO);
    }
}
