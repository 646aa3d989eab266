/*
 * Flock Module
 *
 * The agent store: an ordered, fixed-size collection of boids. Index order is
 * only used to keep a boid from counting itself as a neighbor. Once built, a
 * flock never grows or shrinks; the physics module is its only writer.
 */

use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::boid::{Boid, PerceptionRadii};
use crate::color::{ColorSource, RandomColors};
use crate::error::SimError;
use crate::params::SimulationParams;
use crate::physics::{self, TickSettings};
use crate::plane::Plane;

#[derive(Debug, Clone, Default)]
pub struct Flock {
    boids: Vec<Boid>,
}

impl Flock {
    // Place `count` boids uniformly on the plane, at rest
    pub fn scatter<R, C>(
        count: usize,
        plane: &Plane,
        radii: PerceptionRadii,
        rng: &mut R,
        colors: &mut C,
    ) -> Self
    where
        R: Rng,
        C: ColorSource + ?Sized,
    {
        let boids = (0..count)
            .map(|_| {
                let x = rng.gen_range(0.0..plane.width());
                let y = rng.gen_range(0.0..plane.height());
                Boid::new(vec2(x, y), colors.next_color()).with_radii(radii)
            })
            .collect();

        Self { boids }
    }

    // Flock for a run: random colors from a generator seeded off `rng`
    pub fn spawn<R: Rng>(params: &SimulationParams, plane: &Plane, rng: &mut R) -> Self {
        let mut colors = RandomColors::new(StdRng::seed_from_u64(rng.gen()));
        Self::scatter(params.num_boids, plane, params.radii(), rng, &mut colors)
    }

    pub fn from_boids(boids: Vec<Boid>) -> Self {
        Self { boids }
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Boid> {
        self.boids.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Boid> {
        self.boids.iter()
    }

    pub fn as_slice(&self) -> &[Boid] {
        &self.boids
    }

    pub fn advance(&mut self, plane: &Plane, settings: &TickSettings) -> Result<(), SimError> {
        physics::advance_with(&mut self.boids, plane, settings)
    }

    // Mean position and mean per-boid speed, for reporting
    pub fn centroid(&self) -> Option<Vec2> {
        if self.boids.is_empty() {
            return None;
        }
        let sum = self.boids.iter().fold(Vec2::ZERO, |acc, b| acc + b.position);
        Some(sum / self.boids.len() as f32)
    }

    pub fn mean_speed(&self) -> f32 {
        if self.boids.is_empty() {
            return 0.0;
        }
        let total: f32 = self.boids.iter().map(|b| b.velocity.length()).sum();
        total / self.boids.len() as f32
    }
}

impl<'a> IntoIterator for &'a Flock {
    type Item = &'a Boid;
    type IntoIter = std::slice::Iter<'a, Boid>;

    fn into_iter(self) -> Self::IntoIter {
        self.boids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::SolidColor;

    fn gray_flock(count: usize, plane: &Plane, radii: PerceptionRadii, seed: u64) -> Flock {
        let mut rng = StdRng::seed_from_u64(seed);
        Flock::scatter(count, plane, radii, &mut rng, &mut SolidColor::default())
    }

    #[test]
    fn scatter_places_boids_on_the_plane_at_rest() {
        let plane = Plane::new(320.0, 200.0).unwrap();
        let flock = gray_flock(500, &plane, PerceptionRadii::default(), 42);

        assert_eq!(flock.len(), 500);
        for boid in &flock {
            assert!(boid.position.x >= 0.0 && boid.position.x < 320.0);
            assert!(boid.position.y >= 0.0 && boid.position.y < 200.0);
            assert_eq!(boid.velocity, Vec2::ZERO);
        }
    }

    #[test]
    fn scatter_is_reproducible_with_a_seed() {
        let plane = Plane::new(500.0, 500.0).unwrap();
        let a = gray_flock(20, &plane, PerceptionRadii::default(), 1);
        let b = gray_flock(20, &plane, PerceptionRadii::default(), 1);
        let pa: Vec<Vec2> = a.iter().map(|b| b.position).collect();
        let pb: Vec<Vec2> = b.iter().map(|b| b.position).collect();
        assert_eq!(pa, pb);
    }

    #[test]
    fn scatter_applies_radii() {
        let plane = Plane::new(500.0, 500.0).unwrap();
        let radii = PerceptionRadii { avoid: 5.0, align: 20.0, approach: 40.0 };
        let flock = gray_flock(3, &plane, radii, 3);
        assert!(flock.iter().all(|b| b.radii == radii));
    }

    #[test]
    fn advance_keeps_cardinality() {
        let plane = Plane::new(500.0, 500.0).unwrap();
        let mut flock = gray_flock(64, &plane, PerceptionRadii::default(), 9);
        for _ in 0..10 {
            flock.advance(&plane, &TickSettings::new(3.0)).unwrap();
        }
        assert_eq!(flock.len(), 64);
    }

    #[test]
    fn spawn_follows_params() {
        let params = SimulationParams { num_boids: 12, avoid_radius: 4.0, ..Default::default() };
        let plane = params.plane().unwrap();
        let flock = Flock::spawn(&params, &plane, &mut StdRng::seed_from_u64(5));
        assert_eq!(flock.len(), 12);
        assert!(flock.iter().all(|b| b.radii == params.radii()));
    }

    #[test]
    fn statistics_of_empty_and_small_flocks() {
        let empty = Flock::default();
        assert_eq!(empty.centroid(), None);
        assert_eq!(empty.mean_speed(), 0.0);

        let flock = Flock::from_boids(vec![
            Boid::new(vec2(0.0, 0.0), rgb(0, 0, 0)).with_velocity(vec2(3.0, 4.0)),
            Boid::new(vec2(10.0, 20.0), rgb(0, 0, 0)),
        ]);
        assert_eq!(flock.centroid(), Some(vec2(5.0, 10.0)));
        assert_eq!(flock.mean_speed(), 2.5);
    }
}
