/*
 * Color Module
 *
 * Boid colors are handed in by the caller through a ColorSource, so neither
 * the flock nor the engine touches process-wide randomness.
 */

use nannou::prelude::*;
use rand::Rng;

pub trait ColorSource {
    fn next_color(&mut self) -> Rgb<u8>;
}

// Random color per boid, each channel drawn from [0, 255)
pub struct RandomColors<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomColors<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ColorSource for RandomColors<R> {
    fn next_color(&mut self) -> Rgb<u8> {
        rgb(
            self.rng.gen_range(0..255),
            self.rng.gen_range(0..255),
            self.rng.gen_range(0..255),
        )
    }
}

// Same color for every boid
pub struct SolidColor(pub Rgb<u8>);

impl ColorSource for SolidColor {
    fn next_color(&mut self) -> Rgb<u8> {
        self.0
    }
}

impl Default for SolidColor {
    fn default() -> Self {
        Self(rgb(220, 220, 220))
    }
}
