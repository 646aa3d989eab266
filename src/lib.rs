/*
 * Boid Flocking Simulation - Module Definitions
 *
 * Boids on a wrap-around plane following cohesion, separation and alignment.
 * The engine (plane, boid, rules, flock, physics) has no window dependency;
 * app, renderer, ui and input form the nannou driver around it.
 */

// Re-export key components for easier access
pub use boid::{Boid, PerceptionRadii};
pub use color::{ColorSource, RandomColors, SolidColor};
pub use error::SimError;
pub use flock::Flock;
pub use params::SimulationParams;
pub use physics::{advance, advance_with, TickSettings};
pub use plane::Plane;
pub use rules::RuleStrengths;
pub use debug::DebugInfo;
pub use app::Model;

// Define modules
pub mod error;
pub mod plane;
pub mod boid;
pub mod color;
pub mod rules;
pub mod flock;
pub mod physics;
pub mod params;
pub mod headless;
pub mod debug;
pub mod app;
pub mod ui;
pub mod renderer;
pub mod input;

// Constants
pub const BOID_SIZE: f32 = 6.0;
