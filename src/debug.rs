/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct with the frame and tick metrics
 * shown in the UI and in the debug overlay.
 */

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub ticks: u64,
    pub ticks_this_frame: usize,
    pub last_tick_time: Duration,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            ticks: 0,
            ticks_this_frame: 0,
            last_tick_time: Duration::ZERO,
        }
    }
}

impl DebugInfo {
    pub fn record_tick(&mut self, took: Duration) {
        self.ticks += 1;
        self.ticks_this_frame += 1;
        self.last_tick_time = took;
    }

    // Human readable lines for the overlay
    pub fn lines(&self, boids: usize) -> Vec<String> {
        vec![
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Tick time: {:.2} ms", self.last_tick_time.as_secs_f64() * 1000.0),
            format!("Ticks: {}", self.ticks),
            format!("Boids: {}", boids),
        ]
    }
}
