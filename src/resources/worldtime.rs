//! Simulation clock.
//!
//! Advanced once per frame by
//! [`update_world_time`](crate::systems::time::update_world_time). Power-up
//! windows are measured against [`WorldTime::elapsed_ms`].

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct WorldTime {
    /// Scaled seconds since the world started.
    pub elapsed: f64,
    /// Scaled seconds of the last frame.
    pub delta: f32,
    /// Wall-clock seconds of the last frame, ignoring `time_scale`.
    pub real_delta: f32,
    pub time_scale: f32,
    /// Frames advanced so far.
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            real_delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed * 1000.0
    }
}
