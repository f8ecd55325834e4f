//! Frames-per-second counter.
//!
//! Collects frame durations into a fixed window and recomputes the average
//! once the window is full, so the displayed value changes at most once per
//! [`NUMBER_SAMPLES`] frames.

use bevy_ecs::prelude::Resource;

/// Frames averaged per reading.
pub const NUMBER_SAMPLES: usize = 50;

#[derive(Resource, Debug, Clone)]
pub struct FpsCounter {
    samples: [f32; NUMBER_SAMPLES],
    current_sample: usize,
    aggregate: f32,
    seconds_since_start: u32,
    fps: f32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            samples: [0.0; NUMBER_SAMPLES],
            current_sample: 0,
            aggregate: 0.0,
            seconds_since_start: 0,
            fps: 0.0,
        }
    }

    /// Record the duration (seconds) of the frame just drawn.
    pub fn draw_call(&mut self, frame_seconds: f32) {
        self.samples[self.current_sample] = frame_seconds;
        self.current_sample += 1;

        self.aggregate += frame_seconds;
        if self.aggregate > 1.0 {
            self.aggregate -= 1.0;
            self.seconds_since_start += 1;
        }

        if self.current_sample == NUMBER_SAMPLES {
            let average = self.samples.iter().sum::<f32>() / NUMBER_SAMPLES as f32;
            self.fps = if average > 0.0 { 1.0 / average } else { 0.0 };
            self.current_sample = 0;
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn seconds_since_start(&self) -> u32 {
        self.seconds_since_start
    }

    /// Display string, e.g. `FPS: 060`.
    pub fn fps_string(&self) -> String {
        format!("FPS: {:03.0}", self.fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_reading_before_window_fills() {
        let mut fps = FpsCounter::new();
        for _ in 0..NUMBER_SAMPLES - 1 {
            fps.draw_call(1.0 / 60.0);
        }
        assert_eq!(fps.fps(), 0.0);
        fps.draw_call(1.0 / 60.0);
        assert!((fps.fps() - 60.0).abs() < 0.01);
    }

    #[test]
    fn test_reading_uses_latest_window() {
        let mut fps = FpsCounter::new();
        for _ in 0..NUMBER_SAMPLES {
            fps.draw_call(1.0 / 60.0);
        }
        for _ in 0..NUMBER_SAMPLES {
            fps.draw_call(1.0 / 30.0);
        }
        assert!((fps.fps() - 30.0).abs() < 0.01);
    }

    #[test]
    fn test_fps_string_zero_padded() {
        let mut fps = FpsCounter::new();
        assert_eq!(fps.fps_string(), "FPS: 000");
        for _ in 0..NUMBER_SAMPLES {
            fps.draw_call(0.04);
        }
        assert_eq!(fps.fps_string(), "FPS: 025");
    }

    #[test]
    fn test_zero_durations_do_not_divide_by_zero() {
        let mut fps = FpsCounter::new();
        for _ in 0..NUMBER_SAMPLES {
            fps.draw_call(0.0);
        }
        assert_eq!(fps.fps(), 0.0);
    }

    #[test]
    fn test_seconds_since_start() {
        let mut fps = FpsCounter::new();
        for _ in 0..130 {
            fps.draw_call(0.02);
        }
        // 2.6 seconds elapsed in total
        assert_eq!(fps.seconds_since_start(), 2);
    }
}
