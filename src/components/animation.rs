//! Sprite-sheet animation state.
//!
//! The sheet is laid out as rows of equally sized frames. The cursor walks
//! along the active row, one frame every `update_clock` ticks, and wraps
//! back to the first column once the next frame would run off the texture.

use raylib::prelude::Vector2;
use serde::{Deserialize, Serialize};

use crate::components::pixelrect::PixelRect;

/// Ticks between frame advances unless configured otherwise.
pub const DEFAULT_UPDATE_CLOCK: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationState {
    /// Left edge of the current frame; always a multiple of `frame_width`.
    pub frame_x: i32,
    /// Top edge of the active row; always a multiple of `frame_height`.
    pub frame_y: i32,
    pub frame_width: i32,
    pub frame_height: i32,
    pub tick_counter: u32,
    pub update_clock: u32,
    pub row: i32,
}

impl AnimationState {
    pub fn new(frame_width: i32, frame_height: i32, update_clock: u32) -> Self {
        Self {
            frame_x: 0,
            frame_y: 0,
            frame_width,
            frame_height,
            tick_counter: 0,
            update_clock: update_clock.max(1),
            row: 0,
        }
    }

    /// Count one update tick, advancing the frame when the clock fills.
    /// Returns true when the frame changed.
    pub fn tick(&mut self, texture_width: i32) -> bool {
        self.tick_counter += 1;
        if self.tick_counter < self.update_clock {
            return false;
        }
        self.tick_counter = 0;
        if self.frame_x + self.frame_width >= texture_width {
            self.frame_x = 0;
        } else {
            self.frame_x += self.frame_width;
        }
        true
    }

    /// Select a row of the sheet. Returns false, leaving the state untouched,
    /// if the texture does not contain that row.
    pub fn set_row(&mut self, row: i32, texture_height: i32) -> bool {
        if row < 0 {
            return false;
        }
        let row_y = row * self.frame_height;
        if row_y + self.frame_height > texture_height {
            return false;
        }
        self.frame_y = row_y;
        self.row = row;
        true
    }

    pub fn source_rect(&self) -> PixelRect {
        PixelRect::new(self.frame_x, self.frame_y, self.frame_width, self.frame_height)
    }

    /// Centre of a frame, used as the rotation pivot.
    pub fn origin(&self) -> Vector2 {
        Vector2 {
            x: (self.frame_width / 2) as f32,
            y: (self.frame_height / 2) as f32,
        }
    }

    /// Back to the first frame of the first row.
    pub fn reset(&mut self) {
        self.frame_x = 0;
        self.frame_y = 0;
        self.row = 0;
        self.tick_counter = 0;
    }
}
