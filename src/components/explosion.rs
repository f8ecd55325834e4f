//! One-shot explosion overlay.
//!
//! A horizontal strip of frames drawn on top of the sprite. Once triggered
//! it plays through once at a fixed pace and then switches itself off.

use crate::components::pixelrect::PixelRect;
use crate::resources::texturestore::TextureHandle;

/// Ticks between explosion frames, independent of the sprite's own clock.
pub const EXPLODE_TICKS_PER_FRAME: u32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct ExplosionOverlay {
    pub texture: TextureHandle,
    pub frame_width: i32,
    pub frame_x: i32,
    pub tick_counter: u32,
    pub sound: Option<String>,
    exploding: bool,
}

impl ExplosionOverlay {
    pub fn new(texture: TextureHandle, frame_width: i32, sound: Option<String>) -> Self {
        Self {
            texture,
            frame_width,
            frame_x: 0,
            tick_counter: 0,
            sound,
            exploding: false,
        }
    }

    pub fn is_exploding(&self) -> bool {
        self.exploding
    }

    /// Start from the first frame. Returns false, changing nothing, if the
    /// overlay is already playing.
    pub fn trigger(&mut self) -> bool {
        if self.exploding {
            return false;
        }
        self.frame_x = 0;
        self.tick_counter = 0;
        self.exploding = true;
        true
    }

    /// Count one tick while exploding.
    pub fn tick(&mut self) {
        if !self.exploding {
            return;
        }
        self.tick_counter += 1;
        if self.tick_counter < EXPLODE_TICKS_PER_FRAME {
            return;
        }
        self.tick_counter = 0;
        if self.frame_x + self.frame_width >= self.texture.width {
            self.exploding = false;
        } else {
            self.frame_x += self.frame_width;
        }
    }

    /// Stop immediately.
    pub fn reset(&mut self) {
        self.exploding = false;
        self.frame_x = 0;
        self.tick_counter = 0;
    }

    pub fn source_rect(&self) -> PixelRect {
        PixelRect::new(self.frame_x, 0, self.frame_width, self.texture.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay(frames: i32) -> ExplosionOverlay {
        ExplosionOverlay::new(TextureHandle::new("boom", 16 * frames, 16), 16, None)
    }

    #[test]
    fn test_full_cycle_length() {
        for frames in 1..6 {
            let mut o = overlay(frames);
            assert!(o.trigger());
            let total = EXPLODE_TICKS_PER_FRAME as i32 * frames;
            for tick in 1..=total {
                o.tick();
                if tick < total {
                    assert!(o.is_exploding(), "{frames} frames ended early at {tick}");
                }
            }
            assert!(!o.is_exploding(), "{frames} frames still exploding");
        }
    }

    #[test]
    fn test_trigger_while_exploding_is_noop() {
        let mut o = overlay(4);
        o.trigger();
        for _ in 0..25 {
            o.tick();
        }
        let before = o.clone();
        assert!(!o.trigger());
        assert_eq!(o, before);
    }

    #[test]
    fn test_idle_tick_does_nothing() {
        let mut o = overlay(3);
        o.tick();
        assert_eq!(o.tick_counter, 0);
        assert_eq!(o.frame_x, 0);
    }

    #[test]
    fn test_source_rect_spans_texture_height() {
        let mut o = overlay(3);
        o.trigger();
        for _ in 0..EXPLODE_TICKS_PER_FRAME {
            o.tick();
        }
        assert_eq!(o.source_rect(), PixelRect::new(16, 0, 16, 16));
    }
}
