//! Display area resource.
//!
//! Describes the playable region of the screen. Sprites use it to derive
//! their on-screen size (as a fraction of the display width) and their
//! speed (display width crossed in a number of ticks).

use bevy_ecs::prelude::Resource;

use crate::components::pixelrect::PixelRect;

/// Bounds of the display area in pixels.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct DisplayArea {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl DisplayArea {
    /// Area starting at the origin with the given size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            min_x: 0.0,
            max_x: width,
            min_y: 0.0,
            max_y: height,
        }
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// The whole area as a pixel rectangle (truncated like a cast).
    pub fn to_rect(&self) -> PixelRect {
        PixelRect::new(
            self.min_x as i32,
            self.min_y as i32,
            self.width() as i32,
            self.height() as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_rect() {
        let area = DisplayArea {
            min_x: 10.0,
            max_x: 810.0,
            min_y: 20.0,
            max_y: 620.0,
        };
        assert_eq!(area.width(), 800.0);
        assert_eq!(area.to_rect(), PixelRect::new(10, 20, 800, 600));
    }
}
