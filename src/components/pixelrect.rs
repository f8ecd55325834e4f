//! Integer pixel rectangle.
//!
//! Sprites place themselves on whole pixels, so their destination and source
//! rectangles are kept as integers and converted to raylib's float
//! [`Rectangle`] only at draw time.

use raylib::prelude::{Rectangle, Vector2};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub const EMPTY: PixelRect = PixelRect {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Strict overlap test; rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &PixelRect) -> bool {
        other.x < self.right()
            && self.x < other.right()
            && other.y < self.bottom()
            && self.y < other.bottom()
    }

    /// Inclusive point test, edges count as inside.
    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.x as f32
            && point.y >= self.y as f32
            && point.x <= self.right() as f32
            && point.y <= self.bottom() as f32
    }

    pub fn center(&self) -> Vector2 {
        Vector2 {
            x: self.x as f32 + self.width as f32 * 0.5,
            y: self.y as f32 + self.height as f32 * 0.5,
        }
    }

    pub fn to_raylib(&self) -> Rectangle {
        Rectangle {
            x: self.x as f32,
            y: self.y as f32,
            width: self.width as f32,
            height: self.height as f32,
        }
    }
}

/// Round half-up to the nearest whole pixel.
pub fn round_to_pixel(value: f32) -> i32 {
    (value + 0.5).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects_overlap() {
        let a = PixelRect::new(0, 0, 10, 10);
        let b = PixelRect::new(5, 5, 10, 10);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_intersects_touching_edges_is_false() {
        let a = PixelRect::new(0, 0, 10, 10);
        let b = PixelRect::new(10, 0, 10, 10);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_contains_includes_edges() {
        let r = PixelRect::new(10, 10, 20, 20);
        assert!(r.contains(Vector2 { x: 10.0, y: 10.0 }));
        assert!(r.contains(Vector2 { x: 30.0, y: 30.0 }));
        assert!(!r.contains(Vector2 { x: 30.5, y: 15.0 }));
    }

    #[test]
    fn test_round_to_pixel_half_up() {
        assert_eq!(round_to_pixel(1.4), 1);
        assert_eq!(round_to_pixel(1.5), 2);
        assert_eq!(round_to_pixel(-1.5), -1);
        assert_eq!(round_to_pixel(-1.6), -2);
    }
}
