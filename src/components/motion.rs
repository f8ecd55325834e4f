//! Constant-velocity motion for sprites.
//!
//! Position is tracked in floating point and snapped to whole pixels when it
//! is written into the sprite's destination rectangle.

use raylib::prelude::Vector2;

use crate::resources::displayarea::DisplayArea;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub pos: Vector2,
    pub initial: Vector2,
    /// Pixels per tick along each axis.
    pub speed: Vector2,
    /// Unit direction scaled by `speed` every tick. Zero means stationary.
    pub direction: Vector2,
}

impl Motion {
    pub fn new(initial: Vector2, speed: Vector2) -> Self {
        Self {
            pos: initial,
            initial,
            speed,
            direction: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    /// Speed that crosses the display width in `ticks_to_cross_screen` ticks,
    /// used for both axes.
    pub fn from_ticks(initial: Vector2, ticks_to_cross_screen: f32, area: &DisplayArea) -> Self {
        let per_tick = if ticks_to_cross_screen > 0.0 {
            area.width() / ticks_to_cross_screen
        } else {
            0.0
        };
        Self::new(
            initial,
            Vector2 {
                x: per_tick,
                y: per_tick,
            },
        )
    }

    pub fn set_direction(&mut self, x: f32, y: f32) {
        self.direction = Vector2 { x, y };
    }

    /// Advance one tick.
    pub fn update(&mut self) {
        self.pos.x += self.direction.x * self.speed.x;
        self.pos.y += self.direction.y * self.speed.y;
    }

    /// Back to the starting point.
    pub fn reset(&mut self) {
        self.pos = self.initial;
    }

    pub fn position(&self) -> Vector2 {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_from_ticks() {
        let area = DisplayArea::new(800.0, 600.0);
        let m = Motion::from_ticks(Vector2 { x: 0.0, y: 0.0 }, 200.0, &area);
        assert_eq!(m.speed.x, 4.0);
        assert_eq!(m.speed.y, 4.0);
    }

    #[test]
    fn test_zero_ticks_is_stationary() {
        let area = DisplayArea::new(800.0, 600.0);
        let mut m = Motion::from_ticks(Vector2 { x: 5.0, y: 5.0 }, 0.0, &area);
        m.set_direction(1.0, 1.0);
        m.update();
        assert_eq!(m.pos.x, 5.0);
    }

    #[test]
    fn test_update_and_reset() {
        let mut m = Motion::new(Vector2 { x: 1.0, y: 2.0 }, Vector2 { x: 3.0, y: 3.0 });
        m.update();
        assert_eq!(m.pos.x, 1.0);
        m.set_direction(1.0, -1.0);
        m.update();
        m.update();
        assert_eq!(m.pos.x, 7.0);
        assert_eq!(m.pos.y, -4.0);
        m.reset();
        assert_eq!(m.pos.x, 1.0);
        assert_eq!(m.pos.y, 2.0);
    }
}
