use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

use crate::resources::camera2d::Focusable;

/// World-space position for entities that are not sprites, e.g. an invisible
/// camera anchor.
#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}

impl Focusable for MapPosition {
    fn position(&self) -> Vector2 {
        self.pos
    }
}
