//! Camera follow system.
//!
//! Snaps the [`Camera2D`] onto its focus entity each frame. The focus can be
//! a [`Sprite`] or anything with a [`MapPosition`]; a missing or despawned
//! focus leaves the camera where it is.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::resources::camera2d::Camera2D;

pub fn camera_follow_system(
    mut camera: ResMut<Camera2D>,
    sprites: Query<&Sprite>,
    positions: Query<&MapPosition>,
) {
    let Some(focus) = camera.focus() else {
        return;
    };
    if let Ok(sprite) = sprites.get(focus) {
        camera.update(sprite);
    } else if let Ok(position) = positions.get(focus) {
        camera.update(position);
    }
}
