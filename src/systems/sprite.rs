//! Per-tick sprite updates.
//!
//! Every [`Sprite`] and the [`TileMap`] (with its own sprites) advance once
//! per frame, with the world clock feeding power-up expiry.

use bevy_ecs::prelude::*;

use crate::components::sprite::Sprite;
use crate::resources::tilemap::TileMap;
use crate::resources::worldtime::WorldTime;

pub fn sprite_update_system(time: Res<WorldTime>, mut sprites: Query<&mut Sprite>) {
    let now = time.elapsed_ms();
    for mut sprite in sprites.iter_mut() {
        sprite.update(now);
    }
}

pub fn tilemap_update_system(time: Res<WorldTime>, tilemap: Option<ResMut<TileMap>>) {
    if let Some(mut map) = tilemap {
        map.update(time.elapsed_ms());
    }
}
