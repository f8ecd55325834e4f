//! Title screen system.
//!
//! Hands the [`GameHost`] to the title buttons, which read the mouse
//! snapshot from it and call back into it on clicks.

use bevy_ecs::prelude::*;

use crate::components::title::TitleSprite;
use crate::resources::gamehost::GameHost;

pub fn title_update_system(mut host: ResMut<GameHost>, mut titles: Query<&mut TitleSprite>) {
    for mut title in titles.iter_mut() {
        title.update(&mut *host);
    }
}
