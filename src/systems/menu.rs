use bevy_ecs::prelude::*;

use crate::resources::gamehost::GameHost;
use crate::resources::menu::MainMenu;

/// Update the current menu page against this frame's mouse.
pub fn menu_update_system(mut host: ResMut<GameHost>, menu: Option<ResMut<MainMenu>>) {
    if let Some(mut menu) = menu {
        menu.update(&mut *host);
    }
}
