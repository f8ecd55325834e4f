//! Game state transition event and observer.
//!
//! Anything holding the [`GameHost`] can request a state change through the
//! [`SpriteBasedGame`](crate::host::SpriteBasedGame) callbacks.
//! [`check_pending_state`](crate::systems::gamestate::check_pending_state)
//! then fires a [`GameStateChangedEvent`] and the observer here applies it:
//!
//! - entering `Playing` resets score and lives and calls `start_game` on every
//!   sprite and on the tile map,
//! - leaving `Playing` calls `end_game` on them,
//! - entering `Quitting` leaves the main loop to notice and close the window.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::sprite::Sprite;
use crate::resources::gamehost::{GameHost, GameStates};
use crate::resources::tilemap::TileMap;

#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut host: ResMut<GameHost>,
    mut sprites: Query<&mut Sprite>,
    mut tilemap: Option<ResMut<TileMap>>,
) {
    let Some((old_state, new_state)) = host.apply_pending() else {
        debug!("No state change pending.");
        return;
    };
    if old_state == new_state {
        debug!("State {:?} requested again, nothing to do", new_state);
        return;
    }
    info!("Transitioning from {:?} to {:?}", old_state, new_state);

    if old_state == GameStates::Playing {
        for mut sprite in sprites.iter_mut() {
            sprite.end_game();
        }
        if let Some(map) = tilemap.as_deref_mut() {
            map.end_game();
        }
    }

    match new_state {
        GameStates::Playing => {
            host.reset_counters();
            for mut sprite in sprites.iter_mut() {
                sprite.start_game();
            }
            if let Some(map) = tilemap.as_deref_mut() {
                if !map.start_game() {
                    warn!("Starting without a level");
                }
            }
        }
        GameStates::Title => debug!("Back to title"),
        GameStates::Quitting => info!("Quit requested"),
    }
}
