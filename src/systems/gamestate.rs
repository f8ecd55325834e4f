use bevy_ecs::prelude::*;

use crate::events::gamestate::GameStateChangedEvent;
use crate::resources::gamehost::{GameHost, GameStates, NextGameStates};

/// Fire [`GameStateChangedEvent`] when the host has a transition pending.
pub fn check_pending_state(mut commands: Commands, host: Res<GameHost>) {
    if let NextGameStates::Pending(_new_state) = host.next_state() {
        commands.trigger(GameStateChangedEvent {});
    }
}

pub fn state_is_playing(host: Res<GameHost>) -> bool {
    matches!(host.state(), GameStates::Playing)
}

pub fn state_is_title(host: Res<GameHost>) -> bool {
    matches!(host.state(), GameStates::Title)
}
