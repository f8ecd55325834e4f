//! Input system.
//!
//! [`update_input_state`] polls raylib once per frame and stores the mouse
//! and tracked-key snapshot on the [`GameHost`], where widgets read it
//! through [`SpriteBasedGame`](crate::host::SpriteBasedGame).

use bevy_ecs::prelude::*;
use raylib::prelude::MouseButton;

use crate::resources::gamehost::GameHost;
use crate::resources::input::{KeyboardState, MouseState};

pub fn update_input_state(mut host: ResMut<GameHost>, rl: NonSend<raylib::RaylibHandle>) {
    host.mouse = MouseState {
        position: rl.get_mouse_position(),
        left_pressed: rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT),
    };

    host.keys.clear();
    let KeyboardState {
        tracked,
        held,
        pressed,
        released,
    } = &mut host.keys;
    for &key in tracked.iter() {
        if rl.is_key_down(key) {
            held.push(key);
        }
        if rl.is_key_pressed(key) {
            pressed.push(key);
        }
        if rl.is_key_released(key) {
            released.push(key);
        }
    }
}
