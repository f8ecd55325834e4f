//! Capabilities the hosting game provides to the framework.
//!
//! Widgets and tile maps never own the game; they talk to it through
//! [`SpriteBasedGame`]. Exploding sprites fire their sound through a
//! [`SoundPlayer`] and ignore whatever it reports back.

use raylib::prelude::KeyboardKey;

use crate::resources::input::MouseState;

/// Callbacks and input queries implemented by the hosting application.
pub trait SpriteBasedGame {
    fn update_lives(&mut self, delta: i32);
    fn update_score(&mut self, delta: i32);
    fn score(&self) -> i32;
    /// Mouse snapshot for the current frame.
    fn mouse_state(&self) -> MouseState;
    /// Key went down this frame.
    fn key_pressed(&self, key: KeyboardKey) -> bool;
    /// Key went up this frame.
    fn key_released(&self, key: KeyboardKey) -> bool;
    /// Key is down this frame.
    fn key_held(&self, key: KeyboardKey) -> bool;
    fn start_game(&mut self);
    fn end_game(&mut self);
    fn exit_program(&mut self);
}

/// Fire-and-forget sound effect playback.
pub trait SoundPlayer {
    fn play(&mut self, id: &str) -> Result<(), String>;
}
