//! Per-frame input snapshots.
//!
//! [`MouseState`] is captured once per frame by
//! [`update_input_state`](crate::systems::input::update_input_state) and
//! handed to widgets read-only. [`KeyboardState`] records the tracked keys
//! that are down, went down or went up this frame.

use raylib::prelude::{KeyboardKey, Vector2};

use crate::components::pixelrect::PixelRect;

/// Mouse position and left button state for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseState {
    pub position: Vector2,
    pub left_pressed: bool,
}

impl Default for MouseState {
    fn default() -> Self {
        Self {
            position: Vector2 { x: 0.0, y: 0.0 },
            left_pressed: false,
        }
    }
}

impl MouseState {
    pub fn new(x: f32, y: f32, left_pressed: bool) -> Self {
        Self {
            position: Vector2 { x, y },
            left_pressed,
        }
    }

    /// One-pixel rectangle under the cursor.
    pub fn cursor_rect(&self) -> PixelRect {
        PixelRect::new(self.position.x as i32, self.position.y as i32, 1, 1)
    }
}

/// Keys polled every frame and their current state.
#[derive(Debug, Clone)]
pub struct KeyboardState {
    pub tracked: Vec<KeyboardKey>,
    pub held: Vec<KeyboardKey>,
    pub pressed: Vec<KeyboardKey>,
    pub released: Vec<KeyboardKey>,
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self {
            tracked: vec![
                KeyboardKey::KEY_W,
                KeyboardKey::KEY_A,
                KeyboardKey::KEY_S,
                KeyboardKey::KEY_D,
                KeyboardKey::KEY_UP,
                KeyboardKey::KEY_DOWN,
                KeyboardKey::KEY_LEFT,
                KeyboardKey::KEY_RIGHT,
                KeyboardKey::KEY_SPACE,
                KeyboardKey::KEY_ENTER,
                KeyboardKey::KEY_ESCAPE,
            ],
            held: Vec::new(),
            pressed: Vec::new(),
            released: Vec::new(),
        }
    }
}

impl KeyboardState {
    /// Forget the previous frame's state.
    pub fn clear(&mut self) {
        self.held.clear();
        self.pressed.clear();
        self.released.clear();
    }

    pub fn is_held(&self, key: KeyboardKey) -> bool {
        self.held.contains(&key)
    }

    pub fn is_pressed(&self, key: KeyboardKey) -> bool {
        self.pressed.contains(&key)
    }

    pub fn is_released(&self, key: KeyboardKey) -> bool {
        self.released.contains(&key)
    }
}
