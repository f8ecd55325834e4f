//! spriteframe library.
//!
//! A small 2D game framework on top of raylib and bevy_ecs: a following
//! camera, composable sprites, title and menu widgets, a level grid, an FPS
//! counter and INI-backed settings.

pub mod batch;
pub mod components;
pub mod events;
pub mod game;
pub mod host;
pub mod resources;
pub mod systems;
