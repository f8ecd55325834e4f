//! Framework systems.
//!
//! Submodules overview
//! - [`audio`] – audio thread and the message queue bridge
//! - [`camera`] – snap the camera onto its focus
//! - [`fps`] – feed the FPS counter
//! - [`gamestate`] – detect pending state changes; run conditions
//! - [`input`] – poll raylib into the host's input snapshot
//! - [`menu`] – update the current menu page
//! - [`render`] – draw the world through a sprite batch
//! - [`sprite`] – advance sprites and the tile map
//! - [`time`] – advance the world clock
//! - [`title`] – update title screen buttons

pub mod audio;
pub mod camera;
pub mod fps;
pub mod gamestate;
pub mod input;
pub mod menu;
pub mod render;
pub mod sprite;
pub mod time;
pub mod title;
