//! ECS resources made available to systems.
//!
//! Overview
//! - `audio` – bridge and channels for the background audio thread
//! - `camera2d` – 2D camera following a focus entity
//! - `displayarea` – playable region used for sprite sizing
//! - `fontstore` – loaded fonts keyed by string IDs
//! - `fpscounter` – rolling frame-rate average
//! - `gamehost` – score, lives, input snapshot and state requests
//! - `input` – mouse and keyboard snapshots
//! - `menu` – paged menus of text, pictures and buttons
//! - `screensize` – current framebuffer dimensions in pixels
//! - `settings` – INI-backed typed settings
//! - `texturestore` – loaded textures and their handles
//! - `tilemap` – level grid built from color data
//! - `worldtime` – simulation time and delta
pub mod audio;
pub mod camera2d;
pub mod displayarea;
pub mod fontstore;
pub mod fpscounter;
pub mod gamehost;
pub mod input;
pub mod menu;
pub mod screensize;
pub mod settings;
pub mod texturestore;
pub mod tilemap;
pub mod worldtime;
