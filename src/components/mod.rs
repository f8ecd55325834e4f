//! ECS components and the behavior modules sprites are built from.
//!
//! Submodules overview:
//! - [`animation`] – sprite-sheet frame cursor
//! - [`button`] – clickable image buttons and their actions
//! - [`explosion`] – one-shot explosion overlay
//! - [`mapposition`] – world-space position usable as a camera focus
//! - [`motion`] – constant-velocity movement
//! - [`pixelrect`] – integer pixel rectangles
//! - [`powerup`] – time-gated activation
//! - [`sprite`] – the composed sprite component
//! - [`title`] – title screen backdrop with buttons

pub mod animation;
pub mod button;
pub mod explosion;
pub mod mapposition;
pub mod motion;
pub mod pixelrect;
pub mod powerup;
pub mod sprite;
pub mod title;
