//! Screen size resource.
//!
//! Current framebuffer dimensions in pixels. The camera centres on it and
//! sprites size themselves against the [`DisplayArea`] derived from it.

use bevy_ecs::prelude::Resource;

use crate::resources::displayarea::DisplayArea;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub w: i32,
    pub h: i32,
}

impl ScreenSize {
    pub fn display_area(&self) -> DisplayArea {
        DisplayArea::new(self.w as f32, self.h as f32)
    }
}
