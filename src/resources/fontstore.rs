//! Loaded fonts and the size each one is drawn at.
//!
//! Lives as a non-send resource: raylib fonts belong to the main thread.
//! Menu text and the HUD name fonts by key; a key with no font behind it
//! falls back to raylib's built-in font in the batch.

use raylib::prelude::Font;
use rustc_hash::FxHashMap;

pub const DEFAULT_SPACING: f32 = 1.0;

struct FontEntry {
    font: Font,
    size: f32,
    spacing: f32,
}

#[derive(Default)]
pub struct FontStore {
    fonts: FxHashMap<String, FontEntry>,
}

impl FontStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `font` to be drawn at its own base size.
    pub fn add(&mut self, id: impl Into<String>, font: Font) {
        let size = font.baseSize as f32;
        self.add_sized(id, font, size);
    }

    /// Register `font` with an explicit draw size in pixels.
    pub fn add_sized(&mut self, id: impl Into<String>, font: Font, size: f32) {
        self.fonts.insert(
            id.into(),
            FontEntry {
                font,
                size,
                spacing: DEFAULT_SPACING,
            },
        );
    }

    pub fn get(&self, id: impl AsRef<str>) -> Option<&Font> {
        self.fonts.get(id.as_ref()).map(|e| &e.font)
    }

    /// Font with its draw size and glyph spacing.
    pub fn style(&self, id: impl AsRef<str>) -> Option<(&Font, f32, f32)> {
        self.fonts
            .get(id.as_ref())
            .map(|e| (&e.font, e.size, e.spacing))
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}
