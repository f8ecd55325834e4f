//! Texture store and lightweight texture handles.
//!
//! The GPU textures live in [`TextureStore`]; sprites only carry a
//! [`TextureHandle`] (key and pixel size) so that their update logic can run
//! without a graphics context.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

/// Key and size of a texture owned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureHandle {
    pub key: String,
    pub width: i32,
    pub height: i32,
}

impl TextureHandle {
    pub fn new(key: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            key: key.into(),
            width,
            height,
        }
    }
}

/// Loaded textures keyed by string IDs.
#[derive(Resource, Default)]
pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    /// Insert a texture and return its handle.
    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) -> TextureHandle {
        let key = key.into();
        let handle = TextureHandle::new(key.clone(), texture.width, texture.height);
        self.map.insert(key, texture);
        handle
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&Texture2D> {
        self.map.get(key.as_ref())
    }

    /// Handle for an already loaded texture.
    pub fn handle(&self, key: impl AsRef<str>) -> Option<TextureHandle> {
        let key = key.as_ref();
        self.map
            .get(key)
            .map(|tex| TextureHandle::new(key, tex.width, tex.height))
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
