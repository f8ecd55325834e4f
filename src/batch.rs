//! Drawing capability used by sprites, widgets and menus.
//!
//! Everything in the framework draws through [`SpriteBatch`], never through
//! raylib directly. [`RaylibBatch`] is the real implementation on top of a
//! raylib draw handle; tests substitute a recorder.

use raylib::prelude::*;

use crate::components::pixelrect::PixelRect;
use crate::resources::fontstore::FontStore;
use crate::resources::texturestore::TextureStore;

/// Font size used when a text widget names a font that is not loaded.
const FALLBACK_FONT_SIZE: i32 = 20;

/// Mirroring applied to a textured quad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpriteFlip {
    #[default]
    None,
    Horizontal,
    Vertical,
    Both,
}

/// Extra placement parameters for [`SpriteBatch::draw_ex`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawParams {
    /// Radians, clockwise on screen.
    pub rotation: f32,
    /// Pivot in source-texture pixels.
    pub origin: Vector2,
    pub flip: SpriteFlip,
    /// Depth hint; engines that draw in submission order ignore it.
    pub layer: f32,
}

impl Default for DrawParams {
    fn default() -> Self {
        Self {
            rotation: 0.0,
            origin: Vector2 { x: 0.0, y: 0.0 },
            flip: SpriteFlip::None,
            layer: 0.0,
        }
    }
}

pub trait SpriteBatch {
    /// Blit `src` (whole texture when `None`) of `texture` into `dest`.
    fn draw(&mut self, texture: &str, dest: PixelRect, src: Option<PixelRect>, tint: Color);

    fn draw_ex(
        &mut self,
        texture: &str,
        dest: PixelRect,
        src: Option<PixelRect>,
        tint: Color,
        params: DrawParams,
    );

    fn draw_text(&mut self, font: &str, text: &str, position: Vector2, tint: Color);
}

/// [`SpriteBatch`] over any raylib draw handle (plain or inside a 2D camera).
pub struct RaylibBatch<'a, D: RaylibDraw> {
    d: &'a mut D,
    textures: &'a TextureStore,
    fonts: &'a FontStore,
}

impl<'a, D: RaylibDraw> RaylibBatch<'a, D> {
    pub fn new(d: &'a mut D, textures: &'a TextureStore, fonts: &'a FontStore) -> Self {
        Self { d, textures, fonts }
    }
}

impl<D: RaylibDraw> SpriteBatch for RaylibBatch<'_, D> {
    fn draw(&mut self, texture: &str, dest: PixelRect, src: Option<PixelRect>, tint: Color) {
        self.draw_ex(texture, dest, src, tint, DrawParams::default());
    }

    fn draw_ex(
        &mut self,
        texture: &str,
        dest: PixelRect,
        src: Option<PixelRect>,
        tint: Color,
        params: DrawParams,
    ) {
        let Some(tex) = self.textures.get(texture) else {
            log::debug!("draw skipped, texture '{}' not loaded", texture);
            return;
        };
        let src = src.unwrap_or(PixelRect::new(0, 0, tex.width, tex.height));
        let mut source = src.to_raylib();
        match params.flip {
            SpriteFlip::None => {}
            SpriteFlip::Horizontal => source.width = -source.width,
            SpriteFlip::Vertical => source.height = -source.height,
            SpriteFlip::Both => {
                source.width = -source.width;
                source.height = -source.height;
            }
        }

        // raylib expects the pivot in destination pixels.
        let origin = if src.width != 0 && src.height != 0 {
            Vector2 {
                x: params.origin.x * dest.width as f32 / src.width as f32,
                y: params.origin.y * dest.height as f32 / src.height as f32,
            }
        } else {
            Vector2 { x: 0.0, y: 0.0 }
        };

        self.d.draw_texture_pro(
            tex,
            source,
            dest.to_raylib(),
            origin,
            params.rotation.to_degrees(),
            tint,
        );
    }

    fn draw_text(&mut self, font: &str, text: &str, position: Vector2, tint: Color) {
        match self.fonts.style(font) {
            Some((f, size, spacing)) => {
                self.d.draw_text_ex(f, text, position, size, spacing, tint);
            }
            None => self.d.draw_text(
                text,
                position.x as i32,
                position.y as i32,
                FALLBACK_FONT_SIZE,
                tint,
            ),
        }
    }
}
