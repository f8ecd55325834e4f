//! Title screen component: a backdrop image with buttons on top.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

use crate::batch::SpriteBatch;
use crate::components::button::ButtonSprite;
use crate::components::pixelrect::PixelRect;
use crate::host::SpriteBasedGame;
use crate::resources::displayarea::DisplayArea;
use crate::resources::texturestore::TextureHandle;

#[derive(Component, Debug, Clone)]
pub struct TitleSprite {
    pub texture: TextureHandle,
    pub rect: PixelRect,
    buttons: Vec<ButtonSprite>,
}

impl TitleSprite {
    pub fn new(texture: TextureHandle, rect: PixelRect) -> Self {
        Self {
            texture,
            rect,
            buttons: Vec::new(),
        }
    }

    /// Backdrop covering the whole display area.
    pub fn full_screen(texture: TextureHandle, area: &DisplayArea) -> Self {
        Self::new(texture, area.to_rect())
    }

    pub fn add_button(&mut self, button: ButtonSprite) {
        self.buttons.push(button);
    }

    pub fn with_button(mut self, button: ButtonSprite) -> Self {
        self.add_button(button);
        self
    }

    pub fn buttons(&self) -> &[ButtonSprite] {
        &self.buttons
    }

    pub fn update(&mut self, game: &mut dyn SpriteBasedGame) {
        for button in &mut self.buttons {
            button.update(game);
        }
    }

    pub fn draw(&self, batch: &mut dyn SpriteBatch) {
        batch.draw(&self.texture.key, self.rect, None, Color::WHITE);
        for button in &self.buttons {
            button.draw(batch);
        }
    }
}
