//! Paged menu resource.
//!
//! A [`MainMenu`] holds named pages of widgets and shows exactly one of them.
//! The `"Main"` page always exists and is current at construction. Only the
//! current page receives `update` and `draw`.
//!
//! Buttons hover when the one-pixel cursor rectangle overlaps them. A left
//! press on a clickable button runs its [`ButtonAction`] and then switches to
//! the button's target page, if it has one.

use bevy_ecs::prelude::Resource;
use log::{info, warn};
use raylib::prelude::{Color, Vector2};
use rustc_hash::FxHashMap;

use crate::batch::SpriteBatch;
use crate::components::button::ButtonAction;
use crate::components::pixelrect::PixelRect;
use crate::host::SpriteBasedGame;
use crate::resources::input::MouseState;
use crate::resources::texturestore::TextureHandle;

pub const MAIN_PAGE: &str = "Main";

#[derive(Debug, Clone, PartialEq)]
pub struct MenuText {
    pub font: String,
    pub text: String,
    pub location: Vector2,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuPicture {
    pub texture: TextureHandle,
    pub rect: PixelRect,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuButton {
    pub texture: TextureHandle,
    pub rect: PixelRect,
    pub hover_color: Color,
    pub default_color: Color,
    pub action: ButtonAction,
    /// Page to show after the click.
    pub target: Option<String>,
    pub clickable: bool,
    hovering: bool,
}

impl MenuButton {
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Refresh hover; returns true on a click.
    fn handle_mouse(&mut self, mouse: &MouseState) -> bool {
        self.hovering = mouse.cursor_rect().intersects(&self.rect);
        self.hovering && self.clickable && mouse.left_pressed
    }

    fn tint(&self) -> Color {
        if self.clickable && self.hovering {
            self.hover_color
        } else {
            self.default_color
        }
    }
}

/// A widget on a menu page.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuObject {
    Text(MenuText),
    Button(MenuButton),
    Picture(MenuPicture),
}

impl MenuObject {
    /// White text.
    pub fn text(font: impl Into<String>, text: impl Into<String>, location: Vector2) -> Self {
        Self::text_colored(font, text, location, Color::WHITE)
    }

    pub fn text_colored(
        font: impl Into<String>,
        text: impl Into<String>,
        location: Vector2,
        color: Color,
    ) -> Self {
        MenuObject::Text(MenuText {
            font: font.into(),
            text: text.into(),
            location,
            color,
        })
    }

    /// White-tinted picture.
    pub fn picture(texture: TextureHandle, rect: PixelRect) -> Self {
        Self::picture_colored(texture, rect, Color::WHITE)
    }

    pub fn picture_colored(texture: TextureHandle, rect: PixelRect, color: Color) -> Self {
        MenuObject::Picture(MenuPicture {
            texture,
            rect,
            color,
        })
    }

    pub fn button(
        texture: TextureHandle,
        rect: PixelRect,
        hover_color: Color,
        default_color: Color,
        action: ButtonAction,
        target: Option<&str>,
    ) -> Self {
        MenuObject::Button(MenuButton {
            texture,
            rect,
            hover_color,
            default_color,
            action,
            target: target.map(str::to_string),
            clickable: true,
            hovering: false,
        })
    }

    /// Update against this frame's mouse. Returns the page a clicked button
    /// wants to switch to.
    fn update(&mut self, mouse: &MouseState, game: &mut dyn SpriteBasedGame) -> Option<String> {
        match self {
            MenuObject::Button(button) => {
                if button.handle_mouse(mouse) {
                    button.action.run(game);
                    return button.target.clone();
                }
                None
            }
            MenuObject::Text(_) | MenuObject::Picture(_) => None,
        }
    }

    fn draw(&self, batch: &mut dyn SpriteBatch) {
        match self {
            MenuObject::Text(t) => batch.draw_text(&t.font, &t.text, t.location, t.color),
            MenuObject::Button(b) => batch.draw(&b.texture.key, b.rect, None, b.tint()),
            MenuObject::Picture(p) => batch.draw(&p.texture.key, p.rect, None, p.color),
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct MainMenu {
    pages: FxHashMap<String, Vec<MenuObject>>,
    current: String,
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl MainMenu {
    pub fn new() -> Self {
        let mut pages = FxHashMap::default();
        pages.insert(MAIN_PAGE.to_string(), Vec::new());
        Self {
            pages,
            current: MAIN_PAGE.to_string(),
        }
    }

    /// Name of the page being shown.
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn has_menu(&self, name: &str) -> bool {
        self.pages.contains_key(name)
    }

    pub fn add_menu(&mut self, name: &str) -> Result<(), String> {
        if self.pages.contains_key(name) {
            return Err(format!("Menu page '{}' already exists", name));
        }
        self.pages.insert(name.to_string(), Vec::new());
        Ok(())
    }

    pub fn add_menu_object(&mut self, name: &str, object: MenuObject) -> Result<(), String> {
        self.pages
            .get_mut(name)
            .ok_or_else(|| format!("Menu page '{}' not found", name))?
            .push(object);
        Ok(())
    }

    pub fn objects(&self, name: &str) -> Option<&[MenuObject]> {
        self.pages.get(name).map(Vec::as_slice)
    }

    /// Switch the current page. Unknown pages leave it unchanged.
    pub fn choose_menu(&mut self, name: &str) -> Result<(), String> {
        if !self.pages.contains_key(name) {
            return Err(format!("Menu page '{}' not found", name));
        }
        if self.current != name {
            info!("Menu page: {} -> {}", self.current, name);
            self.current = name.to_string();
        }
        Ok(())
    }

    pub fn update(&mut self, game: &mut dyn SpriteBasedGame) {
        let mouse = game.mouse_state();
        let mut next = None;
        if let Some(objects) = self.pages.get_mut(&self.current) {
            for object in objects.iter_mut() {
                if let Some(target) = object.update(&mouse, game) {
                    next = Some(target);
                }
            }
        }
        if let Some(target) = next {
            if let Err(e) = self.choose_menu(&target) {
                warn!("{}", e);
            }
        }
    }

    pub fn draw(&self, batch: &mut dyn SpriteBatch) {
        if let Some(objects) = self.pages.get(&self.current) {
            for object in objects {
                object.draw(batch);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::testing::{DrawCall, RecordingBatch};
    use crate::components::button::tests::FakeGame;

    fn start_button(target: Option<&str>) -> MenuObject {
        MenuObject::button(
            TextureHandle::new("start", 100, 30),
            PixelRect::new(0, 0, 100, 30),
            Color::YELLOW,
            Color::WHITE,
            ButtonAction::StartGame,
            target,
        )
    }

    #[test]
    fn test_starts_on_main() {
        let menu = MainMenu::new();
        assert_eq!(menu.current(), MAIN_PAGE);
        assert!(menu.objects(MAIN_PAGE).unwrap().is_empty());
    }

    #[test]
    fn test_choose_unknown_page_fails() {
        let mut menu = MainMenu::new();
        assert!(menu.choose_menu("Options").is_err());
        assert_eq!(menu.current(), MAIN_PAGE);
        menu.add_menu("Options").unwrap();
        menu.choose_menu("Options").unwrap();
        assert_eq!(menu.current(), "Options");
        assert!(menu.add_menu("Options").is_err());
        assert!(
            menu.add_menu_object("Missing", MenuObject::text("f", "t", Vector2::zero()))
                .is_err()
        );
    }

    #[test]
    fn test_only_current_page_draws() {
        let mut menu = MainMenu::new();
        menu.add_menu("Options").unwrap();
        menu.add_menu_object(MAIN_PAGE, MenuObject::text("font", "Play", Vector2::zero()))
            .unwrap();
        menu.add_menu_object(
            "Options",
            MenuObject::picture(
                TextureHandle::new("panel", 10, 10),
                PixelRect::new(0, 0, 10, 10),
            ),
        )
        .unwrap();

        let mut batch = RecordingBatch::default();
        menu.draw(&mut batch);
        assert_eq!(batch.calls.len(), 1);
        match &batch.calls[0] {
            DrawCall::Text { text, tint, .. } => {
                assert_eq!(text, "Play");
                assert_eq!(*tint, Color::WHITE);
            }
            other => panic!("unexpected call {:?}", other),
        }

        menu.choose_menu("Options").unwrap();
        let mut batch = RecordingBatch::default();
        menu.draw(&mut batch);
        assert_eq!(batch.textures(), vec!["panel"]);
    }

    #[test]
    fn test_click_runs_action_then_switches_page() {
        let mut menu = MainMenu::new();
        menu.add_menu("Game").unwrap();
        menu.add_menu_object(MAIN_PAGE, start_button(Some("Game")))
            .unwrap();
        menu.add_menu_object("Game", start_button(None)).unwrap();

        let mut game = FakeGame {
            mouse: MouseState::new(10.0, 10.0, true),
            ..Default::default()
        };
        menu.update(&mut game);
        assert_eq!(game.started, 1);
        assert_eq!(menu.current(), "Game");
    }

    #[test]
    fn test_hover_uses_cursor_rect() {
        let mut menu = MainMenu::new();
        menu.add_menu_object(MAIN_PAGE, start_button(None)).unwrap();
        // Right edge: the one-pixel cursor at x = 100 does not overlap 0..100.
        let mut game = FakeGame {
            mouse: MouseState::new(100.0, 10.0, true),
            ..Default::default()
        };
        menu.update(&mut game);
        assert_eq!(game.started, 0);

        game.mouse = MouseState::new(99.0, 10.0, false);
        menu.update(&mut game);
        match &menu.objects(MAIN_PAGE).unwrap()[0] {
            MenuObject::Button(b) => assert!(b.is_hovering()),
            other => panic!("unexpected object {:?}", other),
        }
    }

    #[test]
    fn test_missing_target_keeps_page() {
        let mut menu = MainMenu::new();
        menu.add_menu_object(MAIN_PAGE, start_button(Some("Nowhere")))
            .unwrap();
        let mut game = FakeGame {
            mouse: MouseState::new(5.0, 5.0, true),
            ..Default::default()
        };
        menu.update(&mut game);
        assert_eq!(game.started, 1);
        assert_eq!(menu.current(), MAIN_PAGE);
    }
}
