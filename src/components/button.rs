//! Clickable image buttons.
//!
//! A [`ButtonSprite`] is a textured rectangle that tints itself while the
//! mouse is over it and, when clickable, runs its [`ButtonAction`] against
//! the hosting game on a left press.

use raylib::prelude::{Color, Vector2};

use crate::batch::SpriteBatch;
use crate::components::pixelrect::PixelRect;
use crate::host::SpriteBasedGame;
use crate::resources::input::MouseState;
use crate::resources::texturestore::TextureHandle;

/// What a button asks the host to do when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonAction {
    #[default]
    None,
    StartGame,
    ExitProgram,
}

impl ButtonAction {
    pub fn run(self, game: &mut dyn SpriteBasedGame) {
        match self {
            ButtonAction::None => {}
            ButtonAction::StartGame => {
                log::info!("start button clicked");
                game.start_game();
            }
            ButtonAction::ExitProgram => {
                log::info!("exit button clicked");
                game.exit_program();
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ButtonSprite {
    pub texture: TextureHandle,
    pub rect: PixelRect,
    pub hover_color: Color,
    pub default_color: Color,
    pub clickable: bool,
    pub action: ButtonAction,
    hovering: bool,
}

impl ButtonSprite {
    pub fn new(
        texture: TextureHandle,
        rect: PixelRect,
        hover_color: Color,
        default_color: Color,
        action: ButtonAction,
    ) -> Self {
        Self {
            texture,
            rect,
            hover_color,
            default_color,
            clickable: true,
            action,
            hovering: false,
        }
    }

    pub fn start(texture: TextureHandle, rect: PixelRect, hover: Color, default: Color) -> Self {
        Self::new(texture, rect, hover, default, ButtonAction::StartGame)
    }

    pub fn exit(texture: TextureHandle, rect: PixelRect, hover: Color, default: Color) -> Self {
        Self::new(texture, rect, hover, default, ButtonAction::ExitProgram)
    }

    pub fn with_clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    /// Edges count as inside.
    pub fn is_hovering(&self, point: Vector2) -> bool {
        self.rect.contains(point)
    }

    /// Hover state seen by the last [`update`](Self::update).
    pub fn hovering(&self) -> bool {
        self.hovering
    }

    pub fn update(&mut self, game: &mut dyn SpriteBasedGame) {
        let mouse = game.mouse_state();
        if self.handle_mouse(&mouse) {
            self.action.run(game);
        }
    }

    /// Refresh the hover state; true when this press counts as a click.
    pub fn handle_mouse(&mut self, mouse: &MouseState) -> bool {
        self.hovering = self.is_hovering(mouse.position);
        self.hovering && self.clickable && mouse.left_pressed
    }

    pub fn tint(&self) -> Color {
        if self.clickable && self.hovering {
            self.hover_color
        } else {
            self.default_color
        }
    }

    pub fn draw(&self, batch: &mut dyn SpriteBatch) {
        batch.draw(&self.texture.key, self.rect, None, self.tint());
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::batch::testing::{DrawCall, RecordingBatch};
    use raylib::prelude::KeyboardKey;

    /// Host stub recording the callbacks it receives.
    #[derive(Default)]
    pub(crate) struct FakeGame {
        pub mouse: MouseState,
        pub started: u32,
        pub ended: u32,
        pub exited: u32,
        pub score: i32,
        pub lives: i32,
    }

    impl SpriteBasedGame for FakeGame {
        fn update_lives(&mut self, delta: i32) {
            self.lives += delta;
        }
        fn update_score(&mut self, delta: i32) {
            self.score += delta;
        }
        fn score(&self) -> i32 {
            self.score
        }
        fn mouse_state(&self) -> MouseState {
            self.mouse
        }
        fn key_pressed(&self, _key: KeyboardKey) -> bool {
            false
        }
        fn key_released(&self, _key: KeyboardKey) -> bool {
            false
        }
        fn key_held(&self, _key: KeyboardKey) -> bool {
            false
        }
        fn start_game(&mut self) {
            self.started += 1;
        }
        fn end_game(&mut self) {
            self.ended += 1;
        }
        fn exit_program(&mut self) {
            self.exited += 1;
        }
    }

    fn button(action: ButtonAction) -> ButtonSprite {
        ButtonSprite::new(
            TextureHandle::new("btn", 100, 40),
            PixelRect::new(10, 10, 100, 40),
            Color::YELLOW,
            Color::GRAY,
            action,
        )
    }

    #[test]
    fn test_hover_is_inclusive() {
        let b = button(ButtonAction::None);
        assert!(b.is_hovering(Vector2 { x: 10.0, y: 10.0 }));
        assert!(b.is_hovering(Vector2 { x: 110.0, y: 50.0 }));
        assert!(!b.is_hovering(Vector2 { x: 110.5, y: 50.0 }));
    }

    #[test]
    fn test_click_runs_action() {
        let mut game = FakeGame {
            mouse: MouseState::new(50.0, 20.0, true),
            ..Default::default()
        };
        let mut start = button(ButtonAction::StartGame);
        start.update(&mut game);
        assert_eq!(game.started, 1);

        let mut exit = button(ButtonAction::ExitProgram);
        exit.update(&mut game);
        assert_eq!(game.exited, 1);
    }

    #[test]
    fn test_no_click_without_press_or_when_disabled() {
        let mut game = FakeGame {
            mouse: MouseState::new(50.0, 20.0, false),
            ..Default::default()
        };
        let mut b = button(ButtonAction::StartGame);
        b.update(&mut game);
        assert!(b.hovering());
        assert_eq!(game.started, 0);

        game.mouse.left_pressed = true;
        let mut disabled = button(ButtonAction::StartGame).with_clickable(false);
        disabled.update(&mut game);
        assert_eq!(game.started, 0);
    }

    #[test]
    fn test_tint_follows_hover() {
        let mut b = button(ButtonAction::None);
        let mut batch = RecordingBatch::default();
        b.handle_mouse(&MouseState::new(50.0, 20.0, false));
        b.draw(&mut batch);
        b.handle_mouse(&MouseState::new(500.0, 20.0, false));
        b.draw(&mut batch);
        let tints: Vec<Color> = batch
            .calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Texture { tint, .. } => Some(*tint),
                DrawCall::Text { .. } => None,
            })
            .collect();
        assert_eq!(tints, vec![Color::YELLOW, Color::GRAY]);

        let mut disabled = button(ButtonAction::None).with_clickable(false);
        disabled.handle_mouse(&MouseState::new(50.0, 20.0, false));
        assert_eq!(disabled.tint(), Color::GRAY);
    }
}
