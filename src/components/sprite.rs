//! Composed sprite component.
//!
//! A sprite is a texture drawn into a destination rectangle. Everything else
//! is optional and layered on:
//! - [`Motion`] moves it at constant velocity and snaps it to whole pixels,
//! - [`AnimationState`] picks a frame from a sprite sheet,
//! - [`ExplosionOverlay`] plays a one-shot strip on top,
//! - [`TimedActivation`] hides it unless a pickup window is open.
//!
//! `update` runs the modules in that order: explosion, animation, power-up
//! expiry, motion.

use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector2};

use crate::batch::{DrawParams, SpriteBatch, SpriteFlip};
use crate::components::animation::AnimationState;
use crate::components::explosion::ExplosionOverlay;
use crate::components::motion::Motion;
use crate::components::pixelrect::{PixelRect, round_to_pixel};
use crate::components::powerup::TimedActivation;
use crate::host::SoundPlayer;
use crate::resources::camera2d::Focusable;
use crate::resources::displayarea::DisplayArea;
use crate::resources::texturestore::TextureHandle;

#[derive(Component, Debug, Clone)]
pub struct Sprite {
    texture: TextureHandle,
    rect: PixelRect,
    /// Height follows the texture or frame aspect ratio.
    sized_by_width: bool,
    pub motion: Option<Motion>,
    pub animation: Option<AnimationState>,
    pub explosion: Option<ExplosionOverlay>,
    pub power_up: Option<TimedActivation>,
}

impl Sprite {
    /// Static sprite filling `rect`.
    pub fn new(texture: TextureHandle, rect: PixelRect) -> Self {
        Self {
            texture,
            rect,
            sized_by_width: false,
            motion: None,
            animation: None,
            explosion: None,
            power_up: None,
        }
    }

    /// Moving sprite sized as a fraction of the display width, keeping the
    /// texture's aspect ratio, and crossing the display in
    /// `ticks_to_cross_screen` ticks.
    pub fn moving(
        texture: TextureHandle,
        width_factor: f32,
        ticks_to_cross_screen: f32,
        initial: Vector2,
        area: &DisplayArea,
    ) -> Self {
        let width = round_to_pixel(area.width() * width_factor);
        let height = scaled_height(width, texture.width, texture.height);
        let motion = Motion::from_ticks(initial, ticks_to_cross_screen, area);
        let rect = PixelRect::new(
            round_to_pixel(initial.x),
            round_to_pixel(initial.y),
            width,
            height,
        );
        Self {
            sized_by_width: true,
            motion: Some(motion),
            ..Self::new(texture, rect)
        }
    }

    /// Animate over frames of `frame_width` x `frame_height`. Sprites sized
    /// from a width factor take their height from the aspect ratio of one
    /// frame; an explicit rectangle is kept as given.
    pub fn with_animation(mut self, frame_width: i32, frame_height: i32, update_clock: u32) -> Self {
        self.animation = Some(AnimationState::new(frame_width, frame_height, update_clock));
        if self.sized_by_width {
            self.rect.height = scaled_height(self.rect.width, frame_width, frame_height);
        }
        self
    }

    pub fn with_explosion(mut self, texture: TextureHandle, frame_width: i32, sound: Option<String>) -> Self {
        self.explosion = Some(ExplosionOverlay::new(texture, frame_width, sound));
        self
    }

    pub fn with_power_up(mut self, uses: u32) -> Self {
        self.power_up = Some(TimedActivation::new(uses));
        self
    }

    pub fn texture(&self) -> &TextureHandle {
        &self.texture
    }

    pub fn load_texture(&mut self, texture: TextureHandle) {
        self.texture = texture;
    }

    /// Destination rectangle.
    pub fn rect(&self) -> PixelRect {
        self.rect
    }

    pub fn set_rectangle(&mut self, rect: PixelRect) {
        self.rect = rect;
    }

    /// Float position for moving sprites, rectangle corner otherwise.
    pub fn position(&self) -> Vector2 {
        match &self.motion {
            Some(motion) => motion.position(),
            None => Vector2 {
                x: self.rect.x as f32,
                y: self.rect.y as f32,
            },
        }
    }

    /// Current frame of the sheet, if animated.
    pub fn source_rect(&self) -> Option<PixelRect> {
        self.animation.as_ref().map(AnimationState::source_rect)
    }

    /// Advance all behavior modules by one tick. `now_ms` feeds power-up expiry.
    pub fn update(&mut self, now_ms: f64) {
        if let Some(explosion) = self.explosion.as_mut() {
            explosion.tick();
        }
        if let Some(animation) = self.animation.as_mut() {
            animation.tick(self.texture.width);
        }
        if let Some(power_up) = self.power_up.as_mut() {
            power_up.update(now_ms);
        }
        if let Some(motion) = self.motion.as_mut() {
            motion.update();
            self.rect.x = round_to_pixel(motion.pos.x);
            self.rect.y = round_to_pixel(motion.pos.y);
        }
    }

    /// Reset per-game state when a new game starts.
    pub fn start_game(&mut self) {
        if let Some(explosion) = self.explosion.as_mut() {
            explosion.reset();
        }
        if let Some(motion) = self.motion.as_mut() {
            motion.reset();
            self.rect.x = round_to_pixel(motion.pos.x);
            self.rect.y = round_to_pixel(motion.pos.y);
        }
    }

    pub fn end_game(&mut self) {
        if let Some(power_up) = self.power_up.as_mut() {
            power_up.deactivate();
        }
    }

    /// Select an animation row; false if the sheet has no such row or the
    /// sprite is not animated.
    pub fn set_row(&mut self, row: i32) -> bool {
        let height = self.texture.height;
        match self.animation.as_mut() {
            Some(animation) => animation.set_row(row, height),
            None => false,
        }
    }

    /// Start the explosion overlay and fire its sound. Sound failures are
    /// ignored; calling this mid-explosion does nothing.
    pub fn explode(&mut self, sounds: &mut dyn SoundPlayer) {
        let Some(explosion) = self.explosion.as_mut() else {
            return;
        };
        if explosion.is_exploding() {
            return;
        }
        if let Some(sound) = explosion.sound.as_deref() {
            if let Err(e) = sounds.play(sound) {
                log::debug!("explosion sound '{}' not played: {}", sound, e);
            }
        }
        explosion.trigger();
    }

    pub fn is_exploding(&self) -> bool {
        self.explosion
            .as_ref()
            .is_some_and(ExplosionOverlay::is_exploding)
    }

    /// Pick up the power-up at `now_ms`.
    pub fn activate(&mut self, now_ms: f64) -> bool {
        match self.power_up.as_mut() {
            Some(power_up) => power_up.activate(now_ms),
            None => false,
        }
    }

    /// Whether the sprite should be drawn at all.
    pub fn is_visible(&self) -> bool {
        self.power_up.as_ref().is_none_or(TimedActivation::is_active)
    }

    pub fn check_collision(&self, target: &PixelRect) -> bool {
        self.rect.intersects(target)
    }

    pub fn draw(&self, batch: &mut dyn SpriteBatch) {
        self.draw_into(batch, self.rect);
    }

    /// Draw the current frame into an arbitrary rectangle.
    pub fn draw_into(&self, batch: &mut dyn SpriteBatch, dest: PixelRect) {
        if !self.is_visible() {
            return;
        }
        batch.draw(&self.texture.key, dest, self.source_rect(), Color::WHITE);
        self.draw_explosion(batch, dest);
    }

    /// Draw rotated (radians) around the centre of the frame.
    pub fn draw_rotated(&self, batch: &mut dyn SpriteBatch, rotation: f32, flip: SpriteFlip) {
        if !self.is_visible() {
            return;
        }
        let origin = match &self.animation {
            Some(animation) => animation.origin(),
            None => Vector2 {
                x: (self.texture.width / 2) as f32,
                y: (self.texture.height / 2) as f32,
            },
        };
        batch.draw_ex(
            &self.texture.key,
            self.rect,
            self.source_rect(),
            Color::WHITE,
            DrawParams {
                rotation,
                origin,
                flip,
                layer: 1.0,
            },
        );
        self.draw_explosion(batch, self.rect);
    }

    fn draw_explosion(&self, batch: &mut dyn SpriteBatch, dest: PixelRect) {
        if let Some(explosion) = &self.explosion {
            if explosion.is_exploding() {
                batch.draw(
                    &explosion.texture.key,
                    dest,
                    Some(explosion.source_rect()),
                    Color::WHITE,
                );
            }
        }
    }
}

impl Focusable for Sprite {
    fn position(&self) -> Vector2 {
        Sprite::position(self)
    }
}

fn scaled_height(width: i32, source_width: i32, source_height: i32) -> i32 {
    if source_width <= 0 || source_height <= 0 {
        return 0;
    }
    let aspect = source_width as f32 / source_height as f32;
    round_to_pixel(width as f32 / aspect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::testing::{DrawCall, RecordingBatch};
    use crate::components::explosion::EXPLODE_TICKS_PER_FRAME;

    struct Sounds {
        played: Vec<String>,
        fail: bool,
    }

    impl SoundPlayer for Sounds {
        fn play(&mut self, id: &str) -> Result<(), String> {
            self.played.push(id.to_string());
            if self.fail {
                Err("audio device gone".to_string())
            } else {
                Ok(())
            }
        }
    }

    fn sheet() -> TextureHandle {
        TextureHandle::new("ship", 128, 64)
    }

    fn exploding_sprite() -> Sprite {
        Sprite::new(sheet(), PixelRect::new(0, 0, 32, 32))
            .with_animation(32, 32, 5)
            .with_explosion(TextureHandle::new("boom", 64, 16), 16, Some("bang".to_string()))
    }

    #[test]
    fn test_moving_sprite_size_from_width_factor() {
        let area = DisplayArea::new(800.0, 600.0);
        let s = Sprite::moving(sheet(), 0.1, 200.0, Vector2 { x: 0.0, y: 0.0 }, &area);
        assert_eq!(s.rect().width, 80);
        // 128x64 texture, aspect 2
        assert_eq!(s.rect().height, 40);
        let s = s.with_animation(32, 32, 5);
        assert_eq!(s.rect().height, 80);
    }

    #[test]
    fn test_update_rounds_half_up() {
        let area = DisplayArea::new(800.0, 600.0);
        let mut s = Sprite::moving(sheet(), 0.1, 200.0, Vector2 { x: 10.4, y: 20.5 }, &area);
        s.update(0.0);
        assert_eq!(s.rect().x, 10);
        assert_eq!(s.rect().y, 21);
    }

    #[test]
    fn test_start_game_resets_position() {
        let area = DisplayArea::new(800.0, 600.0);
        let mut s = Sprite::moving(sheet(), 0.1, 200.0, Vector2 { x: 5.0, y: 5.0 }, &area);
        s.motion.as_mut().unwrap().set_direction(1.0, 0.0);
        for _ in 0..10 {
            s.update(0.0);
        }
        assert_eq!(s.rect().x, 45);
        s.start_game();
        assert_eq!(s.rect().x, 5);
        assert_eq!(s.position().x, 5.0);
    }

    #[test]
    fn test_animation_advances_through_update() {
        let mut s = Sprite::new(sheet(), PixelRect::new(0, 0, 32, 32)).with_animation(32, 32, 5);
        let mut xs = Vec::new();
        for _ in 0..5 {
            xs.push(s.source_rect().unwrap().x);
            for _ in 0..5 {
                s.update(0.0);
            }
        }
        assert_eq!(xs, vec![0, 32, 64, 96, 0]);
    }

    #[test]
    fn test_set_row_uses_texture_height() {
        let mut s = Sprite::new(sheet(), PixelRect::new(0, 0, 32, 32)).with_animation(32, 32, 5);
        assert!(s.set_row(1));
        assert!(!s.set_row(2));
        assert_eq!(s.source_rect().unwrap().y, 32);
        let mut plain = Sprite::new(sheet(), PixelRect::EMPTY);
        assert!(!plain.set_row(0));
    }

    #[test]
    fn test_explode_plays_sound_once() {
        let mut sounds = Sounds {
            played: Vec::new(),
            fail: false,
        };
        let mut s = exploding_sprite();
        s.explode(&mut sounds);
        s.explode(&mut sounds);
        assert!(s.is_exploding());
        assert_eq!(sounds.played, vec!["bang".to_string()]);
    }

    #[test]
    fn test_explode_ignores_sound_failure() {
        let mut sounds = Sounds {
            played: Vec::new(),
            fail: true,
        };
        let mut s = exploding_sprite();
        s.explode(&mut sounds);
        assert!(s.is_exploding());
    }

    #[test]
    fn test_explosion_ends_after_ten_ticks_per_frame() {
        let mut sounds = Sounds {
            played: Vec::new(),
            fail: false,
        };
        let mut s = exploding_sprite();
        s.explode(&mut sounds);
        // 64 / 16 = 4 frames
        for _ in 0..(4 * EXPLODE_TICKS_PER_FRAME - 1) {
            s.update(0.0);
        }
        assert!(s.is_exploding());
        s.update(0.0);
        assert!(!s.is_exploding());
        // Re-enterable once idle.
        s.explode(&mut sounds);
        assert!(s.is_exploding());
        assert_eq!(sounds.played.len(), 2);
    }

    #[test]
    fn test_draw_adds_overlay_while_exploding() {
        let mut sounds = Sounds {
            played: Vec::new(),
            fail: false,
        };
        let mut s = exploding_sprite();
        let mut batch = RecordingBatch::default();
        s.draw(&mut batch);
        assert_eq!(batch.textures(), vec!["ship"]);

        s.explode(&mut sounds);
        let mut batch = RecordingBatch::default();
        s.draw(&mut batch);
        assert_eq!(batch.textures(), vec!["ship", "boom"]);
        match &batch.calls[0] {
            DrawCall::Texture { src, tint, .. } => {
                assert_eq!(*src, Some(PixelRect::new(0, 0, 32, 32)));
                assert_eq!(*tint, Color::WHITE);
            }
            other => panic!("unexpected call {:?}", other),
        }
    }

    #[test]
    fn test_power_up_hidden_until_activated() {
        let mut s = Sprite::new(sheet(), PixelRect::new(0, 0, 16, 16)).with_power_up(1);
        let mut batch = RecordingBatch::default();
        s.draw(&mut batch);
        assert!(batch.calls.is_empty());

        assert!(s.activate(100.0));
        s.draw(&mut batch);
        assert_eq!(batch.calls.len(), 1);

        s.update(5100.0);
        let mut batch = RecordingBatch::default();
        s.draw(&mut batch);
        assert!(batch.calls.is_empty());
        assert!(!s.activate(6000.0));
    }

    #[test]
    fn test_explicit_rect_survives_animation() {
        let s = Sprite::new(sheet(), PixelRect::new(4, 8, 32, 32)).with_animation(32, 16, 5);
        assert_eq!(s.rect(), PixelRect::new(4, 8, 32, 32));
    }

    #[test]
    fn test_draw_rotated_pivots_on_frame_center() {
        let s = Sprite::new(sheet(), PixelRect::new(0, 0, 32, 32)).with_animation(32, 16, 5);
        let mut batch = RecordingBatch::default();
        s.draw_rotated(&mut batch, 1.0, SpriteFlip::Horizontal);
        match &batch.calls[0] {
            DrawCall::Texture { params, .. } => {
                assert_eq!(params.origin.x, 16.0);
                assert_eq!(params.origin.y, 8.0);
                assert_eq!(params.flip, SpriteFlip::Horizontal);
                assert_eq!(params.rotation, 1.0);
            }
            other => panic!("unexpected call {:?}", other),
        }
    }

    #[test]
    fn test_check_collision() {
        let s = Sprite::new(sheet(), PixelRect::new(0, 0, 10, 10));
        assert!(s.check_collision(&PixelRect::new(5, 5, 2, 2)));
        assert!(!s.check_collision(&PixelRect::new(20, 20, 2, 2)));
    }
}
