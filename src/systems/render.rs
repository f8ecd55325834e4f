//! Frame rendering.
//!
//! [`render_pass`] draws the world inside raylib's drawing scope:
//! - while playing, the tile map and every [`Sprite`] go through the 2D
//!   camera, followed by a screen-space HUD with score, lives and FPS,
//! - on the title screen, [`TitleSprite`]s and the [`MainMenu`] are drawn in
//!   screen space.
//!
//! Everything is drawn through a [`RaylibBatch`].

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::batch::{RaylibBatch, SpriteBatch};
use crate::components::sprite::Sprite;
use crate::components::title::TitleSprite;
use crate::resources::camera2d::Camera2D as CameraRes;
use crate::resources::fontstore::FontStore;
use crate::resources::fpscounter::FpsCounter;
use crate::resources::gamehost::{GameHost, GameStates};
use crate::resources::menu::MainMenu;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::tilemap::TileMap;

pub const HUD_FONT: &str = "hud";

pub fn render_pass(world: &mut World, d: &mut RaylibDrawHandle) {
    let screen = world
        .get_resource::<ScreenSize>()
        .copied()
        .unwrap_or(ScreenSize { w: 0, h: 0 });
    let camera = world
        .get_resource::<CameraRes>()
        .copied()
        .unwrap_or_default()
        .to_raylib(screen.w as f32, screen.h as f32);
    let state = world
        .get_resource::<GameHost>()
        .map_or(GameStates::Title, GameHost::state);

    let mut sprites = world.query::<&Sprite>();
    let mut titles = world.query::<&TitleSprite>();

    let empty_textures = TextureStore::default();
    let empty_fonts = FontStore::default();
    let textures = world
        .get_resource::<TextureStore>()
        .unwrap_or(&empty_textures);
    let fonts = world
        .get_non_send_resource::<FontStore>()
        .unwrap_or(&empty_fonts);

    match state {
        GameStates::Playing => {
            {
                let mut d2 = d.begin_mode2D(camera);
                let mut batch = RaylibBatch::new(&mut d2, textures, fonts);
                if let Some(map) = world.get_resource::<TileMap>() {
                    map.draw(&mut batch);
                }
                for sprite in sprites.iter(world) {
                    sprite.draw(&mut batch);
                }
            }
            let mut batch = RaylibBatch::new(d, textures, fonts);
            draw_hud(world, &mut batch);
        }
        GameStates::Title => {
            let mut batch = RaylibBatch::new(d, textures, fonts);
            for title in titles.iter(world) {
                title.draw(&mut batch);
            }
            if let Some(menu) = world.get_resource::<MainMenu>() {
                menu.draw(&mut batch);
            }
        }
        GameStates::Quitting => {}
    }
}

fn draw_hud(world: &World, batch: &mut dyn SpriteBatch) {
    if let Some(host) = world.get_resource::<GameHost>() {
        let text = format!("SCORE: {}  LIVES: {}", host.score, host.lives);
        batch.draw_text(HUD_FONT, &text, Vector2 { x: 10.0, y: 10.0 }, Color::WHITE);
    }
    if let Some(fps) = world.get_resource::<FpsCounter>() {
        batch.draw_text(
            HUD_FONT,
            &fps.fps_string(),
            Vector2 { x: 10.0, y: 34.0 },
            Color::YELLOW,
        );
    }
}

/// Exclusive system wrapping [`render_pass`] in a raylib drawing scope.
///
/// The raylib handle and thread are taken out of the world for the duration
/// of the frame so the pass can read the world freely.
pub fn render_system(world: &mut World) {
    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        return;
    };
    let Some(thread) = world.remove_non_send_resource::<RaylibThread>() else {
        world.insert_non_send_resource(rl);
        return;
    };
    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        render_pass(world, &mut d);
    }
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
}
