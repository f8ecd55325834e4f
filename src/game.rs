//! Demo game built on the framework.
//!
//! A title screen with Start/Exit buttons and a two-page menu leads into a
//! small maze. The player ship moves with the arrow keys or WASD, explodes
//! on SPACE or when it hits a wall, picks up the power-up with ENTER and
//! advances a level by reaching the exit. ESC returns to the title.
//!
//! Textures are read from the assets directory; any that are missing are
//! replaced by a flat colored placeholder so the demo runs without assets.

use std::path::Path;

use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::*;

use crate::components::button::{ButtonAction, ButtonSprite};
use crate::components::pixelrect::PixelRect;
use crate::components::sprite::Sprite;
use crate::components::title::TitleSprite;
use crate::host::{SoundPlayer, SpriteBasedGame};
use crate::resources::audio::{AudioBridge, MutedSound};
use crate::resources::camera2d::Camera2D as CameraRes;
use crate::resources::fontstore::FontStore;
use crate::resources::gamehost::GameHost;
use crate::resources::menu::{MAIN_PAGE, MainMenu, MenuObject};
use crate::resources::screensize::ScreenSize;
use crate::resources::settings::{
    Settings, format_std, validate_bool, validate_float, validate_int, validate_string,
};
use crate::resources::texturestore::{TextureHandle, TextureStore};
use crate::resources::tilemap::{
    ColorGrid, EXIT_COLOR, FLOOR_COLOR, LevelLoader, SPAWN_COLOR, TileMap, WALL_COLOR,
};
use crate::resources::worldtime::WorldTime;
use crate::systems::render::HUD_FONT;

pub const TILE_SIZE: i32 = 64;
pub const SHIP_FRAME: i32 = 32;
pub const EXPLOSION_FRAME: i32 = 16;
pub const EXPLOSION_SOUND: &str = "explosion";
const OPTIONS_PAGE: &str = "Options";

#[derive(Component, Debug, Clone, Copy)]
pub struct Player;

#[derive(Component, Debug, Clone, Copy)]
pub struct PowerUp;

/// Settings the demo reads at startup and writes back on exit.
pub fn register_settings(settings: &mut Settings) -> Result<(), String> {
    settings.register("video", "screen.width", 800, validate_int, format_std)?;
    settings.register("video", "screen.height", 600, validate_int, format_std)?;
    settings.register("video", "screen.target_fps", 60, validate_int, format_std)?;
    settings.register("audio", "sound.muted", false, validate_bool, format_std)?;
    settings.register("game", "player.name", "Player", validate_string, format_std)?;
    settings.register("game", "player.ticks_to_cross", 240.0f32, validate_float, format_std)?;
    Ok(())
}

const LEVELS: [&[&str]; 2] = [
    &[
        "##########",
        "#P.......#",
        "#........#",
        "#...##...#",
        "#........#",
        "#.......E#",
        "##########",
    ],
    &[
        "############",
        "#P...#.....#",
        "#....#..#..#",
        "#....#..#..#",
        "#.......#.E#",
        "############",
    ],
];

fn legend(c: char) -> Color {
    match c {
        'P' => SPAWN_COLOR,
        '#' => WALL_COLOR,
        'E' => EXIT_COLOR,
        _ => FLOOR_COLOR,
    }
}

/// Levels laid out in text.
pub struct DemoLevels {
    pub wall: TextureHandle,
}

impl LevelLoader for DemoLevels {
    fn load(&mut self, level: u32) -> Result<ColorGrid, String> {
        let index = (level as usize)
            .checked_sub(1)
            .ok_or_else(|| "Levels start at 1".to_string())?;
        let rows = LEVELS
            .get(index)
            .ok_or_else(|| format!("Level {} does not exist", level))?;
        ColorGrid::from_rows(rows, legend)
    }

    fn wall_texture(&self, _level: u32) -> Option<TextureHandle> {
        Some(self.wall.clone())
    }
}

/// Load `<assets>/textures/<key>.png`, or a flat `fallback` texture of the
/// given size when it cannot be read.
fn load_or_placeholder(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    store: &mut TextureStore,
    assets: &Path,
    key: &str,
    (width, height, fallback): (i32, i32, Color),
) -> Result<TextureHandle, String> {
    let path = assets.join("textures").join(format!("{}.png", key));
    let texture = match rl.load_texture(th, &path.to_string_lossy()) {
        Ok(texture) => texture,
        Err(e) => {
            warn!("{}; using a placeholder for '{}'", e, key);
            let image = Image::gen_image_color(width, height, fallback);
            rl.load_texture_from_image(th, &image)
                .map_err(|e| format!("Failed to create placeholder '{}': {}", key, e))?
        }
    };
    Ok(store.insert(key, texture))
}

/// Load assets and spawn the title screen, menu, player, power-up and map.
pub fn setup(
    world: &mut World,
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    assets: &Path,
) -> Result<(), String> {
    let area = world
        .get_resource::<ScreenSize>()
        .copied()
        .unwrap_or(ScreenSize { w: 800, h: 600 })
        .display_area();
    let ticks_to_cross = world
        .get_resource::<Settings>()
        .and_then(|s| s.get_float("player.ticks_to_cross").ok())
        .unwrap_or(240.0);
    let player_name = world
        .get_resource::<Settings>()
        .and_then(|s| s.get_string("player.name").ok())
        .unwrap_or_else(|| "Player".to_string());

    let mut textures = TextureStore::new();
    let mut load = |key: &str, fallback| {
        load_or_placeholder(rl, th, &mut textures, assets, key, fallback)
    };
    let title = load("title", (320, 240, Color::DARKBLUE))?;
    let start = load("start", (160, 48, Color::GREEN))?;
    let exit = load("exit", (160, 48, Color::RED))?;
    let options = load("options", (160, 48, Color::GRAY))?;
    let ship = load("ship", (4 * SHIP_FRAME, 2 * SHIP_FRAME, Color::SKYBLUE))?;
    let explosion = load("explosion", (4 * EXPLOSION_FRAME, EXPLOSION_FRAME, Color::ORANGE))?;
    let wall = load("wall", (TILE_SIZE, TILE_SIZE, Color::BROWN))?;
    let power_up = load("powerup", (16, 16, Color::GOLD))?;
    info!("Loaded {} textures", textures.len());

    let mut fonts = FontStore::new();
    let font_path = assets.join("fonts").join("hud.ttf");
    match rl.load_font(th, &font_path.to_string_lossy()) {
        Ok(font) => fonts.add_sized(HUD_FONT, font, 20.0),
        Err(e) => warn!("{}; using the default font", e),
    }

    if let Some(bridge) = world.get_resource::<AudioBridge>() {
        let sound = assets.join("sounds").join("explosion.wav");
        if let Err(e) = bridge.load_fx(EXPLOSION_SOUND, sound.to_string_lossy()) {
            warn!("{}", e);
        }
    }

    // Title screen
    let button_x = (area.width() / 2.0) as i32 - 80;
    let button_y = (area.height() / 2.0) as i32;
    let highlight = Color::YELLOW;
    world.spawn(
        TitleSprite::full_screen(title, &area)
            .with_button(ButtonSprite::start(
                start,
                PixelRect::new(button_x, button_y, 160, 48),
                highlight,
                Color::WHITE,
            ))
            .with_button(ButtonSprite::exit(
                exit,
                PixelRect::new(button_x, button_y + 64, 160, 48),
                highlight,
                Color::WHITE,
            )),
    );

    let mut menu = MainMenu::new();
    menu.add_menu(OPTIONS_PAGE)?;
    menu.add_menu_object(
        MAIN_PAGE,
        MenuObject::text(HUD_FONT, "spriteframe demo", Vector2 { x: 20.0, y: 20.0 }),
    )?;
    menu.add_menu_object(
        MAIN_PAGE,
        MenuObject::button(
            options.clone(),
            PixelRect::new(button_x, button_y + 128, 160, 48),
            highlight,
            Color::WHITE,
            ButtonAction::None,
            Some(OPTIONS_PAGE),
        ),
    )?;
    menu.add_menu_object(
        OPTIONS_PAGE,
        MenuObject::text_colored(
            HUD_FONT,
            format!("Pilot: {}", player_name),
            Vector2 { x: 20.0, y: 20.0 },
            Color::SKYBLUE,
        ),
    )?;
    menu.add_menu_object(
        OPTIONS_PAGE,
        MenuObject::picture(power_up.clone(), PixelRect::new(20, 50, 32, 32)),
    )?;
    menu.add_menu_object(
        OPTIONS_PAGE,
        MenuObject::button(
            options,
            PixelRect::new(button_x, button_y + 192, 160, 48),
            highlight,
            Color::LIGHTGRAY,
            ButtonAction::None,
            Some(MAIN_PAGE),
        ),
    )?;
    world.insert_resource(menu);

    // Play field
    let map = TileMap::with_loader(TILE_SIZE, Box::new(DemoLevels { wall }));
    let spawn = map.tile_rectangle(1, 1);
    let player = world
        .spawn((
            Sprite::moving(
                ship,
                SHIP_FRAME as f32 * 1.25 / area.width(),
                ticks_to_cross,
                Vector2 {
                    x: spawn.x as f32,
                    y: spawn.y as f32,
                },
                &area,
            )
            .with_animation(SHIP_FRAME, SHIP_FRAME, 5)
            .with_explosion(explosion, EXPLOSION_FRAME, Some(EXPLOSION_SOUND.to_string())),
            Player,
        ))
        .id();
    world.spawn((
        Sprite::new(power_up, PixelRect::new(3 * TILE_SIZE, 2 * TILE_SIZE, 24, 24)).with_power_up(3),
        PowerUp,
    ));
    world.insert_resource(map);
    world.insert_resource(CameraRes::new(Some(player)));

    world.insert_resource(textures);
    world.insert_non_send_resource(fonts);
    Ok(())
}

/// Read the direction keys into a unit step per axis.
fn direction(host: &GameHost) -> (f32, f32) {
    let axis = |neg: [KeyboardKey; 2], pos: [KeyboardKey; 2]| {
        let held = |keys: [KeyboardKey; 2]| keys.iter().any(|k| host.key_held(*k));
        match (held(neg), held(pos)) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    };
    (
        axis(
            [KeyboardKey::KEY_LEFT, KeyboardKey::KEY_A],
            [KeyboardKey::KEY_RIGHT, KeyboardKey::KEY_D],
        ),
        axis(
            [KeyboardKey::KEY_UP, KeyboardKey::KEY_W],
            [KeyboardKey::KEY_DOWN, KeyboardKey::KEY_S],
        ),
    )
}

fn move_to(sprite: &mut Sprite, rect: PixelRect) {
    if let Some(motion) = sprite.motion.as_mut() {
        motion.pos = Vector2 {
            x: rect.x as f32,
            y: rect.y as f32,
        };
    }
    let mut placed = sprite.rect();
    placed.x = rect.x;
    placed.y = rect.y;
    sprite.set_rectangle(placed);
}

/// Per-frame demo rules while playing.
pub fn update(
    mut host: ResMut<GameHost>,
    time: Res<WorldTime>,
    mut audio: Option<ResMut<AudioBridge>>,
    mut tilemap: Option<ResMut<TileMap>>,
    mut players: Query<&mut Sprite, (With<Player>, Without<PowerUp>)>,
    mut power_ups: Query<&mut Sprite, (With<PowerUp>, Without<Player>)>,
) {
    if host.key_pressed(KeyboardKey::KEY_ESCAPE) {
        host.end_game();
        return;
    }
    let now = time.elapsed_ms();
    let mut muted = MutedSound;
    let sounds: &mut dyn SoundPlayer = match audio.as_deref_mut() {
        Some(bridge) => bridge,
        None => &mut muted,
    };

    if host.key_pressed(KeyboardKey::KEY_ENTER) {
        for mut power_up in power_ups.iter_mut() {
            if power_up.activate(now) {
                host.update_score(10);
            }
        }
    }

    for mut ship in players.iter_mut() {
        let (dx, dy) = direction(&host);
        if let Some(motion) = ship.motion.as_mut() {
            motion.set_direction(dx, dy);
        }
        if dx < 0.0 {
            ship.set_row(1);
        } else if dx > 0.0 {
            ship.set_row(0);
        }

        if host.key_pressed(KeyboardKey::KEY_SPACE) {
            ship.explode(sounds);
        }

        let Some(map) = tilemap.as_deref_mut() else {
            continue;
        };
        let rect = ship.rect();
        let hit_wall = map
            .collision_tiles()
            .iter()
            .any(|tile| ship.check_collision(&tile.rect));
        if hit_wall && !ship.is_exploding() {
            ship.explode(sounds);
            host.update_lives(-1);
            if let Some(spawn) = map.player_spawn() {
                move_to(&mut ship, spawn.rect);
            }
        } else if map.exit().is_some_and(|exit| exit.rect.intersects(&rect)) {
            host.update_score(100);
            map.next_level(&mut *host);
            if let Some(spawn) = map.player_spawn() {
                move_to(&mut ship, spawn.rect);
            }
        }
    }
}
