//! Level grid resource.
//!
//! A [`TileMap`] turns a grid of colors supplied by a [`LevelLoader`] into
//! tiles. Each grid cell maps to one `tile_size` square:
//!
//! | color  | meaning |
//! |--------|---------|
//! | green  | player spawn (first one only) |
//! | black  | wall, a collision tile |
//! | yellow | level exit |
//! | white  | open floor |
//!
//! Any other color is ignored. Levels are numbered from 1; running out of
//! levels asks the host to end the game.

use bevy_ecs::prelude::Resource;
use log::{info, warn};
use raylib::prelude::Color;

use crate::batch::SpriteBatch;
use crate::components::pixelrect::PixelRect;
use crate::components::sprite::Sprite;
use crate::host::SpriteBasedGame;
use crate::resources::texturestore::TextureHandle;

pub const SPAWN_COLOR: Color = Color::GREEN;
pub const WALL_COLOR: Color = Color::BLACK;
pub const EXIT_COLOR: Color = Color::YELLOW;
pub const FLOOR_COLOR: Color = Color::WHITE;

/// Movement and attack queries answered by a map. The base answers are
/// all "no".
pub trait MapControls {
    fn check_player_move(&self, _target: &PixelRect) -> bool {
        false
    }

    fn check_ai_move(&self, _original: &PixelRect, _target: &PixelRect) -> bool {
        false
    }

    fn check_attack(&self, _target: &PixelRect) -> bool {
        false
    }

    fn add_attack(&mut self, _x_mod: i32, _y_mod: i32) {}
}

/// Row-major grid of cell colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorGrid {
    width: usize,
    height: usize,
    cells: Vec<Color>,
}

impl ColorGrid {
    pub fn new(width: usize, height: usize, cells: Vec<Color>) -> Result<Self, String> {
        if cells.len() != width * height {
            return Err(format!(
                "Color grid {}x{} needs {} cells, got {}",
                width,
                height,
                width * height,
                cells.len()
            ));
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build from rows of text using a character legend.
    pub fn from_rows(rows: &[&str], legend: impl Fn(char) -> Color) -> Result<Self, String> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(format!("Row {} is not {} cells wide", y, width));
            }
            cells.extend(row.chars().map(&legend));
        }
        Self::new(width, height, cells)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x).copied()
    }
}

/// Supplies level data to a [`TileMap`].
pub trait LevelLoader: Send + Sync {
    /// Color grid for `level`, or an error when there is no such level.
    fn load(&mut self, level: u32) -> Result<ColorGrid, String>;

    /// Texture drawn for wall tiles of `level`.
    fn wall_texture(&self, _level: u32) -> Option<TextureHandle> {
        None
    }
}

/// Loader with no levels at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLevels;

impl LevelLoader for NoLevels {
    fn load(&mut self, level: u32) -> Result<ColorGrid, String> {
        Err(format!("No level loader configured (level {})", level))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    Wall,
    Exit,
    PlayerSpawn,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub kind: TileKind,
    pub rect: PixelRect,
    pub texture: Option<TextureHandle>,
}

impl Tile {
    pub fn draw(&self, batch: &mut dyn SpriteBatch) {
        if let Some(texture) = &self.texture {
            batch.draw(&texture.key, self.rect, None, Color::WHITE);
        }
    }
}

fn same_rgb(a: Color, b: Color) -> bool {
    a.r == b.r && a.g == b.g && a.b == b.b
}

#[derive(Resource)]
pub struct TileMap {
    /// Grid size in tiles.
    width: usize,
    height: usize,
    tile_size: i32,
    level: u32,
    collision_tiles: Vec<Tile>,
    player_spawn: Option<Tile>,
    exit: Option<Tile>,
    sprites: Vec<Sprite>,
    loader: Box<dyn LevelLoader>,
}

impl TileMap {
    pub fn new(tile_size: i32) -> Self {
        Self::with_loader(tile_size, Box::new(NoLevels))
    }

    pub fn with_loader(tile_size: i32, loader: Box<dyn LevelLoader>) -> Self {
        Self {
            width: 0,
            height: 0,
            tile_size,
            level: 0,
            collision_tiles: Vec::new(),
            player_spawn: None,
            exit: None,
            sprites: Vec::new(),
            loader,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tile_size(&self) -> i32 {
        self.tile_size
    }

    /// Current level number, 0 before the first game starts.
    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn collision_tiles(&self) -> &[Tile] {
        &self.collision_tiles
    }

    pub fn player_spawn(&self) -> Option<&Tile> {
        self.player_spawn.as_ref()
    }

    pub fn exit(&self) -> Option<&Tile> {
        self.exit.as_ref()
    }

    /// Sprites living on the map, updated and drawn with it.
    pub fn add_sprite(&mut self, sprite: Sprite) {
        self.sprites.push(sprite);
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn tile_rectangle(&self, x: i32, y: i32) -> PixelRect {
        PixelRect::new(
            x * self.tile_size,
            y * self.tile_size,
            self.tile_size,
            self.tile_size,
        )
    }

    /// Load the current level from the loader. False on any failure.
    pub fn load_level(&mut self) -> bool {
        match self.loader.load(self.level) {
            Ok(grid) => {
                self.read_level(&grid);
                info!(
                    "Loaded level {} ({}x{}, {} walls)",
                    self.level,
                    self.width,
                    self.height,
                    self.collision_tiles.len()
                );
                true
            }
            Err(e) => {
                warn!("Failed to load level {}: {}", self.level, e);
                false
            }
        }
    }

    /// Classify every cell of `grid`, replacing the current tiles.
    pub fn read_level(&mut self, grid: &ColorGrid) {
        self.width = grid.width();
        self.height = grid.height();
        self.collision_tiles.clear();
        self.player_spawn = None;
        self.exit = None;
        let wall_texture = self.loader.wall_texture(self.level);

        for x in 0..grid.width() {
            for y in 0..grid.height() {
                let Some(color) = grid.get(x, y) else {
                    continue;
                };
                let rect = self.tile_rectangle(x as i32, y as i32);
                if same_rgb(color, SPAWN_COLOR) {
                    if self.player_spawn.is_none() {
                        self.player_spawn = Some(Tile {
                            kind: TileKind::PlayerSpawn,
                            rect,
                            texture: None,
                        });
                    }
                } else if same_rgb(color, WALL_COLOR) {
                    self.collision_tiles.push(Tile {
                        kind: TileKind::Wall,
                        rect,
                        texture: wall_texture.clone(),
                    });
                } else if same_rgb(color, EXIT_COLOR) {
                    self.exit = Some(Tile {
                        kind: TileKind::Exit,
                        rect,
                        texture: None,
                    });
                }
            }
        }
    }

    /// Advance to the next level; the host ends the game if there is none.
    pub fn next_level(&mut self, game: &mut dyn SpriteBasedGame) {
        self.level += 1;
        if !self.load_level() {
            game.end_game();
        }
    }

    pub fn start_game(&mut self) -> bool {
        self.level = 1;
        for sprite in &mut self.sprites {
            sprite.start_game();
        }
        self.load_level()
    }

    pub fn end_game(&mut self) {
        for sprite in &mut self.sprites {
            sprite.end_game();
        }
    }

    pub fn update(&mut self, now_ms: f64) {
        for sprite in &mut self.sprites {
            sprite.update(now_ms);
        }
    }

    pub fn draw(&self, batch: &mut dyn SpriteBatch) {
        for tile in &self.collision_tiles {
            tile.draw(batch);
        }
        for sprite in &self.sprites {
            sprite.draw(batch);
        }
    }
}

impl MapControls for TileMap {}
