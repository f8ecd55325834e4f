//! spriteframe demo entry point.
//!
//! A 2D sprite framework written in Rust using:
//! - **raylib** for windowing, graphics and audio
//! - **bevy_ecs** for the frame-driven world holding sprites and resources
//! - **configparser** for INI settings under `Settings/`
//!
//! # Main Loop
//!
//! 1. Load settings and apply command-line overrides
//! 2. Open the raylib window, start the audio thread, load the demo assets
//! 3. Every frame: poll input, update widgets or the game, advance sprites,
//!    follow the camera, apply pending state changes, render
//! 4. Save settings and stop the audio thread on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --width 1024 --height 768
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;

use spriteframe::events::audio::AudioMessage;
use spriteframe::events::gamestate::observe_gamestate_change_event;
use spriteframe::game;
use spriteframe::resources::audio::{AudioBridge, setup_audio, shutdown_audio};
use spriteframe::resources::fpscounter::FpsCounter;
use spriteframe::resources::gamehost::GameHost;
use spriteframe::resources::screensize::ScreenSize;
use spriteframe::resources::settings::{DEFAULT_SETTINGS_DIR, Settings};
use spriteframe::resources::worldtime::WorldTime;
use spriteframe::systems::audio::{
    log_audio_messages, poll_audio_messages, update_bevy_audio_messages,
};
use spriteframe::systems::camera::camera_follow_system;
use spriteframe::systems::fps::fps_system;
use spriteframe::systems::gamestate::{check_pending_state, state_is_playing, state_is_title};
use spriteframe::systems::input::update_input_state;
use spriteframe::systems::menu::menu_update_system;
use spriteframe::systems::render::render_system;
use spriteframe::systems::sprite::{sprite_update_system, tilemap_update_system};
use spriteframe::systems::time::update_world_time;
use spriteframe::systems::title::title_update_system;

/// spriteframe demo
#[derive(Parser)]
#[command(version, about = "Sprite framework demo on raylib and bevy_ecs")]
struct Cli {
    /// Directory holding the INI settings files.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_SETTINGS_DIR)]
    settings_dir: PathBuf,

    /// Window width; overrides and updates `screen.width`.
    #[arg(long)]
    width: Option<i32>,

    /// Window height; overrides and updates `screen.height`.
    #[arg(long)]
    height: Option<i32>,

    /// Asset directory with `textures/`, `fonts/` and `sounds/`.
    #[arg(long, value_name = "DIR", default_value = "assets")]
    assets: PathBuf,

    /// Run without the audio thread.
    #[arg(long)]
    mute: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // --------------- Settings ---------------
    let mut settings = Settings::new(&cli.settings_dir);
    if let Err(e) = game::register_settings(&mut settings) {
        log::error!("Settings: {}", e);
    }
    for (name, value) in [("screen.width", cli.width), ("screen.height", cli.height)] {
        if let Some(value) = value {
            if let Err(e) = settings.update_setting(name, value) {
                log::warn!("{}", e);
            }
        }
    }
    let width = settings.get_int("screen.width").unwrap_or(800).max(1);
    let height = settings.get_int("screen.height").unwrap_or(600).max(1);
    let target_fps = settings.get_int("screen.target_fps").unwrap_or(60).max(1);
    let muted = cli.mute || settings.get_bool("sound.muted").unwrap_or(false);

    // --------------- Raylib window ---------------
    let (mut rl, thread) = raylib::init()
        .size(width, height)
        .title("spriteframe")
        .build();
    rl.set_target_fps(target_fps as u32);
    // ESC returns to the title instead of closing
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(ScreenSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(FpsCounter::new());
    world.insert_resource(GameHost::default());
    world.insert_resource(settings);

    if muted {
        log::info!("Audio disabled");
        world.insert_resource(Messages::<AudioMessage>::default());
    } else {
        setup_audio(&mut world);
    }

    if let Err(e) = game::setup(&mut world, &mut rl, &thread, &cli.assets) {
        log::error!("Demo setup failed: {}", e);
        shutdown_audio(&mut world);
        std::process::exit(1);
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
    world.spawn(Observer::new(observe_gamestate_change_event));
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(
        (
            update_input_state,
            title_update_system.run_if(state_is_title),
            menu_update_system.run_if(state_is_title),
            game::update.run_if(state_is_playing),
            sprite_update_system.run_if(state_is_playing),
            tilemap_update_system.run_if(state_is_playing),
            camera_follow_system,
            fps_system,
            check_pending_state,
        )
            .chain(),
    );
    update.add_systems(
        (
            poll_audio_messages,
            update_bevy_audio_messages,
            log_audio_messages,
        )
            .chain()
            .run_if(resource_exists::<AudioBridge>),
    );
    update.add_systems(render_system.after(check_pending_state));

    if let Err(e) = update.initialize(&mut world) {
        log::error!("Failed to initialize schedule: {}", e);
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.resource::<GameHost>().is_quitting()
    {
        let (dt, w, h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_frame_time(), rl.get_screen_width(), rl.get_screen_height())
        };
        update_world_time(&mut world, dt);
        *world.resource_mut::<ScreenSize>() = ScreenSize { w, h };

        update.run(&mut world);

        world.clear_trackers();
    }

    if let Some(settings) = world.get_resource::<Settings>() {
        if let Err(e) = settings.save_all() {
            log::error!("{}", e);
        }
    }
    shutdown_audio(&mut world);
}
