//! Maldimensional entry point.
//!
//! A small 2D platformer built on:
//! - **raylib** for windowing, drawing and audio
//! - **bevy_ecs** for the entity-component-system world
//!
//! # Main Loop
//!
//! 1. Load and validate `config.ini` and the level layout; bail out early on
//!    any error, before a window exists
//! 2. Open the window, start the audio thread, register state hooks and
//!    observers
//! 3. Every frame:
//!    - `update`: input, audio bridge, player logic, timers, state changes
//!    - `fixed` (0..N times): platform layout, player physics, bursts,
//!      movement, respawn
//!    - `late`: render
//! 4. Stop the audio thread on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;

use maldimensional::error::ConfigError;
use maldimensional::events::gamestate::{
    GameStateChangedEvent, hooks, observe_gamestate_change_event,
};
use maldimensional::events::switchdebug::switch_debug_observer;
use maldimensional::game;
use maldimensional::resources::audio::{setup_audio, shutdown_audio};
use maldimensional::resources::debugmode::DebugMode;
use maldimensional::resources::gameconfig::GameConfig;
use maldimensional::resources::gamestate::{GameState, GameStates, NextGameState};
use maldimensional::resources::input::InputState;
use maldimensional::resources::platformlayout::{LevelLayout, PlatformLayout};
use maldimensional::resources::systemsstore::SystemsStore;
use maldimensional::resources::worldtime::WorldTime;
use maldimensional::systems::audio::{
    forward_audio_cmds, log_audio_failures, poll_audio_messages, update_bevy_audio_cmds,
    update_bevy_audio_messages,
};
use maldimensional::systems::gamestate::{check_pending_state, state_is_menu, state_is_playing};
use maldimensional::systems::input::update_input_state;
use maldimensional::systems::movement::movement;
use maldimensional::systems::particleemitter::particle_emitter_system;
use maldimensional::systems::platforms::apply_platform_layout;
use maldimensional::systems::player::{
    player_logic_system, player_physics_system, respawn_fallen_players,
};
use maldimensional::systems::presentation::{loading_fader_system, scramble_blink_system};
use maldimensional::systems::render::render_system;
use maldimensional::systems::time::{plan_fixed_steps, update_world_time};
use maldimensional::systems::ttl::ttl_system;

/// Maldimensional
#[derive(Parser)]
#[command(version, about = "A jetpack platformer whose platforms scramble mid-air.")]
struct Cli {
    /// Path of the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Level layout JSON, overriding `[level] layout` from the config.
    #[arg(long, value_name = "PATH")]
    level: Option<PathBuf>,

    /// Validate the configuration and the level, then exit.
    #[arg(long)]
    check_config: bool,

    /// Start with the debug overlay on.
    #[arg(long)]
    debug: bool,
}

/// Everything that must be valid before the window opens.
fn load_startup(cli: &Cli) -> Result<(GameConfig, LevelLayout), ConfigError> {
    let mut config = GameConfig::with_path(&cli.config);
    config.load_from_file()?;
    if let Some(level) = &cli.level {
        config.level_path = level.clone();
    }
    config.validate()?;
    let level = LevelLayout::load(&config.level_path)?;
    Ok((config, level))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let (config, level) = match load_startup(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if cli.check_config {
        println!(
            "{}: ok, level '{}' with {} of {} slots",
            cli.config.display(),
            level.name,
            level.platform_count(),
            level.slots.len()
        );
        return;
    }

    info!("Starting Maldimensional");
    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let mut builder = raylib::init();
    builder
        .size(window_width as i32, window_height as i32)
        .title("Maldimensional");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // ESC goes back to the menu, it must not close the window.
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(
        WorldTime::default().with_fixed_rate(config.fixed_hz, config.max_steps_per_frame),
    );
    world.insert_resource(PlatformLayout::new(level));
    world.insert_resource(config);
    world.insert_resource(InputState::default());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    if cli.debug {
        world.insert_resource(DebugMode {});
    }

    // Must go before the Setup hook writes audio commands.
    setup_audio(&mut world);

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let mut systems_store = SystemsStore::new();
    systems_store.register(&mut world, hooks::SETUP, game::setup);
    systems_store.register(&mut world, hooks::ENTER_MENU, game::enter_menu);
    systems_store.register(&mut world, hooks::ENTER_PLAY, game::enter_play);
    systems_store.register(&mut world, hooks::QUIT_GAME, game::quit_game);
    systems_store.register(&mut world, hooks::CLEAN_SCENE, game::clean_scene);
    world.insert_resource(systems_store);

    world.spawn(Observer::new(observe_gamestate_change_event));
    world.spawn(Observer::new(switch_debug_observer));
    // Ensure the observers are registered before anything triggers.
    world.flush();

    world.resource_mut::<NextGameState>().set(GameStates::Setup);
    world.trigger(GameStateChangedEvent {}); // enter Setup immediately

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(
        // audio systems must be together
        (
            // First, advance AudioCmd messages and forward them to the audio thread
            update_bevy_audio_cmds,
            forward_audio_cmds,
            // Then, pull audio thread messages and advance them
            poll_audio_messages,
            update_bevy_audio_messages,
            log_audio_failures,
        )
            .chain(),
    );
    update.add_systems(
        game::menu_input_system
            .run_if(state_is_menu)
            .after(update_input_state),
    );
    update.add_systems(
        player_logic_system
            .run_if(state_is_playing)
            .after(update_input_state)
            .after(game::menu_input_system),
    );
    update.add_systems(
        check_pending_state
            .after(player_logic_system)
            .after(game::menu_input_system),
    );
    update.add_systems((loading_fader_system, scramble_blink_system));
    update.add_systems(ttl_system);

    let mut fixed = Schedule::default();
    fixed.add_systems(
        (
            apply_platform_layout,
            player_physics_system.run_if(state_is_playing),
            particle_emitter_system,
            movement,
            respawn_fallen_players.run_if(state_is_playing),
        )
            .chain(),
    );

    let mut late = Schedule::default();
    late.add_systems(render_system);

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !matches!(world.resource::<GameState>().get(), GameStates::Quitting)
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        let plan = plan_fixed_steps(&mut world);
        for _ in 0..plan.ticks_to_run {
            fixed.run(&mut world);
        }

        late.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame
    }
    shutdown_audio(&mut world);
}
