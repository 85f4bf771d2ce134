//! Game state transition event and observer.
//!
//! Systems request a change of [`GameStates`] by updating [`NextGameState`].
//! `check_pending_state` then emits a [`GameStateChangedEvent`], and
//! [`observe_gamestate_change_event`] applies the transition: it runs the
//! exit hook of the old state, then the enter hook of the new one. Hooks are
//! looked up in [`SystemsStore`] under the keys in [`hooks`].
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, error, info, warn};

/// Hook names registered in [`SystemsStore`].
pub mod hooks {
    pub const SETUP: &str = "setup";
    pub const ENTER_MENU: &str = "enter_menu";
    pub const ENTER_PLAY: &str = "enter_play";
    pub const QUIT_GAME: &str = "quit_game";
    /// Despawns scene entities; run when leaving a scene state.
    pub const CLEAN_SCENE: &str = "clean_scene";
}

#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    systems_store: Res<SystemsStore>,
) {
    debug!("GameStateChangedEvent triggered");

    let (Some(next_game_state), Some(game_state)) =
        (next_game_state.as_deref_mut(), game_state.as_deref_mut())
    else {
        warn!("GameState or NextGameState missing in observe_gamestate_change_event");
        return;
    };

    match next_game_state.get().clone() {
        Pending(new_state) => {
            let old_state = game_state.get().clone();
            info!("Transitioning from {:?} to {:?}", old_state, new_state);
            game_state.set(new_state.clone());
            next_game_state.reset();
            on_state_exit(&old_state, &mut commands, &systems_store);
            on_state_enter(&new_state, &mut commands, &systems_store);
        }
        Unchanged => {
            debug!("No state change pending.");
        }
    }
}

fn run_hook(name: &str, commands: &mut Commands, systems_store: &SystemsStore) {
    match systems_store.get(name) {
        Some(id) => commands.run_system(*id),
        None => error!("State hook '{}' not found in SystemsStore", name),
    }
}

fn on_state_enter(state: &GameStates, commands: &mut Commands, systems_store: &SystemsStore) {
    match state {
        GameStates::None => debug!("Entered None state"),
        GameStates::Setup => run_hook(hooks::SETUP, commands, systems_store),
        GameStates::Menu => run_hook(hooks::ENTER_MENU, commands, systems_store),
        GameStates::Playing => run_hook(hooks::ENTER_PLAY, commands, systems_store),
        GameStates::Quitting => run_hook(hooks::QUIT_GAME, commands, systems_store),
    }
}

fn on_state_exit(state: &GameStates, commands: &mut Commands, systems_store: &SystemsStore) {
    match state {
        GameStates::Menu | GameStates::Playing => {
            debug!("Leaving scene {:?}", state.scene());
            run_hook(hooks::CLEAN_SCENE, commands, systems_store);
        }
        other => debug!("Exited {:?} state", other),
    }
}
