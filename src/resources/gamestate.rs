//! High-level game state resources.
//!
//! These resources track the authoritative current state of the game and any
//! pending transition requested by systems. See
//! `crate::events::gamestate::observe_gamestate_change_event` for how a
//! transition is applied and hooks are invoked.

use bevy_ecs::prelude::Resource;

use crate::locomotion::effects::{GAME_SCENE, START_SCENE};

/// Discrete high-level states the game can be in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    None,
    Setup,
    /// Title scene.
    Menu,
    /// Level scene.
    Playing,
    Quitting,
}

impl GameStates {
    /// State that shows the named scene.
    pub fn from_scene(name: &str) -> Option<Self> {
        match name {
            START_SCENE => Some(GameStates::Menu),
            GAME_SCENE => Some(GameStates::Playing),
            _ => None,
        }
    }

    /// Scene shown in this state, if any.
    pub fn scene(&self) -> Option<&'static str> {
        match self {
            GameStates::Menu => Some(START_SCENE),
            GameStates::Playing => Some(GAME_SCENE),
            _ => None,
        }
    }
}

/// Representation of a requested next state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NextGameStates {
    #[default]
    Unchanged,
    Pending(GameStates),
}

/// Authoritative current game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    pub fn new() -> Self {
        GameState {
            current: GameStates::None,
        }
    }
    pub fn get(&self) -> &GameStates {
        &self.current
    }
    /// Update the current state immediately, without running hooks.
    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }
}

/// Intent to change to a new game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NextGameState {
    next: NextGameStates,
}

impl NextGameState {
    pub fn new() -> Self {
        NextGameState {
            next: NextGameStates::Unchanged,
        }
    }

    pub fn get(&self) -> &NextGameStates {
        &self.next
    }

    /// Request a transition; `check_pending_state` emits the change event.
    pub fn set(&mut self, next: GameStates) {
        self.next = NextGameStates::Pending(next);
    }

    pub fn reset(&mut self) {
        self.next = NextGameStates::Unchanged;
    }
}
