//! Input polling.
//!
//! [`update_input_state`] reads the keyboard from Raylib once per rendered
//! frame and writes [`InputState`]. F11 toggles the debug overlay through
//! [`SwitchDebugEvent`].
use bevy_ecs::prelude::*;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::InputState;

pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    for state in input.bindings_mut() {
        state.active = rl.is_key_down(state.key_binding);
        state.just_pressed = rl.is_key_pressed(state.key_binding);
        state.just_released = rl.is_key_released(state.key_binding);
    }

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}
