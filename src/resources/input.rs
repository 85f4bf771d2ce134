//! Per-frame keyboard input resource.
//!
//! Captures the keys the game reads and exposes them to systems via the
//! [`InputState`] resource. Movement accepts both A/D and the arrow keys.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Key is held this frame.
    pub active: bool,
    /// Key went down this frame.
    pub just_pressed: bool,
    /// Key went up this frame.
    pub just_released: bool,
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub move_left: BoolState,
    pub move_right: BoolState,
    pub move_left_alt: BoolState,
    pub move_right_alt: BoolState,
    pub jump: BoolState,
    /// Leave the level / quit from the title.
    pub action_back: BoolState,
    /// Start the level from the title.
    pub action_confirm: BoolState,
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            move_left: BoolState::bound_to(KeyboardKey::KEY_A),
            move_right: BoolState::bound_to(KeyboardKey::KEY_D),
            move_left_alt: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            move_right_alt: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            jump: BoolState::bound_to(KeyboardKey::KEY_SPACE),
            action_back: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
            action_confirm: BoolState::bound_to(KeyboardKey::KEY_ENTER),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
        }
    }
}

impl InputState {
    /// Horizontal axis in `[-1, 1]`; opposite keys cancel out.
    pub fn horizontal_axis(&self) -> f32 {
        let left = self.move_left.active || self.move_left_alt.active;
        let right = self.move_right.active || self.move_right_alt.active;
        match (left, right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }

    pub fn bindings_mut(&mut self) -> [&mut BoolState; 8] {
        [
            &mut self.move_left,
            &mut self.move_right,
            &mut self.move_left_alt,
            &mut self.move_right_alt,
            &mut self.jump,
            &mut self.action_back,
            &mut self.action_confirm,
            &mut self.mode_debug,
        ]
    }
}
