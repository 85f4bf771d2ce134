//! The player actor.
//!
//! [`Player`] wraps the per-actor [`LocomotionController`] together with the
//! input intent gathered between physics ticks. Input is read once per
//! rendered frame, but the controller only sees it on fixed ticks, so a jump
//! press is latched in [`LocomotionIntent`] until the next tick takes it.

use bevy_ecs::prelude::Component;

use crate::locomotion::{LocomotionController, LocomotionInput};

/// Input collected by the variable-rate phase for the next physics tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocomotionIntent {
    pub move_axis: f32,
    pub jump_held: bool,
    /// Jump pressed since the last physics tick.
    pub jump_latched: bool,
    /// Menu exit pressed this frame.
    pub menu_exit: bool,
}

impl LocomotionIntent {
    /// Record this frame's input. A press is ORed into the latch so a tick
    /// running later in the frame (or several frames later) still sees it.
    pub fn record(&mut self, move_axis: f32, jump_pressed: bool, jump_held: bool, menu_exit: bool) {
        self.move_axis = move_axis;
        self.jump_held = jump_held;
        self.jump_latched |= jump_pressed;
        self.menu_exit = menu_exit;
    }

    /// Input for one physics tick; clears the jump latch.
    pub fn take_input(&mut self) -> LocomotionInput {
        let input = LocomotionInput {
            move_axis: self.move_axis,
            jump_edge: self.jump_latched,
            jump_held: self.jump_held,
        };
        self.jump_latched = false;
        input
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Component, Debug, Clone)]
pub struct Player {
    pub controller: LocomotionController,
    pub intent: LocomotionIntent,
}

impl Player {
    pub fn new(controller: LocomotionController) -> Self {
        Self {
            controller,
            intent: LocomotionIntent::default(),
        }
    }
}
