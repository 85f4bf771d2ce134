//! Grounded / airborne / boosting state machine.
//!
//! [`LocomotionController`] owns everything the actor needs between ticks:
//! the fuel gauge, the smoothing accumulator, facing, the boost latch and the
//! [`LocomotionMode`] of the previous tick. Two entry points mirror the two
//! phases of the frame:
//!
//! - [`LocomotionController::logic_tick`] runs once per rendered frame:
//!   fuel recharge and the menu-exit edge.
//! - [`LocomotionController::physics_tick`] runs at the fixed rate: ground
//!   probe first, then [`LocomotionController::step`] for every decision of
//!   that tick.
//!
//! The mode is recomputed from scratch every tick and every one-shot effect is
//! derived by comparing it with the previous tick's mode, so there are no
//! scattered "was doing X" flags:
//!
//! | previous            | current             | events                    |
//! |---------------------|---------------------|---------------------------|
//! | airborne (any)      | `Grounded`          | `Landed`                  |
//! | `AirborneBoosting`  | anything else       | `BoostStopped`            |
//! | anything else       | `AirborneBoosting`  | `BoostStarted`            |
//!
//! While the [`PauseGate`] is closed both entry points return immediately
//! without reading a collaborator or changing any field.

use log::debug;
use raylib::prelude::Vector2;

use crate::locomotion::config::LocomotionConfig;
use crate::locomotion::effects::{
    AnimationParams, EffectAnchors, LocomotionEvent, LocomotionEvents,
};
use crate::locomotion::fuel::FuelGauge;
use crate::locomotion::gate::PauseGate;
use crate::locomotion::sensor::{GroundContact, GroundSensor, ShapeCaster};
use crate::locomotion::smoothing::VelocitySmoother;

/// Locomotion mode of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LocomotionMode {
    #[default]
    Grounded,
    AirborneBallistic,
    AirborneBoosting,
}

impl LocomotionMode {
    fn resolve(grounded: bool, boosting: bool) -> Self {
        match (grounded, boosting) {
            (true, _) => LocomotionMode::Grounded,
            (false, true) => LocomotionMode::AirborneBoosting,
            (false, false) => LocomotionMode::AirborneBallistic,
        }
    }

    pub fn is_airborne(self) -> bool {
        self != LocomotionMode::Grounded
    }
}

/// Horizontal facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// `1.0` facing right, `-1.0` facing left.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }

    /// Whether a non-zero `axis` points the other way.
    pub fn opposes(self, axis: f32) -> bool {
        match self {
            Facing::Left => axis > 0.0,
            Facing::Right => axis < 0.0,
        }
    }
}

/// Input sampled for one physics tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LocomotionInput {
    /// Horizontal axis in `[-1, 1]`.
    pub move_axis: f32,
    /// Jump was pressed since the previous physics tick.
    pub jump_edge: bool,
    /// Jump is currently held.
    pub jump_held: bool,
}

/// Per-actor locomotion state.
#[derive(Debug, Clone)]
pub struct LocomotionController {
    config: LocomotionConfig,
    gate: PauseGate,
    sensor: GroundSensor,
    fuel: FuelGauge,
    smoother: VelocitySmoother,
    facing: Facing,
    grounded: bool,
    boost_engaged: bool,
    mode: LocomotionMode,
}

impl LocomotionController {
    /// Create a controller at spawn: grounded, full fuel, facing right,
    /// paused until `gate` opens.
    ///
    /// `config` is expected to have passed [`LocomotionConfig::validate`].
    pub fn new(config: LocomotionConfig, gate: PauseGate) -> Self {
        let sensor = GroundSensor::new(config.probe_depth, config.ground_mask);
        let fuel = FuelGauge::from_config(&config);
        Self {
            config,
            gate,
            sensor,
            fuel,
            smoother: VelocitySmoother::new(),
            facing: Facing::Right,
            grounded: true,
            boost_engaged: false,
            mode: LocomotionMode::Grounded,
        }
    }

    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    pub fn gate(&self) -> &PauseGate {
        &self.gate
    }

    pub fn is_paused(&self) -> bool {
        self.gate.is_paused()
    }

    pub fn fuel(&self) -> &FuelGauge {
        &self.fuel
    }

    pub fn fuel_mut(&mut self) -> &mut FuelGauge {
        &mut self.fuel
    }

    pub fn smoother(&self) -> &VelocitySmoother {
        &self.smoother
    }

    pub fn sensor(&self) -> &GroundSensor {
        &self.sensor
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn is_boost_engaged(&self) -> bool {
        self.boost_engaged
    }

    pub fn mode(&self) -> LocomotionMode {
        self.mode
    }

    /// Burst positions for an actor centred at `position`.
    pub fn anchors(&self, position: Vector2) -> EffectAnchors {
        let sign = self.facing.sign();
        EffectAnchors {
            dust: Vector2 {
                x: position.x + self.config.dust_offset.x * sign,
                y: position.y + self.config.dust_offset.y,
            },
            smoke: Vector2 {
                x: position.x + self.config.smoke_offset.x * sign,
                y: position.y + self.config.smoke_offset.y,
            },
        }
    }

    /// Variable-rate phase: recharge while grounded and report the
    /// menu-exit edge.
    pub fn logic_tick(&mut self, menu_exit: bool, dt: f32) -> LocomotionEvents {
        let mut events = LocomotionEvents::new();
        if self.is_paused() {
            return events;
        }

        if self.grounded {
            self.fuel.recharge(dt);
        }
        if menu_exit {
            debug!("Menu exit requested");
            events.push(LocomotionEvent::ExitedToMenu);
        }
        events
    }

    /// Fixed-rate phase: probe the ground below the collider at `center`,
    /// then advance the state machine with the fresh contact.
    pub fn physics_tick(
        &mut self,
        caster: &impl ShapeCaster,
        center: Vector2,
        input: LocomotionInput,
        velocity: &mut Vector2,
        dt: f32,
    ) -> LocomotionEvents {
        if self.is_paused() {
            return LocomotionEvents::new();
        }
        let contact = self
            .sensor
            .probe(caster, center, self.config.collider_half_extents);
        self.step(input, contact, velocity, dt)
    }

    /// Advance one physics tick with an already probed `contact`.
    ///
    /// `velocity` is the body's velocity; it is smoothed toward this tick's
    /// target and receives the jump impulse.
    pub fn step(
        &mut self,
        input: LocomotionInput,
        contact: GroundContact,
        velocity: &mut Vector2,
        dt: f32,
    ) -> LocomotionEvents {
        let mut events = LocomotionEvents::new();
        if self.is_paused() {
            return events;
        }

        let previous = self.mode;

        self.grounded = contact.is_standing();
        if self.grounded {
            self.boost_engaged = false;
        }

        let move_axis = input.move_axis.clamp(-1.0, 1.0);

        let ground_jump = self.grounded && input.jump_edge;
        let scramble = !self.grounded && input.jump_edge;
        if scramble {
            self.boost_engaged = true;
        }

        // Fuel is checked once, at the start of the sustain decision.
        let sustaining = !self.grounded && self.boost_engaged && input.jump_held;
        let boosting = sustaining && self.fuel.has_fuel();
        if boosting {
            self.fuel.consume(dt);
        }

        let target = Vector2 {
            x: move_axis * self.config.speed,
            y: if boosting {
                -self.config.boost_speed
            } else {
                velocity.y
            },
        };
        *velocity =
            self.smoother
                .smooth_towards(*velocity, target, self.config.movement_smoothing, dt);

        if ground_jump {
            velocity.y -= self.config.jump_impulse;
        }

        if self.facing.opposes(move_axis) {
            self.facing = self.facing.flipped();
        }

        self.mode = LocomotionMode::resolve(self.grounded, boosting);
        if self.mode != previous {
            debug!("Locomotion mode {:?} -> {:?}", previous, self.mode);
        }

        if previous.is_airborne() && self.mode == LocomotionMode::Grounded {
            events.push(LocomotionEvent::Landed);
        }
        if previous == LocomotionMode::AirborneBoosting
            && self.mode != LocomotionMode::AirborneBoosting
        {
            events.push(LocomotionEvent::BoostStopped);
        }
        if ground_jump {
            events.push(LocomotionEvent::GroundJumped);
        }
        if scramble {
            events.push(LocomotionEvent::Scrambled);
        }
        if previous != LocomotionMode::AirborneBoosting
            && self.mode == LocomotionMode::AirborneBoosting
        {
            events.push(LocomotionEvent::BoostStarted);
        }

        events.push(LocomotionEvent::Animate(AnimationParams {
            grounded: self.grounded,
            boosting: self.mode == LocomotionMode::AirborneBoosting,
            has_fuel: self.fuel.has_fuel(),
            horizontal_speed: velocity.x.abs(),
        }));

        events
    }

    /// Put the actor back at the spawn point.
    ///
    /// Velocity, the smoothing accumulator and the mode are reset; fuel is
    /// kept. A boost in progress is reported as stopped. Does nothing while
    /// paused.
    pub fn respawn(&mut self, position: &mut Vector2, velocity: &mut Vector2) -> LocomotionEvents {
        let mut events = LocomotionEvents::new();
        if self.is_paused() {
            return events;
        }
        if self.mode == LocomotionMode::AirborneBoosting {
            events.push(LocomotionEvent::BoostStopped);
        }

        *position = self.config.spawn_point;
        *velocity = Vector2 { x: 0.0, y: 0.0 };
        self.smoother.reset();
        self.grounded = true;
        self.boost_engaged = false;
        self.mode = LocomotionMode::Grounded;
        debug!(
            "Respawned at ({:.1}, {:.1}) with fuel {:.2}",
            position.x,
            position.y,
            self.fuel.level()
        );
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locomotion::sensor::SweepHit;

    const DT: f32 = 1.0 / 50.0;
    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn zero() -> Vector2 {
        Vector2 { x: 0.0, y: 0.0 }
    }

    fn open_controller() -> LocomotionController {
        let gate = PauseGate::new();
        gate.open();
        LocomotionController::new(LocomotionConfig::default(), gate)
    }

    fn input(move_axis: f32, jump_edge: bool, jump_held: bool) -> LocomotionInput {
        LocomotionInput {
            move_axis,
            jump_edge,
            jump_held,
        }
    }

    fn count(events: &LocomotionEvents, wanted: LocomotionEvent) -> usize {
        events.iter().filter(|e| **e == wanted).count()
    }

    fn has(events: &LocomotionEvents, wanted: LocomotionEvent) -> bool {
        count(events, wanted) > 0
    }

    /// Leave the ground so the next ticks start airborne.
    fn go_airborne(controller: &mut LocomotionController, velocity: &mut Vector2) {
        controller.step(input(0.0, false, false), GroundContact::NONE, velocity, DT);
        assert_eq!(controller.mode(), LocomotionMode::AirborneBallistic);
    }

    // ==================== PAUSE ====================

    #[test]
    fn test_paused_respawn_leaves_actor_alone() {
        let mut controller = LocomotionController::new(LocomotionConfig::default(), PauseGate::new());
        let mut position = Vector2 { x: 10.0, y: 900.0 };
        let mut velocity = Vector2 { x: 3.0, y: 40.0 };

        let events = controller.respawn(&mut position, &mut velocity);

        assert!(events.is_empty());
        assert_eq!(position, Vector2 { x: 10.0, y: 900.0 });
        assert_eq!(velocity, Vector2 { x: 3.0, y: 40.0 });
    }

    #[test]
    fn test_paused_controller_changes_nothing() {
        let mut controller = LocomotionController::new(LocomotionConfig::default(), PauseGate::new());
        let mut velocity = Vector2 { x: 5.0, y: 7.0 };
        let fuel_before = controller.fuel().level();

        for _ in 0..10 {
            let events = controller.step(input(1.0, true, true), GroundContact::NONE, &mut velocity, DT);
            assert!(events.is_empty());
            let events = controller.logic_tick(true, DT);
            assert!(events.is_empty());
        }

        assert_eq!(velocity, Vector2 { x: 5.0, y: 7.0 });
        assert_eq!(controller.fuel().level(), fuel_before);
        assert_eq!(controller.facing(), Facing::Right);
        assert!(controller.is_grounded());
        assert!(!controller.is_boost_engaged());
        assert_eq!(controller.mode(), LocomotionMode::Grounded);
        assert_eq!(controller.smoother().accumulator(), zero());
    }

    #[test]
    fn test_paused_physics_tick_does_not_query_caster() {
        struct PanickingCaster;
        impl ShapeCaster for PanickingCaster {
            fn sweep_box(&self, _: Vector2, _: Vector2, _: Vector2, _: f32, _: u32) -> Option<SweepHit> {
                panic!("paused controller must not query physics");
            }
        }

        let mut controller = LocomotionController::new(LocomotionConfig::default(), PauseGate::new());
        let mut velocity = zero();
        let events = controller.physics_tick(&PanickingCaster, zero(), input(1.0, false, false), &mut velocity, DT);
        assert!(events.is_empty());
    }

    #[test]
    fn test_opening_gate_resumes_ticks() {
        let gate = PauseGate::new();
        let mut controller = LocomotionController::new(LocomotionConfig::default(), gate.clone());
        let mut velocity = zero();
        assert!(controller.step(input(1.0, false, false), GroundContact::FLOOR, &mut velocity, DT).is_empty());
        gate.open();
        let events = controller.step(input(1.0, false, false), GroundContact::FLOOR, &mut velocity, DT);
        assert!(!events.is_empty());
        assert!(velocity.x > 0.0);
    }

    // ==================== GROUND / LANDING ====================

    #[test]
    fn test_walk_right_on_ground() {
        let mut controller = open_controller();
        let mut velocity = zero();
        let speed = controller.config().speed;
        let mut previous_x = 0.0;

        for _ in 0..50 {
            let events = controller.step(input(1.0, false, false), GroundContact::FLOOR, &mut velocity, DT);
            assert!(velocity.x >= previous_x);
            previous_x = velocity.x;
            assert!(!has(&events, LocomotionEvent::GroundJumped));
            assert!(!has(&events, LocomotionEvent::Scrambled));
            assert!(!has(&events, LocomotionEvent::BoostStarted));
            assert!(!has(&events, LocomotionEvent::Landed));
        }

        assert!((velocity.x - speed).abs() < 1.0);
        assert_eq!(controller.facing(), Facing::Right);
        assert_eq!(controller.mode(), LocomotionMode::Grounded);
    }

    #[test]
    fn test_landing_fires_only_on_false_to_true() {
        let mut controller = open_controller();
        let mut velocity = zero();
        let contacts = [true, true, false, false, true, true, false, true];
        let mut was_grounded = true;

        for grounded in contacts {
            let contact = if grounded { GroundContact::FLOOR } else { GroundContact::NONE };
            let events = controller.step(input(0.0, false, false), contact, &mut velocity, DT);
            let expected = !was_grounded && grounded;
            assert_eq!(has(&events, LocomotionEvent::Landed), expected);
            was_grounded = grounded;
        }
    }

    #[test]
    fn test_sloped_contact_is_airborne() {
        let mut controller = open_controller();
        let mut velocity = zero();
        let slope = GroundContact {
            hit: true,
            normal: Vector2 { x: 0.6, y: -0.8 },
        };
        controller.step(input(0.0, false, false), slope, &mut velocity, DT);
        assert!(!controller.is_grounded());
        assert_eq!(controller.mode(), LocomotionMode::AirborneBallistic);
    }

    #[test]
    fn test_ballistic_leaves_vertical_velocity_to_physics() {
        let mut controller = open_controller();
        let mut velocity = Vector2 { x: 0.0, y: 80.0 };
        controller.step(input(0.0, false, false), GroundContact::NONE, &mut velocity, DT);
        assert!(approx_eq(velocity.y, 80.0));
    }

    // ==================== GROUND JUMP ====================

    #[test]
    fn test_ground_jump_applies_one_impulse() {
        let mut controller = open_controller();
        let mut velocity = zero();
        let impulse = controller.config().jump_impulse;

        let events = controller.step(input(0.0, true, true), GroundContact::FLOOR, &mut velocity, DT);

        assert!(approx_eq(velocity.y, -impulse));
        assert!(!controller.is_boost_engaged());
        assert_eq!(count(&events, LocomotionEvent::GroundJumped), 1);
        assert!(!has(&events, LocomotionEvent::Scrambled));
        assert!(!has(&events, LocomotionEvent::BoostStarted));
    }

    #[test]
    fn test_holding_jump_after_ground_jump_does_not_boost() {
        let mut controller = open_controller();
        let mut velocity = zero();
        controller.step(input(0.0, true, true), GroundContact::FLOOR, &mut velocity, DT);
        let fuel_before = controller.fuel().level();

        for _ in 0..5 {
            let events = controller.step(input(0.0, false, true), GroundContact::NONE, &mut velocity, DT);
            assert!(!has(&events, LocomotionEvent::BoostStarted));
        }
        assert_eq!(controller.mode(), LocomotionMode::AirborneBallistic);
        assert_eq!(controller.fuel().level(), fuel_before);
    }

    // ==================== BOOST ====================

    #[test]
    fn test_airborne_jump_edge_starts_boost_with_full_fuel() {
        let mut controller = open_controller();
        let mut velocity = zero();
        go_airborne(&mut controller, &mut velocity);
        let boost_speed = controller.config().boost_speed;

        let events = controller.step(input(0.0, true, true), GroundContact::NONE, &mut velocity, DT);
        assert!(controller.is_boost_engaged());
        assert_eq!(count(&events, LocomotionEvent::Scrambled), 1);
        assert_eq!(count(&events, LocomotionEvent::BoostStarted), 1);
        assert!(velocity.y < 0.0);

        for _ in 0..40 {
            let events = controller.step(input(0.0, false, true), GroundContact::NONE, &mut velocity, DT);
            assert!(!has(&events, LocomotionEvent::BoostStarted));
            assert!(!has(&events, LocomotionEvent::Scrambled));
        }
        assert!((velocity.y + boost_speed).abs() < 1.0);
        assert_eq!(controller.mode(), LocomotionMode::AirborneBoosting);
    }

    #[test]
    fn test_fuel_drains_only_while_boosting() {
        let mut controller = open_controller();
        let mut velocity = zero();
        go_airborne(&mut controller, &mut velocity);

        let before = controller.fuel().level();
        controller.step(input(0.0, true, true), GroundContact::NONE, &mut velocity, DT);
        let expected = before - controller.config().fuel_consumption_rate * DT;
        assert!(approx_eq(controller.fuel().level(), expected));

        let mid = controller.fuel().level();
        controller.step(input(0.0, false, false), GroundContact::NONE, &mut velocity, DT);
        assert_eq!(controller.fuel().level(), mid);
    }

    #[test]
    fn test_fuel_exhaustion_mid_sustain() {
        let mut controller = open_controller();
        let mut velocity = zero();
        go_airborne(&mut controller, &mut velocity);
        // One tick of fuel left.
        let one_tick = controller.config().fuel_consumption_rate * DT * 0.5;
        let min = controller.fuel().min();
        controller.fuel_mut().set_level(min + one_tick);

        let events = controller.step(input(0.0, true, true), GroundContact::NONE, &mut velocity, DT);
        assert!(has(&events, LocomotionEvent::BoostStarted));
        assert!(approx_eq(controller.fuel().level(), min));
        assert!(!controller.fuel().has_fuel());

        let events = controller.step(input(0.0, false, true), GroundContact::NONE, &mut velocity, DT);
        assert_eq!(count(&events, LocomotionEvent::BoostStopped), 1);
        assert_eq!(controller.mode(), LocomotionMode::AirborneBallistic);
        assert!(approx_eq(controller.fuel().level(), min));

        for _ in 0..5 {
            let events = controller.step(input(0.0, false, true), GroundContact::NONE, &mut velocity, DT);
            assert!(!has(&events, LocomotionEvent::BoostStopped));
            assert!(approx_eq(controller.fuel().level(), min));
        }
    }

    #[test]
    fn test_boost_start_is_rising_edge_on_active_boost() {
        let mut controller = open_controller();
        let mut velocity = zero();
        go_airborne(&mut controller, &mut velocity);

        let mut starts = 0;
        // Start, keep holding, press again while holding, release, press again.
        let script = [
            input(0.0, true, true),
            input(0.0, false, true),
            input(0.0, true, true),
            input(0.0, false, true),
            input(0.0, false, false),
            input(0.0, true, true),
        ];
        let mut scrambles = 0;
        for tick in script {
            let events = controller.step(tick, GroundContact::NONE, &mut velocity, DT);
            starts += count(&events, LocomotionEvent::BoostStarted);
            scrambles += count(&events, LocomotionEvent::Scrambled);
        }
        assert_eq!(starts, 2);
        assert_eq!(scrambles, 3);
    }

    #[test]
    fn test_scramble_fires_even_without_fuel() {
        let mut controller = open_controller();
        let mut velocity = zero();
        go_airborne(&mut controller, &mut velocity);
        let min = controller.fuel().min();
        controller.fuel_mut().set_level(min);

        let events = controller.step(input(0.0, true, true), GroundContact::NONE, &mut velocity, DT);
        assert_eq!(count(&events, LocomotionEvent::Scrambled), 1);
        assert!(!has(&events, LocomotionEvent::BoostStarted));
        assert!(controller.is_boost_engaged());
        assert_eq!(controller.mode(), LocomotionMode::AirborneBallistic);
    }

    #[test]
    fn test_landing_while_boosting_stops_boost_and_clears_latch() {
        let mut controller = open_controller();
        let mut velocity = zero();
        go_airborne(&mut controller, &mut velocity);
        controller.step(input(0.0, true, true), GroundContact::NONE, &mut velocity, DT);
        assert_eq!(controller.mode(), LocomotionMode::AirborneBoosting);

        let events = controller.step(input(0.0, false, true), GroundContact::FLOOR, &mut velocity, DT);
        assert!(has(&events, LocomotionEvent::Landed));
        assert!(has(&events, LocomotionEvent::BoostStopped));
        assert!(!controller.is_boost_engaged());

        // Walking off again while still holding jump must not resume boost.
        let events = controller.step(input(0.0, false, true), GroundContact::NONE, &mut velocity, DT);
        assert!(!has(&events, LocomotionEvent::BoostStarted));
    }

    #[test]
    fn test_landing_in_same_tick_as_jump_edge_is_a_ground_jump() {
        let mut controller = open_controller();
        let mut velocity = zero();
        go_airborne(&mut controller, &mut velocity);

        let events = controller.step(input(0.0, true, true), GroundContact::FLOOR, &mut velocity, DT);
        assert!(has(&events, LocomotionEvent::Landed));
        assert!(has(&events, LocomotionEvent::GroundJumped));
        assert!(!has(&events, LocomotionEvent::Scrambled));
        assert!(!controller.is_boost_engaged());
    }

    #[test]
    fn test_fuel_never_changes_while_grounded_in_physics_phase() {
        let mut controller = open_controller();
        let mut velocity = zero();
        let min = controller.fuel().min();
        controller.fuel_mut().set_level(min + 0.3);
        for _ in 0..20 {
            controller.step(input(1.0, false, true), GroundContact::FLOOR, &mut velocity, DT);
            assert!(approx_eq(controller.fuel().level(), min + 0.3));
        }
    }

    // ==================== FACING ====================

    #[test]
    fn test_facing_flips_only_on_opposing_input() {
        let mut controller = open_controller();
        let mut velocity = zero();
        let script = [
            (0.0, Facing::Right),
            (0.5, Facing::Right),
            (-0.1, Facing::Left),
            (-1.0, Facing::Left),
            (0.0, Facing::Left),
            (0.2, Facing::Right),
            (1.0, Facing::Right),
        ];
        for (axis, expected) in script {
            controller.step(input(axis, false, false), GroundContact::FLOOR, &mut velocity, DT);
            assert_eq!(controller.facing(), expected, "axis {axis}");
        }
    }

    #[test]
    fn test_anchors_mirror_with_facing() {
        let mut controller = open_controller();
        let mut velocity = zero();
        let center = Vector2 { x: 100.0, y: 50.0 };
        let right = controller.anchors(center);
        controller.step(input(-1.0, false, false), GroundContact::FLOOR, &mut velocity, DT);
        let left = controller.anchors(center);
        assert!(approx_eq(right.smoke.x - center.x, -(left.smoke.x - center.x)));
        assert!(approx_eq(right.dust.y, left.dust.y));
    }

    // ==================== LOGIC PHASE ====================

    #[test]
    fn test_logic_tick_recharges_only_when_grounded() {
        let mut controller = open_controller();
        let mut velocity = zero();
        let min = controller.fuel().min();
        controller.fuel_mut().set_level(min);

        controller.logic_tick(false, 1.0);
        let grounded_level = controller.fuel().level();
        assert!(grounded_level > min);

        go_airborne(&mut controller, &mut velocity);
        controller.logic_tick(false, 1.0);
        assert_eq!(controller.fuel().level(), grounded_level);
    }

    #[test]
    fn test_logic_tick_reports_menu_exit() {
        let mut controller = open_controller();
        let events = controller.logic_tick(true, DT);
        assert_eq!(events.as_slice(), &[LocomotionEvent::ExitedToMenu]);
        assert!(controller.logic_tick(false, DT).is_empty());
    }

    // ==================== ANIMATION ====================

    #[test]
    fn test_every_unpaused_tick_ends_with_animation_params() {
        let mut controller = open_controller();
        let mut velocity = Vector2 { x: -30.0, y: 0.0 };
        let events = controller.step(input(-1.0, false, false), GroundContact::FLOOR, &mut velocity, DT);
        match events.last() {
            Some(LocomotionEvent::Animate(params)) => {
                assert!(params.grounded);
                assert!(!params.boosting);
                assert!(params.has_fuel);
                assert!(approx_eq(params.horizontal_speed, velocity.x.abs()));
            }
            other => panic!("expected animation params, got {other:?}"),
        }
    }

    // ==================== RESPAWN ====================

    #[test]
    fn test_respawn_resets_motion_but_keeps_fuel() {
        let mut controller = open_controller();
        let mut velocity = zero();
        go_airborne(&mut controller, &mut velocity);
        controller.step(input(1.0, true, true), GroundContact::NONE, &mut velocity, DT);
        let fuel = controller.fuel().level();
        let mut position = Vector2 { x: 999.0, y: 999.0 };

        let events = controller.respawn(&mut position, &mut velocity);

        assert_eq!(events.as_slice(), &[LocomotionEvent::BoostStopped]);
        assert_eq!(position, controller.config().spawn_point);
        assert_eq!(velocity, zero());
        assert_eq!(controller.smoother().accumulator(), zero());
        assert_eq!(controller.fuel().level(), fuel);
        assert_eq!(controller.mode(), LocomotionMode::Grounded);
        assert!(!controller.is_boost_engaged());
    }
}
