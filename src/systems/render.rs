//! Frame rendering.
//!
//! Everything is drawn with flat shapes straight from the ECS: platforms,
//! the player (tinted by its animation signals), burst particles, the fuel
//! bar and the full-screen overlays. With [`DebugMode`] on, collider
//! outlines, the ground probe volume and the controller state are drawn on
//! top.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::particle::Particle;
use crate::components::platform::Platform;
use crate::components::player::Player;
use crate::components::signals::Signals;
use crate::components::ttl::Ttl;
use crate::locomotion::Facing;
use crate::locomotion::effects::{PARAM_BOOSTING, PARAM_GROUNDED, PARAM_HAS_FUEL};
use crate::resources::debugmode::DebugMode;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::loadingfader::LoadingFader;
use crate::resources::scrambleblink::ScrambleBlink;

const BACKGROUND: Color = Color::new(24, 20, 37, 255);
const PLATFORM_COLOR: Color = Color::new(92, 105, 159, 255);
const FLOOR_COLOR: Color = Color::new(58, 68, 102, 255);
const PLAYER_GROUNDED: Color = Color::new(254, 174, 52, 255);
const PLAYER_AIRBORNE: Color = Color::new(254, 231, 97, 255);
const PLAYER_BOOSTING: Color = Color::new(228, 59, 68, 255);
const FUEL_FULL: Color = Color::new(99, 199, 77, 255);
const FUEL_EMPTY: Color = Color::new(62, 39, 49, 255);

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(
        color.r,
        color.g,
        color.b,
        (color.a as f32 * alpha.clamp(0.0, 1.0)) as u8,
    )
}

fn player_color(signals: Option<&Signals>) -> Color {
    let Some(signals) = signals else {
        return PLAYER_GROUNDED;
    };
    if signals.has_flag(PARAM_BOOSTING) {
        PLAYER_BOOSTING
    } else if signals.has_flag(PARAM_GROUNDED) {
        PLAYER_GROUNDED
    } else {
        PLAYER_AIRBORNE
    }
}

#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    state: Res<GameState>,
    config: Res<GameConfig>,
    debug: Option<Res<DebugMode>>,
    fader: Option<Res<LoadingFader>>,
    blink: Option<Res<ScrambleBlink>>,
    platforms: Query<(&MapPosition, &BoxCollider, &Platform)>,
    players: Query<(&Player, &MapPosition, &BoxCollider, Option<&Signals>)>,
    particles: Query<(&Particle, &MapPosition, Option<&Ttl>)>,
) {
    let (width, height) = (config.window_width as i32, config.window_height as i32);
    let mut d = rl.begin_drawing(&th);
    d.clear_background(BACKGROUND);

    if matches!(state.get(), GameStates::Menu) {
        d.draw_text("MALDIMENSIONAL", width / 2 - 120, height / 3, 30, Color::RAYWHITE);
        d.draw_text(
            "ENTER to play  -  ESC to quit",
            width / 2 - 110,
            height / 3 + 50,
            14,
            Color::LIGHTGRAY,
        );
    }

    for (position, collider, platform) in platforms.iter() {
        let (x, y, w, h) = collider.rect(position.pos);
        let color = if platform.index.is_some() {
            PLATFORM_COLOR
        } else {
            FLOOR_COLOR
        };
        d.draw_rectangle_rec(Rectangle::new(x, y, w, h), color);
    }

    for (particle, position, ttl) in particles.iter() {
        let alpha = ttl.map(Ttl::fraction_left).unwrap_or(1.0);
        let half = particle.size * 0.5;
        d.draw_rectangle_rec(
            Rectangle::new(
                position.pos.x - half,
                position.pos.y - half,
                particle.size,
                particle.size,
            ),
            with_alpha(particle.color, alpha),
        );
    }

    for (player, position, collider, signals) in players.iter() {
        let (x, y, w, h) = collider.rect(position.pos);
        d.draw_rectangle_rec(Rectangle::new(x, y, w, h), player_color(signals));

        // Eye on the facing side.
        let eye_x = match player.controller.facing() {
            Facing::Right => x + w - 4.0,
            Facing::Left => x + 1.0,
        };
        d.draw_rectangle_rec(Rectangle::new(eye_x, y + 3.0, 3.0, 3.0), BACKGROUND);

        let fuel = player.controller.fuel().fraction();
        let bar = Rectangle::new(10.0, 10.0, 80.0, 6.0);
        d.draw_rectangle_rec(bar, FUEL_EMPTY);
        let fuel_color = match signals {
            Some(s) if !s.has_flag(PARAM_HAS_FUEL) => PLAYER_BOOSTING,
            _ => FUEL_FULL,
        };
        d.draw_rectangle_rec(
            Rectangle::new(bar.x, bar.y, bar.width * fuel, bar.height),
            fuel_color,
        );
        d.draw_rectangle_lines_ex(bar, 1.0, Color::RAYWHITE);
    }

    if blink.is_some_and(|b| b.flash_visible()) {
        d.draw_rectangle(0, 0, width, height, with_alpha(Color::WHITE, 0.6));
    }

    if let Some(fader) = fader {
        let alpha = fader.overlay_alpha();
        if alpha > 0.0 {
            d.draw_rectangle(0, 0, width, height, with_alpha(Color::BLACK, alpha));
        }
    }

    if debug.is_some() {
        for (position, collider, _) in platforms.iter() {
            let (x, y, w, h) = collider.rect(position.pos);
            d.draw_rectangle_lines_ex(Rectangle::new(x, y, w, h), 1.0, Color::RED);
        }
        for (player, position, collider, _) in players.iter() {
            let controller = &player.controller;
            let (min, max) = collider.aabb(position.pos);
            d.draw_rectangle_lines_ex(
                Rectangle::new(min.x, min.y, max.x - min.x, max.y - min.y),
                1.0,
                Color::RED,
            );
            let probe_color = if controller.is_grounded() {
                Color::GREEN
            } else {
                Color::ORANGE
            };
            d.draw_rectangle_lines_ex(
                Rectangle::new(min.x, max.y, max.x - min.x, controller.sensor().probe_depth),
                1.0,
                probe_color,
            );
            let text = format!(
                "{:?} fuel {:.2} paused {}",
                controller.mode(),
                controller.fuel().level(),
                controller.is_paused()
            );
            d.draw_text(&text, 10, 22, 10, Color::RAYWHITE);
        }
        d.draw_fps(width - 90, 10);
    }
}
