//! Per-tick simulation update
//!
//! One invocation advances the whole simulation by a single tick: pointer
//! apply, position integration, wall and paddle bounces, out-of-bounds
//! reset, opponent tracking. Velocities are flat per-tick increments when
//! `dt_scale` is 1.0 (the default mode, coupled to the host frame rate);
//! the host passes a scaled factor when delta-time mode is enabled.

use rand_pcg::Pcg32;

use super::collision::collides;
use super::state::{Ball, GameState, Paddle};
use crate::consts::*;

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Latest pointer vertical coordinate, relative to the surface top edge
    pub pointer_y: Option<f32>,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput, rng: &mut Pcg32, dt_scale: f32) {
    let arena = state.arena;

    // Pointer drives the player paddle; the sim only centers and clamps.
    if let Some(pointer_y) = input.pointer_y {
        let y = pointer_y - state.player.size.y / 2.0;
        state.player.set_y_clamped(y, &arena);
    }

    let ball = &mut state.ball;

    // Integrate position
    ball.pos += ball.vel * dt_scale;

    // Top/bottom wall bounce. Velocity flip only, no position correction;
    // tunneling at extreme speed is accepted.
    if ball.pos.y - ball.radius < 0.0 || ball.pos.y + ball.radius > arena.height {
        ball.vel.y = -ball.vel.y;
    }

    // Paddle bounces: player sends the ball rightward, opponent leftward
    if collides(ball, &state.player) {
        bounce(ball, &state.player, 1.0);
    }
    if collides(ball, &state.opponent) {
        bounce(ball, &state.opponent, -1.0);
    }

    // Ball left the field horizontally
    if ball.pos.x - ball.radius < 0.0 || ball.pos.x + ball.radius > arena.width {
        log::debug!("ball out at x={:.1}, resetting", ball.pos.x);
        ball.reset(&arena, rng);
    }

    track_ball(state, dt_scale);
}

/// Recompute ball velocity from the contact point on a paddle face.
///
/// The offset of the ball center from the paddle center maps linearly to a
/// bounce angle of up to ±π/4. Contact beyond the paddle's vertical span
/// can produce offsets outside [-1, 1]; those are taken as-is.
fn bounce(ball: &mut Ball, paddle: &Paddle, dir: f32) {
    let offset = (ball.pos.y - paddle.center_y()) / (paddle.size.y / 2.0);
    let angle = offset * MAX_BOUNCE_ANGLE;
    ball.vel.x = dir * ball.speed * angle.cos();
    ball.vel.y = ball.speed * angle.sin();
    ball.speed += SPEED_INCREMENT;
}

/// Move the opponent paddle toward the ball.
///
/// A dead-zone around the paddle center prevents jitter when the ball is
/// nearly level with it. The resulting y is clamped every tick.
fn track_ball(state: &mut GameState, dt_scale: f32) {
    let Some(speed) = state.opponent.tracking_speed else {
        return;
    };

    let center = state.opponent.center_y();
    let ball_y = state.ball.pos.y;
    let mut y = state.opponent.pos.y;

    if ball_y < center - OPPONENT_DEAD_ZONE {
        y -= speed * dt_scale;
    } else if ball_y > center + OPPONENT_DEAD_ZONE {
        y += speed * dt_scale;
    }

    let arena = state.arena;
    state.opponent.set_y_clamped(y, &arena);
}
