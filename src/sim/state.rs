//! Game state and core simulation types
//!
//! Every entity is created once at session start and mutated in place each
//! tick; nothing is destroyed or reallocated for the life of the process.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::Color;
use crate::consts::*;

/// The fixed play field boundaries, immutable for the session
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

/// A paddle entity
///
/// `pos` is the top-left corner. `pos.x` never changes after construction;
/// `pos.y` is driven by pointer input (player) or the tracking heuristic
/// (opponent) and is always clamped into the arena.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Color,
    /// Tracking speed in pixels per tick. Only the opponent paddle has one.
    pub tracking_speed: Option<f32>,
}

impl Paddle {
    fn new(x: f32, arena: &Arena, color: Color, tracking_speed: Option<f32>) -> Self {
        Self {
            pos: Vec2::new(x, arena.height / 2.0 - PADDLE_HEIGHT / 2.0),
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            color,
            tracking_speed,
        }
    }

    /// Left paddle, pointer-driven
    pub fn player(arena: &Arena) -> Self {
        Self::new(PADDLE_MARGIN, arena, PLAYER_COLOR, None)
    }

    /// Right paddle, driven by the tracking heuristic
    pub fn opponent(arena: &Arena) -> Self {
        Self::new(
            arena.width - PADDLE_WIDTH - PADDLE_MARGIN,
            arena,
            OPPONENT_COLOR,
            Some(OPPONENT_SPEED),
        )
    }

    /// Vertical center of the paddle face
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Assign `y`, clamped into `[0, arena height - paddle height]`
    pub fn set_y_clamped(&mut self, y: f32, arena: &Arena) {
        self.pos.y = y.clamp(0.0, arena.height - self.size.y);
    }
}

/// The ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    pub radius: f32,
    /// Magnitude basis for velocity recomputation on paddle bounces.
    /// Grows by `SPEED_INCREMENT` per contact, uncapped.
    pub speed: f32,
    pub vel: Vec2,
    pub color: Color,
}

impl Ball {
    pub fn new(arena: &Arena) -> Self {
        Self {
            pos: Vec2::new(arena.width / 2.0, arena.height / 2.0),
            radius: BALL_RADIUS,
            speed: BALL_START_SPEED,
            vel: Vec2::splat(BALL_START_SPEED),
            color: BALL_COLOR,
        }
    }

    /// Reinitialize the ball after it left the field horizontally.
    ///
    /// Position goes back to the arena center and `speed` to its base
    /// value. `vel.x` is negated, keeping its pre-reset magnitude, so the
    /// ball returns toward the side it just exited; the vertical sign is
    /// drawn from the seeded RNG.
    pub fn reset(&mut self, arena: &Arena, rng: &mut Pcg32) {
        self.pos = Vec2::new(arena.width / 2.0, arena.height / 2.0);
        self.speed = BALL_START_SPEED;
        self.vel.x = -self.vel.x;
        self.vel.y = if rng.random::<bool>() {
            self.speed
        } else {
            -self.speed
        };
    }
}

/// Complete simulation state, passed by reference into the tick and the
/// renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub arena: Arena,
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
}

impl GameState {
    /// Create the session state for a surface of the given dimensions
    pub fn new(width: f32, height: f32) -> Self {
        let arena = Arena { width, height };
        Self {
            player: Paddle::player(&arena),
            opponent: Paddle::opponent(&arena),
            ball: Ball::new(&arena),
            arena,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_initial_layout() {
        let state = GameState::new(800.0, 500.0);

        assert_eq!(state.player.pos.x, PADDLE_MARGIN);
        assert_eq!(state.opponent.pos.x, 800.0 - PADDLE_WIDTH - PADDLE_MARGIN);
        // Both paddles start vertically centered
        assert_eq!(state.player.pos.y, 250.0 - PADDLE_HEIGHT / 2.0);
        assert_eq!(state.opponent.pos.y, state.player.pos.y);

        assert_eq!(state.ball.pos, Vec2::new(400.0, 250.0));
        assert_eq!(state.ball.speed, BALL_START_SPEED);
        assert_eq!(state.ball.vel, Vec2::splat(BALL_START_SPEED));

        assert!(state.player.tracking_speed.is_none());
        assert_eq!(state.opponent.tracking_speed, Some(OPPONENT_SPEED));
    }

    #[test]
    fn test_reset_restores_base_fields() {
        let arena = Arena {
            width: 800.0,
            height: 500.0,
        };
        let mut ball = Ball::new(&arena);
        let mut rng = Pcg32::seed_from_u64(1);

        ball.pos = Vec2::new(-20.0, 77.0);
        ball.speed = 8.6;
        ball.vel = Vec2::new(-6.0, 2.5);

        ball.reset(&arena, &mut rng);

        assert_eq!(ball.pos, Vec2::new(400.0, 250.0));
        assert_eq!(ball.speed, BALL_START_SPEED);
        // Horizontal velocity flips but keeps its grown magnitude
        assert_eq!(ball.vel.x, 6.0);
        assert_eq!(ball.vel.y.abs(), BALL_START_SPEED);
    }

    #[test]
    fn test_reset_vertical_sign_varies() {
        let arena = Arena {
            width: 800.0,
            height: 500.0,
        };
        let mut ball = Ball::new(&arena);
        let mut rng = Pcg32::seed_from_u64(3);

        let mut ups = 0;
        let mut downs = 0;
        for _ in 0..64 {
            ball.reset(&arena, &mut rng);
            if ball.vel.y > 0.0 {
                downs += 1;
            } else {
                ups += 1;
            }
        }
        assert!(ups > 0 && downs > 0);
    }

    #[test]
    fn test_set_y_clamped() {
        let arena = Arena {
            width: 800.0,
            height: 500.0,
        };
        let mut paddle = Paddle::player(&arena);

        paddle.set_y_clamped(-30.0, &arena);
        assert_eq!(paddle.pos.y, 0.0);

        paddle.set_y_clamped(1000.0, &arena);
        assert_eq!(paddle.pos.y, arena.height - paddle.size.y);

        paddle.set_y_clamped(120.0, &arena);
        assert_eq!(paddle.pos.y, 120.0);
    }
}
