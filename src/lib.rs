//! Rally Pong - a two-paddle rally game for the browser canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collision, per-tick update)
//! - `renderer`: Stateless projection of sim state onto a 2D draw surface
//! - `settings`: User preferences persisted in LocalStorage

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    use super::Color;

    /// Default arena dimensions for headless runs; the browser build reads
    /// the canvas size instead.
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Horizontal gap between each paddle and its wall
    pub const PADDLE_MARGIN: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_SPEED: f32 = 5.0;
    /// Speed gained on each paddle contact. The sole difficulty ramp;
    /// there is no upper bound.
    pub const SPEED_INCREMENT: f32 = 0.2;
    /// Bounce angle at the very edge of a paddle face
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    /// Opponent tracking speed (pixels per tick)
    pub const OPPONENT_SPEED: f32 = 4.0;
    /// Band around the opponent's center inside which it holds still
    pub const OPPONENT_DEAD_ZONE: f32 = 20.0;

    /// Net segment geometry (vertical dashed line at the midpoint)
    pub const NET_WIDTH: f32 = 2.0;
    pub const NET_SEGMENT_HEIGHT: f32 = 15.0;
    pub const NET_SEGMENT_SPACING: f32 = 25.0;

    /// Reference tick rate for the optional delta-time mode
    pub const REFERENCE_TICK_RATE: f32 = 60.0;

    /// Entity and surface colors
    pub const PLAYER_COLOR: Color = Color::rgb(0x4c, 0xaf, 0x50);
    pub const OPPONENT_COLOR: Color = Color::rgb(0xf4, 0x43, 0x36);
    pub const BALL_COLOR: Color = Color::rgb(0xff, 0xd6, 0x00);
    pub const NET_COLOR: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BACKGROUND_COLOR: Color = Color::rgb(0x22, 0x22, 0x22);
}

/// Solid RGB color, used both as the entity color tag and by the draw
/// surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex string, e.g. `#ffd600`
    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_css() {
        assert_eq!(consts::PLAYER_COLOR.to_css(), "#4caf50");
        assert_eq!(Color::rgb(0, 0, 0).to_css(), "#000000");
    }
}
