//! Stateless rendering pass
//!
//! Projects the current `GameState` onto a `DrawSurface` in a fixed order:
//! background, net, player paddle, opponent paddle, ball. Reads state,
//! mutates nothing.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod draw;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use draw::DrawSurface;

use crate::consts::*;
use crate::sim::GameState;

/// Render the current frame
pub fn render(state: &GameState, surface: &mut dyn DrawSurface) {
    surface.clear(BACKGROUND_COLOR);

    draw_net(state, surface);

    let player = &state.player;
    surface.fill_rect(
        player.pos.x,
        player.pos.y,
        player.size.x,
        player.size.y,
        player.color,
    );

    let opponent = &state.opponent;
    surface.fill_rect(
        opponent.pos.x,
        opponent.pos.y,
        opponent.size.x,
        opponent.size.y,
        opponent.color,
    );

    let ball = &state.ball;
    surface.fill_circle(ball.pos.x, ball.pos.y, ball.radius, ball.color);
}

/// Vertical dashed line of fixed-height segments at the horizontal midpoint
fn draw_net(state: &GameState, surface: &mut dyn DrawSurface) {
    let x = state.arena.width / 2.0 - NET_WIDTH / 2.0;
    let mut y = 0.0;
    while y < state.arena.height {
        surface.fill_rect(x, y, NET_WIDTH, NET_SEGMENT_HEIGHT, NET_COLOR);
        y += NET_SEGMENT_SPACING;
    }
}
