//! Ball/paddle collision detection
//!
//! A single pure predicate: the ball's bounding circle against the
//! paddle's axis-aligned box, via four simultaneous edge inequalities.

use super::state::{Ball, Paddle};

/// Returns true iff the ball's bounding circle overlaps the paddle's box.
///
/// All four inequalities must hold at once: ball left edge before the
/// paddle's right, ball right edge past the paddle's left, ball bottom
/// below the paddle's top, ball top above the paddle's bottom.
#[inline]
pub fn collides(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.x - ball.radius < paddle.pos.x + paddle.size.x
        && ball.pos.x + ball.radius > paddle.pos.x
        && ball.pos.y + ball.radius > paddle.pos.y
        && ball.pos.y - ball.radius < paddle.pos.y + paddle.size.y
}
