//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::collides;
pub use state::{Arena, Ball, GameState, Paddle};
pub use tick::{TickInput, tick};
