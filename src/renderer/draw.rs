//! Minimal drawing capability set
//!
//! The render pass depends only on this trait. Platform code supplies the
//! implementation: Canvas 2D in the browser, a command recorder in tests.

use crate::Color;

/// A 2D drawing target with fixed pixel dimensions
pub trait DrawSurface {
    /// Fill the whole surface with one color
    fn clear(&mut self, color: Color);

    /// Filled axis-aligned rectangle, `(x, y)` top-left
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);

    /// Filled circle, `(x, y)` center
    fn fill_circle(&mut self, x: f32, y: f32, r: f32, color: Color);
}
