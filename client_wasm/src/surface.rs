//! 2D drawing primitives the renderer needs from the host

use game_core::Color;
use glam::Vec2;

/// A fixed-size 2D drawing region.
///
/// Implemented for the browser's `CanvasRenderingContext2d`; tests use a
/// recorder.
pub trait DrawSurface {
    type Error;

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> Result<(), Self::Error>;

    fn fill_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    ) -> Result<(), Self::Error>;

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) -> Result<(), Self::Error>;

    fn stroke_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        line_width: f32,
        color: Color,
    ) -> Result<(), Self::Error>;
}
