// src/draw/mod.rs
// Drawing surface abstraction and the node glyph geometry.
// The core only issues primitive calls through `Surface`; the nannou
// adapter is one implementation of it.

pub mod glyph_draw;
pub mod nannou_surface;

#[cfg(test)]
pub(crate) mod recording;

pub use nannou_surface::NannouSurface;

use crate::config::Color;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    #[default]
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub stroke_width: f32,
    pub cap: LineCap,
}

/// A 2D canvas with a top-left origin and a y-down axis.
/// Rotations are in degrees, clockwise on screen.
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    fn clear(&mut self, color: Color);
    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, paint: &Paint);
    fn draw_circle(&mut self, cx: f32, cy: f32, r: f32, paint: &Paint);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: f32, dy: f32);
    fn rotate(&mut self, degrees: f32);
}
