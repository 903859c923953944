// src/draw/nannou_surface.rs
//
// Surface adapter over nannou's Draw.
// nannou draws with the origin at the window center and y up; the
// surface flips that to a top-left origin with y down.

use nannou::prelude::*;

use super::{LineCap, Paint, Surface};
use crate::config::Color;

pub struct NannouSurface {
    root: Draw,
    current: Draw,
    saved: Vec<Draw>,
    width: f32,
    height: f32,
}

impl NannouSurface {
    pub fn new(draw: &Draw, rect: Rect) -> Self {
        let current = draw.x_y(rect.left(), rect.top()).scale_y(-1.0);
        Self {
            root: draw.clone(),
            current,
            saved: Vec::new(),
            width: rect.w(),
            height: rect.h(),
        }
    }

    /// Number of transforms saved and not yet restored.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }
}

fn to_srgb(color: Color) -> Srgb<u8> {
    rgb8(color.red, color.green, color.blue)
}

impl Surface for NannouSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self, color: Color) {
        self.root.background().color(to_srgb(color));
    }

    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, paint: &Paint) {
        let line = self
            .current
            .line()
            .start(pt2(x0, y0))
            .end(pt2(x1, y1))
            .weight(paint.stroke_width)
            .color(to_srgb(paint.color));
        match paint.cap {
            LineCap::Round => line.caps_round(),
            LineCap::Butt => line.caps_butt(),
        };
    }

    fn draw_circle(&mut self, cx: f32, cy: f32, r: f32, paint: &Paint) {
        self.current
            .ellipse()
            .x_y(cx, cy)
            .radius(r)
            .color(to_srgb(paint.color));
    }

    fn save(&mut self) {
        self.saved.push(self.current.clone());
    }

    fn restore(&mut self) {
        match self.saved.pop() {
            Some(draw) => self.current = draw,
            None => log::warn!("restore called without a matching save"),
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.current = self.current.x_y(dx, dy);
    }

    fn rotate(&mut self, degrees: f32) {
        self.current = self.current.rotate(deg_to_rad(degrees));
    }
}
