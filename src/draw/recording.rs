// src/draw/recording.rs
// A Surface that records draw calls for tests.

use super::{Paint, Surface};
use crate::config::Color;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(Color),
    Line { x0: f32, y0: f32, x1: f32, y1: f32, paint: Paint },
    Circle { cx: f32, cy: f32, r: f32, paint: Paint },
    Save,
    Restore,
    Translate(f32, f32),
    Rotate(f32),
}

pub struct RecordingSurface {
    pub width: f32,
    pub height: f32,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn lines(&self) -> Vec<&DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
            .collect()
    }

    pub fn circles(&self) -> Vec<&DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
            .collect()
    }

    pub fn translations(&self) -> Vec<(f32, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Translate(x, y) => Some((*x, *y)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self, color: Color) {
        self.ops.push(DrawOp::Clear(color));
    }

    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, paint: &Paint) {
        self.ops.push(DrawOp::Line {
            x0,
            y0,
            x1,
            y1,
            paint: *paint,
        });
    }

    fn draw_circle(&mut self, cx: f32, cy: f32, r: f32, paint: &Paint) {
        self.ops.push(DrawOp::Circle {
            cx,
            cy,
            r,
            paint: *paint,
        });
    }

    fn save(&mut self) {
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(DrawOp::Restore);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.ops.push(DrawOp::Translate(dx, dy));
    }

    fn rotate(&mut self, degrees: f32) {
        self.ops.push(DrawOp::Rotate(degrees));
    }
}
